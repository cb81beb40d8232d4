//! Widgets that connect an iced view to a [`DragSession`].
//!
//! [`DragSession`]: drop_test_core::DragSession
pub mod dnd;

pub use dnd::{DragSource, DropDestination};

use drop_test_core::{Input, WidgetId};
use iced::Element;

/// Creates a new [`DragSource`] around the given content.
///
/// The `widget` must be registered with the session as a drag source for a
/// press on the content to start anything.
pub fn drag_source<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    widget: WidgetId,
    on_input: impl Fn(Input) -> Message + 'a,
) -> DragSource<'a, Message, Theme, Renderer> {
    DragSource::new(content, widget, on_input)
}

/// Creates a new [`DropDestination`] around the given content.
pub fn drop_destination<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    widget: WidgetId,
    on_input: impl Fn(Input) -> Message + 'a,
) -> DropDestination<'a, Message, Theme, Renderer> {
    DropDestination::new(content, widget, on_input)
}
