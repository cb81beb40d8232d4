//! Drag and drop widget wrappers.
//!
//! This module provides widgets that feed a [`DragSession`] with the pointer
//! input it needs:
//! - [`DragSource`] - Reports presses, motion and releases on a drag source
//! - [`DropDestination`] - Reports where a drop destination is and draws its
//!   highlight
//!
//! Both report their bounds as [`Input::Allocate`] whenever layout moves
//! them, so the session can hit-test destinations in window coordinates.
//!
//! [`DragSession`]: drop_test_core::DragSession
use drop_test_core::{Input, WidgetId};

use iced::advanced::layout;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{Operation, Tree, tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::keyboard::{self, key};
use iced::mouse;
use iced::touch;
use iced::window;
use iced::{Border, Color, Element, Event, Length, Rectangle, Size, Vector};

// ============================================================================
// DragSource Widget
// ============================================================================

/// A widget wrapper that turns pointer events on its content into drag
/// source [`Input`].
pub struct DragSource<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    widget: WidgetId,
    on_input: Box<dyn Fn(Input) -> Message + 'a>,
    dragging: bool,
}

impl<'a, Message, Theme, Renderer> DragSource<'a, Message, Theme, Renderer> {
    /// Creates a new [`DragSource`] for the registered `widget`.
    ///
    /// Every [`Input`] is turned into a message with `on_input`.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        widget: WidgetId,
        on_input: impl Fn(Input) -> Message + 'a,
    ) -> Self {
        DragSource {
            content: content.into(),
            widget,
            on_input: Box::new(on_input),
            dragging: false,
        }
    }

    /// Sets whether a drag from this source is in progress.
    ///
    /// Only changes the mouse cursor.
    #[must_use]
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }
}

/// Local state of the [`DragSource`] widget.
#[derive(Default)]
struct SourceState {
    /// The button held since a press on the source
    pressed: Option<mouse::Button>,
    /// The last bounds reported
    allocation: Option<Rectangle>,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for DragSource<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<SourceState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(SourceState::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        // The wrapped button captures presses, so we do not stop at a
        // captured event.
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let state: &mut SourceState = tree.state.downcast_mut();
        let bounds = layout.bounds();

        if state.allocation != Some(bounds) {
            state.allocation = Some(bounds);
            shell.publish((self.on_input)(Input::Allocate {
                widget: self.widget,
                bounds,
            }));
        }

        let input = match event {
            Event::Mouse(mouse::Event::ButtonPressed(button)) if state.pressed.is_none() => cursor
                .position_over(bounds)
                .map(|position| {
                    state.pressed = Some(*button);

                    Input::Press {
                        widget: self.widget,
                        button: *button,
                        position,
                    }
                }),
            Event::Touch(touch::Event::FingerPressed { position, .. })
                if state.pressed.is_none() && bounds.contains(*position) =>
            {
                state.pressed = Some(mouse::Button::Left);

                Some(Input::Press {
                    widget: self.widget,
                    button: mouse::Button::Left,
                    position: *position,
                })
            }
            Event::Mouse(mouse::Event::CursorMoved { position })
            | Event::Touch(touch::Event::FingerMoved { position, .. })
                if state.pressed.is_some() =>
            {
                Some(Input::Motion {
                    position: *position,
                })
            }
            Event::Mouse(mouse::Event::ButtonReleased(button))
                if state.pressed == Some(*button) =>
            {
                state.pressed = None;

                Some(Input::Release { button: *button })
            }
            Event::Touch(touch::Event::FingerLifted { .. }) if state.pressed.is_some() => {
                state.pressed = None;

                Some(Input::Release {
                    button: mouse::Button::Left,
                })
            }
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            })
            | Event::Touch(touch::Event::FingerLost { .. })
            | Event::Window(window::Event::Unfocused)
                if state.pressed.is_some() =>
            {
                state.pressed = None;

                Some(Input::Cancel)
            }
            _ => None,
        };

        if let Some(input) = input {
            log::trace!("drag source {}: {input:?}", self.widget);
            shell.publish((self.on_input)(input));
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let state: &SourceState = tree.state.downcast_ref();

        if self.dragging {
            mouse::Interaction::Grabbing
        } else if state.pressed.is_some() {
            mouse::Interaction::Grab
        } else {
            self.content.as_widget().mouse_interaction(
                &tree.children[0],
                layout,
                cursor,
                viewport,
                renderer,
            )
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        renderer_style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            renderer_style,
            layout,
            cursor,
            viewport,
        );
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<DragSource<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: 'a + renderer::Renderer,
{
    fn from(source: DragSource<'a, Message, Theme, Renderer>) -> Self {
        Element::new(source)
    }
}

// ============================================================================
// DropDestination Widget
// ============================================================================

/// A widget wrapper that makes its content a drop destination.
///
/// The session does the hit-testing; this widget only tells it where the
/// destination is and draws the highlight the session asks for.
pub struct DropDestination<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    widget: WidgetId,
    on_input: Box<dyn Fn(Input) -> Message + 'a>,
    highlighted: bool,
}

impl<'a, Message, Theme, Renderer> DropDestination<'a, Message, Theme, Renderer> {
    /// Creates a new [`DropDestination`] for the registered `widget`.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        widget: WidgetId,
        on_input: impl Fn(Input) -> Message + 'a,
    ) -> Self {
        DropDestination {
            content: content.into(),
            widget,
            on_input: Box::new(on_input),
            highlighted: false,
        }
    }

    /// Sets whether the destination is drawn highlighted.
    #[must_use]
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

/// Local state of the [`DropDestination`] widget.
#[derive(Default)]
struct DestinationState {
    /// The last bounds reported
    allocation: Option<Rectangle>,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for DropDestination<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<DestinationState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(DestinationState::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let state: &mut DestinationState = tree.state.downcast_mut();
        let bounds = layout.bounds();

        if state.allocation != Some(bounds) {
            state.allocation = Some(bounds);
            shell.publish((self.on_input)(Input::Allocate {
                widget: self.widget,
                bounds,
            }));
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        renderer_style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            renderer_style,
            layout,
            cursor,
            viewport,
        );

        if self.highlighted {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: layout.bounds(),
                    border: Border {
                        color: Color::from_rgba(0.2, 0.5, 1.0, 0.6),
                        width: 2.0,
                        radius: 4.0.into(),
                    },
                    ..renderer::Quad::default()
                },
                Color::from_rgba(0.2, 0.5, 1.0, 0.15),
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<DropDestination<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: 'a + renderer::Renderer,
{
    fn from(destination: DropDestination<'a, Message, Theme, Renderer>) -> Self {
        Element::new(destination)
    }
}

#[cfg(test)]
mod tests;
