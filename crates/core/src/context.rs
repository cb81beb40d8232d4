//! Widgets and drag contexts as seen by signal handlers.
use crate::dnd::DragAction;

use std::borrow::Cow;
use std::fmt;

/// The identifier of a widget registered with a [`DragSession`].
///
/// [`DragSession`]: crate::DragSession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) usize);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a handler gets to know about the widget a signal was emitted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetInfo {
    /// The identifier of the widget.
    pub id: WidgetId,
    /// The label of the widget.
    pub label: String,
}

impl fmt::Display for WidgetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Button {} {:?}>", self.id, self.label)
    }
}

/// The identifier of a single drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragId(pub(crate) u64);

impl fmt::Display for DragId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The state of one drag gesture, shared by every signal it emits.
#[derive(Debug, Clone, PartialEq)]
pub struct DragContext {
    pub(crate) id: DragId,
    pub(crate) source: WidgetId,
    pub(crate) actions: DragAction,
    pub(crate) selected_action: DragAction,
    pub(crate) targets: Vec<Cow<'static, str>>,
    pub(crate) dest: Option<WidgetId>,
}

impl DragContext {
    pub(crate) fn new(
        id: DragId,
        source: WidgetId,
        actions: DragAction,
        targets: Vec<Cow<'static, str>>,
    ) -> Self {
        Self {
            id,
            source,
            actions,
            selected_action: DragAction::empty(),
            targets,
            dest: None,
        }
    }

    /// Returns the identifier of the gesture.
    pub fn id(&self) -> DragId {
        self.id
    }

    /// Returns the widget the drag started from.
    pub fn source(&self) -> WidgetId {
        self.source
    }

    /// Returns the actions offered by the source.
    pub fn actions(&self) -> DragAction {
        self.actions
    }

    /// Returns the action the source suggests.
    pub fn suggested_action(&self) -> DragAction {
        self.actions.suggested()
    }

    /// Returns the action the current destination accepted.
    ///
    /// Empty while no destination accepts the drag.
    pub fn selected_action(&self) -> DragAction {
        self.selected_action
    }

    /// Returns the targets offered by the source, in order of preference.
    pub fn targets(&self) -> &[Cow<'static, str>] {
        &self.targets
    }

    /// Returns the destination currently under the pointer, if any.
    pub fn dest(&self) -> Option<WidgetId> {
        self.dest
    }
}

impl fmt::Display for DragContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<DragContext {} from {} actions={:?}>",
            self.id, self.source, self.actions
        )
    }
}
