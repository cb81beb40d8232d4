//! Drag and drop vocabulary.
//!
//! This module provides the flag sets and results shared by drag sources,
//! drop destinations and the [`DragSession`](crate::DragSession) that connects
//! them.

use crate::mouse;

bitflags::bitflags! {
    /// The actions a drag may perform when it is dropped.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DragAction: u8 {
        /// Copy the data.
        const COPY = 1 << 0;
        /// Move the data.
        const MOVE = 1 << 1;
        /// Create a link to the data.
        const LINK = 1 << 2;
        /// Ask the user what action to perform.
        const ASK = 1 << 3;
    }
}

impl DragAction {
    /// Returns the action a drag offering these actions suggests.
    ///
    /// Preference order is copy, move, link, ask. Returns an empty set when
    /// nothing is offered.
    pub fn suggested(self) -> DragAction {
        [
            DragAction::COPY,
            DragAction::MOVE,
            DragAction::LINK,
            DragAction::ASK,
        ]
        .into_iter()
        .find(|action| self.contains(*action))
        .unwrap_or_else(DragAction::empty)
    }
}

bitflags::bitflags! {
    /// The behaviors a drop destination gets for free.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DestDefaults: u8 {
        /// Accept the drag while hovering when targets and actions match.
        const MOTION = 1 << 0;
        /// Highlight the destination while a drag hovers it.
        const HIGHLIGHT = 1 << 1;
        /// Request and deliver the data when the drag is released.
        const DROP = 1 << 2;
        /// All of the above.
        const ALL = Self::MOTION.bits() | Self::HIGHLIGHT.bits() | Self::DROP.bits();
    }
}

bitflags::bitflags! {
    /// The mouse buttons that may start a drag from a source.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ButtonMask: u8 {
        /// The primary (left) button.
        const BUTTON1 = 1 << 0;
        /// The middle button.
        const BUTTON2 = 1 << 1;
        /// The secondary (right) button.
        const BUTTON3 = 1 << 2;
    }
}

impl ButtonMask {
    /// Returns the mask bit for the given mouse button.
    ///
    /// Extra buttons have no mask bit and never start a drag.
    pub fn from_button(button: mouse::Button) -> ButtonMask {
        match button {
            mouse::Button::Left => ButtonMask::BUTTON1,
            mouse::Button::Middle => ButtonMask::BUTTON2,
            mouse::Button::Right => ButtonMask::BUTTON3,
            mouse::Button::Back | mouse::Button::Forward | mouse::Button::Other(_) => {
                ButtonMask::empty()
            }
        }
    }

    /// Returns `true` if this mask allows the given button.
    pub fn allows(self, button: mouse::Button) -> bool {
        let bit = ButtonMask::from_button(button);
        !bit.is_empty() && self.contains(bit)
    }
}

/// The result of a completed drag operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// The drag was completed with the given action.
    Dropped(DragAction),
    /// The drag was cancelled, released outside a destination or refused.
    Cancelled,
}

impl DropResult {
    /// Returns `true` if the drag was successfully dropped.
    pub fn is_dropped(&self) -> bool {
        matches!(self, DropResult::Dropped(_))
    }

    /// Returns `true` if the drag was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DropResult::Cancelled)
    }

    /// Returns the action if the drag was dropped, or `None` if cancelled.
    pub fn action(&self) -> Option<DragAction> {
        match self {
            DropResult::Dropped(action) => Some(*action),
            DropResult::Cancelled => None,
        }
    }
}

/// Configuration for drag detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSettings {
    /// Minimum distance (in logical pixels) the cursor must travel with the
    /// button held before a press turns into a drag.
    pub threshold: f32,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self { threshold: 5.0 }
    }
}
