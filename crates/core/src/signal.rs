//! Signals and their handlers.
use crate::context::{DragContext, WidgetInfo};
use crate::selection::SelectionData;

use std::fmt;

/// A drag and drop signal a handler can be connected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Emitted on the source when a drag starts.
    DragBegin,
    /// Emitted on a destination while a drag hovers it.
    DragMotion,
    /// Emitted on a destination when a drag stops hovering it.
    DragLeave,
    /// Emitted on the source when a destination requests the data.
    DragDataGet,
    /// Emitted on a destination once the data was delivered.
    DragDataReceived,
    /// Emitted on the source when a drag finishes, dropped or not.
    DragEnd,
}

impl Signal {
    /// Returns the canonical name of the signal.
    pub fn name(self) -> &'static str {
        match self {
            Signal::DragBegin => "drag-begin",
            Signal::DragMotion => "drag-motion",
            Signal::DragLeave => "drag-leave",
            Signal::DragDataGet => "drag-data-get",
            Signal::DragDataReceived => "drag-data-received",
            Signal::DragEnd => "drag-end",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The identifier of a connected handler, used to disconnect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub(crate) u64);

/// A `drag-begin` handler: `(widget, context)`.
pub type DragBeginFn = dyn FnMut(&WidgetInfo, &DragContext);

/// A `drag-motion` handler: `(widget, context, x, y, time)`.
pub type DragMotionFn = dyn FnMut(&WidgetInfo, &DragContext, i32, i32, u32);

/// A `drag-leave` handler: `(widget, context, time)`.
pub type DragLeaveFn = dyn FnMut(&WidgetInfo, &DragContext, u32);

/// A `drag-data-get` handler: `(widget, context, data, info, time)`.
pub type DragDataGetFn = dyn FnMut(&WidgetInfo, &DragContext, &mut SelectionData, u32, u32);

/// A `drag-data-received` handler: `(widget, context, x, y, data, info, time)`.
pub type DragDataReceivedFn =
    dyn FnMut(&WidgetInfo, &DragContext, i32, i32, &SelectionData, u32, u32);

/// A `drag-end` handler: `(widget, context)`.
pub type DragEndFn = dyn FnMut(&WidgetInfo, &DragContext);

/// The handlers connected to one signal, in connection order.
pub(crate) struct Slots<F: ?Sized> {
    entries: Vec<(HandlerId, Box<F>)>,
}

impl<F: ?Sized> Default for Slots<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F: ?Sized> Slots<F> {
    pub(crate) fn push(&mut self, id: HandlerId, handler: Box<F>) {
        self.entries.push((id, handler));
    }

    pub(crate) fn remove(&mut self, id: HandlerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(handler, _)| *handler != id);

        self.entries.len() != before
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<F>> {
        self.entries.iter_mut().map(|(_, handler)| handler)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The signal table of a single widget.
#[derive(Default)]
pub(crate) struct Signals {
    pub(crate) drag_begin: Slots<DragBeginFn>,
    pub(crate) drag_motion: Slots<DragMotionFn>,
    pub(crate) drag_leave: Slots<DragLeaveFn>,
    pub(crate) drag_data_get: Slots<DragDataGetFn>,
    pub(crate) drag_data_received: Slots<DragDataReceivedFn>,
    pub(crate) drag_end: Slots<DragEndFn>,
}

impl Signals {
    pub(crate) fn disconnect(&mut self, id: HandlerId) -> bool {
        self.drag_begin.remove(id)
            || self.drag_motion.remove(id)
            || self.drag_leave.remove(id)
            || self.drag_data_get.remove(id)
            || self.drag_data_received.remove(id)
            || self.drag_end.remove(id)
    }

    pub(crate) fn count(&self, signal: Signal) -> usize {
        match signal {
            Signal::DragBegin => self.drag_begin.len(),
            Signal::DragMotion => self.drag_motion.len(),
            Signal::DragLeave => self.drag_leave.len(),
            Signal::DragDataGet => self.drag_data_get.len(),
            Signal::DragDataReceived => self.drag_data_received.len(),
            Signal::DragEnd => self.drag_end.len(),
        }
    }
}
