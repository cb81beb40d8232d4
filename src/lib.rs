//! A drag and drop test bench built on iced.
//!
//! Register widgets with a [`DragSession`], mark them as sources and
//! destinations, connect handlers and wrap their views with
//! [`drag_source`] and [`drop_destination`]. The session runs the handlers
//! in order as the pointer moves.
pub use drop_test_core as core;
pub use drop_test_widget as widget;

pub use drop_test_core::{
    ButtonMask, DestDefaults, DragAction, DragContext, DragSession, DragSettings, DropResult,
    Error, HandlerId, Input, SelectionData, Signal, TargetEntry, TargetList, WidgetId,
    WidgetInfo,
};
pub use drop_test_widget::{DragSource, DropDestination, drag_source, drop_destination};
