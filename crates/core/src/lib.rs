//! The drag and drop signal engine of `drop_test`.
//!
//! Widgets are registered with a [`DragSession`] as drag sources or drop
//! destinations, each with a [`TargetList`] naming the data types it offers
//! or accepts. Handlers are connected to the [`Signal`]s of those widgets and
//! run while pointer [`Input`] drives a gesture:
//!
//! ```text
//! drag-begin → drag-motion* → drag-leave → drag-data-get → drag-data-received → drag-end
//! ```
//!
//! Nothing is reported when a piece of the wiring is missing; the gesture
//! simply never starts.
pub mod dnd;
pub mod selection;
pub mod session;
pub mod signal;
pub mod target;

mod context;
mod error;

pub use iced_core::{Point, Rectangle, mouse};

pub use context::{DragContext, DragId, WidgetId, WidgetInfo};
pub use dnd::{ButtonMask, DestDefaults, DragAction, DragSettings, DropResult};
pub use error::Error;
pub use selection::SelectionData;
pub use session::{DragSession, Input};
pub use signal::{HandlerId, Signal};
pub use target::{TargetEntry, TargetList};
