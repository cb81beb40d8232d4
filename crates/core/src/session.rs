//! The drag and drop signal engine.
//!
//! A [`DragSession`] knows which widgets are drag sources and drop
//! destinations, turns raw pointer [`Input`] into drag gestures and emits the
//! drag signals on the widgets involved.
//!
//! A gesture that is not wired up completely does nothing at all: a source
//! without targets, or a source whose targets no destination accepts, never
//! emits a single signal.
use crate::context::{DragContext, DragId, WidgetId, WidgetInfo};
use crate::dnd::{ButtonMask, DestDefaults, DragAction, DragSettings, DropResult};
use crate::selection::SelectionData;
use crate::signal::{
    DragBeginFn, DragDataGetFn, DragDataReceivedFn, DragEndFn, DragLeaveFn, DragMotionFn,
    HandlerId, Signal, Signals, Slots,
};
use crate::target::TargetList;
use crate::{Point, Rectangle, mouse};

use std::time::Instant;

/// Pointer input fed into a [`DragSession`] by the widget layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// A widget was laid out at the given bounds.
    Allocate {
        /// The widget.
        widget: WidgetId,
        /// Its bounds, in window coordinates.
        bounds: Rectangle,
    },
    /// A mouse button was pressed on a widget.
    Press {
        /// The widget under the pointer.
        widget: WidgetId,
        /// The pressed button.
        button: mouse::Button,
        /// The pointer position, in window coordinates.
        position: Point,
    },
    /// The pointer moved while a button was held.
    Motion {
        /// The pointer position, in window coordinates.
        position: Point,
    },
    /// A mouse button was released.
    Release {
        /// The released button.
        button: mouse::Button,
    },
    /// The gesture was aborted (e.g. Escape was pressed or the window lost
    /// focus).
    Cancel,
}

struct Source {
    buttons: ButtonMask,
    targets: TargetList,
    actions: DragAction,
}

struct Dest {
    defaults: DestDefaults,
    targets: TargetList,
    actions: DragAction,
}

impl Dest {
    fn accepts(&self, context: &DragContext) -> bool {
        self.defaults.contains(DestDefaults::MOTION) && self.actions.intersects(context.actions)
    }

    fn select(&self, context: &DragContext) -> DragAction {
        let suggested = context.suggested_action();

        if self.actions.contains(suggested) {
            suggested
        } else {
            (self.actions & context.actions).suggested()
        }
    }
}

struct Entry {
    info: WidgetInfo,
    allocation: Option<Rectangle>,
    source: Option<Source>,
    dest: Option<Dest>,
    signals: Signals,
}

#[derive(Default)]
enum Gesture {
    #[default]
    Idle,
    Pending {
        source: WidgetId,
        button: mouse::Button,
        origin: Point,
    },
    Dragging(Drag),
}

struct Drag {
    context: DragContext,
    button: mouse::Button,
    hover: Option<Hover>,
}

#[derive(Clone, Copy)]
struct Hover {
    dest: WidgetId,
    position: Point,
    accepted: bool,
    /// Whether the destination got `drag-motion`, and so is owed a
    /// `drag-leave`.
    tracked: bool,
}

/// The registry of drag sources and drop destinations of a window, and the
/// state of the gesture in progress.
pub struct DragSession {
    settings: DragSettings,
    widgets: Vec<Entry>,
    gesture: Gesture,
    next_drag: u64,
    next_handler: u64,
    epoch: Instant,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(DragSettings::default())
    }
}

impl DragSession {
    /// Creates an empty [`DragSession`] with the given settings.
    pub fn new(settings: DragSettings) -> Self {
        Self {
            settings,
            widgets: Vec::new(),
            gesture: Gesture::Idle,
            next_drag: 1,
            next_handler: 1,
            epoch: Instant::now(),
        }
    }

    /// Returns the settings of the session.
    pub fn settings(&self) -> &DragSettings {
        &self.settings
    }

    /// Registers a widget with the given label and returns its id.
    pub fn add_widget(&mut self, label: impl Into<String>) -> WidgetId {
        let id = WidgetId(self.widgets.len());

        self.widgets.push(Entry {
            info: WidgetInfo {
                id,
                label: label.into(),
            },
            allocation: None,
            source: None,
            dest: None,
            signals: Signals::default(),
        });

        id
    }

    /// Returns what handlers see of the given widget.
    pub fn widget(&self, widget: WidgetId) -> Option<&WidgetInfo> {
        self.widgets.get(widget.0).map(|entry| &entry.info)
    }

    /// Returns the last reported bounds of the given widget.
    pub fn allocation(&self, widget: WidgetId) -> Option<Rectangle> {
        self.widgets.get(widget.0).and_then(|entry| entry.allocation)
    }

    /// Makes a widget a drag source.
    ///
    /// A drag starts when one of the `buttons` is pressed on the widget and
    /// the pointer travels past the drag threshold. It offers `targets` and
    /// `actions` to destinations. An empty target list is allowed but no
    /// drag will start until targets are added.
    pub fn drag_source_set(
        &mut self,
        widget: WidgetId,
        buttons: ButtonMask,
        targets: TargetList,
        actions: DragAction,
    ) {
        match self.widgets.get_mut(widget.0) {
            Some(entry) => {
                entry.source = Some(Source {
                    buttons,
                    targets,
                    actions,
                });
            }
            None => log::debug!("drag_source_set: unknown widget {widget}"),
        }
    }

    /// Stops a widget from being a drag source.
    pub fn drag_source_unset(&mut self, widget: WidgetId) {
        if let Some(entry) = self.widgets.get_mut(widget.0) {
            entry.source = None;
        }
    }

    /// Adds the plain text targets to a drag source.
    ///
    /// Does nothing if the widget is not a drag source yet.
    pub fn drag_source_add_text_targets(&mut self, widget: WidgetId) {
        match self
            .widgets
            .get_mut(widget.0)
            .and_then(|entry| entry.source.as_mut())
        {
            Some(source) => source.targets.add_text_targets(0),
            None => log::debug!("drag_source_add_text_targets: {widget} is not a drag source"),
        }
    }

    /// Returns the targets a drag source offers.
    pub fn drag_source_targets(&self, widget: WidgetId) -> Option<&TargetList> {
        self.widgets
            .get(widget.0)
            .and_then(|entry| entry.source.as_ref())
            .map(|source| &source.targets)
    }

    /// Makes a widget a drop destination.
    ///
    /// The destination is considered for drags offering one of `targets`
    /// and accepts them with one of `actions`, following `defaults`.
    pub fn drag_dest_set(
        &mut self,
        widget: WidgetId,
        defaults: DestDefaults,
        targets: TargetList,
        actions: DragAction,
    ) {
        match self.widgets.get_mut(widget.0) {
            Some(entry) => {
                entry.dest = Some(Dest {
                    defaults,
                    targets,
                    actions,
                });
            }
            None => log::debug!("drag_dest_set: unknown widget {widget}"),
        }
    }

    /// Stops a widget from being a drop destination.
    pub fn drag_dest_unset(&mut self, widget: WidgetId) {
        if let Some(entry) = self.widgets.get_mut(widget.0) {
            entry.dest = None;
        }
    }

    /// Adds the plain text targets to a drop destination.
    ///
    /// Does nothing if the widget is not a drop destination yet.
    pub fn drag_dest_add_text_targets(&mut self, widget: WidgetId) {
        match self
            .widgets
            .get_mut(widget.0)
            .and_then(|entry| entry.dest.as_mut())
        {
            Some(dest) => dest.targets.add_text_targets(0),
            None => log::debug!("drag_dest_add_text_targets: {widget} is not a drop destination"),
        }
    }

    /// Returns the targets a drop destination accepts.
    pub fn drag_dest_targets(&self, widget: WidgetId) -> Option<&TargetList> {
        self.widgets
            .get(widget.0)
            .and_then(|entry| entry.dest.as_ref())
            .map(|dest| &dest.targets)
    }

    /// Connects a `drag-begin` handler to a widget.
    pub fn connect_drag_begin(
        &mut self,
        widget: WidgetId,
        handler: impl FnMut(&WidgetInfo, &DragContext) + 'static,
    ) -> HandlerId {
        let handler: Box<DragBeginFn> = Box::new(handler);

        self.connect(widget, Signal::DragBegin, handler, |signals| {
            &mut signals.drag_begin
        })
    }

    /// Connects a `drag-motion` handler to a widget.
    ///
    /// The handler receives the pointer position relative to the widget.
    pub fn connect_drag_motion(
        &mut self,
        widget: WidgetId,
        handler: impl FnMut(&WidgetInfo, &DragContext, i32, i32, u32) + 'static,
    ) -> HandlerId {
        let handler: Box<DragMotionFn> = Box::new(handler);

        self.connect(widget, Signal::DragMotion, handler, |signals| {
            &mut signals.drag_motion
        })
    }

    /// Connects a `drag-leave` handler to a widget.
    pub fn connect_drag_leave(
        &mut self,
        widget: WidgetId,
        handler: impl FnMut(&WidgetInfo, &DragContext, u32) + 'static,
    ) -> HandlerId {
        let handler: Box<DragLeaveFn> = Box::new(handler);

        self.connect(widget, Signal::DragLeave, handler, |signals| {
            &mut signals.drag_leave
        })
    }

    /// Connects a `drag-data-get` handler to a widget.
    ///
    /// The handler must store the payload in the given [`SelectionData`].
    pub fn connect_drag_data_get(
        &mut self,
        widget: WidgetId,
        handler: impl FnMut(&WidgetInfo, &DragContext, &mut SelectionData, u32, u32) + 'static,
    ) -> HandlerId {
        let handler: Box<DragDataGetFn> = Box::new(handler);

        self.connect(widget, Signal::DragDataGet, handler, |signals| {
            &mut signals.drag_data_get
        })
    }

    /// Connects a `drag-data-received` handler to a widget.
    pub fn connect_drag_data_received(
        &mut self,
        widget: WidgetId,
        handler: impl FnMut(&WidgetInfo, &DragContext, i32, i32, &SelectionData, u32, u32) + 'static,
    ) -> HandlerId {
        let handler: Box<DragDataReceivedFn> = Box::new(handler);

        self.connect(widget, Signal::DragDataReceived, handler, |signals| {
            &mut signals.drag_data_received
        })
    }

    /// Connects a `drag-end` handler to a widget.
    pub fn connect_drag_end(
        &mut self,
        widget: WidgetId,
        handler: impl FnMut(&WidgetInfo, &DragContext) + 'static,
    ) -> HandlerId {
        let handler: Box<DragEndFn> = Box::new(handler);

        self.connect(widget, Signal::DragEnd, handler, |signals| {
            &mut signals.drag_end
        })
    }

    /// Disconnects a handler. Returns `false` if it was not connected.
    pub fn disconnect(&mut self, handler: HandlerId) -> bool {
        self.widgets
            .iter_mut()
            .any(|entry| entry.signals.disconnect(handler))
    }

    /// Returns the number of handlers connected to a signal of a widget.
    pub fn handler_count(&self, widget: WidgetId, signal: Signal) -> usize {
        self.widgets
            .get(widget.0)
            .map_or(0, |entry| entry.signals.count(signal))
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging(_))
    }

    /// Returns the context of the drag in progress, if any.
    pub fn context(&self) -> Option<&DragContext> {
        match &self.gesture {
            Gesture::Dragging(drag) => Some(&drag.context),
            Gesture::Idle | Gesture::Pending { .. } => None,
        }
    }

    /// Returns `true` if the given destination should be drawn highlighted.
    pub fn is_highlighted(&self, widget: WidgetId) -> bool {
        let Gesture::Dragging(Drag {
            hover: Some(hover), ..
        }) = &self.gesture
        else {
            return false;
        };

        hover.dest == widget
            && hover.accepted
            && self
                .widgets
                .get(widget.0)
                .and_then(|entry| entry.dest.as_ref())
                .is_some_and(|dest| dest.defaults.contains(DestDefaults::HIGHLIGHT))
    }

    /// Processes pointer input.
    ///
    /// Returns the outcome when the input finishes a drag that has begun.
    pub fn handle(&mut self, input: Input) -> Option<DropResult> {
        match input {
            Input::Allocate { widget, bounds } => {
                if let Some(entry) = self.widgets.get_mut(widget.0) {
                    entry.allocation = Some(bounds);
                }

                None
            }
            Input::Press {
                widget,
                button,
                position,
            } => {
                self.press(widget, button, position);
                None
            }
            Input::Motion { position } => {
                self.motion(position);
                None
            }
            Input::Release { button } => self.release(button),
            Input::Cancel => self.cancel(),
        }
    }

    fn connect<F: ?Sized>(
        &mut self,
        widget: WidgetId,
        signal: Signal,
        handler: Box<F>,
        slots: fn(&mut Signals) -> &mut Slots<F>,
    ) -> HandlerId {
        let id = HandlerId(self.next_handler);
        self.next_handler += 1;

        match self.widgets.get_mut(widget.0) {
            Some(entry) => slots(&mut entry.signals).push(id, handler),
            None => log::debug!("cannot connect {signal} on unknown widget {widget}"),
        }

        id
    }

    fn time(&self) -> u32 {
        u32::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u32::MAX)
    }

    fn press(&mut self, widget: WidgetId, button: mouse::Button, position: Point) {
        if !matches!(self.gesture, Gesture::Idle) {
            return;
        }

        let Some(source) = self
            .widgets
            .get(widget.0)
            .and_then(|entry| entry.source.as_ref())
        else {
            return;
        };

        if source.buttons.allows(button) {
            self.gesture = Gesture::Pending {
                source: widget,
                button,
                origin: position,
            };
        }
    }

    fn motion(&mut self, position: Point) {
        self.gesture = match std::mem::take(&mut self.gesture) {
            Gesture::Idle => Gesture::Idle,
            Gesture::Pending {
                source,
                button,
                origin,
            } => {
                if origin.distance(position) < self.settings.threshold {
                    Gesture::Pending {
                        source,
                        button,
                        origin,
                    }
                } else if let Some(mut drag) = self.begin(source, button) {
                    self.hover(&mut drag, position);
                    Gesture::Dragging(drag)
                } else {
                    Gesture::Idle
                }
            }
            Gesture::Dragging(mut drag) => {
                self.hover(&mut drag, position);
                Gesture::Dragging(drag)
            }
        };
    }

    fn release(&mut self, button: mouse::Button) -> Option<DropResult> {
        match std::mem::take(&mut self.gesture) {
            Gesture::Dragging(drag) if drag.button == button => Some(self.finish(drag)),
            Gesture::Pending {
                button: pressed, ..
            } if pressed == button => None,
            gesture => {
                self.gesture = gesture;
                None
            }
        }
    }

    fn cancel(&mut self) -> Option<DropResult> {
        match std::mem::take(&mut self.gesture) {
            Gesture::Dragging(mut drag) => {
                if let Some(hover) = drag.hover.take().filter(|hover| hover.tracked) {
                    self.emit_drag_leave(hover.dest, &drag.context);
                }

                self.emit_drag_end(drag.context.source, &drag.context);
                log::debug!("drag {} cancelled", drag.context.id);

                Some(DropResult::Cancelled)
            }
            Gesture::Idle | Gesture::Pending { .. } => None,
        }
    }

    fn begin(&mut self, source: WidgetId, button: mouse::Button) -> Option<Drag> {
        let (actions, targets) = {
            let entry = self.widgets.get(source.0)?;
            let site = entry.source.as_ref()?;

            if site.targets.is_empty() {
                log::debug!("drag from {} ignored: no targets", entry.info);
                return None;
            }

            let reachable = self
                .widgets
                .iter()
                .filter_map(|entry| entry.dest.as_ref())
                .any(|dest| site.targets.intersects(&dest.targets));

            if !reachable {
                log::debug!(
                    "drag from {} ignored: no destination accepts its targets",
                    entry.info
                );
                return None;
            }

            (site.actions, site.targets.names())
        };

        let id = DragId(self.next_drag);
        self.next_drag += 1;

        let context = DragContext::new(id, source, actions, targets);
        log::debug!("drag {id} began from {source}");

        self.emit_drag_begin(source, &context);

        Some(Drag {
            context,
            button,
            hover: None,
        })
    }

    fn dest_at(&self, position: Point, context: &DragContext) -> Option<(WidgetId, Point)> {
        self.widgets.iter().rev().find_map(|entry| {
            let dest = entry.dest.as_ref()?;
            let bounds = entry.allocation?;

            let offered = context
                .targets
                .iter()
                .any(|target| dest.targets.contains(target));

            (offered && bounds.contains(position)).then(|| {
                (
                    entry.info.id,
                    Point::new(position.x - bounds.x, position.y - bounds.y),
                )
            })
        })
    }

    fn hover(&mut self, drag: &mut Drag, position: Point) {
        let found = self.dest_at(position, &drag.context);

        if let Some(hover) = drag.hover {
            if found.map(|(dest, _)| dest) != Some(hover.dest) {
                drag.hover = None;
                drag.context.dest = None;
                drag.context.selected_action = DragAction::empty();

                if hover.tracked {
                    self.emit_drag_leave(hover.dest, &drag.context);
                }
            }
        }

        let Some((dest, local)) = found else {
            return;
        };

        let Some(site) = self
            .widgets
            .get(dest.0)
            .and_then(|entry| entry.dest.as_ref())
        else {
            return;
        };

        let accepted = site.accepts(&drag.context);
        let tracked = accepted || !site.defaults.contains(DestDefaults::MOTION);

        drag.context.dest = Some(dest);
        drag.context.selected_action = if accepted {
            site.select(&drag.context)
        } else {
            DragAction::empty()
        };
        drag.hover = Some(Hover {
            dest,
            position: local,
            accepted,
            tracked,
        });

        if tracked {
            self.emit_drag_motion(dest, &drag.context, local.x as i32, local.y as i32);
        }
    }

    fn finish(&mut self, mut drag: Drag) -> DropResult {
        let result = match drag.hover.take() {
            Some(hover) => {
                if hover.tracked {
                    self.emit_drag_leave(hover.dest, &drag.context);
                }

                if hover.accepted {
                    self.deliver(&drag.context, hover)
                } else {
                    DropResult::Cancelled
                }
            }
            None => DropResult::Cancelled,
        };

        self.emit_drag_end(drag.context.source, &drag.context);
        log::debug!("drag {} finished: {result:?}", drag.context.id);

        result
    }

    fn deliver(&mut self, context: &DragContext, hover: Hover) -> DropResult {
        let negotiated = {
            let dest = self
                .widgets
                .get(hover.dest.0)
                .and_then(|entry| entry.dest.as_ref());
            let source = self
                .widgets
                .get(context.source.0)
                .and_then(|entry| entry.source.as_ref());

            match (source, dest) {
                (Some(source), Some(dest)) if dest.defaults.contains(DestDefaults::DROP) => {
                    source.targets.first_shared(&dest.targets).map(|offered| {
                        let accepted = dest.targets.find(&offered.target);

                        (
                            offered.target.clone(),
                            offered.info,
                            accepted.map_or(0, |entry| entry.info),
                        )
                    })
                }
                _ => None,
            }
        };

        let Some((target, source_info, dest_info)) = negotiated else {
            log::debug!(
                "drop of drag {} on {} requested no data",
                context.id,
                hover.dest
            );
            return DropResult::Cancelled;
        };

        let mut selection = SelectionData::new(target);

        self.emit_drag_data_get(context.source, context, &mut selection, source_info);
        self.emit_drag_data_received(
            hover.dest,
            context,
            hover.position.x as i32,
            hover.position.y as i32,
            &selection,
            dest_info,
        );

        DropResult::Dropped(context.selected_action)
    }

    fn emit_drag_begin(&mut self, widget: WidgetId, context: &DragContext) {
        let Some(entry) = self.widgets.get_mut(widget.0) else {
            return;
        };

        for handler in entry.signals.drag_begin.iter_mut() {
            handler(&entry.info, context);
        }
    }

    fn emit_drag_motion(&mut self, widget: WidgetId, context: &DragContext, x: i32, y: i32) {
        let time = self.time();
        let Some(entry) = self.widgets.get_mut(widget.0) else {
            return;
        };

        for handler in entry.signals.drag_motion.iter_mut() {
            handler(&entry.info, context, x, y, time);
        }
    }

    fn emit_drag_leave(&mut self, widget: WidgetId, context: &DragContext) {
        let time = self.time();
        let Some(entry) = self.widgets.get_mut(widget.0) else {
            return;
        };

        for handler in entry.signals.drag_leave.iter_mut() {
            handler(&entry.info, context, time);
        }
    }

    fn emit_drag_data_get(
        &mut self,
        widget: WidgetId,
        context: &DragContext,
        data: &mut SelectionData,
        info: u32,
    ) {
        let time = self.time();
        let Some(entry) = self.widgets.get_mut(widget.0) else {
            return;
        };

        for handler in entry.signals.drag_data_get.iter_mut() {
            handler(&entry.info, context, &mut *data, info, time);
        }
    }

    fn emit_drag_data_received(
        &mut self,
        widget: WidgetId,
        context: &DragContext,
        x: i32,
        y: i32,
        data: &SelectionData,
        info: u32,
    ) {
        let time = self.time();
        let Some(entry) = self.widgets.get_mut(widget.0) else {
            return;
        };

        for handler in entry.signals.drag_data_received.iter_mut() {
            handler(&entry.info, context, x, y, data, info, time);
        }
    }

    fn emit_drag_end(&mut self, widget: WidgetId, context: &DragContext) {
        let Some(entry) = self.widgets.get_mut(widget.0) else {
            return;
        };

        for handler in entry.signals.drag_end.iter_mut() {
            handler(&entry.info, context);
        }
    }
}
