//! Simple drag and drop demo.
//!
//! Two buttons side by side: drag from "Drag" and drop on "Drop". Every
//! drag signal prints a line to standard output, so you can watch in which
//! order they fire:
//!
//! - `drag-begin` on the source when the pointer leaves the drag threshold
//! - `drag-motion` on the destination while the drag hovers it
//! - `drag-data-get` on the source once the drag is dropped
//! - `drag-data-received` on the destination with the delivered text
//!
//! Both buttons need their text targets. Leave either call out and nothing
//! happens at all, without any error.
//!
//! Set `RUST_LOG=debug` to see the session decisions as well.

use drop_test::{
    ButtonMask, DestDefaults, DragAction, DragContext, DragSession, Input, SelectionData,
    TargetList, WidgetId, WidgetInfo, drag_source, drop_destination,
};
use iced::widget::{button, row};
use iced::{Element, Fill, Size};
use tracing_subscriber::EnvFilter;

const PAYLOAD: &str = "Hello, world!";

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    iced::application(DropTest::new, DropTest::update, DropTest::view)
        .title("Drop Test.")
        .window_size(Size::new(320.0, 60.0))
        .run()
}

#[derive(Debug, Clone, Copy)]
enum Message {
    /// Pointer input for the drag session
    Dnd(Input),
    /// One of the buttons was clicked without dragging
    Clicked,
}

struct DropTest {
    session: DragSession,
    drag_button: WidgetId,
    drop_button: WidgetId,
}

impl DropTest {
    fn new() -> Self {
        let mut session = DragSession::default();
        let drag_button = session.add_widget("Drag");
        let drop_button = session.add_widget("Drop");

        session.drag_source_set(
            drag_button,
            ButtonMask::BUTTON1,
            TargetList::new(),
            DragAction::COPY,
        );
        session.drag_dest_set(
            drop_button,
            DestDefaults::ALL,
            TargetList::new(),
            DragAction::COPY,
        );

        // Without these the drag silently never starts.
        session.drag_source_add_text_targets(drag_button);
        session.drag_dest_add_text_targets(drop_button);

        let _ = session.connect_drag_begin(drag_button, on_drag_begin);
        let _ = session.connect_drag_data_get(drag_button, on_drag_data_get);
        let _ = session.connect_drag_motion(drop_button, on_drag_motion);
        let _ = session.connect_drag_data_received(drop_button, on_drag_data_received);

        Self {
            session,
            drag_button,
            drop_button,
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Dnd(input) => {
                if let Some(result) = self.session.handle(input) {
                    log::debug!("drag finished: {result:?}");
                }
            }
            Message::Clicked => {
                log::debug!("clicked");
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let drag = drag_source(
            button("Drag").width(Fill).on_press(Message::Clicked),
            self.drag_button,
            Message::Dnd,
        )
        .dragging(self.session.is_dragging());

        let drop = drop_destination(
            button("Drop").width(Fill).on_press(Message::Clicked),
            self.drop_button,
            Message::Dnd,
        )
        .highlighted(self.session.is_highlighted(self.drop_button));

        row![drag, drop].spacing(6).into()
    }
}

fn on_drag_begin(widget: &WidgetInfo, _context: &DragContext) {
    println!("Beginning drag from {widget}.");
}

fn on_drag_data_get(
    _widget: &WidgetInfo,
    _context: &DragContext,
    data: &mut SelectionData,
    _info: u32,
    _time: u32,
) {
    println!(
        "data into drag_data_get(): {}",
        data.text().unwrap_or_default()
    );

    if let Err(error) = data.set_text(PAYLOAD, None) {
        log::warn!("failed to set drag data: {error}");
    }

    println!(
        "data after drag_data_get(): {}",
        data.text().unwrap_or_default()
    );
}

fn on_drag_motion(_widget: &WidgetInfo, _context: &DragContext, x: i32, y: i32, _time: u32) {
    println!("Over the drop area at ({x}, {y}).");
}

fn on_drag_data_received(
    _widget: &WidgetInfo,
    _context: &DragContext,
    _x: i32,
    _y: i32,
    data: &SelectionData,
    _info: u32,
    _time: u32,
) {
    println!(
        "Received data from drag: {}",
        data.text().unwrap_or_default()
    );
}
