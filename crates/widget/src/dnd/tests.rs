use super::*;

use drop_test_core::DragSession;
use iced::advanced::clipboard;
use iced::{Point, keyboard::Modifiers};

const SIZE: Size = Size {
    width: 100.0,
    height: 30.0,
};

fn block() -> Element<'static, Input, (), ()> {
    Element::new(Block)
}

fn drag_widget() -> WidgetId {
    DragSession::default().add_widget("Drag")
}

/// A fixed size content without behavior of its own.
struct Block;

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer> for Block
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fixed(SIZE.width), Length::Fixed(SIZE.height))
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        _limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(SIZE)
    }

    fn draw(
        &self,
        _tree: &Tree,
        _renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
    }
}

/// Drives a single widget laid out at a given origin.
struct Harness {
    element: Element<'static, Input, (), ()>,
    tree: Tree,
    node: layout::Node,
}

impl Harness {
    fn new(mut element: Element<'static, Input, (), ()>, origin: Point) -> Self {
        let mut tree = Tree::new(&element);
        let node = element
            .as_widget_mut()
            .layout(
                &mut tree,
                &(),
                &layout::Limits::new(Size::ZERO, Size::INFINITE),
            )
            .move_to(origin);

        Self {
            element,
            tree,
            node,
        }
    }

    fn source(widget: WidgetId) -> Self {
        let source: DragSource<'static, Input, (), ()> =
            DragSource::new(block(), widget, |input| input);

        Self::new(source.into(), Point::new(10.0, 10.0))
    }

    fn destination(widget: WidgetId) -> Self {
        let destination: DropDestination<'static, Input, (), ()> =
            DropDestination::new(block(), widget, |input| input);

        Self::new(destination.into(), Point::new(10.0, 10.0))
    }

    fn move_to(&mut self, origin: Point) {
        self.node = self.node.clone().move_to(origin);
    }

    fn send(&mut self, event: Event, cursor: Point) -> Vec<Input> {
        let mut messages = Vec::new();

        {
            let mut shell = Shell::new(&mut messages);

            self.element.as_widget_mut().update(
                &mut self.tree,
                &event,
                Layout::new(&self.node),
                mouse::Cursor::Available(cursor),
                &(),
                &mut clipboard::Null,
                &mut shell,
                &Rectangle::new(Point::ORIGIN, Size::new(400.0, 100.0)),
            );
        }

        messages
    }

    fn interaction(&self, cursor: Point) -> mouse::Interaction {
        self.element.as_widget().mouse_interaction(
            &self.tree,
            Layout::new(&self.node),
            mouse::Cursor::Available(cursor),
            &Rectangle::new(Point::ORIGIN, Size::new(400.0, 100.0)),
            &(),
        )
    }
}

fn bounds_at(x: f32, y: f32) -> Rectangle {
    Rectangle::new(Point::new(x, y), SIZE)
}

fn pressed(button: mouse::Button) -> Event {
    Event::Mouse(mouse::Event::ButtonPressed(button))
}

fn released(button: mouse::Button) -> Event {
    Event::Mouse(mouse::Event::ButtonReleased(button))
}

fn moved(position: Point) -> Event {
    Event::Mouse(mouse::Event::CursorMoved { position })
}

fn escape() -> Event {
    Event::Keyboard(keyboard::Event::KeyPressed {
        key: keyboard::Key::Named(key::Named::Escape),
        modified_key: keyboard::Key::Named(key::Named::Escape),
        physical_key: key::Physical::Code(key::Code::Escape),
        location: keyboard::Location::Standard,
        modifiers: Modifiers::default(),
        text: None,
        repeat: false,
    })
}

fn finger(event: fn(touch::Finger, Point) -> touch::Event, position: Point) -> Event {
    Event::Touch(event(touch::Finger(0), position))
}

#[test]
fn press_is_reported_only_inside_the_bounds() {
    let widget = drag_widget();
    let mut source = Harness::source(widget);
    let outside = Point::new(200.0, 50.0);
    let inside = Point::new(20.0, 25.0);

    assert_eq!(
        source.send(pressed(mouse::Button::Left), outside),
        vec![Input::Allocate {
            widget,
            bounds: bounds_at(10.0, 10.0),
        }]
    );
    assert_eq!(source.send(moved(inside), inside), vec![]);
    assert_eq!(
        source.send(pressed(mouse::Button::Left), inside),
        vec![Input::Press {
            widget,
            button: mouse::Button::Left,
            position: inside,
        }]
    );
}

#[test]
fn mouse_gesture_reports_motion_until_its_button_is_released() {
    let widget = drag_widget();
    let mut source = Harness::source(widget);
    let inside = Point::new(20.0, 25.0);
    let far = Point::new(300.0, 80.0);

    let _ = source.send(pressed(mouse::Button::Right), inside);
    assert_eq!(source.interaction(inside), mouse::Interaction::Grab);

    assert_eq!(source.send(moved(far), far), vec![Input::Motion { position: far }]);
    assert_eq!(source.send(released(mouse::Button::Left), far), vec![]);
    assert_eq!(
        source.send(released(mouse::Button::Right), far),
        vec![Input::Release {
            button: mouse::Button::Right
        }]
    );
    assert_eq!(source.send(moved(inside), inside), vec![]);
    assert_eq!(source.interaction(inside), mouse::Interaction::None);
}

#[test]
fn escape_and_focus_loss_cancel_a_press() {
    let widget = drag_widget();
    let mut source = Harness::source(widget);
    let inside = Point::new(20.0, 25.0);

    let _ = source.send(pressed(mouse::Button::Left), inside);
    assert_eq!(source.send(escape(), inside), vec![Input::Cancel]);
    assert_eq!(source.send(escape(), inside), vec![]);

    let _ = source.send(pressed(mouse::Button::Left), inside);
    assert_eq!(
        source.send(Event::Window(window::Event::Unfocused), inside),
        vec![Input::Cancel]
    );
    assert_eq!(source.send(released(mouse::Button::Left), inside), vec![]);
}

#[test]
fn touch_acts_as_the_primary_button() {
    let widget = drag_widget();
    let mut source = Harness::source(widget);
    let inside = Point::new(20.0, 25.0);
    let far = Point::new(250.0, 20.0);

    let _ = source.send(moved(far), far);

    assert_eq!(
        source.send(
            finger(|id, position| touch::Event::FingerPressed { id, position }, inside),
            inside
        ),
        vec![Input::Press {
            widget,
            button: mouse::Button::Left,
            position: inside,
        }]
    );
    assert_eq!(
        source.send(
            finger(|id, position| touch::Event::FingerMoved { id, position }, far),
            inside
        ),
        vec![Input::Motion { position: far }]
    );
    assert_eq!(
        source.send(
            finger(|id, position| touch::Event::FingerLifted { id, position }, far),
            inside
        ),
        vec![Input::Release {
            button: mouse::Button::Left
        }]
    );

    let _ = source.send(
        finger(|id, position| touch::Event::FingerPressed { id, position }, inside),
        inside,
    );
    assert_eq!(
        source.send(
            finger(|id, position| touch::Event::FingerLost { id, position }, inside),
            inside
        ),
        vec![Input::Cancel]
    );
}

#[test]
fn dragging_source_shows_a_grabbing_cursor() {
    let widget = drag_widget();
    let source: DragSource<'static, Input, (), ()> =
        DragSource::new(block(), widget, |input| input).dragging(true);
    let source = Harness::new(source.into(), Point::ORIGIN);

    assert_eq!(
        source.interaction(Point::new(5.0, 5.0)),
        mouse::Interaction::Grabbing
    );
}

#[test]
fn destination_reports_its_allocation_when_it_moves() {
    let widget = drag_widget();
    let mut destination = Harness::destination(widget);
    let inside = Point::new(20.0, 25.0);

    assert_eq!(
        destination.send(moved(inside), inside),
        vec![Input::Allocate {
            widget,
            bounds: bounds_at(10.0, 10.0),
        }]
    );
    assert_eq!(destination.send(pressed(mouse::Button::Left), inside), vec![]);
    assert_eq!(destination.send(moved(inside), inside), vec![]);

    destination.move_to(Point::new(116.0, 10.0));

    assert_eq!(
        destination.send(moved(inside), inside),
        vec![Input::Allocate {
            widget,
            bounds: bounds_at(116.0, 10.0),
        }]
    );
}
