//! A container that reports left-button presses, drags and double clicks
//! with the pointer position.

use cosmic::iced::Vector;
use cosmic::iced_renderer::core::Point;

use cosmic::iced_core::{
    Clipboard, Element, Layout, Length, Rectangle, Shell, Size, Widget,
    event::{self, Event},
    layout,
    mouse::{self, click},
    overlay, renderer, touch,
    widget::{Operation, Tree, tree},
};

/// Emit messages for pointer drags and double clicks.
#[allow(missing_debug_implementations)]
pub struct DragArea<'a, Message, Theme = cosmic::Theme, Renderer = cosmic::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_press: Option<Box<dyn Fn(Point) -> Message + 'a>>,
    on_drag: Option<Box<dyn Fn(Point) -> Message + 'a>>,
    on_release: Option<Message>,
    on_double_click: Option<Message>,
}

impl<'a, Message, Theme, Renderer> DragArea<'a, Message, Theme, Renderer> {
    /// The message to emit on a left button press, given the pointer position.
    #[must_use]
    pub fn on_press(mut self, message: impl Fn(Point) -> Message + 'a) -> Self {
        self.on_press = Some(Box::new(message));
        self
    }

    /// The message to emit for each pointer motion while the left button is held.
    #[must_use]
    pub fn on_drag(mut self, message: impl Fn(Point) -> Message + 'a) -> Self {
        self.on_drag = Some(Box::new(message));
        self
    }

    /// The message to emit when the left button is released after a press.
    #[must_use]
    pub fn on_release(mut self, message: Message) -> Self {
        self.on_release = Some(message);
        self
    }

    /// The message to emit on a left button double click.
    #[must_use]
    pub fn on_double_click(mut self, message: Message) -> Self {
        self.on_double_click = Some(message);
        self
    }
}

/// Local state of the [`DragArea`].
#[derive(Default)]
struct State {
    pressed: bool,
    last_click: Option<mouse::Click>,
}

impl<'a, Message, Theme, Renderer> DragArea<'a, Message, Theme, Renderer> {
    /// Creates a [`DragArea`] with the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        DragArea {
            content: content.into(),
            on_press: None,
            on_drag: None,
            on_release: None,
            on_double_click: None,
        }
    }
}

/// Creates a [`DragArea`] with the given content.
pub fn drag_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> DragArea<'a, Message, Theme, Renderer> {
    DragArea::new(content)
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for DragArea<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
    Message: Clone,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&mut self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_mut(&mut self.content));
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation<()>,
    ) {
        self.content
            .as_widget()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        if let event::Status::Captured = self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event.clone(),
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        ) {
            return event::Status::Captured;
        }

        update(
            self,
            &event,
            layout,
            cursor,
            shell,
            tree.state.downcast_mut::<State>(),
        )
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let interaction = self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        );

        if interaction == mouse::Interaction::default()
            && tree.state.downcast_ref::<State>().pressed
        {
            mouse::Interaction::Grabbing
        } else {
            interaction
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
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content
            .as_widget_mut()
            .overlay(&mut tree.children[0], layout, renderer, translation)
    }
}

impl<'a, Message, Theme, Renderer> From<DragArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a + Clone,
    Theme: 'a,
    Renderer: 'a + renderer::Renderer,
{
    fn from(area: DragArea<'a, Message, Theme, Renderer>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(area)
    }
}

/// Processes the given [`Event`] and updates the [`State`] of a [`DragArea`]
/// accordingly.
fn update<Message: Clone, Theme, Renderer>(
    widget: &mut DragArea<'_, Message, Theme, Renderer>,
    event: &Event,
    layout: Layout<'_>,
    cursor: mouse::Cursor,
    shell: &mut Shell<'_, Message>,
    state: &mut State,
) -> event::Status {
    // Motion and release are tracked outside the bounds so a fast drag
    // can't leave the area stuck in the pressed state.
    if state.pressed {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if let Some(on_drag) = widget.on_drag.as_ref() {
                    shell.publish(on_drag(*position));
                    return event::Status::Captured;
                }
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if let Some(on_drag) = widget.on_drag.as_ref() {
                    shell.publish(on_drag(*position));
                    return event::Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
                state.pressed = false;
                if let Some(message) = widget.on_release.as_ref() {
                    shell.publish(message.clone());
                    return event::Status::Captured;
                }
            }
            _ => {}
        }
    }

    let Some(position) = cursor.position_over(layout.bounds()) else {
        return event::Status::Ignored;
    };

    if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    | Event::Touch(touch::Event::FingerPressed { .. }) = event
    {
        if let Some(message) = widget.on_double_click.as_ref() {
            let click = mouse::Click::new(position, mouse::Button::Left, state.last_click);
            state.last_click = Some(click);

            if click.kind() == click::Kind::Double {
                shell.publish(message.clone());
                return event::Status::Captured;
            }
        }

        if let Some(on_press) = widget.on_press.as_ref() {
            state.pressed = true;
            shell.publish(on_press(position));
            return event::Status::Captured;
        }
    }

    event::Status::Ignored
}
