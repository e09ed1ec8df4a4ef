pub mod widget;

use std::collections::VecDeque;
use std::fmt::Debug;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;

use tokio::sync::broadcast;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use termion::event::Key;

use ratatui::layout::{Position, Rect};
use ratatui::text::Text;
use ratatui::{Frame, Viewport};

use crate::event::Event;
use crate::task::Interrupted;
use crate::terminal;
use crate::ui::masonry::InvalidColumns;
use crate::ui::theme::Theme;
use crate::ui::ToTile;

use self::widget::{Label, Masonry, Shortcuts, Widget};

const RENDERING_TICK_RATE: Duration = Duration::from_millis(250);

/// Applications implement `Show` to rebuild their whole interface from
/// the current state, once per frame.
pub trait Show<M> {
    fn show(&self, ctx: &Context<M>, frame: &mut Frame) -> Result<()>;
}

/// Owns the terminal and drives the draw loop.
///
/// The frontend redraws the latest state snapshot on every rendering
/// tick, terminal event or state change, and queues key presses for
/// the `Ui` handed to the next frame.
#[derive(Default)]
pub struct Frontend {
    viewport: Viewport,
    theme: Theme,
}

impl Frontend {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub async fn run<S, M, P>(
        self,
        message_tx: UnboundedSender<M>,
        mut snapshot_rx: UnboundedReceiver<S>,
        mut interrupt_rx: broadcast::Receiver<Interrupted<P>>,
    ) -> Result<Interrupted<P>>
    where
        S: Show<M> + 'static,
        M: Clone + 'static,
        P: Clone + Send + Sync + Debug,
    {
        let mut terminal = terminal::setup(self.viewport.clone())?;
        let mut events_rx = terminal::events();
        let mut ticker = tokio::time::interval(RENDERING_TICK_RATE);

        let mut ctx = Context::default()
            .with_sender(message_tx)
            .with_theme(self.theme.clone());

        // Nothing can be drawn before the store published the initial
        // state.
        let mut latest = match snapshot_rx.recv().await {
            Some(snapshot) => snapshot,
            None => anyhow::bail!("store dropped before the first snapshot"),
        };

        let interrupted = loop {
            tokio::select! {
                // Redraw at least every tick.
                _ = ticker.tick() => (),
                Some(event) = events_rx.recv() => match event {
                    Event::Key(key) => ctx.store_input(key),
                    Event::Resize => (),
                },
                Some(snapshot) = snapshot_rx.recv() => latest = snapshot,
                Ok(interrupted) = interrupt_rx.recv() => {
                    // Park the cursor where inline viewports expect it.
                    let area = terminal.get_frame().area();
                    let _ = terminal.set_cursor_position(Position::new(area.x, area.y));

                    break interrupted;
                }
            }

            terminal.draw(|frame| {
                let ctx = ctx.clone().with_frame_size(frame.area());

                if let Err(err) = latest.show(&ctx, frame) {
                    log::warn!("Failed to draw frame: {}", err);
                }
            })?;

            ctx.clear_inputs();
        };

        terminal::restore(&mut terminal)?;

        Ok(interrupted)
    }
}

#[derive(Default, Debug)]
pub struct Response {
    pub changed: bool,
}

#[derive(Debug)]
pub struct InnerResponse<R> {
    /// What the closure that built the contents returned.
    pub inner: R,
    /// The response of the surrounding area.
    pub response: Response,
}

impl<R> InnerResponse<R> {
    #[inline]
    pub fn new(inner: R, response: Response) -> Self {
        Self { inner, response }
    }
}

/// Per-frame context widgets are built against: the frame size, the
/// theme, the keys pressed since the last frame and the sending half
/// of the application's message channel.
#[derive(Clone, Debug)]
pub struct Context<M> {
    pub(crate) inputs: VecDeque<Key>,
    pub(crate) frame_size: Rect,
    pub(crate) theme: Theme,
    pub(crate) sender: Option<UnboundedSender<M>>,
}

impl<M> Default for Context<M> {
    fn default() -> Self {
        Self {
            inputs: VecDeque::default(),
            frame_size: Rect::default(),
            theme: Theme::default(),
            sender: None,
        }
    }
}

impl<M> Context<M> {
    pub fn new(frame_size: Rect) -> Self {
        Self {
            frame_size,
            ..Default::default()
        }
    }

    pub fn with_inputs(mut self, inputs: VecDeque<Key>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_frame_size(mut self, frame_size: Rect) -> Self {
        self.frame_size = frame_size;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_sender(mut self, sender: UnboundedSender<M>) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn frame_size(&self) -> Rect {
        self.frame_size
    }

    pub fn store_input(&mut self, key: Key) {
        self.inputs.push_back(key);
    }

    pub fn clear_inputs(&mut self) {
        self.inputs.clear();
    }
}

pub enum Borders {
    None,
    All,
    Top,
    Sides,
    Bottom,
}

#[derive(Clone, Default, Debug)]
pub enum Layout {
    #[default]
    None,
    Wrapped {
        internal: ratatui::layout::Layout,
    },
}

impl From<ratatui::layout::Layout> for Layout {
    fn from(layout: ratatui::layout::Layout) -> Self {
        Self::Wrapped { internal: layout }
    }
}

impl Layout {
    pub fn len(&self) -> usize {
        self.split(Rect::default()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn split(&self, area: Rect) -> Rc<[Rect]> {
        match self {
            Layout::None => Rc::new([]),
            Layout::Wrapped { internal } => internal.split(area),
        }
    }
}

/// Area cursor widgets are added to. Each widget consumes the next
/// slot of the `Layout` the `Ui` was built with.
#[derive(Clone, Debug)]
pub struct Ui<M> {
    pub theme: Theme,
    pub(crate) area: Rect,
    pub(crate) layout: Layout,
    count: usize,
    ctx: Context<M>,
}

impl<M> Default for Ui<M> {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            area: Rect::default(),
            layout: Layout::default(),
            count: 0,
            ctx: Context::default(),
        }
    }
}

impl<M> Ui<M> {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            ..Default::default()
        }
    }

    pub fn with_area(mut self, area: Rect) -> Self {
        self.area = area;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_ctx(mut self, ctx: Context<M>) -> Self {
        self.theme = ctx.theme.clone();
        self.ctx = ctx;
        self
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Hand out the next layout slot. The slot counter advances even
    /// past the end of the layout.
    pub fn next_area(&mut self) -> Option<Rect> {
        let area = self.layout.split(self.area).get(self.count).copied();
        self.count += 1;

        area
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// True if any key pressed since the last frame matches.
    pub fn input(&mut self, f: impl Fn(Key) -> bool) -> bool {
        self.input_with_key(f).is_some()
    }

    /// The first key pressed since the last frame that matches.
    pub fn input_with_key(&mut self, f: impl Fn(Key) -> bool) -> Option<Key> {
        self.ctx.inputs.iter().copied().find(|key| f(*key))
    }

    /// Queue an application message. Dropped silently when the `Ui`
    /// is not connected to a message channel, e.g. in tests.
    pub fn send_message(&self, message: M) {
        if let Some(sender) = &self.ctx.sender {
            let _ = sender.send(message);
        }
    }
}

impl<M> Ui<M>
where
    M: Clone,
{
    pub fn add(&mut self, frame: &mut Frame, widget: impl Widget) -> Response {
        widget.ui(self, frame)
    }

    pub fn child_ui(&mut self, area: Rect, layout: impl Into<Layout>) -> Self {
        Ui::default()
            .with_area(area)
            .with_layout(layout.into())
            .with_ctx(self.ctx.clone())
    }

    pub fn layout<R>(
        &mut self,
        layout: impl Into<Layout>,
        add_contents: impl FnOnce(&mut Self) -> R,
    ) -> InnerResponse<R> {
        self.layout_dyn(layout, Box::new(add_contents))
    }

    pub fn layout_dyn<'a, R>(
        &mut self,
        layout: impl Into<Layout>,
        add_contents: Box<dyn FnOnce(&mut Self) -> R + 'a>,
    ) -> InnerResponse<R> {
        let area = self.next_area().unwrap_or_default();
        let inner = add_contents(&mut self.child_ui(area, layout));

        InnerResponse::new(inner, Response::default())
    }

    pub fn label<'a>(&mut self, frame: &mut Frame, content: impl Into<Text<'a>>) -> Response {
        Label::new(content).ui(self, frame)
    }

    pub fn overline(&mut self, frame: &mut Frame) -> Response {
        self.label(frame, "━".repeat(256))
    }

    pub fn masonry<'a, T>(
        &mut self,
        frame: &mut Frame,
        items: &'a [T],
        columns: usize,
        borders: Option<Borders>,
    ) -> Result<Response, InvalidColumns>
    where
        T: ToTile,
    {
        Masonry::new(items, borders)
            .with_columns(columns)
            .show(self, frame, |item, _| item.to_tile())
            .map(|output| output.response)
    }

    pub fn shortcuts(
        &mut self,
        frame: &mut Frame,
        shortcuts: &[(&str, &str)],
        divider: char,
    ) -> Response {
        Shortcuts::new(shortcuts, divider).ui(self, frame)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use ratatui::layout::Constraint;

    use super::*;

    #[test]
    fn ui_should_hand_out_layout_areas_in_order() {
        let layout = ratatui::layout::Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
        ]);
        let mut ui = Ui::<()>::new(Rect::new(0, 0, 10, 5)).with_layout(layout.into());

        assert_eq!(ui.next_area(), Some(Rect::new(0, 0, 10, 2)));
        assert_eq!(ui.next_area(), Some(Rect::new(0, 2, 10, 3)));
        assert_eq!(ui.next_area(), None);
        assert_eq!(ui.count(), 3);
    }

    #[test]
    fn default_layout_should_have_no_areas() {
        let mut ui = Ui::<()>::new(Rect::new(0, 0, 10, 5));

        assert!(ui.layout.is_empty());
        assert_eq!(ui.next_area(), None);
    }

    #[test]
    fn inputs_should_be_matched() {
        let inputs = VecDeque::from(vec![Key::Char('q'), Key::Up]);
        let ctx = Context::<()>::default().with_inputs(inputs);
        let mut ui = Ui::default().with_ctx(ctx);

        assert!(ui.input(|key| key == Key::Char('q')));
        assert!(!ui.input(|key| key == Key::Down));
        assert_eq!(ui.input_with_key(|key| key == Key::Up), Some(Key::Up));
    }
}
