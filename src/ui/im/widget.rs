use serde::{Deserialize, Serialize};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Row, Table};
use ratatui::Frame;

use crate::ui::masonry::{self, InvalidColumns, DEFAULT_COLUMNS};
use crate::ui::theme::style;
use crate::ui::{layout, span, Spacing, ToTile};

use super::{Borders, Context, InnerResponse, Response, Ui};

pub type AddContentFn<'a, M, R> = dyn FnOnce(&mut Ui<M>) -> R + 'a;

pub trait Widget {
    fn ui<M>(self, ui: &mut Ui<M>, frame: &mut Frame) -> Response
    where
        M: Clone;
}

#[derive(Default)]
pub struct Window {}

impl Window {
    #[inline]
    pub fn show<M, R>(
        self,
        ctx: &Context<M>,
        add_contents: impl FnOnce(&mut Ui<M>) -> R,
    ) -> InnerResponse<R>
    where
        M: Clone,
    {
        self.show_dyn(ctx, Box::new(add_contents))
    }

    fn show_dyn<M, R>(
        self,
        ctx: &Context<M>,
        add_contents: Box<AddContentFn<M, R>>,
    ) -> InnerResponse<R>
    where
        M: Clone,
    {
        let mut window = Ui::default()
            .with_area(ctx.frame_size())
            .with_layout(layout::fill().into())
            .with_ctx(ctx.clone());

        InnerResponse::new(add_contents(&mut window), Response::default())
    }
}

pub struct Label<'a> {
    content: Text<'a>,
}

impl<'a> Label<'a> {
    pub fn new(content: impl Into<Text<'a>>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Widget for Label<'_> {
    fn ui<M>(self, ui: &mut Ui<M>, frame: &mut Frame) -> Response {
        let area = ui.next_area().unwrap_or_default();
        frame.render_widget(self.content, area);

        Response::default()
    }
}

/// The effective grid dimensions of a rendered [`Masonry`] widget.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MasonryState {
    columns: usize,
    len: usize,
}

impl MasonryState {
    pub fn new(columns: usize, len: usize) -> Self {
        Self { columns, len }
    }

    /// Number of columns that were actually rendered. Never exceeds
    /// the number of items and is zero for an empty grid.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

pub struct MasonryOutput {
    pub response: Response,
    pub state: MasonryState,
}

/// A grid that lays out its items in vertical columns: the item at
/// position `i` lands in column `i % columns`, top to bottom. Tiles
/// keep their natural height, so columns grow unevenly like bricks
/// in a masonry wall.
pub struct Masonry<'a, T> {
    items: &'a [T],
    columns: usize,
    spacing: Spacing,
    borders: Option<Borders>,
    wrap: bool,
}

impl<'a, T> Masonry<'a, T> {
    pub fn new(items: &'a [T], borders: Option<Borders>) -> Self {
        Self {
            items,
            columns: DEFAULT_COLUMNS,
            spacing: Spacing::default(),
            borders,
            wrap: false,
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Wrap tile lines at the column width instead of truncating them.
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// # Example
    ///
    /// ```ignore
    /// let output = Masonry::new(&items, Some(Borders::All))
    ///     .with_columns(3)
    ///     .show(ui, frame, |item, index| tile(item, index))?;
    /// ```
    ///
    /// The closure receives each item together with its position in
    /// `items`, in case tiles need to be told apart.
    pub fn show<M, F>(
        self,
        ui: &mut Ui<M>,
        frame: &mut Frame,
        mut to_tile: F,
    ) -> Result<MasonryOutput, InvalidColumns>
    where
        F: FnMut(&'a T, usize) -> Text<'a>,
    {
        let area = ui.next_area().unwrap_or_default();
        let area = render_block(frame, area, self.borders, ui.theme.border_style);

        if self.items.is_empty() {
            let center = layout::centered_rect(area, 50, 10);
            let hint = Text::from(span::default("Nothing to show"))
                .centered()
                .light_magenta()
                .dim();

            frame.render_widget(hint, center);

            return Ok(MasonryOutput {
                response: Response::default(),
                state: MasonryState::new(0, 0),
            });
        }

        let buckets = masonry::distribute_indexed(self.items, self.columns)?;
        let state = MasonryState::new(buckets.len(), self.items.len());
        let columns = layout::columns(area, buckets.len(), self.spacing.column);

        for (bucket, column) in buckets.into_iter().zip(columns.iter()) {
            let tiles = bucket
                .into_iter()
                .map(|(index, item)| {
                    let tile = to_tile(item, index);
                    if self.wrap {
                        wrap_tile(tile, column.width)
                    } else {
                        tile
                    }
                })
                .collect::<Vec<_>>();

            let heights = tiles
                .iter()
                .map(|tile| Constraint::Length(tile.height() as u16));
            let rows = Layout::vertical(heights)
                .spacing(self.spacing.row)
                .split(*column);

            for (tile, row) in tiles.into_iter().zip(rows.iter()) {
                frame.render_widget(tile, *row);
            }
        }

        Ok(MasonryOutput {
            response: Response::default(),
            state,
        })
    }
}

impl<T> Widget for Masonry<'_, T>
where
    T: ToTile,
{
    fn ui<M>(self, ui: &mut Ui<M>, frame: &mut Frame) -> Response
    where
        M: Clone,
    {
        match self.show(ui, frame, |item, _| item.to_tile()) {
            Ok(output) => output.response,
            Err(err) => {
                log::warn!("masonry: {}", err);
                Response::default()
            }
        }
    }
}

pub struct Shortcuts {
    pub shortcuts: Vec<(String, String)>,
    pub divider: char,
}

impl Shortcuts {
    pub fn new(shortcuts: &[(&str, &str)], divider: char) -> Self {
        Self {
            shortcuts: shortcuts
                .iter()
                .map(|(short, long)| (short.to_string(), long.to_string()))
                .collect(),
            divider,
        }
    }
}

impl Widget for Shortcuts {
    fn ui<M>(self, ui: &mut Ui<M>, frame: &mut Frame) -> Response {
        let mut cells: Vec<(usize, Text)> = vec![];

        for (position, (short, long)) in self.shortcuts.iter().enumerate() {
            if position > 0 {
                let divider = Text::from(format!(" {} ", self.divider)).style(style::gray().dim());
                cells.push((3, divider));
            }

            let keys = Text::from(short.clone()).style(ui.theme.shortcuts_keys_style);
            let action = Text::from(long.clone()).style(ui.theme.shortcuts_action_style);

            cells.push((short.chars().count(), keys));
            cells.push((1, Text::default()));
            cells.push((long.chars().count(), action));
        }

        let (widths, row): (Vec<Constraint>, Vec<Text>) = cells
            .into_iter()
            .map(|(width, text)| (Constraint::Length(width as u16), text))
            .unzip();

        let area = ui.next_area().unwrap_or_default();
        frame.render_widget(Table::new([Row::new(row)], widths).column_spacing(0), area);

        Response::default()
    }
}

fn render_block(frame: &mut Frame, area: Rect, borders: Option<Borders>, style: Style) -> Rect {
    let borders = match borders {
        Some(Borders::All) => ratatui::widgets::Borders::ALL,
        Some(Borders::Top) => ratatui::widgets::Borders::TOP,
        Some(Borders::Sides) => ratatui::widgets::Borders::LEFT | ratatui::widgets::Borders::RIGHT,
        Some(Borders::Bottom) => ratatui::widgets::Borders::BOTTOM,
        Some(Borders::None) | None => return area,
    };

    let block = Block::default()
        .border_style(style)
        .border_type(BorderType::Rounded)
        .borders(borders);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}

/// Re-wraps every line of `tile` at `width` cells. Only line styles
/// survive the wrapping.
fn wrap_tile<'a>(tile: Text<'a>, width: u16) -> Text<'a> {
    if width == 0 {
        return tile;
    }

    let mut lines = vec![];
    for line in &tile.lines {
        let content = line.to_string();
        if content.is_empty() {
            lines.push(Line::default());
            continue;
        }

        for wrapped in textwrap::wrap(&content, width as usize) {
            lines.push(Line::from(wrapped.into_owned()).style(line.style));
        }
    }

    Text::from(lines).style(tile.style)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wrapped_tile_should_fit_width() {
        let tile = Text::from(vec![
            Line::from("the quick brown fox jumps over the lazy dog"),
            Line::from(""),
            Line::from("tail"),
        ]);
        let wrapped = wrap_tile(tile, 10);

        assert!(wrapped.lines.len() > 3);
        assert_eq!(wrapped.lines[wrapped.lines.len() - 1].to_string(), "tail");

        for line in &wrapped.lines {
            assert!(line.to_string().chars().count() <= 10);
        }
    }

    #[test]
    fn zero_width_should_leave_tile_unwrapped() {
        let tile = Text::from("the quick brown fox");
        let wrapped = wrap_tile(tile.clone(), 0);

        assert_eq!(wrapped, tile);
    }
}
