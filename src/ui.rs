pub mod im;
pub mod layout;
pub mod masonry;
pub mod span;
pub mod theme;

use ratatui::text::Text;

/// Spacing between masonry tiles, in terminal cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Spacing {
    pub row: u16,
    pub column: u16,
}

impl Spacing {
    pub fn new(row: u16, column: u16) -> Self {
        Self { row, column }
    }

    /// Use the same spacing on both axes.
    pub fn uniform(spacing: u16) -> Self {
        Self::new(spacing, spacing)
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self { row: 1, column: 2 }
    }
}

/// Items that know how to render themselves as a masonry tile.
pub trait ToTile {
    fn to_tile(&self) -> Text<'_>;
}

impl ToTile for String {
    fn to_tile(&self) -> Text<'_> {
        Text::raw(self.as_str())
    }
}
