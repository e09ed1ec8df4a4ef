use ratatui::style::Stylize;
use ratatui::text::Span;

use crate::ui::theme::style;

pub fn default(content: &str) -> Span<'static> {
    Span::raw(content.to_string())
}

pub fn primary(content: &str) -> Span<'static> {
    default(content).style(style::cyan())
}

pub fn badge(content: &str) -> Span<'static> {
    default(&format!(" {content} ")).magenta().reversed()
}

pub fn dim(content: &str) -> Span<'static> {
    default(content).style(style::gray().dim())
}
