use anyhow::Result;

use ratatui::layout::{Constraint, Layout};
use ratatui::style::Stylize;
use ratatui::text::{Line, Text};
use ratatui::{Frame, Viewport};

use termion::event::Key;

use masonry_tui as tui;

use tui::store::Update;
use tui::ui::im::widget::{Masonry, Window};
use tui::ui::im::{Borders, Context, Show};
use tui::ui::theme::style;
use tui::ui::{span, Spacing};
use tui::{Channel, Exit};

const QUOTES: &[(&str, &str)] = &[
    ("Talk is cheap. Show me the code.", "Linus Torvalds"),
    ("Premature optimization is the root of all evil.", "Donald Knuth"),
    ("Simplicity is prerequisite for reliability.", "Edsger Dijkstra"),
    ("Make it work, make it right, make it fast.", "Kent Beck"),
    (
        "Programs must be written for people to read, and only incidentally for machines to execute.",
        "Harold Abelson",
    ),
    ("The best way to predict the future is to invent it.", "Alan Kay"),
    (
        "There are only two hard things in computer science: cache invalidation and naming things.",
        "Phil Karlton",
    ),
    ("Deleted code is debugged code.", "Jeff Sickel"),
];

#[derive(Clone, Debug)]
struct Quote {
    text: String,
    author: String,
}

#[derive(Clone, Debug)]
struct App {
    quotes: Vec<Quote>,
    columns: usize,
    selected: usize,
    wrap: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            quotes: QUOTES
                .iter()
                .map(|(text, author)| Quote {
                    text: text.to_string(),
                    author: author.to_string(),
                })
                .collect(),
            columns: 3,
            selected: 0,
            wrap: true,
        }
    }
}

#[derive(Clone, Debug)]
enum Message {
    Quit,
    Pick,
    Next,
    Previous,
    AddColumn,
    RemoveColumn,
    ToggleWrap,
}

impl Update<Message> for App {
    type Return = String;

    fn update(&mut self, message: Message) -> Option<Exit<String>> {
        match message {
            Message::Quit => Some(Exit { value: None }),
            Message::Pick => {
                let quote = self.quotes.get(self.selected)?;

                Some(Exit {
                    value: Some(format!("\"{}\" ({})", quote.text, quote.author)),
                })
            }
            Message::Next => {
                if !self.quotes.is_empty() {
                    self.selected = (self.selected + 1) % self.quotes.len();
                }
                None
            }
            Message::Previous => {
                if !self.quotes.is_empty() {
                    self.selected = self
                        .selected
                        .checked_sub(1)
                        .unwrap_or(self.quotes.len() - 1);
                }
                None
            }
            Message::AddColumn => {
                self.columns = self.columns.saturating_add(1);
                None
            }
            Message::RemoveColumn => {
                self.columns = self.columns.saturating_sub(1).max(1);
                None
            }
            Message::ToggleWrap => {
                self.wrap = !self.wrap;
                None
            }
        }
    }
}

impl Show<Message> for App {
    fn show(&self, ctx: &Context<Message>, frame: &mut Frame) -> Result<()> {
        Window::default()
            .show(ctx, |ui| {
                let layout = Layout::vertical([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ]);

                let inner = ui
                    .layout(layout, |ui| -> Result<()> {
                        let selected = self.selected;
                        let output = Masonry::new(&self.quotes, Some(Borders::All))
                            .with_columns(self.columns)
                            .with_spacing(Spacing::uniform(1))
                            .wrap(self.wrap)
                            .show(ui, frame, |quote, index| {
                                let text = if index == selected {
                                    Line::from(quote.text.as_str()).style(style::cyan().reversed())
                                } else {
                                    Line::from(quote.text.as_str())
                                };
                                let author = Line::from(format!("- {}", quote.author))
                                    .style(style::gray().dim());

                                Text::from(vec![text, author])
                            })?;

                        ui.overline(frame);

                        let state = output.state;
                        let status = if state.is_empty() {
                            String::from("Nothing to pick")
                        } else {
                            format!(
                                "quote {} of {}, column {} of {}",
                                selected + 1,
                                state.len(),
                                selected % state.columns() + 1,
                                state.columns()
                            )
                        };
                        ui.label(frame, Line::from(span::dim(&status)));

                        ui.shortcuts(
                            frame,
                            &[
                                ("←/→", "select"),
                                ("+/-", "columns"),
                                ("w", "wrap"),
                                ("↵", "pick"),
                                ("q", "quit"),
                            ],
                            '∙',
                        );

                        Ok(())
                    })
                    .inner;

                if let Some(key) = ui.input_with_key(|_| true) {
                    match key {
                        Key::Char('q') => ui.send_message(Message::Quit),
                        Key::Char('\n') => ui.send_message(Message::Pick),
                        Key::Right => ui.send_message(Message::Next),
                        Key::Left => ui.send_message(Message::Previous),
                        Key::Char('+') => ui.send_message(Message::AddColumn),
                        Key::Char('-') => ui.send_message(Message::RemoveColumn),
                        Key::Char('w') => ui.send_message(Message::ToggleWrap),
                        _ => {}
                    }
                }

                inner
            })
            .inner
    }
}

#[tokio::main]
pub async fn main() -> Result<()> {
    if let Some(quote) = tui::im(App::default(), Viewport::Inline(20), Channel::default()).await? {
        println!("{quote}");
    }

    Ok(())
}
