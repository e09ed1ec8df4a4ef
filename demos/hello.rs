use anyhow::Result;

use ratatui::text::{Line, Text};
use ratatui::{Frame, Viewport};

use termion::event::Key;

use masonry_tui as tui;

use tui::store::Update;
use tui::ui::im::widget::{Masonry, Window};
use tui::ui::im::{Borders, Context, Show};
use tui::ui::{span, ToTile};
use tui::{Channel, Exit};

#[derive(Clone, Debug)]
struct Card {
    title: String,
    body: String,
}

impl Card {
    fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

impl ToTile for Card {
    fn to_tile(&self) -> Text<'_> {
        Text::from(vec![
            Line::from(span::primary(&self.title)),
            Line::from(span::default(&self.body)),
        ])
    }
}

#[derive(Clone, Debug)]
struct App {
    cards: Vec<Card>,
}

#[derive(Clone, Debug)]
enum Message {
    Quit,
}

impl Update<Message> for App {
    type Return = ();

    fn update(&mut self, message: Message) -> Option<Exit<()>> {
        match message {
            Message::Quit => Some(Exit { value: None }),
        }
    }
}

impl Show<Message> for App {
    fn show(&self, ctx: &Context<Message>, frame: &mut Frame) -> Result<()> {
        Window::default().show(ctx, |ui| {
            ui.add(frame, Masonry::new(&self.cards, Some(Borders::All)));

            if ui.input(|key| key == Key::Char('q')) {
                ui.send_message(Message::Quit);
            }
        });

        Ok(())
    }
}

#[tokio::main]
pub async fn main() -> Result<()> {
    let app = App {
        cards: vec![
            Card::new("Mercury", "Closest to the sun, no atmosphere to speak of."),
            Card::new("Venus", "Hotter than Mercury despite being further out."),
            Card::new("Earth", "The only one with confirmed masonry."),
            Card::new("Mars", "Home to the tallest volcano we know of."),
            Card::new("Jupiter", "More massive than all other planets combined."),
            Card::new("Saturn", "Would float in a big enough bathtub."),
            Card::new("Uranus", "Rotates on its side."),
            Card::new("Neptune", "Found with pen and paper before a telescope."),
        ],
    };

    tui::im(app, Viewport::Inline(16), Channel::default()).await?;

    Ok(())
}
