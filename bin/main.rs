use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use anyhow::anyhow;

use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Text};
use ratatui::{Frame, Viewport};

use termion::event::Key;

use masonry_tui as tui;

use tui::store;
use tui::task;
use tui::ui::im::widget::{Masonry, Window};
use tui::ui::im::{Borders, Context, Frontend, Show};
use tui::ui::masonry::DEFAULT_COLUMNS;
use tui::ui::theme::Theme;
use tui::ui::{span, Spacing};
use tui::{Channel, Exit};

pub const NAME: &str = "masonry-tui";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const HELP: &str = r#"
Usage

    masonry-tui [<option>...] [<item>...]

    Distributes the given items round-robin into vertical columns and
    renders each item as one tile. Runs with a built-in set of items
    when none are given.

Options

    -c, --columns <count>        Number of columns to fill (default: 2)
    -s, --spacing <cells>        Spacing between tiles on both axes
        --row-spacing <cells>    Vertical spacing between tiles in a column
        --column-spacing <cells> Horizontal spacing between columns
    -w, --wrap                   Wrap tile text at the column width
        --inline <height>        Render inline below the prompt instead of fullscreen
        --theme <path>           Load widget styles from a JSON file
        --version                Print version
    -h, --help                   Print help

Keys

    q           quit
    1-9         set the column count
    +, -        add or remove a column
    a, d        add or drop an item
    w           toggle line wrapping
"#;

const SAMPLE_ITEMS: &[&str] = &[
    "The five boxing wizards jump quickly.",
    "Pack my box with five dozen liquor jugs.",
    "Sphinx of black quartz, judge my vow.",
    "How vexingly quick daft zebras jump!",
    "Two driven jocks help fax my big quiz.",
    "The quick brown fox jumps over the lazy dog.",
    "Jived fox nymph grabs quick waltz.",
    "Glib jocks quiz nymph to vex dwarf.",
];

#[derive(Debug)]
enum Command {
    Run(Options),
    Help,
    Version,
}

#[derive(Debug)]
struct Options {
    items: Vec<String>,
    columns: usize,
    spacing: Spacing,
    wrap: bool,
    viewport: Viewport,
    theme: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let result = match parse_args(std::env::args_os().skip(1).collect()) {
        Ok(Command::Help) => {
            println!("{NAME} {VERSION}");
            print!("{HELP}");
            Ok(())
        }
        Ok(Command::Version) => {
            println!("{NAME} {VERSION}");
            Ok(())
        }
        Ok(Command::Run(options)) => exec(options).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        eprintln!("{NAME}: {err}");
        process::exit(1);
    }
}

fn parse_args(args: Vec<OsString>) -> anyhow::Result<Command> {
    use lexopt::prelude::*;

    let mut parser = lexopt::Parser::from_args(args);
    let mut items = vec![];
    let mut columns = DEFAULT_COLUMNS;
    let mut spacing: Option<u16> = None;
    let mut row_spacing: Option<u16> = None;
    let mut column_spacing: Option<u16> = None;
    let mut wrap = false;
    let mut viewport = Viewport::Fullscreen;
    let mut theme = None;

    while let Some(arg) = parser.next()? {
        match arg {
            Long("help") | Short('h') => {
                return Ok(Command::Help);
            }
            Long("version") => {
                return Ok(Command::Version);
            }
            Long("columns") | Short('c') => {
                columns = parser.value()?.parse()?;
            }
            Long("spacing") | Short('s') => {
                spacing = Some(parser.value()?.parse()?);
            }
            Long("row-spacing") => {
                row_spacing = Some(parser.value()?.parse()?);
            }
            Long("column-spacing") => {
                column_spacing = Some(parser.value()?.parse()?);
            }
            Long("wrap") | Short('w') => {
                wrap = true;
            }
            Long("inline") => {
                viewport = Viewport::Inline(parser.value()?.parse()?);
            }
            Long("theme") => {
                theme = Some(PathBuf::from(parser.value()?));
            }
            Value(val) => {
                items.push(val.string()?);
            }
            _ => return Err(anyhow!(arg.unexpected())),
        }
    }

    if columns == 0 {
        anyhow::bail!("column count must be at least 1");
    }

    let spacing = {
        let base = spacing.map(Spacing::uniform).unwrap_or_default();

        Spacing {
            row: row_spacing.unwrap_or(base.row),
            column: column_spacing.unwrap_or(base.column),
        }
    };

    Ok(Command::Run(Options {
        items,
        columns,
        spacing,
        wrap,
        viewport,
        theme,
    }))
}

async fn exec(options: Options) -> anyhow::Result<()> {
    tui::log::enable(NAME)?;

    let theme = match &options.theme {
        Some(path) => Theme::load(path)?,
        None => Theme::default(),
    };

    let app = App::new(&options);
    let channel = Channel::default();

    let (terminator, interrupt_rx) = task::create_termination();
    let (store, state_rx) = store::Store::<App, Message, ()>::new();
    let frontend = Frontend::new(options.viewport).with_theme(theme);

    tokio::try_join!(
        store.run(app, terminator, channel.rx, interrupt_rx.resubscribe()),
        frontend.run(channel.tx, state_rx, interrupt_rx.resubscribe()),
    )?;

    Ok(())
}

#[derive(Clone, Debug)]
enum Message {
    Quit,
    SetColumns(usize),
    AddColumn,
    RemoveColumn,
    AddItem,
    RemoveItem,
    ToggleWrap,
}

#[derive(Clone, Debug)]
struct App {
    items: Vec<String>,
    columns: usize,
    spacing: Spacing,
    wrap: bool,
}

impl App {
    fn new(options: &Options) -> Self {
        let items = if options.items.is_empty() {
            SAMPLE_ITEMS.iter().map(|item| item.to_string()).collect()
        } else {
            options.items.clone()
        };

        Self {
            items,
            columns: options.columns,
            spacing: options.spacing,
            wrap: options.wrap,
        }
    }
}

impl store::Update<Message> for App {
    type Return = ();

    fn update(&mut self, message: Message) -> Option<Exit<()>> {
        match message {
            Message::Quit => Some(Exit { value: None }),
            Message::SetColumns(columns) => {
                self.columns = columns;
                None
            }
            Message::AddColumn => {
                self.columns = self.columns.saturating_add(1);
                None
            }
            Message::RemoveColumn => {
                // A column count of zero would fail the next draw.
                self.columns = self.columns.saturating_sub(1).max(1);
                None
            }
            Message::AddItem => {
                let next = SAMPLE_ITEMS[self.items.len() % SAMPLE_ITEMS.len()];
                self.items.push(next.to_string());
                None
            }
            Message::RemoveItem => {
                self.items.pop();
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
    fn show(&self, ctx: &Context<Message>, frame: &mut Frame) -> anyhow::Result<()> {
        Window::default()
            .show(ctx, |ui| {
                let layout = Layout::vertical([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ]);

                let inner = ui
                    .layout(layout, |ui| -> anyhow::Result<()> {
                        let output = Masonry::new(&self.items, Some(Borders::All))
                            .with_columns(self.columns)
                            .with_spacing(self.spacing)
                            .wrap(self.wrap)
                            .show(ui, frame, |item, index| tile(item, index))?;

                        let state = output.state;
                        let mut status = vec![span::dim(&format!(
                            "{} item(s) in {} column(s)",
                            state.len(),
                            state.columns()
                        ))];
                        if self.wrap {
                            status.push(span::dim(" · wrapped"));
                        }

                        ui.label(frame, Line::from(status));
                        ui.shortcuts(
                            frame,
                            &[
                                ("q", "quit"),
                                ("1-9", "columns"),
                                ("a/d", "add/drop item"),
                                ("w", "wrap"),
                            ],
                            '∙',
                        );

                        Ok(())
                    })
                    .inner;

                if let Some(key) = ui.input_with_key(|_| true) {
                    match key {
                        Key::Char('q') => ui.send_message(Message::Quit),
                        Key::Char('+') => ui.send_message(Message::AddColumn),
                        Key::Char('-') => ui.send_message(Message::RemoveColumn),
                        Key::Char('a') => ui.send_message(Message::AddItem),
                        Key::Char('d') => ui.send_message(Message::RemoveItem),
                        Key::Char('w') => ui.send_message(Message::ToggleWrap),
                        Key::Char(c) if ('1'..='9').contains(&c) => {
                            ui.send_message(Message::SetColumns((c as u8 - b'0') as usize));
                        }
                        _ => {}
                    }
                }

                inner
            })
            .inner
    }
}

fn tile(item: &str, index: usize) -> Text<'static> {
    Text::from(vec![
        Line::from(span::badge(&format!("{index}"))),
        Line::from(span::default(item)),
    ])
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Command> {
        parse_args(args.iter().map(OsString::from).collect())
    }

    fn options(args: &[&str]) -> anyhow::Result<Options> {
        match parse(args)? {
            Command::Run(options) => Ok(options),
            command => anyhow::bail!("expected run command, got {command:?}"),
        }
    }

    #[test]
    fn defaults_should_apply() -> anyhow::Result<()> {
        let options = options(&[])?;

        assert_eq!(options.columns, DEFAULT_COLUMNS);
        assert_eq!(options.spacing, Spacing::default());
        assert_eq!(options.items, Vec::<String>::new());
        assert!(!options.wrap);
        assert!(matches!(options.viewport, Viewport::Fullscreen));

        Ok(())
    }

    #[test]
    fn columns_and_items_should_be_parsed() -> anyhow::Result<()> {
        let options = options(&["--columns", "3", "a", "b"])?;

        assert_eq!(options.columns, 3);
        assert_eq!(options.items, vec!["a".to_string(), "b".to_string()]);

        Ok(())
    }

    #[test]
    fn zero_columns_should_be_rejected() {
        assert!(parse(&["--columns", "0", "a"]).is_err());
    }

    #[test]
    fn spacing_overrides_should_combine() -> anyhow::Result<()> {
        let options = options(&["--spacing", "3", "--row-spacing", "1"])?;
        assert_eq!(options.spacing, Spacing::new(1, 3));

        Ok(())
    }

    #[test]
    fn inline_option_should_set_viewport() -> anyhow::Result<()> {
        let options = options(&["--inline", "15"])?;
        assert!(matches!(options.viewport, Viewport::Inline(15)));

        Ok(())
    }

    #[test]
    fn unknown_option_should_be_rejected() {
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn help_and_version_flags_should_be_parsed() -> anyhow::Result<()> {
        assert!(matches!(parse(&["--help"])?, Command::Help));
        assert!(matches!(parse(&["--version"])?, Command::Version));

        Ok(())
    }

    fn app(items: &[&str], columns: usize) -> App {
        App {
            items: items.iter().map(|item| item.to_string()).collect(),
            columns,
            spacing: Spacing::default(),
            wrap: false,
        }
    }

    #[test]
    fn quit_message_should_exit() {
        use store::Update as _;

        let mut app = app(&["a"], 2);
        let exit = app.update(Message::Quit);

        assert!(matches!(exit, Some(Exit { value: None })));
    }

    #[test]
    fn column_count_should_never_drop_below_one() {
        use store::Update as _;

        let mut app = app(&["a", "b"], 1);
        app.update(Message::RemoveColumn);

        assert_eq!(app.columns, 1);
    }

    #[test]
    fn items_should_be_added_and_dropped() {
        use store::Update as _;

        let mut app = app(&[], 2);
        app.update(Message::AddItem);
        assert_eq!(app.items.len(), 1);

        app.update(Message::RemoveItem);
        app.update(Message::RemoveItem);
        assert_eq!(app.items.len(), 0);
    }
}
