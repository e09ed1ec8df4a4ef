use std::io;
use std::thread;

use termion::input::TermRead;
use termion::raw::{IntoRawMode, RawTerminal};

use ratatui::backend::TermionBackend;
use ratatui::{Terminal, TerminalOptions, Viewport};

use tokio::sync::mpsc;

use crate::event::Event;

type Backend = TermionBackend<RawTerminal<io::Stdout>>;

/// Put the terminal into raw mode and build a `ratatui` terminal for
/// the given viewport.
pub fn setup(viewport: Viewport) -> anyhow::Result<Terminal<Backend>> {
    let stdout = io::stdout().into_raw_mode()?;
    let options = TerminalOptions { viewport };

    Ok(Terminal::with_options(TermionBackend::new(stdout), options)?)
}

pub fn restore(terminal: &mut Terminal<Backend>) -> anyhow::Result<()> {
    terminal.clear()?;
    terminal.show_cursor()?;

    Ok(())
}

/// Spawn the two event threads: one forwards key presses read from
/// `stdin`, the other forwards `SIGWINCH` window resizes.
pub fn events() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn({
        let tx = tx.clone();
        move || {
            for key in io::stdin().keys().flatten() {
                if tx.send(Event::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    if let Ok(mut signals) = signal_hook::iterator::Signals::new([libc::SIGWINCH]) {
        thread::spawn(move || {
            for _ in signals.forever() {
                if tx.send(Event::Resize).is_err() {
                    break;
                }
            }
        });
    }

    rx
}
