use termion::event::Key;

/// Events emitted by the terminal event threads.
#[derive(Clone, Copy, Debug)]
pub enum Event {
    Key(Key),
    Resize,
}
