pub mod event;
pub mod log;
pub mod store;
pub mod task;
pub mod terminal;
pub mod ui;

use std::fmt::Debug;

use anyhow::Result;

use ratatui::Viewport;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use store::{Store, Update};
use task::Interrupted;
use ui::im::{Frontend, Show};

/// An optional return value.
pub struct Exit<T> {
    pub value: Option<T>,
}

/// Sending and receiving halves of the application message channel.
pub struct Channel<M> {
    pub tx: UnboundedSender<M>,
    pub rx: UnboundedReceiver<M>,
}

impl<M> Default for Channel<M> {
    fn default() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

/// Run an immediate-mode application: the store keeps updating `state`
/// with the messages it receives, while the frontend redraws the latest
/// state. Returns the payload the application exited with, if any.
pub async fn im<S, M, P>(state: S, viewport: Viewport, channel: Channel<M>) -> Result<Option<P>>
where
    S: Update<M, Return = P> + Show<M> + Clone + Debug + Send + Sync + 'static,
    M: Clone + 'static,
    P: Clone + Debug + Send + Sync + 'static,
{
    let (terminator, mut interrupt_rx) = task::create_termination();

    let (store, state_rx) = Store::<S, M, P>::new();
    let frontend = Frontend::new(viewport);

    tokio::try_join!(
        store.run(state, terminator, channel.rx, interrupt_rx.resubscribe()),
        frontend.run(channel.tx, state_rx, interrupt_rx.resubscribe()),
    )?;

    if let Ok(reason) = interrupt_rx.recv().await {
        match reason {
            Interrupted::User { payload } => Ok(payload),
            Interrupted::OsSignal => anyhow::bail!("exited because of an os sig int"),
        }
    } else {
        anyhow::bail!("exited because of an unexpected error");
    }
}
