use std::fmt::Debug;
use std::marker::PhantomData;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::task::{Interrupted, Terminator};
use crate::Exit;

const STORE_TICK_RATE: Duration = Duration::from_millis(1000);

/// Message handler of the application state owned by the store.
///
/// Every handled message may end the application by returning an
/// `Exit`, optionally carrying a payload to hand back to the caller.
pub trait Update<M> {
    type Return;

    /// Apply an application message to the state.
    fn update(&mut self, message: M) -> Option<Exit<Self::Return>>;

    /// Advance state that depends on time rather than on input.
    fn tick(&mut self) {}
}

/// Owns the application state between frames.
///
/// The store applies every incoming message to the state and publishes
/// a snapshot of it afterwards; the frontend rebuilds its interface
/// from whatever snapshot arrived last.
pub struct Store<S, M, P> {
    snapshot_tx: UnboundedSender<S>,
    _marker: PhantomData<(M, P)>,
}

impl<S, M, P> Store<S, M, P>
where
    S: Update<M, Return = P> + Clone + Send + Sync + 'static,
    P: Clone + Debug + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<S>) {
        let (snapshot_tx, snapshot_rx) = mpsc::unbounded_channel();

        (
            Self {
                snapshot_tx,
                _marker: PhantomData,
            },
            snapshot_rx,
        )
    }

    /// Run the state loop until a message exits the application or an
    /// interrupt arrives. Ticks with `STORE_TICK_RATE` while idle.
    pub async fn run(
        self,
        mut state: S,
        terminator: Terminator<P>,
        mut message_rx: UnboundedReceiver<M>,
        mut interrupt_rx: broadcast::Receiver<Interrupted<P>>,
    ) -> anyhow::Result<Interrupted<P>> {
        let mut ticker = tokio::time::interval(STORE_TICK_RATE);

        // The frontend blocks on the first snapshot.
        self.snapshot_tx.send(state.clone())?;

        let interrupted = loop {
            tokio::select! {
                Some(message) = message_rx.recv() => {
                    if let Some(exit) = state.update(message) {
                        let interrupted = Interrupted::User { payload: exit.value };
                        let _ = terminator.terminate(interrupted.clone());

                        break interrupted;
                    }

                    self.snapshot_tx.send(state.clone())?;
                },
                _ = ticker.tick() => {
                    state.tick();
                    self.snapshot_tx.send(state.clone())?;
                },
                Ok(interrupted) = interrupt_rx.recv() => break interrupted,
            }
        };

        Ok(interrupted)
    }
}
