use std::fmt::Debug;

use tokio::sync::broadcast;

/// Reason the application stopped: an OS signal or a user request,
/// the latter optionally carrying a final payload.
#[derive(Debug, Clone)]
pub enum Interrupted<P>
where
    P: Clone + Send + Sync + Debug,
{
    OsSignal,
    User { payload: Option<P> },
}

/// Sending half of the interrupt channel. Whoever holds a clone of it
/// can shut the application down.
#[derive(Debug, Clone)]
pub struct Terminator<P>
where
    P: Clone + Send + Sync + Debug,
{
    tx: broadcast::Sender<Interrupted<P>>,
}

impl<P> Terminator<P>
where
    P: Clone + Send + Sync + Debug + 'static,
{
    pub fn new(tx: broadcast::Sender<Interrupted<P>>) -> Self {
        Self { tx }
    }

    /// Broadcast an interrupt to all receivers.
    pub fn terminate(&self, interrupted: Interrupted<P>) -> anyhow::Result<()> {
        self.tx.send(interrupted)?;

        Ok(())
    }
}

/// Create the interrupt channel. On Unix, a spawned task listens for
/// `SIGINT` and terminates the application when it arrives.
pub fn create_termination<P>() -> (Terminator<P>, broadcast::Receiver<Interrupted<P>>)
where
    P: Clone + Send + Sync + Debug + 'static,
{
    let (tx, rx) = broadcast::channel(1);
    let terminator = Terminator::new(tx);

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let terminator = terminator.clone();
        tokio::spawn(async move {
            if let Ok(mut interrupt) = signal(SignalKind::interrupt()) {
                interrupt.recv().await;
                let _ = terminator.terminate(Interrupted::OsSignal);
            }
        });
    }

    (terminator, rx)
}
