use std::future::Future;
use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::transform::{SubmissionId, TransformError};

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// The request for submission `id` resolved. Raw service text on success.
    TransformFinished {
        id: SubmissionId,
        outcome: Result<String, TransformError>,
    },
    /// Backdrop transition timer expired.
    TransitionElapsed { generation: u64 },
    /// Ctrl+C from the OS or the terminal stream closed.
    Shutdown,
}

pub type AppEventSender = mpsc::UnboundedSender<AppEvent>;

/// Multiplexes terminal input, ticks and signals onto one channel.
///
/// Request tasks and transition timers publish on the same channel through
/// [`EventHandler::sender`], so the runtime loop sees every event in order.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: AppEventSender,
    input_task: JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let input_task = tokio::spawn(forward_events(
            EventStream::new(),
            tokio::signal::ctrl_c(),
            tick_rate,
            tx.clone(),
        ));

        Self { rx, tx, input_task }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> AppEventSender {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.input_task.abort();
    }
}

/// Pump terminal events, ticks and the interrupt signal into `tx` until
/// shutdown or until the receiver goes away.
///
/// `interrupt` is awaited as a single future for the whole session, so a
/// signal arriving between two terminal events is still observed.
async fn forward_events<S, F>(mut stream: S, interrupt: F, tick_rate: Duration, tx: AppEventSender)
where
    S: Stream<Item = io::Result<Event>> + Unpin,
    F: Future<Output = io::Result<()>>,
{
    tokio::pin!(interrupt);
    let mut interrupt_armed = true;
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        let event = tokio::select! {
            _ = ticker.tick() => Some(AppEvent::Tick),
            signal = &mut interrupt, if interrupt_armed => {
                interrupt_armed = false;
                match signal {
                    Ok(()) => Some(AppEvent::Shutdown),
                    Err(err) => {
                        tracing::warn!(error = %err, "failed to listen for interrupt signal");
                        None
                    }
                }
            }
            maybe = stream.next() => match maybe {
                Some(Ok(Event::Key(key))) => Some(AppEvent::Key(key)),
                Some(Ok(Event::Paste(text))) => Some(AppEvent::Paste(text)),
                Some(Ok(Event::Resize(cols, rows))) => Some(AppEvent::Resize(cols, rows)),
                Some(Ok(_)) => None,
                Some(Err(err)) => {
                    tracing::error!(error = %err, "terminal event stream failed");
                    Some(AppEvent::Shutdown)
                }
                None => Some(AppEvent::Shutdown),
            },
        };
        let Some(event) = event else {
            continue;
        };

        let stop = matches!(event, AppEvent::Shutdown);
        if tx.send(event).is_err() || stop {
            break;
        }
    }
}
