use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use broadcast_logging::{broadcast_error, broadcast_info, broadcast_warn};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    FetchListing,
}

/// Handle to the IO worker. Cloning shares the same worker and event queue.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    broadcast_error!("Failed to start engine runtime: {}", err);
                    fail_pending(&cmd_rx, &event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                let cancel = worker_cancel.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx, cancel).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
            cancel,
        }
    }

    pub fn fetch_listing(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchListing);
    }

    /// Cancels in-flight work; pending fetches complete with `FailureKind::Cancelled`.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        // A panic while holding the guard leaves the receiver itself intact.
        let event_rx = self.event_rx.lock().unwrap_or_else(|poisoned| {
            broadcast_warn!("Engine event queue lock was poisoned; recovering");
            poisoned.into_inner()
        });
        event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    cancel: CancellationToken,
) {
    match command {
        EngineCommand::FetchListing => {
            let result = match cancel.run_until_cancelled(fetcher.fetch_listing()).await {
                Some(result) => result,
                None => Err(FetchError::new(FailureKind::Cancelled, "engine shut down")),
            };
            match &result {
                Ok(output) => broadcast_info!(
                    "Listing fetched bytes={} encoding={}",
                    output.metadata.byte_len,
                    output.metadata.encoding_label
                ),
                Err(err) => broadcast_warn!("Listing fetch failed: {}", err),
            }
            let _ = event_tx.send(EngineEvent::ListingCompleted { result });
        }
    }
}

fn fail_pending(
    cmd_rx: &mpsc::Receiver<EngineCommand>,
    event_tx: &mpsc::Sender<EngineEvent>,
    reason: &str,
) {
    while let Ok(EngineCommand::FetchListing) = cmd_rx.recv() {
        let _ = event_tx.send(EngineEvent::ListingCompleted {
            result: Err(FetchError::new(FailureKind::Network, reason)),
        });
    }
}
