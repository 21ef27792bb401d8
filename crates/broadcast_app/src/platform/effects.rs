use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use broadcast_core::{Effect, Msg};
use broadcast_engine::{EngineEvent, EngineHandle, FetchSettings};
use broadcast_logging::{broadcast_info, broadcast_warn};

use super::app::AppEvent;

/// Runs core effects against the engine and feeds engine events back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(event_tx: mpsc::Sender<AppEvent>) -> Self {
        let engine = EngineHandle::new(FetchSettings::default());
        let runner = Self { engine };
        runner.spawn_event_loop(event_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchListing => {
                    broadcast_info!("FetchListing requested");
                    self.engine.fetch_listing();
                }
                Effect::EmitSelection { ids } => {
                    // Delivered by the picker itself; nothing should reach here.
                    broadcast_warn!("Unexpected EmitSelection in runner ids={:?}", ids);
                }
            }
        }
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<AppEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                if event_tx.send(AppEvent::Msg(map_event(event))).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListingCompleted { result: Ok(output) } => Msg::ListingFetched {
            body: output.body,
            fetched_utc: Some(output.metadata.fetched_utc),
        },
        EngineEvent::ListingCompleted { result: Err(err) } => {
            broadcast_warn!("Listing failed: {}", err);
            Msg::ListingFailed {
                reason: err.to_string(),
            }
        }
    }
}
