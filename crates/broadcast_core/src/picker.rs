use broadcast_logging::broadcast_info;

use crate::{update, AppState, AppViewModel, Effect, Msg};

/// Receiver of confirmed selections; the parent application's callback.
pub trait SelectionSink {
    fn on_select(&mut self, ids: &[String]);
}

impl<F> SelectionSink for F
where
    F: FnMut(&[String]),
{
    fn on_select(&mut self, ids: &[String]) {
        self(ids)
    }
}

/// Owns the picker state and the selection callback.
///
/// Selections are delivered to the sink synchronously inside [`Picker::dispatch`],
/// once per confirmation. All other effects are returned for the caller to run.
pub struct Picker<S> {
    state: AppState,
    sink: S,
}

impl<S: SelectionSink> Picker<S> {
    pub fn new(sink: S) -> Self {
        Self {
            state: AppState::new(),
            sink,
        }
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let mut pending = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::EmitSelection { ids } => {
                    broadcast_info!("Emitting selection count={} ids={:?}", ids.len(), ids);
                    self.sink.on_select(&ids);
                }
                other => pending.push(other),
            }
        }
        pending
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
