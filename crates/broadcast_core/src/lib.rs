//! Broadcast core: pure state machine for the live broadcast picker.
mod effect;
mod filter;
mod ingest;
mod msg;
mod picker;
mod record;
mod selection;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::filter_by_name;
pub use ingest::{ingest, IngestReport, LineError};
pub use msg::Msg;
pub use picker::{Picker, SelectionSink};
pub use record::{Round, Tour, TournamentRecord};
pub use selection::{extract_tournament_id, Selection};
pub use state::{AppState, Availability};
pub use update::update;
pub use view_model::{AppViewModel, TournamentRowView};
