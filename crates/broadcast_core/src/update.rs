use broadcast_logging::{broadcast_debug, broadcast_error, broadcast_info, broadcast_warn};

use crate::{ingest, AppState, Availability, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            if state.request_fetch() {
                vec![Effect::FetchListing]
            } else {
                Vec::new()
            }
        }
        Msg::ListingFetched { body, fetched_utc } => {
            // The listing is applied once; late or repeated deliveries are dropped.
            if state.availability() != Availability::Loading {
                broadcast_warn!("Ignoring listing delivered after the list settled");
                return (state, Vec::new());
            }
            let report = ingest(&body);
            for rejected in &report.rejected {
                broadcast_warn!("Skipping malformed listing {}", rejected);
            }
            broadcast_info!(
                "Listing ingested: live={} not_live={} rejected={}",
                report.records.len(),
                report.skipped_not_live,
                report.rejected.len()
            );
            state.apply_listing(report, fetched_utc);
            Vec::new()
        }
        Msg::ListingFailed { reason } => {
            if state.availability() != Availability::Loading {
                return (state, Vec::new());
            }
            broadcast_error!("Error fetching tournaments: {}", reason);
            state.apply_failure(reason);
            Vec::new()
        }
        Msg::SearchInputChanged(text) => {
            state.set_search_input(text);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            state.apply_search();
            Vec::new()
        }
        Msg::CustomUrlChanged(text) => {
            state.set_custom_url(text);
            Vec::new()
        }
        Msg::CustomUrlSubmitted => match state.select_custom_id() {
            Some(ids) => vec![Effect::EmitSelection { ids }],
            None => Vec::new(),
        },
        Msg::CheckboxToggled { tour_id } => {
            if !state.toggle_checkbox(&tour_id) {
                broadcast_debug!("Checkbox toggle rejected for tour_id={}", tour_id);
            }
            Vec::new()
        }
        Msg::ConfirmClicked => {
            let ids = state.confirm_selection();
            vec![Effect::EmitSelection { ids }]
        }
    };

    (state, effects)
}
