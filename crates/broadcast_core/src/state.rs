use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, TournamentRowView};
use crate::{extract_tournament_id, filter_by_name, IngestReport, Selection, TournamentRecord};

/// Whether the listing has settled and produced anything to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Loading,
    Available,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    fetch_requested: bool,
    availability: Availability,
    records: Vec<TournamentRecord>,
    visible: Vec<TournamentRecord>,
    search_input: String,
    custom_url_input: String,
    custom_id: Option<String>,
    // Keyed by tour id.
    checked: BTreeMap<String, bool>,
    selection: Selection,
    rejected_lines: usize,
    load_error: Option<String>,
    fetched_utc: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// Full ingested list.
    pub fn records(&self) -> &[TournamentRecord] {
        &self.records
    }

    /// Current filtered view.
    pub fn visible(&self) -> &[TournamentRecord] {
        &self.visible
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_checked(&self, tour_id: &str) -> bool {
        self.checked.get(tour_id).copied().unwrap_or(false)
    }

    pub fn custom_id(&self) -> Option<&str> {
        self.custom_id.as_deref()
    }

    pub fn view(&self) -> AppViewModel {
        let rows = self
            .visible
            .iter()
            .map(|record| TournamentRowView {
                tour_id: record.tour.id.clone(),
                name: record.tour.name.clone(),
                date: record.tour.date.clone(),
                description: record.tour.description.clone(),
                url: record.tour.url.clone(),
                image: record.image.clone(),
                checked: self.is_checked(&record.tour.id),
                selected: record
                    .ongoing_round()
                    .is_some_and(|round| self.selection.contains(&round.id)),
            })
            .collect::<Vec<_>>();

        AppViewModel {
            availability: self.availability,
            show_no_broadcasts: self.availability != Availability::Loading && rows.is_empty(),
            rows,
            total_count: self.records.len(),
            selection: self.selection.ids().to_vec(),
            search_input: self.search_input.clone(),
            custom_url_input: self.custom_url_input.clone(),
            pending_custom_id: self.custom_id.clone(),
            rejected_lines: self.rejected_lines,
            load_error: self.load_error.clone(),
            fetched_utc: self.fetched_utc.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns `true` only the first time; the listing is fetched once.
    pub(crate) fn request_fetch(&mut self) -> bool {
        if self.fetch_requested {
            return false;
        }
        self.fetch_requested = true;
        true
    }

    /// Replaces both lists in one step.
    pub(crate) fn apply_listing(&mut self, report: IngestReport, fetched_utc: Option<String>) {
        self.rejected_lines = report.rejected.len();
        self.availability = if report.records.is_empty() {
            Availability::Unavailable
        } else {
            Availability::Available
        };
        self.visible = report.records.clone();
        self.records = report.records;
        self.load_error = None;
        self.fetched_utc = fetched_utc;
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self, reason: String) {
        self.availability = Availability::Unavailable;
        self.records.clear();
        self.visible.clear();
        self.load_error = Some(reason);
        self.mark_dirty();
    }

    pub(crate) fn set_search_input(&mut self, text: String) {
        if self.search_input != text {
            self.search_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn apply_search(&mut self) {
        self.visible = filter_by_name(&self.records, &self.search_input);
        self.mark_dirty();
    }

    pub(crate) fn set_custom_url(&mut self, text: String) {
        if self.custom_url_input != text {
            self.custom_id = extract_tournament_id(&text);
            self.custom_url_input = text;
            self.mark_dirty();
        }
    }

    /// Hands out the custom id as a one-element selection, then resets
    /// selection and checkboxes like a confirm. `None` when there is no id.
    pub(crate) fn select_custom_id(&mut self) -> Option<Vec<String>> {
        let id = self.custom_id.clone()?;
        self.selection.replace_with(id);
        self.checked.clear();
        self.mark_dirty();
        Some(self.selection.take())
    }

    /// Flips the checkbox of `tour_id` and toggles its ongoing round in the
    /// selection. Tournaments without an ongoing round are rejected so the
    /// checkbox never drifts from the selection.
    pub(crate) fn toggle_checkbox(&mut self, tour_id: &str) -> bool {
        let Some(round_id) = self
            .records
            .iter()
            .find(|record| record.tour.id == tour_id)
            .and_then(TournamentRecord::ongoing_round)
            .map(|round| round.id.clone())
        else {
            return false;
        };

        let flag = self.checked.entry(tour_id.to_string()).or_insert(false);
        *flag = !*flag;
        self.selection.toggle(&round_id);
        self.mark_dirty();
        true
    }

    /// Hands out the selection and resets selection and checkboxes.
    pub(crate) fn confirm_selection(&mut self) -> Vec<String> {
        self.checked.clear();
        self.mark_dirty();
        self.selection.take()
    }
}
