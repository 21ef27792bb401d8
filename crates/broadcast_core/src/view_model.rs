use crate::Availability;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub availability: Availability,
    pub rows: Vec<TournamentRowView>,
    /// Size of the full ingested list, before filtering.
    pub total_count: usize,
    pub selection: Vec<String>,
    pub search_input: String,
    pub custom_url_input: String,
    pub pending_custom_id: Option<String>,
    pub rejected_lines: usize,
    pub load_error: Option<String>,
    pub fetched_utc: Option<String>,
    /// Listing has settled and there is nothing to list.
    pub show_no_broadcasts: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentRowView {
    pub tour_id: String,
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub checked: bool,
    /// The row's ongoing round is part of the selection.
    pub selected: bool,
}
