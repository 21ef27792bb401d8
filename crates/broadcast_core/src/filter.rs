use crate::TournamentRecord;

/// Case-insensitive substring match of `term` against each tournament name.
///
/// An empty term keeps every record. Order is preserved.
pub fn filter_by_name(records: &[TournamentRecord], term: &str) -> Vec<TournamentRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.tour.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
