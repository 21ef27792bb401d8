use url::Url;

/// Ordered set of identifiers chosen for hand-off.
///
/// Insertion order is kept so the collaborator sees ids in the order they
/// were picked. Duplicates cannot occur.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Adds `id` if absent, removes it if present. Returns `true` when the
    /// id is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn replace_with(&mut self, id: impl Into<String>) {
        self.ids.clear();
        self.ids.push(id.into());
    }

    /// Returns the ids and leaves the selection empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.ids)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Extract a tournament id from user input: the last non-empty
/// `/`-delimited path segment.
///
/// Absolute URLs are parsed so that a query string or fragment does not end
/// up in the id. Anything else is split as-is. Returns `None` when nothing is
/// left.
pub fn extract_tournament_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let segment = match Url::parse(input) {
        Ok(url) if !url.cannot_be_a_base() => url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(ToOwned::to_owned),
        _ => input
            .split('/')
            .filter(|s| !s.is_empty())
            .last()
            .map(ToOwned::to_owned),
    };

    segment.filter(|s| !s.trim().is_empty())
}
