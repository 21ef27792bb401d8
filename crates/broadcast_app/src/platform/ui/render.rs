use broadcast_core::{AppViewModel, Availability, TournamentRowView};

use super::constants::*;

/// Renders the whole picker as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![TITLE.to_string(), "=".repeat(TITLE.len())];

    lines.push(render_inputs(view));
    lines.push(render_selection(&view.selection));
    lines.push(String::new());

    if view.availability == Availability::Loading {
        lines.push(LABEL_LOADING.to_string());
    } else if view.show_no_broadcasts {
        lines.push(LABEL_NO_BROADCASTS.to_string());
    } else {
        for (index, row) in view.rows.iter().enumerate() {
            lines.extend(render_row(index + 1, row));
        }
    }

    lines.push(String::new());
    lines.push(render_status(view));
    lines
}

fn render_inputs(view: &AppViewModel) -> String {
    let custom = match &view.pending_custom_id {
        Some(id) => format!("{:?} (id {id})", view.custom_url_input),
        None => format!("{:?}", view.custom_url_input),
    };
    format!("Search: {:?} | Custom URL: {custom}", view.search_input)
}

fn render_selection(selection: &[String]) -> String {
    if selection.is_empty() {
        "Selected: none".to_string()
    } else {
        format!("Selected ({}): {}", selection.len(), selection.join(", "))
    }
}

fn render_row(number: usize, row: &TournamentRowView) -> Vec<String> {
    let check = if row.checked { "[x]" } else { "[ ]" };
    let marker = if row.selected { " *" } else { "" };
    let mut lines = vec![match &row.date {
        Some(date) => format!("{number:>3}. {check} {}  ({date}){marker}", row.name),
        None => format!("{number:>3}. {check} {}{marker}", row.name),
    }];
    if let Some(description) = &row.description {
        lines.extend(
            truncate_description(description)
                .into_iter()
                .map(|line| format!("       {line}")),
        );
    }
    if let Some(url) = &row.url {
        lines.push(format!("       Official website: {url}"));
    }
    if let Some(image) = &row.image {
        lines.push(format!("       Image: {image}"));
    }
    lines
}

fn render_status(view: &AppViewModel) -> String {
    let mut parts = vec![format!("Showing {} of {}", view.rows.len(), view.total_count)];
    if let Some(fetched) = &view.fetched_utc {
        parts.push(format!("fetched {fetched}"));
    }
    if view.rejected_lines > 0 {
        parts.push(format!("{} malformed line(s) skipped", view.rejected_lines));
    }
    if let Some(error) = &view.load_error {
        parts.push(format!("load failed: {error}"));
    }
    parts.join(" | ")
}

/// Keeps at most three lines and a bounded number of characters.
fn truncate_description(description: &str) -> Vec<String> {
    let mut remaining = DESCRIPTION_MAX_CHARS;
    let mut out = Vec::new();
    let mut truncated = false;

    for line in description.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if out.len() == DESCRIPTION_MAX_LINES || remaining == 0 {
            truncated = true;
            break;
        }
        let count = line.chars().count();
        if count > remaining {
            out.push(line.chars().take(remaining).collect());
            remaining = 0;
            truncated = true;
            break;
        }
        remaining -= count;
        out.push(line.to_string());
    }

    if truncated {
        if let Some(last) = out.last_mut() {
            last.push_str("...");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(tour_id: &str, name: &str) -> TournamentRowView {
        TournamentRowView {
            tour_id: tour_id.to_string(),
            name: name.to_string(),
            date: None,
            description: None,
            url: None,
            image: None,
            checked: false,
            selected: false,
        }
    }

    #[test]
    fn loading_state_shows_loading_label() {
        let lines = render(&AppViewModel::default());
        assert!(lines.contains(&LABEL_LOADING.to_string()));
        assert!(!lines.contains(&LABEL_NO_BROADCASTS.to_string()));
    }

    #[test]
    fn settled_empty_view_shows_notice() {
        let view = AppViewModel {
            availability: Availability::Unavailable,
            show_no_broadcasts: true,
            load_error: Some("timeout".to_string()),
            ..AppViewModel::default()
        };
        let lines = render(&view);
        assert!(lines.contains(&LABEL_NO_BROADCASTS.to_string()));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Showing 0 of 0 | load failed: timeout")
        );
    }

    #[test]
    fn rows_show_checkbox_selection_and_details() {
        let mut checked = row("a", "Spring Open");
        checked.checked = true;
        checked.selected = true;
        checked.date = Some("2024-05-01".to_string());
        checked.url = Some("https://lichess.org/broadcast/spring-open/a".to_string());
        let view = AppViewModel {
            availability: Availability::Available,
            rows: vec![checked, row("c", "Autumn Spring Classic")],
            total_count: 3,
            selection: vec!["r1".to_string()],
            ..AppViewModel::default()
        };

        let lines = render(&view);

        assert!(lines.contains(&"  1. [x] Spring Open  (2024-05-01) *".to_string()));
        assert!(lines.contains(
            &"       Official website: https://lichess.org/broadcast/spring-open/a".to_string()
        ));
        assert!(lines.contains(&"  2. [ ] Autumn Spring Classic".to_string()));
        assert!(lines.contains(&"Selected (1): r1".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("Showing 2 of 3"));
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let text = "one\ntwo\nthree\nfour";
        assert_eq!(
            truncate_description(text),
            vec!["one".to_string(), "two".to_string(), "three...".to_string()]
        );

        let long = "x".repeat(DESCRIPTION_MAX_CHARS + 10);
        let out = truncate_description(&long);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].chars().count(), DESCRIPTION_MAX_CHARS + 3);

        assert_eq!(truncate_description("short"), vec!["short".to_string()]);
    }
}
