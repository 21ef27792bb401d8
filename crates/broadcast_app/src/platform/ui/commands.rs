use broadcast_core::{AppViewModel, Msg};
use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    CustomUrl(String),
    Go,
    Toggle(String),
    Confirm,
    List,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("no listed tournament matches `{0}`")]
    NoSuchRow(String),
}

/// Parses a line; blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Search(rest.to_string()),
        "url" | "u" => Command::CustomUrl(rest.to_string()),
        "go" => Command::Go,
        "toggle" | "t" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("toggle"));
            }
            Command::Toggle(rest.to_string())
        }
        "confirm" | "c" => Command::Confirm,
        "list" | "l" => Command::List,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Translates a command into core messages, resolving row numbers against
/// the rows currently shown.
pub fn to_msgs(command: &Command, view: &AppViewModel) -> Result<Vec<Msg>, CommandError> {
    let msgs = match command {
        Command::Search(term) => vec![Msg::SearchInputChanged(term.clone()), Msg::SearchSubmitted],
        Command::CustomUrl(text) => vec![Msg::CustomUrlChanged(text.clone())],
        Command::Go => vec![Msg::CustomUrlSubmitted],
        Command::Toggle(key) => vec![Msg::CheckboxToggled {
            tour_id: resolve_row(key, view)?,
        }],
        Command::Confirm => vec![Msg::ConfirmClicked],
        Command::List | Command::Help | Command::Quit => Vec::new(),
    };
    Ok(msgs)
}

fn resolve_row(key: &str, view: &AppViewModel) -> Result<String, CommandError> {
    let by_number = key
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| view.rows.get(index));
    by_number
        .or_else(|| view.rows.iter().find(|row| row.tour_id == key))
        .map(|row| row.tour_id.clone())
        .ok_or_else(|| CommandError::NoSuchRow(key.to_string()))
}
