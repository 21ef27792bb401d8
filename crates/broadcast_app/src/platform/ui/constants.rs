pub const TITLE: &str = "LIVE BROADCASTS";
pub const PROMPT: &str = "> ";
pub const LABEL_LOADING: &str = "Loading broadcasts...";
pub const LABEL_NO_BROADCASTS: &str = "No broadcasts available";
pub const DESCRIPTION_MAX_LINES: usize = 3;
pub const DESCRIPTION_MAX_CHARS: usize = 240;

pub const HELP_LINES: &[&str] = &[
    "Commands:",
    "  search [term]        filter by tournament name (empty shows all)",
    "  url [text]           set a custom broadcast URL or id",
    "  go                   hand off the custom URL's id",
    "  toggle <row|tour-id> check or uncheck a tournament",
    "  confirm              hand off the checked tournaments",
    "  list                 redraw the list",
    "  help                 show this help",
    "  quit                 exit",
];
