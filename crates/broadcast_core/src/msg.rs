#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The picker was displayed; requests the listing on first delivery.
    Mounted,
    /// Engine delivered the raw listing document.
    ListingFetched {
        body: String,
        fetched_utc: Option<String>,
    },
    /// Engine failed to fetch or decode the listing.
    ListingFailed { reason: String },
    /// User edited the search box.
    SearchInputChanged(String),
    /// User clicked Search.
    SearchSubmitted,
    /// User edited the custom URL box.
    CustomUrlChanged(String),
    /// User clicked Go next to the custom URL box.
    CustomUrlSubmitted,
    /// User toggled the checkbox of a listed tournament.
    CheckboxToggled { tour_id: String },
    /// User clicked Confirm.
    ConfirmClicked,
}
