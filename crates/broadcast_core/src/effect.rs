#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the one-off listing request.
    FetchListing,
    /// Hand the chosen ids to the parent application.
    EmitSelection { ids: Vec<String> },
}
