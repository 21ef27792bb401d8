use serde::Deserialize;

/// One line of the broadcast listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TournamentRecord {
    pub tour: Tour,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tour {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Round {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ongoing: bool,
}

impl TournamentRecord {
    /// First round currently marked live, if any.
    pub fn ongoing_round(&self) -> Option<&Round> {
        self.rounds.iter().find(|round| round.ongoing)
    }

    pub fn is_live(&self) -> bool {
        self.ongoing_round().is_some()
    }
}
