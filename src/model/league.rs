use serde::{Deserialize, Serialize};

/// A weekly league tier (Bronze, Silver, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub slug: String,
    pub name: String,
    /// Position in the tier ladder, lowest first.
    pub order_index: u32,
    #[serde(default)]
    pub icon_url: String,
}

/// Envelope of the leagues endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LeaguesData {
    #[serde(default)]
    pub leagues: Vec<League>,
}
