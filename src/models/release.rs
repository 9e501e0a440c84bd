use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Release — GET /releases/{id} response (only the fields the tracker uses)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<ReleaseArtist>,
    /// Lowest listed marketplace price. Absent/null means no current listing
    /// and is treated the same as 0.
    #[serde(default)]
    pub lowest_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseArtist {
    pub name: String,
}

impl Release {
    /// Lowest listed price, with absent/null mapped to 0 (not listed).
    pub fn lowest(&self) -> f64 {
        self.lowest_price.unwrap_or(0.0)
    }

    /// Primary artist name with any catalog-internal parenthetical
    /// disambiguation suffix removed, e.g. `"Nirvana (2)"` -> `"Nirvana"`.
    pub fn primary_artist(&self) -> Option<String> {
        self.artists
            .first()
            .map(|a| strip_disambiguation(&a.name))
    }
}

/// Remove a trailing ` (...)` disambiguation suffix from an artist name.
pub fn strip_disambiguation(name: &str) -> String {
    let trimmed = name.trim_end();
    if trimmed.ends_with(')') {
        if let Some(pos) = trimmed.find(" (") {
            return trimmed[..pos].trim_end().to_string();
        }
    }
    trimmed.to_string()
}
