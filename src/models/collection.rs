use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CollectionPage — one page of GET /users/{username}/collection/folders/0/releases
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionPage {
    #[serde(default)]
    pub releases: Vec<CollectionRelease>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionRelease {
    pub id: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub urls: PageUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageUrls {
    /// Absolute URL of the next page; `None` signals the last page.
    #[serde(default)]
    pub next: Option<String>,
}
