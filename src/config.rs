use std::time::Duration;

use crate::color::Rgb;

pub const API_BASE: &str = "https://api.discogs.com";
pub const WEB_RELEASE_BASE: &str = "https://www.discogs.com/release";

/// Discogs rejects requests without a User-Agent.
pub const USER_AGENT: &str = concat!("vinyl-tracker/", env!("CARGO_PKG_VERSION"));

/// Fixed pause after each catalog call; the Discogs API throttles per account,
/// so all calls are strictly serial with this delay between them.
pub const RATE_LIMIT_PAUSE: Duration = Duration::from_secs(2);

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Threshold stored in the settings box, interpreted as a percentage.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 10.0;

/// Calendar representation used for `last_reload_date` day-equality checks.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Reference offset for "today" (UTC-8). Day boundaries are evaluated in this
/// fixed offset regardless of where the tracker runs.
pub const REFERENCE_UTC_OFFSET_SECS: i32 = -8 * 3600;

// Shipped color defaults. A settings cell whose background still matches the
// shipped value stays pinned to it; anything else is a user override.
pub const DEFAULT_LOSS_COLOR: &str = "#ffb3ba";
pub const DEFAULT_BREAK_EVEN_COLOR: &str = "#ffffba";
pub const DEFAULT_PROFIT_COLOR: &str = "#baffc9";
pub const DEFAULT_NOT_LISTED_COLOR: &str = "#ffffff";
pub const DEFAULT_MISSING_ID_COLOR: &str = "#ffb3ba";

pub const INFO_BOX_HEADER_COLOR: Rgb = Rgb {
    r: 169,
    g: 169,
    b: 169,
};
pub const INFO_BOX_SUB_HEADER_COLOR: Rgb = Rgb {
    r: 211,
    g: 211,
    b: 211,
};

/// Web URL for a release, used for the identifier hyperlink.
pub fn release_web_url(id: &str) -> String {
    format!("{}/{}", WEB_RELEASE_BASE, id)
}

/// First page of a user's collection (folder 0 is "All").
pub fn collection_url(username: &str) -> String {
    format!("{}/users/{}/collection/folders/0/releases", API_BASE, username)
}
