//! Vinyl collection tracker.
//!
//! Keeps a spreadsheet-style grid of vinyl records synchronized with the
//! Discogs catalog: imports a user's collection by release id, enriches each
//! row with catalog metadata (artist, album, lowest market price), derives
//! the financial fields (total cost, day-over-day price delta) and renders
//! profit/loss as a color gradient on the price cell.
//!
//! Catalog calls are strictly serial with a fixed pause between them (the
//! API rate limits per account), and every row is committed before the next
//! one starts, so a run cut short by an external time ceiling is safe to
//! simply re-invoke: rows already refreshed today are skipped.
//!
//! # Quick start
//!
//! ```no_run
//! use vinyl_tracker::{DiscogsClient, InMemorySheet, VinylTracker};
//!
//! let mut tracker = VinylTracker::builder()
//!     .build(InMemorySheet::new(), DiscogsClient::new());
//!
//! tracker.reset_structure().unwrap();
//! let report = tracker.update().unwrap();
//! eprintln!("{} rows refreshed", report.updated);
//! ```

pub mod client;
pub mod color;
pub mod config;
pub mod enrich;
pub mod error;
pub mod import;
pub mod layout;
pub mod models;
pub mod money;
pub mod policy;
pub mod settings;
pub mod sheet;
pub mod structure;
pub mod summary;

pub use client::{CatalogClient, DiscogsClient};
pub use color::Rgb;
pub use enrich::EnrichReport;
pub use error::{Result, TrackerError};
pub use layout::{Column, Layout};
pub use settings::Settings;
pub use sheet::{Alignment, CellValue, InMemorySheet, Worksheet};
pub use summary::Summary;

use std::fmt;
use std::time::Duration;

use chrono::{FixedOffset, NaiveDate, Utc};

// ---------------------------------------------------------------------------
// VinylTrackerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`VinylTracker`].
///
/// Use [`VinylTracker::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](VinylTrackerBuilder::build) with a storage
/// backend and a catalog client.
pub struct VinylTrackerBuilder {
    layout: Layout,
    today: Option<NaiveDate>,
    rate_limit: Duration,
}

impl Default for VinylTrackerBuilder {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            today: None,
            rate_limit: config::RATE_LIMIT_PAUSE,
        }
    }
}

impl VinylTrackerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom column order. See [`Layout::new`].
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Pin "today" to a fixed date instead of deriving it from the clock.
    /// Meant for tests; day-equality drives the staleness policy.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Set the pause inserted after each catalog call.
    ///
    /// Defaults to 2 seconds; the Discogs API throttles per account.
    pub fn rate_limit(mut self, pause: Duration) -> Self {
        self.rate_limit = pause;
        self
    }

    /// Build the tracker around a storage backend and catalog client.
    ///
    /// The tracker takes exclusive ownership of both; all operations run on
    /// `&mut self`, so there is no way to start a second pass while one is
    /// in flight.
    pub fn build<S, C>(self, sheet: S, client: C) -> VinylTracker<S, C>
    where
        S: Worksheet,
        C: CatalogClient,
    {
        let today = self.today.unwrap_or_else(reference_today);
        VinylTracker {
            sheet,
            client,
            layout: self.layout,
            today,
            rate_limit: self.rate_limit,
        }
    }
}

/// Today's date in the fixed reference offset (UTC-8).
fn reference_today() -> NaiveDate {
    let offset = FixedOffset::east_opt(config::REFERENCE_UTC_OFFSET_SECS)
        .expect("reference offset is in range");
    Utc::now().with_timezone(&offset).date_naive()
}

// ---------------------------------------------------------------------------
// VinylTracker
// ---------------------------------------------------------------------------

/// The main entry point for the tracker.
///
/// Owns the storage backend and the catalog client and exposes the four
/// operator actions: full update, structure reset, collection import and
/// catalog refresh.
pub struct VinylTracker<S, C> {
    sheet: S,
    client: C,
    layout: Layout,
    today: NaiveDate,
    rate_limit: Duration,
}

// The builder itself is free of type parameters; anchoring `builder()` on the
// default backend pair keeps `VinylTracker::builder()` callable without turbofish.
impl VinylTracker<InMemorySheet, DiscogsClient> {
    /// Create a new builder for configuring the tracker.
    pub fn builder() -> VinylTrackerBuilder {
        VinylTrackerBuilder::default()
    }
}

impl<S, C> VinylTracker<S, C>
where
    S: Worksheet,
    C: CatalogClient,
{
    /// Run the full update: structure reset, then import, then enrichment.
    pub fn update(&mut self) -> Result<EnrichReport> {
        self.reset_structure()?;
        self.import_collection()?;
        self.refresh_catalog_data()
    }

    /// Re-render headers, notes, formulas, filter and the info boxes.
    pub fn reset_structure(&mut self) -> Result<()> {
        structure::normalize(&mut self.sheet, &self.layout)
    }

    /// Import the user's remote collection, appending previously-unseen
    /// release ids as new rows. Returns how many rows were appended.
    pub fn import_collection(&mut self) -> Result<usize> {
        import::load_user_collection(&mut self.sheet, &self.client, &self.layout)
    }

    /// Refresh every eligible row from the catalog. See [`enrich`].
    pub fn refresh_catalog_data(&mut self) -> Result<EnrichReport> {
        enrich::load_catalog_data(
            &mut self.sheet,
            &self.client,
            &self.layout,
            self.today,
            self.rate_limit,
        )
    }

    /// Load the current settings from the sheet.
    pub fn settings(&self) -> Result<Settings> {
        Settings::load(&self.sheet, &self.layout)
    }

    /// Compute the collection aggregates from the current rows.
    pub fn summary(&self) -> Summary {
        let rows: Vec<_> = self
            .layout
            .data_rows(&self.sheet)
            .into_iter()
            .map(|r| self.layout.read_row(&self.sheet, r))
            .collect();
        Summary::compute(&rows)
    }

    /// The date this tracker considers "today".
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn sheet(&self) -> &S {
        &self.sheet
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn sheet_mut(&mut self) -> &mut S {
        &mut self.sheet
    }

    /// Consume the tracker and hand back the storage backend.
    pub fn into_sheet(self) -> S {
        self.sheet
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl<S, C> fmt::Display for VinylTracker<S, C>
where
    S: Worksheet,
    C: CatalogClient,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data_rows = self.layout.data_rows(&self.sheet).len();
        write!(
            f,
            "VinylTracker(today={}, rows={}, rate_limit={:?})",
            self.today.format(config::DATE_FORMAT),
            data_rows,
            self.rate_limit
        )
    }
}
