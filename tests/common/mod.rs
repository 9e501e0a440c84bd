//! Shared fixtures for the vinyl-tracker integration tests.
//!
//! Provides a scripted [`CatalogClient`] that serves canned responses and
//! records every call, plus helpers for building a tracker around a blank
//! in-memory sheet with a pinned "today" and no rate-limit pause.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use vinyl_tracker::layout::SettingRow;
use vinyl_tracker::models::{CollectionPage, Release};
use vinyl_tracker::{
    CatalogClient, CellValue, Column, InMemorySheet, Result, TrackerError, VinylTracker,
    Worksheet,
};

/// The pinned calendar day all tests run on.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn yesterday() -> NaiveDate {
    today().pred_opt().unwrap()
}

// ---------------------------------------------------------------------------
// ScriptedCatalog
// ---------------------------------------------------------------------------

/// Catalog client fed from canned JSON payloads. Records calls so tests can
/// assert that fresh or id-less rows never reach the network.
#[derive(Default)]
pub struct ScriptedCatalog {
    releases: HashMap<String, Release>,
    pages: HashMap<String, CollectionPage>,
    failing: Vec<String>,
    pub release_calls: RefCell<Vec<String>>,
    pub page_calls: RefCell<Vec<String>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a `GET /releases/{id}` response from a JSON literal.
    pub fn with_release(mut self, id: &str, payload: serde_json::Value) -> Self {
        let release: Release = serde_json::from_value(payload).unwrap();
        self.releases.insert(id.to_string(), release);
        self
    }

    /// Script one collection page, keyed by the exact URL it is served for.
    pub fn with_page(mut self, url: &str, payload: serde_json::Value) -> Self {
        let page: CollectionPage = serde_json::from_value(payload).unwrap();
        self.pages.insert(url.to_string(), page);
        self
    }

    /// Make release lookups for `id` fail with a catalog error.
    pub fn failing_release(mut self, id: &str) -> Self {
        self.failing.push(id.to_string());
        self
    }

    pub fn release_call_count(&self) -> usize {
        self.release_calls.borrow().len()
    }

    pub fn page_call_count(&self) -> usize {
        self.page_calls.borrow().len()
    }
}

impl CatalogClient for ScriptedCatalog {
    fn release(&self, id: &str) -> Result<Release> {
        self.release_calls.borrow_mut().push(id.to_string());
        if self.failing.iter().any(|f| f == id) {
            return Err(TrackerError::Catalog(format!("scripted failure for {}", id)));
        }
        self.releases
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(format!("release {}", id)))
    }

    fn collection_page(&self, url: &str) -> Result<CollectionPage> {
        self.page_calls.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(format!("page {}", url)))
    }
}

// ---------------------------------------------------------------------------
// Tracker setup
// ---------------------------------------------------------------------------

pub type TestTracker = VinylTracker<InMemorySheet, ScriptedCatalog>;

/// A tracker over a freshly normalized blank sheet, pinned to [`today`] with
/// no rate-limit pause.
pub fn new_tracker(client: ScriptedCatalog) -> TestTracker {
    let mut tracker = VinylTracker::builder()
        .today(today())
        .rate_limit(Duration::ZERO)
        .build(InMemorySheet::new(), client);
    tracker.reset_structure().unwrap();
    tracker
}

/// Write the username into the settings box.
pub fn set_username(tracker: &mut TestTracker, username: &str) {
    let (row, col) = tracker.layout().setting_value_cell(SettingRow::Username);
    tracker
        .sheet_mut()
        .write_value(row, col, CellValue::Text(username.to_string()));
}

/// Write the threshold percentage into the settings box.
pub fn set_threshold_percent(tracker: &mut TestTracker, percent: f64) {
    let (row, col) = tracker.layout().setting_value_cell(SettingRow::Threshold);
    tracker
        .sheet_mut()
        .write_value(row, col, CellValue::Number(percent));
}

/// Populate the manual fields of one data row.
pub fn set_cost_row(
    tracker: &mut TestTracker,
    row: u32,
    id: Option<&str>,
    price: f64,
    tax: f64,
    shipping: f64,
) {
    if let Some(id) = id {
        write_cell(tracker, row, Column::ReleaseId, CellValue::Text(id.to_string()));
    }
    write_cell(tracker, row, Column::Price, CellValue::Number(price));
    write_cell(tracker, row, Column::Tax, CellValue::Number(tax));
    write_cell(tracker, row, Column::Shipping, CellValue::Number(shipping));
}

pub fn write_cell(tracker: &mut TestTracker, row: u32, column: Column, value: CellValue) {
    let col = tracker.layout().col(column);
    tracker.sheet_mut().write_value(row, col, value);
}

/// The user-visible text of a data cell.
pub fn cell_display(tracker: &TestTracker, row: u32, column: Column) -> Option<String> {
    let col = tracker.layout().col(column);
    tracker.sheet().read_cell(row, col).display()
}

/// The background of a data cell as a hex string.
pub fn cell_background_hex(tracker: &TestTracker, row: u32, column: Column) -> Option<String> {
    let col = tracker.layout().col(column);
    tracker.sheet().background(row, col).map(|c| c.to_hex())
}
