//! Row classification and staleness policy.
//!
//! Deciding per row whether to call the catalog is what makes the tracker
//! safely re-runnable several times a day: a row refreshed today is skipped
//! outright, so repeated invocations neither waste rate-limited API calls
//! nor double-count the reload difference.

use chrono::NaiveDate;

use crate::models::Row;

/// What the enrichment loop should do with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    /// No external identifier: flag the row, touch nothing else.
    MissingId,
    /// Already refreshed today: skip, no API call, no mutation.
    FreshToday,
    /// Has an identifier and has not been refreshed today: enrich.
    Eligible,
}

/// Classify a row against today's date (same calendar day in the fixed
/// reference offset). A malformed `last_reload_date` decodes as absent
/// upstream, so it lands here as `Eligible` rather than failing the pass.
pub fn classify(row: &Row, today: NaiveDate) -> RowClass {
    match row.release_id.as_deref() {
        None => RowClass::MissingId,
        Some(id) if id.trim().is_empty() => RowClass::MissingId,
        Some(_) => match row.last_reload_date {
            Some(date) if date == today => RowClass::FreshToday,
            _ => RowClass::Eligible,
        },
    }
}
