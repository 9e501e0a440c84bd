//! The incremental enrichment loop.
//!
//! Walks the data rows top to bottom, refreshing each eligible row from the
//! catalog: metadata, lowest market price, day-over-day difference, gradient
//! color, reload date. Every row is flushed before the rate-limit pause, so
//! an externally terminated run leaves a consistent prefix of rows fully
//! updated; the next invocation skips them as fresh and resumes where the
//! last one stopped.

use std::thread;
use std::time::Duration;

use chrono::NaiveDate;

use crate::client::CatalogClient;
use crate::color::{self, Rgb};
use crate::config;
use crate::error::Result;
use crate::layout::{Column, Layout, DATA_START_ROW};
use crate::money;
use crate::policy::{classify, RowClass};
use crate::settings::Settings;
use crate::sheet::{CellValue, Worksheet};

// ---------------------------------------------------------------------------
// EnrichReport
// ---------------------------------------------------------------------------

/// Outcome of one enrichment pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichReport {
    /// Rows fetched from the catalog and rewritten.
    pub updated: usize,
    /// Rows skipped because they were already refreshed today.
    pub fresh_skipped: usize,
    /// Rows flagged with the missing-identifier color.
    pub missing_id: usize,
    /// Per-row catalog failures; the loop continued past each of them.
    pub failed: Vec<RowFailure>,
}

/// One row the catalog could not be queried for.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    pub row: u32,
    pub release_id: String,
    pub error: String,
}

// ---------------------------------------------------------------------------
// Enrichment loop
// ---------------------------------------------------------------------------

/// Refresh every eligible data row from the catalog.
///
/// Settings are loaded fresh from the sheet; an invalid threshold fails fast
/// before any network call. A catalog error on a single row is reported and
/// skipped, never aborting the pass.
pub fn load_catalog_data<S, C>(
    sheet: &mut S,
    client: &C,
    layout: &Layout,
    today: NaiveDate,
    pause: Duration,
) -> Result<EnrichReport>
where
    S: Worksheet,
    C: CatalogClient,
{
    let settings = Settings::load(sheet, layout)?;
    let mut report = EnrichReport::default();

    let mut row = DATA_START_ROW;
    while !layout.row_is_empty(sheet, row) {
        let snapshot = layout.read_row(sheet, row);
        match classify(&snapshot, today) {
            RowClass::MissingId => {
                paint_row(sheet, layout, row, Some(settings.palette.missing_id.rgb()));
                report.missing_id += 1;
            }
            RowClass::FreshToday => {
                report.fresh_skipped += 1;
            }
            RowClass::Eligible => {
                let id = snapshot.release_id.clone().unwrap_or_default();
                let old_lowest = snapshot.market_lowest.unwrap_or(0.0);

                // Drop the old indicator first so a stale color is never
                // read as current while the refresh is in flight.
                sheet.clear_formatting(row, 1, 1, layout.width());

                match client.release(&id) {
                    Ok(release) => {
                        write_enriched_row(
                            sheet, layout, row, &id, &release, &snapshot, old_lowest, today,
                            &settings,
                        )?;
                        report.updated += 1;
                    }
                    Err(err) => {
                        eprintln!("Row {}: catalog lookup for {} failed: {}", row, id, err);
                        report.failed.push(RowFailure {
                            row,
                            release_id: id,
                            error: err.to_string(),
                        });
                    }
                }

                // Commit this row before pausing; the pause applies after
                // every catalog call, successful or not.
                sheet.flush()?;
                if !pause.is_zero() {
                    thread::sleep(pause);
                }
            }
        }
        row += 1;
    }

    // Missing-id paints are not flushed per row; commit any still pending.
    sheet.flush()?;
    Ok(report)
}

/// Write all derived fields for one successfully fetched row.
#[allow(clippy::too_many_arguments)]
fn write_enriched_row<S: Worksheet>(
    sheet: &mut S,
    layout: &Layout,
    row: u32,
    id: &str,
    release: &crate::models::Release,
    snapshot: &crate::models::Row,
    old_lowest: f64,
    today: NaiveDate,
    settings: &Settings,
) -> Result<()> {
    let lowest = release.lowest();

    // The identifier cell becomes a hyperlink to the release page while
    // still displaying the raw id.
    sheet.write_formula(
        row,
        layout.col(Column::ReleaseId),
        &format!("=HYPERLINK(\"{}\", \"{}\")", config::release_web_url(id), id),
    );
    sheet.write_value(
        row,
        layout.col(Column::Album),
        CellValue::Text(release.title.clone()),
    );
    if let Some(artist) = release.primary_artist() {
        sheet.write_value(row, layout.col(Column::Artist), CellValue::Text(artist));
    }
    sheet.write_value(
        row,
        layout.col(Column::MarketLowest),
        CellValue::Text(money::format_currency(lowest)),
    );

    let diff = money::round2(lowest - old_lowest);
    sheet.write_value(
        row,
        layout.col(Column::ReloadDiff),
        CellValue::Text(money::format_currency(diff)),
    );

    // Total is driven by the manual cost fields alone; the ratio uses the
    // freshly fetched price rather than a read-back through storage.
    let total = snapshot.total();
    let ratio = lowest / total - 1.0;
    let color = color::gradient(
        ratio,
        settings.threshold,
        settings.palette.loss.rgb(),
        settings.palette.break_even.rgb(),
        settings.palette.profit.rgb(),
        settings.palette.not_listed.rgb(),
        lowest == 0.0,
    )?;
    sheet.write_background(row, layout.col(Column::MarketLowest), Some(color));

    sheet.write_value(
        row,
        layout.col(Column::LastReloadDate),
        CellValue::Text(today.format(config::DATE_FORMAT).to_string()),
    );

    Ok(())
}

/// Set (or clear) the background of a whole data row.
fn paint_row<S: Worksheet>(sheet: &mut S, layout: &Layout, row: u32, color: Option<Rgb>) {
    for col in 1..=layout.width() {
        sheet.write_background(row, col, color);
    }
}
