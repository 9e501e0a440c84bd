//! Read-side collection aggregates.
//!
//! The sheet itself carries these as `SUM` formulas in the summary box; this
//! is the same projection computed in-process for callers that want numbers
//! without a formula engine.

use crate::models::Row;
use crate::money;

/// Derived aggregate values over all data rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    /// Sum of the Price column.
    pub item_investment: f64,
    /// Sum of the Total column.
    pub total_investment: f64,
    /// Sum of the Discogs Lowest column.
    pub total_market_lowest: f64,
    /// Sum of the Reload Difference column.
    pub total_reload_diff: f64,
}

impl Summary {
    /// Fold the rows into their aggregates, rounded to cents.
    pub fn compute(rows: &[Row]) -> Summary {
        let mut summary = Summary::default();
        for row in rows {
            summary.item_investment += row.price.unwrap_or(0.0);
            summary.total_investment += row.total();
            summary.total_market_lowest += row.market_lowest.unwrap_or(0.0);
            summary.total_reload_diff += row.reload_diff.unwrap_or(0.0);
        }
        Summary {
            item_investment: money::round2(summary.item_investment),
            total_investment: money::round2(summary.total_investment),
            total_market_lowest: money::round2(summary.total_market_lowest),
            total_reload_diff: money::round2(summary.total_reload_diff),
        }
    }
}
