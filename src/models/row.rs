use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Row — one tracked collection item, decoded from the sheet
// ---------------------------------------------------------------------------

/// A typed snapshot of one data row.
///
/// Manual fields (`purchased_date`, `price`, `tax`, `shipping`, `notes`) are
/// only ever read by the tracker; derived fields are overwritten during
/// enrichment. Absent cells decode to `None`, including cells whose content
/// does not parse (an unparseable date or price is treated as missing rather
/// than failing the pass).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub release_id: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub purchased_date: Option<String>,
    pub price: Option<f64>,
    pub tax: Option<f64>,
    pub shipping: Option<f64>,
    pub market_lowest: Option<f64>,
    pub reload_diff: Option<f64>,
    pub last_reload_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Row {
    /// Total cost: price + tax + shipping, with absent fields as zero.
    pub fn total(&self) -> f64 {
        self.price.unwrap_or(0.0) + self.tax.unwrap_or(0.0) + self.shipping.unwrap_or(0.0)
    }
}
