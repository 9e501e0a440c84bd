//! Logical sheet layout.
//!
//! Columns, summary rows and settings rows are fixed enums mapped to 1-based
//! grid positions through a small ordered table built once at startup. The
//! column order is user-configurable (reorderable), but lookups never scan
//! display strings.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::config;
use crate::models::Row;
use crate::sheet::Worksheet;

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

/// Logical identity of a sortable data column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    ReleaseId,
    Artist,
    Album,
    PurchasedDate,
    Price,
    Tax,
    Shipping,
    Total,
    MarketLowest,
    ReloadDiff,
    LastReloadDate,
    Notes,
}

impl Column {
    pub const ALL: [Column; 12] = [
        Column::ReleaseId,
        Column::Artist,
        Column::Album,
        Column::PurchasedDate,
        Column::Price,
        Column::Tax,
        Column::Shipping,
        Column::Total,
        Column::MarketLowest,
        Column::ReloadDiff,
        Column::LastReloadDate,
        Column::Notes,
    ];

    /// Header cell text.
    pub fn display_name(self) -> &'static str {
        match self {
            Column::ReleaseId => "Discogs ID",
            Column::Artist => "Artist",
            Column::Album => "Album",
            Column::PurchasedDate => "Purchased Date",
            Column::Price => "Price",
            Column::Tax => "Tax",
            Column::Shipping => "Shipping",
            Column::Total => "Total",
            Column::MarketLowest => "Discogs Lowest",
            Column::ReloadDiff => "Reload Difference",
            Column::LastReloadDate => "Last Reload Date",
            Column::Notes => "Notes",
        }
    }

    /// Help note attached to the header cell.
    pub fn note(self) -> &'static str {
        match self {
            Column::ReleaseId => {
                "The ID for the release in Discogs, shown as a hyperlink to the release page. \
                 Populated automatically once the release is in your Discogs collection."
            }
            Column::Artist => {
                "The name of the artist. Populated automatically when a Discogs ID is present."
            }
            Column::Album => {
                "The name of the album. Populated automatically when a Discogs ID is present."
            }
            Column::PurchasedDate => {
                "The date of purchase. Manual entry only; not required."
            }
            Column::Price => {
                "The price of the item pre-tax/shipping, or the full price if you do not track \
                 costs in detail. Manual entry only."
            }
            Column::Tax => "The tax paid for the item. Manual entry only.",
            Column::Shipping => "The shipping paid for the item. Manual entry only.",
            Column::Total => {
                "The sum of Price, Tax and Shipping. Calculated automatically; used to determine \
                 the Discogs Lowest profit/loss color."
            }
            Column::MarketLowest => {
                "The lowest listed price on Discogs. Populated automatically. The background \
                 color reflects the profit/loss percentage; 0.00 with the Not Listed color means \
                 no current listing."
            }
            Column::ReloadDiff => {
                "The change in Discogs Lowest since the previous refresh. Calculated automatically."
            }
            Column::LastReloadDate => {
                "The date the row was last refreshed. Populated automatically."
            }
            Column::Notes => {
                "Your notes about the item. Manual entry only; never overwritten by the tracker."
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Summary and settings rows
// ---------------------------------------------------------------------------

/// Rows of the collection summary box, each a column-sum projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryRow {
    ItemInvestment,
    TotalInvestment,
    TotalMarketLowest,
    TotalReloadDiff,
}

impl SummaryRow {
    pub const ALL: [SummaryRow; 4] = [
        SummaryRow::ItemInvestment,
        SummaryRow::TotalInvestment,
        SummaryRow::TotalMarketLowest,
        SummaryRow::TotalReloadDiff,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            SummaryRow::ItemInvestment => "Item Investment",
            SummaryRow::TotalInvestment => "Total Investment",
            SummaryRow::TotalMarketLowest => "Total Discogs Lowest",
            SummaryRow::TotalReloadDiff => "Total Reload Difference",
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            SummaryRow::ItemInvestment => {
                "The sum of the Price column: what you paid pre-tax/shipping."
            }
            SummaryRow::TotalInvestment => {
                "The sum of the Total column: what you paid including tax and shipping."
            }
            SummaryRow::TotalMarketLowest => {
                "The sum of the Discogs Lowest column: the minimum your collection currently \
                 sells for."
            }
            SummaryRow::TotalReloadDiff => {
                "The sum of the Reload Difference column: how much the collection value moved."
            }
        }
    }

    /// The data column this summary row sums.
    pub fn source_column(self) -> Column {
        match self {
            SummaryRow::ItemInvestment => Column::Price,
            SummaryRow::TotalInvestment => Column::Total,
            SummaryRow::TotalMarketLowest => Column::MarketLowest,
            SummaryRow::TotalReloadDiff => Column::ReloadDiff,
        }
    }
}

/// Rows of the settings box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingRow {
    Username,
    Threshold,
    LossColor,
    BreakEvenColor,
    ProfitColor,
    NotListedColor,
    MissingIdColor,
}

impl SettingRow {
    pub const ALL: [SettingRow; 7] = [
        SettingRow::Username,
        SettingRow::Threshold,
        SettingRow::LossColor,
        SettingRow::BreakEvenColor,
        SettingRow::ProfitColor,
        SettingRow::NotListedColor,
        SettingRow::MissingIdColor,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            SettingRow::Username => "Discogs Username",
            SettingRow::Threshold => "Profit/Loss Threshold %",
            SettingRow::LossColor => "Loss Color",
            SettingRow::BreakEvenColor => "Break-Even Color",
            SettingRow::ProfitColor => "Profit Color",
            SettingRow::NotListedColor => "Not Listed Color",
            SettingRow::MissingIdColor => "Missing ID Color",
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            SettingRow::Username => {
                "Your Discogs username. Set it to let the tracker import your collection."
            }
            SettingRow::Threshold => {
                "The percentage used as the upper and lower bound for the Discogs Lowest color \
                 gradient. 10% by default."
            }
            SettingRow::LossColor => {
                "The Discogs Lowest color when the loss reaches the threshold. Change this \
                 cell's background to override."
            }
            SettingRow::BreakEvenColor => {
                "The Discogs Lowest color at break-even. Change this cell's background to \
                 override."
            }
            SettingRow::ProfitColor => {
                "The Discogs Lowest color when the profit reaches the threshold. Change this \
                 cell's background to override."
            }
            SettingRow::NotListedColor => {
                "The Discogs Lowest color when there is no current listing. Change this cell's \
                 background to override."
            }
            SettingRow::MissingIdColor => {
                "The row color when no Discogs ID is present. Change this cell's background to \
                 override."
            }
        }
    }

    /// Shipped default background for the color settings.
    pub fn default_color_hex(self) -> Option<&'static str> {
        match self {
            SettingRow::LossColor => Some(config::DEFAULT_LOSS_COLOR),
            SettingRow::BreakEvenColor => Some(config::DEFAULT_BREAK_EVEN_COLOR),
            SettingRow::ProfitColor => Some(config::DEFAULT_PROFIT_COLOR),
            SettingRow::NotListedColor => Some(config::DEFAULT_NOT_LISTED_COLOR),
            SettingRow::MissingIdColor => Some(config::DEFAULT_MISSING_ID_COLOR),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const HEADER_ROW: u32 = 1;
pub const DATA_START_ROW: u32 = 2;

/// Maps logical fields to grid positions. Built once per tracker.
#[derive(Debug, Clone)]
pub struct Layout {
    order: Vec<Column>,
    positions: HashMap<Column, u32>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_order(Column::ALL.to_vec())
    }
}

impl Layout {
    /// Build a layout from a user-chosen column order. Every logical column
    /// must appear exactly once.
    pub fn new(order: Vec<Column>) -> crate::error::Result<Self> {
        for column in Column::ALL {
            let count = order.iter().filter(|&&c| c == column).count();
            if count != 1 {
                return Err(crate::error::TrackerError::Config(format!(
                    "Column {:?} must appear exactly once in the layout, found {}",
                    column, count
                )));
            }
        }
        Ok(Self::from_order(order))
    }

    fn from_order(order: Vec<Column>) -> Self {
        let positions = order
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u32 + 1))
            .collect();
        Self { order, positions }
    }

    pub fn columns(&self) -> &[Column] {
        &self.order
    }

    /// 1-based grid column for a logical column.
    pub fn col(&self, column: Column) -> u32 {
        self.positions[&column]
    }

    /// Number of data columns.
    pub fn width(&self) -> u32 {
        self.order.len() as u32
    }

    // -- Box geometry ------------------------------------------------------
    //
    // The info boxes sit two columns to the right of the data region:
    // summary first, settings below it, links below that.

    pub fn box_col(&self) -> u32 {
        self.width() + 2
    }

    pub fn summary_box_row(&self) -> u32 {
        4
    }

    pub fn settings_box_row(&self) -> u32 {
        self.summary_box_row() + SummaryRow::ALL.len() as u32 + 1
    }

    pub fn links_box_row(&self) -> u32 {
        self.settings_box_row() + SettingRow::ALL.len() as u32
    }

    /// Position of a summary value cell.
    pub fn summary_value_cell(&self, row: SummaryRow) -> (u32, u32) {
        let idx = SummaryRow::ALL.iter().position(|&r| r == row).unwrap_or(0) as u32;
        (self.summary_box_row() + idx, self.box_col() + 1)
    }

    /// Position of a settings value cell.
    pub fn setting_value_cell(&self, row: SettingRow) -> (u32, u32) {
        let idx = SettingRow::ALL.iter().position(|&r| r == row).unwrap_or(0) as u32;
        (self.settings_box_row() + idx, self.box_col() + 1)
    }

    // -- Row decoding ------------------------------------------------------

    /// True when every data-column cell in the grid row is empty. The first
    /// such row terminates the data region.
    pub fn row_is_empty(&self, sheet: &impl Worksheet, row: u32) -> bool {
        (1..=self.width()).all(|c| sheet.read_cell(row, c).is_empty())
    }

    /// 1-based grid index of the first empty data row (where an import
    /// appends).
    pub fn first_empty_row(&self, sheet: &impl Worksheet) -> u32 {
        let mut row = DATA_START_ROW;
        while !self.row_is_empty(sheet, row) {
            row += 1;
        }
        row
    }

    /// Grid indexes of all data rows, in storage order.
    pub fn data_rows(&self, sheet: &impl Worksheet) -> Vec<u32> {
        (DATA_START_ROW..self.first_empty_row(sheet)).collect()
    }

    /// Decode one grid row into a typed [`Row`].
    pub fn read_row(&self, sheet: &impl Worksheet, row: u32) -> Row {
        let text = |c: Column| -> Option<String> {
            sheet
                .read_cell(row, self.col(c))
                .display()
                .filter(|s| !s.trim().is_empty())
        };
        let number = |c: Column| sheet.read_cell(row, self.col(c)).as_number();

        Row {
            release_id: text(Column::ReleaseId),
            artist: text(Column::Artist),
            album: text(Column::Album),
            purchased_date: text(Column::PurchasedDate),
            price: number(Column::Price),
            tax: number(Column::Tax),
            shipping: number(Column::Shipping),
            market_lowest: number(Column::MarketLowest),
            reload_diff: number(Column::ReloadDiff),
            // An unparseable date decodes as absent so the row stays eligible.
            last_reload_date: text(Column::LastReloadDate)
                .and_then(|s| NaiveDate::parse_from_str(s.trim(), config::DATE_FORMAT).ok()),
            notes: text(Column::Notes),
        }
    }
}

/// A1-style letter for a 1-based column index (`1` -> `A`, `27` -> `AA`).
pub fn col_letter(mut col: u32) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = ((col - 1) % 26) as u8;
        letters.push(b'A' + rem);
        col = (col - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
