//! The row-storage collaborator.
//!
//! The tracker treats storage purely as a mapping from 1-based `(row, col)`
//! positions to typed cell values and formats; it does not depend on any
//! specific grid product. [`Worksheet`] is the seam, [`InMemorySheet`] the
//! shipped reference backend (also what the tests run against).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::Result;
use crate::money;

// ---------------------------------------------------------------------------
// CellValue
// ---------------------------------------------------------------------------

/// The typed content of one cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    /// A formula string, stored verbatim (`=SUM(...)`, `=HYPERLINK(...)`).
    Formula(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Numeric view of the cell. Currency-formatted text parses too;
    /// anything non-numeric is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => money::parse_currency(s),
            _ => None,
        }
    }

    /// The value a user sees in the cell. For a `HYPERLINK` formula this is
    /// the link label (the raw identifier survives enrichment that way);
    /// other formulas display as nothing since this backend does not
    /// evaluate them.
    pub fn display(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Formula(f) => hyperlink_label(f),
        }
    }
}

/// Extract the label argument of a `=HYPERLINK("url", "label")` formula.
fn hyperlink_label(formula: &str) -> Option<String> {
    if !formula.trim_start().starts_with("=HYPERLINK(") {
        return None;
    }
    let mut quoted = formula.split('"').skip(1).step_by(2);
    let _url = quoted.next()?;
    quoted.next().map(|label| label.to_string())
}

// ---------------------------------------------------------------------------
// Worksheet
// ---------------------------------------------------------------------------

/// Horizontal text alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// The operations the tracker needs from a grid backend. Rows and columns
/// are 1-based; row 1 is the header row, data starts at row 2.
pub trait Worksheet {
    fn read_cell(&self, row: u32, col: u32) -> CellValue;
    fn background(&self, row: u32, col: u32) -> Option<Rgb>;

    fn write_value(&mut self, row: u32, col: u32, value: CellValue);
    fn write_formula(&mut self, row: u32, col: u32, formula: &str);
    fn write_background(&mut self, row: u32, col: u32, color: Option<Rgb>);
    fn write_note(&mut self, row: u32, col: u32, note: &str);

    /// Reset the background formatting of a rectangular range.
    fn clear_formatting(&mut self, row: u32, col: u32, num_rows: u32, num_cols: u32);

    /// Replace any existing sortable-column filter with one over the range.
    fn create_filter(&mut self, row: u32, col: u32, num_rows: u32, num_cols: u32);
    fn remove_filter(&mut self);

    fn set_frozen_rows(&mut self, rows: u32);

    /// Autosize a run of columns starting at `col`. Purely visual; backends
    /// without the concept may no-op.
    fn autosize_columns(&mut self, col: u32, count: u32);

    /// Outline a rectangular range with a border; `inner` also rules the
    /// interior cell boundaries. Purely visual; backends may no-op.
    fn set_border(&mut self, row: u32, col: u32, num_rows: u32, num_cols: u32, inner: bool);

    /// Set the horizontal text alignment of a whole column. Purely visual;
    /// backends may no-op.
    fn set_column_alignment(&mut self, col: u32, alignment: Alignment);

    /// Commit any buffered writes. Called once per enriched row so an
    /// interrupted run leaves a consistent prefix of rows fully updated.
    fn flush(&mut self) -> Result<()>;
}

// ---------------------------------------------------------------------------
// InMemorySheet
// ---------------------------------------------------------------------------

/// One cell's content and formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub background: Option<Rgb>,
    pub note: Option<String>,
}

impl Cell {
    fn is_blank(&self) -> bool {
        self.value.is_empty() && self.background.is_none() && self.note.is_none()
    }
}

/// Sparse in-memory grid backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemorySheet {
    cells: BTreeMap<(u32, u32), Cell>,
    frozen_rows: u32,
    filter: Option<(u32, u32, u32, u32)>,
    borders: BTreeSet<(u32, u32, u32, u32, bool)>,
    alignments: BTreeMap<u32, Alignment>,
}

impl InMemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frozen_rows(&self) -> u32 {
        self.frozen_rows
    }

    pub fn filter(&self) -> Option<(u32, u32, u32, u32)> {
        self.filter
    }

    pub fn note(&self, row: u32, col: u32) -> Option<&str> {
        self.cells
            .get(&(row, col))
            .and_then(|c| c.note.as_deref())
    }

    pub fn has_border(&self, row: u32, col: u32, num_rows: u32, num_cols: u32, inner: bool) -> bool {
        self.borders.contains(&(row, col, num_rows, num_cols, inner))
    }

    pub fn column_alignment(&self, col: u32) -> Option<Alignment> {
        self.alignments.get(&col).copied()
    }

    fn cell_mut(&mut self, row: u32, col: u32) -> &mut Cell {
        self.cells.entry((row, col)).or_default()
    }

    /// Drop cells that have reverted to fully blank so the data-region scan
    /// stays honest.
    fn prune(&mut self, row: u32, col: u32) {
        if self
            .cells
            .get(&(row, col))
            .is_some_and(|c| c.is_blank())
        {
            self.cells.remove(&(row, col));
        }
    }
}

impl Worksheet for InMemorySheet {
    fn read_cell(&self, row: u32, col: u32) -> CellValue {
        self.cells
            .get(&(row, col))
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    fn background(&self, row: u32, col: u32) -> Option<Rgb> {
        self.cells.get(&(row, col)).and_then(|c| c.background)
    }

    fn write_value(&mut self, row: u32, col: u32, value: CellValue) {
        self.cell_mut(row, col).value = value;
        self.prune(row, col);
    }

    fn write_formula(&mut self, row: u32, col: u32, formula: &str) {
        self.cell_mut(row, col).value = CellValue::Formula(formula.to_string());
    }

    fn write_background(&mut self, row: u32, col: u32, color: Option<Rgb>) {
        self.cell_mut(row, col).background = color;
        self.prune(row, col);
    }

    fn write_note(&mut self, row: u32, col: u32, note: &str) {
        self.cell_mut(row, col).note = Some(note.to_string());
    }

    fn clear_formatting(&mut self, row: u32, col: u32, num_rows: u32, num_cols: u32) {
        for r in row..row + num_rows {
            for c in col..col + num_cols {
                if self.cells.contains_key(&(r, c)) {
                    self.write_background(r, c, None);
                }
            }
        }
    }

    fn create_filter(&mut self, row: u32, col: u32, num_rows: u32, num_cols: u32) {
        self.filter = Some((row, col, num_rows, num_cols));
    }

    fn remove_filter(&mut self) {
        self.filter = None;
    }

    fn set_frozen_rows(&mut self, rows: u32) {
        self.frozen_rows = rows;
    }

    fn autosize_columns(&mut self, _col: u32, _count: u32) {
        // No visual representation to size.
    }

    fn set_border(&mut self, row: u32, col: u32, num_rows: u32, num_cols: u32, inner: bool) {
        self.borders.insert((row, col, num_rows, num_cols, inner));
    }

    fn set_column_alignment(&mut self, col: u32, alignment: Alignment) {
        self.alignments.insert(col, alignment);
    }

    fn flush(&mut self) -> Result<()> {
        // Writes are applied immediately; nothing buffered.
        Ok(())
    }
}
