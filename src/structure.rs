//! Sheet structure normalization.
//!
//! Re-renders the fixed parts of the sheet so the expected structure stays
//! intact across runs: header row with help notes, per-row total formulas,
//! the sortable filter and frozen header, and the summary / settings / links
//! boxes to the right of the data region. Safe to run repeatedly; user data
//! and overridden settings are left alone.

use crate::config;
use crate::error::Result;
use crate::layout::{col_letter, Column, Layout, SettingRow, SummaryRow, HEADER_ROW};
use crate::sheet::{Alignment, CellValue, Worksheet};

const DOCS_URL: &str = "https://docs.rs/vinyl-tracker";

/// Rebuild headers, formulas, filter and the info boxes.
pub fn normalize<S: Worksheet>(sheet: &mut S, layout: &Layout) -> Result<()> {
    for (i, column) in layout.columns().iter().enumerate() {
        let col = i as u32 + 1;
        sheet.write_value(
            HEADER_ROW,
            col,
            CellValue::Text(column.display_name().to_string()),
        );
        sheet.write_note(HEADER_ROW, col, column.note());
    }

    let data_rows = layout.data_rows(sheet);
    for &row in &data_rows {
        init_total_formula(sheet, layout, row);
    }

    // Recreate the filter and sticky header from scratch.
    sheet.set_frozen_rows(0);
    sheet.remove_filter();
    sheet.create_filter(
        HEADER_ROW,
        1,
        data_rows.len() as u32 + 1,
        layout.width(),
    );
    sheet.set_frozen_rows(1);

    create_summary_box(sheet, layout);
    create_settings_box(sheet, layout);
    create_links_box(sheet, layout);

    // Text columns read better ragged-left; numbers keep the default.
    for column in [Column::ReleaseId, Column::Artist, Column::Album] {
        sheet.set_column_alignment(layout.col(column), Alignment::Left);
    }
    sheet.set_column_alignment(layout.box_col(), Alignment::Left);
    sheet.set_column_alignment(layout.box_col() + 1, Alignment::Left);

    sheet.autosize_columns(1, layout.width() - 1);
    sheet.flush()
}

/// Set the total cell of a data row to `=SUM(price,tax,shipping)`.
pub fn init_total_formula<S: Worksheet>(sheet: &mut S, layout: &Layout, row: u32) {
    let cell = |c: Column| format!("{}{}", col_letter(layout.col(c)), row);
    let formula = format!(
        "=SUM({},{},{})",
        cell(Column::Price),
        cell(Column::Tax),
        cell(Column::Shipping)
    );
    sheet.write_formula(row, layout.col(Column::Total), &formula);
}

fn box_header<S: Worksheet>(sheet: &mut S, row: u32, col: u32, title: &str) {
    sheet.write_value(row, col, CellValue::Text(title.to_string()));
    sheet.write_value(row, col + 1, CellValue::Text("Values".to_string()));
    sheet.write_background(row, col, Some(config::INFO_BOX_HEADER_COLOR));
    sheet.write_background(row, col + 1, Some(config::INFO_BOX_HEADER_COLOR));
    sheet.set_border(row, col, 1, 2, false);
}

fn create_summary_box<S: Worksheet>(sheet: &mut S, layout: &Layout) {
    let top = layout.summary_box_row();
    let col = layout.box_col();
    box_header(sheet, top - 1, col, "Collection Summary");

    for (i, summary) in SummaryRow::ALL.iter().enumerate() {
        let row = top + i as u32;
        sheet.write_value(row, col, CellValue::Text(summary.display_name().to_string()));
        sheet.write_note(row, col, summary.note());
        sheet.write_background(row, col, Some(config::INFO_BOX_SUB_HEADER_COLOR));

        let letter = col_letter(layout.col(summary.source_column()));
        let (value_row, value_col) = layout.summary_value_cell(*summary);
        sheet.write_formula(value_row, value_col, &format!("=SUM({}:{})", letter, letter));
    }

    sheet.set_border(top, col, SummaryRow::ALL.len() as u32, 2, true);
}

fn create_settings_box<S: Worksheet>(sheet: &mut S, layout: &Layout) {
    let top = layout.settings_box_row();
    let col = layout.box_col();
    box_header(sheet, top - 1, col, "Settings");

    for (i, setting) in SettingRow::ALL.iter().enumerate() {
        let row = top + i as u32;
        sheet.write_value(row, col, CellValue::Text(setting.display_name().to_string()));
        sheet.write_note(row, col, setting.note());
        sheet.write_background(row, col, Some(config::INFO_BOX_SUB_HEADER_COLOR));
    }

    let (threshold_row, threshold_col) = layout.setting_value_cell(SettingRow::Threshold);
    if sheet.read_cell(threshold_row, threshold_col).is_empty() {
        sheet.write_value(
            threshold_row,
            threshold_col,
            CellValue::Number(config::DEFAULT_THRESHOLD_PERCENT),
        );
    }

    for setting in SettingRow::ALL {
        seed_color_default(sheet, layout, setting);
    }

    sheet.set_border(top, col, SettingRow::ALL.len() as u32, 2, true);
}

/// Seed a color setting's value cell: paint the shipped default unless the
/// user has already picked their own background, in which case the cell is
/// labeled as an override and its color is left untouched.
fn seed_color_default<S: Worksheet>(sheet: &mut S, layout: &Layout, setting: SettingRow) {
    let Some(default_hex) = setting.default_color_hex() else {
        return;
    };
    // Shipped defaults are compile-time constants; from_hex cannot fail here.
    let Ok(shipped) = crate::color::Rgb::from_hex(default_hex) else {
        return;
    };

    let (row, col) = layout.setting_value_cell(setting);
    let overridden = matches!(sheet.background(row, col), Some(stored) if stored != shipped)
        && !sheet.read_cell(row, col).is_empty();

    if overridden {
        sheet.write_value(row, col, CellValue::Text("override".to_string()));
    } else {
        sheet.write_background(row, col, Some(shipped));
        sheet.write_value(row, col, CellValue::Text("default".to_string()));
    }
}

fn create_links_box<S: Worksheet>(sheet: &mut S, layout: &Layout) {
    sheet.write_formula(
        layout.links_box_row(),
        layout.box_col(),
        &format!(
            "=HYPERLINK(\"{}\", \"Check for updates and documentation.\")",
            DOCS_URL
        ),
    );
}
