//! Tests for sheet structure normalization: headers, formulas, filter,
//! frozen header row and the info boxes.

mod common;

use common::ScriptedCatalog;
use vinyl_tracker::layout::{SettingRow, SummaryRow};
use vinyl_tracker::{Alignment, CellValue, Column, Rgb, Worksheet};

#[test]
fn headers_are_written_with_help_notes() {
    let tracker = common::new_tracker(ScriptedCatalog::new());
    for (i, column) in Column::ALL.iter().enumerate() {
        let col = i as u32 + 1;
        assert_eq!(
            tracker.sheet().read_cell(1, col),
            CellValue::Text(column.display_name().to_string())
        );
        assert!(tracker.sheet().note(1, col).is_some(), "{:?} needs a note", column);
    }
}

#[test]
fn filter_and_frozen_header_are_recreated() {
    let mut tracker = common::new_tracker(ScriptedCatalog::new());
    common::set_cost_row(&mut tracker, 2, Some("1"), 1.0, 0.0, 0.0);
    tracker.reset_structure().unwrap();

    assert_eq!(tracker.sheet().frozen_rows(), 1);
    assert_eq!(tracker.sheet().filter(), Some((1, 1, 2, 12)));
}

#[test]
fn data_rows_get_a_total_sum_formula() {
    let mut tracker = common::new_tracker(ScriptedCatalog::new());
    common::set_cost_row(&mut tracker, 2, Some("1"), 10.0, 1.0, 2.0);
    tracker.reset_structure().unwrap();

    let total_col = tracker.layout().col(Column::Total);
    assert_eq!(
        tracker.sheet().read_cell(2, total_col),
        CellValue::Formula("=SUM(E2,F2,G2)".to_string())
    );
}

#[test]
fn summary_box_carries_column_sum_formulas() {
    let tracker = common::new_tracker(ScriptedCatalog::new());
    let layout = tracker.layout();

    let (row, col) = layout.summary_value_cell(SummaryRow::ItemInvestment);
    assert_eq!(
        tracker.sheet().read_cell(row, col),
        CellValue::Formula("=SUM(E:E)".to_string())
    );
    let (row, col) = layout.summary_value_cell(SummaryRow::TotalMarketLowest);
    assert_eq!(
        tracker.sheet().read_cell(row, col),
        CellValue::Formula("=SUM(I:I)".to_string())
    );
}

#[test]
fn threshold_is_seeded_once_and_not_overwritten() {
    let mut tracker = common::new_tracker(ScriptedCatalog::new());
    let (row, col) = tracker.layout().setting_value_cell(SettingRow::Threshold);
    assert_eq!(tracker.sheet().read_cell(row, col), CellValue::Number(10.0));

    common::set_threshold_percent(&mut tracker, 25.0);
    tracker.reset_structure().unwrap();
    assert_eq!(tracker.sheet().read_cell(row, col), CellValue::Number(25.0));
}

#[test]
fn color_settings_are_seeded_with_shipped_defaults() {
    let tracker = common::new_tracker(ScriptedCatalog::new());
    let (row, col) = tracker.layout().setting_value_cell(SettingRow::LossColor);

    assert_eq!(tracker.sheet().background(row, col), Some(Rgb::from_hex("#ffb3ba").unwrap()));
    assert_eq!(tracker.sheet().read_cell(row, col), CellValue::Text("default".to_string()));
}

#[test]
fn a_user_color_survives_renormalization_as_an_override() {
    let mut tracker = common::new_tracker(ScriptedCatalog::new());
    let custom = Rgb::from_hex("#336699").unwrap();
    let (row, col) = tracker.layout().setting_value_cell(SettingRow::MissingIdColor);
    tracker.sheet_mut().write_background(row, col, Some(custom));

    tracker.reset_structure().unwrap();
    assert_eq!(tracker.sheet().background(row, col), Some(custom));
    assert_eq!(tracker.sheet().read_cell(row, col), CellValue::Text("override".to_string()));
}

#[test]
fn info_boxes_are_outlined_with_borders() {
    let tracker = common::new_tracker(ScriptedCatalog::new());
    let layout = tracker.layout();
    let col = layout.box_col();

    // Header rows get a plain outline, the bodies inner row borders too.
    let summary_rows = SummaryRow::ALL.len() as u32;
    let setting_rows = SettingRow::ALL.len() as u32;
    assert!(tracker.sheet().has_border(layout.summary_box_row() - 1, col, 1, 2, false));
    assert!(tracker.sheet().has_border(layout.summary_box_row(), col, summary_rows, 2, true));
    assert!(tracker.sheet().has_border(layout.settings_box_row() - 1, col, 1, 2, false));
    assert!(tracker.sheet().has_border(layout.settings_box_row(), col, setting_rows, 2, true));
}

#[test]
fn text_columns_are_left_aligned() {
    let tracker = common::new_tracker(ScriptedCatalog::new());
    let layout = tracker.layout();

    for column in [Column::ReleaseId, Column::Artist, Column::Album] {
        assert_eq!(
            tracker.sheet().column_alignment(layout.col(column)),
            Some(Alignment::Left),
            "{:?} should be left-aligned",
            column
        );
    }
    assert_eq!(tracker.sheet().column_alignment(layout.box_col()), Some(Alignment::Left));
    assert_eq!(tracker.sheet().column_alignment(layout.box_col() + 1), Some(Alignment::Left));

    // Numeric columns keep the backend default.
    assert_eq!(tracker.sheet().column_alignment(layout.col(Column::Price)), None);
}

#[test]
fn normalization_is_idempotent() {
    let mut tracker = common::new_tracker(ScriptedCatalog::new());
    common::set_cost_row(&mut tracker, 2, Some("1"), 1.0, 0.0, 0.0);
    tracker.reset_structure().unwrap();
    let once = tracker.sheet().clone();
    tracker.reset_structure().unwrap();
    assert_eq!(*tracker.sheet(), once);
}
