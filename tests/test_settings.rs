//! Tests for settings loading and the default-vs-override color model.

mod common;

use common::ScriptedCatalog;
use vinyl_tracker::layout::SettingRow;
use vinyl_tracker::settings::{ColorSetting, Settings};
use vinyl_tracker::{CellValue, Rgb, TrackerError, Worksheet};

#[test]
fn blank_sheet_loads_shipped_defaults() {
    let tracker = common::new_tracker(ScriptedCatalog::new());
    let settings = tracker.settings().unwrap();

    assert_eq!(settings.username, None);
    assert_eq!(settings.threshold, 0.10);
    assert_eq!(
        settings.palette.loss,
        ColorSetting::Default(Rgb::from_hex("#ffb3ba").unwrap())
    );
    assert_eq!(
        settings.palette.not_listed,
        ColorSetting::Default(Rgb::from_hex("#ffffff").unwrap())
    );
    assert!(!settings.palette.profit.is_override());
}

#[test]
fn username_is_trimmed_and_empty_means_unset() {
    let mut tracker = common::new_tracker(ScriptedCatalog::new());
    common::set_username(&mut tracker, "  crate-digger  ");
    assert_eq!(
        tracker.settings().unwrap().username.as_deref(),
        Some("crate-digger")
    );

    common::set_username(&mut tracker, "   ");
    assert_eq!(tracker.settings().unwrap().username, None);
}

#[test]
fn custom_threshold_percentage_becomes_a_ratio() {
    let mut tracker = common::new_tracker(ScriptedCatalog::new());
    common::set_threshold_percent(&mut tracker, 25.0);
    assert_eq!(tracker.settings().unwrap().threshold, 0.25);
}

#[test]
fn zero_threshold_fails_fast() {
    let mut tracker = common::new_tracker(ScriptedCatalog::new());
    common::set_threshold_percent(&mut tracker, 0.0);
    let err = tracker.settings().unwrap_err();
    assert!(matches!(err, TrackerError::Config(_)));
}

#[test]
fn non_numeric_threshold_falls_back_to_default() {
    let mut tracker = common::new_tracker(ScriptedCatalog::new());
    let (row, col) = tracker.layout().setting_value_cell(SettingRow::Threshold);
    tracker
        .sheet_mut()
        .write_value(row, col, CellValue::Text("lots".to_string()));
    assert_eq!(tracker.settings().unwrap().threshold, 0.10);
}

#[test]
fn changed_background_becomes_an_override() {
    let mut tracker = common::new_tracker(ScriptedCatalog::new());
    let custom = Rgb::from_hex("#123456").unwrap();
    let (row, col) = tracker.layout().setting_value_cell(SettingRow::LossColor);
    tracker.sheet_mut().write_background(row, col, Some(custom));

    let settings = tracker.settings().unwrap();
    assert_eq!(settings.palette.loss, ColorSetting::Override(custom));
    // The other colors stay pinned to the shipped defaults.
    assert!(!settings.palette.break_even.is_override());
}

#[test]
fn background_matching_shipped_default_stays_default() {
    let mut tracker = common::new_tracker(ScriptedCatalog::new());
    let shipped = Rgb::from_hex("#baffc9").unwrap();
    let (row, col) = tracker.layout().setting_value_cell(SettingRow::ProfitColor);
    tracker.sheet_mut().write_background(row, col, Some(shipped));

    let settings = tracker.settings().unwrap();
    assert_eq!(settings.palette.profit, ColorSetting::Default(shipped));
}

#[test]
fn settings_load_is_side_effect_free() {
    let tracker = common::new_tracker(ScriptedCatalog::new());
    let before = tracker.sheet().clone();
    let _ = Settings::load(tracker.sheet(), tracker.layout()).unwrap();
    assert_eq!(*tracker.sheet(), before);
}
