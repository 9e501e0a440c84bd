//! Settings, read fresh from the settings box at the start of each pass.

use crate::color::Rgb;
use crate::config;
use crate::error::{Result, TrackerError};
use crate::layout::{Layout, SettingRow};
use crate::sheet::Worksheet;

// ---------------------------------------------------------------------------
// ColorSetting
// ---------------------------------------------------------------------------

/// Whether a color is still the shipped default or a user override.
///
/// A default stays pinned to the shipped value, so a future change of the
/// shipped palette propagates. An override is fixed and never auto-updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSetting {
    Default(Rgb),
    Override(Rgb),
}

impl ColorSetting {
    pub fn rgb(self) -> Rgb {
        match self {
            ColorSetting::Default(c) | ColorSetting::Override(c) => c,
        }
    }

    pub fn is_override(self) -> bool {
        matches!(self, ColorSetting::Override(_))
    }
}

/// The five gradient anchor / indicator colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub loss: ColorSetting,
    pub break_even: ColorSetting,
    pub profit: ColorSetting,
    pub not_listed: ColorSetting,
    pub missing_id: ColorSetting,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub username: Option<String>,
    /// Profit/loss bound as a ratio (the sheet stores a percentage).
    pub threshold: f64,
    pub palette: Palette,
}

impl Settings {
    /// Load settings from the sheet, applying shipped defaults for anything
    /// unset. A zero or negative threshold is a configuration error and
    /// fails fast before any network call.
    pub fn load(sheet: &impl Worksheet, layout: &Layout) -> Result<Settings> {
        let username = {
            let (row, col) = layout.setting_value_cell(SettingRow::Username);
            sheet
                .read_cell(row, col)
                .display()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let threshold = {
            let (row, col) = layout.setting_value_cell(SettingRow::Threshold);
            let percent = sheet
                .read_cell(row, col)
                .as_number()
                .unwrap_or(config::DEFAULT_THRESHOLD_PERCENT);
            if !percent.is_finite() || percent <= 0.0 {
                return Err(TrackerError::Config(format!(
                    "Profit/loss threshold must be a positive percentage, got {}",
                    percent
                )));
            }
            percent / 100.0
        };

        let palette = Palette {
            loss: load_color(sheet, layout, SettingRow::LossColor)?,
            break_even: load_color(sheet, layout, SettingRow::BreakEvenColor)?,
            profit: load_color(sheet, layout, SettingRow::ProfitColor)?,
            not_listed: load_color(sheet, layout, SettingRow::NotListedColor)?,
            missing_id: load_color(sheet, layout, SettingRow::MissingIdColor)?,
        };

        Ok(Settings {
            username,
            threshold,
            palette,
        })
    }
}

/// Decide default-vs-override for one color setting by comparing the stored
/// cell background to the shipped default. No background at all means the
/// structure has not been initialized yet; the shipped default applies.
fn load_color(
    sheet: &impl Worksheet,
    layout: &Layout,
    setting: SettingRow,
) -> Result<ColorSetting> {
    let shipped = Rgb::from_hex(
        setting
            .default_color_hex()
            .ok_or_else(|| TrackerError::Config(format!("{:?} is not a color setting", setting)))?,
    )?;

    let (row, col) = layout.setting_value_cell(setting);
    Ok(match sheet.background(row, col) {
        None => ColorSetting::Default(shipped),
        Some(stored) if stored == shipped => ColorSetting::Default(shipped),
        Some(stored) => ColorSetting::Override(stored),
    })
}
