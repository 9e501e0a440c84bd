//! RGB colors and the profit/loss gradient engine.
//!
//! The gradient maps a signed profit ratio (`market_lowest / total - 1`) to a
//! color interpolated between three anchors: the loss color at `-threshold`,
//! the break-even color at `0`, and the profit color at `+threshold`. Ratios
//! beyond the threshold saturate to the extreme anchors. An unlisted item
//! (no market price at all) bypasses interpolation entirely and gets the
//! not-listed color.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#rrggbb` hex string (leading `#` optional, case-insensitive).
    ///
    /// A malformed color is a configuration error, not recoverable data.
    pub fn from_hex(hex: &str) -> Result<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TrackerError::Config(format!(
                "Invalid color value: {:?}",
                hex
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| {
                TrackerError::Config(format!("Invalid color value {:?}: {}", hex, e))
            })
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Gradient engine
// ---------------------------------------------------------------------------

/// Map a profit/loss ratio to an interpolated color.
///
/// # Arguments
///
/// * `ratio` - `(market_lowest / total) - 1`, a signed real number.
/// * `threshold` - Positive bound beyond which the color saturates (e.g. 0.10).
/// * `loss`, `break_even`, `profit` - Anchor colors at `-threshold`, `0`,
///   `+threshold` respectively.
/// * `not_listed` - Returned directly when `is_unlisted` is set.
/// * `is_unlisted` - True when the item has no market listing at all; this is
///   a distinct state, not a -100% loss.
///
/// Each channel is interpolated independently with the slope-intercept
/// formula `round((bound - anchor) / threshold * ratio + anchor)` and the
/// final value is clamped into `[0, 255]` (the clamp guards against rounding
/// overshoot with extreme custom anchors).
///
/// Fails fast on a zero, negative or non-finite threshold.
pub fn gradient(
    ratio: f64,
    threshold: f64,
    loss: Rgb,
    break_even: Rgb,
    profit: Rgb,
    not_listed: Rgb,
    is_unlisted: bool,
) -> Result<Rgb> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(TrackerError::Config(format!(
            "Profit/loss threshold must be a positive number, got {}",
            threshold
        )));
    }
    if is_unlisted {
        return Ok(not_listed);
    }

    let ratio = ratio.clamp(-threshold, threshold);
    let bound = if ratio < 0.0 { loss } else { profit };
    let frac = ratio.abs() / threshold;

    Ok(Rgb {
        r: channel(break_even.r, bound.r, frac),
        g: channel(break_even.g, bound.g, frac),
        b: channel(break_even.b, bound.b, frac),
    })
}

/// Interpolate one channel between the break-even anchor and the saturation
/// bound. `frac` is `|ratio| / threshold`, already in `[0, 1]`.
fn channel(anchor: u8, bound: u8, frac: f64) -> u8 {
    let v = (f64::from(bound) - f64::from(anchor)) * frac + f64::from(anchor);
    v.round().clamp(0.0, 255.0) as u8
}
