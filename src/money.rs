//! Currency formatting and parsing.
//!
//! All amounts are written to the sheet as en-US style currency strings
//! (`$1,234.56`). Multi-currency is out of scope; everything the tracker
//! writes uses this one format.

/// Round to 2 decimal places.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount as a currency string, e.g. `$1,234.56` / `-$0.50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let rem = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < -0.004 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, rem)
}

/// Parse a currency string (or plain number string) back to an amount.
///
/// Returns `None` for anything non-numeric; data-shape anomalies are treated
/// as absent values rather than hard failures.
pub fn parse_currency(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
