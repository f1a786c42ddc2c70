//! Форматирование значений для карточек, осей и подписей графиков

use crate::shared::indicators::ValueFormat;

/// Rupee sign used across the dashboard.
pub const RUPEE: &str = "₹";

/// Formats `val` with at most `decimals` fraction digits, dropping trailing zeros.
///
/// ```
/// use contracts::shared::format::format_trimmed;
/// assert_eq!(format_trimmed(3.5, 2), "3.5");
/// assert_eq!(format_trimmed(8.0, 2), "8");
/// ```
pub fn format_trimmed(val: f64, decimals: u8) -> String {
    let s = format!("{:.prec$}", val, prec = decimals as usize);
    if !s.contains('.') {
        return normalize_zero(s);
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    normalize_zero(trimmed.to_string())
}

fn normalize_zero(s: String) -> String {
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

/// Groups the integer part by thousands with commas.
///
/// ```
/// use contracts::shared::format::format_grouped;
/// assert_eq!(format_grouped(422400), "422,400");
/// ```
pub fn format_grouped(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Indian units for compact amounts, largest first.
const INR_UNITS: [(f64, &str); 4] = [
    (10_000_000.0, "Cr"),
    (100_000.0, "L"),
    (1_000.0, "K"),
    (1.0, ""),
];

fn round_tenths(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Compact rupee amount for axis ticks: thousands (K), lakhs (L), crores (Cr).
///
/// The unit is picked after rounding, so `99_999` reads `₹1L`, not `₹100K`.
pub fn format_compact_inr(val: f64) -> String {
    let abs = val.abs();
    let mut idx = INR_UNITS
        .iter()
        .position(|(unit, _)| abs >= *unit)
        .unwrap_or(INR_UNITS.len() - 1);

    let mut scaled = round_tenths(val / INR_UNITS[idx].0);
    if idx > 0 && scaled.abs() >= INR_UNITS[idx - 1].0 / INR_UNITS[idx].0 {
        idx -= 1;
        scaled = round_tenths(val / INR_UNITS[idx].0);
    }
    format!("{}{}{}", RUPEE, format_trimmed(scaled, 1), INR_UNITS[idx].1)
}

/// Renders a card value according to its [`ValueFormat`].
pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => format!("{}{}", currency, format_trimmed(val, 2)),
        ValueFormat::Number { decimals } => format_trimmed(val, *decimals),
        ValueFormat::Percent { decimals } => format!("{}%", format_trimmed(val, *decimals)),
        ValueFormat::Integer => format_grouped(val.round() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_trimmed() {
        assert_eq!(format_trimmed(3.5, 1), "3.5");
        assert_eq!(format_trimmed(8.0, 1), "8");
        assert_eq!(format_trimmed(2800.0, 0), "2800");
        assert_eq!(format_trimmed(-0.0001, 2), "0");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(18144), "18,144");
        assert_eq!(format_grouped(1234567), "1,234,567");
        assert_eq!(format_grouped(-202752), "-202,752");
    }

    #[test]
    fn test_format_compact_inr() {
        assert_eq!(format_compact_inr(422400.0), "₹4.2L");
        assert_eq!(format_compact_inr(200000.0), "₹2L");
        assert_eq!(format_compact_inr(18144.0), "₹18.1K");
        assert_eq!(format_compact_inr(0.0), "₹0");
        assert_eq!(format_compact_inr(25_000_000.0), "₹2.5Cr");
    }

    #[test]
    fn test_format_compact_inr_promotes_rounded_unit() {
        assert_eq!(format_compact_inr(99_999.0), "₹1L");
        assert_eq!(format_compact_inr(9_999_999.0), "₹1Cr");
        assert_eq!(format_compact_inr(999.96), "₹1K");
        assert_eq!(format_compact_inr(99_940.0), "₹99.9K");
        assert_eq!(format_compact_inr(-99_999.0), "₹-1L");
    }

    #[test]
    fn test_format_value_matches_card_text() {
        let money = ValueFormat::Money {
            currency: RUPEE.to_string(),
        };
        assert_eq!(format_value(2800.0, &money), "₹2800");
        assert_eq!(format_value(888.0, &money), "₹888");
        assert_eq!(format_value(3.5, &ValueFormat::Number { decimals: 1 }), "3.5");
        assert_eq!(format_value(8.0, &ValueFormat::Number { decimals: 1 }), "8");
        assert_eq!(format_value(48.0, &ValueFormat::Percent { decimals: 0 }), "48%");
        assert_eq!(format_value(151200.0, &ValueFormat::Integer), "151,200");
    }
}
