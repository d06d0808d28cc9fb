//! Monetary and area input normalization.
//!
//! The price field is a masked input: every keystroke is re-normalized and
//! re-formatted, so normalization must be idempotent over its own display
//! output. Digits are read as centavos — the last two are the fraction.

/// Longest digit run accepted from the price field (R$ 99.999.999,99).
const MAX_CURRENCY_DIGITS: usize = 10;

/// Extracts the monetary amount from a raw field value.
///
/// Strips everything that is not an ASCII digit and reads the remaining run
/// as centavos. Returns `None` when no digit survives — "not yet entered" is
/// distinct from an entered zero.
pub fn normalize_currency(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_CURRENCY_DIGITS)
        .collect();
    if digits.is_empty() {
        return None;
    }
    let cents: i64 = digits.parse().ok()?;
    Some(cents as f64 / 100.0)
}

/// Formats an amount for display, pt-BR style: `R$ 1.234.567,89`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    if negative {
        format!("-R$ {whole},{frac:02}")
    } else {
        format!("R$ {whole},{frac:02}")
    }
}

/// Parses the area field as a whole number of m².
///
/// Reads the leading digit run of the trimmed input, so a suffixed entry
/// like "130 m²" still parses. Returns `None` when no leading digit exists;
/// callers needing a display fallback map that to 0 themselves.
pub fn parse_area(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_reads_digits_as_centavos() {
        assert_eq!(normalize_currency("250000"), Some(2_500.0));
        assert_eq!(normalize_currency("R$ 250.000,00"), Some(250_000.0));
        assert_eq!(normalize_currency("1"), Some(0.01));
    }

    #[test]
    fn normalize_distinguishes_empty_from_zero() {
        assert_eq!(normalize_currency(""), None);
        assert_eq!(normalize_currency("R$ ,"), None);
        assert_eq!(normalize_currency("abc"), None);
        assert_eq!(normalize_currency("0"), Some(0.0));
        assert_eq!(normalize_currency("000"), Some(0.0));
    }

    #[test]
    fn normalize_caps_the_digit_run() {
        // Eleven digits: everything past the tenth is dropped.
        assert_eq!(normalize_currency("99999999999"), Some(99_999_999.99));
    }

    #[test]
    fn format_groups_thousands_pt_br() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(1_234.5), "R$ 1.234,50");
        assert_eq!(format_currency(250_000.0), "R$ 250.000,00");
        assert_eq!(format_currency(1_234_567.89), "R$ 1.234.567,89");
    }

    #[test]
    fn normalization_round_trips_through_display() {
        for raw in ["250000", "R$ 1.234,56", "7", "0,99", "99999999999"] {
            let value = normalize_currency(raw).unwrap();
            let reparsed = normalize_currency(&format_currency(value)).unwrap();
            assert_eq!(reparsed, value, "round-trip drifted for {raw:?}");
        }
    }

    #[test]
    fn area_parses_leading_digits_only() {
        assert_eq!(parse_area("130"), Some(130));
        assert_eq!(parse_area("  130 m²"), Some(130));
        assert_eq!(parse_area("0"), Some(0));
        assert_eq!(parse_area(""), None);
        assert_eq!(parse_area("m² 130"), None);
        assert_eq!(parse_area("abc"), None);
    }
}
