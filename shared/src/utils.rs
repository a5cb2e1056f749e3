// Number formatting shared across the engine and the report renderer.

/// Brazilian number handling: '.' as thousands separator, ',' as decimal
/// separator, optional "R$" currency marker on input cells.
pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    /// Parses decimals like "1.234,56" or "123,45" into f64.
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let normalized = s
            .trim()
            .replace('.', "") // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        f64::from_str(&normalized)
            .map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

    /// Parses a cell that may carry the "R$" marker, e.g. "R$ 1.234,56".
    pub fn parse_currency(s: &str) -> Result<f64> {
        parse_decimal(&s.replace("R$", ""))
    }

    /// Formats with Brazilian grouping: 1234.56 -> "1.234,56".
    /// Non-finite values render as zero, matching the tool's
    /// never-crash-on-display policy.
    pub fn format_decimal(value: f64, places: usize) -> String {
        if !value.is_finite() {
            return format_decimal(0.0, places);
        }

        let formatted = format!("{:.*}", places, value.abs());
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (formatted.as_str(), None),
        };

        let digits = int_part.as_bytes();
        let mut out = String::new();
        // Sign only when a nonzero digit survived rounding, so -0.001
        // never prints as "-0,00".
        if value < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.push('-');
        }
        for (i, d) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(*d as char);
        }
        if let Some(f) = frac_part {
            out.push(',');
            out.push_str(f);
        }
        out
    }

    /// Rounds to a whole number with grouping: 28799.99 -> "28.800".
    pub fn format_int(value: f64) -> String {
        format_decimal(value, 0)
    }

    /// "R$ 1.234,56"
    pub fn format_currency(value: f64) -> String {
        format!("R$ {}", format_decimal(value, 2))
    }

}
