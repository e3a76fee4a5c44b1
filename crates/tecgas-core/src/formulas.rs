//! Numeric helpers shared by the derivation rules.
//!
//! Sheet values are text. A value that does not parse to a finite number is
//! treated as absent, never as zero.

/// Feet of sea water per atmosphere.
pub const FEET_PER_ATMOSPHERE: f64 = 33.0;

/// Parse a field's text as a finite number.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Format with a fixed number of decimals.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Absolute pressure at depth (feet), in atmospheres.
pub fn ata_from_depth(depth: f64) -> f64 {
    depth / FEET_PER_ATMOSPHERE + 1.0
}

/// Gas used at a constant depth: pressure × surface consumption rate × minutes.
pub fn gas_volume(ata: f64, rate: f64, minutes: f64) -> f64 {
    ata * rate * minutes
}

pub fn midpoint(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_non_finite_and_text() {
        assert_eq!(parse_number(" 120 "), Some(120.0));
        assert_eq!(parse_number(".6"), Some(0.6));
        assert_eq!(parse_number("(A)"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn pressure_at_depth() {
        assert_eq!(format_fixed(ata_from_depth(120.0), 2), "4.64");
        assert_eq!(format_fixed(ata_from_depth(70.0), 2), "3.12");
        assert_eq!(format_fixed(ata_from_depth(0.0), 2), "1.00");
    }

    #[test]
    fn volume_and_midpoint() {
        assert_eq!(format_fixed(gas_volume(3.1, 0.6, 10.0), 2), "18.60");
        assert_eq!(format_fixed(midpoint(120.0, 70.0), 1), "95.0");
    }
}
