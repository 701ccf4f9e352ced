//! Individual cost optimization rules.
//!
//! Each rule is a pure function from one resource to at most one
//! recommendation. Rules are identified by codes like COST-OPT-001.

pub mod instance_downsize;
pub mod storage_shrink;

// ============================================================================
// Rule Codes
// ============================================================================

/// Rule code constants.
pub mod codes {
    pub const OVERPROVISIONED_INSTANCE: &str = "COST-OPT-001";
    pub const OVERSIZED_STORAGE: &str = "COST-OPT-002";
}

/// Get rule description by code.
pub fn rule_description(code: &str) -> &'static str {
    match code {
        codes::OVERPROVISIONED_INSTANCE => "Instance CPU and memory utilization are both low",
        codes::OVERSIZED_STORAGE => "Storage volume exceeds the size threshold",
        _ => "Unknown rule",
    }
}

/// All rule codes known to the engine.
pub fn all_rule_codes() -> &'static [&'static str] {
    &[codes::OVERPROVISIONED_INSTANCE, codes::OVERSIZED_STORAGE]
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value half to even, so `0.625` becomes `0.62` and
/// `12.25` becomes `12.2`. Scaling by a power of ten first would round those
/// ties up.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Render a price as given, keeping one decimal for whole amounts (`150.0`).
///
/// Very large or small amounts use a signed two-digit exponent (`1e+16`,
/// `1e-05`).
pub(crate) fn format_price(amount: f64) -> String {
    let repr = format!("{:?}", amount);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Render a price rounded to whole dollars (`75`).
pub(crate) fn format_whole_dollars(amount: f64) -> String {
    format!("{:.0}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.6666666, 2), 0.67);
        assert_eq!(round_to(20.7920792, 1), 20.8);
        assert_eq!(round_to(0.9, 2), 0.9);
    }

    #[test]
    fn test_round_to_ties_go_to_even() {
        assert_eq!(round_to(0.625, 2), 0.62);
        assert_eq!(round_to(0.725, 2), 0.72);
        assert_eq!(round_to(12.25, 1), 12.2);
        assert_eq!(round_to(0.375, 2), 0.38);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(150.0), "150.0");
        assert_eq!(format_price(99.99), "99.99");
        assert_eq!(format_price(1e16), "1e+16");
        assert_eq!(format_price(2.5e17), "2.5e+17");
        assert_eq!(format_price(0.00001), "1e-05");
        assert_eq!(format_price(1.5e-7), "1.5e-07");
        assert_eq!(format_price(1e100), "1e+100");
        assert_eq!(format_whole_dollars(75.0), "75");
        assert_eq!(format_whole_dollars(52.6), "53");
        assert_eq!(format_whole_dollars(28.4), "28");
    }

    #[test]
    fn test_rule_descriptions() {
        for code in all_rule_codes() {
            assert_ne!(rule_description(code), "Unknown rule");
        }
        assert_eq!(rule_description("COST-OPT-999"), "Unknown rule");
    }
}
