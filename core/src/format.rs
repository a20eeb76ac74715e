//! Formatting helpers for presenting metrics.

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_to_requested_precision() {
        assert_eq!(format_number(1800.0, 2), "1800.00");
        assert_eq!(format_number(29.031, 2), "29.03");
        assert_eq!(format_percent(40.0), "40.00%");
    }
}
