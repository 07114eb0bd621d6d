//! Format - Formatting Utilities

use chrono::{DateTime, Local, Utc};

/// Format a UTC datetime for display in local time
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Table cell for a measurement (one decimal)
pub fn format_measurement(value: f64) -> String {
    format!("{value:.1}")
}

/// Summary card value: two decimals, or "N/A" when absent
pub fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => "N/A".to_string(),
    }
}

/// Truncate a string to max characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_formatting() {
        assert_eq!(format_stat(Some(119.456)), "119.46");
        assert_eq!(format_stat(None), "N/A");
        assert_eq!(format_stat(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn measurement_formatting() {
        assert_eq!(format_measurement(5.26), "5.3");
        assert_eq!(format_measurement(110.0), "110.0");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Heat Exchanger-12", 10), "Heat Ex...");
        assert_eq!(truncate("°C°C", 10), "°C°C");
        assert_eq!(truncate("abcdef", 2), "ab");
    }
}
