//! Formatting utilities for file sizes and dates.

/// Format a byte count for display (e.g., "1.5 KB", "2.25 MB").
///
/// Binary units, at most two decimals, trailing zeros trimmed.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1);
    let value = bytes as f64 / f64::powi(1024.0, exponent as i32);

    let rounded = (value * 100.0).round() / 100.0;
    let mut text = format!("{:.2}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{} {}", text, UNITS[exponent as usize])
}

/// Format an ISO-8601 timestamp for display as its date part (YYYY-MM-DD).
///
/// The backend always sends full timestamps; anything shorter is shown
/// as-is.
pub fn format_date(iso: &str) -> String {
    match iso.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(500), "500 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_format_size_trims_trailing_zeros() {
        assert_eq!(format_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_size(2359296), "2.25 MB");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-01-15T10:30:00Z"), "2026-01-15");
        assert_eq!(format_date("2026-01-15"), "2026-01-15");
    }
}
