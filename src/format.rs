//! Display helpers for dataset metadata.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count as a human-readable size.
///
/// Uses binary (1024) units with at most two decimal places, trailing
/// zeros trimmed: `0` -> `"0 B"`, `1536` -> `"1.5 KB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut rendered = format!("{:.2}", value);
    if rendered.contains('.') {
        rendered = rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{} {}", rendered, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_file_size(0), "0 B");
    }

    #[test]
    fn test_bytes() {
        assert_eq!(format_file_size(1), "1 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * 1024), "10 KB");
    }

    #[test]
    fn test_two_decimal_rounding() {
        // 4821 / 1024 = 4.7080... -> "4.71"
        assert_eq!(format_file_size(4821), "4.71 KB");
    }

    #[test]
    fn test_megabytes_and_up() {
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
        assert_eq!(format_file_size(2 * 1024u64.pow(4)), "2 TB");
    }

    #[test]
    fn test_clamps_to_largest_unit() {
        // Past TB, stay in TB rather than overflowing the unit table
        assert_eq!(format_file_size(2048 * 1024u64.pow(4)), "2048 TB");
    }
}
