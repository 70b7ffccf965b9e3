/// Unit suffixes, base 1024.
const UNITS: [&str; 9] = ["bytes", "kb", "mb", "gb", "tb", "pb", "eb", "zb", "yb"];

/// Formats a byte count with the largest fitting base-1024 unit.
///
/// The scaled value is rounded to `decimals` places, a trailing zero
/// fraction is dropped and the integer part gets "." thousands
/// separators (pt-BR convention). Zero bytes formats as "0bytes".
pub fn format_size(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0bytes".to_string();
    }

    // floor(log2(bytes)) / 10 is exactly floor(log1024(bytes))
    let exponent = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1) as usize;
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);

    let fixed = format!("{:.*}", decimals, scaled);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        &fixed
    };

    format!("{}{}", group_thousands(trimmed), UNITS[exponent])
}

/// Inserts "." separators into the integer part of an already
/// formatted decimal number.
fn group_thousands(value: &str) -> String {
    let (integer, fraction) = match value.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (value, None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::new();
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }

    match fraction {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kb_band() {
        // everything in [2^10, 2^20) carries the kb suffix
        for bytes in [1024u64, 1536, 4096, 1 << 19, (1 << 20) - 1] {
            assert!(format_size(bytes, 0).ends_with("kb"), "bytes={}", bytes);
        }
    }

    #[test]
    fn test_rounds_instead_of_truncating() {
        assert_eq!(format_size(1536, 1), "1.5kb");
        assert_eq!(format_size(1536, 0), "2kb");
    }

    #[test]
    fn test_trailing_zero_fraction_dropped() {
        assert_eq!(format_size(1024 * 1024, 2), "1mb");
        assert_eq!(format_size(5 * 1024 * 1024, 0), "5mb");
    }

    #[test]
    fn test_thousands_separator() {
        // 1023 * 1024 bytes scales to 1023kb, grouped as 1.023
        assert_eq!(format_size(1023 * 1024, 0), "1.023kb");
    }

    #[test]
    fn test_sub_kilobyte() {
        assert_eq!(format_size(512, 0), "512bytes");
        assert_eq!(format_size(1, 0), "1bytes");
    }

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_size(0, 0), "0bytes");
        assert_eq!(format_size(0, 2), "0bytes");
    }
}
