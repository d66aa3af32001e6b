//! Size literal parsing.
//!
//! pprof renders byte quantities as `<decimal><unit>` tokens such as
//! `512.19kB` or `1.50MB`. The units look decimal but are binary:
//! kB is 1024 bytes. This is an explicit tokenizer rather than a regex so
//! the edge cases (missing digits, unknown units, multiple literals per
//! line) are enumerable and testable in isolation.

use crate::utils::config::{GIGABYTE, KILOBYTE, MEGABYTE};
use crate::utils::error::ParseError;

/// Parse a single size literal token into an exact byte count
///
/// Grammar: `<decimal-number><unit>` with unit one of `B`, `kB`, `MB`, `GB`
/// (case-sensitive, no space). Fractional magnitudes are truncated toward
/// zero after multiplication.
///
/// # Errors
/// `ParseError::MalformedSizeLiteral` when the token does not match the
/// grammar. Callers scanning report lines treat this as "not a table row".
pub fn parse_size(token: &str) -> Result<u64, ParseError> {
    let number_end = token
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(token.len());
    let (number, unit) = token.split_at(number_end);

    if !number.chars().any(|c| c.is_ascii_digit()) {
        return Err(ParseError::MalformedSizeLiteral(token.to_string()));
    }

    let magnitude: f64 = number
        .parse()
        .map_err(|_| ParseError::MalformedSizeLiteral(token.to_string()))?;

    let multiplier = match unit {
        "B" => 1,
        "kB" => KILOBYTE,
        "MB" => MEGABYTE,
        "GB" => GIGABYTE,
        _ => return Err(ParseError::MalformedSizeLiteral(token.to_string())),
    };

    Ok((magnitude * multiplier as f64) as u64)
}

/// Scan a line left-to-right for size-literal-shaped substrings
///
/// Used for the "Total:" summary line, whose literals are embedded in
/// arbitrary text. Returns the parsed byte counts in source order.
pub fn find_size_literals(line: &str) -> Vec<u64> {
    let bytes = line.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
            i += 1;
        }

        // The number must be followed immediately by a unit suffix
        let unit_len = match bytes.get(i) {
            Some(b'B') => 1,
            Some(b'k') | Some(b'M') | Some(b'G') if bytes.get(i + 1) == Some(&b'B') => 2,
            _ => 0,
        };

        if unit_len > 0 {
            let end = i + unit_len;
            if let Ok(value) = parse_size(&line[start..end]) {
                found.push(value);
                i = end;
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_plain_bytes() {
        assert_eq!(parse_size("512B").unwrap(), 512);
        assert_eq!(parse_size("0B").unwrap(), 0);
    }

    #[test]
    fn test_parse_size_units() {
        assert_eq!(parse_size("1kB").unwrap(), 1024);
        assert_eq!(parse_size("1MB").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("1GB").unwrap(), 1024 * 1024 * 1024);
    }

    #[test]
    fn test_parse_size_fractional_truncates() {
        assert_eq!(parse_size("1.50MB").unwrap(), 1_572_864);
        assert_eq!(parse_size("512.19kB").unwrap(), 524_482);
        assert_eq!(parse_size("0.5B").unwrap(), 0);
    }

    #[test]
    fn test_parse_size_rejects_unknown_unit() {
        assert!(parse_size("10KB").is_err()); // case-sensitive
        assert!(parse_size("10TB").is_err());
        assert!(parse_size("10").is_err());
    }

    #[test]
    fn test_parse_size_rejects_missing_digits() {
        assert!(parse_size("MB").is_err());
        assert!(parse_size("").is_err());
        assert!(parse_size("..MB").is_err());
    }

    #[test]
    fn test_find_size_literals_in_total_line() {
        let found = find_size_literals("Total: 15MB, 2MB");
        assert_eq!(found, vec![15 * 1024 * 1024, 2 * 1024 * 1024]);
    }

    #[test]
    fn test_find_size_literals_skips_non_literals() {
        // Percent columns and hex addresses must not match
        let found = find_size_literals("512.19kB 32.97% 0x1234 main.A");
        assert_eq!(found, vec![524_482]);
    }

    #[test]
    fn test_find_size_literals_empty() {
        assert!(find_size_literals("flat  flat%   sum%").is_empty());
    }
}
