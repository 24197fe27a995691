use crate::{Result, SessionErr};

/// Parses the number a compute cycle was requested for.
///
/// Reads an optionally signed integer after any leading whitespace and ignores whatever
/// follows it, so `"12px"` reads as `12` and `"3.7"` as `3`. A `0x` prefix switches to
/// hexadecimal digits, `"0x10"` reads as `16`.
///
/// # Errors
/// Returns `SessionErr::InvalidInput` when there are no digits to read, the value is zero or
/// it does not fit in an `f32`.
pub fn parse_input(input: &str) -> Result<f32> {
    let invalid = || SessionErr::InvalidInput(input.to_string());

    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1., rest),
        None => (1., trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());

    let digits = &rest[..end];
    if digits.is_empty() {
        return Err(invalid());
    }

    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0f64, |acc, d| acc * radix as f64 + d as f64);

    let value = (sign * magnitude) as f32;
    if value == 0. || !value.is_finite() {
        return Err(invalid());
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_input("5").unwrap(), 5.);
        assert_eq!(parse_input("  -3").unwrap(), -3.);
        assert_eq!(parse_input("+8").unwrap(), 8.);
    }

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(parse_input("12abc").unwrap(), 12.);
        assert_eq!(parse_input("3.7").unwrap(), 3.);
        assert_eq!(parse_input("7 8").unwrap(), 7.);
    }

    #[test]
    fn hexadecimal_prefix() {
        assert_eq!(parse_input("0x10").unwrap(), 16.);
        assert_eq!(parse_input("-0XfF").unwrap(), -255.);
        assert_eq!(parse_input("0x1g").unwrap(), 1.);
        assert!(parse_input("0x").is_err());
        assert!(parse_input("0xz").is_err());
    }

    #[test]
    fn out_of_range_values() {
        assert!(parse_input(&"9".repeat(40)).is_err());
        assert_eq!(parse_input(&"9".repeat(20)).unwrap(), 1e20);
    }

    #[test]
    fn rejected_inputs() {
        for input in ["", "   ", "abc", "0", "-0", "000", "[[1,2]]", "-", ".5", "x5"] {
            let err = parse_input(input).unwrap_err();
            assert!(matches!(err, SessionErr::InvalidInput(_)), "{input:?}");
        }
    }
}
