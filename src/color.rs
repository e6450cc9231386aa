use crate::error::SetlightError;

/// Whitespace skipped before the number, as C `isspace` sees it
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Parse a hexadecimal color argument into a 0xWWRRGGBB value.
///
/// Reads leading hex digits after optional whitespace and a `0x`/`0X`
/// prefix, and ignores anything after them. A value of zero is rejected as a
/// format error, matching the long-standing behavior callers rely on.
pub fn parse_color(arg: &str) -> Result<u32, SetlightError> {
    let bytes = arg.as_bytes();
    let start = bytes.iter().position(|&b| !is_c_space(b)).unwrap_or(bytes.len());
    let rest = &bytes[start..];
    let rest = rest
        .strip_prefix(b"0x")
        .or_else(|| rest.strip_prefix(b"0X"))
        .unwrap_or(rest);

    let mut value: u64 = 0;
    let mut consumed = 0;
    let mut overflow = false;

    for digit in rest.iter().map_while(|&b| (b as char).to_digit(16)) {
        consumed += 1;
        if !overflow {
            value = (value << 4) | digit as u64;
            overflow = value > u32::MAX as u64;
        }
    }

    if consumed == 0 {
        return Err(SetlightError::Format);
    }
    if overflow {
        return Err(SetlightError::Range);
    }
    if value == 0 {
        return Err(SetlightError::Format);
    }

    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_colors() {
        assert_eq!(parse_color("1").unwrap(), 1);
        assert_eq!(parse_color("ff0000").unwrap(), 0xFF0000);
        assert_eq!(parse_color("FfAa01").unwrap(), 0xFFAA01);
        assert_eq!(parse_color("ffffffff").unwrap(), 0xFFFF_FFFF);
        assert_eq!(parse_color("00000000000000ff").unwrap(), 0xFF);
    }

    #[test]
    fn test_prefix_and_whitespace() {
        assert_eq!(parse_color("0xff00").unwrap(), 0xFF00);
        assert_eq!(parse_color("0X10").unwrap(), 0x10);
        assert_eq!(parse_color("  abc").unwrap(), 0xABC);
    }

    #[test]
    fn test_zero_is_format_error() {
        assert_eq!(parse_color("0"), Err(SetlightError::Format));
        assert_eq!(parse_color("0x0"), Err(SetlightError::Format));
        assert_eq!(parse_color("0000"), Err(SetlightError::Format));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(parse_color("zz"), Err(SetlightError::Format));
        assert_eq!(parse_color(""), Err(SetlightError::Format));
        assert_eq!(parse_color("0x"), Err(SetlightError::Format));
        assert_eq!(parse_color("-1"), Err(SetlightError::Format));
        assert_eq!(parse_color("+ff"), Err(SetlightError::Format));
        assert_eq!(parse_color("\u{a0}ff"), Err(SetlightError::Format));
    }

    #[test]
    fn test_trailing_characters_are_ignored() {
        assert_eq!(parse_color("ffzz"), Ok(0xff));
        assert_eq!(parse_color("ff\n"), Ok(0xff));
        assert_eq!(parse_color("ff zz"), Ok(0xff));
        assert_eq!(parse_color("\t\x0bff"), Ok(0xff));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_color("100000000"), Err(SetlightError::Range));
        assert_eq!(parse_color("ffffffffffffffffffffffff"), Err(SetlightError::Range));
    }

    #[test]
    fn test_range_judged_on_leading_digits() {
        assert_eq!(parse_color("100000000zz"), Err(SetlightError::Range));
        assert_eq!(parse_color("ffffffffz1"), Ok(0xFFFF_FFFF));
    }

    #[test]
    fn test_every_byte_position() {
        for shift in (0..32).step_by(4) {
            for digit in 1..16u32 {
                let value = digit << shift;
                assert_eq!(parse_color(&format!("{:x}", value)).unwrap(), value);
            }
        }
    }
}
