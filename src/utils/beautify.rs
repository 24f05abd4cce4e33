// ============================================================================
// Output Beautification
// Digit grouping for binary and decimal output
// ============================================================================

/// Group binary digits into clusters of four, counted from the right, so a
/// short cluster leads: `"1010100101"` -> `"10 1010 0101"`.
pub fn group_bits(bits: &str) -> String {
    let lead = bits.len() % 4;
    let mut out = String::with_capacity(bits.len() + bits.len() / 4);
    out.push_str(&bits[..lead]);
    for (i, chunk) in bits.as_bytes()[lead..].chunks(4).enumerate() {
        if lead > 0 || i > 0 {
            out.push(' ');
        }
        // chunks of an ASCII digit string are valid UTF-8
        out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }
    out
}

/// Insert `,` thousands separators into the integer part of a decimal
/// string: `"-1234567.125"` -> `"-1,234,567.125"`.
///
/// Text without a leading digit run (`inf`, `NaN`) is returned unchanged.
pub fn group_thousands(decimal: &str) -> String {
    let (sign, rest) = match decimal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", decimal),
    };
    let split = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (integer, tail) = rest.split_at(split);
    if integer.is_empty() {
        return decimal.to_string();
    }

    let mut out = String::with_capacity(decimal.len() + integer.len() / 3);
    out.push_str(sign);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_bits() {
        assert_eq!(group_bits("1010"), "1010");
        assert_eq!(group_bits("1"), "1");
        assert_eq!(group_bits("101010"), "10 1010");
        assert_eq!(
            group_bits("01000000001000000000000000000000"),
            "0100 0000 0010 0000 0000 0000 0000 0000"
        );
        assert_eq!(group_bits(""), "");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("-1234567.125"), "-1,234,567.125");
        assert_eq!(group_thousands("4294967295"), "4,294,967,295");
        assert_eq!(group_thousands("inf"), "inf");
        assert_eq!(group_thousands("-inf"), "-inf");
        assert_eq!(group_thousands("NaN"), "NaN");
    }
}
