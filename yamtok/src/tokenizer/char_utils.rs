/// Any byte up to and including space counts as whitespace between tokens.
#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) const fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) const fn is_white_or_eof(c: Option<u8>) -> bool {
    match c {
        Some(x) => is_whitespace(x),
        None => true,
    }
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) const fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) const fn is_break(c: u8) -> bool {
    c == b'\r' || c == b'\n'
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) const fn is_flow_indicator(c: u8) -> bool {
    matches!(c, b',' | b'[' | b']' | b'{' | b'}')
}

/// Bytes that end a plain scalar regardless of context.
#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) const fn is_plain_terminator(c: u8) -> bool {
    matches!(c, b'[' | b']' | b'{' | b'}' | b'#' | b'\n' | b'\r')
}

/// Bytes that continue a number without changing its kind.
#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) const fn is_integer_char(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'_' | b'-')
}

/// Bytes that turn an integer into a decimal.
#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) const fn is_decimal_char(c: u8) -> bool {
    matches!(c, b'.' | b'e' | b'E')
}

/// End of an anchor, alias or tag name.
#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) const fn is_name_end(c: u8) -> bool {
    is_whitespace(c) || is_flow_indicator(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_includes_control_bytes() {
        assert!(is_whitespace(b' '));
        assert!(is_whitespace(b'\t'));
        assert!(is_whitespace(b'\n'));
        assert!(is_whitespace(0));
        assert!(!is_whitespace(b'a'));
        assert!(is_white_or_eof(None));
        assert!(!is_white_or_eof(Some(b':')));
    }

    #[test]
    fn number_chars() {
        assert!(is_integer_char(b'7'));
        assert!(is_integer_char(b'_'));
        assert!(is_integer_char(b'-'));
        assert!(!is_integer_char(b'+'));
        assert!(is_decimal_char(b'E'));
        assert!(!is_decimal_char(b'x'));
    }

    #[test]
    fn plain_terminators() {
        for c in b"[]{}#\n\r" {
            assert!(is_plain_terminator(*c));
        }
        assert!(!is_plain_terminator(b','));
        assert!(!is_plain_terminator(b':'));
    }
}
