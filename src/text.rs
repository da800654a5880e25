//! Byte-level tokenization.

/// The only bytes that separate tokens. Membership test, not a Unicode
/// whitespace check.
pub const DELIMITERS: [u8; 4] = [b' ', b'\n', b'\t', b'\r'];

#[inline]
pub fn is_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\t' | b'\r')
}

/// Splits `input` into maximal runs of non-delimiter bytes, left to right.
/// Empty runs are skipped.
pub fn whitespace_split(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    input
        .split(|&b| is_delimiter(b))
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &[u8]) -> Vec<&[u8]> {
        whitespace_split(s).collect()
    }

    #[test]
    fn splits_on_all_four_delimiters() {
        assert_eq!(
            tokens(b"a b\tc\nd\re"),
            vec![&b"a"[..], b"b", b"c", b"d", b"e"]
        );
    }

    #[test]
    fn skips_empty_runs_and_edges() {
        assert_eq!(tokens(b"  \t\r\n  x  \n\ny "), vec![&b"x"[..], b"y"]);
        assert!(tokens(b"").is_empty());
        assert!(tokens(b" \t\r\n").is_empty());
    }

    #[test]
    fn other_whitespace_is_token_content() {
        // vertical tab, form feed and NBSP are not delimiters
        assert_eq!(tokens(b"a\x0bb\x0cc"), vec![&b"a\x0bb\x0cc"[..]]);
        assert_eq!(tokens("a\u{a0}b".as_bytes()).len(), 1);
    }

    #[test]
    fn invalid_utf8_is_tokenized_bytewise() {
        assert_eq!(tokens(b"\xff\xfe \x80"), vec![&b"\xff\xfe"[..], b"\x80"]);
    }

    #[test]
    fn delimiter_table_matches_predicate() {
        for b in 0..=u8::MAX {
            assert_eq!(is_delimiter(b), DELIMITERS.contains(&b));
        }
    }
}
