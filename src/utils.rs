//! Small helpers shared across modules.

/// Convert a char index into a byte index in a UTF-8 string.
///
/// `String` insertion/removal wants byte offsets on character boundaries,
/// while the cursor counts chars; this bridges the two.
pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_to_byte_ascii() {
        assert_eq!(char_to_byte_index("abc", 0), 0);
        assert_eq!(char_to_byte_index("abc", 2), 2);
        assert_eq!(char_to_byte_index("abc", 3), 3);
        assert_eq!(char_to_byte_index("abc", 10), 3);
    }

    #[test]
    fn char_to_byte_multibyte() {
        // 'é' is two bytes in UTF-8
        assert_eq!(char_to_byte_index("héllo", 1), 1);
        assert_eq!(char_to_byte_index("héllo", 2), 3);
    }
}
