pub(super) const DELIM_OPEN: u8 = b'{';
pub(super) const DELIM_CLOSE: u8 = b'}';

/// Whitespace cutset stripped from both ends of raw template text.
pub(super) fn trim_template(text: &str) -> &str {
    text.trim_matches([' ', '\r', '\n', '\t'])
}

/// Byte offset of the next close delimiter at or after `start`.
pub(super) fn find_close(bytes: &[u8], start: usize) -> Option<usize> {
    bytes[start..]
        .iter()
        .position(|b| *b == DELIM_CLOSE)
        .map(|offset| start + offset)
}
