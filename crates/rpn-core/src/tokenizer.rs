//! Word extraction.
//!
//! The tokenizer is re-entrant and stateless: callers own the buffer and feed
//! the remainder back in. The default delimiter is a space; string-literal and
//! comment words pass `"` and `)` to capture trailing text.

/// Split `buffer` at the first occurrence of `delim`.
///
/// Returns `(word, remaining, position)`. When the delimiter is absent the
/// whole buffer becomes the word, the remainder is empty, and the position is
/// `None`.
pub fn next_word(buffer: &str, delim: char) -> (&str, &str, Option<usize>) {
    match buffer.find(delim) {
        Some(p) => (&buffer[..p], &buffer[p + delim.len_utf8()..], Some(p)),
        None => (buffer, "", None),
    }
}
