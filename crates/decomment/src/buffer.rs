use alloc::{collections::VecDeque, vec::Vec};

/// Pending input for the scanner.
///
/// Chunks arrive either as `&str` or as raw bytes; byte chunks may split a
/// UTF-8 sequence anywhere, so up to three trailing bytes of an incomplete
/// sequence are carried over until the next chunk (or until [`close`]
/// declares that no more bytes are coming).
///
/// [`close`]: Buffer::close
#[derive(Debug, Default)]
pub(crate) struct Buffer {
    chars: VecDeque<char>,
    /// Trailing bytes of a UTF-8 sequence cut off at a chunk boundary.
    /// Always shorter than one full sequence (at most 3 bytes).
    partial: Vec<u8>,
}

impl Buffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, text: &str) {
        // A decoded-text feed cannot complete a dangling byte sequence.
        self.abort_partial();
        self.chars.extend(text.chars());
    }

    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        if self.partial.is_empty() {
            self.decode(bytes);
        } else {
            let mut joined = core::mem::take(&mut self.partial);
            joined.extend_from_slice(bytes);
            self.decode(&joined);
        }
    }

    /// Declares the end of byte input. A sequence still incomplete here can
    /// never complete, so it decodes to a single replacement character.
    pub(crate) fn close(&mut self) {
        self.abort_partial();
    }

    fn abort_partial(&mut self) {
        if !self.partial.is_empty() {
            self.partial.clear();
            self.chars.push_back('\u{FFFD}');
        }
    }

    fn decode(&mut self, mut bytes: &[u8]) {
        while !bytes.is_empty() {
            let (ch, size) = bstr::decode_utf8(bytes);
            match ch {
                Some(c) => self.chars.push_back(c),
                // A valid prefix that runs to the end of the chunk may be
                // completed by the next chunk; hold it back.
                None if size == bytes.len() => {
                    self.partial.extend_from_slice(bytes);
                    return;
                }
                None => self.chars.push_back('\u{FFFD}'),
            }
            bytes = &bytes[size..];
        }
    }
}

impl Iterator for Buffer {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.chars.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::Buffer;

    fn drain(buffer: &mut Buffer) -> String {
        buffer.by_ref().collect()
    }

    #[test]
    fn str_chunks_pass_through() {
        let mut buffer = Buffer::new();
        buffer.push("abc");
        buffer.push("def");
        assert_eq!(drain(&mut buffer), "abcdef");
    }

    #[test]
    fn multibyte_sequence_split_across_byte_chunks() {
        // U+00E9 is 0xC3 0xA9; split it between feeds.
        let mut buffer = Buffer::new();
        buffer.push_bytes(b"caf\xC3");
        assert_eq!(drain(&mut buffer), "caf");
        buffer.push_bytes(b"\xA9!");
        assert_eq!(drain(&mut buffer), "é!");
    }

    #[test]
    fn four_byte_sequence_split_three_ways() {
        let emoji = "a💖b".as_bytes();
        let mut buffer = Buffer::new();
        buffer.push_bytes(&emoji[..2]);
        buffer.push_bytes(&emoji[2..4]);
        buffer.push_bytes(&emoji[4..]);
        assert_eq!(drain(&mut buffer), "a💖b");
    }

    #[test]
    fn invalid_byte_becomes_replacement() {
        let mut buffer = Buffer::new();
        buffer.push_bytes(b"a\xFFb");
        assert_eq!(drain(&mut buffer), "a\u{FFFD}b");
    }

    #[test]
    fn truncated_prefix_mid_chunk_is_invalid() {
        // 0xE2 opens a three-byte sequence but 0x41 is not a continuation.
        let mut buffer = Buffer::new();
        buffer.push_bytes(b"\xE2\x41");
        assert_eq!(drain(&mut buffer), "\u{FFFD}A");
    }

    #[test]
    fn close_flushes_dangling_partial() {
        let mut buffer = Buffer::new();
        buffer.push_bytes(b"x\xE2\x82");
        buffer.close();
        assert_eq!(drain(&mut buffer), "x\u{FFFD}");
    }

    #[test]
    fn str_push_aborts_dangling_partial() {
        let mut buffer = Buffer::new();
        buffer.push_bytes(b"\xC3");
        buffer.push("ok");
        assert_eq!(drain(&mut buffer), "\u{FFFD}ok");
    }
}
