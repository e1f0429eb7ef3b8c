//! The streaming comment scanner implementation.
//!
//! This module provides [`StreamingScanner`], a finite-state machine over a
//! character stream that strips comments selectively by style while
//! reproducing everything else, string and character literal contents
//! included, exactly as it arrived.
//!
//! # Examples
//!
//! ```rust
//! use decomment::{ScannerOptions, StreamingScanner};
//!
//! let mut scanner = StreamingScanner::new(ScannerOptions {
//!     strip_line: true,
//!     ..Default::default()
//! });
//! scanner.feed("x = 1; // comment\n");
//! let output: String = scanner.finish().collect();
//! assert_eq!(output, "x = 1; \n");
//! ```
#![allow(clippy::enum_glob_use)]

use alloc::{collections::VecDeque, string::String};
#[cfg(test)]
use alloc::vec::Vec;

use crate::{buffer::Buffer, options::ScannerOptions};

/// Scanner states, one active at a time. `Source` is initial; there is no
/// distinct terminal state, since end of input may occur anywhere and is a
/// pass-through condition rather than an error.
///
/// `Slash` and `SlashStar` hold a partially-read delimiter that has not
/// been emitted yet: one and two characters respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Source,
    StringLiteral,
    CharLiteral,
    Slash,
    SlashStar,
    LineComment,
    BlockComment,
    JavadocComment,
    HeaderdocComment,
}

/// The streaming comment scanner.
///
/// `StreamingScanner` can be fed partial or complete input in chunks of any
/// size, via [`feed`] for decoded text or [`feed_bytes`] for raw bytes. It
/// implements `Iterator<Item = char>`, yielding output characters as soon
/// as they are committed; it only ever appends to the output, never seeking
/// back or revising it, and never holds more than one unemitted delimiter
/// (three characters) of pending output.
///
/// The scanner is total: every input produces some output and no input is
/// an error. Unterminated comments and literals simply run to the end of
/// the stream.
///
/// [`feed`]: StreamingScanner::feed
/// [`feed_bytes`]: StreamingScanner::feed_bytes
///
/// # Examples
///
/// ```rust
/// use decomment::{ScannerOptions, StreamingScanner};
///
/// let mut scanner = StreamingScanner::new(ScannerOptions {
///     strip_block: true,
///     ..Default::default()
/// });
/// scanner.feed("a /* gone");
/// scanner.feed(" */ b");
/// let output: String = scanner.finish().collect();
/// assert_eq!(output, "a  b");
/// ```
#[derive(Debug)]
pub struct StreamingScanner {
    source: Buffer,
    end_of_input: bool,
    /// The byte decoder has been told no further input is coming.
    decoder_closed: bool,
    /// The end-of-input delimiter flush has run.
    flushed: bool,

    state: State,
    /// One slot of lookback, used only to decide escape status of quotes
    /// and to spot the `*/` close. Seeded as a newline so a comment at
    /// offset 0 behaves like any other; cleared (`None`) when entering a
    /// block comment whose opener's `/` must not count toward a close.
    prev: Option<char>,

    /// Committed output not yet pulled by the caller. Never longer than
    /// one delimiter plus the character that followed it.
    out: VecDeque<char>,

    options: ScannerOptions,

    /// States observed at each step, for unit tests that check routing.
    #[cfg(test)]
    visited: Vec<State>,
}

impl Iterator for StreamingScanner {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.next_output()
    }
}

/// A `StreamingScanner` that has been closed to further input.
///
/// Returned by [`StreamingScanner::finish`]; iterating it drains whatever
/// output remains, including the end-of-input flush of a partially-read
/// delimiter.
#[derive(Debug)]
pub struct ClosedStreamingScanner {
    scanner: StreamingScanner,
}

impl Iterator for ClosedStreamingScanner {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.scanner.next_output()
    }
}

impl Default for StreamingScanner {
    fn default() -> Self {
        Self::new(ScannerOptions::default())
    }
}

impl StreamingScanner {
    /// Creates a new `StreamingScanner` with the given options.
    #[must_use]
    pub fn new(options: ScannerOptions) -> Self {
        Self {
            source: Buffer::new(),
            end_of_input: false,
            decoder_closed: false,
            flushed: false,
            state: State::Source,
            prev: Some('\n'),
            out: VecDeque::with_capacity(4),
            options,
            #[cfg(test)]
            visited: Vec::new(),
        }
    }

    /// Feeds a chunk of decoded text into the scanner.
    ///
    /// The scanner consumes it lazily as output is pulled; chunk boundaries
    /// carry no meaning and may fall anywhere, including between the two
    /// characters of a delimiter.
    pub fn feed(&mut self, text: &str) {
        self.source.push(text);
    }

    /// Feeds a chunk of raw bytes into the scanner.
    ///
    /// Bytes are decoded as UTF-8 incrementally: a sequence split across
    /// chunks is held until it completes, and invalid sequences decode to
    /// U+FFFD. This is the entry point for callers reading files without
    /// pre-validating their encoding.
    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        self.source.push_bytes(bytes);
    }

    /// Marks the end of input and returns a closed scanner that drains the
    /// remaining output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decomment::{ScannerOptions, StreamingScanner};
    ///
    /// let mut scanner = StreamingScanner::new(ScannerOptions {
    ///     strip_block: true,
    ///     ..Default::default()
    /// });
    /// scanner.feed("text /* no close");
    /// let output: String = scanner.finish().collect();
    /// assert_eq!(output, "text ");
    /// ```
    #[must_use]
    pub fn finish(mut self) -> ClosedStreamingScanner {
        self.end_of_input = true;
        ClosedStreamingScanner { scanner: self }
    }

    #[cfg(test)]
    pub(crate) fn visited_states(&self) -> &[State] {
        &self.visited
    }

    /// Drive the machine until one output character is ready or input is
    /// exhausted.
    fn next_output(&mut self) -> Option<char> {
        loop {
            if let Some(ch) = self.out.pop_front() {
                return Some(ch);
            }
            match self.source.next() {
                Some(ch) => self.step(ch),
                None if self.end_of_input && !self.decoder_closed => {
                    // May surface a replacement character for a dangling
                    // partial byte sequence.
                    self.decoder_closed = true;
                    self.source.close();
                }
                None if self.end_of_input && !self.flushed => {
                    self.flushed = true;
                    self.flush_delimiter();
                }
                None => return None,
            }
        }
    }

    /// Consume exactly one character, emitting zero or more characters and
    /// moving to the next state.
    fn step(&mut self, cur: char) {
        use State::*;

        #[cfg(test)]
        self.visited.push(self.state);

        let prev = self.prev;
        let mut next_prev = Some(cur);

        match self.state {
            Source => match cur {
                '/' => self.state = Slash,
                '"' => {
                    self.state = StringLiteral;
                    self.emit(cur);
                }
                '\'' => {
                    self.state = CharLiteral;
                    self.emit(cur);
                }
                _ => self.emit(cur),
            },

            StringLiteral => {
                if cur == '"' && prev != Some('\\') {
                    self.state = Source;
                }
                self.emit(cur);
            }

            CharLiteral => {
                if cur == '\'' && prev != Some('\\') {
                    self.state = Source;
                }
                self.emit(cur);
            }

            Slash => match cur {
                '*' => self.state = SlashStar,
                '/' => {
                    if !self.options.strip_line {
                        self.emit_str("//");
                    }
                    self.state = LineComment;
                }
                // Anything else, a quote included, is plain source text;
                // the buffered slash is released in front of it.
                _ => {
                    self.emit('/');
                    self.emit(cur);
                    self.state = Source;
                }
            },

            SlashStar => match cur {
                '*' => {
                    if !self.options.strip_javadoc {
                        self.emit_str("/**");
                    }
                    self.state = JavadocComment;
                }
                '!' => {
                    if !self.options.strip_headerdoc {
                        self.emit_str("/*!");
                    }
                    self.state = HeaderdocComment;
                }
                _ => {
                    if !self.options.strip_block {
                        self.emit_str("/*");
                        self.emit(cur);
                    }
                    self.state = BlockComment;
                    // `/*/` must not read as an opened-and-closed comment:
                    // the slash that just entered the body cannot be the
                    // second half of `*/`.
                    next_prev = None;
                }
            },

            LineComment => {
                if cur == '\n' {
                    // The newline is not part of the comment; line
                    // structure survives stripping.
                    self.emit('\n');
                    self.state = Source;
                } else if !self.options.strip_line {
                    self.emit(cur);
                }
            }

            BlockComment => {
                if !self.options.strip_block {
                    self.emit(cur);
                }
                if prev == Some('*') && cur == '/' {
                    self.state = Source;
                }
            }

            JavadocComment => {
                if !self.options.strip_javadoc {
                    self.emit(cur);
                }
                if prev == Some('*') && cur == '/' {
                    self.state = Source;
                }
            }

            HeaderdocComment => {
                if !self.options.strip_headerdoc {
                    self.emit(cur);
                }
                if prev == Some('*') && cur == '/' {
                    self.state = Source;
                }
            }
        }

        self.prev = next_prev;
    }

    /// Releases a delimiter still buffered when input ends.
    ///
    /// A lone `/` is ordinary source text and always comes out. A `/*`
    /// opens an unterminated block comment whose sub-kind was never
    /// decided, so it follows the plain block-comment flag.
    fn flush_delimiter(&mut self) {
        match self.state {
            State::Slash => self.emit('/'),
            State::SlashStar => {
                if !self.options.strip_block {
                    self.emit_str("/*");
                }
            }
            _ => {}
        }
    }

    fn emit(&mut self, ch: char) {
        self.out.push_back(ch);
    }

    fn emit_str(&mut self, s: &str) {
        self.out.extend(s.chars());
    }
}

/// One-shot convenience over the streaming pair: scan `input` in a single
/// feed and collect the output.
///
/// # Examples
///
/// ```rust
/// use decomment::{ScannerOptions, strip_to_string};
///
/// let options = ScannerOptions {
///     strip_line: true,
///     ..Default::default()
/// };
/// assert_eq!(
///     strip_to_string("a /* keep */ b // drop\n", options),
///     "a /* keep */ b \n"
/// );
/// ```
#[must_use]
pub fn strip_to_string(input: &str, options: ScannerOptions) -> String {
    let mut scanner = StreamingScanner::new(options);
    scanner.feed(input);
    let mut out = String::with_capacity(input.len());
    out.extend(scanner.by_ref());
    out.extend(scanner.finish());
    out
}
