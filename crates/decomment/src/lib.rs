//! Streaming, selective comment stripping for C-family source text.
//!
//! The scanner removes `//…`, `/*…*/`, `/**…*/`, and `/*!…*/` comments
//! independently of one another while passing string and character literal
//! contents through verbatim. Input can be fed incrementally in chunks of
//! any size; output is pulled lazily, one character at a time.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod options;
mod scanner;

#[cfg(test)]
mod tests;

pub use options::ScannerOptions;
pub use scanner::{ClosedStreamingScanner, StreamingScanner, strip_to_string};
