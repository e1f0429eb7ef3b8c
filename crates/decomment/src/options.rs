#![allow(clippy::struct_excessive_bools)]

/// Configuration options for the streaming comment scanner.
///
/// Each flag independently selects one comment style for removal; any
/// subset may be active. The scanner never validates the combination:
/// with every flag `false` it reproduces its input exactly, which is a
/// useful identity for testing but rarely what a caller wants. Requiring
/// at least one flag is the caller's responsibility.
///
/// # Examples
///
/// ```rust
/// use decomment::{ScannerOptions, StreamingScanner};
///
/// let options = ScannerOptions {
///     strip_line: true,
///     ..Default::default()
/// };
/// let mut scanner = StreamingScanner::new(options);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScannerOptions {
    /// Whether to strip single-line comments (`//…`, up to but excluding
    /// the terminating newline).
    ///
    /// The newline itself is always preserved so line structure survives
    /// stripping.
    ///
    /// # Default
    ///
    /// `false`
    pub strip_line: bool,

    /// Whether to strip plain C-style block comments (`/*…*/`).
    ///
    /// This flag does not cover the Javadoc (`/**`) and HeaderDoc (`/*!`)
    /// variants, which are routed on the single character following `/*`
    /// and controlled only by their own flags.
    ///
    /// # Default
    ///
    /// `false`
    pub strip_block: bool,

    /// Whether to strip Javadoc comments (`/**…*/`).
    ///
    /// # Default
    ///
    /// `false`
    pub strip_javadoc: bool,

    /// Whether to strip HeaderDoc comments (`/*!…*/`).
    ///
    /// # Default
    ///
    /// `false`
    pub strip_headerdoc: bool,
}
