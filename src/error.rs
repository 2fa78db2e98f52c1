//! Error types.

/// Detailed cause of a [`SyntaxError`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxErrorKind {
    /// A byte in `0x00..=0x1F` or `0x7F` occurred in the input.
    ///
    /// `index` points to the offending byte.
    ControlCharacter {
        /// Byte index of the control character.
        index: usize,
    },
    /// A scheme was present but does not match
    /// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    InvalidScheme {
        /// The offending scheme text.
        scheme: Box<str>,
    },
    /// A port was present but is non-numeric or lies outside `[0, 65535]`.
    InvalidPort {
        /// The offending port text.
        port: Box<str>,
    },
}

/// An error occurred when parsing a URI.
///
/// This is the only failure the crate produces. It is raised by
/// [`Uri::parse`] alone; accessors and composition on an already
/// constructed value never fail.
///
/// [`Uri::parse`]: crate::Uri::parse
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxError {
    pub(crate) kind: SyntaxErrorKind,
    pub(crate) input: Box<str>,
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, input: &str) -> Self {
        SyntaxError {
            kind,
            input: input.into(),
        }
    }

    /// Returns the detailed cause of the error.
    #[inline]
    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// Returns the input that was attempted to parse into a [`Uri`].
    ///
    /// [`Uri`]: crate::Uri
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Consumes the error, recovering the input.
    #[inline]
    pub fn into_input(self) -> Box<str> {
        self.input
    }
}

impl std::error::Error for SyntaxError {}
