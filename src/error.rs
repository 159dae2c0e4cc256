use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// The text is not an unsigned base-10 integer that fits in 64 bits.
    #[error("unable to parse string as integer")]
    IntegerParse {
        #[from]
        source: ParseIntError,
    },

    /// A bare JSON integer was found while unquoted integers are disallowed.
    #[error("unquoted integer but unquoted integers are not allowed")]
    UnquotedInteger {
        #[from]
        source: UnquoteError,
    },
}

impl SnowflakeError {
    /// The low-level failure this error was raised from.
    pub fn original_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        match self {
            SnowflakeError::IntegerParse { source } => source,
            SnowflakeError::UnquotedInteger { source } => source,
        }
    }
}

/// Why a JSON token could not be read as a plain double-quoted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum UnquoteError {
    #[error("token is not wrapped in double quotes")]
    MissingQuotes,
    #[error("string contains an unescaped double quote")]
    EmbeddedQuote,
    #[error("string contains an escape sequence")]
    EscapeSequence,
    #[error("string contains a newline")]
    Newline,
}
