use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("read failed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("formula requested before any clause was parsed")]
    NotYetParsed,

    #[error("malformed literal {token:?} at line {line}")]
    MalformedLiteral { line: usize, token: String },
}

/// A token that is neither the clause terminator nor a signed variable index.
/// Carries no position; the line reader attaches one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed literal {token:?}")]
pub struct MalformedToken {
    pub token: String,
}

impl MalformedToken {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }

    pub fn at_line(self, line: usize) -> ParseError {
        ParseError::MalformedLiteral {
            line,
            token: self.token,
        }
    }
}
