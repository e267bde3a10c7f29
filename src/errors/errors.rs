use std::io;

use thiserror::Error;

/// Errors raised while scanning the input byte stream.
#[derive(Error, Debug)]
pub enum LexError {
    #[error("token too long ({} bytes)", .lexeme.len())]
    TokenTooLong { lexeme: String },
    #[error("read from input stream failed: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while parsing the token sequence.
///
/// Every variant is fatal to the parse: the grammar has no recovery points,
/// so the first violation propagates all the way out of the recursion.
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("expected an integer literal or '(', found {found}")]
    ExpectedExpression { found: String },
    #[error("missing closing parenthesis, found {found}")]
    MissingCloseParen { found: String },
    #[error("unexpected input after expression: {token}")]
    TrailingInput { token: String },
}

/// Combined error for callers that drive both stages.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
