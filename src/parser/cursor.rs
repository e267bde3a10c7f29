use crate::lexer::tokens::{Token, TokenKind};

/// Single-token-lookahead view of the token sequence.
///
/// The parser drives the whole parse through this cursor and never touches
/// the byte stream. The cursor is primed on construction so the first token
/// is already current, and once the sequence runs out it reports a
/// synthetic end-of-input token instead.
pub struct TokenCursor {
    remaining: std::vec::IntoIter<Token>,
    current: Token,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> TokenCursor {
        let mut cursor = TokenCursor {
            remaining: tokens.into_iter(),
            current: Token::new(TokenKind::Eof, String::new()),
        };
        cursor.advance();
        cursor
    }

    /// Kind of the token under the cursor.
    pub fn kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Text of the token under the cursor.
    pub fn text(&self) -> &str {
        &self.current.text
    }

    /// How the current token reads in a diagnostic.
    pub fn describe(&self) -> String {
        self.current.describe()
    }

    /// Moves one token forward, or onto the end sentinel when the sequence
    /// is exhausted. Advancing past the end stays at the sentinel.
    pub fn advance(&mut self) {
        self.current = self
            .remaining
            .next()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, String::new()));
    }

    /// True once every token has been consumed.
    pub fn at_end(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }
}
