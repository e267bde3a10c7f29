use std::io::{Bytes, Read};

use crate::errors::errors::LexError;

use super::chars;
use super::fullwidth;
use super::tokens::{Token, TokenKind, KEYWORDS};

/// Longest lexeme the scanner accumulates before reporting
/// [`LexError::TokenTooLong`].
pub const MAX_LEXEME_LEN: usize = 80;

/// The three states of the scanning automaton.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum State {
    Start,
    InIdentifier,
    InNumber,
}

pub struct Scanner<R: Read> {
    input: Bytes<R>,
    /// Bytes returned to the stream, consumed last-in first-out before any
    /// further read. Holds at most three: two restored by a failed
    /// full-width fold plus the terminator that ended an accumulation.
    pushback: Vec<u8>,
    tokens: Vec<Token>,
    lexeme: String,
    state: State,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Scanner<R> {
        Scanner {
            input: reader.bytes(),
            pushback: Vec::new(),
            tokens: Vec::new(),
            lexeme: String::new(),
            state: State::Start,
        }
    }

    /// Next byte with no folding applied. `None` at end of input.
    fn next_raw(&mut self) -> Result<Option<u8>, LexError> {
        if let Some(byte) = self.pushback.pop() {
            return Ok(Some(byte));
        }
        match self.input.next() {
            Some(byte) => Ok(Some(byte?)),
            None => Ok(None),
        }
    }

    /// Next byte as the automaton sees it. A first byte at or above the fold
    /// threshold triggers a full-width fold attempt, and the folded ASCII
    /// byte substitutes for the whole sequence. When the fold fails, the two
    /// lookahead bytes go back in reverse order and the first byte is
    /// returned unchanged.
    fn next_byte(&mut self) -> Result<Option<u8>, LexError> {
        let Some(first) = self.next_raw()? else {
            return Ok(None);
        };
        if first < fullwidth::FOLD_THRESHOLD {
            return Ok(Some(first));
        }

        let second = self.next_raw()?;
        let third = self.next_raw()?;
        if let (Some(b), Some(c)) = (second, third) {
            if let Some(folded) = fullwidth::fold(first, b, c) {
                return Ok(Some(folded));
            }
        }
        if let Some(c) = third {
            self.pushback.push(c);
        }
        if let Some(b) = second {
            self.pushback.push(b);
        }
        Ok(Some(first))
    }

    /// Feeds one byte through the automaton.
    fn step(&mut self, byte: u8) -> Result<(), LexError> {
        match self.state {
            State::Start => self.dispatch(byte)?,
            State::InIdentifier => {
                if chars::is_ident_continue(byte) {
                    self.accumulate(byte)?;
                } else {
                    self.pushback.push(byte);
                    self.flush_identifier();
                }
            }
            State::InNumber => {
                if chars::is_digit(byte) {
                    self.accumulate(byte)?;
                } else {
                    self.pushback.push(byte);
                    self.flush_number();
                }
            }
        }
        Ok(())
    }

    /// Start-state dispatch. A byte that classifies as nothing at all
    /// produces no token and no error; the scanner moves on.
    fn dispatch(&mut self, byte: u8) -> Result<(), LexError> {
        if chars::is_whitespace(byte) {
            return Ok(());
        }
        if chars::is_letter(byte) {
            self.state = State::InIdentifier;
            return self.accumulate(byte);
        }
        if chars::is_digit(byte) {
            self.state = State::InNumber;
            return self.accumulate(byte);
        }
        if chars::is_operator_start(byte) {
            return self.finish_operator(byte);
        }
        if chars::is_symbol(byte) {
            self.push_symbol(byte);
        }
        Ok(())
    }

    fn accumulate(&mut self, byte: u8) -> Result<(), LexError> {
        self.lexeme.push(char::from(byte));
        if self.lexeme.len() > MAX_LEXEME_LEN {
            return Err(LexError::TokenTooLong {
                lexeme: std::mem::take(&mut self.lexeme),
            });
        }
        Ok(())
    }

    /// `=`, `<`, and `>` take one byte of lookahead to pick between the
    /// doubled and singleton forms. The lookahead byte is read raw; when it
    /// is not consumed it goes back so the next read observes it, folding
    /// included.
    fn finish_operator(&mut self, byte: u8) -> Result<(), LexError> {
        let next = self.next_raw()?;
        let doubled = next == Some(b'=');
        let (kind, text) = match byte {
            b'=' if doubled => (TokenKind::Equal, "=="),
            b'=' => (TokenKind::Assign, "="),
            b'<' if doubled => (TokenKind::LessEqual, "<="),
            b'<' => (TokenKind::Less, "<"),
            b'>' if doubled => (TokenKind::GreaterEqual, ">="),
            _ => (TokenKind::Greater, ">"),
        };
        if !doubled {
            if let Some(next) = next {
                self.pushback.push(next);
            }
        }
        self.tokens.push(Token::new(kind, String::from(text)));
        Ok(())
    }

    fn push_symbol(&mut self, byte: u8) {
        let kind = match byte {
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            // ';' and ':' share a kind; each keeps its own spelling
            _ => TokenKind::Semicolon,
        };
        self.tokens
            .push(Token::new(kind, char::from(byte).to_string()));
    }

    fn flush_identifier(&mut self) {
        let text = std::mem::take(&mut self.lexeme);
        let kind = KEYWORDS
            .get(text.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.tokens.push(Token::new(kind, text));
        self.state = State::Start;
    }

    fn flush_number(&mut self) {
        let text = std::mem::take(&mut self.lexeme);
        self.tokens.push(Token::new(TokenKind::Literal, text));
        self.state = State::Start;
    }

    /// End of input flushes whatever is still accumulating, classified
    /// exactly as if a terminator byte had followed it.
    fn flush_pending(&mut self) {
        match self.state {
            State::InIdentifier => self.flush_identifier(),
            State::InNumber => self.flush_number(),
            State::Start => {}
        }
    }
}

/// Runs the scanner over the whole input and returns the tokens in input
/// order.
///
/// The stream is consumed fully; the only failures are a lexeme outgrowing
/// [`MAX_LEXEME_LEN`] and an I/O error from the reader. Malformed bytes are
/// not one of them: anything the automaton cannot classify is dropped
/// without a token.
pub fn tokenize(reader: impl Read) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(reader);

    while let Some(byte) = scanner.next_byte()? {
        scanner.step(byte)?;
    }
    scanner.flush_pending();

    Ok(scanner.tokens)
}
