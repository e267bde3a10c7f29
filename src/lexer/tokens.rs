use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Type);
        map.insert("return", TokenKind::Type);
        map.insert("if", TokenKind::If);
        map.insert("main", TokenKind::Main);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Literal,
    Identifier,

    // Reserved. "int" and "return" both classify as Type.
    Type,
    If,
    Main,
    Else,
    While,

    Assign, // =
    Equal,  // ==

    Less,
    Greater,
    LessEqual,
    GreaterEqual,

    Plus,
    Minus,

    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Semicolon, // both ';' and ':'
}

impl TokenKind {
    /// The uppercase kind name used in token listings.
    ///
    /// `LEFTPAREN_TOKEN` and friends have no underscore before `PAREN`
    /// while the comparison kinds do; the listing format keeps those
    /// spellings as-is.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF_TOKEN",
            TokenKind::Literal => "LITERAL_TOKEN",
            TokenKind::Identifier => "ID_TOKEN",
            TokenKind::Type => "TYPE_TOKEN",
            TokenKind::If => "IF_TOKEN",
            TokenKind::Main => "MAIN_TOKEN",
            TokenKind::Else => "ELSE_TOKEN",
            TokenKind::While => "WHILE_TOKEN",
            TokenKind::Assign => "ASSIGN_TOKEN",
            TokenKind::Equal => "EQUAL_TOKEN",
            TokenKind::Less => "LESS_TOKEN",
            TokenKind::Greater => "GREATER_TOKEN",
            TokenKind::LessEqual => "LESS_EQUAL_TOKEN",
            TokenKind::GreaterEqual => "GREATER_EQUAL_TOKEN",
            TokenKind::Plus => "PLUS_TOKEN",
            TokenKind::Minus => "MINUS_TOKEN",
            TokenKind::LeftParen => "LEFTPAREN_TOKEN",
            TokenKind::RightParen => "RIGHTPAREN_TOKEN",
            TokenKind::LeftBrace => "LEFTBRACE_TOKEN",
            TokenKind::RightBrace => "RIGHTBRACE_TOKEN",
            TokenKind::Semicolon => "SEMICOLON_TOKEN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: String) -> Token {
        Token { kind, text }
    }

    /// How the token reads in a diagnostic.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::Eof {
            String::from("end of input")
        } else {
            format!("'{}'", self.text)
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.text, self.kind)
    }
}
