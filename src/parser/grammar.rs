//! Recursive-descent procedures for the sum expression grammar:
//!
//! ```text
//! S  -> E S'
//! S' -> '+' S | ε
//! E  -> '(' S ')' | LITERAL
//! ```
//!
//! Each non-terminal is one function returning an owned tree node labeled
//! with the non-terminal's name, with children attached in grammar order.
//! Chains of `+` encode right-recursively through `S'`; that choice fixes
//! the shape of the produced tree and is part of the contract.

use crate::errors::errors::ParseError;
use crate::lexer::tokens::{Token, TokenKind};
use crate::tree::node::TreeNode;

use super::cursor::TokenCursor;

/// Parses the token sequence as one complete sum expression.
///
/// Primes a cursor, parses `S`, then requires the cursor to be at the end;
/// a leftover token fails the parse even though `S` itself succeeded.
pub fn parse(tokens: Vec<Token>) -> Result<TreeNode, ParseError> {
    let mut cursor = TokenCursor::new(tokens);

    let root = parse_s(&mut cursor)?;
    if !cursor.at_end() {
        return Err(ParseError::TrailingInput {
            token: cursor.describe(),
        });
    }
    Ok(root)
}

/// S -> E S'
pub fn parse_s(cursor: &mut TokenCursor) -> Result<TreeNode, ParseError> {
    if cursor.kind() != TokenKind::Literal && cursor.kind() != TokenKind::LeftParen {
        return Err(ParseError::ExpectedExpression {
            found: cursor.describe(),
        });
    }

    let mut node = TreeNode::new("S");
    node.add_child(parse_e(cursor)?);
    node.add_child(parse_s_prime(cursor)?);
    Ok(node)
}

/// S' -> '+' S | ε
///
/// The only point of choice in the grammar, and its only ε production.
/// The ε branch attaches a single leaf and must not consume a token.
pub fn parse_s_prime(cursor: &mut TokenCursor) -> Result<TreeNode, ParseError> {
    let mut node = TreeNode::new("S'");
    if cursor.kind() == TokenKind::Plus {
        node.add_child(TreeNode::new("+"));
        cursor.advance();
        node.add_child(parse_s(cursor)?);
    } else {
        node.add_child(TreeNode::new("ε"));
    }
    Ok(node)
}

/// E -> '(' S ')' | LITERAL
pub fn parse_e(cursor: &mut TokenCursor) -> Result<TreeNode, ParseError> {
    let mut node = TreeNode::new("E");
    match cursor.kind() {
        TokenKind::Literal => {
            node.add_child(TreeNode::new(cursor.text()));
            cursor.advance();
        }
        TokenKind::LeftParen => {
            node.add_child(TreeNode::new("("));
            cursor.advance();
            node.add_child(parse_s(cursor)?);
            if cursor.kind() != TokenKind::RightParen {
                return Err(ParseError::MissingCloseParen {
                    found: cursor.describe(),
                });
            }
            node.add_child(TreeNode::new(")"));
            cursor.advance();
        }
        _ => {
            return Err(ParseError::ExpectedExpression {
                found: cursor.describe(),
            });
        }
    }
    Ok(node)
}
