#![allow(clippy::module_inception)]

//! A two-stage front end for a small C-like toy language: a byte-stream
//! scanner that normalizes full-width punctuation and produces classified
//! tokens, and a recursive-descent parser that builds a printable parse tree
//! for sum expressions.

use std::io::Read;

use crate::errors::errors::Error;
use crate::tree::node::TreeNode;

pub mod errors;
pub mod lexer;
pub mod parser;
pub mod tree;

/// Runs the full pipeline over a byte stream: tokenize, then parse.
pub fn parse_expression(reader: impl Read) -> Result<TreeNode, Error> {
    let tokens = lexer::scanner::tokenize(reader)?;
    let tree = parser::grammar::parse(tokens)?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expression_runs_both_stages() {
        let tree = parse_expression("1+2".as_bytes()).unwrap();
        assert_eq!(tree.label, "S");
        assert_eq!(tree.children.len(), 2);
    }

    #[test]
    fn test_parse_expression_surfaces_parse_errors() {
        let result = parse_expression("(1+2".as_bytes());
        match result {
            Err(Error::Parse(_)) => {}
            other => panic!("expected a parse error, got {other:?}"),
        }
    }
}
