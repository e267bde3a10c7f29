//! Parser module for building the parse tree.
//!
//! This module contains the recursive-descent parser that transforms the
//! token sequence into an explicit parse tree. It handles:
//!
//! - One procedure per grammar non-terminal, each returning a tree node
//! - Single-token lookahead through a cursor over the token sequence
//! - Fatal-by-propagation errors: the first grammar violation unwinds the
//!   whole recursion, no recovery is attempted
//! - The trailing-input check after a complete top-level expression

pub mod cursor;
pub mod grammar;
