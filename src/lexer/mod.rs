//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that converts a raw byte stream into
//! an ordered sequence of classified tokens. It handles:
//!
//! - Maximal-munch tokenization through a three-state automaton
//! - Folding of full-width punctuation to half-width ASCII
//! - Keyword recognition for the reserved word set
//! - One-byte lookahead for `==`, `<=`, and `>=` with pushback

pub mod chars;
pub mod fullwidth;
pub mod scanner;
pub mod tokens;
