//! Parse tree module for the front end.
//!
//! This module contains the tree the parser builds and the printer that
//! renders it. It handles:
//!
//! - Labeled nodes with ordered, owned children
//! - Rendering as an indented diagram with branch connectors

pub mod node;
pub mod printer;
