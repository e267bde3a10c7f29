//! Error types and error handling for the front end.
//!
//! This module defines the error types used by the two pipeline stages.
//! It includes:
//!
//! - Lex errors for failures while reading the byte stream and
//!   accumulating lexemes
//! - Parse errors for grammar violations in the token sequence
//! - A combined error type for callers driving the whole pipeline
//!
//! Display text doubles as the driver diagnostic, so messages name the
//! offending token where one exists.

pub mod errors;
