//! zgg Lexer Grammar Generator Library
//!
//! This library provides the build-time generator for the combined zgg lexer grammar.

pub mod error;
pub mod grammar;

// Re-export commonly used types
pub use error::{LexGenError, LexGenResult};
pub use grammar::{
    assemble, assemble_layout, check, render, CheckOutcome, DefaultTokenSet, GenerationReport,
    GrammarAssembler, GrammarLayout,
};
