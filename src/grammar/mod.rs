//! Lexer grammar assembly for the zgg language.
//!
//! This module stitches the default-mode token rules and the template string
//! fragment into one combined grammar, then derives the `StrExpr` mode from the
//! default-mode tokens.

pub mod assembler;
pub mod layout;
pub mod rule;
pub mod tails;
pub mod tokens;

pub use assembler::{
    assemble, assemble_layout, assemble_to_writer, check, classify_file, render, CheckOutcome,
    GenerationReport, GrammarAssembler, DERIVED_MODE, GRAMMAR_NAME,
};
pub use layout::GrammarLayout;
pub use rule::{split_lines, TokenRuleLine};
pub use tokens::{DefaultTokenSet, DerivedRule};
