//! # altgen
//!
//! Extracts built-in identifiers (types, constants, properties, functions)
//! from the Swift REPL's `:type lookup` dump and compresses each category
//! into a single optimized regular-expression alternation, ready to be
//! pasted into a syntax-highlighting grammar.
//!
//! The interesting part is [`alternation::optimize_alternations`], which
//! factors shared prefixes out of an identifier set so the grammar carries
//! one compact pattern instead of a thousand-branch alternation.
//!
//! ## Pipeline
//!
//! 1. [`source`] obtains the introspection dump from the interpreter
//! 2. [`scan`] extracts categorized identifier sets from the text
//! 3. [`alternation`] collapses each set into a regex fragment
//! 4. [`report`] renders the labeled sections

pub mod alternation;
pub mod report;
pub mod scan;
pub mod source;
