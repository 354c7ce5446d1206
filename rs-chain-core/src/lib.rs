//! Word-level Markov chain sentence generation library.
//!
//! This crate provides a first-order Markov chain over whitespace-delimited
//! word tokens, including:
//! - A token registry assigning stable ids to distinct tokens
//! - A successor graph built in a single pass over a corpus
//! - A bounded-length random sentence generator
//! - Corpus preprocessing and token predicates
//!
//! The model is built once and is read-only afterward; any number of
//! generators can borrow it.

/// Error taxonomy shared by model construction and generation.
pub mod error;

/// Token registry, successor graph and sentence generator.
pub mod model;

/// Corpus preprocessing, tokenization and token predicates.
pub mod text;

/// I/O utilities (corpus loading).
pub mod io;

pub use error::{ChainError, Result};
