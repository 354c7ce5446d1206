//! Top-level module for the word Markov chain.
//!
//! This module provides:
//! - The token registry (`Vocabulary`)
//! - The successor graph and corpus ingestion (`ChainModel`)
//! - Generation settings (`SentenceConfig`)
//! - The random sentence walk (`SentenceGenerator`)

/// Insertion-ordered registry assigning stable ids to distinct tokens.
pub mod vocabulary;

/// Successor graph over registered tokens.
///
/// Built once from a corpus in a single pass, read-only afterward.
pub mod chain_model;

/// Generation settings: buffer capacity and retry budget.
pub mod sentence_config;

/// Bounded-length random sentence generation over a `ChainModel`.
pub mod generator;

pub use chain_model::{ChainModel, ModelLimits};
pub use generator::SentenceGenerator;
pub use sentence_config::SentenceConfig;
pub use vocabulary::{TokenId, Vocabulary};
