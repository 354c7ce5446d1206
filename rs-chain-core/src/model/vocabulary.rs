use std::collections::HashMap;

use crate::error::{ChainError, Result};

/// Stable identity of a distinct token inside a `Vocabulary`.
pub type TokenId = usize;

/// Insertion-ordered registry of distinct tokens.
///
/// Each token string is stored exactly once and receives the id equal to
/// the registry size at the time it was first seen.
///
/// # Invariants
/// - `tokens[id]` and `ids[&tokens[id]] == id` agree for every id
/// - Ids are never reused nor reassigned
/// - `tokens.len() <= max_tokens` when a ceiling is set
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
	/// Tokens in first-seen order; the index is the id.
	tokens: Vec<String>,
	/// Reverse lookup, token string to id.
	ids: HashMap<String, TokenId>,
	/// Optional ceiling on the number of distinct tokens.
	max_tokens: Option<usize>,
}

impl Vocabulary {
	/// Creates an empty registry, unbounded if `max_tokens` is `None`.
	pub fn new(max_tokens: Option<usize>) -> Self {
		Self {
			tokens: Vec::new(),
			ids: HashMap::new(),
			max_tokens,
		}
	}

	/// Returns the id of `token`, registering it first if necessary.
	///
	/// # Errors
	/// Returns `ChainError::RegistryFull` if `token` is new and the registry
	/// already holds `max_tokens` entries.
	pub fn intern(&mut self, token: &str) -> Result<TokenId> {
		if let Some(&id) = self.ids.get(token) {
			return Ok(id);
		}

		if let Some(capacity) = self.max_tokens {
			if self.tokens.len() >= capacity {
				return Err(ChainError::RegistryFull { capacity });
			}
		}

		let id = self.tokens.len();
		self.ids.insert(token.to_owned(), id);
		self.tokens.push(token.to_owned());
		Ok(id)
	}

	/// Returns the id of an already registered token.
	pub fn id_of(&self, token: &str) -> Option<TokenId> {
		self.ids.get(token).copied()
	}

	/// Returns the token registered under `id`.
	pub fn token(&self, id: TokenId) -> Option<&str> {
		self.tokens.get(id).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Iterates over `(id, token)` pairs in id order.
	pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str)> {
		self.tokens.iter().map(String::as_str).enumerate()
	}
}
