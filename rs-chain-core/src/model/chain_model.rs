use log::info;

use super::vocabulary::{TokenId, Vocabulary};
use crate::error::{ChainError, Result};
use crate::text;

/// Optional ceilings applied while building a `ChainModel`.
///
/// The default is unbounded: both the registry and the successor lists grow
/// on demand. Ceilings only turn an oversized corpus into an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModelLimits {
	/// Maximum number of distinct tokens.
	pub max_tokens: Option<usize>,
	/// Maximum number of successors recorded for a single token.
	pub max_successors: Option<usize>,
}

impl ModelLimits {
	/// Distinct-token ceiling of the classic fixed-size tables.
	pub const CLASSIC_MAX_TOKENS: usize = 15000;

	/// Fixed ceilings sized from a token budget.
	///
	/// A token may precede every other token once in the worst case, so each
	/// successor list is capped at half the token budget.
	pub fn fixed(max_tokens: usize) -> Self {
		Self {
			max_tokens: Some(max_tokens),
			max_successors: Some(max_tokens / 2),
		}
	}
}

/// First-order word Markov chain.
///
/// Every registered token owns an ordered list of the tokens observed right
/// after it in the corpus. Repetitions are kept: a token following `X` three
/// times is three times as likely to be drawn after `X`.
///
/// # Responsibilities
/// - Register tokens and record successor transitions
/// - Ingest a corpus in a single pass
/// - Expose read-only lookups to generators
///
/// # Invariants
/// - `successors.len() == vocabulary.len()`
/// - A token without recorded successor has an empty list (terminal state)
/// - Successor lists hold corpus occurrence order
#[derive(Clone, Debug, Default)]
pub struct ChainModel {
	vocabulary: Vocabulary,
	/// Successor ids, indexed by token id.
	successors: Vec<Vec<TokenId>>,
	limits: ModelLimits,
}

impl ChainModel {
	/// Creates an empty model honoring `limits`.
	pub fn new(limits: ModelLimits) -> Self {
		Self {
			vocabulary: Vocabulary::new(limits.max_tokens),
			successors: Vec::new(),
			limits,
		}
	}

	/// Builds a model from a raw corpus.
	///
	/// - Replaces non-printable characters with spaces
	/// - Ingests the resulting token stream
	/// - Checks that at least one token can start a sentence
	///
	/// # Errors
	/// - `RegistryFull` / `SuccessorListFull` if a ceiling of `limits` is hit
	/// - `NoSentenceStart` if no token starts with an uppercase letter
	pub fn from_corpus(raw: &str, limits: ModelLimits) -> Result<Self> {
		let mut model = Self::new(limits);
		model.ingest(&text::sanitize(raw))?;

		let starts = model.start_tokens().count();
		if starts == 0 {
			return Err(ChainError::NoSentenceStart);
		}

		info!(
			"Chain model built: {} tokens, {} transitions, {} sentence starts",
			model.token_count(),
			model.transition_count(),
			starts
		);
		Ok(model)
	}

	/// Returns the id of `token`, registering it if needed.
	pub fn intern(&mut self, token: &str) -> Result<TokenId> {
		let id = self.vocabulary.intern(token)?;
		if id == self.successors.len() {
			self.successors.push(Vec::new());
		}
		Ok(id)
	}

	/// Records `successor` as observed right after `token`.
	///
	/// Both tokens are registered if needed.
	///
	/// # Errors
	/// - `RegistryFull` if registering either token exceeds the ceiling
	/// - `SuccessorListFull` if `token` already holds `max_successors` entries
	pub fn record_successor(&mut self, token: &str, successor: &str) -> Result<()> {
		let id = self.intern(token)?;
		let successor_id = self.intern(successor)?;

		let list = &mut self.successors[id];
		if let Some(capacity) = self.limits.max_successors {
			if list.len() >= capacity {
				return Err(ChainError::SuccessorListFull { token: token.to_owned(), capacity });
			}
		}
		list.push(successor_id);
		Ok(())
	}

	/// Feeds a token stream to the model.
	///
	/// Every token is registered. Each token followed by another one gets that
	/// follower appended to its successor list; the last token of the stream
	/// gets nothing.
	///
	/// # Notes
	/// - `text` is tokenized as is; call `text::sanitize` first on raw input.
	pub fn ingest(&mut self, text: &str) -> Result<()> {
		let mut tokens = text::tokenize(text).peekable();
		while let Some(current) = tokens.next() {
			match tokens.peek() {
				Some(next) => self.record_successor(current, next)?,
				None => {
					self.intern(current)?;
				}
			}
		}
		Ok(())
	}

	/// Returns the successors of `id`, empty for terminal or unknown tokens.
	pub fn successors(&self, id: TokenId) -> &[TokenId] {
		self.successors.get(id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Returns the token registered under `id`.
	pub fn token(&self, id: TokenId) -> Option<&str> {
		self.vocabulary.token(id)
	}

	/// Returns the id of an already registered token.
	pub fn id_of(&self, token: &str) -> Option<TokenId> {
		self.vocabulary.id_of(token)
	}

	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	pub fn limits(&self) -> ModelLimits {
		self.limits
	}

	/// Number of distinct tokens.
	pub fn token_count(&self) -> usize {
		self.vocabulary.len()
	}

	/// Total number of recorded transitions, repetitions included.
	pub fn transition_count(&self) -> usize {
		self.successors.iter().map(Vec::len).sum()
	}

	/// Ids of the tokens able to start a sentence, in id order.
	pub fn start_tokens(&self) -> impl Iterator<Item = TokenId> + '_ {
		self.vocabulary
			.iter()
			.filter(|(_, token)| text::starts_sentence(token))
			.map(|(id, _)| id)
	}
}
