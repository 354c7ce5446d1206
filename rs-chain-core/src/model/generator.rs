use log::{debug, trace, warn};
use rand::Rng;

use super::chain_model::ChainModel;
use super::sentence_config::SentenceConfig;
use super::vocabulary::TokenId;
use crate::error::{ChainError, Result};
use crate::text;

/// Progress of a single sentence walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Walk {
	/// Nothing written yet, a start token must be drawn.
	Start,
	/// The last written token, whose successors are drawn next.
	Walking(TokenId),
	/// The sentence is complete, possibly truncated.
	Done,
}

/// Random sentence generator borrowing a read-only `ChainModel`.
///
/// # Responsibilities
/// - Draw a sentence-start token uniformly among capitalized tokens
/// - Walk the successor graph until a terminal token, a dead end, or the
///   buffer capacity stops the sentence
/// - Retry generation until a caller predicate accepts a sentence
///
/// Each generation is independent: only the model is shared, so a generator
/// can be used from several threads as long as each one passes its own RNG.
#[derive(Debug)]
pub struct SentenceGenerator<'m> {
	model: &'m ChainModel,
	config: SentenceConfig,
	/// Ids of the tokens able to start a sentence, never empty.
	starts: Vec<TokenId>,
}

impl<'m> SentenceGenerator<'m> {
	/// Creates a generator over `model`.
	///
	/// # Errors
	/// Returns `ChainError::NoSentenceStart` if no token of the model starts
	/// with an uppercase letter.
	pub fn new(model: &'m ChainModel, config: SentenceConfig) -> Result<Self> {
		let starts: Vec<TokenId> = model.start_tokens().collect();
		if starts.is_empty() {
			return Err(ChainError::NoSentenceStart);
		}
		debug!(
			"Sentence generator ready: {} start tokens, capacity {} bytes",
			starts.len(),
			config.capacity()
		);
		Ok(Self { model, config, starts })
	}

	pub fn config(&self) -> &SentenceConfig {
		&self.config
	}

	/// Returns a uniformly drawn id among tokens starting with an uppercase letter.
	pub fn pick_start_token<R: Rng + ?Sized>(&self, rng: &mut R) -> TokenId {
		self.starts[rng.random_range(0..self.starts.len())]
	}

	/// Generates one random sentence.
	///
	/// The result is strictly shorter than the configured capacity. It ends
	/// with `!`, `?` or `.` unless the walk hit a token without successor or
	/// ran out of room; both are valid outcomes, callers needing a terminator
	/// should use `generate_until`.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		let mut sentence = String::with_capacity(self.config.capacity());
		let mut walk = Walk::Start;

		loop {
			walk = match walk {
				Walk::Start => self.start(&mut sentence, rng),
				Walk::Walking(id) => self.step(id, &mut sentence, rng),
				Walk::Done => return sentence,
			};
		}
	}

	/// Generates sentences until `accept` returns true for one of them.
	///
	/// # Errors
	/// Returns `ChainError::AttemptsExhausted` if none of the `max_attempts`
	/// generated sentences is accepted.
	pub fn generate_until<R, F>(&self, rng: &mut R, mut accept: F) -> Result<String>
	where
		R: Rng + ?Sized,
		F: FnMut(&str) -> bool,
	{
		let attempts = self.config.max_attempts();
		for attempt in 1..=attempts {
			let sentence = self.generate(rng);
			trace!("Attempt {}: {:?}", attempt, sentence);
			if accept(&sentence) {
				debug!("Sentence accepted after {} attempts", attempt);
				return Ok(sentence);
			}
		}
		Err(ChainError::AttemptsExhausted { attempts })
	}

	/// Generates sentences until one ends with `ending`.
	pub fn generate_ending_with<R: Rng + ?Sized>(&self, rng: &mut R, ending: char) -> Result<String> {
		self.generate_until(rng, |sentence| text::last_char(sentence) == Some(ending))
	}

	/// Writes a random start token as the whole sentence.
	fn start<R: Rng + ?Sized>(&self, sentence: &mut String, rng: &mut R) -> Walk {
		let id = self.pick_start_token(rng);
		let token = self.token(id);

		sentence.clear();
		let limit = self.config.capacity() - 1;
		if token.len() > limit {
			// Cut on a char boundary, nothing else fits afterward anyway
			let mut end = limit;
			while !token.is_char_boundary(end) {
				end -= 1;
			}
			warn!("Start token {:?} truncated to {} bytes", token, end);
			sentence.push_str(&token[..end]);
			return Walk::Done;
		}

		sentence.push_str(token);
		if text::ends_sentence(token) {
			Walk::Done
		} else {
			Walk::Walking(id)
		}
	}

	/// Appends one random successor of `id`, if any fits.
	///
	/// The successor is appended only if the sentence, separating space
	/// included, stays strictly below `capacity - 1` bytes. Otherwise the
	/// walk stops without it.
	fn step<R: Rng + ?Sized>(&self, id: TokenId, sentence: &mut String, rng: &mut R) -> Walk {
		let successors = self.model.successors(id);
		if successors.is_empty() {
			return Walk::Done;
		}

		let next_id = successors[rng.random_range(0..successors.len())];
		let next = self.token(next_id);

		let next_len = sentence.len() + 1 + next.len();
		if next_len >= self.config.capacity() - 1 {
			return Walk::Done;
		}

		sentence.push(' ');
		sentence.push_str(next);

		if text::ends_sentence(next) {
			Walk::Done
		} else {
			Walk::Walking(next_id)
		}
	}

	/// Ids handed out here always come from the model itself.
	fn token(&self, id: TokenId) -> &'m str {
		self.model.token(id).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::chain_model::ModelLimits;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn model(corpus: &str) -> ChainModel {
		ChainModel::from_corpus(corpus, ModelLimits::default()).unwrap()
	}

	fn config(capacity: usize) -> SentenceConfig {
		let mut config = SentenceConfig::default();
		config.set_capacity(capacity).unwrap();
		config
	}

	#[test]
	fn test_terminal_start_token_ends_immediately() {
		let model = model("Hi. Bye!");
		let generator = SentenceGenerator::new(&model, SentenceConfig::default()).unwrap();
		let mut rng = StdRng::seed_from_u64(1);

		let mut seen_hi = false;
		let mut seen_bye = false;
		for _ in 0..200 {
			match generator.generate(&mut rng).as_str() {
				"Hi." => seen_hi = true,
				"Bye!" => seen_bye = true,
				other => panic!("unexpected sentence {:?}", other),
			}
		}
		assert!(seen_hi && seen_bye);
	}

	#[test]
	fn test_walk_follows_successors() {
		let model = model("The Cat Sat. The Dog Ran!");
		let generator = SentenceGenerator::new(&model, SentenceConfig::default()).unwrap();
		let mut rng = StdRng::seed_from_u64(2);

		let allowed = ["The Cat Sat.", "The Dog Ran!", "Cat Sat.", "Dog Ran!", "Sat.", "Ran!"];
		for _ in 0..200 {
			let sentence = generator.generate(&mut rng);
			assert!(allowed.contains(&sentence.as_str()), "unexpected sentence {:?}", sentence);
		}
	}

	#[test]
	fn test_dead_end_stops_without_terminator() {
		let model = model("Stop here");
		let generator = SentenceGenerator::new(&model, SentenceConfig::default()).unwrap();
		let mut rng = StdRng::seed_from_u64(3);

		assert_eq!(generator.generate(&mut rng), "Stop here");
	}

	#[test]
	fn test_cycle_is_truncated_by_capacity() {
		let model = model("Loop a b a b a");
		let generator = SentenceGenerator::new(&model, config(20)).unwrap();
		let mut rng = StdRng::seed_from_u64(4);

		// 18 bytes written, one more token would reach capacity - 1
		let sentence = generator.generate(&mut rng);
		assert_eq!(sentence, "Loop a b a b a b a");
	}

	#[test]
	fn test_capacity_boundary() {
		let model = model("Ab cd.");
		let mut rng = StdRng::seed_from_u64(5);

		// "Ab cd." is 6 bytes and must stay strictly below capacity - 1
		let generator = SentenceGenerator::new(&model, config(7)).unwrap();
		assert_eq!(generator.generate(&mut rng), "Ab");

		let generator = SentenceGenerator::new(&model, config(8)).unwrap();
		assert_eq!(generator.generate(&mut rng), "Ab cd.");
	}

	#[test]
	fn test_oversized_start_token_is_truncated() {
		let model = model("Supercalifragilistic word");
		let generator = SentenceGenerator::new(&model, config(6)).unwrap();
		let mut rng = StdRng::seed_from_u64(6);

		assert_eq!(generator.generate(&mut rng), "Super");
	}

	#[test]
	fn test_sentences_never_reach_capacity() {
		let corpus = "It was a dark and stormy night. The rain fell in torrents, except at \
			occasional intervals, when it was checked by a violent gust of wind which swept \
			up the streets! Was it over? It was not. The night went on and on and on";
		let model = model(corpus);
		let mut rng = StdRng::seed_from_u64(7);

		for capacity in [2, 5, 16, 40, 1000] {
			let generator = SentenceGenerator::new(&model, config(capacity)).unwrap();
			for _ in 0..200 {
				assert!(generator.generate(&mut rng).len() < capacity);
			}
		}
	}

	#[test]
	fn test_successor_frequency_is_preserved() {
		let model = model("X a. X a. X a. X b.");
		let generator = SentenceGenerator::new(&model, SentenceConfig::default()).unwrap();
		let mut rng = StdRng::seed_from_u64(8);

		let draws = 4000;
		let hits = (0..draws).filter(|_| generator.generate(&mut rng) == "X a.").count();
		assert!((2700..=3300).contains(&hits), "X a. drawn {} times out of {}", hits, draws);
	}

	#[test]
	fn test_pick_start_token_is_capitalized() {
		let model = model("the Cat saw a Dog and the bird");
		let generator = SentenceGenerator::new(&model, SentenceConfig::default()).unwrap();
		let mut rng = StdRng::seed_from_u64(9);

		for _ in 0..100 {
			let id = generator.pick_start_token(&mut rng);
			assert!(text::starts_sentence(model.token(id).unwrap()));
		}
	}

	#[test]
	fn test_new_requires_sentence_start() {
		let mut model = ChainModel::default();
		model.record_successor("lower", "case").unwrap();

		let result = SentenceGenerator::new(&model, SentenceConfig::default());
		assert!(matches!(result, Err(ChainError::NoSentenceStart)));
	}

	#[test]
	fn test_generate_ending_with() {
		let model = model("Why? Now!");
		let generator = SentenceGenerator::new(&model, SentenceConfig::default()).unwrap();
		let mut rng = StdRng::seed_from_u64(10);

		assert_eq!(generator.generate_ending_with(&mut rng, '?').unwrap(), "Why?");
		assert_eq!(generator.generate_ending_with(&mut rng, '!').unwrap(), "Now!");
	}

	#[test]
	fn test_generate_until_gives_up() {
		let model = model("Hi.");
		let mut config = SentenceConfig::default();
		config.set_max_attempts(10).unwrap();
		let generator = SentenceGenerator::new(&model, config).unwrap();
		let mut rng = StdRng::seed_from_u64(11);

		let mut calls = 0;
		let result = generator.generate_until(&mut rng, |_| {
			calls += 1;
			false
		});
		assert!(matches!(result, Err(ChainError::AttemptsExhausted { attempts: 10 })));
		assert_eq!(calls, 10);
	}
}
