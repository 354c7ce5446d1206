use crate::error::{ChainError, Result};

/// Settings controlling sentence generation.
///
/// # Invariants
/// - `capacity >= 2` (one byte of content plus the terminator slot)
/// - `max_attempts >= 1`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentenceConfig {
	/// Size in bytes of the output buffer, terminator slot included.
	/// A generated sentence is always strictly shorter than this.
	capacity: usize,

	/// Number of sentences drawn by `generate_until` before giving up.
	max_attempts: usize,
}

impl SentenceConfig {
	pub const DEFAULT_CAPACITY: usize = 1000;
	pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

	/// Returns the buffer capacity in bytes.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Returns the number of attempts allowed to `generate_until`.
	pub fn max_attempts(&self) -> usize {
		self.max_attempts
	}

	/// Sets the buffer capacity.
	///
	/// # Errors
	/// Returns an error if `capacity < 2`.
	pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
		if capacity < 2 {
			return Err(ChainError::InvalidSetting(format!(
				"capacity must be at least 2, got {}",
				capacity
			)));
		}
		self.capacity = capacity;
		Ok(())
	}

	/// Sets the number of attempts allowed to `generate_until`.
	///
	/// # Errors
	/// Returns an error if `max_attempts` is 0.
	pub fn set_max_attempts(&mut self, max_attempts: usize) -> Result<()> {
		if max_attempts == 0 {
			return Err(ChainError::InvalidSetting("max_attempts must be at least 1".to_owned()));
		}
		self.max_attempts = max_attempts;
		Ok(())
	}
}

impl Default for SentenceConfig {
	fn default() -> Self {
		Self {
			capacity: Self::DEFAULT_CAPACITY,
			max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
		}
	}
}
