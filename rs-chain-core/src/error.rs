use thiserror::Error;

/// Errors raised while building a chain model or generating from it.
///
/// Capacity errors only occur when a ceiling was configured through
/// `ModelLimits`; the default model grows on demand.
#[derive(Error, Debug)]
pub enum ChainError {
	#[error("Token registry full: capacity of {capacity} distinct tokens reached")]
	RegistryFull { capacity: usize },

	#[error("Successor list full for token {token:?}: capacity of {capacity} successors reached")]
	SuccessorListFull { token: String, capacity: usize },

	#[error("No token starting with an uppercase letter, cannot start a sentence")]
	NoSentenceStart,

	#[error("Invalid setting: {0}")]
	InvalidSetting(String),

	#[error("No acceptable sentence after {attempts} attempts")]
	AttemptsExhausted { attempts: usize },

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChainError>;
