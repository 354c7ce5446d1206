//! Corpus preprocessing and token predicates.
//!
//! Tokens are maximal runs of non-delimiter characters. They keep any
//! attached punctuation and are case-sensitive: `"Whale."` and `"whale"`
//! are two different tokens.

/// Characters separating tokens. Tabs are not delimiters, but `sanitize`
/// turns them into spaces.
pub const DELIMITERS: [char; 3] = [' ', '\n', '\r'];

/// Characters marking the end of a sentence when they end a token.
pub const SENTENCE_ENDINGS: [char; 3] = ['!', '?', '.'];

/// Replaces every non-printable character with a space.
///
/// Printable means printable ASCII (`' '..='~'`). Non-printable characters
/// would otherwise create look-alike duplicates such as `"\u{feff}the"`
/// and `"the"`. Newlines and carriage returns are replaced too, which is
/// harmless since they are delimiters.
pub fn sanitize(raw: &str) -> String {
	raw.chars()
		.map(|c| if is_printable(c) { c } else { ' ' })
		.collect()
}

fn is_printable(c: char) -> bool {
	matches!(c, ' '..='~')
}

/// Splits `text` into tokens on spaces, newlines and carriage returns.
///
/// Zero-length runs between consecutive delimiters are skipped, so no
/// yielded token is ever empty.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
	text.split(DELIMITERS).filter(|token| !token.is_empty())
}

/// Returns the last character of `text`, if any.
pub fn last_char(text: &str) -> Option<char> {
	text.chars().next_back()
}

/// Returns whether `token` ends with `!`, `?` or `.`.
///
/// The empty token never ends a sentence.
pub fn ends_sentence(token: &str) -> bool {
	last_char(token).is_some_and(|c| SENTENCE_ENDINGS.contains(&c))
}

/// Returns whether `token` starts with an uppercase letter and may thus
/// open a sentence.
pub fn starts_sentence(token: &str) -> bool {
	token.chars().next().is_some_and(char::is_uppercase)
}
