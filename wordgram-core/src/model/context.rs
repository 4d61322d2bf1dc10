/// Separator placed between tokens of a context key.
///
/// Tokens are alphanumeric only, so the separator can never appear inside one
/// and distinct contexts never collide.
pub(crate) const SEPARATOR: char = ' ';

/// Canonical, hashable form of an ordered `n - 1` word context.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ContextKey(String);

impl ContextKey {
	/// Joins `words` with `SEPARATOR`, preserving their order.
	pub(crate) fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
		let mut key = String::new();
		for (i, word) in words.iter().enumerate() {
			if i > 0 {
				key.push(SEPARATOR);
			}
			key.push_str(word.as_ref());
		}
		Self(key)
	}

	pub(crate) fn as_str(&self) -> &str {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_order_matters() {
		assert_ne!(ContextKey::from_words(&["the", "cat"]), ContextKey::from_words(&["cat", "the"]));
	}

	#[test]
	fn test_joined_with_single_space() {
		assert_eq!(ContextKey::from_words(&["a", "b", "c"]).as_str(), "a b c");
		assert_eq!(ContextKey::from_words(&["solo"]).as_str(), "solo");
	}
}
