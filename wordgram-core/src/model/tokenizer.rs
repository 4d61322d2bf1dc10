/// Normalizes raw text into a sequence of lowercase alphanumeric tokens.
///
/// - ASCII letters and digits are lowercased and kept.
/// - Space, tab and newline separate tokens; runs of them never produce
///   empty tokens.
/// - Every other character, non-ASCII letters included, is dropped without
///   breaking the current token, so `"don't"` becomes `"dont"`.
///
/// Never fails; empty or punctuation-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
	let mut words = Vec::new();
	let mut current = String::new();

	for c in text.chars() {
		if c.is_ascii_alphanumeric() {
			current.push(c.to_ascii_lowercase());
		} else if matches!(c, ' ' | '\t' | '\n') && !current.is_empty() {
			words.push(std::mem::take(&mut current));
		}
	}

	if !current.is_empty() {
		words.push(current);
	}

	words
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_punctuation_is_dropped_not_split() {
		assert_eq!(tokenize("Don't stop-now!"), vec!["dont", "stopnow"]);
	}

	#[test]
	fn test_whitespace_runs_collapse() {
		assert_eq!(tokenize("  The\t\tCAT \n\n sat  "), vec!["the", "cat", "sat"]);
	}

	#[test]
	fn test_empty_and_symbol_only_input() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("?! -- ...").is_empty());
	}

	#[test]
	fn test_digits_are_kept() {
		assert_eq!(tokenize("Route 66, mile 3.5"), vec!["route", "66", "mile", "35"]);
	}

	#[test]
	fn test_carriage_return_is_dropped() {
		// Only space, tab and newline separate tokens.
		assert_eq!(tokenize("one\r\ntwo\rthree"), vec!["one", "twothree"]);
	}

	#[test]
	fn test_non_ascii_letters_are_dropped() {
		assert_eq!(tokenize("Éte ÅNGSTRÖM"), vec!["te", "ngstrm"]);
		// MATHEMATICAL BOLD CAPITAL A has no lowercase form.
		assert!(tokenize("\u{1D400}").is_empty());
		assert_eq!(tokenize("x\u{1D400}y"), vec!["xy"]);
	}
}
