//! Text analysis shared by index build and query projection.
//!
//! A token is a maximal run of word characters (Unicode alphanumerics and `_`)
//! taken from the lowercased text. Runs shorter than [`MIN_TOKEN_CHARS`]
//! characters are dropped, so single letters and digits never become terms.

/// Shortest run of word characters kept as a token
pub const MIN_TOKEN_CHARS: usize = 2;

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `text` into case-folded tokens, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|run| run.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_owned)
        .collect()
}

/// true when `text` has nothing but whitespace
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Rasanya enak dan aromanya kuat."),
            vec!["rasanya", "enak", "dan", "aromanya", "kuat"]
        );
    }

    #[test]
    fn drops_single_character_runs() {
        assert_eq!(tokenize("a b cd e-fg 7 42"), vec!["cd", "fg", "42"]);
    }

    #[test]
    fn keeps_digits_and_underscores_inside_words() {
        assert_eq!(tokenize("Premium 250g snake_case"), vec!["premium", "250g", "snake_case"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // one non-ascii letter is still a single character
        assert!(tokenize("é").is_empty());
        assert_eq!(tokenize("Ünï café"), vec!["ünï", "café"]);
    }

    #[test]
    fn empty_and_blank_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ...  !").is_empty());
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }
}
