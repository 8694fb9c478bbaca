//! Guess input validation
//!
//! Classifies raw key presses before they reach the engine:
//! - ASCII letters (either case) become a lowercase guess
//! - Everything else is ignored

/// Result of classifying a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    /// A guessable letter, normalised to lowercase
    Letter(char),
    /// Not a letter; ignored
    Invalid,
}

/// Classify a key press as a guess.
pub fn classify_key(c: char) -> GuessInput {
    if c.is_ascii_alphabetic() {
        GuessInput::Letter(c.to_ascii_lowercase())
    } else {
        GuessInput::Invalid
    }
}

/// Check that a letter is a single lowercase ASCII letter, the only form the
/// engine accepts.
pub fn is_guessable(letter: char) -> bool {
    letter.is_ascii_lowercase()
}

/// Check that a word is non-empty and made only of lowercase ASCII letters.
pub fn is_plain_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_guessable)
}
