//! Splits raw text into word tokens at Unicode word boundaries.

use unicode_segmentation::UnicodeSegmentation;

use crate::types::*;

/// Splits `text` into tokens. Whitespace is dropped, punctuation is kept as separate tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut position = Position::default();

    for (byte_start, token_text) in text.split_word_bound_indices() {
        debug_assert_eq!(byte_start, position.byte);
        let span = Span::from_start(position, token_text);
        position = span.end();

        if token_text.trim().is_empty() {
            continue;
        }

        tokens.push(Token::new(token_text, span));
    }

    tokens
}

/// Whether a token consists only of letters and could thus be a compound.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
