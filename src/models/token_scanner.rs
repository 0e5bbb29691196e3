use crate::config::DEFAULT_TOKEN_SCANNER_CONFIG;
use crate::types::{Token, TokenRef};

/// Inclusive bounds on the length of a ticker-shaped token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenScannerConfig {
    pub min_token_length: usize,
    pub max_token_length: usize,
}

impl Default for TokenScannerConfig {
    fn default() -> Self {
        *DEFAULT_TOKEN_SCANNER_CONFIG
    }
}

/// Extracts candidate ticker tokens from free text.
///
/// A candidate is a maximal run of uppercase ASCII letters whose length lies
/// within the configured bounds and which is not glued to another word
/// character (any alphanumeric character or `_`) on either side. Runs that are
/// too long are discarded whole; no prefix of them is ever returned.
///
/// Note: This explicitly does not modify the case of the text.
#[derive(Debug, Clone, Copy)]
pub struct TokenScanner {
    config: TokenScannerConfig,
}

impl TokenScanner {
    pub fn new(config: &TokenScannerConfig) -> Self {
        Self { config: *config }
    }

    /// Scanner for the default 2 to 5 letter ticker shape.
    pub fn ticker_symbol_scanner() -> Self {
        Self::new(DEFAULT_TOKEN_SCANNER_CONFIG)
    }

    pub fn config(&self) -> &TokenScannerConfig {
        &self.config
    }

    /// Returns every candidate token in left-to-right order, duplicates included.
    pub fn scan(&self, text: &TokenRef) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = text.char_indices().peekable();
        let mut previous_char: Option<char> = None;

        while let Some((start, c)) = chars.next() {
            if !c.is_ascii_uppercase() {
                previous_char = Some(c);
                continue;
            }

            // Consume the rest of the uppercase run
            let mut end = start + c.len_utf8();
            let mut last_char = c;
            while let Some(&(idx, next)) = chars.peek() {
                if !next.is_ascii_uppercase() {
                    break;
                }
                end = idx + next.len_utf8();
                last_char = next;
                chars.next();
            }

            let is_preceded_by_word_char = previous_char.map_or(false, Self::is_word_char);
            let is_followed_by_word_char = chars
                .peek()
                .map_or(false, |&(_, next)| Self::is_word_char(next));

            // Uppercase ASCII letters are one byte each
            let run_length = end - start;

            if !is_preceded_by_word_char
                && !is_followed_by_word_char
                && run_length >= self.config.min_token_length
                && run_length <= self.config.max_token_length
            {
                tokens.push(text[start..end].to_string());
            }

            previous_char = Some(last_char);
        }

        tokens
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl Default for TokenScanner {
    fn default() -> Self {
        Self::ticker_symbol_scanner()
    }
}
