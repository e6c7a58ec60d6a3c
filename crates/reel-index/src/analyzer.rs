//! Text analysis pipeline for the reel search index.
//!
//! Implements a four-stage pipeline:
//! 1. Split on non-alphanumeric boundaries
//! 2. Lowercase each token
//! 3. Drop tokens longer than 40 bytes
//! 4. Apply language-specific Snowball stemming (optional)
//!
//! The same analyzer configuration MUST be used when building the index and
//! when tokenizing a query string; a vocabulary mismatch between the two
//! breaks every match.

use rust_stemmers::{Algorithm, Stemmer};

use crate::IndexError;

/// Maximum token length in bytes before filtering.
pub const MAX_TOKEN_LENGTH: usize = 40;

/// Parses a stemmer language string into a Snowball [`Algorithm`].
///
/// Supports lowercase language names; `"none"` disables stemming and maps
/// to `None`. Returns an error if the language is not recognized.
pub fn parse_language(name: &str) -> Result<Option<Algorithm>, IndexError> {
    match name.to_lowercase().as_str() {
        "none" => Ok(None),
        "arabic" => Ok(Some(Algorithm::Arabic)),
        "danish" => Ok(Some(Algorithm::Danish)),
        "dutch" => Ok(Some(Algorithm::Dutch)),
        "english" => Ok(Some(Algorithm::English)),
        "finnish" => Ok(Some(Algorithm::Finnish)),
        "french" => Ok(Some(Algorithm::French)),
        "german" => Ok(Some(Algorithm::German)),
        "greek" => Ok(Some(Algorithm::Greek)),
        "hungarian" => Ok(Some(Algorithm::Hungarian)),
        "italian" => Ok(Some(Algorithm::Italian)),
        "norwegian" => Ok(Some(Algorithm::Norwegian)),
        "portuguese" => Ok(Some(Algorithm::Portuguese)),
        "romanian" => Ok(Some(Algorithm::Romanian)),
        "russian" => Ok(Some(Algorithm::Russian)),
        "spanish" => Ok(Some(Algorithm::Spanish)),
        "swedish" => Ok(Some(Algorithm::Swedish)),
        "tamil" => Ok(Some(Algorithm::Tamil)),
        "turkish" => Ok(Some(Algorithm::Turkish)),
        other => Err(IndexError::InvalidLanguage(other.to_string())),
    }
}

/// Tokenizes and normalizes free text into index terms.
///
/// Cheap to clone; writer and searcher each hold one built from the same
/// configuration value.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    /// Stemming algorithm, or `None` when stemming is disabled.
    algorithm: Option<Algorithm>,
}

impl Analyzer {
    /// Creates an analyzer with the given stemming algorithm.
    pub fn new(algorithm: Option<Algorithm>) -> Self {
        Self { algorithm }
    }

    /// Creates an analyzer from a language name string.
    pub fn from_name(language: &str) -> Result<Self, IndexError> {
        Ok(Self::new(parse_language(language)?))
    }

    /// Tokenizes text into a finite, order-preserving sequence of terms.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let stemmer = self.algorithm.map(Stemmer::create);
        let mut tokens = Vec::new();

        for word in text.split(|c: char| !c.is_alphanumeric()) {
            if word.is_empty() || word.len() > MAX_TOKEN_LENGTH {
                continue;
            }
            let lowered = word.to_lowercase();
            let term = match &stemmer {
                Some(stemmer) => stemmer.stem(&lowered).into_owned(),
                None => lowered,
            };
            tokens.push(term);
        }

        tokens
    }
}
