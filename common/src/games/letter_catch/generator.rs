use std::collections::HashSet;
use std::fmt;

use super::colors::{BrightColorSource, ColorSource};
use super::types::{DEFAULT_MAX_ATTEMPTS, GameConfig, Round};
use super::words::{DictionaryWordSource, WordSource, fallback_words, validate_word};
use crate::games::session_rng::SessionRng;

pub const DEFAULT_ROUND_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    NotEnoughWords { requested: usize, available: usize },
    InvalidWord(String),
    InvalidColor { hue: f64, saturation: f64, lightness: f64 },
    IndistinctColors,
    ColorCountMismatch { expected: usize, found: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::NotEnoughWords {
                requested,
                available,
            } => write!(
                f,
                "Requested {} words but only {} available",
                requested, available
            ),
            GenerationError::InvalidWord(word) => write!(f, "Invalid word: {}", word),
            GenerationError::InvalidColor {
                hue,
                saturation,
                lightness,
            } => write!(
                f,
                "Invalid color hsl({}, {}, {})",
                hue, saturation, lightness
            ),
            GenerationError::IndistinctColors => write!(f, "Adjacent letters got the same color"),
            GenerationError::ColorCountMismatch { expected, found } => {
                write!(f, "Expected {} colors, got {}", expected, found)
            }
        }
    }
}

impl std::error::Error for GenerationError {}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedConfig {
    pub config: GameConfig,
    pub used_fallback: bool,
}

/// Builds per-session configs. Word and color failures are absorbed by the
/// fixed fallback tables, so generation always yields a playable config.
pub struct ConfigGenerator {
    word_source: Box<dyn WordSource>,
    color_source: Box<dyn ColorSource>,
    max_attempts: u32,
}

impl ConfigGenerator {
    pub fn new(
        word_source: Box<dyn WordSource>,
        color_source: Box<dyn ColorSource>,
        max_attempts: u32,
    ) -> Self {
        Self {
            word_source,
            color_source,
            max_attempts,
        }
    }

    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self::new(
            Box::new(DictionaryWordSource::built_in()),
            Box::new(BrightColorSource::default()),
            max_attempts,
        )
    }

    pub fn generate(&self, round_count: usize) -> GeneratedConfig {
        self.generate_with_rng(round_count, &mut SessionRng::from_random())
    }

    pub fn generate_with_rng(&self, round_count: usize, rng: &mut SessionRng) -> GeneratedConfig {
        let round_count = if round_count == 0 {
            DEFAULT_ROUND_COUNT
        } else {
            round_count
        };
        let mut used_fallback = false;

        let words = match self.pick_checked_words(round_count, rng) {
            Ok(words) => words,
            Err(_) => {
                used_fallback = true;
                fallback_words(round_count)
            }
        };

        let rounds = words
            .iter()
            .map(|word| {
                let colors = self.color_source.colors_for(word.chars().count(), rng);
                match colors.and_then(|colors| Round::from_word(word, colors)) {
                    Ok(round) => round,
                    Err(_) => {
                        used_fallback = true;
                        Round::with_fallback_palette(word)
                    }
                }
            })
            .collect();

        GeneratedConfig {
            config: GameConfig::new(rounds, self.max_attempts),
            used_fallback,
        }
    }

    /// Whatever the source returns must be `count` distinct valid words,
    /// otherwise the whole list is rejected.
    fn pick_checked_words(
        &self,
        count: usize,
        rng: &mut SessionRng,
    ) -> Result<Vec<String>, GenerationError> {
        let words: Vec<String> = self
            .word_source
            .pick_words(count, rng)?
            .into_iter()
            .map(|word| word.to_ascii_uppercase())
            .collect();

        if words.len() != count {
            return Err(GenerationError::NotEnoughWords {
                requested: count,
                available: words.len(),
            });
        }
        let mut seen = HashSet::with_capacity(count);
        for word in &words {
            validate_word(word)?;
            if !seen.insert(word.as_str()) {
                return Err(GenerationError::InvalidWord(word.clone()));
            }
        }
        Ok(words)
    }
}

impl Default for ConfigGenerator {
    fn default() -> Self {
        Self::with_max_attempts(DEFAULT_MAX_ATTEMPTS)
    }
}
