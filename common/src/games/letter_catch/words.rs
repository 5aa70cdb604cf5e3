use super::generator::GenerationError;
use crate::games::session_rng::SessionRng;

pub const MIN_WORD_LEN: usize = 3;
pub const MAX_WORD_LEN: usize = 5;

pub const FALLBACK_WORDS: &[&str] = &["CAT", "DOG", "SUN", "BOX", "JAM"];

const DICTIONARY: &[&str] = &[
    "ANT", "APE", "ARM", "BAG", "BAT", "BED", "BEE", "BUS", "CAP", "COW", "CUP", "DEN", "EAR",
    "EGG", "ELF", "FAN", "FIG", "FOX", "GUM", "HAT", "HEN", "INK", "JAR", "JET", "KEY", "KID",
    "LOG", "MAP", "MUD", "NET", "OWL", "PAN", "PEN", "PIG", "POT", "RAT", "RUG", "SKY", "TOY",
    "VAN", "WEB", "YAK", "ZIP", "BEAR", "BIRD", "BOAT", "CAKE", "COAT", "DUCK", "DRUM", "FISH",
    "FROG", "GOAT", "HAND", "KITE", "LAMP", "LION", "MOON", "NEST", "PEAR", "RAIN", "ROSE",
    "SHIP", "SNOW", "STAR", "TREE", "WIND", "WOLF", "APPLE", "BEACH", "BREAD", "CANDY", "CHAIR",
    "CLOUD", "CROWN", "GRAPE", "HORSE", "HOUSE", "LEMON", "MANGO", "MELON", "MOUSE", "OCEAN",
    "PEACH", "PIANO", "PLANT", "ROBOT", "SHEEP", "SNAKE", "SPOON", "TIGER", "TRAIN", "WATER",
    "ZEBRA",
];

pub trait WordSource: Send + Sync {
    /// Picks `count` distinct words, upper-cased.
    fn pick_words(&self, count: usize, rng: &mut SessionRng) -> Result<Vec<String>, GenerationError>;
}

pub(crate) fn validate_word(word: &str) -> Result<(), GenerationError> {
    let len = word.chars().count();
    if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
        return Err(GenerationError::InvalidWord(word.to_string()));
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GenerationError::InvalidWord(word.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct DictionaryWordSource {
    words: Vec<String>,
}

impl DictionaryWordSource {
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.into().to_ascii_uppercase())
            .collect();
        words.sort();
        words.dedup();
        Self { words }
    }

    pub fn built_in() -> Self {
        Self::new(DICTIONARY.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for DictionaryWordSource {
    fn default() -> Self {
        Self::built_in()
    }
}

impl WordSource for DictionaryWordSource {
    fn pick_words(&self, count: usize, rng: &mut SessionRng) -> Result<Vec<String>, GenerationError> {
        if self.words.len() < count {
            return Err(GenerationError::NotEnoughWords {
                requested: count,
                available: self.words.len(),
            });
        }

        let mut pool: Vec<&String> = self.words.iter().collect();
        rng.shuffle(&mut pool);

        pool.into_iter()
            .take(count)
            .map(|word| {
                validate_word(word)?;
                Ok(word.clone())
            })
            .collect()
    }
}

pub(crate) fn fallback_words(count: usize) -> Vec<String> {
    FALLBACK_WORDS
        .iter()
        .cycle()
        .take(count)
        .map(|w| w.to_string())
        .collect()
}
