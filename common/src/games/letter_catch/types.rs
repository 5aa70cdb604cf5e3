use serde::Serialize;

use super::colors::fallback_colors;
use super::generator::GenerationError;
use super::reward::Reward;
use crate::{PlayerId, SessionId};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Letter {
    pub letter: char,
    pub color: String,
}

impl Letter {
    pub fn new(letter: char, color: impl Into<String>) -> Self {
        Self {
            letter,
            color: color.into(),
        }
    }

    /// Exact match on both fields. `letter` must be exactly this one character.
    pub fn matches(&self, letter: &str, color: &str) -> bool {
        let mut chars = letter.chars();
        chars.next() == Some(self.letter) && chars.next().is_none() && self.color == color
    }
}

/// A word and one colored letter per character, in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    word: String,
    letters: Vec<Letter>,
}

impl Round {
    pub fn new(letters: Vec<Letter>) -> Self {
        let word = letters.iter().map(|l| l.letter).collect();
        Self { word, letters }
    }

    /// Pairs each character of `word` with the color at the same index.
    /// The number of colors must match the number of characters.
    pub fn from_word<I, C>(word: &str, colors: I) -> Result<Self, GenerationError>
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        let expected = word.chars().count();
        if colors.len() != expected {
            return Err(GenerationError::ColorCountMismatch {
                expected,
                found: colors.len(),
            });
        }
        let letters = word
            .chars()
            .zip(colors)
            .map(|(letter, color)| Letter::new(letter, color))
            .collect();
        Ok(Self::new(letters))
    }

    /// Colors `word` with the fixed palette, cycling it per letter.
    pub fn with_fallback_palette(word: &str) -> Self {
        let letters = word
            .chars()
            .zip(fallback_colors(word.chars().count()))
            .map(|(letter, color)| Letter::new(letter, color))
            .collect();
        Self::new(letters)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    rounds: Vec<Round>,
    max_attempts: u32,
}

impl GameConfig {
    pub fn new(rounds: Vec<Round>, max_attempts: u32) -> Self {
        Self {
            rounds,
            max_attempts: max_attempts.max(1),
        }
    }

    /// The built-in five-round config used whenever generation falls back.
    pub fn default_config() -> Self {
        let rounds = super::words::FALLBACK_WORDS
            .iter()
            .map(|word| Round::with_fallback_palette(word))
            .collect();
        Self::new(rounds, DEFAULT_MAX_ATTEMPTS)
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub(crate) id: SessionId,
    pub(crate) player_id: PlayerId,
    pub(crate) config: GameConfig,
    pub(crate) current_round: usize,
    pub(crate) score: u32,
    pub(crate) attempts_remaining: u32,
    pub(crate) caught_letters: Vec<char>,
    pub(crate) is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) final_reward: Option<Reward>,
}

impl Session {
    pub fn new(id: SessionId, player_id: PlayerId, config: GameConfig) -> Self {
        let attempts_remaining = config.max_attempts();
        Self {
            id,
            player_id,
            config,
            current_round: 0,
            score: 0,
            attempts_remaining,
            caught_letters: Vec::new(),
            is_completed: false,
            final_reward: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_round(&self) -> usize {
        self.current_round
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn caught_letters(&self) -> &[char] {
        &self.caught_letters
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn final_reward(&self) -> Option<Reward> {
        self.final_reward
    }

    /// The letter the player has to catch next, if a round is in progress.
    pub fn expected_letter(&self) -> Option<&Letter> {
        self.config
            .round(self.current_round)?
            .letters()
            .get(self.caught_letters.len())
    }

    pub(crate) fn complete(&mut self) {
        self.is_completed = true;
        self.final_reward = Some(Reward::for_score(self.score));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub letter: String,
    pub color: String,
}

impl Move {
    pub fn new(letter: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    pub is_correct: bool,
    pub session: Session,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_letter: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_color: Option<String>,
    pub round_completed: bool,
    pub game_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_word_follows_letters() {
        let round = Round::from_word("CAT", ["red", "green", "blue"]).unwrap();

        assert_eq!(round.word(), "CAT");
        assert_eq!(round.len(), 3);
        assert_eq!(round.letters()[1], Letter::new('A', "green"));
    }

    #[test]
    fn test_round_rejects_color_count_mismatch() {
        let result = Round::from_word("CATS", ["red", "green"]);

        assert_eq!(
            result,
            Err(GenerationError::ColorCountMismatch {
                expected: 4,
                found: 2
            })
        );
        assert!(Round::from_word("OX", ["a", "b", "c"]).is_err());
    }

    #[test]
    fn test_fallback_palette_round_keeps_whole_word() {
        let round = Round::with_fallback_palette("TIGER");

        assert_eq!(round.word(), "TIGER");
        assert_eq!(round.letters()[3], Letter::new('E', "#FF9999"));
    }

    #[test]
    fn test_letter_match_is_exact() {
        let letter = Letter::new('A', "#99FF99");

        assert!(letter.matches("A", "#99FF99"));
        assert!(!letter.matches("a", "#99FF99"));
        assert!(!letter.matches("A", "#99ff99"));
        assert!(!letter.matches("AA", "#99FF99"));
        assert!(!letter.matches("", "#99FF99"));
    }

    #[test]
    fn test_default_config_shape() {
        let config = GameConfig::default_config();

        assert_eq!(config.rounds().len(), 5);
        assert_eq!(config.max_attempts(), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.rounds()[0].word(), "CAT");
        assert_eq!(config.rounds()[0].letters()[0].color, "#FF9999");
        assert!(config.rounds().iter().all(|r| r.len() == 3));
    }

    #[test]
    fn test_zero_max_attempts_is_raised_to_one() {
        let config = GameConfig::new(vec![Round::from_word("SUN", ["a", "b", "c"]).unwrap()], 0);

        assert_eq!(config.max_attempts(), 1);
    }

    #[test]
    fn test_new_session_initial_state() {
        let session = Session::new(
            SessionId::new("s1"),
            PlayerId::new("p1"),
            GameConfig::default_config(),
        );

        assert_eq!(session.current_round(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.attempts_remaining(), 5);
        assert!(session.caught_letters().is_empty());
        assert!(!session.is_completed());
        assert_eq!(session.final_reward(), None);
        assert_eq!(session.expected_letter(), Some(&Letter::new('C', "#FF9999")));
    }

    #[test]
    fn test_session_json_shape() {
        let session = Session::new(
            SessionId::new("s1"),
            PlayerId::new("p1"),
            GameConfig::default_config(),
        );

        let value = serde_json::to_value(&session).unwrap();

        assert_eq!(value["id"], "s1");
        assert_eq!(value["player_id"], "p1");
        assert_eq!(value["config"]["max_attempts"], 5);
        assert_eq!(value["config"]["rounds"][0]["word"], "CAT");
        assert_eq!(value["config"]["rounds"][0]["letters"][2]["letter"], "T");
        assert_eq!(value["caught_letters"], serde_json::json!([]));
        assert!(value.get("final_reward").is_none());
    }
}
