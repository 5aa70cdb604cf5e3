use std::sync::Arc;

use common::games::letter_catch::{
    ConfigGenerator, GameConfig, Move, MoveResult, Session, evaluate_move,
};
use common::id_generator::generate_session_id;
use common::{GameError, PlayerId, SessionId, log, log_warn};

use crate::session_store::SessionStore;
use crate::stats::{DebugSnapshot, PlayerStats};

struct Inner<S> {
    store: S,
    generator: ConfigGenerator,
    round_count: usize,
}

/// Entry point for everything the transport layer does with sessions.
pub struct SessionService<S: SessionStore> {
    inner: Arc<Inner<S>>,
}

impl<S: SessionStore> Clone for SessionService<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: SessionStore> SessionService<S> {
    pub fn new(store: S, generator: ConfigGenerator, round_count: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                generator,
                round_count,
            }),
        }
    }

    pub fn create_session(&self, player_id: PlayerId) -> Result<Session, GameError> {
        Self::check_player(&player_id)?;

        let generated = self.inner.generator.generate(self.inner.round_count);
        if generated.used_fallback {
            log_warn!("Config generation fell back to built-in tables for player {}", player_id);
        }
        self.store_new_session(player_id, generated.config)
    }

    pub fn create_session_with_config(
        &self,
        player_id: PlayerId,
        config: GameConfig,
    ) -> Result<Session, GameError> {
        Self::check_player(&player_id)?;
        Self::check_config(&config)?;
        self.store_new_session(player_id, config)
    }

    pub fn get_session(&self, session_id: &SessionId) -> Result<Session, GameError> {
        self.inner
            .store
            .get(session_id)
            .ok_or_else(|| GameError::NotFound(session_id.clone()))
    }

    pub fn get_session_config(&self, session_id: &SessionId) -> Result<GameConfig, GameError> {
        self.get_session(session_id)
            .map(|session| session.config().clone())
    }

    pub fn apply_move(
        &self,
        session_id: &SessionId,
        letter_clicked: &str,
        letter_color: &str,
    ) -> Result<MoveResult, GameError> {
        if letter_clicked.is_empty() {
            return Err(GameError::InvalidInput("letter_clicked is required".to_string()));
        }
        if letter_color.is_empty() {
            return Err(GameError::InvalidInput("letter_color is required".to_string()));
        }

        let mv = Move::new(letter_clicked, letter_color);
        let result = self.inner.store.update(session_id, |session| {
            let result = evaluate_move(session, &mv)?;
            Ok((result.session.clone(), result))
        })?;

        let session = &result.session;
        log!(
            "Move on {}: {} {} -> correct={} score={} attempts={}",
            session_id,
            letter_clicked,
            letter_color,
            result.is_correct,
            session.score(),
            session.attempts_remaining()
        );
        if result.game_completed
            && let Some(reward) = session.final_reward()
        {
            log!(
                "Session {} completed with score {}: {}",
                session_id,
                session.score(),
                reward
            );
        }

        Ok(result)
    }

    pub fn player_stats(&self, player_id: PlayerId) -> PlayerStats {
        let sessions = self.inner.store.sessions();
        PlayerStats::collect(player_id, &sessions)
    }

    pub fn debug_snapshot(&self) -> DebugSnapshot {
        DebugSnapshot::new(self.inner.store.sessions())
    }

    pub fn default_config(&self) -> GameConfig {
        GameConfig::default_config()
    }

    pub fn session_count(&self) -> usize {
        self.inner.store.len()
    }

    fn check_player(player_id: &PlayerId) -> Result<(), GameError> {
        if player_id.is_blank() {
            return Err(GameError::InvalidInput("player_id is required".to_string()));
        }
        Ok(())
    }

    /// Every round needs at least one letter, and letters are single
    /// uppercase ASCII characters, or the round could never be finished.
    fn check_config(config: &GameConfig) -> Result<(), GameError> {
        if config.rounds().is_empty() {
            return Err(GameError::InvalidInput(
                "config must contain at least one round".to_string(),
            ));
        }
        for (index, round) in config.rounds().iter().enumerate() {
            if round.is_empty() {
                return Err(GameError::InvalidInput(format!("round {} has no letters", index)));
            }
            if let Some(letter) = round
                .letters()
                .iter()
                .find(|l| !l.letter.is_ascii_uppercase())
            {
                return Err(GameError::InvalidInput(format!(
                    "round {} has invalid letter {:?}",
                    index, letter.letter
                )));
            }
        }
        Ok(())
    }

    fn store_new_session(
        &self,
        player_id: PlayerId,
        config: GameConfig,
    ) -> Result<Session, GameError> {
        let round_count = config.rounds().len();
        let session = loop {
            let candidate = Session::new(generate_session_id(), player_id.clone(), config.clone());
            if self.inner.store.insert(candidate.clone()) {
                break candidate;
            }
        };

        log!(
            "Session {} created for player {} with {} rounds ({} sessions total)",
            session.id(),
            session.player_id(),
            round_count,
            self.session_count()
        );
        Ok(session)
    }
}
