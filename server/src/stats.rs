use common::games::letter_catch::{Reward, Session};
use common::{PlayerId, SessionId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub total_games_played: usize,
    pub completed_games: usize,
    pub total_score: u64,
    pub average_score: f64,
    pub best_score: u32,
    pub completion_rate: f64,
    pub rewards_earned: Vec<Reward>,
}

impl PlayerStats {
    /// Aggregates every session that belongs to `player_id`; `sessions` must
    /// already be in creation order for `rewards_earned` to be ordered.
    pub fn collect<'a, I>(player_id: PlayerId, sessions: I) -> Self
    where
        I: IntoIterator<Item = &'a Session>,
    {
        let sessions: Vec<&Session> = sessions
            .into_iter()
            .filter(|s| *s.player_id() == player_id)
            .collect();

        let mut stats = Self {
            player_id,
            total_games_played: 0,
            completed_games: 0,
            total_score: 0,
            average_score: 0.0,
            best_score: 0,
            completion_rate: 0.0,
            rewards_earned: Vec::new(),
        };

        for session in sessions {
            stats.total_games_played += 1;
            stats.total_score += u64::from(session.score());
            stats.best_score = stats.best_score.max(session.score());
            if session.is_completed() {
                stats.completed_games += 1;
            }
            if let Some(reward) = session.final_reward() {
                stats.rewards_earned.push(reward);
            }
        }

        if stats.total_games_played > 0 {
            let played = stats.total_games_played as f64;
            stats.average_score = stats.total_score as f64 / played;
            stats.completion_rate = stats.completed_games as f64 / played;
        }
        stats
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DebugSnapshot {
    pub session_count: usize,
    pub session_ids: Vec<SessionId>,
    pub sessions: Vec<Session>,
}

impl DebugSnapshot {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self {
            session_count: sessions.len(),
            session_ids: sessions.iter().map(|s| s.id().clone()).collect(),
            sessions,
        }
    }
}
