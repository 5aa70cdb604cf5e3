use crate::SessionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NotFound(SessionId),
    InvalidInput(String),
    InvalidRound { session_id: SessionId, round: usize },
    SessionCompleted(SessionId),
}

impl GameError {
    pub fn code(&self) -> &'static str {
        match self {
            GameError::NotFound(_) => "NOT_FOUND",
            GameError::InvalidInput(_) => "INVALID_INPUT",
            GameError::InvalidRound { .. } => "INVALID_ROUND",
            GameError::SessionCompleted(_) => "SESSION_COMPLETED",
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::NotFound(id) => write!(f, "Session not found: {}", id),
            GameError::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
            GameError::InvalidRound { session_id, round } => {
                write!(f, "Invalid round {} for session {}", round, session_id)
            }
            GameError::SessionCompleted(id) => write!(f, "Session already completed: {}", id),
        }
    }
}

impl std::error::Error for GameError {}
