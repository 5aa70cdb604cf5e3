use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;

use crate::SessionId;

const SUFFIX_LEN: usize = 8;

pub fn generate_session_id() -> SessionId {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    SessionId::new(format!("session_{}_{}", Utc::now().timestamp_millis(), suffix))
}
