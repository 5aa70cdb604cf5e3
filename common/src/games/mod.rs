pub mod letter_catch;
pub mod session_rng;
