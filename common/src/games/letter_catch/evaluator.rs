use super::types::{Move, MoveResult, Session};
use crate::GameError;

pub const POINTS_PER_CATCH: u32 = 10;

/// Applies one click to a copy of `session` and reports what happened.
///
/// Letters must be caught left to right: the expected letter is always the
/// one after the already caught prefix of the current round. A correct click
/// scores and may finish the round (and the game, after the last round). Any
/// other click spends one attempt from the game-wide budget, and running out
/// ends the game mid-round. Finished sessions reject further moves.
pub fn evaluate_move(session: &Session, mv: &Move) -> Result<MoveResult, GameError> {
    if session.is_completed {
        return Err(GameError::SessionCompleted(session.id.clone()));
    }

    let round = session
        .config
        .round(session.current_round)
        .ok_or_else(|| GameError::InvalidRound {
            session_id: session.id.clone(),
            round: session.current_round,
        })?;

    let expected = round.letters().get(session.caught_letters.len()).cloned();
    let round_len = round.len();
    let round_count = session.config.rounds().len();

    let mut next = session.clone();
    let mut round_completed = false;

    let is_correct = match &expected {
        Some(letter) if letter.matches(&mv.letter, &mv.color) => {
            next.caught_letters.push(letter.letter);
            next.score += POINTS_PER_CATCH;

            if next.caught_letters.len() == round_len {
                next.current_round += 1;
                next.caught_letters.clear();
                round_completed = true;

                if next.current_round >= round_count {
                    next.complete();
                }
            }
            true
        }
        _ => {
            next.attempts_remaining = next.attempts_remaining.saturating_sub(1);
            if next.attempts_remaining == 0 {
                next.complete();
            }
            false
        }
    };

    let game_completed = next.is_completed;
    let (expected_letter, expected_color) = match expected {
        Some(letter) => (Some(letter.letter), Some(letter.color)),
        None => (None, None),
    };

    Ok(MoveResult {
        is_correct,
        session: next,
        expected_letter,
        expected_color,
        round_completed,
        game_completed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::letter_catch::{GameConfig, Letter, Reward, Round};
    use crate::{PlayerId, SessionId};

    fn cat_game() -> Session {
        let mut rounds = vec![Round::from_word("CAT", ["red", "green", "blue"]).unwrap()];
        for word in ["DOG", "SUN", "BOX", "JAM"] {
            rounds.push(Round::from_word(word, ["red", "green", "blue"]).unwrap());
        }
        Session::new(
            SessionId::new("s1"),
            PlayerId::new("p1"),
            GameConfig::new(rounds, 5),
        )
    }

    fn single_round_game(word: &str, max_attempts: u32) -> Session {
        let colors: Vec<String> = (0..word.len()).map(|i| format!("c{}", i)).collect();
        Session::new(
            SessionId::new("s2"),
            PlayerId::new("p2"),
            GameConfig::new(vec![Round::from_word(word, colors).unwrap()], max_attempts),
        )
    }

    fn apply(session: &Session, letter: &str, color: &str) -> MoveResult {
        evaluate_move(session, &Move::new(letter, color)).unwrap()
    }

    /// Catches every remaining letter of the current round.
    fn finish_round(mut session: Session) -> Session {
        while let Some(letter) = session.expected_letter().cloned() {
            let result = apply(&session, &letter.letter.to_string(), &letter.color);
            session = result.session;
            if result.round_completed {
                break;
            }
        }
        session
    }

    #[test]
    fn test_cat_scenario() {
        let session = cat_game();

        let first = apply(&session, "C", "red");
        assert!(first.is_correct);
        assert_eq!(first.session.score(), 10);
        assert_eq!(first.session.caught_letters(), &['C']);
        assert!(!first.round_completed);

        let second = apply(&first.session, "A", "red");
        assert!(!second.is_correct);
        assert_eq!(second.session.score(), 10);
        assert_eq!(second.session.attempts_remaining(), 4);
        assert_eq!(second.expected_letter, Some('A'));
        assert_eq!(second.expected_color.as_deref(), Some("green"));

        let third = apply(&second.session, "A", "green");
        assert!(third.is_correct);
        assert_eq!(third.session.score(), 20);
        assert_eq!(third.session.caught_letters(), &['C', 'A']);

        let fourth = apply(&third.session, "T", "blue");
        assert!(fourth.is_correct);
        assert_eq!(fourth.session.score(), 30);
        assert!(fourth.session.caught_letters().is_empty());
        assert_eq!(fourth.session.current_round(), 1);
        assert!(fourth.round_completed);
        assert!(!fourth.game_completed);
    }

    #[test]
    fn test_attempts_exhaustion_ends_game_with_try_again() {
        let mut session = cat_game();

        for expected_remaining in (0..5).rev() {
            let result = apply(&session, "Z", "black");
            assert!(!result.is_correct);
            assert_eq!(result.session.attempts_remaining(), expected_remaining);
            assert_eq!(result.game_completed, expected_remaining == 0);
            session = result.session;
        }

        assert!(session.is_completed());
        assert_eq!(session.final_reward(), Some(Reward::TryAgain));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_out_of_order_letter_is_incorrect() {
        let session = cat_game();

        let result = apply(&session, "A", "green");

        assert!(!result.is_correct);
        assert!(result.session.caught_letters().is_empty());
        assert_eq!(result.expected_letter, Some('C'));
    }

    #[test]
    fn test_wrong_click_keeps_progress() {
        let session = apply(&cat_game(), "C", "red").session;

        let result = apply(&session, "T", "blue");

        assert_eq!(result.session.caught_letters(), &['C']);
        assert_eq!(result.session.score(), 10);
        assert_eq!(result.session.current_round(), 0);
    }

    #[test]
    fn test_full_game_completion_sets_reward() {
        let mut session = cat_game();

        for _ in 0..5 {
            session = finish_round(session);
        }

        assert!(session.is_completed());
        assert_eq!(session.current_round(), 5);
        assert_eq!(session.score(), 150);
        assert_eq!(session.final_reward(), Some(Reward::DollarBox));
    }

    #[test]
    fn test_last_catch_reports_both_completions() {
        let session = apply(&single_round_game("OW", 3), "O", "c0").session;

        let result = apply(&session, "W", "c1");

        assert!(result.round_completed);
        assert!(result.game_completed);
        assert_eq!(result.session.final_reward(), Some(Reward::TryAgain));
    }

    #[test]
    fn test_perfect_hundred_is_goal_box() {
        let session = single_round_game("ABCDEFGHIJ", 5);

        let session = finish_round(session);

        assert_eq!(session.score(), 100);
        assert_eq!(session.final_reward(), Some(Reward::GoalBox));
    }

    #[test]
    fn test_reward_uses_score_at_exhaustion() {
        let mut session = single_round_game("ABCDEFGHIJ", 1);
        for (i, ch) in "ABCDEF".chars().enumerate() {
            session = apply(&session, &ch.to_string(), &format!("c{}", i)).session;
        }

        let result = apply(&session, "Q", "c6");

        assert!(result.game_completed);
        assert!(!result.round_completed);
        assert_eq!(result.session.score(), 60);
        assert_eq!(result.session.final_reward(), Some(Reward::CoinBox));
    }

    #[test]
    fn test_completed_session_rejects_moves() {
        let mut session = single_round_game("OWL", 1);
        session = apply(&session, "X", "c0").session;
        assert!(session.is_completed());

        let result = evaluate_move(&session, &Move::new("O", "c0"));

        assert_eq!(result, Err(GameError::SessionCompleted(SessionId::new("s2"))));
    }

    #[test]
    fn test_round_out_of_range_is_invalid_round() {
        let mut session = single_round_game("OWL", 3);
        session.current_round = 4;

        let result = evaluate_move(&session, &Move::new("O", "c0"));

        assert_eq!(
            result,
            Err(GameError::InvalidRound {
                session_id: SessionId::new("s2"),
                round: 4
            })
        );
    }

    #[test]
    fn test_missing_expected_letter_counts_as_miss() {
        let session = Session::new(
            SessionId::new("s3"),
            PlayerId::new("p3"),
            GameConfig::new(vec![Round::new(Vec::new())], 2),
        );

        let result = apply(&session, "A", "red");

        assert!(!result.is_correct);
        assert_eq!(result.expected_letter, None);
        assert_eq!(result.expected_color, None);
        assert_eq!(result.session.attempts_remaining(), 1);
    }

    #[test]
    fn test_evaluation_does_not_touch_input() {
        let session = cat_game();
        let before = session.clone();

        let _ = apply(&session, "C", "red");

        assert_eq!(session, before);
    }

    #[test]
    fn test_caught_letters_stay_prefix_of_round() {
        let mut session = cat_game();
        let clicks = [
            ("C", "red"),
            ("Q", "red"),
            ("A", "green"),
            ("T", "blue"),
            ("D", "red"),
            ("G", "blue"),
            ("O", "green"),
        ];

        for (letter, color) in clicks {
            let before_score = session.score();
            let before_attempts = session.attempts_remaining();
            let result = apply(&session, letter, color);
            session = result.session;

            if result.is_correct {
                assert_eq!(session.score(), before_score + POINTS_PER_CATCH);
                assert_eq!(session.attempts_remaining(), before_attempts);
            } else {
                assert_eq!(session.score(), before_score);
                assert_eq!(session.attempts_remaining(), before_attempts - 1);
            }

            let round = session.config().round(session.current_round()).unwrap();
            let prefix: Vec<char> = round
                .letters()
                .iter()
                .take(session.caught_letters().len())
                .map(|l: &Letter| l.letter)
                .collect();
            assert_eq!(session.caught_letters(), prefix.as_slice());
        }
    }
}
