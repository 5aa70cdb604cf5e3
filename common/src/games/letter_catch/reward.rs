use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Reward {
    #[serde(rename = "Goal Box")]
    GoalBox,
    #[serde(rename = "Dollar Box")]
    DollarBox,
    #[serde(rename = "Coin Box")]
    CoinBox,
    #[serde(rename = "Try Again")]
    TryAgain,
}

impl Reward {
    pub const GOAL_SCORE: u32 = 100;
    pub const DOLLAR_MIN_SCORE: u32 = 70;
    pub const COIN_MIN_SCORE: u32 = 50;

    /// Thresholds apply to the absolute final score.
    pub fn for_score(score: u32) -> Self {
        if score == Self::GOAL_SCORE {
            Reward::GoalBox
        } else if score >= Self::DOLLAR_MIN_SCORE {
            Reward::DollarBox
        } else if score >= Self::COIN_MIN_SCORE {
            Reward::CoinBox
        } else {
            Reward::TryAgain
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Reward::GoalBox => "Goal Box",
            Reward::DollarBox => "Dollar Box",
            Reward::CoinBox => "Coin Box",
            Reward::TryAgain => "Try Again",
        }
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_table() {
        assert_eq!(Reward::for_score(100), Reward::GoalBox);
        assert_eq!(Reward::for_score(85), Reward::DollarBox);
        assert_eq!(Reward::for_score(60), Reward::CoinBox);
        assert_eq!(Reward::for_score(30), Reward::TryAgain);
        assert_eq!(Reward::for_score(70), Reward::DollarBox);
        assert_eq!(Reward::for_score(50), Reward::CoinBox);
    }

    #[test]
    fn test_boundaries_below_thresholds() {
        assert_eq!(Reward::for_score(0), Reward::TryAgain);
        assert_eq!(Reward::for_score(49), Reward::TryAgain);
        assert_eq!(Reward::for_score(69), Reward::CoinBox);
        assert_eq!(Reward::for_score(99), Reward::DollarBox);
    }

    #[test]
    fn test_scores_above_goal_are_dollar_box() {
        assert_eq!(Reward::for_score(110), Reward::DollarBox);
        assert_eq!(Reward::for_score(150), Reward::DollarBox);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Reward::GoalBox).unwrap();

        assert_eq!(json, "\"Goal Box\"");
        assert_eq!(Reward::TryAgain.to_string(), "Try Again");
    }
}
