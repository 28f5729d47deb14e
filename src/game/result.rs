//! Match results.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player won outright, by top score or five sixes.
    Winner(PlayerId),
    /// Several players tied on the top score.
    Winners(Vec<PlayerId>),
    /// Every player was disqualified.
    NoWinner,
}

impl GameResult {
    /// Build a result from the players sharing the top score.
    #[must_use]
    pub fn from_leaders(mut leaders: Vec<PlayerId>) -> Self {
        match leaders.len() {
            0 => GameResult::NoWinner,
            1 => GameResult::Winner(leaders.remove(0)),
            _ => GameResult::Winners(leaders),
        }
    }

    /// Players credited with the win, in seat order.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(player) => std::slice::from_ref(player),
            GameResult::Winners(players) => players,
            GameResult::NoWinner => &[],
        }
    }

    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners().contains(&player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(ids: &[u8]) -> Vec<PlayerId> {
        ids.iter().copied().map(PlayerId::new).collect()
    }

    #[test]
    fn test_from_leaders() {
        assert_eq!(GameResult::from_leaders(vec![]), GameResult::NoWinner);
        assert_eq!(
            GameResult::from_leaders(seats(&[2])),
            GameResult::Winner(PlayerId::new(2))
        );
        assert_eq!(
            GameResult::from_leaders(seats(&[0, 1])),
            GameResult::Winners(seats(&[0, 1]))
        );
    }

    #[test]
    fn test_winners_and_membership() {
        let tie = GameResult::from_leaders(seats(&[0, 2]));
        assert_eq!(tie.winners(), seats(&[0, 2]).as_slice());
        assert!(tie.is_winner(PlayerId::new(2)));
        assert!(!tie.is_winner(PlayerId::new(1)));

        let solo = GameResult::Winner(PlayerId::new(1));
        assert_eq!(solo.winners(), &[PlayerId::new(1)]);

        assert!(GameResult::NoWinner.winners().is_empty());
        assert!(!GameResult::NoWinner.is_winner(PlayerId::new(0)));
    }
}
