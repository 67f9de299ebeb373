use kickoff_core::{goal_position, PlayerId, Side, Vector2};
use serde::Serialize;

use crate::player::Player;

/// Distance (along the pitch) within which the ball makes a goal worth guarding.
const GOAL_ACTIVE_RANGE: f64 = 500.0;

/// A goal mouth. Goal `k` is the one side `k` attacks.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Goal {
    pub side: Side,
    pub position: Vector2,
}

impl Goal {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            position: goal_position(side),
        }
    }

    /// Both goals, indexed by the side attacking them.
    pub fn pair() -> [Goal; 2] {
        [Goal::new(Side::Home), Goal::new(Side::Away)]
    }

    /// Whether the ball is close enough to this goal for a defender to guard it.
    pub fn is_active(&self, ball_position: &Vector2) -> bool {
        (ball_position.y - self.position.y).abs() < GOAL_ACTIVE_RANGE
    }
}

/// Something a player can mark or a ball carrier can aim at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Target {
    Player(PlayerId),
    /// The goal attacked by the given side.
    Goal(Side),
}

impl Target {
    pub fn position(&self, players: &[Player], goals: &[Goal; 2]) -> Vector2 {
        match self {
            Target::Player(id) => players[id.index()].position,
            Target::Goal(side) => goals[side.index()].position,
        }
    }

    /// The side the target belongs to.
    pub fn side(&self, players: &[Player]) -> Side {
        match self {
            Target::Player(id) => players[id.index()].side,
            Target::Goal(side) => *side,
        }
    }

    /// Whether the target is currently involved in play.
    pub fn is_active(&self, players: &[Player], goals: &[Goal; 2], ball_position: &Vector2) -> bool {
        match self {
            Target::Player(id) => players[id.index()].is_active(ball_position),
            Target::Goal(side) => goals[side.index()].is_active(ball_position),
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, Target::Goal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_positions() {
        let [home, away] = Goal::pair();
        assert_eq!(home.position, Vector2::new(500.0, 0.0));
        assert_eq!(away.position, Vector2::new(500.0, 1400.0));
    }

    #[test]
    fn test_goal_active_range() {
        let goal = Goal::new(Side::Home);
        assert!(goal.is_active(&Vector2::new(500.0, 499.0)));
        assert!(!goal.is_active(&Vector2::new(500.0, 500.0)));
    }

    #[test]
    fn test_target_side_and_position() {
        let players = vec![Player::new(
            PlayerId::new(0),
            Side::Away,
            Vector2::new(300.0, 300.0),
            PlayerId::new(1),
        )];
        let goals = Goal::pair();

        let p = Target::Player(PlayerId::new(0));
        assert_eq!(p.side(&players), Side::Away);
        assert_eq!(p.position(&players, &goals), players[0].position);

        let g = Target::Goal(Side::Away);
        assert!(g.is_goal());
        assert_eq!(g.position(&players, &goals), Vector2::new(500.0, 1400.0));
    }
}
