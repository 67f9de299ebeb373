use kickoff_core::{distance, Side, Vector2};
use kickoff_sim::{ButtonInput, HeldKeys, InputSource, Match, TeamInput};

/// Positions closer than this on an axis count as reached.
const DEAD_ZONE: f64 = 4.0;
/// The carrier shoots once it is this close to the goal it attacks.
const SHOOTING_RANGE: f64 = 280.0;
/// Without the ball, ask for the player nearest the ball once the controlled one
/// is further away than this.
const SWITCH_DISTANCE: f64 = 250.0;

/// Drives a human side by pressing buttons like a (not very clever) person would:
/// run at the ball, run at the goal with it, shoot when close.
#[derive(Debug, Default)]
pub struct Autopilot {
    buttons: ButtonInput,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    fn keys(side: Side, game: &Match) -> HeldKeys {
        let control = game.team(side).active_control_player;
        let position = game.player(control).position;
        let ball = game.ball();

        let (aim, shoot) = if ball.owner == Some(control) {
            let goal = game.goals()[side.index()].position;
            (goal, distance(&position, &goal) < SHOOTING_RANGE)
        } else {
            let far = distance(&position, &ball.position) > SWITCH_DISTANCE;
            let teammate_has_it = ball.owner.is_some_and(|id| game.player(id).side == side);
            (ball.position, far && !teammate_has_it)
        };

        let delta: Vector2 = aim - position;
        HeldKeys {
            up: delta.y < -DEAD_ZONE,
            down: delta.y > DEAD_ZONE,
            left: delta.x < -DEAD_ZONE,
            right: delta.x > DEAD_ZONE,
            shoot,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, side: Side, game: &Match) -> TeamInput {
        self.buttons.set_keys(Self::keys(side, game));
        self.buttons.poll(side, game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kickoff_core::{MatchOptions, PlayerId};

    #[test]
    fn test_runs_at_the_ball() {
        let game = Match::new(MatchOptions::two_players(3));
        let mut autopilot = Autopilot::new();

        // The kick off taker stands just left of the centre spot
        let input = autopilot.poll(Side::Home, &game);
        assert_eq!(input.movement, Vector2::new(1.0, 0.0));
        assert!(!input.shoot);
    }

    #[test]
    fn test_shoots_once_in_range() {
        let mut game = Match::new(MatchOptions::two_players(3));
        game.players_mut()[0].position = Vector2::new(500.0, 200.0);
        let ball = game.ball_mut();
        ball.position = Vector2::new(500.0, 184.0);
        ball.owner = Some(PlayerId::new(0));

        let mut autopilot = Autopilot::new();
        let input = autopilot.poll(Side::Home, &game);
        assert_eq!(input.movement, Vector2::new(0.0, -1.0));
        assert!(input.shoot);

        // Still held, so no second press
        assert!(!autopilot.poll(Side::Home, &game).shoot);
    }
}
