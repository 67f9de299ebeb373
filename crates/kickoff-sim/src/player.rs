use kickoff_core::{allow_movement, safe_normalize, vec_to_angle, Direction, PlayerId, Side, Vector2};
use serde::Serialize;

use crate::{behavior::Steering, target::Target};

/// Distance (along the pitch) between the ball and a player's home slot within which
/// the player joins in the play.
const ACTIVE_RANGE: f64 = 400.0;

/// Length of the run cycle, in units travelled.
const ANIM_CYCLE: f64 = 72.0;
/// Units travelled per run-cycle sprite frame.
const ANIM_FRAME_LENGTH: f64 = 18.0;

/// Turning rate: the step added to the heading, indexed by the clockwise difference
/// between the desired and current heading. Turns take the shorter way round, one
/// eighth of a turn per frame at most.
const TURN_STEPS: [i32; 8] = [0, 1, 1, 1, 1, 7, 7, 7];

/// A single footballer.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub side: Side,
    pub position: Vector2,
    /// Formation slot the player returns to when not involved.
    pub home: Vector2,
    pub direction: Direction,
    /// Distance run through the current animation cycle, `None` while standing.
    pub anim_frame: Option<f64>,
    /// Frames until the player may take the ball again. Counts down every frame.
    pub timer: i32,
    /// Distance ahead of the ball carrier to press at, when assigned.
    pub lead: Option<f64>,
    /// Who or what to guard while the other side has the ball.
    pub mark: Option<Target>,
    /// The mirrored player on the other side, marked by default.
    pub peer: PlayerId,
    /// Where the player was last heading to, for debug overlays.
    pub debug_target: Option<Vector2>,
}

impl Player {
    /// Create a player for kick off. The player starts part way between the centre
    /// line and its formation slot.
    pub fn new(id: PlayerId, side: Side, home: Vector2, peer: PlayerId) -> Self {
        let kickoff_y = home.y / 2.0 + 550.0 - side.index() as f64 * 400.0;
        Self {
            id,
            side,
            position: Vector2::new(home.x, kickoff_y),
            home,
            direction: Direction::UP,
            anim_frame: None,
            timer: 0,
            lead: None,
            mark: None,
            peer,
            debug_target: None,
        }
    }

    /// Whether the ball is close enough to this player's formation slot for the
    /// player to get involved.
    pub fn is_active(&self, ball_position: &Vector2) -> bool {
        (ball_position.y - self.home.y).abs() < ACTIVE_RANGE
    }

    /// Sprite frame of the run cycle, `0` when standing and `1..=4` while running.
    pub fn sprite_frame(&self) -> u8 {
        match self.anim_frame {
            Some(phase) => (phase / ANIM_FRAME_LENGTH).floor() as u8 + 1,
            None => 0,
        }
    }

    /// Move towards the steering target and turn towards the direction of travel.
    /// Standing players turn to face the ball instead.
    pub fn advance(&mut self, steering: Steering, ball_position: &Vector2) {
        let (vec, distance) = safe_normalize(steering.target - self.position);
        self.debug_target = Some(steering.target);

        let target_dir = if distance > 0.0 {
            let distance = distance.min(steering.speed);

            // Each axis is checked on its own so players slide along walls
            let x = self.position.x + vec.x * distance;
            if allow_movement(x, self.position.y) {
                self.position.x = x;
            }
            let y = self.position.y + vec.y * distance;
            if allow_movement(self.position.x, y) {
                self.position.y = y;
            }

            let phase = self.anim_frame.unwrap_or(-1.0) + distance.max(1.5);
            self.anim_frame = Some(phase.rem_euclid(ANIM_CYCLE));

            vec_to_angle(&vec)
        } else {
            self.anim_frame = None;
            vec_to_angle(&(ball_position - self.position))
        };

        let diff = self.direction.steps_to(target_dir);
        self.direction += TURN_STEPS[diff as usize];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn player_at(x: f64, y: f64) -> Player {
        let mut p = Player::new(PlayerId::new(0), Side::Home, Vector2::new(x, y), PlayerId::new(13));
        p.position = Vector2::new(x, y);
        p
    }

    #[test]
    fn test_kickoff_position() {
        let home = Player::new(PlayerId::new(0), Side::Home, Vector2::new(350.0, 550.0), PlayerId::new(13));
        assert_eq!(home.position, Vector2::new(350.0, 825.0));
        let away = Player::new(PlayerId::new(1), Side::Away, Vector2::new(650.0, 850.0), PlayerId::new(12));
        assert_eq!(away.position, Vector2::new(650.0, 575.0));
    }

    #[test]
    fn test_advance_is_speed_limited() {
        let mut p = player_at(500.0, 700.0);
        let steering = Steering {
            target: Vector2::new(500.0, 600.0),
            speed: 2.0,
        };
        p.advance(steering, &Vector2::new(500.0, 600.0));
        assert_relative_eq!(p.position.y, 698.0);
        assert_eq!(p.direction, Direction::UP);
        assert_eq!(p.debug_target, Some(Vector2::new(500.0, 600.0)));
        // Starting from standing, the cycle advances by at least 1.5 units
        assert_relative_eq!(p.anim_frame.unwrap(), 1.0);
        assert_eq!(p.sprite_frame(), 1);
    }

    #[test]
    fn test_turning_is_rate_limited() {
        let mut p = player_at(500.0, 700.0);
        // Target directly behind: turn clockwise one step per frame
        for expected in [1, 2, 3, 4] {
            p.advance(
                Steering {
                    target: p.position + Vector2::new(0.0, 100.0),
                    speed: 0.1,
                },
                &Vector2::zeros(),
            );
            assert_eq!(p.direction.index(), expected);
        }
        // Counter-clockwise for targets to the left
        p.direction = Direction::UP;
        p.advance(
            Steering {
                target: p.position + Vector2::new(-100.0, 0.0),
                speed: 0.1,
            },
            &Vector2::zeros(),
        );
        assert_eq!(p.direction.index(), 7);
    }

    #[test]
    fn test_standing_player_faces_ball() {
        let mut p = player_at(500.0, 700.0);
        p.anim_frame = Some(30.0);
        p.advance(
            Steering {
                target: p.position,
                speed: 2.0,
            },
            &Vector2::new(600.0, 700.0),
        );
        assert_eq!(p.anim_frame, None);
        assert_eq!(p.sprite_frame(), 0);
        assert_eq!(p.direction.index(), 1);
    }

    #[test]
    fn test_walls_block_single_axis() {
        // Next to the goal, moving diagonally into the goal line only slides sideways
        let mut p = player_at(500.0, 79.0);
        p.advance(
            Steering {
                target: Vector2::new(510.0, 60.0),
                speed: 5.0,
            },
            &Vector2::zeros(),
        );
        assert!(p.position.x > 500.0);
        assert_relative_eq!(p.position.y, 79.0);
    }

    #[test]
    fn test_is_active() {
        let p = player_at(500.0, 700.0);
        assert!(p.is_active(&Vector2::new(0.0, 1099.0)));
        assert!(!p.is_active(&Vector2::new(0.0, 1100.0)));
    }
}
