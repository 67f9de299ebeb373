use kickoff_core::{distance, own_goal_anchor, safe_normalize, Side, Vector2, HALF_LEVEL_W};

use crate::player::Player;

/// Passes and shots only go to targets closer than this.
const MAX_TARGET_DISTANCE: f64 = 300.0;
/// Minimum cosine between two bearings for them to count as the same line
/// (about 37 degrees).
const BEARING_COS: f64 = 0.8;
/// Opponents closer than this don't repel any further.
const MIN_OPPONENT_DISTANCE: f64 = 24.0;

/// How undesirable `pos` is for `side` to have the ball at. Lower is better.
///
/// The terms push the carrier away from its own goal and away from opponents,
/// keep it off the touchlines and reward progress up the pitch. `handicap` is added
/// as is, to bias otherwise equal choices.
pub fn cost(pos: &Vector2, side: Side, handicap: f64, players: &[Player]) -> f64 {
    let own_goal_distance = distance(pos, &own_goal_anchor(side)).max(f64::EPSILON);

    let opponent_pressure: f64 = players
        .iter()
        .filter(|p| p.side != side)
        .map(|p| 4000.0 / distance(&p.position, pos).max(MIN_OPPONENT_DISTANCE))
        .sum();

    let sideline = (pos.x - HALF_LEVEL_W).powi(2) / 200.0;
    // Home attacks towards y = 0, away towards the bottom of the level
    let progress = -pos.y * 2.0 * side.sign();

    3500.0 / own_goal_distance + opponent_pressure + sideline + progress + handicap
}

/// Whether `source` can pass or shoot to a target at `target_pos` belonging to
/// `target_side`: it must be a teammate (or the goal the source attacks), within
/// range and roughly in the direction the source is facing.
///
/// CPU players also refuse when an opponent stands in the way. Humans are left to
/// judge that themselves.
pub fn targetable(
    target_pos: &Vector2,
    target_side: Side,
    source: &Player,
    source_is_human: bool,
    players: &[Player],
) -> bool {
    let (v0, d0) = safe_normalize(target_pos - source.position);

    if !source_is_human {
        let blocked = players.iter().any(|p| {
            let (v1, d1) = safe_normalize(p.position - source.position);
            p.side != target_side && d1 > 0.0 && d1 < d0 && v0.dot(&v1) > BEARING_COS
        });
        if blocked {
            return false;
        }
    }

    target_side == source.side
        && d0 > 0.0
        && d0 < MAX_TARGET_DISTANCE
        && v0.dot(&source.direction.to_vec()) > BEARING_COS
}
