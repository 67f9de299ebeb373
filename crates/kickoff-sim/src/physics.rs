use kickoff_core::{
    Bounds, Vector2, GOAL_BOUNDS_X, GOAL_BOUNDS_Y, HALF_GOAL_W, HALF_LEVEL_H, HALF_LEVEL_W,
    HALF_PITCH_H, PITCH_BOUNDS_X, PITCH_BOUNDS_Y,
};

use crate::consts::{DRAG, KICK_STRENGTH};

/// Advance one axis of the ball by one frame.
///
/// If the step would leave `bounds`, it is undone and the velocity reversed, so the
/// ball bounces one frame late rather than exactly at the wall. Drag applies either
/// way.
pub fn ball_physics(pos: f64, vel: f64, bounds: Bounds) -> (f64, f64) {
    let mut pos = pos + vel;
    let mut vel = vel;

    if bounds.excludes(pos) {
        pos -= vel;
        vel = -vel;
    }

    (pos, vel * DRAG)
}

/// Walls the free ball bounces off, per axis. Once the ball is over the goal line
/// it is confined by the goal posts; while it is in line with the goal mouth it may
/// travel through the goal line into the net.
pub fn ball_bounds(pos: &Vector2) -> (Bounds, Bounds) {
    let bounds_x = if (pos.y - HALF_LEVEL_H).abs() > HALF_PITCH_H {
        GOAL_BOUNDS_X
    } else {
        PITCH_BOUNDS_X
    };

    let bounds_y = if (pos.x - HALF_LEVEL_W).abs() < HALF_GOAL_W {
        GOAL_BOUNDS_Y
    } else {
        PITCH_BOUNDS_Y
    };

    (bounds_x, bounds_y)
}

/// Number of frames a kicked ball needs to cover `distance`. Gives up once the ball
/// is too slow to be worth following.
pub fn steps(distance: f64) -> u32 {
    let mut distance = distance;
    let mut vel = KICK_STRENGTH;
    let mut steps = 0;

    while distance > 0.0 && vel > 0.25 {
        distance -= vel;
        vel *= DRAG;
        steps += 1;
    }

    steps
}
