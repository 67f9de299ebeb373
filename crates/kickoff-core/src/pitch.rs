use serde::{Deserialize, Serialize};

use crate::{Side, Vector2};

// Level dimensions, in pitch units. The level is the full scrollable area,
// the pitch is the playable rectangle inside it.
pub const LEVEL_W: f64 = 1000.0;
pub const LEVEL_H: f64 = 1400.0;
pub const HALF_LEVEL_W: f64 = LEVEL_W / 2.0;
pub const HALF_LEVEL_H: f64 = LEVEL_H / 2.0;

pub const HALF_PITCH_W: f64 = 442.0;
pub const HALF_PITCH_H: f64 = 622.0;

pub const GOAL_WIDTH: f64 = 186.0;
pub const GOAL_DEPTH: f64 = 20.0;
pub const HALF_GOAL_W: f64 = GOAL_WIDTH / 2.0;

pub const PITCH_BOUNDS_X: Bounds = Bounds::new(HALF_LEVEL_W - HALF_PITCH_W, HALF_LEVEL_W + HALF_PITCH_W);
pub const PITCH_BOUNDS_Y: Bounds = Bounds::new(HALF_LEVEL_H - HALF_PITCH_H, HALF_LEVEL_H + HALF_PITCH_H);
pub const GOAL_BOUNDS_X: Bounds = Bounds::new(HALF_LEVEL_W - HALF_GOAL_W, HALF_LEVEL_W + HALF_GOAL_W);
pub const GOAL_BOUNDS_Y: Bounds = Bounds::new(
    HALF_LEVEL_H - HALF_PITCH_H - GOAL_DEPTH,
    HALF_LEVEL_H + HALF_PITCH_H + GOAL_DEPTH,
);

pub const PITCH_RECT: Rect = Rect::new(
    PITCH_BOUNDS_X.lo,
    PITCH_BOUNDS_Y.lo,
    HALF_PITCH_W * 2.0,
    HALF_PITCH_H * 2.0,
);
pub const GOAL_0_RECT: Rect = Rect::new(GOAL_BOUNDS_X.lo, GOAL_BOUNDS_Y.lo, GOAL_WIDTH, GOAL_DEPTH);
pub const GOAL_1_RECT: Rect = Rect::new(
    GOAL_BOUNDS_X.lo,
    GOAL_BOUNDS_Y.hi - GOAL_DEPTH,
    GOAL_WIDTH,
    GOAL_DEPTH,
);

/// Movement limits for CPU players chasing a lead position.
pub const AI_MIN_X: f64 = 78.0;
pub const AI_MAX_X: f64 = LEVEL_W - 78.0;
pub const AI_MIN_Y: f64 = 98.0;
pub const AI_MAX_Y: f64 = LEVEL_H - 98.0;

/// A closed interval on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lo: f64,
    pub hi: f64,
}

impl Bounds {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Whether `value` lies strictly outside the interval.
    pub fn excludes(&self, value: f64) -> bool {
        value < self.lo || value > self.hi
    }
}

/// An axis-aligned rectangle with pixel semantics: the left and top edges are
/// inside, the right and bottom edges are not.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Whether a point is inside the area where the ball can be dribbled: the pitch
/// itself or either goal mouth.
pub fn on_pitch(x: f64, y: f64) -> bool {
    PITCH_RECT.contains(x, y) || GOAL_0_RECT.contains(x, y) || GOAL_1_RECT.contains(x, y)
}

/// Whether a player may stand at `(x, y)`. Players can run around the pitch
/// surrounds, but not behind the goals.
pub fn allow_movement(x: f64, y: f64) -> bool {
    let dx = (x - HALF_LEVEL_W).abs();
    let dy = (y - HALF_LEVEL_H).abs();
    if dx > HALF_LEVEL_W {
        false
    } else if dx < HALF_GOAL_W + 20.0 {
        dy < HALF_PITCH_H
    } else {
        dy < HALF_LEVEL_H
    }
}

/// Clamp a point to the CPU movement limits.
pub fn clamp_to_ai_bounds(p: Vector2) -> Vector2 {
    Vector2::new(p.x.clamp(AI_MIN_X, AI_MAX_X), p.y.clamp(AI_MIN_Y, AI_MAX_Y))
}

/// Centre of the goal that `side` attacks.
pub fn goal_position(side: Side) -> Vector2 {
    match side {
        Side::Home => Vector2::new(HALF_LEVEL_W, 0.0),
        Side::Away => Vector2::new(HALF_LEVEL_W, LEVEL_H),
    }
}

/// The point a side's positional cost is measured against: just in front of the
/// goal it defends.
pub fn own_goal_anchor(side: Side) -> Vector2 {
    match side {
        Side::Home => Vector2::new(HALF_LEVEL_W, LEVEL_H - 78.0),
        Side::Away => Vector2::new(HALF_LEVEL_W, 78.0),
    }
}

/// Pitch centre, where the ball is placed for kick off.
pub fn centre_spot() -> Vector2 {
    Vector2::new(HALF_LEVEL_W, HALF_LEVEL_H)
}
