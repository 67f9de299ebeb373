use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::Vector2;

/// Sine over compass units: a full turn is 8 units, so `sin(2.0) == 1.0`.
pub fn sin(x: f64) -> f64 {
    (x * PI / 4.0).sin()
}

/// Cosine over compass units, defined as a quarter turn (2 units) ahead of [`sin`].
pub fn cos(x: f64) -> f64 {
    sin(x + 2.0)
}

/// One of the 8 compass headings, always in `0..8`. `0` points up the pitch (towards
/// negative y), and the index increases clockwise:
///
/// ```
/// # use kickoff_core::Direction;
/// let d = Direction::new(7) + 2;
/// assert_eq!(d.index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Direction(u8);

impl Direction {
    pub const UP: Direction = Direction(0);
    pub const RIGHT: Direction = Direction(2);
    pub const DOWN: Direction = Direction(4);
    pub const LEFT: Direction = Direction(6);

    /// All headings in index order.
    pub const ALL: [Direction; 8] = [
        Direction(0),
        Direction(1),
        Direction(2),
        Direction(3),
        Direction(4),
        Direction(5),
        Direction(6),
        Direction(7),
    ];

    /// Create a direction from any integer, reducing it modulo 8.
    pub fn new(n: i32) -> Self {
        Direction(n.rem_euclid(8) as u8)
    }

    /// Get the heading index in `0..8`.
    pub fn index(&self) -> u8 {
        self.0
    }

    /// Unit vector for this heading.
    pub fn to_vec(&self) -> Vector2 {
        angle_to_vec(self.0 as f64)
    }

    /// Quantize a vector to the nearest heading.
    pub fn from_vec(v: &Vector2) -> Self {
        vec_to_angle(v)
    }

    /// Signed number of steps from `self` to `other`, reduced to `0..8`.
    pub fn steps_to(&self, other: Direction) -> u8 {
        (other.0 as i32 - self.0 as i32).rem_euclid(8) as u8
    }
}

/// Vector pointing along a compass heading given in (possibly fractional or out of
/// range) compass units.
pub fn angle_to_vec(angle: f64) -> Vector2 {
    Vector2::new(sin(angle), -cos(angle))
}

/// Nearest compass heading for a vector. Exact half-way bearings round towards the
/// next clockwise heading.
pub fn vec_to_angle(v: &Vector2) -> Direction {
    let units = 4.0 * v.x.atan2(-v.y) / PI + 8.5;
    Direction::new(units.floor() as i32)
}

impl std::ops::Add<i32> for Direction {
    type Output = Self;

    fn add(self, steps: i32) -> Self {
        Direction::new(self.0 as i32 + steps)
    }
}

impl std::ops::Sub<i32> for Direction {
    type Output = Self;

    fn sub(self, steps: i32) -> Self {
        Direction::new(self.0 as i32 - steps)
    }
}

impl std::ops::AddAssign<i32> for Direction {
    fn add_assign(&mut self, steps: i32) {
        *self = *self + steps;
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        const NAMES: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
        write!(f, "{}", NAMES[self.0 as usize])
    }
}
