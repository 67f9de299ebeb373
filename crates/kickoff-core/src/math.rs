use crate::Vector2;

/// Normalize a vector, returning the unit vector together with the original length.
///
/// A vector of exactly zero length yields `(zero, 0.0)`, so callers should check the
/// length before relying on the direction.
pub fn safe_normalize(v: Vector2) -> (Vector2, f64) {
    let length = v.norm();
    if length == 0.0 {
        (Vector2::zeros(), 0.0)
    } else {
        (v / length, length)
    }
}

/// Move `a` half way towards `b`, snapping to `b` once within one unit.
pub fn avg(a: f64, b: f64) -> f64 {
    if (b - a).abs() < 1.0 {
        b
    } else {
        (a + b) / 2.0
    }
}

/// Distance between two points.
pub fn distance(a: &Vector2, b: &Vector2) -> f64 {
    (a - b).norm()
}
