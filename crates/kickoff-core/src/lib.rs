mod compass;
mod math;
mod pitch;
mod player_id;
mod settings;
mod side;

pub use compass::*;
pub use math::*;
pub use pitch::*;
pub use player_id::PlayerId;
pub use settings::*;
pub use side::Side;

/// Position, velocity and direction vectors, in pitch units (one unit is one pixel
/// of the level image).
pub type Vector2 = nalgebra::Vector2<f64>;
