// Distances are in pitch units, speeds in units per frame and timers in frames.

/// Formation slots of the home side. The away side mirrors them through the centre.
pub const PLAYER_START_POS: [[f64; 2]; 7] = [
    [350.0, 550.0],
    [650.0, 450.0],
    [200.0, 850.0],
    [500.0, 750.0],
    [800.0, 950.0],
    [350.0, 1250.0],
    [650.0, 1150.0],
];

/// Maximum random offset applied to each formation coordinate at kick off.
pub const FORMATION_JITTER: i32 = 32;

pub const ROSTER_SIZE: usize = 2 * PLAYER_START_POS.len();

pub const LEAD_DISTANCE_1: f64 = 10.0;
pub const LEAD_DISTANCE_2: f64 = 50.0;

pub const DRIBBLE_DIST_X: f64 = 18.0;
pub const DRIBBLE_DIST_Y: f64 = 16.0;

pub const PLAYER_DEFAULT_SPEED: f64 = 2.0;
pub const CPU_PLAYER_WITH_BALL_BASE_SPEED: f64 = 2.6;
pub const PLAYER_INTERCEPT_BALL_SPEED: f64 = 2.75;
pub const LEAD_PLAYER_BASE_SPEED: f64 = 2.9;
pub const HUMAN_PLAYER_WITH_BALL_SPEED: f64 = 3.0;
pub const HUMAN_PLAYER_WITHOUT_BALL_SPEED: f64 = 3.3;

pub const DRAG: f64 = 0.98;
pub const KICK_STRENGTH: f64 = 11.5;
/// Speed of the ball when it is dribbled out of play.
pub const LOOSE_BALL_SPEED: f64 = 3.0;

/// Cooldown of a player who just lost the ball.
pub const TACKLED_COOLDOWN: i32 = 60;
/// Cooldown of a player who just kicked the ball.
pub const KICKER_COOLDOWN: i32 = 10;

/// Frames between a goal and the following kick off.
pub const GOAL_CELEBRATION_FRAMES: i32 = 60;
/// The game ends once a side reaches this score.
pub const WINNING_SCORE: u32 = 9;

/// Maximum distance the camera focus moves per frame.
pub const CAMERA_MAX_SPEED: f64 = 8.0;

pub const WINDOW_W: f64 = 800.0;
pub const WINDOW_H: f64 = 480.0;
