//! Match engine for a two-team arcade football game.
//!
//! A [`Match`] holds fourteen players, a ball and two goals and is advanced one
//! frame at a time. Human sides are driven by a [`FrameInput`] per frame, everything
//! else by the CPU. Sound requests go to a [`SoundSink`], and [`Match::snapshot`]
//! gives renderers what they need to draw the frame.
//!
//! ## Usage
//!
//! ```no_run
//! use kickoff_core::MatchOptions;
//! use kickoff_sim::{FrameInput, Match, NullSink};
//!
//! let mut game = Match::new(MatchOptions::cpu_only(42));
//! for _ in 0..600 {
//!     game.update(&FrameInput::none(), &mut NullSink);
//! }
//! println!("{:?}", game.scores());
//! ```

mod ball;
mod behavior;
pub mod consts;
mod game;
mod input;
pub mod physics;
mod player;
mod roles;
mod session;
mod snapshot;
mod sound;
mod target;
pub mod targeting;
mod team;

pub use ball::{shot_target, Ball, BallCtx};
pub use behavior::{Behavior, BehaviorCtx, Steering};
pub use game::Match;
pub use input::{ButtonInput, EdgeTrigger, FrameInput, HeldKeys, InputSource, TeamInput};
pub use player::Player;
pub use roles::{assign_roles, clear_assignments};
pub use session::{MatchState, MenuControls, MenuInput, MenuPage, Session};
pub use snapshot::{BallView, Entity, MatchSnapshot, PlayerView};
pub use sound::{NullSink, SoundEffect, SoundLog, SoundSink};
pub use target::{Goal, Target};
pub use team::Team;
