use kickoff_core::{Direction, PlayerId, Side, Vector2};
use serde::Serialize;

use crate::{game::Match, target::Goal};

/// Everything a renderer needs to draw one frame of a match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub frame: u64,
    /// Players in roster order.
    pub players: Vec<PlayerView>,
    pub ball: BallView,
    pub goals: [Goal; 2],
    /// Players and ball from back to front. Shadows go after all of them, and the
    /// top goal before and the bottom goal after everything else.
    pub draw_order: Vec<Entity>,
    pub scores: [u32; 2],
    pub camera_focus: Vector2,
    /// Top left corner of the 800x480 window, in level coordinates.
    pub viewport_offset: Vector2,
    /// The player each human side is moving, for the control arrow.
    pub control_players: [Option<PlayerId>; 2],
    /// Whether the "goal" banner is up.
    pub goal_scored: bool,
    pub debug_shoot_target: Option<Vector2>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub side: Side,
    pub position: Vector2,
    pub direction: Direction,
    /// Run cycle frame, `0` when standing.
    pub sprite_frame: u8,
    pub lead: Option<f64>,
    pub debug_target: Option<Vector2>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BallView {
    pub position: Vector2,
    pub shadow: Vector2,
    pub owner: Option<PlayerId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Player(PlayerId),
    Ball,
}

impl Match {
    pub fn snapshot(&self) -> MatchSnapshot {
        let players: Vec<PlayerView> = self
            .players()
            .iter()
            .map(|p| PlayerView {
                id: p.id,
                side: p.side,
                position: p.position,
                direction: p.direction,
                sprite_frame: p.sprite_frame(),
                lead: p.lead,
                debug_target: p.debug_target,
            })
            .collect();

        let ball = self.ball();
        let mut draw_order: Vec<(f64, Entity)> = std::iter::once((ball.position.y, Entity::Ball))
            .chain(players.iter().map(|p| (p.position.y, Entity::Player(p.id))))
            .collect();
        // Stable, so ties keep the ball behind the players
        draw_order.sort_by(|a, b| a.0.total_cmp(&b.0));

        let control_players = Side::ALL.map(|side| {
            let team = self.team(side);
            team.human.then_some(team.active_control_player)
        });

        MatchSnapshot {
            frame: self.frame(),
            players,
            ball: BallView {
                position: ball.position,
                shadow: ball.shadow,
                owner: ball.owner,
            },
            goals: *self.goals(),
            draw_order: draw_order.into_iter().map(|(_, e)| e).collect(),
            scores: self.scores(),
            camera_focus: self.camera_focus(),
            viewport_offset: self.viewport_offset(),
            control_players,
            goal_scored: self.score_timer() > 0,
            debug_shoot_target: self.debug_shoot_target(),
        }
    }
}
