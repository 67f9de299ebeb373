use std::mem;

use kickoff_core::{
    avg, centre_spot, distance, on_pitch, safe_normalize, Difficulty, PlayerId, Side, Vector2,
};
use serde::Serialize;

use crate::{
    consts::{
        DRIBBLE_DIST_X, DRIBBLE_DIST_Y, HUMAN_PLAYER_WITHOUT_BALL_SPEED, KICKER_COOLDOWN,
        KICK_STRENGTH, LOOSE_BALL_SPEED, TACKLED_COOLDOWN,
    },
    physics::{ball_bounds, ball_physics, steps},
    player::Player,
    sound::{SoundEffect, SoundSink},
    target::{Goal, Target},
    targeting::{cost, targetable},
    team::Team,
};

/// Lead iterations when a human passes to a teammate.
const HUMAN_PASS_REFINEMENTS: usize = 8;
/// How far ahead of the kicker a blind shot is aimed when looking for a receiver.
const BLIND_SHOT_REACH: f64 = 250.0;

/// Everything the ball touches during its update.
pub struct BallCtx<'a> {
    pub players: &'a mut [Player],
    pub teams: &'a mut [Team; 2],
    pub goals: &'a [Goal; 2],
    pub difficulty: &'a Difficulty,
    /// Unconsumed shoot presses of the human sides. A press used for a shot is reset
    /// to `false`.
    pub shoot: &'a mut [bool; 2],
    pub sound: &'a mut dyn SoundSink,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ball {
    pub position: Vector2,
    pub velocity: Vector2,
    pub owner: Option<PlayerId>,
    /// Frames until a CPU carrier may pass or shoot. Reset whenever the ball changes
    /// hands.
    pub timer: i32,
    /// Where the ball's shadow is drawn.
    pub shadow: Vector2,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    /// A motionless ball on the centre spot.
    pub fn new() -> Self {
        Self {
            position: centre_spot(),
            velocity: Vector2::zeros(),
            owner: None,
            timer: 0,
            shadow: centre_spot(),
        }
    }

    /// Whether `player` is close enough to take the ball and allowed to.
    pub fn collides(&self, player: &Player) -> bool {
        player.timer <= 0 && distance(&player.position, &self.position) <= DRIBBLE_DIST_X
    }

    /// Step the ball by one frame: move it, hand it over and let its carrier shoot.
    ///
    /// Returns the position of the carrier's preferred target, if it has one.
    pub fn update(&mut self, ctx: &mut BallCtx<'_>) -> Option<Vector2> {
        self.timer = self.timer.saturating_sub(1);

        match self.owner {
            Some(owner) => self.dribble(&mut ctx.players[owner.index()]),
            None => {
                let (bounds_x, bounds_y) = ball_bounds(&self.position);
                (self.position.x, self.velocity.x) =
                    ball_physics(self.position.x, self.velocity.x, bounds_x);
                (self.position.y, self.velocity.y) =
                    ball_physics(self.position.y, self.velocity.y, bounds_y);
            }
        }
        self.shadow = self.position;

        self.resolve_possession(ctx);

        let owner_id = self.owner?;
        let owner = &ctx.players[owner_id.index()];
        let side = owner.side;
        let human = ctx.teams[side.index()].human;

        let target = shot_target(owner, human, ctx.players, ctx.goals);
        let target_position = target.map(|t| t.position(ctx.players, ctx.goals));

        let do_shoot = if human {
            mem::take(&mut ctx.shoot[side.index()])
        } else {
            self.timer <= 0
                && target_position.is_some_and(|pos| {
                    cost(&pos, side, 0.0, ctx.players) < cost(&owner.position, side, 0.0, ctx.players)
                })
        };

        if do_shoot {
            self.shoot(owner_id, target, ctx);
        }

        target_position
    }

    /// Keep the ball at the carrier's feet. A ball dribbled off the pitch gets loose.
    fn dribble(&mut self, owner: &mut Player) {
        let facing = owner.direction.to_vec();
        let x = avg(self.position.x, owner.position.x + DRIBBLE_DIST_X * facing.x);
        let y = avg(self.position.y, owner.position.y + DRIBBLE_DIST_Y * facing.y);

        if on_pitch(x, y) {
            self.position = Vector2::new(x, y);
        } else {
            log::debug!("Player {} lost the ball off the pitch", owner.id);
            owner.timer = TACKLED_COOLDOWN;
            self.velocity = facing * LOOSE_BALL_SPEED;
            self.owner = None;
        }
    }

    /// Give the ball to any player in reach that isn't the carrier's teammate. When
    /// several are in reach the last one in roster order ends up with it.
    fn resolve_possession(&mut self, ctx: &mut BallCtx<'_>) {
        for i in 0..ctx.players.len() {
            let (id, side) = (ctx.players[i].id, ctx.players[i].side);
            let contested = match self.owner {
                Some(owner) => ctx.players[owner.index()].side != side,
                None => true,
            };
            if !contested || !self.collides(&ctx.players[i]) {
                continue;
            }

            if let Some(owner) = self.owner {
                log::debug!("Player {} tackled player {}", id, owner);
                ctx.players[owner.index()].timer = TACKLED_COOLDOWN;
            } else {
                log::debug!("Player {} took the ball", id);
            }
            self.timer = ctx.difficulty.holdoff_timer;
            ctx.teams[side.index()].active_control_player = id;
            self.owner = Some(id);
        }
    }

    /// Kick the ball towards `target`, or blindly along the carrier's facing when
    /// there is none.
    fn shoot(&mut self, owner_id: PlayerId, target: Option<Target>, ctx: &mut BallCtx<'_>) {
        ctx.sound.play_effect(SoundEffect::Kick);

        let owner = &ctx.players[owner_id.index()];
        let side = owner.side;
        let facing = owner.direction.to_vec();

        let (aim, receiver) = match target {
            Some(target) => {
                let human = ctx.teams[side.index()].human;
                let iterations = if human && !target.is_goal() {
                    HUMAN_PASS_REFINEMENTS
                } else {
                    1
                };
                let target_position = target.position(ctx.players, ctx.goals);

                // Aim ahead of the target by the distance a running player covers while
                // the ball is in flight
                let mut lead = 0.0;
                let mut aim = Vector2::zeros();
                for _ in 0..iterations {
                    let (vec, length) =
                        safe_normalize(target_position + facing * lead - self.position);
                    aim = vec;
                    lead = HUMAN_PLAYER_WITHOUT_BALL_SPEED * steps(length) as f64;
                }
                (aim, Some(target))
            }
            None => {
                let reach = self.position + facing * BLIND_SHOT_REACH;
                let receiver = nearest_teammate(ctx.players, side, &reach).map(Target::Player);
                (facing, receiver)
            }
        };

        log::debug!("Player {} kicked the ball towards {:?}", owner_id, receiver);

        if let Some(Target::Player(id)) = receiver {
            ctx.teams[side.index()].active_control_player = id;
        }
        ctx.players[owner_id.index()].timer = KICKER_COOLDOWN;
        self.velocity = aim * KICK_STRENGTH;
        self.owner = None;
    }
}

/// The teammate or goal `owner` would pass or shoot to: the nearest one it can
/// target. Ties go to players before the goal, then to roster order.
pub fn shot_target(owner: &Player, human: bool, players: &[Player], goals: &[Goal; 2]) -> Option<Target> {
    let side = owner.side;
    let teammates = players
        .iter()
        .filter(|p| p.side == side)
        .map(|p| (Target::Player(p.id), p.position));
    let goal = std::iter::once((Target::Goal(side), goals[side.index()].position));

    teammates
        .chain(goal)
        .filter(|(_, pos)| targetable(pos, side, owner, human, players))
        .map(|(target, pos)| (target, distance(&pos, &owner.position)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(target, _)| target)
}

fn nearest_teammate(players: &[Player], side: Side, point: &Vector2) -> Option<PlayerId> {
    players
        .iter()
        .filter(|p| p.side == side)
        .min_by(|a, b| distance(&a.position, point).total_cmp(&distance(&b.position, point)))
        .map(|p| p.id)
}
