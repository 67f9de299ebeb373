use kickoff_core::{clamp_to_ai_bounds, safe_normalize, Difficulty, PlayerId, Vector2};

use crate::{
    ball::Ball,
    consts::{
        CPU_PLAYER_WITH_BALL_BASE_SPEED, DRAG, DRIBBLE_DIST_X, HUMAN_PLAYER_WITHOUT_BALL_SPEED,
        HUMAN_PLAYER_WITH_BALL_SPEED, LEAD_PLAYER_BASE_SPEED, PLAYER_DEFAULT_SPEED,
        PLAYER_INTERCEPT_BALL_SPEED,
    },
    input::FrameInput,
    player::Player,
    target::{Goal, Target},
    targeting::cost,
    team::Team,
};

/// How far ahead of the carrier's teammates supporting players run.
const SUPPORT_DISTANCE: f64 = 400.0;
/// Furthest a goal-marking defender strays from the goal.
const GOAL_MARK_RANGE: f64 = 150.0;
/// Length of the probes a CPU carrier evaluates each frame.
const CARRY_PROBE_LENGTH: f64 = 3.0;
/// The intercept prediction stops once the ball is slower than this.
const INTERCEPT_MIN_BALL_SPEED: f64 = 0.5;

/// Where a player wants to go this frame and how fast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub target: Vector2,
    pub speed: f64,
}

impl Steering {
    pub fn new(target: Vector2, speed: f64) -> Self {
        Self { target, speed }
    }
}

/// Read-only view of the match that behaviors decide on.
pub struct BehaviorCtx<'a> {
    pub players: &'a [Player],
    pub ball: &'a Ball,
    pub goals: &'a [Goal; 2],
    pub teams: &'a [Team; 2],
    pub difficulty: &'a Difficulty,
    /// The player that takes the pending kick off, if the ball hasn't been touched
    /// since the last reset.
    pub kickoff_player: Option<PlayerId>,
    pub input: &'a FrameInput,
}

impl BehaviorCtx<'_> {
    fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }
}

/// What a player is doing this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    /// Moved by human input.
    HumanControlled,
    /// CPU player dribbling the ball.
    CarryingBall,
    /// Running ahead of a teammate that has the ball.
    SupportingCarrier,
    /// Pressing the opposing carrier from the given distance in front of it.
    Leading(f64),
    /// Guarding a player or goal while the other side has the ball.
    Marking(Target),
    /// Running to where the free ball will be.
    Chasing,
    /// Holding the formation column while the other side kicks off.
    KickoffWaiting,
    /// Walking back to the formation slot.
    Returning,
}

impl Behavior {
    /// Pick the behavior of player `id`. The first matching rule wins:
    ///
    /// 1. a human side's control player is always human controlled, except while
    ///    somebody else is about to kick off
    /// 2. while the ball is owned, the carrier dribbles, its teammates support it
    ///    when they're near the play, and opponents press or mark
    /// 3. while the ball is free, nearby players chase it; before kick off only the
    ///    kick off taker does, and everyone else holds position
    ///
    /// Players without anything to do return to their slot.
    pub fn select(ctx: &BehaviorCtx<'_>, id: PlayerId) -> Behavior {
        let player = ctx.player(id);
        let team = &ctx.teams[player.side.index()];
        let kickoff_pending = ctx.kickoff_player.is_some();
        let is_kickoff_player = ctx.kickoff_player == Some(id);

        if team.controls(id) && (!kickoff_pending || is_kickoff_player) {
            return Behavior::HumanControlled;
        }

        let ball_position = &ctx.ball.position;
        match ctx.ball.owner {
            Some(owner) if owner == id => Behavior::CarryingBall,
            Some(owner) if ctx.player(owner).side == player.side => {
                if player.is_active(ball_position) {
                    Behavior::SupportingCarrier
                } else {
                    Behavior::Returning
                }
            }
            Some(_) => match (player.lead, player.mark) {
                (Some(lead), _) => Behavior::Leading(lead),
                (None, Some(mark)) if mark.is_active(ctx.players, ctx.goals, ball_position) => {
                    Behavior::Marking(mark)
                }
                _ => Behavior::Returning,
            },
            None => {
                if is_kickoff_player || (!kickoff_pending && player.is_active(ball_position)) {
                    Behavior::Chasing
                } else if kickoff_pending {
                    Behavior::KickoffWaiting
                } else {
                    Behavior::Returning
                }
            }
        }
    }

    /// Work out where player `id` heads to under this behavior.
    pub fn steer(&self, ctx: &BehaviorCtx<'_>, id: PlayerId) -> Steering {
        let player = ctx.player(id);
        match *self {
            Behavior::HumanControlled => human_controlled(ctx, player),
            Behavior::CarryingBall => carrying_ball(ctx, player),
            Behavior::SupportingCarrier => supporting_carrier(ctx, player),
            Behavior::Leading(lead) => leading(ctx, player, lead),
            Behavior::Marking(mark) => marking(ctx, player, mark),
            Behavior::Chasing => chasing(ctx, player),
            Behavior::KickoffWaiting => Steering::new(
                Vector2::new(player.home.x, player.position.y),
                PLAYER_DEFAULT_SPEED,
            ),
            Behavior::Returning => Steering::new(player.home, PLAYER_DEFAULT_SPEED),
        }
    }
}

fn human_controlled(ctx: &BehaviorCtx<'_>, player: &Player) -> Steering {
    let speed = if ctx.ball.owner == Some(player.id) {
        HUMAN_PLAYER_WITH_BALL_SPEED
    } else {
        HUMAN_PLAYER_WITHOUT_BALL_SPEED
    };
    let movement = ctx.input.side(player.side).movement;
    Steering::new(player.position + movement * speed, speed)
}

/// Probe five headings around the current one and take the cheapest, preferring
/// smaller turns.
fn carrying_ball(ctx: &BehaviorCtx<'_>, player: &Player) -> Steering {
    let target = (-2..=2)
        .map(|turn: i32| {
            let probe = player.position + (player.direction + turn).to_vec() * CARRY_PROBE_LENGTH;
            let c = cost(&probe, player.side, turn.abs() as f64, ctx.players);
            (c, probe)
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, probe)| probe)
        .unwrap_or(player.home);

    Steering::new(
        target,
        CPU_PLAYER_WITH_BALL_BASE_SPEED + ctx.difficulty.speed_boost,
    )
}

/// Half way between the formation slot and a point well ahead of the ball.
fn supporting_carrier(ctx: &BehaviorCtx<'_>, player: &Player) -> Steering {
    let ball = &ctx.ball.position;
    let ahead = ball.y + SUPPORT_DISTANCE * player.side.sign();
    let target = Vector2::new((ball.x + player.home.x) / 2.0, (ahead + player.home.y) / 2.0);
    Steering::new(target, PLAYER_DEFAULT_SPEED)
}

fn leading(ctx: &BehaviorCtx<'_>, player: &Player, lead: f64) -> Steering {
    let mut speed = LEAD_PLAYER_BASE_SPEED;
    let Some(carrier) = ctx.ball.owner.map(|id| ctx.player(id)) else {
        return Steering::new(player.home, PLAYER_DEFAULT_SPEED);
    };

    let target = clamp_to_ai_bounds(carrier.position + carrier.direction.to_vec() * lead);
    if ctx.teams[player.side.opposite().index()].human {
        speed += ctx.difficulty.speed_boost;
    }
    Steering::new(target, speed)
}

fn marking(ctx: &BehaviorCtx<'_>, player: &Player, mark: Target) -> Steering {
    let ball = ctx.ball.position;
    if ctx.teams[player.side.index()].human {
        return Steering::new(ball, PLAYER_DEFAULT_SPEED);
    }

    // Stand between the ball and whatever is marked
    let mark_position = mark.position(ctx.players, ctx.goals);
    let (vec, length) = safe_normalize(ball - mark_position);
    let length = if mark.is_goal() {
        length.min(GOAL_MARK_RANGE)
    } else {
        length / 2.0
    };
    Steering::new(mark_position + vec * length, PLAYER_DEFAULT_SPEED)
}

/// Run to the first point on the ball's path the player can reach in time, or to
/// where the ball comes to rest.
fn chasing(ctx: &BehaviorCtx<'_>, player: &Player) -> Steering {
    let mut target = ctx.ball.position;
    let mut vel = ctx.ball.velocity;
    let mut frame = 0.0;

    while (target - player.position).norm() > PLAYER_INTERCEPT_BALL_SPEED * frame + DRIBBLE_DIST_X
        && vel.norm() > INTERCEPT_MIN_BALL_SPEED
    {
        target += vel;
        vel *= DRAG;
        frame += 1.0;
    }

    Steering::new(target, PLAYER_INTERCEPT_BALL_SPEED)
}
