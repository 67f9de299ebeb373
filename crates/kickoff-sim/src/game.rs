use kickoff_core::{
    distance, safe_normalize, Difficulty, MatchOptions, PlayerId, Side, Vector2, HALF_LEVEL_H,
    HALF_LEVEL_W, HALF_PITCH_H, LEVEL_H, LEVEL_W,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    ball::{Ball, BallCtx},
    behavior::{Behavior, BehaviorCtx},
    consts::{
        CAMERA_MAX_SPEED, FORMATION_JITTER, GOAL_CELEBRATION_FRAMES, PLAYER_START_POS,
        ROSTER_SIZE, WINDOW_H, WINDOW_W, WINNING_SCORE,
    },
    input::FrameInput,
    player::Player,
    roles::{assign_roles, clear_assignments},
    sound::{SoundEffect, SoundSink},
    target::Goal,
    team::Team,
};

/// Offset of the kick off spot from the centre, towards each side's half.
const KICKOFF_OFFSET: f64 = 30.0;

/// A single match: both teams, the ball and the scoreboard.
///
/// The match is stepped one frame at a time with [`Match::update`]. Everything that
/// happens in a frame is decided by the current state, the input of that frame and
/// the seed the match was created with.
#[derive(Debug, Clone)]
pub struct Match {
    options: MatchOptions,
    difficulty: Difficulty,
    rng: StdRng,
    /// The roster, ordered by formation slot and then by side, so player `2i` is
    /// the home player in slot `i` and `2i + 1` its away counterpart.
    players: Vec<Player>,
    goals: [Goal; 2],
    teams: [Team; 2],
    ball: Ball,
    kickoff_player: Option<PlayerId>,
    /// Counts down from the moment a goal is scored to the next kick off.
    score_timer: i32,
    /// The side that scored last. The other side kicks off.
    scoring_side: Side,
    camera_focus: Vector2,
    debug_shoot_target: Option<Vector2>,
    frame: u64,
}

impl Match {
    pub fn new(options: MatchOptions) -> Self {
        log::info!(
            "New match: difficulty {}, human home {}, human away {}, seed {}",
            options.difficulty,
            options.human[0],
            options.human[1],
            options.seed
        );

        let mut game = Self {
            difficulty: options.difficulty.settings(),
            rng: StdRng::seed_from_u64(options.seed),
            players: Vec::with_capacity(ROSTER_SIZE),
            goals: Goal::pair(),
            teams: [
                Team::new(options.human[0], PlayerId::new(0)),
                Team::new(options.human[1], PlayerId::new(1)),
            ],
            ball: Ball::new(),
            kickoff_player: None,
            score_timer: 0,
            // Home kicks off first
            scoring_side: Side::Away,
            camera_focus: Vector2::new(HALF_LEVEL_W, HALF_LEVEL_H),
            debug_shoot_target: None,
            frame: 0,
            options,
        };
        game.reset();
        game
    }

    /// Line both teams up for a kick off. Scores are kept.
    pub fn reset(&mut self) {
        let rng = &mut self.rng;
        let mut jitter = |v: f64| v + rng.gen_range(-FORMATION_JITTER..=FORMATION_JITTER) as f64;

        self.players.clear();
        for [x, y] in PLAYER_START_POS {
            for side in Side::ALL {
                let (slot_x, slot_y) = match side {
                    Side::Home => (x, y),
                    Side::Away => (LEVEL_W - x, LEVEL_H - y),
                };
                let home = Vector2::new(jitter(slot_x), jitter(slot_y));
                let id = self.players.len();
                let peer = PlayerId::new(ROSTER_SIZE - 1 - id);
                self.players.push(Player::new(PlayerId::new(id), side, home, peer));
            }
        }

        for side in Side::ALL {
            self.teams[side.index()].active_control_player = PlayerId::new(side.index());
        }

        let kicker = self.scoring_side.opposite();
        let kicker_x = HALF_LEVEL_W - KICKOFF_OFFSET + 2.0 * KICKOFF_OFFSET * kicker.index() as f64;
        self.players[kicker.index()].position = Vector2::new(kicker_x, HALF_LEVEL_H);
        self.kickoff_player = Some(PlayerId::new(kicker.index()));

        self.ball = Ball::new();
        self.camera_focus = self.ball.position;
        self.debug_shoot_target = None;

        log::info!("Kick off by the {} side ({} - {})", kicker, self.teams[0].score, self.teams[1].score);
    }

    /// Step the match by one frame.
    pub fn update(&mut self, input: &FrameInput, sound: &mut dyn SoundSink) {
        self.frame += 1;
        self.update_score(sound);

        clear_assignments(&mut self.players);
        self.debug_shoot_target = None;

        if let Some(owner) = self.ball.owner {
            assign_roles(&mut self.players, owner.index(), &self.goals, &self.teams, &self.difficulty);
            self.kickoff_player = None;
        }

        // Players see the moves of those before them in the roster
        for i in 0..self.players.len() {
            self.players[i].timer = self.players[i].timer.saturating_sub(1);
            let id = self.players[i].id;
            let ctx = BehaviorCtx {
                players: &self.players,
                ball: &self.ball,
                goals: &self.goals,
                teams: &self.teams,
                difficulty: &self.difficulty,
                kickoff_player: self.kickoff_player,
                input,
            };
            let steering = Behavior::select(&ctx, id).steer(&ctx, id);
            self.players[i].advance(steering, &self.ball.position);
        }

        let mut shoot = [
            self.teams[0].human && input.teams[0].shoot,
            self.teams[1].human && input.teams[1].shoot,
        ];
        let mut ctx = BallCtx {
            players: &mut self.players,
            teams: &mut self.teams,
            goals: &self.goals,
            difficulty: &self.difficulty,
            shoot: &mut shoot,
            sound: &mut *sound,
        };
        self.debug_shoot_target = self.ball.update(&mut ctx);

        // A press that didn't kick the ball switches to the best placed player
        for side in Side::ALL {
            if shoot[side.index()] {
                self.switch_control(side);
            }
        }

        self.update_camera();
    }

    fn update_score(&mut self, sound: &mut dyn SoundSink) {
        self.score_timer = self.score_timer.saturating_sub(1);

        if self.score_timer == 0 {
            self.reset();
        } else if self.score_timer < 0 && (self.ball.position.y - HALF_LEVEL_H).abs() > HALF_PITCH_H {
            sound.play_effect(SoundEffect::Goal);
            self.scoring_side = if self.ball.position.y < HALF_LEVEL_H {
                Side::Home
            } else {
                Side::Away
            };
            self.teams[self.scoring_side.index()].score += 1;
            self.score_timer = GOAL_CELEBRATION_FRAMES;
            log::info!(
                "Goal for the {} side ({} - {})",
                self.scoring_side,
                self.teams[0].score,
                self.teams[1].score
            );
        }
    }

    /// Give control of `side` to its player nearest the ball. While the ball is
    /// owned, players between the ball and their own goal count as half as far.
    fn switch_control(&mut self, side: Side) {
        let ball = self.ball.position;
        let owned = self.ball.owner.is_some();
        let weighted = |p: &Player| {
            let d = distance(&p.position, &ball);
            if owned && (p.position.y - ball.y) * side.sign() < 0.0 {
                d / 2.0
            } else {
                d
            }
        };

        let nearest = self
            .players
            .iter()
            .filter(|p| p.side == side)
            .min_by(|a, b| weighted(a).total_cmp(&weighted(b)))
            .map(|p| p.id);

        if let Some(id) = nearest {
            log::debug!("The {} side switched control to player {}", side, id);
            self.teams[side.index()].active_control_player = id;
        }
    }

    /// Move the camera towards the ball, no faster than the ball can usually go.
    fn update_camera(&mut self) {
        let (vec, distance) = safe_normalize(self.camera_focus - self.ball.position);
        if distance > 0.0 {
            self.camera_focus -= vec * distance.min(CAMERA_MAX_SPEED);
        }
    }

    /// Top left corner of the visible part of the level, kept inside the level.
    pub fn viewport_offset(&self) -> Vector2 {
        Vector2::new(
            (self.camera_focus.x - WINDOW_W / 2.0).clamp(0.0, LEVEL_W - WINDOW_W),
            (self.camera_focus.y - WINDOW_H / 2.0).clamp(0.0, LEVEL_H - WINDOW_H),
        )
    }

    /// Whether the winning goal has just been celebrated and the match should end
    /// instead of kicking off again.
    pub fn is_finished(&self) -> bool {
        self.score_timer == 1 && self.scores().into_iter().max() == Some(WINNING_SCORE)
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutable access to the roster, for setting up situations.
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Mutable access to the ball, for setting up situations.
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn goals(&self) -> &[Goal; 2] {
        &self.goals
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn scores(&self) -> [u32; 2] {
        [self.teams[0].score, self.teams[1].score]
    }

    pub fn kickoff_player(&self) -> Option<PlayerId> {
        self.kickoff_player
    }

    /// Let play start without waiting for the kick off.
    pub fn clear_kickoff(&mut self) {
        self.kickoff_player = None;
    }

    pub fn score_timer(&self) -> i32 {
        self.score_timer
    }

    pub fn scoring_side(&self) -> Side {
        self.scoring_side
    }

    pub fn camera_focus(&self) -> Vector2 {
        self.camera_focus
    }

    pub fn debug_shoot_target(&self) -> Option<Vector2> {
        self.debug_shoot_target
    }

    /// Number of frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::SoundLog;
    use approx::assert_relative_eq;
    use kickoff_core::centre_spot;

    #[test]
    fn test_roster_layout() {
        let game = Match::new(MatchOptions::cpu_only(7));
        let players = game.players();
        assert_eq!(players.len(), ROSTER_SIZE);

        for (i, p) in players.iter().enumerate() {
            assert_eq!(p.id.index(), i);
            assert_eq!(p.side, Side::from_index(i % 2).unwrap());
            assert_eq!(p.peer.index(), ROSTER_SIZE - 1 - i);
            assert_ne!(players[p.peer.index()].side, p.side);

            let [x, y] = PLAYER_START_POS[i / 2];
            let (slot_x, slot_y) = if i % 2 == 0 { (x, y) } else { (LEVEL_W - x, LEVEL_H - y) };
            let jitter = FORMATION_JITTER as f64;
            assert!((p.home.x - slot_x).abs() <= jitter);
            assert!((p.home.y - slot_y).abs() <= jitter);
        }

        assert_eq!(game.team(Side::Home).active_control_player, PlayerId::new(0));
        assert_eq!(game.team(Side::Away).active_control_player, PlayerId::new(1));
        assert_eq!(game.kickoff_player(), Some(PlayerId::new(0)));
        assert_eq!(game.player(PlayerId::new(0)).position, Vector2::new(470.0, 700.0));
        assert_eq!(game.ball().position, centre_spot());
        assert_eq!(game.camera_focus(), centre_spot());
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = Match::new(MatchOptions::cpu_only(3));
        let mut b = Match::new(MatchOptions::cpu_only(3));
        let c = Match::new(MatchOptions::cpu_only(4));
        assert!(a.players().iter().zip(c.players()).any(|(p, q)| p.home != q.home));

        let mut sound = SoundLog::new();
        for _ in 0..300 {
            a.update(&FrameInput::none(), &mut sound);
            b.update(&FrameInput::none(), &mut sound);
        }
        for (p, q) in a.players().iter().zip(b.players()) {
            assert_eq!(p.position, q.position);
        }
        assert_eq!(a.ball().position, b.ball().position);
    }

    #[test]
    fn test_goal_and_kickoff_by_other_side() {
        let mut game = Match::new(MatchOptions::cpu_only(11));
        let mut sound = SoundLog::new();
        game.ball_mut().position = Vector2::new(500.0, 50.0);

        game.update(&FrameInput::none(), &mut sound);
        assert_eq!(game.scores(), [1, 0]);
        assert_eq!(game.scoring_side(), Side::Home);
        assert_eq!(game.score_timer(), GOAL_CELEBRATION_FRAMES);
        assert_eq!(sound.count(SoundEffect::Goal), 1);

        for _ in 0..GOAL_CELEBRATION_FRAMES - 1 {
            game.update(&FrameInput::none(), &mut sound);
        }
        // The ball is still in the net but only one goal counts
        assert_eq!(game.scores(), [1, 0]);
        assert_eq!(game.score_timer(), 1);

        game.update(&FrameInput::none(), &mut sound);
        assert_eq!(game.kickoff_player(), Some(PlayerId::new(1)));
        assert_eq!(game.ball().position, centre_spot());
        let kicker = game.player(PlayerId::new(1)).position;
        assert!(distance(&kicker, &Vector2::new(530.0, 700.0)) <= 3.0);
        assert_eq!(sound.count(SoundEffect::Goal), 1);
    }

    #[test]
    fn test_finished_on_winning_goal() {
        let mut game = Match::new(MatchOptions::cpu_only(5));
        game.teams[1].score = WINNING_SCORE - 1;
        game.ball_mut().position = Vector2::new(500.0, 1360.0);
        let mut sound = SoundLog::new();

        game.update(&FrameInput::none(), &mut sound);
        assert_eq!(game.scores(), [0, WINNING_SCORE]);
        assert!(!game.is_finished());
        for _ in 0..GOAL_CELEBRATION_FRAMES - 1 {
            game.update(&FrameInput::none(), &mut sound);
        }
        assert!(game.is_finished());
    }

    #[test]
    fn test_timers_stop_at_the_floor() {
        let mut game = Match::new(MatchOptions::cpu_only(12));
        for p in game.players_mut() {
            p.timer = i32::MIN;
        }
        game.ball_mut().timer = i32::MIN;
        game.score_timer = i32::MIN;

        game.update(&FrameInput::none(), &mut SoundLog::new());
        assert!(game.players().iter().all(|p| p.timer == i32::MIN));
        assert_eq!(game.ball().timer, i32::MIN);
        assert_eq!(game.score_timer(), i32::MIN);
    }

    #[test]
    fn test_camera_follows_ball_slowly() {
        let mut game = Match::new(MatchOptions::cpu_only(1));
        game.ball_mut().position = Vector2::new(500.0, 300.0);
        game.update_camera();
        assert_relative_eq!(game.camera_focus(), Vector2::new(500.0, 692.0), epsilon = 1e-9);

        game.ball_mut().position = Vector2::new(503.0, 692.0);
        game.update_camera();
        assert_relative_eq!(game.camera_focus(), Vector2::new(503.0, 692.0), epsilon = 1e-9);
    }

    #[test]
    fn test_viewport_stays_inside_level() {
        let mut game = Match::new(MatchOptions::cpu_only(1));
        assert_eq!(game.viewport_offset(), Vector2::new(100.0, 460.0));
        game.camera_focus = Vector2::new(0.0, 0.0);
        assert_eq!(game.viewport_offset(), Vector2::new(0.0, 0.0));
        game.camera_focus = Vector2::new(LEVEL_W, LEVEL_H);
        assert_eq!(game.viewport_offset(), Vector2::new(200.0, 920.0));
    }

    #[test]
    fn test_switch_control_prefers_defensive_side_when_owned() {
        let mut game = Match::new(MatchOptions::two_players(2));
        for (i, p) in game.players.iter_mut().enumerate() {
            p.position = Vector2::new(100.0 + 10.0 * i as f64, 100.0);
        }
        game.ball.position = Vector2::new(500.0, 700.0);
        // Home player 2 is nearer, but player 4 is between the ball and its own goal
        game.players[2].position = Vector2::new(500.0, 640.0);
        game.players[4].position = Vector2::new(500.0, 800.0);

        game.switch_control(Side::Home);
        assert_eq!(game.team(Side::Home).active_control_player, PlayerId::new(2));

        game.ball.owner = Some(PlayerId::new(1));
        game.switch_control(Side::Home);
        assert_eq!(game.team(Side::Home).active_control_player, PlayerId::new(4));
    }
}
