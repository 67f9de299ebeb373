use approx::assert_relative_eq;
use kickoff_core::{
    allow_movement, distance, Direction, DifficultyLevel, MatchOptions, PlayerId, Side, Vector2,
    LEVEL_H, LEVEL_W,
};
use kickoff_sim::{consts::KICK_STRENGTH, FrameInput, Match, NullSink, SoundEffect, SoundLog, TeamInput};

/// Park every player in a column along the left touchline, far from the play.
fn clear_the_pitch(game: &mut Match) {
    for (i, p) in game.players_mut().iter_mut().enumerate() {
        p.position = Vector2::new(30.0, 100.0 + 80.0 * i as f64);
    }
}

fn shoot(side: Side) -> FrameInput {
    FrameInput::none().with(side, TeamInput::new(Vector2::zeros(), true))
}

#[test_log::test]
fn cpu_match_keeps_its_invariants() {
    for (seed, level) in [(1, DifficultyLevel::Hard), (2, DifficultyLevel::Medium), (3, DifficultyLevel::Easy)] {
        let mut game = Match::new(MatchOptions {
            difficulty: level,
            human: [false, false],
            seed,
        });
        let mut sound = SoundLog::new();

        for _ in 0..4000 {
            let owner_before = game.ball().owner;
            game.update(&FrameInput::none(), &mut sound);

            for p in game.players() {
                assert!(allow_movement(p.position.x, p.position.y), "player {} at {}", p.id, p.position);
            }
            let ball = game.ball().position;
            assert!((0.0..=LEVEL_W).contains(&ball.x) && (0.0..=LEVEL_H).contains(&ball.y));

            if let Some(owner) = game.ball().owner {
                // The carrier keeps the ball at its feet
                assert!(distance(&game.player(owner).position, &ball) < 40.0);
            }

            // Roles were handed out for the carrier at the start of the frame, unless
            // the frame started with a kick off
            if let (Some(owner), None) = (owner_before, game.kickoff_player()) {
                let attacking = game.player(owner).side;
                let mut goal_marks = 0;
                let mut leads = 0;
                for p in game.players() {
                    if p.side == attacking {
                        assert_eq!(p.mark, None);
                        assert_eq!(p.lead, None);
                    } else {
                        let mark = p.mark.expect("every defender marks something");
                        goal_marks += mark.is_goal() as usize;
                        leads += p.lead.is_some() as usize;
                    }
                }
                assert!(goal_marks <= 1);
                assert!(leads <= 2);
            }
        }

        assert!(sound.count(SoundEffect::Kick) > 0, "nobody kicked the ball with seed {}", seed);
    }
}

#[test_log::test]
fn ball_follows_the_dribbler() {
    let mut game = Match::new(MatchOptions::one_player(DifficultyLevel::Easy, 5));
    clear_the_pitch(&mut game);

    let carrier = PlayerId::new(0);
    {
        let p = &mut game.players_mut()[0];
        p.position = Vector2::new(500.0, 700.0);
        p.direction = Direction::UP;
    }
    let ball = game.ball_mut();
    ball.position = Vector2::new(500.0, 692.0);
    ball.owner = Some(carrier);

    for _ in 0..10 {
        game.update(&FrameInput::none(), &mut NullSink);
    }

    assert_eq!(game.ball().owner, Some(carrier));
    assert_eq!(game.kickoff_player(), None);
    assert_eq!(game.player(carrier).direction, Direction::UP);
    assert_relative_eq!(game.ball().position, Vector2::new(500.0, 684.0), epsilon = 1e-9);
    assert_eq!(game.ball().shadow, game.ball().position);
}

#[test_log::test]
fn ball_bounces_off_touchline_and_goal_post() {
    let mut game = Match::new(MatchOptions::cpu_only(6));

    game.ball_mut().position = Vector2::new(900.0, 300.0);
    game.ball_mut().velocity = Vector2::new(10.0, 0.0);
    for _ in 0..6 {
        game.update(&FrameInput::none(), &mut NullSink);
        assert!(game.ball().position.x <= 942.0);
    }
    assert!(game.ball().velocity.x < 0.0);
    assert!(game.ball().velocity.x.abs() < 10.0);
    assert_relative_eq!(game.ball().position.y, 300.0);

    // Inside the net the posts are the walls
    game.ball_mut().position = Vector2::new(580.0, 40.0);
    game.ball_mut().velocity = Vector2::new(5.0, 0.0);
    for _ in 0..4 {
        game.update(&FrameInput::none(), &mut NullSink);
        assert!(game.ball().position.x <= 593.0);
    }
    assert!(game.ball().velocity.x < 0.0);
}

#[test_log::test]
fn shoot_press_switches_to_nearest_player() {
    let mut game = Match::new(MatchOptions::two_players(7));
    game.clear_kickoff();
    clear_the_pitch(&mut game);
    game.ball_mut().position = Vector2::new(500.0, 700.0);
    game.players_mut()[4].position = Vector2::new(500.0, 760.0);
    game.players_mut()[6].position = Vector2::new(400.0, 800.0);

    let mut sound = SoundLog::new();
    game.update(&shoot(Side::Home), &mut sound);

    assert_eq!(game.ball().owner, None);
    assert_eq!(game.team(Side::Home).active_control_player, PlayerId::new(4));
    // The away side didn't press
    assert_eq!(game.team(Side::Away).active_control_player, PlayerId::new(1));
    assert_eq!(sound.count(SoundEffect::Kick), 0);
}

#[test_log::test]
fn shoot_press_with_the_ball_passes_instead() {
    let mut game = Match::new(MatchOptions::two_players(8));
    clear_the_pitch(&mut game);
    {
        let players = game.players_mut();
        players[0].position = Vector2::new(500.0, 700.0);
        players[0].direction = Direction::UP;
        players[2].position = Vector2::new(500.0, 500.0);
    }
    let ball = game.ball_mut();
    ball.position = Vector2::new(500.0, 684.0);
    ball.owner = Some(PlayerId::new(0));

    let mut sound = SoundLog::new();
    game.update(&shoot(Side::Home), &mut sound);

    assert_eq!(game.ball().owner, None);
    assert_eq!(sound.count(SoundEffect::Kick), 1);
    assert_relative_eq!(game.ball().velocity.norm(), KICK_STRENGTH, epsilon = 1e-9);
    // The receiver takes over, not the player nearest the ball
    assert_eq!(game.team(Side::Home).active_control_player, PlayerId::new(2));
    assert_eq!(game.debug_shoot_target(), Some(game.player(PlayerId::new(2)).position));
}

#[test_log::test]
fn goals_alternate_the_kickoff() {
    let mut game = Match::new(MatchOptions::cpu_only(9));
    let mut sound = SoundLog::new();
    assert_eq!(game.kickoff_player(), Some(PlayerId::new(0)));

    fn score(game: &mut Match, y: f64, sound: &mut SoundLog) {
        let ball = game.ball_mut();
        ball.owner = None;
        ball.position = Vector2::new(500.0, y);
        ball.velocity = Vector2::zeros();
        // The goal frame, the celebration, then the reset
        for _ in 0..=60 {
            game.update(&FrameInput::none(), sound);
        }
    }

    // Into the home net: the away side scores and the home side kicks off
    score(&mut game, 1360.0, &mut sound);
    assert_eq!(game.scores(), [0, 1]);
    assert_eq!(game.scoring_side(), Side::Away);
    assert_eq!(game.kickoff_player(), Some(PlayerId::new(0)));
    assert!(distance(&game.player(PlayerId::new(0)).position, &Vector2::new(470.0, 700.0)) <= 3.0);

    score(&mut game, 40.0, &mut sound);
    assert_eq!(game.scores(), [1, 1]);
    assert_eq!(game.scoring_side(), Side::Home);
    assert_eq!(game.kickoff_player(), Some(PlayerId::new(1)));
    assert!(distance(&game.player(PlayerId::new(1)).position, &Vector2::new(530.0, 700.0)) <= 3.0);

    assert_eq!(sound.count(SoundEffect::Goal), 2);
    assert_eq!(game.score_timer(), 0);
}

#[test_log::test]
fn reset_clears_possession_and_lines_up_the_formation() {
    let mut game = Match::new(MatchOptions::cpu_only(10));
    let mut sound = SoundLog::new();
    let carrier = PlayerId::new(1);

    // An away player dribbles into the home net
    let put_in_net = |game: &mut Match| {
        let p = &mut game.players_mut()[carrier.index()];
        p.position = Vector2::new(500.0, 1320.0);
        p.direction = Direction::DOWN;
        let ball = game.ball_mut();
        ball.position = Vector2::new(500.0, 1336.0);
        ball.velocity = Vector2::zeros();
        ball.owner = Some(carrier);
    };

    put_in_net(&mut game);
    game.update(&FrameInput::none(), &mut sound);
    assert_eq!(game.scores(), [0, 1]);

    for _ in 0..59 {
        game.update(&FrameInput::none(), &mut sound);
    }
    assert_eq!(game.score_timer(), 1);

    // Still in possession when the celebration ends
    put_in_net(&mut game);
    game.update(&FrameInput::none(), &mut sound);

    assert_eq!(game.scores(), [0, 1]);
    assert_eq!(game.ball().owner, None);
    assert_eq!(game.ball().position, Vector2::new(500.0, 700.0));
    assert_eq!(game.kickoff_player(), Some(PlayerId::new(0)));
    for p in game.players().iter().filter(|p| p.id != PlayerId::new(0)) {
        let kickoff_y = p.home.y / 2.0 + 550.0 - 400.0 * p.side.index() as f64;
        assert_relative_eq!(p.position, Vector2::new(p.home.x, kickoff_y), epsilon = 1e-9);
        assert_eq!(p.mark, None);
        assert_eq!(p.lead, None);
    }
}
