use kickoff_core::{distance, Difficulty, Side};

use crate::{
    consts::{LEAD_DISTANCE_1, LEAD_DISTANCE_2},
    player::Player,
    target::{Goal, Target},
    team::Team,
};

/// Forget last frame's assignments.
pub fn clear_assignments(players: &mut [Player]) {
    for p in players.iter_mut() {
        p.lead = None;
        p.mark = None;
        p.debug_target = None;
    }
}

/// Hand out defensive jobs to the side without the ball.
///
/// Every defender marks its peer. With goalkeeping enabled, the defender nearest
/// to the threatened goal marks the goal instead and the carrier's peer takes over
/// its man. Finally up to two defenders, nearest first and alternating between the
/// two sides of the carrier along the pitch, are sent to press it.
pub fn assign_roles(
    players: &mut [Player],
    carrier: usize,
    goals: &[Goal; 2],
    teams: &[Team; 2],
    difficulty: &Difficulty,
) {
    let attacking = players[carrier].side;
    let defending = attacking.opposite();
    let carrier_position = players[carrier].position;

    for p in players.iter_mut().filter(|p| p.side == defending) {
        p.mark = Some(Target::Player(p.peer));
    }

    if difficulty.goalie_enabled {
        let goal = goals[attacking.index()].position;
        let keeper = players
            .iter()
            .filter(|p| p.side == defending)
            .min_by(|a, b| distance(&a.position, &goal).total_cmp(&distance(&b.position, &goal)))
            .map(|p| p.id.index());

        if let Some(keeper) = keeper {
            let stand_in = players[carrier].peer.index();
            players[stand_in].mark = players[keeper].mark;
            players[keeper].mark = Some(Target::Goal(attacking));
            log::trace!("Player {} keeps goal {}", keeper, attacking);
        }
    }

    let defending_team = &teams[defending.index()];
    let mut candidates: Vec<usize> = players
        .iter()
        .filter(|p| {
            p.side == defending
                && p.timer <= 0
                && !defending_team.controls(p.id)
                && !p.mark.is_some_and(|m| m.is_goal())
        })
        .map(|p| p.id.index())
        .collect();
    candidates.sort_by(|&a, &b| {
        let da = distance(&players[a].position, &carrier_position);
        let db = distance(&players[b].position, &carrier_position);
        da.total_cmp(&db)
    });

    // "Ahead" lists the defenders between the carrier and its own goal
    let is_ahead = |p: &Player| match attacking {
        Side::Home => p.position.y > carrier_position.y,
        Side::Away => p.position.y < carrier_position.y,
    };
    let (ahead, behind): (Vec<usize>, Vec<usize>) =
        candidates.into_iter().partition(|&i| is_ahead(&players[i]));

    let mut pressers = (0..2)
        .flat_map(|rank| [ahead.get(rank), behind.get(rank)])
        .flatten()
        .copied();

    if let Some(first) = pressers.next() {
        players[first].lead = Some(LEAD_DISTANCE_1);
    }
    if difficulty.second_lead_enabled {
        if let Some(second) = pressers.next() {
            players[second].lead = Some(LEAD_DISTANCE_2);
        }
    }
}
