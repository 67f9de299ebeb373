use kickoff_core::PlayerId;
use serde::Serialize;

/// Per-side match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Team {
    /// Whether a human input source drives this side.
    pub human: bool,
    /// The player that human input moves. CPU sides track it too, for possession
    /// changes and passes, but never read it.
    pub active_control_player: PlayerId,
    pub score: u32,
}

impl Team {
    pub fn new(human: bool, active_control_player: PlayerId) -> Self {
        Self {
            human,
            active_control_player,
            score: 0,
        }
    }

    /// Whether `id` is the player this side's human is moving.
    pub fn controls(&self, id: PlayerId) -> bool {
        self.human && self.active_control_player == id
    }
}
