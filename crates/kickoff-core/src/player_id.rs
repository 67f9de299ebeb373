use serde::{Deserialize, Serialize};

/// Stable handle of a player: its slot in the match roster. Ids are only valid for
/// the roster they were issued by and are reissued at every kick off.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlayerId(usize);

impl PlayerId {
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
