use serde::Serialize;

/// Sound effects the simulation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundEffect {
    Kick,
    Goal,
    /// Menu navigation.
    Move,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Kick => "kick",
            SoundEffect::Goal => "goal",
            SoundEffect::Move => "move",
        }
    }

    /// Number of recorded variants of the effect. Players pick one of
    /// `0..variants()` at random.
    pub fn variants(&self) -> u8 {
        match self {
            SoundEffect::Kick => 4,
            SoundEffect::Goal => 2,
            SoundEffect::Move => 1,
        }
    }

    /// Asset name of one variant, e.g. `kick3`. Single-variant effects have no
    /// suffix.
    pub fn asset_name(&self, variant: u8) -> String {
        if self.variants() == 1 {
            self.name().to_string()
        } else {
            format!("{}{}", self.name(), variant % self.variants())
        }
    }
}

impl std::fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Receives sound effect requests. Playback is fire-and-forget: a sink that fails
/// to play something must swallow the failure.
pub trait SoundSink {
    fn play_effect(&mut self, effect: SoundEffect);
}

/// Discards every request. Used for muted matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play_effect(&mut self, _effect: SoundEffect) {}
}

/// Records every request in order.
#[derive(Debug, Clone, Default)]
pub struct SoundLog {
    pub played: Vec<SoundEffect>,
}

impl SoundLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, effect: SoundEffect) -> usize {
        self.played.iter().filter(|e| **e == effect).count()
    }

    pub fn clear(&mut self) {
        self.played.clear();
    }
}

impl SoundSink for SoundLog {
    fn play_effect(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }
}
