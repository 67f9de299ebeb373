use kickoff_sim::{SoundEffect, SoundSink};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Headless "speaker": picks a variant like a real mixer would and logs it.
#[derive(Debug)]
pub struct TracingSink {
    rng: StdRng,
    played: usize,
}

impl TracingSink {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            played: 0,
        }
    }

    pub fn played(&self) -> usize {
        self.played
    }
}

impl SoundSink for TracingSink {
    fn play_effect(&mut self, effect: SoundEffect) {
        let variant = self.rng.gen_range(0..effect.variants());
        let asset = effect.asset_name(variant);
        tracing::debug!(%effect, asset = %asset, "Playing sound");
        self.played += 1;
    }
}
