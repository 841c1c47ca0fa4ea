use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::members::Member;

/// Chance a peer studies during any given tick
const STUDY_PROBABILITY: f64 = 0.7;

/// Seeded stand-in for the other members' progress
#[derive(Debug, Clone)]
pub struct PeerSimulator {
    rng: StdRng,
}

impl PeerSimulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Give each member other than `me_id` one more second with fixed probability.
    /// Returns how many members advanced.
    pub fn advance(&mut self, members: &mut [Member], me_id: &str) -> usize {
        let mut advanced = 0;
        for member in members.iter_mut().filter(|m| m.id != me_id) {
            if self.rng.gen::<f64>() > 1.0 - STUDY_PROBABILITY {
                member.study_time += 1;
                advanced += 1;
            }
        }
        advanced
    }
}
