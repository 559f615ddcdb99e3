//! Synthetic drive-state sampling for the demo loop.
//!
//! Stands in for the game world: a rival that drifts closer and further,
//! a pursuer that joins the chase partway through, a speed that oscillates
//! with traffic, and damage that accumulates from occasional impacts. The
//! generator is seeded, so a demo run replays identically for a given
//! configuration.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use soulvan_types::{ThreatInputs, Vec3};

/// Time after which the pursuer picks up the chase.
const PURSUER_JOIN_TIME: f64 = 8.0;

/// Seeded synthetic world producing one [`ThreatInputs`] per frame.
pub struct DriveWorld {
    rng: StdRng,
    rival_distance: f32,
    pursuer_distance: f32,
    speed_kmh: f32,
    damage: f32,
}

impl DriveWorld {
    /// Create a world with the rival at mid-range and a clean car.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            rival_distance: 30.0,
            pursuer_distance: 80.0,
            speed_kmh: 90.0,
            damage: 0.0,
        }
    }

    /// Advance one frame and sample the current threat inputs.
    pub fn advance(&mut self, now: f64) -> ThreatInputs {
        self.rival_distance =
            (self.rival_distance + self.rng.random_range(-2.0..2.0_f32)).clamp(1.0, 60.0);
        self.speed_kmh =
            (self.speed_kmh + self.rng.random_range(-6.0..8.0_f32)).clamp(40.0, 210.0);
        if self.rng.random_bool(0.02) {
            self.damage = (self.damage + 0.05).clamp(0.0, 1.0);
        }

        let pursuer = if now >= PURSUER_JOIN_TIME {
            self.pursuer_distance =
                (self.pursuer_distance + self.rng.random_range(-4.0..1.0_f32)).clamp(2.0, 80.0);
            Some(Vec3::new(0.0, self.pursuer_distance, 0.0))
        } else {
            None
        };

        ThreatInputs {
            self_position: Vec3::new(0.0, 0.0, 0.0),
            rival_position: Some(Vec3::new(self.rival_distance, 0.0, 0.0)),
            pursuer_last_known_position: pursuer,
            speed_kmh: self.speed_kmh,
            damage_fraction: self.damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_range() {
        let mut world = DriveWorld::new(7);
        for frame in 0_u32..300 {
            let now = f64::from(frame) / 30.0;
            let inputs = world.advance(now);
            let rival = inputs.rival_position.map_or(0.0, |p| p.x);
            assert!((1.0..=60.0).contains(&rival));
            assert!((40.0..=210.0).contains(&inputs.speed_kmh));
            assert!((0.0..=1.0).contains(&inputs.damage_fraction));
        }
    }

    #[test]
    fn pursuer_joins_late() {
        let mut world = DriveWorld::new(7);
        assert!(world.advance(0.0).pursuer_last_known_position.is_none());
        assert!(world.advance(9.0).pursuer_last_known_position.is_some());
    }

    #[test]
    fn same_seed_replays_identically() {
        let mut first = DriveWorld::new(42);
        let mut second = DriveWorld::new(42);
        for frame in 0_u32..60 {
            let now = f64::from(frame) / 30.0;
            assert_eq!(
                first.advance(now).speed_kmh.to_bits(),
                second.advance(now).speed_kmh.to_bits()
            );
        }
    }
}
