//! Threat assessment input, configuration, and output types.
//!
//! The evaluator itself lives in `soulvan-core`; this module holds the plain
//! value types that cross the boundary between the world/host collaborator
//! and the scoring function.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A world-space position.
///
/// Only distance and magnitude are ever computed on positions; this is not
/// a general-purpose vector math type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Vec3 {
    /// X component in world units.
    pub x: f32,
    /// Y component in world units.
    pub y: f32,
    /// Z component in world units.
    pub z: f32,
}

impl Vec3 {
    /// Create a position from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length of this vector.
    pub fn magnitude(self) -> f32 {
        self.x
            .mul_add(self.x, self.y.mul_add(self.y, self.z * self.z))
            .sqrt()
    }

    /// Euclidean distance to another position. Always non-negative.
    pub fn distance(self, other: Self) -> f32 {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z).magnitude()
    }
}

/// World sample consumed by one threat evaluation.
///
/// Rebuilt from scratch by the host every evaluation cycle; never retained.
/// A missing optional position contributes a proximity score of exactly 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ThreatInputs {
    /// Position of the evaluating vehicle.
    pub self_position: Vec3,
    /// Position of the tracked rival, if any rival is tracked.
    pub rival_position: Option<Vec3>,
    /// Last known pursuer position, if one has been observed.
    pub pursuer_last_known_position: Option<Vec3>,
    /// Current speed in km/h. Expected non-negative.
    pub speed_kmh: f32,
    /// Vehicle damage fraction. Expected in [0, 1] but not guaranteed;
    /// out-of-range values are clamped during evaluation.
    pub damage_fraction: f32,
}

/// Scoring weights for the threat composite.
///
/// Weights are not required to sum to 1: a miscalibrated configuration
/// saturates the clamped composite at 1.0 rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ThreatWeights {
    /// Weight applied to rival proximity.
    #[serde(default = "default_rival_weight")]
    pub rival_weight: f32,
    /// Weight applied to pursuer proximity.
    #[serde(default = "default_pursuer_weight")]
    pub pursuer_weight: f32,
    /// Weight applied to normalized speed.
    #[serde(default = "default_speed_weight")]
    pub speed_weight: f32,
    /// Weight applied to damage fraction.
    #[serde(default = "default_damage_weight")]
    pub damage_weight: f32,
    /// Speed at which the speed risk term saturates. Must be positive.
    #[serde(default = "default_max_speed_kmh")]
    pub max_speed_kmh: f32,
}

impl Default for ThreatWeights {
    fn default() -> Self {
        Self {
            rival_weight: default_rival_weight(),
            pursuer_weight: default_pursuer_weight(),
            speed_weight: default_speed_weight(),
            damage_weight: default_damage_weight(),
            max_speed_kmh: default_max_speed_kmh(),
        }
    }
}

const fn default_rival_weight() -> f32 {
    0.45
}

const fn default_pursuer_weight() -> f32 {
    0.35
}

const fn default_speed_weight() -> f32 {
    0.15
}

const fn default_damage_weight() -> f32 {
    0.05
}

const fn default_max_speed_kmh() -> f32 {
    220.0
}

/// Output of one threat evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ThreatResult {
    /// Composite threat score in [0, 1].
    pub threat_level: f32,
    /// The input speed, passed through unclamped for downstream consumers.
    pub speed_kmh: f32,
    /// Presentation intensity derived from the threat score, in [0, 1].
    pub motif_intensity: f32,
}
