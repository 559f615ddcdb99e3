//! Threat scoring for the drive AI.
//!
//! Produces a bounded, deterministic threat assessment from a world sample:
//! rival proximity, pursuer proximity, speed, and accumulated damage. The
//! evaluator is a pure function; the host decides when to call it (see
//! [`crate::cadence`]) and writes the result into the blackboard.
//!
//! # Risk terms
//!
//! | Term     | Formula                                  | Range  |
//! |----------|------------------------------------------|--------|
//! | rival    | `1 / max(1, distance)` (0 if untracked)  | [0, 1] |
//! | pursuer  | `1 / max(1, distance)` (0 if unseen)     | [0, 1] |
//! | speed    | `clamp(speed / max_speed, 0, 1)`         | [0, 1] |
//! | damage   | `clamp(damage_fraction, 0, 1)`           | [0, 1] |
//!
//! The composite is the weighted sum of the four terms, clamped to [0, 1].
//! Weights are not normalized: a miscalibrated configuration saturates at
//! 1.0 instead of erroring.
//!
//! # Totality
//!
//! Every input degrades to a sentinel rather than failing: missing optional
//! positions contribute 0, out-of-range scalars are clamped, and non-finite
//! values (NaN, infinity) are treated as 0 so the clamping invariants hold
//! unconditionally.

use soulvan_types::{ThreatInputs, ThreatResult, ThreatWeights, Vec3};

/// Minimum presentation intensity produced at zero threat.
const INTENSITY_FLOOR: f32 = 0.4;

/// Intensity gained across the full threat range.
const INTENSITY_SPAN: f32 = 0.6;

/// Replace non-finite values with 0 so downstream clamps stay meaningful.
const fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

/// Inverse-distance proximity score, saturating at 1 for distances <= 1.
///
/// Returns 0 when the target is untracked or its distance is non-finite.
fn proximity_score(origin: Vec3, target: Option<Vec3>) -> f32 {
    target.map_or(0.0, |position| {
        let distance = origin.distance(position);
        if distance.is_finite() {
            1.0 / distance.max(1.0)
        } else {
            0.0
        }
    })
}

/// Map a threat score to presentation intensity.
///
/// Affine ramp from [`INTENSITY_FLOOR`] at zero threat to 1.0 at full
/// threat, clamped to [0, 1]. The floor keeps the presentation alive even
/// when nothing threatening is nearby.
pub fn motif_intensity_for(threat_level: f32) -> f32 {
    INTENSITY_SPAN
        .mul_add(finite_or_zero(threat_level), INTENSITY_FLOOR)
        .clamp(0.0, 1.0)
}

/// Evaluate the threat composite for one world sample.
///
/// Pure function of its inputs plus the weight configuration: no side
/// effects, no error path. `speed_kmh` is passed through to the result
/// unclamped (non-finite values become 0) for downstream consumers that
/// want the raw reading.
pub fn evaluate(inputs: ThreatInputs, weights: ThreatWeights) -> ThreatResult {
    let rival_risk = proximity_score(inputs.self_position, inputs.rival_position);
    let pursuer_risk = proximity_score(inputs.self_position, inputs.pursuer_last_known_position);

    let speed_kmh = finite_or_zero(inputs.speed_kmh);
    let max_speed = finite_or_zero(weights.max_speed_kmh);
    let speed_risk = if max_speed > 0.0 {
        (speed_kmh / max_speed).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let damage_risk = finite_or_zero(inputs.damage_fraction).clamp(0.0, 1.0);

    let composite = finite_or_zero(weights.rival_weight).mul_add(
        rival_risk,
        finite_or_zero(weights.pursuer_weight).mul_add(
            pursuer_risk,
            finite_or_zero(weights.speed_weight).mul_add(
                speed_risk,
                finite_or_zero(weights.damage_weight) * damage_risk,
            ),
        ),
    );
    let threat_level = composite.clamp(0.0, 1.0);

    ThreatResult {
        threat_level,
        speed_kmh,
        motif_intensity: motif_intensity_for(threat_level),
    }
}
