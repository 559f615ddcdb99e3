//! Host-driven threat service: cadence, evaluation, blackboard write.
//!
//! Ties the rate limiter, the pure evaluator, and the blackboard together
//! into the single call the host makes every tick. The service fires only
//! when its cadence is due; between firings the blackboard keeps serving
//! the previous assessment.

use soulvan_types::{ThreatInputs, ThreatResult, ThreatWeights};

use crate::blackboard::Blackboard;
use crate::cadence::EvaluationCadence;
use crate::threat;

/// Rate-limited threat evaluation driven by the host tick.
#[derive(Debug, Clone)]
pub struct ThreatService {
    weights: ThreatWeights,
    cadence: EvaluationCadence,
}

impl ThreatService {
    /// Create a service with the given weight configuration and cadence.
    pub const fn new(weights: ThreatWeights, cadence: EvaluationCadence) -> Self {
        Self { weights, cadence }
    }

    /// The weight configuration in use.
    pub const fn weights(&self) -> ThreatWeights {
        self.weights
    }

    /// The cadence driving this service.
    pub const fn cadence(&self) -> &EvaluationCadence {
        &self.cadence
    }

    /// Run one host tick at the given time.
    ///
    /// When the cadence is due: evaluates the world sample, writes the
    /// result into the blackboard, re-arms the cadence, and returns the
    /// result. Returns `None` on ticks where the cadence is not due; the
    /// blackboard is left untouched on those ticks.
    pub fn tick(
        &mut self,
        now: f64,
        inputs: ThreatInputs,
        blackboard: &mut Blackboard,
    ) -> Option<ThreatResult> {
        if !self.cadence.poll(now) {
            return None;
        }

        let result = threat::evaluate(inputs, self.weights);
        blackboard.write_threat_result(result);
        tracing::debug!(
            threat = result.threat_level,
            speed_kmh = result.speed_kmh,
            intensity = result.motif_intensity,
            cycle = self.cadence.cycle(),
            "threat evaluated"
        );
        Some(result)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use soulvan_types::Vec3;

    use super::*;

    fn service_with_fixed_interval() -> ThreatService {
        // Zero deviation keeps due times exact for assertions.
        ThreatService::new(
            ThreatWeights::default(),
            EvaluationCadence::new(0.5, 0.0, 42),
        )
    }

    fn sample_inputs() -> ThreatInputs {
        ThreatInputs {
            self_position: Vec3::default(),
            rival_position: Some(Vec3::new(10.0, 0.0, 0.0)),
            pursuer_last_known_position: None,
            speed_kmh: 110.0,
            damage_fraction: 0.2,
        }
    }

    #[test]
    fn first_tick_evaluates_and_writes_blackboard() {
        let mut service = service_with_fixed_interval();
        let mut blackboard = Blackboard::new();

        let result = service.tick(0.0, sample_inputs(), &mut blackboard);
        assert!(result.is_some());
        assert_eq!(
            blackboard.threat_level(),
            result.map(|r| r.threat_level)
        );
        assert_eq!(blackboard.speed_kmh(), Some(110.0));
    }

    #[test]
    fn ticks_between_firings_are_skipped() {
        let mut service = service_with_fixed_interval();
        let mut blackboard = Blackboard::new();

        assert!(service.tick(0.0, sample_inputs(), &mut blackboard).is_some());
        assert!(service.tick(0.1, sample_inputs(), &mut blackboard).is_none());
        assert!(service.tick(0.49, sample_inputs(), &mut blackboard).is_none());
        assert!(service.tick(0.5, sample_inputs(), &mut blackboard).is_some());
    }

    #[test]
    fn skipped_ticks_leave_blackboard_untouched() {
        let mut service = service_with_fixed_interval();
        let mut blackboard = Blackboard::new();

        service.tick(0.0, sample_inputs(), &mut blackboard);
        let before = blackboard;

        // Different inputs on a skipped tick must not leak through.
        let calm_inputs = ThreatInputs {
            rival_position: None,
            speed_kmh: 0.0,
            damage_fraction: 0.0,
            ..sample_inputs()
        };
        assert!(service.tick(0.2, calm_inputs, &mut blackboard).is_none());
        assert_eq!(blackboard, before);
    }

    #[test]
    fn evaluation_uses_configured_weights() {
        let weights = ThreatWeights {
            rival_weight: 1.0,
            pursuer_weight: 0.0,
            speed_weight: 0.0,
            damage_weight: 0.0,
            max_speed_kmh: 220.0,
        };
        let mut service =
            ThreatService::new(weights, EvaluationCadence::new(0.5, 0.0, 42));
        let mut blackboard = Blackboard::new();

        let result = service.tick(0.0, sample_inputs(), &mut blackboard);
        // Rival 10 units out with weight 1.0 and nothing else.
        assert_eq!(result.map(|r| r.threat_level), Some(0.1));
    }
}
