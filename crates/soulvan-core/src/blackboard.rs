//! Shared blackboard store bridging threat evaluation and its consumers.
//!
//! The host writes each [`ThreatResult`] into the blackboard after an
//! evaluation fires; steering, presentation, and UI systems read the slots
//! without caring when the last evaluation ran. Exactly three slots exist:
//! threat level, speed, and motif intensity. Slots start empty and every
//! write overwrites the previous value.

use soulvan_types::ThreatResult;

/// Three-slot store for the latest threat assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Blackboard {
    threat_level: Option<f32>,
    speed_kmh: Option<f32>,
    motif_intensity: Option<f32>,
}

impl Blackboard {
    /// Create a blackboard with all slots empty.
    pub const fn new() -> Self {
        Self {
            threat_level: None,
            speed_kmh: None,
            motif_intensity: None,
        }
    }

    /// Write all three slots from one evaluation result.
    pub const fn write_threat_result(&mut self, result: ThreatResult) {
        self.threat_level = Some(result.threat_level);
        self.speed_kmh = Some(result.speed_kmh);
        self.motif_intensity = Some(result.motif_intensity);
    }

    /// The latest composite threat score, if any evaluation has run.
    pub const fn threat_level(&self) -> Option<f32> {
        self.threat_level
    }

    /// The latest observed speed in km/h, if any evaluation has run.
    pub const fn speed_kmh(&self) -> Option<f32> {
        self.speed_kmh
    }

    /// The latest derived presentation intensity, if any evaluation has run.
    pub const fn motif_intensity(&self) -> Option<f32> {
        self.motif_intensity
    }
}
