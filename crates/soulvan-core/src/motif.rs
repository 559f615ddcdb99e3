//! Motif selection and presentation parameter derivation.
//!
//! The selector owns the active motif and intensity, and on every selection
//! recomputes the full presentation bundle: one emission channel per motif,
//! the selected music track, and pitch/volume multipliers. Redundant track
//! restarts are suppressed at the sink boundary, but the presentation
//! itself is always recomputed in full, never memoized.
//!
//! # Motif table
//!
//! Each motif maps to a configuration record holding its emission
//! multiplier and track. Extending the roster means extending this one
//! table, not hunting down branch sites.
//!
//! | Motif  | Emission multiplier | Track                |
//! |--------|---------------------|----------------------|
//! | Storm  | 1.0                 | `music/storm_theme`  |
//! | Calm   | 0.5                 | `music/calm_theme`   |
//! | Cosmic | 0.8                 | `music/cosmic_theme` |
//! | Oracle | 0.6                 | `music/oracle_theme` |

use soulvan_types::{Motif, MotifPresentation, OverlayChannel, TrackId};

/// Emission rate at zero intensity, particles per second.
const EMISSION_MIN: f32 = 10.0;

/// Emission rate at full intensity, particles per second.
const EMISSION_MAX: f32 = 200.0;

/// Music pitch multiplier at zero intensity.
const PITCH_MIN: f32 = 0.95;

/// Music pitch multiplier at full intensity.
const PITCH_MAX: f32 = 1.08;

/// Music volume multiplier at zero intensity.
const VOLUME_MIN: f32 = 0.6;

/// Music volume multiplier at full intensity.
const VOLUME_MAX: f32 = 1.0;

/// Configuration record for one motif.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotifProfile {
    /// Scale applied to the interpolated base emission rate.
    pub emission_multiplier: f32,
    /// Track played while this motif is active.
    pub track: &'static str,
}

/// Look up the configuration record for a motif.
///
/// Total over the closed [`Motif`] set; the table is the single source of
/// truth for per-motif presentation tuning.
pub const fn profile_for(motif: Motif) -> MotifProfile {
    match motif {
        Motif::Storm => MotifProfile {
            emission_multiplier: 1.0,
            track: "music/storm_theme",
        },
        Motif::Calm => MotifProfile {
            emission_multiplier: 0.5,
            track: "music/calm_theme",
        },
        Motif::Cosmic => MotifProfile {
            emission_multiplier: 0.8,
            track: "music/cosmic_theme",
        },
        Motif::Oracle => MotifProfile {
            emission_multiplier: 0.6,
            track: "music/oracle_theme",
        },
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    (to - from).mul_add(t, from)
}

/// Compute the full presentation bundle for a motif and intensity.
///
/// Pure function; `intensity` is expected to already be in [0, 1] (the
/// selector clamps before calling). All four overlay channels are present
/// with computed rates; only the channel matching `motif` is active.
pub fn compute_presentation(motif: Motif, intensity: f32) -> MotifPresentation {
    let base_rate = lerp(EMISSION_MIN, EMISSION_MAX, intensity);
    let overlays = Motif::ALL.map(|kind| OverlayChannel {
        kind,
        emission_rate: base_rate * profile_for(kind).emission_multiplier,
        active: kind == motif,
    });
    MotifPresentation {
        overlays,
        track: TrackId::new(profile_for(motif).track),
        pitch: lerp(PITCH_MIN, PITCH_MAX, intensity),
        volume: lerp(VOLUME_MIN, VOLUME_MAX, intensity),
    }
}

/// Receives derived presentation parameters.
///
/// Implemented by the effects/audio collaborator. The selector calls
/// `start_track` only when the selected track differs from the one already
/// playing; the other methods are called on every selection.
pub trait PresentationSink {
    /// Begin playing a new track, replacing whatever is playing.
    fn start_track(&mut self, track: &TrackId);

    /// Update music pitch and volume multipliers.
    fn set_audio_levels(&mut self, pitch: f32, volume: f32);

    /// Update one particle overlay channel.
    fn set_overlay(&mut self, channel: &OverlayChannel);
}

/// Owns the active motif, its intensity, and the playing-track memory used
/// for restart suppression.
#[derive(Debug, Clone)]
pub struct MotifSelector {
    motif: Motif,
    intensity: f32,
    playing_track: Option<TrackId>,
}

impl MotifSelector {
    /// Create a selector in the startup state: Storm at half intensity,
    /// nothing playing yet.
    pub const fn new() -> Self {
        Self {
            motif: Motif::Storm,
            intensity: 0.5,
            playing_track: None,
        }
    }

    /// The currently active motif.
    pub const fn current_motif(&self) -> Motif {
        self.motif
    }

    /// The stored intensity, always in [0, 1].
    pub const fn current_intensity(&self) -> f32 {
        self.intensity
    }

    /// The track most recently started through a sink, if any.
    pub const fn playing_track(&self) -> Option<&TrackId> {
        self.playing_track.as_ref()
    }

    /// Select a motif and intensity, returning the derived presentation.
    ///
    /// `intensity` is clamped to [0, 1] before storage (non-finite values
    /// become 0). The presentation is recomputed in full on every call,
    /// including calls that change nothing.
    pub fn set_motif(&mut self, motif: Motif, intensity: f32) -> MotifPresentation {
        let clamped = if intensity.is_finite() {
            intensity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.motif = motif;
        self.intensity = clamped;
        tracing::debug!(motif = ?motif, intensity = clamped, "motif selected");
        compute_presentation(motif, clamped)
    }

    /// Select a motif and push the derived presentation into a sink.
    ///
    /// Overlay channels and audio levels are always pushed; the track is
    /// only started when its id differs from the one already playing, so
    /// repeated selections of the same motif never restart the music.
    pub fn drive(
        &mut self,
        motif: Motif,
        intensity: f32,
        sink: &mut dyn PresentationSink,
    ) -> MotifPresentation {
        let presentation = self.set_motif(motif, intensity);
        for channel in &presentation.overlays {
            sink.set_overlay(channel);
        }
        if self.playing_track.as_ref() != Some(&presentation.track) {
            sink.start_track(&presentation.track);
            self.playing_track = Some(presentation.track.clone());
        }
        sink.set_audio_levels(presentation.pitch, presentation.volume);
        presentation
    }
}

impl Default for MotifSelector {
    fn default() -> Self {
        Self::new()
    }
}
