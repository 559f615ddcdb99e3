//! Narrative motif types and the presentation parameter bundle.
//!
//! A motif is one of four mutually-exclusive presentation modes. Exactly one
//! motif is active at a time; the continuous intensity value modulates how
//! strongly the active motif is expressed (particle emission, music pitch
//! and volume). The presentation collaborator consumes a
//! [`MotifPresentation`] and drives the actual particle and audio systems.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A narrative/presentation mode for the drive experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Motif {
    /// High-energy chase mood with heavy weather effects.
    Storm,
    /// Low-key cruising mood with sparse ambience.
    Calm,
    /// Surreal nebula mood used for late-season chapters.
    Cosmic,
    /// Prophetic boss-encounter mood.
    Oracle,
}

impl Motif {
    /// All motif variants in canonical order.
    ///
    /// Presentation channels are reported in this order.
    pub const ALL: [Self; 4] = [Self::Storm, Self::Calm, Self::Cosmic, Self::Oracle];
}

/// Identifier for a music track asset.
///
/// Track comparison is by identifier, not by motif: two motifs could in
/// principle share a track, and repeated selections of the same motif must
/// not restart an already-playing track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TrackId(pub String);

impl TrackId {
    /// Create a track identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl core::fmt::Display for TrackId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One particle overlay channel in a presentation bundle.
///
/// All four channels exist simultaneously; only the channel matching the
/// active motif has `active` set. Inactive channels still carry a computed
/// emission rate so the effects system can pre-warm or cross-fade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct OverlayChannel {
    /// Which motif this channel belongs to.
    pub kind: Motif,
    /// Particles per second for this channel.
    pub emission_rate: f32,
    /// Whether this channel is the visible one.
    pub active: bool,
}

/// The full derived presentation parameter set for a motif selection.
///
/// Pure function of `(motif, intensity)`; recomputed in full on every
/// selection, never memoized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MotifPresentation {
    /// One channel per motif, in [`Motif::ALL`] order.
    pub overlays: [OverlayChannel; 4],
    /// The music track selected for the active motif.
    pub track: TrackId,
    /// Music pitch multiplier.
    pub pitch: f32,
    /// Music volume multiplier.
    pub volume: f32,
}

impl MotifPresentation {
    /// Return the overlay channel for the given motif kind.
    pub fn overlay(&self, kind: Motif) -> Option<&OverlayChannel> {
        self.overlays.iter().find(|channel| channel.kind == kind)
    }

    /// Return the single active overlay channel.
    pub fn active_overlay(&self) -> Option<&OverlayChannel> {
        self.overlays.iter().find(|channel| channel.active)
    }
}
