//! Logging collaborators standing in for the effects, audio, and UI layers.

use soulvan_core::PresentationSink;
use soulvan_types::{OverlayChannel, TrackId, WalletEvent};
use soulvan_wallet::WalletObserver;
use tracing::{debug, info, trace};

/// Presentation sink that logs every push instead of rendering it.
#[derive(Debug, Default)]
pub struct TracingSink;

impl PresentationSink for TracingSink {
    fn start_track(&mut self, track: &TrackId) {
        info!(%track, "track started");
    }

    fn set_audio_levels(&mut self, pitch: f32, volume: f32) {
        debug!(pitch, volume, "audio levels set");
    }

    fn set_overlay(&mut self, channel: &OverlayChannel) {
        trace!(
            kind = ?channel.kind,
            emission_rate = channel.emission_rate,
            active = channel.active,
            "overlay updated"
        );
    }
}

/// Wallet observer that logs each event as it is dispatched.
#[derive(Debug, Default)]
pub struct TracingWalletObserver;

impl WalletObserver for TracingWalletObserver {
    fn on_wallet_event(&mut self, event: &WalletEvent) {
        match event {
            WalletEvent::Unlocked { address } => info!(%address, "wallet unlocked"),
            WalletEvent::Locked => info!("wallet locked"),
            WalletEvent::TransactionComplete { tx_hash, success } => {
                info!(%tx_hash, success, "transaction complete");
            }
            WalletEvent::NftMinted {
                token_id,
                metadata_uri,
            } => info!(token_id, %metadata_uri, "reward nft minted"),
            WalletEvent::VoteCast {
                proposal_id,
                choice,
            } => info!(proposal_id, ?choice, "vote cast"),
        }
    }
}
