//! Wallet-facing data types: balances, NFTs, governance proposals, events.
//!
//! The wallet subsystem in `soulvan-wallet` owns the behavior; these are the
//! plain value types it caches and the typed events it dispatches to
//! registered observers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Category of an owned NFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum NftType {
    /// A cosmetic vehicle skin.
    CarSkin,
    /// A story relic collected during a season.
    Relic,
    /// A token granting one race replay export.
    ReplayToken,
    /// A badge awarded for completing a seasonal chapter.
    SeasonalBadge,
    /// A trophy minted after defeating a boss encounter.
    BossTrophy,
}

/// Lifecycle state of a governance proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ProposalState {
    /// Submitted but voting has not opened yet.
    Pending,
    /// Voting is open.
    Active,
    /// Withdrawn by the proposer.
    Canceled,
    /// Voting closed with the proposal rejected.
    Defeated,
    /// Voting closed with the proposal accepted.
    Succeeded,
    /// Accepted and queued for execution.
    Queued,
    /// Queued but the execution window lapsed.
    Expired,
    /// Executed on chain.
    Executed,
}

/// A voter's stance on a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum VoteChoice {
    /// Vote against the proposal.
    Against,
    /// Vote for the proposal.
    For,
    /// Abstain while still counting toward quorum.
    Abstain,
}

/// Cached account balances and holdings summary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BalanceState {
    /// Soulvan coin balance.
    pub soulvan_coin: f64,
    /// Ether balance.
    pub eth: f64,
    /// Number of NFTs held.
    pub nft_count: u32,
    /// Number of seasonal badges held.
    pub badge_count: u32,
    /// Governance voting power.
    pub voting_power: u32,
}

/// Metadata for one owned NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NftData {
    /// On-chain token identifier.
    pub token_id: u64,
    /// Display name.
    pub name: String,
    /// Longer description shown in the collection view.
    pub description: String,
    /// URI of the artwork image.
    pub image_uri: String,
    /// Rarity tier label.
    pub rarity: String,
    /// Season chapter in which the NFT was issued.
    pub season_chapter: u32,
    /// Category of the NFT.
    pub nft_type: NftType,
}

/// A governance proposal with its current tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ProposalData {
    /// Proposal identifier.
    pub id: u64,
    /// Human-readable proposal description.
    pub description: String,
    /// Votes in favor.
    pub for_votes: u64,
    /// Votes against.
    pub against_votes: u64,
    /// Abstentions.
    pub abstain_votes: u64,
    /// Current lifecycle state.
    pub state: ProposalState,
    /// Voting deadline.
    pub deadline: DateTime<Utc>,
}

/// Typed notification dispatched synchronously to wallet observers.
///
/// Each event is delivered exactly once to the observers registered at
/// dispatch time; observers registered later see nothing retroactively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum WalletEvent {
    /// The wallet was unlocked and an account address derived.
    Unlocked {
        /// Checksummed account address.
        address: String,
    },
    /// The wallet was locked and all cached state cleared.
    Locked,
    /// A transaction finished.
    TransactionComplete {
        /// Hash of the completed transaction.
        tx_hash: String,
        /// Whether the transaction succeeded.
        success: bool,
    },
    /// A reward NFT was minted.
    NftMinted {
        /// Token identifier assigned at mint time.
        token_id: u64,
        /// Metadata URI the mint was requested with.
        metadata_uri: String,
    },
    /// A governance vote was recorded.
    VoteCast {
        /// The proposal voted on.
        proposal_id: u64,
        /// The submitted stance.
        choice: VoteChoice,
    },
}
