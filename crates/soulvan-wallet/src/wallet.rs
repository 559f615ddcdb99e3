//! Stub non-custodial wallet driven by the host scheduler.
//!
//! Every chain-facing operation is asynchronous in shape: the request is
//! validated against the lock state, a completion task is scheduled on an
//! internal [`TaskQueue`], and the result surfaces later as a typed
//! [`WalletEvent`] when the host pumps [`WalletSubsystem::tick`]. The data
//! itself is canned. Balances, NFTs, and proposals install fixed fixtures
//! after the configured delay, standing in for a chain facade.
//!
//! Locking is immediate and total: cached state is dropped, in-flight
//! completions are discarded, and observers are told synchronously.

use chrono::DateTime;
use soulvan_core::{TaskQueue, WalletConfig};
use soulvan_types::{
    BalanceState, NftData, NftType, ProposalData, ProposalState, RequestId, VoteChoice,
    WalletEvent,
};
use tracing::{debug, info, warn};

use crate::error::WalletError;
use crate::events::{ObserverRegistry, WalletObserver};

/// Delay before an unlock request completes, in time-units.
const UNLOCK_DELAY: f64 = 0.5;
/// Delay before a coin transfer completes.
const SEND_DELAY: f64 = 1.0;
/// Delay before a balance, NFT, or proposal refresh installs its data.
const REFRESH_DELAY: f64 = 0.5;
/// Delay before a reward NFT mint completes.
const MINT_DELAY: f64 = 2.0;
/// Delay before a governance vote is recorded.
const VOTE_DELAY: f64 = 1.5;

/// Pending completion work scheduled on the internal queue.
enum WalletTask {
    CompleteUnlock {
        passphrase: String,
    },
    CompleteSend {
        request: RequestId,
        amount: f64,
    },
    InstallBalances,
    InstallNfts,
    InstallProposals,
    CompleteMint {
        metadata_uri: String,
    },
    CompleteVote {
        proposal_id: u64,
        choice: VoteChoice,
    },
}

/// Stub wallet subsystem: lock state, cached chain data, pending work.
pub struct WalletSubsystem {
    config: WalletConfig,
    unlocked: bool,
    address: Option<String>,
    balances: Option<BalanceState>,
    nfts: Vec<NftData>,
    proposals: Vec<ProposalData>,
    pending_rewards: Vec<String>,
    tasks: TaskQueue<WalletTask>,
    observers: ObserverRegistry,
}

impl WalletSubsystem {
    /// Create a locked wallet with no cached data.
    #[must_use]
    pub fn new(config: WalletConfig) -> Self {
        debug!(
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            "wallet subsystem created"
        );
        Self {
            config,
            unlocked: false,
            address: None,
            balances: None,
            nfts: Vec::new(),
            proposals: Vec::new(),
            pending_rewards: Vec::new(),
            tasks: TaskQueue::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Register an observer for events emitted from now on.
    pub fn register_observer(&mut self, observer: Box<dyn WalletObserver>) {
        self.observers.register(observer);
    }

    /// Whether the wallet is currently unlocked.
    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// The derived account address, if unlocked.
    #[must_use]
    pub const fn address(&self) -> Option<&String> {
        self.address.as_ref()
    }

    /// Cached balances, if a refresh has completed.
    #[must_use]
    pub const fn balances(&self) -> Option<&BalanceState> {
        self.balances.as_ref()
    }

    /// Cached NFT collection.
    #[must_use]
    pub fn nfts(&self) -> &[NftData] {
        &self.nfts
    }

    /// Cached governance proposals.
    #[must_use]
    pub fn proposals(&self) -> &[ProposalData] {
        &self.proposals
    }

    /// Reward metadata URIs queued by gameplay, not yet minted.
    #[must_use]
    pub fn pending_rewards(&self) -> &[String] {
        &self.pending_rewards
    }

    /// Queue a gameplay reward for a later mint. Allowed while locked.
    pub fn queue_reward(&mut self, metadata_uri: impl Into<String>) {
        let metadata_uri = metadata_uri.into();
        debug!(%metadata_uri, "reward queued");
        self.pending_rewards.push(metadata_uri);
    }

    /// Request an unlock. Always accepted; the address derives from the
    /// passphrase when the completion fires after [`UNLOCK_DELAY`].
    pub fn unlock(&mut self, now: f64, passphrase: &str) {
        debug!("unlock requested");
        self.tasks.schedule(
            now + UNLOCK_DELAY,
            WalletTask::CompleteUnlock {
                passphrase: passphrase.to_owned(),
            },
        );
    }

    /// Lock immediately: drop cached chain data, discard in-flight
    /// completions, and notify observers.
    pub fn lock(&mut self) {
        info!("wallet locked");
        self.unlocked = false;
        self.address = None;
        self.balances = None;
        self.nfts.clear();
        self.proposals.clear();
        self.tasks = TaskQueue::new();
        self.observers.dispatch(&WalletEvent::Locked);
    }

    /// Request a coin transfer.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Locked`] while the wallet is locked.
    pub fn send_transaction(
        &mut self,
        now: f64,
        to: &str,
        amount: f64,
    ) -> Result<RequestId, WalletError> {
        self.ensure_unlocked("send_transaction")?;
        let request = RequestId::new();
        debug!(%request, %to, amount, "transfer scheduled");
        self.tasks
            .schedule(now + SEND_DELAY, WalletTask::CompleteSend { request, amount });
        Ok(request)
    }

    /// Request a balance refresh.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Locked`] while the wallet is locked.
    pub fn refresh_balances(&mut self, now: f64) -> Result<RequestId, WalletError> {
        self.ensure_unlocked("refresh_balances")?;
        self.tasks
            .schedule(now + REFRESH_DELAY, WalletTask::InstallBalances);
        Ok(RequestId::new())
    }

    /// Request an NFT collection refresh.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Locked`] while the wallet is locked.
    pub fn refresh_nfts(&mut self, now: f64) -> Result<RequestId, WalletError> {
        self.ensure_unlocked("refresh_nfts")?;
        self.tasks
            .schedule(now + REFRESH_DELAY, WalletTask::InstallNfts);
        Ok(RequestId::new())
    }

    /// Request a governance proposal refresh.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Locked`] while the wallet is locked.
    pub fn refresh_proposals(&mut self, now: f64) -> Result<RequestId, WalletError> {
        self.ensure_unlocked("refresh_proposals")?;
        self.tasks
            .schedule(now + REFRESH_DELAY, WalletTask::InstallProposals);
        Ok(RequestId::new())
    }

    /// Request a reward NFT mint for the given metadata URI.
    ///
    /// The URI does not have to be in the pending queue; if it is, the
    /// completion consumes it.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Locked`] while the wallet is locked.
    pub fn mint_reward_nft(
        &mut self,
        now: f64,
        metadata_uri: &str,
    ) -> Result<RequestId, WalletError> {
        self.ensure_unlocked("mint_reward_nft")?;
        debug!(%metadata_uri, "mint scheduled");
        self.tasks.schedule(
            now + MINT_DELAY,
            WalletTask::CompleteMint {
                metadata_uri: metadata_uri.to_owned(),
            },
        );
        Ok(RequestId::new())
    }

    /// Request a governance vote.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Locked`] while the wallet is locked.
    pub fn cast_vote(
        &mut self,
        now: f64,
        proposal_id: u64,
        choice: VoteChoice,
    ) -> Result<RequestId, WalletError> {
        self.ensure_unlocked("cast_vote")?;
        debug!(proposal_id, ?choice, "vote scheduled");
        self.tasks.schedule(
            now + VOTE_DELAY,
            WalletTask::CompleteVote {
                proposal_id,
                choice,
            },
        );
        Ok(RequestId::new())
    }

    /// Drain and process every completion task due at `now`.
    ///
    /// Call once per host tick with a monotonically increasing clock.
    pub fn tick(&mut self, now: f64) {
        for task in self.tasks.drain_due(now) {
            self.process(task.payload, now);
        }
    }

    fn ensure_unlocked(&self, operation: &'static str) -> Result<(), WalletError> {
        if self.unlocked {
            Ok(())
        } else {
            warn!(operation, "rejected: wallet is locked");
            Err(WalletError::Locked { operation })
        }
    }

    fn process(&mut self, task: WalletTask, now: f64) {
        match task {
            WalletTask::CompleteUnlock { passphrase } => {
                let address = derive_address(&passphrase);
                info!(%address, "wallet unlocked");
                self.unlocked = true;
                self.address = Some(address.clone());
                self.observers.dispatch(&WalletEvent::Unlocked { address });
                // Fresh session: pull everything the UI needs up front.
                self.tasks
                    .schedule(now + REFRESH_DELAY, WalletTask::InstallBalances);
                self.tasks
                    .schedule(now + REFRESH_DELAY, WalletTask::InstallNfts);
                self.tasks
                    .schedule(now + REFRESH_DELAY, WalletTask::InstallProposals);
            }
            WalletTask::CompleteSend { request, amount } => {
                let success = match self.balances.as_mut() {
                    Some(balances)
                        if amount.is_finite()
                            && amount >= 0.0
                            && amount <= balances.soulvan_coin =>
                    {
                        balances.soulvan_coin -= amount;
                        true
                    }
                    _ => false,
                };
                let tx_hash = format!("0x{}", request.into_inner().simple());
                info!(%tx_hash, amount, success, "transfer complete");
                self.observers
                    .dispatch(&WalletEvent::TransactionComplete { tx_hash, success });
            }
            WalletTask::InstallBalances => {
                debug!("balances installed");
                self.balances = Some(canned_balances());
            }
            WalletTask::InstallNfts => {
                debug!("nft collection installed");
                self.nfts = canned_nfts();
            }
            WalletTask::InstallProposals => {
                debug!("proposals installed");
                self.proposals = canned_proposals();
            }
            WalletTask::CompleteMint { metadata_uri } => {
                let token_id = self
                    .balances
                    .map_or(1, |balances| u64::from(balances.nft_count).saturating_add(1));
                if let Some(index) = self.pending_rewards.iter().position(|uri| *uri == metadata_uri)
                {
                    self.pending_rewards.remove(index);
                }
                if let Some(balances) = self.balances.as_mut() {
                    balances.nft_count = balances.nft_count.saturating_add(1);
                }
                info!(token_id, %metadata_uri, "reward nft minted");
                self.observers.dispatch(&WalletEvent::NftMinted {
                    token_id,
                    metadata_uri,
                });
                // The mint invalidates cached holdings.
                self.tasks
                    .schedule(now + REFRESH_DELAY, WalletTask::InstallBalances);
            }
            WalletTask::CompleteVote {
                proposal_id,
                choice,
            } => {
                info!(proposal_id, ?choice, "vote recorded");
                self.observers.dispatch(&WalletEvent::VoteCast {
                    proposal_id,
                    choice,
                });
            }
        }
    }
}

impl std::fmt::Debug for WalletSubsystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSubsystem")
            .field("chain_id", &self.config.chain_id)
            .field("unlocked", &self.unlocked)
            .field("address", &self.address)
            .field("pending_tasks", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

/// Derive a display address from the passphrase head and tail.
fn derive_address(passphrase: &str) -> String {
    let head: String = passphrase.chars().take(4).collect();
    let tail_start = passphrase.chars().count().saturating_sub(4);
    let tail: String = passphrase.chars().skip(tail_start).collect();
    format!("0x{}...{}", head.to_uppercase(), tail.to_uppercase())
}

const fn canned_balances() -> BalanceState {
    BalanceState {
        soulvan_coin: 1000.0,
        eth: 0.5,
        nft_count: 5,
        badge_count: 2,
        voting_power: 100,
    }
}

fn canned_nfts() -> Vec<NftData> {
    vec![NftData {
        token_id: 1,
        name: "Bugatti Bolide Skin".to_owned(),
        description: "Midnight chrome finish for the Bolide".to_owned(),
        image_uri: "ipfs://soulvan/skins/bolide-midnight.png".to_owned(),
        rarity: "Legendary".to_owned(),
        season_chapter: 1,
        nft_type: NftType::CarSkin,
    }]
}

fn canned_proposals() -> Vec<ProposalData> {
    vec![ProposalData {
        id: 1,
        description: "Transition to Cosmic Season".to_owned(),
        for_votes: 150,
        against_votes: 30,
        abstain_votes: 20,
        state: ProposalState::Active,
        deadline: DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
    }]
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct RecordingObserver {
        seen: Rc<RefCell<Vec<WalletEvent>>>,
    }

    impl WalletObserver for RecordingObserver {
        fn on_wallet_event(&mut self, event: &WalletEvent) {
            self.seen.borrow_mut().push(event.clone());
        }
    }

    fn observed_wallet() -> (WalletSubsystem, Rc<RefCell<Vec<WalletEvent>>>) {
        let mut wallet = WalletSubsystem::new(WalletConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        wallet.register_observer(Box::new(RecordingObserver {
            seen: Rc::clone(&seen),
        }));
        (wallet, seen)
    }

    fn unlocked_wallet() -> (WalletSubsystem, Rc<RefCell<Vec<WalletEvent>>>) {
        let (mut wallet, seen) = observed_wallet();
        wallet.unlock(0.0, "correct horse battery");
        wallet.tick(UNLOCK_DELAY);
        wallet.tick(UNLOCK_DELAY + REFRESH_DELAY);
        seen.borrow_mut().clear();
        (wallet, seen)
    }

    #[test]
    fn starts_locked_and_empty() {
        let wallet = WalletSubsystem::new(WalletConfig::default());
        assert!(!wallet.is_unlocked());
        assert!(wallet.address().is_none());
        assert!(wallet.balances().is_none());
        assert!(wallet.nfts().is_empty());
        assert!(wallet.proposals().is_empty());
    }

    #[test]
    fn locked_operations_are_rejected_and_schedule_nothing() {
        let (mut wallet, seen) = observed_wallet();

        assert!(wallet.send_transaction(0.0, "0xAA", 10.0).is_err());
        assert!(wallet.refresh_balances(0.0).is_err());
        assert!(wallet.refresh_nfts(0.0).is_err());
        assert!(wallet.refresh_proposals(0.0).is_err());
        assert!(wallet.mint_reward_nft(0.0, "ipfs://x").is_err());
        assert!(wallet.cast_vote(0.0, 1, VoteChoice::For).is_err());

        wallet.tick(100.0);
        assert!(seen.borrow().is_empty());
        assert!(wallet.balances().is_none());
    }

    #[test]
    fn locked_error_names_the_operation() {
        let mut wallet = WalletSubsystem::new(WalletConfig::default());
        let err = wallet.cast_vote(0.0, 1, VoteChoice::Abstain);
        assert!(matches!(
            err,
            Err(WalletError::Locked {
                operation: "cast_vote"
            })
        ));
    }

    #[test]
    fn unlock_completes_after_delay_with_derived_address() {
        let (mut wallet, seen) = observed_wallet();
        wallet.unlock(0.0, "correct horse battery");

        wallet.tick(0.4);
        assert!(!wallet.is_unlocked());
        assert!(seen.borrow().is_empty());

        wallet.tick(0.5);
        assert!(wallet.is_unlocked());
        assert_eq!(
            wallet.address().map(String::as_str),
            Some("0xCORR...TERY")
        );
        assert_eq!(
            seen.borrow().first(),
            Some(&WalletEvent::Unlocked {
                address: "0xCORR...TERY".to_owned()
            })
        );
    }

    #[test]
    fn unlock_triggers_initial_refreshes() {
        let (mut wallet, _seen) = observed_wallet();
        wallet.unlock(0.0, "abcd");
        wallet.tick(0.5);
        assert!(wallet.balances().is_none());

        wallet.tick(1.0);
        assert_eq!(wallet.balances().map(|b| b.nft_count), Some(5));
        assert_eq!(wallet.nfts().len(), 1);
        assert_eq!(
            wallet.proposals().first().map(|p| p.state),
            Some(ProposalState::Active)
        );
    }

    #[test]
    fn short_passphrase_address_reuses_both_ends() {
        assert_eq!(derive_address("ab"), "0xAB...AB");
    }

    #[test]
    fn send_deducts_on_success() {
        let (mut wallet, seen) = unlocked_wallet();

        let request = wallet.send_transaction(2.0, "0xBB", 250.0);
        assert!(request.is_ok());
        wallet.tick(3.0);

        assert_eq!(wallet.balances().map(|b| b.soulvan_coin), Some(750.0));
        let events = seen.borrow();
        assert!(matches!(
            events.first(),
            Some(WalletEvent::TransactionComplete { success: true, .. })
        ));
    }

    #[test]
    fn insufficient_send_fails_without_deduction() {
        let (mut wallet, seen) = unlocked_wallet();

        assert!(wallet.send_transaction(2.0, "0xBB", 5000.0).is_ok());
        wallet.tick(3.0);

        assert_eq!(wallet.balances().map(|b| b.soulvan_coin), Some(1000.0));
        let events = seen.borrow();
        assert!(matches!(
            events.first(),
            Some(WalletEvent::TransactionComplete { success: false, .. })
        ));
    }

    #[test]
    fn mint_consumes_pending_reward_and_assigns_next_token() {
        let (mut wallet, seen) = unlocked_wallet();
        wallet.queue_reward("ipfs://soulvan/rewards/boss-1.json");
        assert_eq!(wallet.pending_rewards().len(), 1);

        assert!(
            wallet
                .mint_reward_nft(2.0, "ipfs://soulvan/rewards/boss-1.json")
                .is_ok()
        );
        wallet.tick(4.0);

        assert!(wallet.pending_rewards().is_empty());
        assert_eq!(
            seen.borrow().first(),
            Some(&WalletEvent::NftMinted {
                token_id: 6,
                metadata_uri: "ipfs://soulvan/rewards/boss-1.json".to_owned()
            })
        );
        assert_eq!(wallet.balances().map(|b| b.nft_count), Some(6));

        // The follow-up refresh reinstalls the canned snapshot.
        wallet.tick(4.5);
        assert_eq!(wallet.balances().map(|b| b.nft_count), Some(5));
    }

    #[test]
    fn vote_event_carries_the_submitted_choice() {
        let (mut wallet, seen) = unlocked_wallet();

        assert!(wallet.cast_vote(2.0, 1, VoteChoice::Against).is_ok());
        wallet.tick(3.5);

        assert_eq!(
            seen.borrow().first(),
            Some(&WalletEvent::VoteCast {
                proposal_id: 1,
                choice: VoteChoice::Against
            })
        );
    }

    #[test]
    fn lock_clears_caches_and_pending_work() {
        let (mut wallet, seen) = unlocked_wallet();
        assert!(wallet.send_transaction(2.0, "0xBB", 10.0).is_ok());

        wallet.lock();
        assert!(!wallet.is_unlocked());
        assert!(wallet.address().is_none());
        assert!(wallet.balances().is_none());
        assert!(wallet.nfts().is_empty());
        assert_eq!(seen.borrow().as_slice(), &[WalletEvent::Locked]);

        // The in-flight transfer was discarded with the queue.
        wallet.tick(100.0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn events_fire_exactly_once() {
        let (mut wallet, seen) = unlocked_wallet();
        assert!(wallet.cast_vote(2.0, 3, VoteChoice::For).is_ok());

        wallet.tick(3.5);
        wallet.tick(4.0);
        wallet.tick(50.0);
        assert_eq!(seen.borrow().len(), 1);
    }
}
