//! View state and its single mutation path.
//!
//! The catalog is appended to from two places (the bulk fetch and mint
//! confirmations), so both arrive here as [`ViewEvent`]s applied by one
//! drain loop. No other code mutates [`ViewState`].

use kbird_chain::{Address, NetworkId};

/// Where the view is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Startup sequence still running.
    Booting,
    /// No wallet provider is injected; nothing else will happen.
    NoWallet,
    /// The wallet's network has no contract deployment. Absorbing: the user
    /// must switch network and relaunch.
    ContractMissing { network_id: NetworkId },
    /// Catalog fetch in flight; progress is `catalog.len()` of `total`.
    Loading { total: u64 },
    /// Catalog loaded, mint form live.
    Ready,
    /// A startup call failed.
    Failed { message: String },
}

/// Outcome surface for the mint form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MintStatus {
    #[default]
    Idle,
    Pending,
    Failed {
        message: String,
    },
}

/// Everything the render reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub phase: Phase,
    /// Active account, read once at startup.
    pub account: Option<Address>,
    /// Network the wallet reported at startup; never re-read.
    pub network_id: Option<NetworkId>,
    /// Minted references in index order. Append-only.
    pub catalog: Vec<String>,
    pub mint_status: MintStatus,
}

/// State changes emitted by the chain worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ProviderMissing,
    SessionEstablished {
        account: Address,
        network_id: NetworkId,
    },
    ContractMissing {
        network_id: NetworkId,
    },
    CatalogTotal {
        total: u64,
    },
    ReferenceLoaded {
        index: u64,
        reference: String,
    },
    CatalogLoaded,
    MintSubmitted,
    /// Mint confirmed; carries the reference the user actually submitted.
    Minted {
        reference: String,
    },
    MintFailed {
        message: String,
    },
    StartupFailed {
        message: String,
    },
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Booting,
            account: None,
            network_id: None,
            catalog: Vec::new(),
            mint_status: MintStatus::Idle,
        }
    }

    /// Apply one event. The sole mutation path for the view.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::ProviderMissing => {
                self.phase = Phase::NoWallet;
            }
            ViewEvent::SessionEstablished {
                account,
                network_id,
            } => {
                self.account = Some(account);
                self.network_id = Some(network_id);
            }
            ViewEvent::ContractMissing { network_id } => {
                self.phase = Phase::ContractMissing { network_id };
            }
            ViewEvent::CatalogTotal { total } => {
                self.phase = Phase::Loading { total };
            }
            ViewEvent::ReferenceLoaded { index, reference } => {
                // The worker delivers references in index order regardless
                // of fetch strategy.
                debug_assert_eq!(index as usize, self.catalog.len());
                self.catalog.push(reference);
            }
            ViewEvent::CatalogLoaded => {
                self.phase = Phase::Ready;
            }
            ViewEvent::MintSubmitted => {
                self.mint_status = MintStatus::Pending;
            }
            ViewEvent::Minted { reference } => {
                self.catalog.push(reference);
                self.mint_status = MintStatus::Idle;
            }
            ViewEvent::MintFailed { message } => {
                self.mint_status = MintStatus::Failed { message };
            }
            ViewEvent::StartupFailed { message } => {
                self.phase = Phase::Failed { message };
            }
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
