//! In-process development chain.
//!
//! `Devnet` plays the role the local development chain plays for the real
//! wallet stack: it holds a set of funded accounts, hosts deployed contract
//! instances, and executes wire requests against them. Suitable for local
//! runs and tests; nothing is persisted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::error::ChainError;
use crate::token::TokenContract;
use crate::types::{Address, NetworkId, Receipt, TxHash};
use crate::wire::{CallOp, ChainRequest, ChainResponse, SendOp};

const DEFAULT_ACCOUNTS: usize = 10;

/// Handle to an in-process chain. Cheap to clone; clones share state.
#[derive(Debug, Clone)]
pub struct Devnet {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    network_id: NetworkId,
    accounts: Vec<Address>,
    contracts: DashMap<Address, TokenContract>,
    /// Number of state-changing transactions accepted so far; doubles as
    /// the block height stamped on receipts.
    height: AtomicU64,
}

impl Devnet {
    /// Chain with the given network id and ten funded accounts.
    pub fn new(network_id: NetworkId) -> Self {
        Self::with_accounts(network_id, DEFAULT_ACCOUNTS)
    }

    /// Chain with a specific number of funded accounts.
    pub fn with_accounts(network_id: NetworkId, count: usize) -> Self {
        let accounts = (0..count).map(|_| Address::random()).collect();
        info!(network_id, accounts = count, "development chain started");
        Self {
            inner: Arc::new(Inner {
                network_id,
                accounts,
                contracts: DashMap::new(),
                height: AtomicU64::new(0),
            }),
        }
    }

    pub fn network_id(&self) -> NetworkId {
        self.inner.network_id
    }

    pub fn accounts(&self) -> Vec<Address> {
        self.inner.accounts.clone()
    }

    /// Deploy a token contract at a fresh random address.
    pub fn deploy_token(
        &self,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Address {
        let address = Address::random();
        self.deploy_token_at(address, name, symbol);
        address
    }

    /// Deploy a token contract at a known address, as a migration script
    /// pinning the artifact address would.
    pub fn deploy_token_at(
        &self,
        address: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) {
        let contract = TokenContract::new(name, symbol);
        info!(%address, name = contract.name(), "token contract deployed");
        self.inner.contracts.insert(address, contract);
    }

    /// Execute one wire request against the chain.
    pub fn execute(&self, request: ChainRequest) -> Result<ChainResponse, ChainError> {
        debug!(?request, "executing chain request");
        match request {
            ChainRequest::Accounts => Ok(ChainResponse::Accounts(self.accounts())),
            ChainRequest::NetworkId => Ok(ChainResponse::NetworkId(self.network_id())),
            ChainRequest::Call { contract, op } => {
                let contract = self
                    .inner
                    .contracts
                    .get(&contract)
                    .ok_or(ChainError::NoSuchContract(contract))?;
                Ok(match op {
                    CallOp::Name => ChainResponse::Text(contract.name().to_string()),
                    CallOp::Symbol => ChainResponse::Text(contract.symbol().to_string()),
                    CallOp::TotalSupply => ChainResponse::Count(contract.total_supply()),
                    CallOp::ReferenceAt(index) => {
                        ChainResponse::Text(contract.reference_at(index)?.to_string())
                    }
                })
            }
            ChainRequest::Send { contract, from, op } => {
                let mut contract = self
                    .inner
                    .contracts
                    .get_mut(&contract)
                    .ok_or(ChainError::NoSuchContract(contract))?;
                let event = match op {
                    SendOp::Mint { reference } => contract.mint(from, reference)?,
                };
                let block_number = self.inner.height.fetch_add(1, Ordering::SeqCst) + 1;
                Ok(ChainResponse::Receipt(Receipt {
                    tx_hash: TxHash::random(),
                    block_number,
                    events: vec![event],
                }))
            }
        }
    }
}
