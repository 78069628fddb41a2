//! Client bound to a detected wallet provider.

use std::sync::Arc;

use kbird_chain::{Address, ChainRequest, ChainResponse, NetworkId};

use crate::error::ProviderError;
use crate::inject::detect_provider;
use crate::provider::WalletProvider;
use crate::token::TokenHandle;

/// Session-level view of a wallet provider: accounts, network, contract
/// attachment.
#[derive(Clone)]
pub struct WalletClient {
    provider: Arc<dyn WalletProvider>,
}

impl WalletClient {
    /// Bind a client to an already-detected provider.
    pub fn new(provider: Arc<dyn WalletProvider>) -> Self {
        Self { provider }
    }

    /// Detect the injected provider and bind a client to it.
    pub fn detect() -> Result<Self, ProviderError> {
        detect_provider().map(Self::new).ok_or(ProviderError::Absent)
    }

    /// Accounts the wallet exposes, in wallet order.
    pub async fn accounts(&self) -> Result<Vec<Address>, ProviderError> {
        match self.provider.request(ChainRequest::Accounts).await? {
            ChainResponse::Accounts(accounts) => Ok(accounts),
            _ => Err(ProviderError::ResponseMismatch),
        }
    }

    /// Identifier of the network the wallet is connected to.
    pub async fn network_id(&self) -> Result<NetworkId, ProviderError> {
        match self.provider.request(ChainRequest::NetworkId).await? {
            ChainResponse::NetworkId(id) => Ok(id),
            _ => Err(ProviderError::ResponseMismatch),
        }
    }

    /// Attach a token handle at `address`, checking that the deployment
    /// interface exposes every operation the handle issues.
    pub fn token_at(
        &self,
        interface: &[String],
        address: Address,
    ) -> Result<TokenHandle, ProviderError> {
        for op in TokenHandle::REQUIRED_OPS {
            if !interface.iter().any(|i| i == op) {
                return Err(ProviderError::MissingOperation(op));
            }
        }
        Ok(TokenHandle::new(self.provider.clone(), address))
    }
}
