//! Provider backed by the in-process development chain.

use async_trait::async_trait;

use kbird_chain::{ChainRequest, ChainResponse, Devnet};
use tracing::trace;

use crate::error::ProviderError;
use crate::provider::WalletProvider;

/// Wallet provider wired to a [`Devnet`].
///
/// Used by local runs and tests in place of an injected browser wallet.
#[derive(Debug, Clone)]
pub struct DevProvider {
    devnet: Devnet,
}

impl DevProvider {
    pub fn new(devnet: Devnet) -> Self {
        Self { devnet }
    }

    pub fn devnet(&self) -> &Devnet {
        &self.devnet
    }
}

#[async_trait]
impl WalletProvider for DevProvider {
    async fn request(&self, request: ChainRequest) -> Result<ChainResponse, ProviderError> {
        trace!(?request, "dev provider round trip");
        // Keep each request an actual suspension point, as it is against a
        // remote chain.
        tokio::task::yield_now().await;
        Ok(self.devnet.execute(request)?)
    }
}
