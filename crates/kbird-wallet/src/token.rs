//! Typed handle for a deployed KryptoBird contract.

use std::sync::Arc;

use kbird_chain::{Address, CallOp, ChainRequest, ChainResponse, Receipt, SendOp};

use crate::error::ProviderError;
use crate::provider::WalletProvider;

/// Remote contract surface. Every method is one awaited round trip through
/// the wallet provider and returns an explicit result.
#[derive(Clone)]
pub struct TokenHandle {
    provider: Arc<dyn WalletProvider>,
    address: Address,
}

impl std::fmt::Debug for TokenHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenHandle")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl TokenHandle {
    /// Operations a deployment interface must list for this handle to work.
    pub const REQUIRED_OPS: [&'static str; 5] =
        ["name", "symbol", "totalSupply", "referenceAt", "mint"];

    pub(crate) fn new(provider: Arc<dyn WalletProvider>, address: Address) -> Self {
        Self { provider, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn name(&self) -> Result<String, ProviderError> {
        self.call_text(CallOp::Name).await
    }

    pub async fn symbol(&self) -> Result<String, ProviderError> {
        self.call_text(CallOp::Symbol).await
    }

    /// Number of tokens minted so far.
    pub async fn total_supply(&self) -> Result<u64, ProviderError> {
        match self.call(CallOp::TotalSupply).await? {
            ChainResponse::Count(n) => Ok(n),
            _ => Err(ProviderError::ResponseMismatch),
        }
    }

    /// Reference string of the token at `index` (0-based mint order).
    pub async fn reference_at(&self, index: u64) -> Result<String, ProviderError> {
        self.call_text(CallOp::ReferenceAt(index)).await
    }

    /// Submit a mint signed by `from` and await its receipt.
    pub async fn mint(
        &self,
        from: Address,
        reference: impl Into<String>,
    ) -> Result<Receipt, ProviderError> {
        let request = ChainRequest::Send {
            contract: self.address,
            from,
            op: SendOp::Mint {
                reference: reference.into(),
            },
        };
        match self.provider.request(request).await? {
            ChainResponse::Receipt(receipt) => Ok(receipt),
            _ => Err(ProviderError::ResponseMismatch),
        }
    }

    async fn call(&self, op: CallOp) -> Result<ChainResponse, ProviderError> {
        self.provider
            .request(ChainRequest::Call {
                contract: self.address,
                op,
            })
            .await
    }

    async fn call_text(&self, op: CallOp) -> Result<String, ProviderError> {
        match self.call(op).await? {
            ChainResponse::Text(s) => Ok(s),
            _ => Err(ProviderError::ResponseMismatch),
        }
    }
}
