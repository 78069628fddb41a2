//! The wallet provider capability.

use async_trait::async_trait;

use kbird_chain::{ChainRequest, ChainResponse};

use crate::error::ProviderError;

/// A wallet-capable execution context.
///
/// A provider gives the app access to the user's accounts and to the chain
/// the wallet is connected to. Every operation is a single awaited round
/// trip; implementations decide what a round trip costs.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Submit one chain request and await its response.
    async fn request(&self, request: ChainRequest) -> Result<ChainResponse, ProviderError>;
}
