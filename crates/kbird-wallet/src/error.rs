use thiserror::Error;

use kbird_chain::ChainError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("no wallet provider is injected")]
    Absent,
    #[error("provider exposes no accounts")]
    NoAccounts,
    #[error("contract interface does not expose `{0}`")]
    MissingOperation(&'static str),
    #[error("response does not match the requested operation")]
    ResponseMismatch,
    #[error(transparent)]
    Chain(#[from] ChainError),
}
