//! Request/response surface between a wallet provider and the chain.
//!
//! One [`ChainRequest`] is one network round trip. Read-only operations go
//! through [`ChainRequest::Call`], state-changing ones through
//! [`ChainRequest::Send`] with an explicit sender account.

use crate::types::{Address, NetworkId, Receipt};

/// Read-only contract operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOp {
    Name,
    Symbol,
    TotalSupply,
    ReferenceAt(u64),
}

/// State-changing contract operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOp {
    Mint { reference: String },
}

/// A single request submitted through a wallet provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainRequest {
    /// List the accounts the wallet exposes.
    Accounts,
    /// Identifier of the network the wallet is connected to.
    NetworkId,
    /// Read-only contract call.
    Call { contract: Address, op: CallOp },
    /// State-changing contract call signed by `from`.
    Send {
        contract: Address,
        from: Address,
        op: SendOp,
    },
}

/// Response to one [`ChainRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainResponse {
    Accounts(Vec<Address>),
    NetworkId(NetworkId),
    Text(String),
    Count(u64),
    Receipt(Receipt),
}
