//! # KBird Chain
//!
//! Chain-side building blocks for the KryptoBirdz gallery.
//!
//! This crate holds everything that lives on the far side of the wallet
//! boundary:
//!
//! - **Core types**: [`Address`], [`TxHash`], [`TransferEvent`], [`Receipt`]
//! - **TokenContract**: the KryptoBird reference registry (append-only list
//!   of minted file locations with duplicate rejection and owner tracking)
//! - **Wire surface**: [`ChainRequest`]/[`ChainResponse`], one request per
//!   network round trip
//! - **Devnet**: an in-process development chain hosting deployed contract
//!   instances and funded accounts, for local runs and tests
//! - **TokenArtifact**: bundled deployment metadata mapping network ids to
//!   contract addresses

pub mod artifact;
pub mod devnet;
pub mod error;
pub mod token;
pub mod types;
pub mod wire;

pub use artifact::{NetworkDeployment, TokenArtifact};
pub use devnet::Devnet;
pub use error::{AddressParseError, ChainError};
pub use token::TokenContract;
pub use types::{Address, NetworkId, Receipt, TransferEvent, TxHash};
pub use wire::{CallOp, ChainRequest, ChainResponse, SendOp};

/// Network id the local development chain reports by default.
pub const DEV_NETWORK_ID: NetworkId = 5777;
