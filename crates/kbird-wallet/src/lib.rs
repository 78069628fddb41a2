//! # KBird Wallet
//!
//! The wallet side of the KryptoBirdz gallery: how the view reaches the
//! chain.
//!
//! - **[`WalletProvider`]**: the capability an execution context may inject.
//!   Everything the app does on-chain is one [`request`] round trip through
//!   this trait.
//! - **Injection registry**: [`inject`] installs a provider process-wide,
//!   [`detect_provider`] discovers it. This mirrors the browser pattern of a
//!   wallet extension injecting itself into the page.
//! - **[`DevProvider`]**: a provider backed by the in-process [`Devnet`],
//!   for local runs and tests.
//! - **[`WalletClient`] / [`TokenHandle`]**: the typed surface the view
//!   consumes — session reads plus the contract operations.
//!
//! [`request`]: WalletProvider::request
//! [`Devnet`]: kbird_chain::Devnet

pub mod client;
pub mod dev;
pub mod error;
pub mod inject;
pub mod provider;
pub mod token;

pub use client::WalletClient;
pub use dev::DevProvider;
pub use error::ProviderError;
pub use inject::{detect_provider, eject, inject};
pub use provider::WalletProvider;
pub use token::TokenHandle;
