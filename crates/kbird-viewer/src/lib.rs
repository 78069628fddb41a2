//! KryptoBirdz viewer: a desktop single-page gallery over the wallet
//! boundary.
//!
//! The view is a pure function of [`state::ViewState`]; the only way state
//! changes is a [`state::ViewEvent`] applied by the drain loop in the root
//! component. The chain worker ([`worker`]) owns all provider traffic and
//! is the only producer of those events.

pub mod components;
pub mod state;
pub mod worker;
