//! Process-global provider injection.
//!
//! The host environment installs a provider before the view starts; the
//! view only ever asks whether one is present. Browser wallets work the
//! same way: the extension injects an object into the page, and the app
//! detects it.

use std::sync::{Arc, RwLock};

use crate::provider::WalletProvider;

static INJECTED: RwLock<Option<Arc<dyn WalletProvider>>> = RwLock::new(None);

/// Install a provider for the rest of the process to detect.
pub fn inject(provider: Arc<dyn WalletProvider>) {
    *INJECTED.write().unwrap() = Some(provider);
}

/// Remove the injected provider, if any.
pub fn eject() {
    *INJECTED.write().unwrap() = None;
}

/// The injected provider, if one is present.
pub fn detect_provider() -> Option<Arc<dyn WalletProvider>> {
    INJECTED.read().unwrap().clone()
}
