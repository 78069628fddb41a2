//! Chain worker: the one task that talks to the wallet provider.
//!
//! Startup runs once with no retries: detect the provider, read the
//! session, resolve the deployed contract, fetch the catalog. After that
//! the worker serves mint commands from the form. Every state change it
//! produces flows out as a [`ViewEvent`].

use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use kbird_chain::{Address, TokenArtifact};
use kbird_wallet::{detect_provider, ProviderError, TokenHandle, WalletClient};

use crate::state::ViewEvent;

/// A mint submitted from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintRequest {
    pub reference: String,
}

/// How the catalog is fetched after the total count is known. Either way
/// references are delivered in strictly increasing index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    /// One round trip at a time, the next issued only after the previous
    /// resolves.
    Sequential,
    /// Up to `window` round trips in flight, results re-ordered by index.
    Windowed { window: usize },
}

impl FetchStrategy {
    /// A window of one collapses to the sequential loop.
    pub fn from_window(window: usize) -> Self {
        if window <= 1 {
            FetchStrategy::Sequential
        } else {
            FetchStrategy::Windowed { window }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WorkerConfig {
    pub fetch: FetchStrategy,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            fetch: FetchStrategy::Sequential,
        }
    }
}

struct Session {
    account: Address,
    token: TokenHandle,
}

/// Spawn the worker on the runtime.
pub fn start(
    config: WorkerConfig,
    commands: UnboundedReceiver<MintRequest>,
    events: mpsc::UnboundedSender<ViewEvent>,
) {
    tokio::spawn(run(config, commands, events));
}

/// Run the worker to completion: startup, then the mint command loop.
/// Returns when the command channel closes or the view drops its receiver.
pub async fn run(
    config: WorkerConfig,
    mut commands: UnboundedReceiver<MintRequest>,
    events: mpsc::UnboundedSender<ViewEvent>,
) {
    let Some(session) = startup(config, &events).await else {
        return;
    };

    while let Some(MintRequest { reference }) = commands.next().await {
        if events.send(ViewEvent::MintSubmitted).is_err() {
            return;
        }
        match session.token.mint(session.account, reference.clone()).await {
            Ok(receipt) => {
                info!(tx_hash = %receipt.tx_hash, %reference, "mint confirmed");
                if events.send(ViewEvent::Minted { reference }).is_err() {
                    return;
                }
            }
            Err(e) => {
                warn!(error = %e, %reference, "mint rejected");
                let message = e.to_string();
                if events.send(ViewEvent::MintFailed { message }).is_err() {
                    return;
                }
            }
        }
    }
}

/// The startup sequence. Returns the session the mint loop needs, or None
/// when the view ended up in a terminal phase (no wallet, no deployment,
/// failed call).
async fn startup(
    config: WorkerConfig,
    events: &mpsc::UnboundedSender<ViewEvent>,
) -> Option<Session> {
    let Some(provider) = detect_provider() else {
        warn!("no wallet provider detected");
        let _ = events.send(ViewEvent::ProviderMissing);
        return None;
    };
    info!("wallet provider connected");

    let client = WalletClient::new(provider);
    match establish(config, &client, events).await {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "startup failed");
            let _ = events.send(ViewEvent::StartupFailed {
                message: e.to_string(),
            });
            None
        }
    }
}

async fn establish(
    config: WorkerConfig,
    client: &WalletClient,
    events: &mpsc::UnboundedSender<ViewEvent>,
) -> Result<Option<Session>, ProviderError> {
    let accounts = client.accounts().await?;
    let account = accounts.first().copied().ok_or(ProviderError::NoAccounts)?;
    let network_id = client.network_id().await?;
    let _ = events.send(ViewEvent::SessionEstablished {
        account,
        network_id,
    });

    let artifact = TokenArtifact::bundled();
    let Some(deployment) = artifact.network(network_id) else {
        warn!(network_id, "contract not deployed on this network");
        let _ = events.send(ViewEvent::ContractMissing { network_id });
        return Ok(None);
    };
    let token = client.token_at(&artifact.interface, deployment.address)?;

    let total = token.total_supply().await?;
    let _ = events.send(ViewEvent::CatalogTotal { total });

    match config.fetch {
        FetchStrategy::Sequential => {
            for index in 0..total {
                let reference = token.reference_at(index).await?;
                let _ = events.send(ViewEvent::ReferenceLoaded { index, reference });
            }
        }
        FetchStrategy::Windowed { window } => {
            let mut fetches = futures::stream::iter(0..total)
                .map(|index| {
                    let token = token.clone();
                    async move { (index, token.reference_at(index).await) }
                })
                .buffered(window);
            while let Some((index, result)) = fetches.next().await {
                let reference = result?;
                let _ = events.send(ViewEvent::ReferenceLoaded { index, reference });
            }
        }
    }

    info!(total, "catalog loaded");
    let _ = events.send(ViewEvent::CatalogLoaded);

    Ok(Some(Session { account, token }))
}
