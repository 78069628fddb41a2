//! End-to-end view flow: worker against a devnet-backed provider, events
//! folded into `ViewState` exactly as the root component does it.
//!
//! Scenarios share one test because provider injection is process-global.

use std::sync::Arc;

use futures::channel::mpsc::{unbounded, UnboundedSender};
use tokio::sync::mpsc;

use kbird_chain::{Devnet, TokenArtifact, DEV_NETWORK_ID};
use kbird_viewer::state::{MintStatus, Phase, ViewState};
use kbird_viewer::worker::{self, FetchStrategy, MintRequest, WorkerConfig};
use kbird_wallet::{eject, inject, DevProvider};

/// Run the worker to completion and fold its events into a fresh state.
/// `drive` gets the mint command sender; dropping it ends the worker.
async fn run_view<F>(config: WorkerConfig, drive: F) -> ViewState
where
    F: FnOnce(UnboundedSender<MintRequest>),
{
    let (mint_tx, mint_rx) = unbounded();
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(worker::run(config, mint_rx, events_tx));

    drive(mint_tx);
    handle.await.expect("worker task completes");

    let mut state = ViewState::new();
    while let Some(event) = events_rx.recv().await {
        state.apply(event);
    }
    state
}

fn sequential() -> WorkerConfig {
    WorkerConfig {
        fetch: FetchStrategy::Sequential,
    }
}

/// Devnet with the bundled contract deployed and the given references
/// pre-minted.
fn seeded_devnet(references: &[&str]) -> Devnet {
    let devnet = Devnet::new(DEV_NETWORK_ID);
    let artifact = TokenArtifact::bundled();
    let deployment = artifact.network(DEV_NETWORK_ID).expect("bundled network");
    devnet.deploy_token_at(deployment.address, "KryptoBird", "KBIRDZ");

    let minter = devnet.accounts()[0];
    for reference in references {
        let contract = deployment.address;
        devnet
            .execute(kbird_chain::ChainRequest::Send {
                contract,
                from: minter,
                op: kbird_chain::SendOp::Mint {
                    reference: reference.to_string(),
                },
            })
            .expect("seed mint");
    }
    devnet
}

#[tokio::test]
async fn test_view_flow_scenarios() {
    // --- No provider injected: the view parks in the no-wallet phase.
    eject();
    let state = run_view(sequential(), drop).await;
    assert_eq!(state.phase, Phase::NoWallet);
    assert!(state.account.is_none());
    assert!(state.catalog.is_empty());

    // --- Provider on a network with no deployment: blocking notice, empty
    // catalog, session fields still populated.
    let stray = Devnet::new(999);
    stray.deploy_token("KryptoBird", "KBIRDZ");
    inject(Arc::new(DevProvider::new(stray)));

    let state = run_view(sequential(), drop).await;
    assert_eq!(state.phase, Phase::ContractMissing { network_id: 999 });
    assert!(state.account.is_some());
    assert_eq!(state.network_id, Some(999));
    assert!(state.catalog.is_empty());

    // --- Happy path: seeded catalog loads in order, a mint appends the
    // submitted reference, a duplicate is rejected without touching the
    // catalog.
    let devnet = seeded_devnet(&["https...1", "https...2"]);
    let expected_account = devnet.accounts()[0];
    inject(Arc::new(DevProvider::new(devnet)));

    let state = run_view(sequential(), |mints| {
        mints
            .unbounded_send(MintRequest {
                reference: "https...3".to_string(),
            })
            .unwrap();
        mints
            .unbounded_send(MintRequest {
                reference: "https...1".to_string(),
            })
            .unwrap();
    })
    .await;

    assert_eq!(state.account, Some(expected_account));
    assert_eq!(state.network_id, Some(DEV_NETWORK_ID));
    assert_eq!(state.catalog, ["https...1", "https...2", "https...3"]);
    assert!(matches!(state.mint_status, MintStatus::Failed { .. }));
    // The catalog reached Ready before the mints were served.
    assert_eq!(state.phase, Phase::Ready);

    // --- Windowed fetch preserves index order.
    let devnet = seeded_devnet(&["a", "b", "c", "d", "e"]);
    inject(Arc::new(DevProvider::new(devnet)));

    let windowed = WorkerConfig {
        fetch: FetchStrategy::Windowed { window: 3 },
    };
    let state = run_view(windowed, drop).await;
    assert_eq!(state.phase, Phase::Ready);
    assert_eq!(state.catalog, ["a", "b", "c", "d", "e"]);

    eject();
}
