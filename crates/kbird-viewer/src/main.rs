//! KryptoBirdz viewer - Main entry point
//!
//! A Dioxus desktop application showing the minted KryptoBird collection
//! and a mint form, over a wallet provider backed by the in-process
//! development chain.
//!
//! Usage:
//!   kbird-viewer --seed https://birds.example/1.png --seed https://birds.example/2.png
//!   kbird-viewer --network-id 1        (no deployment there: blocking notice)
//!   kbird-viewer --no-wallet           (provider-absent path)

use std::sync::{Arc, OnceLock};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use tokio::sync::mpsc;
use tracing::warn;

use kbird_chain::{ChainRequest, Devnet, SendOp, TokenArtifact, DEV_NETWORK_ID};
use kbird_viewer::components::App;
use kbird_viewer::state::ViewState;
use kbird_viewer::worker::{self, FetchStrategy, MintRequest, WorkerConfig};
use kbird_wallet::{inject, DevProvider};

/// Embedded stylesheet.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Fetch strategy chosen on the command line, read by the root component.
static FETCH: OnceLock<FetchStrategy> = OnceLock::new();

fn fetch_strategy() -> FetchStrategy {
    FETCH.get().copied().unwrap_or(FetchStrategy::Sequential)
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "kbird-viewer")]
#[command(about = "KryptoBirdz NFT gallery over a local development chain")]
struct Args {
    /// Network id the development chain reports
    #[arg(long, default_value_t = DEV_NETWORK_ID)]
    network_id: u64,

    /// Number of funded development accounts
    #[arg(long, default_value_t = 10)]
    accounts: usize,

    /// Catalog fetch window; 1 fetches one token per round trip
    #[arg(long, default_value_t = 1)]
    fetch_window: usize,

    /// Reference minted into the contract before launch (repeatable)
    #[arg(long)]
    seed: Vec<String>,

    /// Launch without injecting a wallet provider
    #[arg(long)]
    no_wallet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();
    ensure!(args.accounts > 0, "need at least one funded account");

    FETCH
        .set(FetchStrategy::from_window(args.fetch_window))
        .ok();

    // Stand in for the external chain: deploy the bundled contract where
    // the artifact says it lives, then seed the collection.
    let devnet = Devnet::with_accounts(args.network_id, args.accounts);
    let artifact = TokenArtifact::bundled();
    match artifact.network(args.network_id) {
        Some(deployment) => {
            devnet.deploy_token_at(deployment.address, "KryptoBird", "KBIRDZ");
            let minter = devnet.accounts()[0];
            for reference in &args.seed {
                devnet
                    .execute(ChainRequest::Send {
                        contract: deployment.address,
                        from: minter,
                        op: SendOp::Mint {
                            reference: reference.clone(),
                        },
                    })
                    .with_context(|| format!("seeding reference {reference}"))?;
            }
        }
        None => {
            warn!(
                network_id = args.network_id,
                "artifact has no deployment for this network"
            );
        }
    }

    if !args.no_wallet {
        inject(Arc::new(DevProvider::new(devnet)));
    }

    // Launch the desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title("KryptoBirdz - NFT Marketplace")
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 860))
                        .with_resizable(true),
                )
                .with_custom_head(format!(r#"<style>{STYLES_CSS}</style>"#)),
        )
        .launch(RootApp);

    Ok(())
}

/// Root application component
fn RootApp() -> Element {
    let mut state = use_signal(ViewState::new);

    // The chain worker is the only producer of view events and this drain
    // is their only consumer; the coroutine doubles as the mint command
    // channel for the form.
    use_coroutine(move |commands: UnboundedReceiver<MintRequest>| async move {
        let config = WorkerConfig {
            fetch: fetch_strategy(),
        };
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        worker::start(config, commands, events_tx);

        while let Some(event) = events_rx.recv().await {
            state.write().apply(event);
        }
    });

    rsx! {
        App { state }
    }
}
