//! UI components for the gallery.
//!
//! Everything renders off [`ViewState`]; the mint form is the only input
//! surface and pushes its submission to the chain worker coroutine.

use dioxus::prelude::*;

use crate::state::{MintStatus, Phase, ViewState};
use crate::worker::MintRequest;

/// Main application component.
#[component]
pub fn App(state: Signal<ViewState>) -> Element {
    rsx! {
        div { class: "app-container",
            Navbar { state }
            main { class: "main-content",
                StageContent { state }
            }
        }
    }
}

/// Dark top bar: brand on the left, active account on the right.
#[component]
fn Navbar(state: Signal<ViewState>) -> Element {
    let account = state.read().account;

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-brand", "Krypto Birdz NFTs (Non-fungible Tokens)" }
            div { class: "navbar-account",
                if let Some(account) = account {
                    small { "{account}" }
                } else {
                    small { class: "muted", "no wallet connected" }
                }
            }
        }
    }
}

/// Phase router.
#[component]
fn StageContent(state: Signal<ViewState>) -> Element {
    let phase = state.read().phase.clone();
    match phase {
        Phase::Booting => rsx! {
            StatusNotice {
                title: "Connecting".to_string(),
                detail: "Detecting wallet provider...".to_string(),
            }
        },
        Phase::NoWallet => rsx! {
            StatusNotice {
                title: "No wallet detected".to_string(),
                detail: "No wallet provider is injected into this session. Connect a wallet and relaunch.".to_string(),
            }
        },
        Phase::ContractMissing { network_id } => rsx! {
            BlockingNotice {
                message: format!("Smart contract not deployed on network {network_id}. Switch network and relaunch."),
            }
        },
        Phase::Failed { message } => rsx! {
            BlockingNotice { message: format!("Startup failed: {message}") }
        },
        Phase::Loading { total } => rsx! {
            div { class: "content",
                Headline {}
                LoadingLine { state, total }
                Gallery { state }
            }
        },
        Phase::Ready => rsx! {
            div { class: "content",
                Headline {}
                MintForm { state }
                hr {}
                Gallery { state }
            }
        },
    }
}

#[component]
fn Headline() -> Element {
    rsx! {
        h1 { class: "headline", "KryptoBirdz - NFT Marketplace" }
    }
}

/// Non-blocking informational panel (booting, no wallet).
#[component]
fn StatusNotice(title: String, detail: String) -> Element {
    rsx! {
        div { class: "status-notice",
            h2 { "{title}" }
            p { "{detail}" }
        }
    }
}

/// Full-screen blocking notice with no way forward (missing deployment,
/// failed startup).
#[component]
fn BlockingNotice(message: String) -> Element {
    rsx! {
        div { class: "blocking-overlay",
            div { class: "blocking-card",
                h2 { "Nothing to show" }
                p { "{message}" }
            }
        }
    }
}

#[component]
fn LoadingLine(state: Signal<ViewState>, total: u64) -> Element {
    let loaded = state.read().catalog.len();

    rsx! {
        div { class: "loading-line", "Loading tokens... {loaded}/{total}" }
    }
}

/// The mint form: one text field, one button, one failure line.
#[component]
fn MintForm(state: Signal<ViewState>) -> Element {
    let mints = use_coroutine_handle::<MintRequest>();
    let mut reference = use_signal(String::new);
    let status = state.read().mint_status.clone();
    let pending = status == MintStatus::Pending;

    rsx! {
        div { class: "mint-form",
            input {
                r#type: "text",
                class: "mint-input",
                placeholder: "Add a file location",
                value: "{reference}",
                oninput: move |evt| reference.set(evt.value()),
            }
            button {
                class: "mint-button",
                disabled: pending,
                onclick: move |_| {
                    mints.send(MintRequest {
                        reference: reference.read().clone(),
                    });
                    reference.set(String::new());
                },
                if pending { "MINTING..." } else { "MINT" }
            }
            if let MintStatus::Failed { message } = status {
                div { class: "mint-error", "{message}" }
            }
        }
    }
}

#[component]
fn Gallery(state: Signal<ViewState>) -> Element {
    let catalog = state.read().catalog.clone();
    let is_empty = catalog.is_empty();

    rsx! {
        div { class: "token-grid",
            for (index, reference) in catalog.into_iter().enumerate() {
                TokenCard { index, reference }
            }
        }
        if is_empty {
            div { class: "empty-state",
                p { "No tokens minted yet." }
            }
        }
    }
}

/// One card per catalog entry: the reference as an image source plus a
/// download link.
#[component]
fn TokenCard(index: usize, reference: String) -> Element {
    rsx! {
        div { class: "token-card",
            img {
                class: "token-image",
                src: "{reference}",
                alt: "KryptoBird #{index}",
            }
            div { class: "token-body",
                h3 { class: "token-title", "KryptoBirdz" }
                p { class: "token-text",
                    "The KryptoBirdz are 20 uniquely generated KBirds from the cyberpunk cloud galaxy Mystopia! There's only one for each!"
                }
                a { class: "token-download", href: "{reference}", "Download" }
            }
        }
    }
}
