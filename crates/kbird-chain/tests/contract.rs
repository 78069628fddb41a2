//! Contract boundary tests.
//!
//! These exercise a deployed KryptoBird contract through the wire surface,
//! the way the original harness deployed and drove the contract on a local
//! development chain.

use kbird_chain::{
    Address, CallOp, ChainError, ChainRequest, ChainResponse, Devnet, SendOp, DEV_NETWORK_ID,
};

fn deployed() -> (Devnet, Address) {
    let devnet = Devnet::new(DEV_NETWORK_ID);
    let contract = devnet.deploy_token("KryptoBird", "KBIRDZ");
    (devnet, contract)
}

fn call(devnet: &Devnet, contract: Address, op: CallOp) -> ChainResponse {
    devnet
        .execute(ChainRequest::Call { contract, op })
        .expect("call succeeds")
}

fn mint(
    devnet: &Devnet,
    contract: Address,
    from: Address,
    reference: &str,
) -> Result<ChainResponse, ChainError> {
    devnet.execute(ChainRequest::Send {
        contract,
        from,
        op: SendOp::Mint {
            reference: reference.to_string(),
        },
    })
}

fn total_supply(devnet: &Devnet, contract: Address) -> u64 {
    match call(devnet, contract, CallOp::TotalSupply) {
        ChainResponse::Count(n) => n,
        other => panic!("expected count, got {other:?}"),
    }
}

fn reference_at(devnet: &Devnet, contract: Address, index: u64) -> String {
    match call(devnet, contract, CallOp::ReferenceAt(index)) {
        ChainResponse::Text(s) => s,
        other => panic!("expected text, got {other:?}"),
    }
}

// ============================================================================
// Deployment
// ============================================================================

#[test]
fn test_deploys_with_nonzero_address() {
    let (_devnet, contract) = deployed();
    assert!(!contract.is_zero());
}

#[test]
fn test_has_a_name() {
    let (devnet, contract) = deployed();
    let ChainResponse::Text(name) = call(&devnet, contract, CallOp::Name) else {
        panic!("expected text");
    };
    assert_eq!(name, "KryptoBird");
}

#[test]
fn test_has_a_symbol() {
    let (devnet, contract) = deployed();
    let ChainResponse::Text(symbol) = call(&devnet, contract, CallOp::Symbol) else {
        panic!("expected text");
    };
    assert_eq!(symbol, "KBIRDZ");
}

// ============================================================================
// Minting
// ============================================================================

#[test]
fn test_mint_creates_a_new_token() {
    let (devnet, contract) = deployed();
    let sender = devnet.accounts()[0];

    let response = mint(&devnet, contract, sender, "https...1").unwrap();
    assert_eq!(total_supply(&devnet, contract), 1);

    // The receipt logs a single transfer from the zero address to the sender.
    let ChainResponse::Receipt(receipt) = response else {
        panic!("expected receipt");
    };
    assert_eq!(receipt.events.len(), 1);
    let event = receipt.events[0];
    assert_eq!(event.from, Address::ZERO);
    assert_eq!(event.to, sender);

    // Minting the same reference again is rejected.
    let err = mint(&devnet, contract, sender, "https...1").unwrap_err();
    assert!(matches!(err, ChainError::DuplicateReference(_)));
    assert_eq!(total_supply(&devnet, contract), 1);
}

#[test]
fn test_duplicate_mint_leaves_supply_unchanged() {
    let (devnet, contract) = deployed();
    let sender = devnet.accounts()[0];

    mint(&devnet, contract, sender, "https...1").unwrap();
    assert!(mint(&devnet, contract, sender, "https...1").is_err());
    assert_eq!(total_supply(&devnet, contract), 1);
    assert_eq!(reference_at(&devnet, contract, 0), "https...1");
}

// ============================================================================
// Indexing
// ============================================================================

#[test]
fn test_lists_references_in_submission_order() {
    let (devnet, contract) = deployed();
    let sender = devnet.accounts()[0];

    mint(&devnet, contract, sender, "https...1").unwrap();
    mint(&devnet, contract, sender, "https...2").unwrap();
    mint(&devnet, contract, sender, "https...3").unwrap();
    mint(&devnet, contract, sender, "https...4").unwrap();

    let total = total_supply(&devnet, contract);
    assert_eq!(total, 4);

    let result: Vec<String> = (0..total)
        .map(|i| reference_at(&devnet, contract, i))
        .collect();
    let expected = ["https...1", "https...2", "https...3", "https...4"];
    assert_eq!(result, expected);
}

#[test]
fn test_distinct_senders_share_one_catalog() {
    let (devnet, contract) = deployed();
    let accounts = devnet.accounts();

    mint(&devnet, contract, accounts[0], "https...a").unwrap();
    mint(&devnet, contract, accounts[1], "https...b").unwrap();

    assert_eq!(total_supply(&devnet, contract), 2);
    assert_eq!(reference_at(&devnet, contract, 0), "https...a");
    assert_eq!(reference_at(&devnet, contract, 1), "https...b");
}

#[test]
fn test_reference_index_past_supply_is_rejected() {
    let (devnet, contract) = deployed();
    let sender = devnet.accounts()[0];
    mint(&devnet, contract, sender, "https...1").unwrap();

    let err = devnet
        .execute(ChainRequest::Call {
            contract,
            op: CallOp::ReferenceAt(1),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ChainError::IndexOutOfRange { index: 1, total: 1 }
    ));
}
