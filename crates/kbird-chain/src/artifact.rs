//! Deployment artifact for the KryptoBird contract.
//!
//! The artifact is the metadata a build pipeline leaves behind after
//! deploying a contract: the interface it exposes and the address it lives
//! at on each network. The viewer resolves its contract handle from this
//! mapping at startup; a network id missing from the map means the contract
//! is not deployed there.

use std::collections::HashMap;

use serde::Deserialize;

use crate::types::{Address, NetworkId};

/// Embedded artifact for the bundled KryptoBird deployment.
const BUNDLED_ARTIFACT: &str = include_str!("../artifacts/KryptoBird.json");

/// Where a contract is deployed on one network.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkDeployment {
    pub address: Address,
}

/// Contract metadata plus its per-network deployments.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenArtifact {
    pub contract_name: String,
    /// Names of the operations the deployed contract exposes.
    pub interface: Vec<String>,
    pub networks: HashMap<NetworkId, NetworkDeployment>,
}

impl TokenArtifact {
    /// The artifact shipped with this build.
    pub fn bundled() -> Self {
        // The artifact is a compile-time asset; failing to parse it is a
        // build defect, not a runtime condition.
        serde_json::from_str(BUNDLED_ARTIFACT).expect("bundled artifact parses")
    }

    /// Deployment metadata for a network, if the contract is deployed there.
    pub fn network(&self, id: NetworkId) -> Option<&NetworkDeployment> {
        self.networks.get(&id)
    }
}
