//! The KryptoBird token contract.
//!
//! An enumerable token whose payload is a reference string (a file
//! location). References are stored in an append-only list in mint order;
//! the mint index doubles as the token id.

use std::collections::{HashMap, HashSet};

use crate::error::ChainError;
use crate::types::{Address, TransferEvent};

/// Contract state for one deployed token collection.
#[derive(Debug, Clone)]
pub struct TokenContract {
    name: String,
    symbol: String,
    /// Minted references in submission order. The index is the token id.
    references: Vec<String>,
    /// Every reference minted so far, for duplicate rejection.
    existing: HashSet<String>,
    /// Token id to owning account.
    owners: HashMap<u64, Address>,
}

impl TokenContract {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            references: Vec::new(),
            existing: HashSet::new(),
            owners: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of tokens minted so far.
    pub fn total_supply(&self) -> u64 {
        self.references.len() as u64
    }

    /// Reference string of the token at `index` (0-based mint order).
    pub fn reference_at(&self, index: u64) -> Result<&str, ChainError> {
        self.references
            .get(index as usize)
            .map(String::as_str)
            .ok_or(ChainError::IndexOutOfRange {
                index,
                total: self.total_supply(),
            })
    }

    /// Owner of the token with the given id.
    pub fn owner_of(&self, token_id: u64) -> Result<Address, ChainError> {
        self.owners
            .get(&token_id)
            .copied()
            .ok_or(ChainError::UnknownToken(token_id))
    }

    /// Mint a new token for `sender`.
    ///
    /// Rejects if the reference was already minted. On success the reference
    /// is appended, ownership recorded, and the transfer event (from the
    /// zero address to the sender) returned for the receipt log.
    pub fn mint(
        &mut self,
        sender: Address,
        reference: impl Into<String>,
    ) -> Result<TransferEvent, ChainError> {
        let reference = reference.into();
        if self.existing.contains(&reference) {
            return Err(ChainError::DuplicateReference(reference));
        }

        let token_id = self.total_supply();
        self.existing.insert(reference.clone());
        self.references.push(reference);
        self.owners.insert(token_id, sender);

        Ok(TransferEvent {
            from: Address::ZERO,
            to: sender,
            token_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> TokenContract {
        TokenContract::new("KryptoBird", "KBIRDZ")
    }

    #[test]
    fn test_identity() {
        let c = contract();
        assert_eq!(c.name(), "KryptoBird");
        assert_eq!(c.symbol(), "KBIRDZ");
        assert_eq!(c.total_supply(), 0);
    }

    #[test]
    fn test_mint_appends_in_order() {
        let mut c = contract();
        let owner = Address::random();
        c.mint(owner, "https...1").unwrap();
        c.mint(owner, "https...2").unwrap();

        assert_eq!(c.total_supply(), 2);
        assert_eq!(c.reference_at(0).unwrap(), "https...1");
        assert_eq!(c.reference_at(1).unwrap(), "https...2");
    }

    #[test]
    fn test_mint_event_and_ownership() {
        let mut c = contract();
        let owner = Address::random();
        let event = c.mint(owner, "https...1").unwrap();

        assert_eq!(event.from, Address::ZERO);
        assert_eq!(event.to, owner);
        assert_eq!(event.token_id, 0);
        assert_eq!(c.owner_of(0).unwrap(), owner);
        assert!(c.owner_of(1).is_err());
    }

    #[test]
    fn test_duplicate_reference_rejected() {
        let mut c = contract();
        let owner = Address::random();
        c.mint(owner, "https...1").unwrap();

        let err = c.mint(owner, "https...1").unwrap_err();
        assert_eq!(err, ChainError::DuplicateReference("https...1".to_string()));
        assert_eq!(c.total_supply(), 1);
    }

    #[test]
    fn test_reference_out_of_range() {
        let c = contract();
        assert!(matches!(
            c.reference_at(0),
            Err(ChainError::IndexOutOfRange { index: 0, total: 0 })
        ));
    }
}
