use thiserror::Error;

use crate::types::Address;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("reference already minted: {0}")]
    DuplicateReference(String),
    #[error("token index {index} out of range (total supply {total})")]
    IndexOutOfRange { index: u64, total: u64 },
    #[error("unknown token id {0}")]
    UnknownToken(u64),
    #[error("no contract deployed at {0}")]
    NoSuchContract(Address),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid address: {0}")]
pub struct AddressParseError(pub String);
