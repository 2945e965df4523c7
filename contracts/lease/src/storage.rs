//! Storage key definitions for the lease escrow contract.
use soroban_sdk::contracttype;

/// Storage key variants.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable lease terms (instance storage)
    Terms,
    /// Mutable lease state (instance storage)
    State,
    /// Append-only payment ledger (persistent storage)
    Payments,
}
