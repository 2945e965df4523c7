//! Token error types.
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TokenError {
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not yet initialized
    NotInitialized = 2,
    /// Supply parameters out of range
    InvalidSupply = 3,
    /// Sender balance too low
    InsufficientBalance = 4,
    /// Mint would exceed the fixed supply cap
    SupplyCapExceeded = 5,
    /// Amount must be positive
    InvalidAmount = 6,
    /// Only the admin can mint
    Unauthorized = 7,
}
