//! Lease escrow error types.
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LeaseError {
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not yet initialized
    NotInitialized = 2,
    /// Lease terms fail validation
    InvalidTerms = 3,
    /// Lease has already been signed
    AlreadySigned = 4,
    /// Attached value is below the required security deposit
    InsufficientDeposit = 5,
    /// Caller is not the bound tenant
    NotTenant = 6,
    /// Attached value does not equal the rent amount exactly
    WrongAmount = 7,
    /// Rent for this period was already paid
    PeriodAlreadyPaid = 8,
    /// Period index is outside the lease term
    InvalidPeriod = 9,
    /// Completion attempted before all periods were paid
    TermNotFulfilled = 10,
    /// Wrong caller identity for a gated operation
    Unauthorized = 11,
    /// Operation not valid for the current lifecycle status
    InvalidState = 12,
}
