//! Core data types for the lease escrow contract.
//!
//! A lease instance is stored as two separate ledger entries:
//!
//! - [`LeaseTerms`] — written once at initialization; never mutated.
//! - [`LeaseState`] — written on every state transition.
//!
//! The escrow custody account is one token balance, but the deposit and
//! accrued rent are tracked as separate sub-balances in [`LeaseState`], so
//! settlement rules for one never touch the other.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle status of a lease.
///
/// ```text
/// Created ──sign_lease──► Signed ──pay_rent──► Active ──complete_lease──► Completed
///             Signed/Active ──terminate_early──► Terminated
/// ```
///
/// `Terminated` and `Completed` are terminal: only read-only queries are
/// valid afterwards.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LeaseStatus {
    /// Deployed and parameterized, waiting for a tenant to sign.
    Created,
    /// Tenant bound, security deposit in escrow, no rent paid yet.
    Signed,
    /// At least one rent period paid.
    Active,
    /// Ended early; penalty settled.
    Terminated,
    /// Full term paid out and deposit released.
    Completed,
}

/// Immutable contract parameters, fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaseTerms {
    /// Party that created the lease and receives rent.
    pub landlord: Address,
    /// Rent due per period.
    pub rent_amount: i128,
    /// Number of rent periods in the lease.
    pub term_months: u32,
    /// Required upfront deposit (minimum attached value for signing).
    pub security_deposit: i128,
    /// Portion of the deposit forfeited to the landlord on early exit.
    /// Never exceeds `security_deposit`.
    pub early_termination_penalty: i128,
    /// Opaque description of the property; no semantic constraints.
    pub property_location: String,
    /// Token used for all value movement (deposit, rent, settlements).
    pub payment_token: Address,
}

/// Mutable lease state, updated on every transition.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaseState {
    pub status: LeaseStatus,
    /// Bound at signing time; immutable thereafter.
    pub tenant: Option<Address>,
    /// Ledger timestamp recorded when the tenant signed.
    pub signed_at: Option<u64>,
    /// Count of rent periods successfully paid.
    pub months_paid: u32,
    /// Security-deposit sub-balance held in escrow.
    pub deposit_balance: i128,
    /// Accrued rent sub-balance held for the landlord.
    pub rent_balance: i128,
}

/// One record in the append-only payment ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentPayment {
    pub payer: Address,
    pub amount: i128,
    /// Zero-based rent period this payment covers.
    pub period: u32,
    /// Ledger timestamp at which the payment committed.
    pub timestamp: u64,
}
