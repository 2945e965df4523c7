#![no_std]

//! Lease Escrow Contract
//!
//! Holds a tenant's security deposit in escrow for the life of a rental
//! agreement. The tenant signs by funding the deposit, pays rent per period,
//! and either party may terminate early against a fixed penalty; completing
//! the full term releases the deposit back to the tenant.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod errors;
mod events;
mod lease;
mod storage;
mod types;


// Re-export public APIs
pub use errors::LeaseError;
pub use events::{LeaseCompleted, LeaseSigned, LeaseTerminated, RentPaid, RentWithdrawn};
pub use storage::DataKey;
pub use types::{LeaseState, LeaseStatus, LeaseTerms, RentPayment};

#[contract]
pub struct Contract;

#[contractimpl]
impl Contract {
    /// Initializes the lease with its immutable terms.
    /// Can only be called once.
    ///
    /// # Arguments
    /// * `landlord` - Party creating the lease; receives rent and penalties
    /// * `rent_amount` - Rent due per period, in token units
    /// * `term_months` - Number of rent periods in the lease
    /// * `security_deposit` - Required upfront deposit
    /// * `early_termination_penalty` - Deposit portion forfeited on early exit
    /// * `property_location` - Free-form property description
    /// * `payment_token` - Token used for all value movement
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the lease was already set up
    /// * `InvalidTerms` - If any monetary parameter is out of range
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        landlord: Address,
        rent_amount: i128,
        term_months: u32,
        security_deposit: i128,
        early_termination_penalty: i128,
        property_location: String,
        payment_token: Address,
    ) -> Result<(), LeaseError> {
        lease::initialize(
            &env,
            landlord,
            rent_amount,
            term_months,
            security_deposit,
            early_termination_penalty,
            property_location,
            payment_token,
        )
    }

    /// Tenant signs the lease, transferring at least the security deposit
    /// into escrow.
    ///
    /// Authorization:
    /// - Tenant MUST authorize the signing (and the token transfer)
    ///
    /// # Errors
    /// * `AlreadySigned` - If the lease is past the Created state
    /// * `Unauthorized` - If the landlord tries to sign their own lease
    /// * `InsufficientDeposit` - If `amount` is below the required deposit
    pub fn sign_lease(env: Env, tenant: Address, amount: i128) -> Result<(), LeaseError> {
        lease::sign_lease(&env, tenant, amount)
    }

    /// Tenant pays rent for one period. `amount` must equal the rent exactly.
    ///
    /// # Errors
    /// * `InvalidState` - If the lease is not Signed or Active
    /// * `NotTenant` - If the caller is not the bound tenant
    /// * `InvalidPeriod` - If `period` is outside the lease term
    /// * `PeriodAlreadyPaid` - If this period was already paid
    /// * `WrongAmount` - If `amount` differs from the rent
    pub fn pay_rent(env: Env, tenant: Address, period: u32, amount: i128) -> Result<(), LeaseError> {
        lease::pay_rent(&env, tenant, period, amount)
    }

    /// Ends the lease before the full term. Callable by the tenant or the
    /// landlord; the penalty is paid to the landlord and the remaining
    /// deposit refunded to the tenant.
    ///
    /// # Errors
    /// * `InvalidState` - If the lease is not Signed or Active, or the term
    ///   is already fully paid
    /// * `Unauthorized` - If the caller is neither party
    pub fn terminate_early(env: Env, caller: Address) -> Result<(), LeaseError> {
        lease::terminate_early(&env, caller)
    }

    /// Completes the lease once every period has been paid, releasing the
    /// full deposit to the tenant.
    ///
    /// # Errors
    /// * `InvalidState` - If the lease is not Active
    /// * `TermNotFulfilled` - If fewer than `term_months` periods were paid
    pub fn complete_lease(env: Env, caller: Address) -> Result<(), LeaseError> {
        lease::complete_lease(&env, caller)
    }

    /// Landlord withdraws the rent accrued in escrow so far. Returns the
    /// amount withdrawn.
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the landlord
    /// * `InvalidState` - If the lease is not Signed or Active
    pub fn withdraw_rent(env: Env, caller: Address) -> Result<i128, LeaseError> {
        lease::withdraw_rent(&env, caller)
    }

    /// Current lifecycle status, or None before initialization.
    pub fn get_status(env: Env) -> Option<LeaseStatus> {
        lease::get_status(&env)
    }

    /// Immutable lease terms, or None before initialization.
    pub fn get_terms(env: Env) -> Option<LeaseTerms> {
        lease::get_terms(&env)
    }

    /// Full mutable state, or None before initialization.
    pub fn get_state(env: Env) -> Option<LeaseState> {
        lease::get_state(&env)
    }

    /// Number of rent periods paid so far.
    pub fn get_months_paid(env: Env) -> u32 {
        lease::get_months_paid(&env)
    }

    /// Total value held in escrow (deposit plus accrued rent).
    pub fn get_balance(env: Env) -> i128 {
        lease::get_balance(&env)
    }

    /// The append-only rent payment ledger.
    pub fn get_payments(env: Env) -> Vec<RentPayment> {
        lease::get_payments(&env)
    }
}
