//! Lease escrow state machine and fund movement.
//!
//! Every mutating operation follows checks-effects-interactions: all guards
//! run first, the new state is written to storage, and only then does any
//! outward token transfer happen. The host applies the whole invocation
//! atomically, so a failed guard leaves no partial state and moves no funds.

use soroban_sdk::{token, Address, Env, String, Vec};

use crate::errors::LeaseError;
use crate::events::{self, LeaseCompleted, LeaseSigned, LeaseTerminated, RentPaid, RentWithdrawn};
use crate::storage::DataKey;
use crate::types::{LeaseState, LeaseStatus, LeaseTerms, RentPayment};

const INSTANCE_TTL_THRESHOLD: u32 = 500_000;
const INSTANCE_TTL_EXTEND_TO: u32 = 500_000;

/// Validates construction parameters.
///
/// Rent, term and deposit must be positive; the early-termination penalty
/// must be non-negative and must not exceed the deposit.
pub fn validate_terms(
    rent_amount: i128,
    term_months: u32,
    security_deposit: i128,
    early_termination_penalty: i128,
) -> Result<(), LeaseError> {
    if rent_amount <= 0 || security_deposit <= 0 || term_months == 0 {
        return Err(LeaseError::InvalidTerms);
    }
    if early_termination_penalty < 0 || early_termination_penalty > security_deposit {
        return Err(LeaseError::InvalidTerms);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn initialize(
    env: &Env,
    landlord: Address,
    rent_amount: i128,
    term_months: u32,
    security_deposit: i128,
    early_termination_penalty: i128,
    property_location: String,
    payment_token: Address,
) -> Result<(), LeaseError> {
    if env.storage().instance().has(&DataKey::Terms) {
        return Err(LeaseError::AlreadyInitialized);
    }

    landlord.require_auth();
    validate_terms(
        rent_amount,
        term_months,
        security_deposit,
        early_termination_penalty,
    )?;

    let terms = LeaseTerms {
        landlord: landlord.clone(),
        rent_amount,
        term_months,
        security_deposit,
        early_termination_penalty,
        property_location,
        payment_token,
    };
    let state = LeaseState {
        status: LeaseStatus::Created,
        tenant: None,
        signed_at: None,
        months_paid: 0,
        deposit_balance: 0,
        rent_balance: 0,
    };

    env.storage().instance().set(&DataKey::Terms, &terms);
    env.storage().instance().set(&DataKey::State, &state);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);

    events::lease_created(env, landlord);

    Ok(())
}

/// Tenant signs the lease, escrowing the attached amount as the security
/// deposit.
///
/// The attached amount must cover the required deposit; anything above it is
/// escrowed too and returned by the normal settlement rules. The recorded
/// `signed_at` comes from ledger time, never from caller input.
pub fn sign_lease(env: &Env, tenant: Address, amount: i128) -> Result<(), LeaseError> {
    tenant.require_auth();

    let terms = load_terms(env)?;
    let mut state = load_state(env)?;

    if state.status != LeaseStatus::Created {
        return Err(LeaseError::AlreadySigned);
    }
    if tenant == terms.landlord {
        return Err(LeaseError::Unauthorized);
    }
    if amount < terms.security_deposit {
        return Err(LeaseError::InsufficientDeposit);
    }

    let now = env.ledger().timestamp();
    state.status = LeaseStatus::Signed;
    state.tenant = Some(tenant.clone());
    state.signed_at = Some(now);
    state.deposit_balance = amount;
    save_state(env, &state);

    let token = token::Client::new(env, &terms.payment_token);
    token.transfer(&tenant, &env.current_contract_address(), &amount);

    LeaseSigned {
        tenant,
        timestamp: now,
    }
    .publish(env);

    Ok(())
}

/// Tenant pays rent for one period. The attached amount must equal the rent
/// exactly; each period can be paid once.
pub fn pay_rent(env: &Env, tenant: Address, period: u32, amount: i128) -> Result<(), LeaseError> {
    tenant.require_auth();

    let terms = load_terms(env)?;
    let mut state = load_state(env)?;

    if state.status != LeaseStatus::Signed && state.status != LeaseStatus::Active {
        return Err(LeaseError::InvalidState);
    }
    if state.tenant.as_ref() != Some(&tenant) {
        return Err(LeaseError::NotTenant);
    }
    if period >= terms.term_months {
        return Err(LeaseError::InvalidPeriod);
    }
    let mut payments = load_payments(env);
    if payments.iter().any(|p| p.period == period) {
        return Err(LeaseError::PeriodAlreadyPaid);
    }
    if amount != terms.rent_amount {
        return Err(LeaseError::WrongAmount);
    }

    payments.push_back(RentPayment {
        payer: tenant.clone(),
        amount,
        period,
        timestamp: env.ledger().timestamp(),
    });
    state.status = LeaseStatus::Active;
    state.months_paid += 1;
    state.rent_balance += amount;
    save_state(env, &state);
    env.storage().persistent().set(&DataKey::Payments, &payments);

    let token = token::Client::new(env, &terms.payment_token);
    token.transfer(&tenant, &env.current_contract_address(), &amount);

    RentPaid {
        tenant,
        period,
        amount,
    }
    .publish(env);

    Ok(())
}

/// Either party ends the lease before the full term. The penalty goes to the
/// landlord, the rest of the deposit back to the tenant, and any accrued
/// rent is flushed to the landlord so nothing is stranded in escrow.
pub fn terminate_early(env: &Env, caller: Address) -> Result<(), LeaseError> {
    caller.require_auth();

    let terms = load_terms(env)?;
    let mut state = load_state(env)?;

    if state.status != LeaseStatus::Signed && state.status != LeaseStatus::Active {
        return Err(LeaseError::InvalidState);
    }
    let tenant = state.tenant.clone().ok_or(LeaseError::InvalidState)?;
    if caller != tenant && caller != terms.landlord {
        return Err(LeaseError::Unauthorized);
    }
    if state.months_paid >= terms.term_months {
        // Full term paid: the lease must complete, not terminate.
        return Err(LeaseError::InvalidState);
    }

    let penalty = terms.early_termination_penalty;
    let refund = state.deposit_balance - penalty;
    let accrued_rent = state.rent_balance;

    state.status = LeaseStatus::Terminated;
    state.deposit_balance = 0;
    state.rent_balance = 0;
    save_state(env, &state);

    let token = token::Client::new(env, &terms.payment_token);
    let me = env.current_contract_address();
    if penalty + accrued_rent > 0 {
        token.transfer(&me, &terms.landlord, &(penalty + accrued_rent));
    }
    if refund > 0 {
        token.transfer(&me, &tenant, &refund);
    }

    LeaseTerminated {
        by: caller,
        penalty,
    }
    .publish(env);

    Ok(())
}

/// Releases the full deposit to the tenant once every period has been paid.
/// Callable by anyone once the term is fulfilled.
pub fn complete_lease(env: &Env, caller: Address) -> Result<(), LeaseError> {
    caller.require_auth();

    let terms = load_terms(env)?;
    let mut state = load_state(env)?;

    if state.status != LeaseStatus::Active {
        return Err(LeaseError::InvalidState);
    }
    if state.months_paid < terms.term_months {
        return Err(LeaseError::TermNotFulfilled);
    }
    let tenant = state.tenant.clone().ok_or(LeaseError::InvalidState)?;

    let deposit = state.deposit_balance;
    let accrued_rent = state.rent_balance;
    let now = env.ledger().timestamp();

    state.status = LeaseStatus::Completed;
    state.deposit_balance = 0;
    state.rent_balance = 0;
    save_state(env, &state);

    let token = token::Client::new(env, &terms.payment_token);
    let me = env.current_contract_address();
    if deposit > 0 {
        token.transfer(&me, &tenant, &deposit);
    }
    if accrued_rent > 0 {
        token.transfer(&me, &terms.landlord, &accrued_rent);
    }

    LeaseCompleted { timestamp: now }.publish(env);

    Ok(())
}

/// Landlord pulls the accrued rent out of escrow mid-lease.
pub fn withdraw_rent(env: &Env, caller: Address) -> Result<i128, LeaseError> {
    caller.require_auth();

    let terms = load_terms(env)?;
    let mut state = load_state(env)?;

    if caller != terms.landlord {
        return Err(LeaseError::Unauthorized);
    }
    if state.status != LeaseStatus::Signed && state.status != LeaseStatus::Active {
        return Err(LeaseError::InvalidState);
    }

    let amount = state.rent_balance;
    state.rent_balance = 0;
    save_state(env, &state);

    if amount > 0 {
        let token = token::Client::new(env, &terms.payment_token);
        token.transfer(&env.current_contract_address(), &terms.landlord, &amount);
    }

    RentWithdrawn {
        landlord: terms.landlord,
        amount,
    }
    .publish(env);

    Ok(amount)
}

pub fn get_terms(env: &Env) -> Option<LeaseTerms> {
    env.storage().instance().get(&DataKey::Terms)
}

pub fn get_state(env: &Env) -> Option<LeaseState> {
    env.storage().instance().get(&DataKey::State)
}

pub fn get_status(env: &Env) -> Option<LeaseStatus> {
    get_state(env).map(|s| s.status)
}

pub fn get_months_paid(env: &Env) -> u32 {
    get_state(env).map(|s| s.months_paid).unwrap_or(0)
}

/// Total value currently held in escrow (deposit plus accrued rent).
pub fn get_balance(env: &Env) -> i128 {
    get_state(env)
        .map(|s| s.deposit_balance + s.rent_balance)
        .unwrap_or(0)
}

pub fn get_payments(env: &Env) -> Vec<RentPayment> {
    load_payments(env)
}

fn load_terms(env: &Env) -> Result<LeaseTerms, LeaseError> {
    env.storage()
        .instance()
        .get(&DataKey::Terms)
        .ok_or(LeaseError::NotInitialized)
}

fn load_state(env: &Env) -> Result<LeaseState, LeaseError> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(LeaseError::NotInitialized)
}

fn save_state(env: &Env, state: &LeaseState) {
    env.storage().instance().set(&DataKey::State, state);
}

fn load_payments(env: &Env) -> Vec<RentPayment> {
    env.storage()
        .persistent()
        .get(&DataKey::Payments)
        .unwrap_or_else(|| Vec::new(env))
}
