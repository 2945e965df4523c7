//! Contract events for the lease escrow contract.
use soroban_sdk::{contractevent, symbol_short, Address, Env};

/// Emitted when the tenant signs the lease and funds the deposit.
#[contractevent(data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaseSigned {
    pub tenant: Address,
    /// Ledger time at which the transition committed.
    pub timestamp: u64,
}

/// Emitted for every accepted rent payment.
#[contractevent(data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentPaid {
    pub tenant: Address,
    pub period: u32,
    pub amount: i128,
}

/// Emitted when either party ends the lease before the full term.
#[contractevent(data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaseTerminated {
    pub by: Address,
    pub penalty: i128,
}

/// Emitted when the lease completes its full term and the deposit is
/// released.
#[contractevent(data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaseCompleted {
    pub timestamp: u64,
}

/// Emitted when the landlord withdraws accrued rent from escrow.
#[contractevent(data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentWithdrawn {
    pub landlord: Address,
    pub amount: i128,
}

/// Emitted once when the lease is initialized.
pub(crate) fn lease_created(env: &Env, landlord: Address) {
    env.events().publish((symbol_short!("created"),), (landlord,));
}
