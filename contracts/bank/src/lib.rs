#![no_std]

//! Bank Contract
//!
//! Minimal balance custody: the owner seeds the bank with an initial
//! deposit at initialization, anyone may deposit more, and only the owner
//! may withdraw.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, token, Address, Env,
};


#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum BankError {
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not yet initialized
    NotInitialized = 2,
    /// Amount must be positive
    InvalidAmount = 3,
    /// Only the owner can withdraw
    Unauthorized = 4,
    /// Withdrawal exceeds the held balance
    InsufficientFunds = 5,
}

/// Storage key variants.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Token,
    Balance,
}

#[contract]
pub struct Contract;

#[contractimpl]
impl Contract {
    /// Sets up the bank and pulls the owner's initial deposit into custody.
    /// Can only be called once.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the bank was already set up
    /// * `InvalidAmount` - If the initial deposit is negative
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        initial_deposit: i128,
    ) -> Result<(), BankError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(BankError::AlreadyInitialized);
        }
        if initial_deposit < 0 {
            return Err(BankError::InvalidAmount);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage()
            .instance()
            .set(&DataKey::Balance, &initial_deposit);

        if initial_deposit > 0 {
            let client = token::Client::new(&env, &token);
            client.transfer(&owner, &env.current_contract_address(), &initial_deposit);
        }

        env.events().publish((symbol_short!("opened"),), (owner,));

        Ok(())
    }

    /// Deposits `amount` from `from` into the bank. Open to anyone.
    ///
    /// # Errors
    /// * `InvalidAmount` - If `amount` is not positive
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), BankError> {
        from.require_auth();

        if amount <= 0 {
            return Err(BankError::InvalidAmount);
        }
        let token = load_token(&env)?;
        let balance = load_balance(&env)?;

        env.storage()
            .instance()
            .set(&DataKey::Balance, &(balance + amount));

        let client = token::Client::new(&env, &token);
        client.transfer(&from, &env.current_contract_address(), &amount);

        env.events()
            .publish((symbol_short!("deposit"),), (from, amount));

        Ok(())
    }

    /// Withdraws `amount` to the owner. Owner-gated.
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the owner
    /// * `InvalidAmount` - If `amount` is not positive
    /// * `InsufficientFunds` - If `amount` exceeds the held balance
    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<(), BankError> {
        caller.require_auth();

        let owner = load_owner(&env)?;
        if caller != owner {
            return Err(BankError::Unauthorized);
        }
        if amount <= 0 {
            return Err(BankError::InvalidAmount);
        }
        let balance = load_balance(&env)?;
        if amount > balance {
            return Err(BankError::InsufficientFunds);
        }

        env.storage()
            .instance()
            .set(&DataKey::Balance, &(balance - amount));

        let token = load_token(&env)?;
        let client = token::Client::new(&env, &token);
        client.transfer(&env.current_contract_address(), &owner, &amount);

        env.events()
            .publish((symbol_short!("withdraw"),), (owner, amount));

        Ok(())
    }

    /// Balance currently held by the bank. Open to anyone.
    pub fn get_balance(env: Env) -> i128 {
        load_balance(&env).unwrap_or(0)
    }
}

fn load_owner(env: &Env) -> Result<Address, BankError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(BankError::NotInitialized)
}

fn load_token(env: &Env) -> Result<Address, BankError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(BankError::NotInitialized)
}

fn load_balance(env: &Env) -> Result<i128, BankError> {
    env.storage()
        .instance()
        .get(&DataKey::Balance)
        .ok_or(BankError::NotInitialized)
}
