#![no_std]

//! Token Contract
//!
//! Fixed-cap toy currency: the total supply is capped at initialization and
//! an initial allocation is minted to the admin, leaving the rest unminted.
//! `total_supply` reports tokens minted so far, not the cap.

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String,
};

mod errors;

#[cfg(test)]
mod test;

pub use errors::TokenError;

/// Storage key variants.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Name,
    Symbol,
    /// Fixed supply cap
    MaxSupply,
    /// Tokens minted so far
    Minted,
    /// Balance per holder
    Balance(Address),
}

#[contract]
pub struct Contract;

#[contractimpl]
impl Contract {
    /// Sets up the token and mints the initial allocation to the admin.
    /// Can only be called once.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the token was already set up
    /// * `InvalidSupply` - If the cap is not positive or the initial
    ///   allocation is negative or exceeds the cap
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        max_supply: i128,
        initial_mint: i128,
    ) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(TokenError::AlreadyInitialized);
        }
        if max_supply <= 0 || initial_mint < 0 || initial_mint > max_supply {
            return Err(TokenError::InvalidSupply);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Symbol, &symbol);
        env.storage().instance().set(&DataKey::MaxSupply, &max_supply);
        env.storage().instance().set(&DataKey::Minted, &initial_mint);
        set_balance(&env, &admin, initial_mint);

        env.events().publish((symbol_short!("init"),), (admin,));

        Ok(())
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    /// * `InvalidAmount` - If `amount` is not positive
    /// * `InsufficientBalance` - If `from` holds less than `amount`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();

        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }
        let from_balance = balance(&env, &from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }

        set_balance(&env, &from, from_balance - amount);
        set_balance(&env, &to, balance(&env, &to) + amount);

        env.events()
            .publish((symbol_short!("transfer"),), (from, to, amount));

        Ok(())
    }

    /// Mints `amount` to `to` out of the unminted remainder. Admin-gated.
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the admin
    /// * `InvalidAmount` - If `amount` is not positive
    /// * `SupplyCapExceeded` - If minting would pass the cap
    pub fn mint(env: Env, admin: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        admin.require_auth();

        let stored_admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(TokenError::NotInitialized)?;
        if admin != stored_admin {
            return Err(TokenError::Unauthorized);
        }

        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }
        let max_supply: i128 = env
            .storage()
            .instance()
            .get(&DataKey::MaxSupply)
            .ok_or(TokenError::NotInitialized)?;
        let minted: i128 = env
            .storage()
            .instance()
            .get(&DataKey::Minted)
            .unwrap_or(0);
        if minted + amount > max_supply {
            return Err(TokenError::SupplyCapExceeded);
        }

        env.storage()
            .instance()
            .set(&DataKey::Minted, &(minted + amount));
        set_balance(&env, &to, balance(&env, &to) + amount);

        env.events().publish((symbol_short!("mint"),), (to, amount));

        Ok(())
    }

    /// Tokens minted so far (not the cap).
    pub fn total_supply(env: Env) -> i128 {
        env.storage().instance().get(&DataKey::Minted).unwrap_or(0)
    }

    /// The fixed supply cap.
    pub fn max_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::MaxSupply)
            .unwrap_or(0)
    }

    pub fn balance_of(env: Env, holder: Address) -> i128 {
        balance(&env, &holder)
    }

    pub fn name(env: Env) -> Option<String> {
        env.storage().instance().get(&DataKey::Name)
    }

    pub fn symbol(env: Env) -> Option<String> {
        env.storage().instance().get(&DataKey::Symbol)
    }
}

fn balance(env: &Env, holder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

fn set_balance(env: &Env, holder: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(holder.clone()), &amount);
}
