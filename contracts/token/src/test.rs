#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

// Mirrors the reference deployment: cap 1000, 100 minted to the owner.
const MAX_SUPPLY: i128 = 1000;
const INITIAL_MINT: i128 = 100;

fn create_token<'a>(env: &'a Env) -> (ContractClient<'a>, Address) {
    env.mock_all_auths();

    let owner = Address::generate(env);
    let contract_id = env.register(Contract, ());
    let client = ContractClient::new(env, &contract_id);
    client.initialize(
        &owner,
        &String::from_str(env, "MyOwnCrypto"),
        &String::from_str(env, "MOC"),
        &MAX_SUPPLY,
        &INITIAL_MINT,
    );

    (client, owner)
}

#[test]
fn test_owner_holds_initial_allocation() {
    let env = Env::default();
    let (client, owner) = create_token(&env);

    assert_eq!(client.balance_of(&owner), INITIAL_MINT);
}

#[test]
fn test_total_supply_is_minted_so_far() {
    let env = Env::default();
    let (client, _) = create_token(&env);

    // total supply reports tokens minted so far, not the cap
    assert_eq!(client.total_supply(), INITIAL_MINT);
    assert_eq!(client.max_supply(), MAX_SUPPLY);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_double_initialize_fails() {
    let env = Env::default();
    let (client, owner) = create_token(&env);

    client.initialize(
        &owner,
        &String::from_str(&env, "Again"),
        &String::from_str(&env, "AGN"),
        &MAX_SUPPLY,
        &INITIAL_MINT,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_initial_mint_above_cap_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let contract_id = env.register(Contract, ());
    let client = ContractClient::new(&env, &contract_id);

    client.initialize(
        &owner,
        &String::from_str(&env, "MyOwnCrypto"),
        &String::from_str(&env, "MOC"),
        &MAX_SUPPLY,
        &(MAX_SUPPLY + 1),
    );
}

#[test]
fn test_transfer_moves_balance() {
    let env = Env::default();
    let (client, owner) = create_token(&env);

    let account1 = Address::generate(&env);
    client.transfer(&owner, &account1, &40);

    assert_eq!(client.balance_of(&owner), 60);
    assert_eq!(client.balance_of(&account1), 40);
    assert_eq!(client.total_supply(), INITIAL_MINT);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn test_transfer_beyond_balance_fails() {
    let env = Env::default();
    let (client, owner) = create_token(&env);

    let account1 = Address::generate(&env);
    client.transfer(&owner, &account1, &(INITIAL_MINT + 1));
}

#[test]
fn test_mint_up_to_cap() {
    let env = Env::default();
    let (client, owner) = create_token(&env);

    client.mint(&owner, &owner, &(MAX_SUPPLY - INITIAL_MINT));
    assert_eq!(client.total_supply(), MAX_SUPPLY);
    assert_eq!(client.balance_of(&owner), MAX_SUPPLY);
}

#[test]
#[should_panic(expected = "Error(Contract, #5)")]
fn test_mint_beyond_cap_fails() {
    let env = Env::default();
    let (client, owner) = create_token(&env);

    client.mint(&owner, &owner, &(MAX_SUPPLY - INITIAL_MINT + 1));
}

#[test]
#[should_panic(expected = "Error(Contract, #7)")]
fn test_non_admin_cannot_mint() {
    let env = Env::default();
    let (client, _) = create_token(&env);

    let account1 = Address::generate(&env);
    client.mint(&account1, &account1, &1);
}
