#![no_std]

//! Voting Contract
//!
//! Chairperson-run ballot over a fixed proposal list. The chairperson grants
//! voting rights one address at a time; each eligible address votes once,
//! either directly or by delegating its weight to another voter. Only the
//! chairperson may read the winning proposal.

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};

mod errors;
mod types;


pub use errors::VotingError;
pub use types::{DataKey, Proposal, Voter};

#[contract]
pub struct Contract;

#[contractimpl]
impl Contract {
    /// Sets up the ballot with its proposal list. Can only be called once.
    /// The chairperson starts with voting weight 1.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the ballot was already set up
    /// * `InvalidProposal` - If the proposal list is empty
    pub fn initialize(
        env: Env,
        chairperson: Address,
        proposal_names: Vec<String>,
    ) -> Result<(), VotingError> {
        if env.storage().instance().has(&DataKey::Chairperson) {
            return Err(VotingError::AlreadyInitialized);
        }
        if proposal_names.is_empty() {
            return Err(VotingError::InvalidProposal);
        }

        chairperson.require_auth();

        let mut proposals: Vec<Proposal> = Vec::new(&env);
        for name in proposal_names.iter() {
            proposals.push_back(Proposal {
                name,
                vote_count: 0,
            });
        }

        env.storage()
            .instance()
            .set(&DataKey::Chairperson, &chairperson);
        env.storage().instance().set(&DataKey::Proposals, &proposals);
        save_voter(
            &env,
            &chairperson,
            &Voter {
                weight: 1,
                voted: false,
                vote: 0,
                delegate: None,
            },
        );

        env.events()
            .publish((symbol_short!("ballot"),), (chairperson,));

        Ok(())
    }

    /// Chairperson grants `voter` the ability to vote (weight 1).
    ///
    /// # Errors
    /// * `Unauthorized` - Enforced through the chairperson's auth
    /// * `AlreadyEligible` - If `voter` can already vote
    pub fn ability_to_vote(env: Env, voter: Address) -> Result<(), VotingError> {
        let chairperson = load_chairperson(&env)?;
        chairperson.require_auth();

        if load_voter(&env, &voter).is_some() {
            return Err(VotingError::AlreadyEligible);
        }

        save_voter(
            &env,
            &voter,
            &Voter {
                weight: 1,
                voted: false,
                vote: 0,
                delegate: None,
            },
        );

        Ok(())
    }

    /// Casts the caller's vote (and any delegated weight) for a proposal.
    ///
    /// # Errors
    /// * `NoRightToVote` - If the caller was never granted eligibility
    /// * `AlreadyVoted` - If the caller already voted or delegated
    /// * `InvalidProposal` - If the index is out of range
    pub fn vote(env: Env, voter: Address, proposal_index: u32) -> Result<(), VotingError> {
        voter.require_auth();

        let mut record = load_voter(&env, &voter).ok_or(VotingError::NoRightToVote)?;
        if record.voted {
            return Err(VotingError::AlreadyVoted);
        }

        let mut proposals = load_proposals(&env)?;
        let mut proposal = proposals
            .get(proposal_index)
            .ok_or(VotingError::InvalidProposal)?;

        proposal.vote_count += record.weight;
        proposals.set(proposal_index, proposal);
        record.voted = true;
        record.vote = proposal_index;

        env.storage().instance().set(&DataKey::Proposals, &proposals);
        save_voter(&env, &voter, &record);

        env.events()
            .publish((symbol_short!("vote"),), (voter, proposal_index));

        Ok(())
    }

    /// Delegates the caller's voting weight to another voter. Delegation
    /// chains are followed to their end; a chain leading back to the caller
    /// is rejected.
    ///
    /// # Errors
    /// * `NoRightToVote` - If either party is not eligible
    /// * `AlreadyVoted` - If the caller already voted or delegated
    /// * `SelfDelegation` - If the (resolved) target is the caller
    pub fn delegate(env: Env, from: Address, to: Address) -> Result<(), VotingError> {
        from.require_auth();

        let mut record = load_voter(&env, &from).ok_or(VotingError::NoRightToVote)?;
        if record.voted {
            return Err(VotingError::AlreadyVoted);
        }
        if to == from {
            return Err(VotingError::SelfDelegation);
        }

        // Follow the delegation chain to its end.
        let mut target = to;
        loop {
            let target_record = load_voter(&env, &target).ok_or(VotingError::NoRightToVote)?;
            match target_record.delegate {
                Some(next) => {
                    if next == from {
                        return Err(VotingError::SelfDelegation);
                    }
                    target = next;
                }
                None => break,
            }
        }

        let mut target_record = load_voter(&env, &target).ok_or(VotingError::NoRightToVote)?;

        record.voted = true;
        record.delegate = Some(target.clone());

        if target_record.voted {
            // Target already voted: count the delegated weight immediately.
            let mut proposals = load_proposals(&env)?;
            let mut proposal = proposals
                .get(target_record.vote)
                .ok_or(VotingError::InvalidProposal)?;
            proposal.vote_count += record.weight;
            proposals.set(target_record.vote, proposal);
            env.storage().instance().set(&DataKey::Proposals, &proposals);
        } else {
            target_record.weight += record.weight;
            save_voter(&env, &target, &target_record);
        }

        save_voter(&env, &from, &record);

        Ok(())
    }

    /// Chairperson-only read of the leading proposal index.
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the chairperson
    pub fn winning_proposal(env: Env, caller: Address) -> Result<u32, VotingError> {
        caller.require_auth();

        let chairperson = load_chairperson(&env)?;
        if caller != chairperson {
            return Err(VotingError::Unauthorized);
        }

        let proposals = load_proposals(&env)?;
        let mut winning = 0u32;
        let mut highest = 0u32;
        for (index, proposal) in proposals.iter().enumerate() {
            if proposal.vote_count > highest {
                highest = proposal.vote_count;
                winning = index as u32;
            }
        }

        Ok(winning)
    }

    /// The proposal list with running counts. Open to anyone.
    pub fn get_proposals(env: Env) -> Vec<Proposal> {
        env.storage()
            .instance()
            .get(&DataKey::Proposals)
            .unwrap_or_else(|| Vec::new(&env))
    }

    /// Voting record for an address, if it was ever granted eligibility.
    pub fn get_voter(env: Env, voter: Address) -> Option<Voter> {
        load_voter(&env, &voter)
    }
}

fn load_chairperson(env: &Env) -> Result<Address, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Chairperson)
        .ok_or(VotingError::NotInitialized)
}

fn load_proposals(env: &Env) -> Result<Vec<Proposal>, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Proposals)
        .ok_or(VotingError::NotInitialized)
}

fn load_voter(env: &Env, voter: &Address) -> Option<Voter> {
    env.storage().persistent().get(&DataKey::Voter(voter.clone()))
}

fn save_voter(env: &Env, voter: &Address, record: &Voter) {
    env.storage()
        .persistent()
        .set(&DataKey::Voter(voter.clone()), record);
}
