//! Data types and storage keys for the voting contract.
use soroban_sdk::{contracttype, Address, String};

/// One proposal on the ballot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub name: String,
    /// Accumulated voting weight.
    pub vote_count: u32,
}

/// Per-address voting record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    /// Voting weight; accumulates via delegation.
    pub weight: u32,
    /// True once the vote was cast or delegated away.
    pub voted: bool,
    /// Proposal index voted for; meaningful only when `voted` is set.
    pub vote: u32,
    /// Final delegation target, if the vote was delegated.
    pub delegate: Option<Address>,
}

/// Storage key variants.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Address that created the ballot and may read the tally
    Chairperson,
    /// The proposal list with running counts
    Proposals,
    /// Voting record per address
    Voter(Address),
}
