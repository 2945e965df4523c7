//! Voting error types.
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VotingError {
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not yet initialized
    NotInitialized = 2,
    /// Proposal index out of range (or empty proposal list)
    InvalidProposal = 3,
    /// Only the chairperson can perform this operation
    Unauthorized = 4,
    /// Address was never granted the ability to vote
    NoRightToVote = 5,
    /// Address has already cast (or delegated) its vote
    AlreadyVoted = 6,
    /// Address is already eligible to vote
    AlreadyEligible = 7,
    /// Delegation back to the delegator is not allowed
    SelfDelegation = 8,
}
