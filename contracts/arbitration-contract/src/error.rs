use soroban_sdk::contracterror;

/// Error codes surfaced by every public entry point. The discriminants are
/// part of the contract's observable interface and must stay stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ArbitrationError {
    /// Caller lacks rights for an admin operation, or a fee distribution
    /// would overdraw the pool.
    NotAuthorized = 1,
    DisputeNotFound = 2,
    /// The escrow already has a dispute in `Open` or `Voting`.
    AlreadyDisputed = 3,
    /// Caller is neither buyer nor seller of the referenced escrow.
    NotParty = 4,
    /// Vote cast after the deadline, or before voting opened.
    VotingClosed = 5,
    AlreadyVoted = 6,
    /// Caller is not a registered, active arbiter.
    NotArbiter = 7,
    AlreadyResolved = 8,
    /// Finalize below quorum, or on an unresolved tie.
    InsufficientVotes = 9,
}
