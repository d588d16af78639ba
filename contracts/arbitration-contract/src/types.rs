use soroban_sdk::{contracttype, Address, String};

/// Dispute lifecycle. Transitions are monotonic:
/// `Open -> Voting -> ResolvedBuyer | ResolvedSeller`.
///
/// `Appealed` is reserved for post-resolution re-opening; no operation
/// currently transitions into or out of it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DisputeState {
    Open,
    Voting,
    ResolvedBuyer,
    ResolvedSeller,
    Appealed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dispute {
    pub id: u64,
    pub escrow_id: u64,
    pub filed_by: Address,
    /// The opposing party, fixed at filing time.
    pub respondent: Address,
    pub reason: String,
    pub evidence_uri: String,
    pub response: Option<String>,
    pub response_evidence: Option<String>,
    pub state: DisputeState,
    pub filed_at: u64,
    /// `filed_at + VOTING_PERIOD`, never mutated after filing.
    pub voting_ends_at: u64,
    pub votes_for_buyer: u32,
    pub votes_for_seller: u32,
    /// 0 until the dispute reaches a resolved state.
    pub resolved_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Arbiter {
    pub stake: i128,
    pub reputation: u32,
    /// Deactivation is a one-way flip; records are never deleted.
    pub active: bool,
    pub cases_handled: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    pub vote_for_buyer: bool,
    pub reasoning: String,
    pub voted_at: u64,
}

/// Party pair for an escrow, registered by the escrow collaborator so the
/// filing guard can verify standing without holding any custody logic here.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowParties {
    pub buyer: Address,
    pub seller: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Token,
    DisputeCount,
    FeePool,
    Dispute(u64),
    /// escrow_id -> id of the most recently filed dispute for that escrow.
    EscrowDispute(u64),
    Escrow(u64),
    Arbiter(Address),
    Vote(u64, Address),
}
