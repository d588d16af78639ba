//! Append-only contract events, one per successful mutating call.
//!
//! Soroban symbols cannot contain `-`, so tags are underscored
//! (`dispute_filed`, `vote_cast`, ...).

use soroban_sdk::{contracttype, Address, Env, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisputeFiledEvent {
    pub dispute_id: u64,
    pub escrow_id: u64,
    pub filed_by: Address,
    pub reason: String,
    pub filed_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResponseSubmittedEvent {
    pub dispute_id: u64,
    pub responder: Address,
    pub response: String,
    pub evidence_uri: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArbiterRegisteredEvent {
    pub arbiter: Address,
    pub stake: i128,
    pub reputation: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCastEvent {
    pub dispute_id: u64,
    pub arbiter: Address,
    pub vote_for_buyer: bool,
    pub reasoning: String,
    pub voted_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisputeFinalizedEvent {
    pub dispute_id: u64,
    pub votes_for_buyer: u32,
    pub votes_for_seller: u32,
    pub buyer_wins: bool,
    pub resolved_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArbiterDeactivatedEvent {
    pub arbiter: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesDistributedEvent {
    pub dispute_id: u64,
    pub recipient: Address,
    pub amount: i128,
}

pub fn dispute_filed(env: &Env, event: DisputeFiledEvent) {
    env.events()
        .publish((Symbol::new(env, "dispute_filed"),), event);
}

pub fn response_submitted(env: &Env, event: ResponseSubmittedEvent) {
    env.events()
        .publish((Symbol::new(env, "response_submitted"),), event);
}

pub fn arbiter_registered(env: &Env, event: ArbiterRegisteredEvent) {
    env.events()
        .publish((Symbol::new(env, "arbiter_registered"),), event);
}

pub fn vote_cast(env: &Env, event: VoteCastEvent) {
    env.events().publish((Symbol::new(env, "vote_cast"),), event);
}

pub fn dispute_finalized(env: &Env, event: DisputeFinalizedEvent) {
    env.events()
        .publish((Symbol::new(env, "dispute_finalized"),), event);
}

pub fn arbiter_deactivated(env: &Env, event: ArbiterDeactivatedEvent) {
    env.events()
        .publish((Symbol::new(env, "arbiter_deactivated"),), event);
}

pub fn fees_distributed(env: &Env, event: FeesDistributedEvent) {
    env.events()
        .publish((Symbol::new(env, "fees_distributed"),), event);
}
