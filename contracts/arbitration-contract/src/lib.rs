#![no_std]

//! Escrow dispute arbitration contract.
//!
//! A buyer or seller raises a dispute over an escrowed transaction, the
//! opposing party responds, and a panel of staked arbiters votes the outcome
//! within a fixed window. Filing fees accumulate in a pool the owner
//! disburses to participating arbiters. Custody of the disputed funds stays
//! with the external escrow contract; this contract only needs the party
//! pair per escrow, the ledger clock, and a fee token.

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

mod error;
mod events;
mod guard;
mod types;

pub use error::ArbitrationError;
pub use events::{
    ArbiterDeactivatedEvent, ArbiterRegisteredEvent, DisputeFiledEvent,
    DisputeFinalizedEvent, FeesDistributedEvent, ResponseSubmittedEvent, VoteCastEvent,
};
pub use types::{Arbiter, DataKey, Dispute, DisputeState, EscrowParties, VoteRecord};

/// Ledger-time units a dispute stays open for votes after filing.
pub const VOTING_PERIOD: u64 = 288;
/// Quorum: total votes required before a dispute can be finalized.
pub const MIN_ARBITER_VOTES: u32 = 3;
/// Filing fee charged into the pool, in fee-token units.
pub const DISPUTE_FEE: i128 = 1_000_000;
/// Minimum stake to register as an arbiter.
pub const MIN_ARBITER_STAKE: i128 = 1_000;
/// Reputation every arbiter starts with.
pub const INITIAL_REPUTATION: u32 = 100;

#[contract]
pub struct ArbitrationContract;

impl ArbitrationContract {
    fn load_dispute(env: &Env, dispute_id: u64) -> Result<Dispute, ArbitrationError> {
        env.storage()
            .persistent()
            .get(&DataKey::Dispute(dispute_id))
            .ok_or(ArbitrationError::DisputeNotFound)
    }

    fn save_dispute(env: &Env, dispute: &Dispute) {
        env.storage()
            .persistent()
            .set(&DataKey::Dispute(dispute.id), dispute);
    }

    fn fee_token(env: &Env) -> token::Client<'_> {
        let address: Address = env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .unwrap_or_else(|| panic!("not initialized"));
        token::Client::new(env, &address)
    }
}

#[contractimpl]
impl ArbitrationContract {
    /// One-shot setup: owner address and the token fees and stakes are paid
    /// in. Re-initialization is rejected.
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), ArbitrationError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(ArbitrationError::NotAuthorized);
        }
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::DisputeCount, &0u64);
        env.storage().instance().set(&DataKey::FeePool, &0i128);
        Ok(())
    }

    /// Records the party pair for an escrow. The escrow contract (or the
    /// owner operating on its behalf) wires this in so `file_dispute` can
    /// verify standing; no custody logic lives here.
    pub fn register_escrow(
        env: Env,
        caller: Address,
        escrow_id: u64,
        buyer: Address,
        seller: Address,
    ) -> Result<(), ArbitrationError> {
        caller.require_auth();
        guard::require_owner(&env, &caller)?;
        let parties = EscrowParties { buyer, seller };
        env.storage()
            .persistent()
            .set(&DataKey::Escrow(escrow_id), &parties);
        Ok(())
    }

    /// Opens a dispute over an escrow. The filer must be one of the escrow's
    /// parties and the escrow must not already have a live dispute. Charges
    /// `DISPUTE_FEE` from the filer into the pool.
    pub fn file_dispute(
        env: Env,
        escrow_id: u64,
        filer: Address,
        reason: String,
        evidence_uri: String,
    ) -> Result<u64, ArbitrationError> {
        filer.require_auth();

        let parties: EscrowParties = env
            .storage()
            .persistent()
            .get(&DataKey::Escrow(escrow_id))
            .ok_or(ArbitrationError::NotParty)?;
        guard::require_party(&parties, &filer)?;

        if let Some(existing_id) = env
            .storage()
            .persistent()
            .get::<DataKey, u64>(&DataKey::EscrowDispute(escrow_id))
        {
            let existing = Self::load_dispute(&env, existing_id)?;
            match existing.state {
                DisputeState::Open | DisputeState::Voting => {
                    return Err(ArbitrationError::AlreadyDisputed)
                }
                _ => {}
            }
        }

        Self::fee_token(&env).transfer(&filer, &env.current_contract_address(), &DISPUTE_FEE);
        let pool: i128 = env
            .storage()
            .instance()
            .get(&DataKey::FeePool)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::FeePool, &(pool + DISPUTE_FEE));

        let count: u64 = env
            .storage()
            .instance()
            .get(&DataKey::DisputeCount)
            .unwrap_or(0);
        let dispute_id = count + 1;
        env.storage()
            .instance()
            .set(&DataKey::DisputeCount, &dispute_id);

        let respondent = if filer == parties.buyer {
            parties.seller
        } else {
            parties.buyer
        };
        let filed_at = env.ledger().timestamp();
        let dispute = Dispute {
            id: dispute_id,
            escrow_id,
            filed_by: filer.clone(),
            respondent,
            reason: reason.clone(),
            evidence_uri,
            response: None,
            response_evidence: None,
            state: DisputeState::Open,
            filed_at,
            voting_ends_at: filed_at + VOTING_PERIOD,
            votes_for_buyer: 0,
            votes_for_seller: 0,
            resolved_at: 0,
        };
        Self::save_dispute(&env, &dispute);
        env.storage()
            .persistent()
            .set(&DataKey::EscrowDispute(escrow_id), &dispute_id);

        events::dispute_filed(
            &env,
            DisputeFiledEvent {
                dispute_id,
                escrow_id,
                filed_by: filer,
                reason,
                filed_at,
            },
        );
        Ok(dispute_id)
    }

    /// The opposing party answers the dispute, which opens voting.
    pub fn submit_response(
        env: Env,
        dispute_id: u64,
        responder: Address,
        response: String,
        evidence_uri: String,
    ) -> Result<(), ArbitrationError> {
        responder.require_auth();

        let mut dispute = Self::load_dispute(&env, dispute_id)?;
        if responder != dispute.respondent {
            return Err(ArbitrationError::NotParty);
        }
        if dispute.state != DisputeState::Open {
            return Err(ArbitrationError::AlreadyResolved);
        }

        dispute.response = Some(response.clone());
        dispute.response_evidence = Some(evidence_uri.clone());
        dispute.state = DisputeState::Voting;
        Self::save_dispute(&env, &dispute);

        events::response_submitted(
            &env,
            ResponseSubmittedEvent {
                dispute_id,
                responder,
                response,
                evidence_uri,
            },
        );
        Ok(())
    }

    /// Stakes into the panel. One record per identity; the stake is held by
    /// the contract for the lifetime of the registration.
    pub fn register_arbiter(
        env: Env,
        arbiter: Address,
        stake: i128,
    ) -> Result<(), ArbitrationError> {
        arbiter.require_auth();

        if stake < MIN_ARBITER_STAKE {
            return Err(ArbitrationError::NotAuthorized);
        }
        let key = DataKey::Arbiter(arbiter.clone());
        if env.storage().persistent().has(&key) {
            return Err(ArbitrationError::NotAuthorized);
        }

        Self::fee_token(&env).transfer(&arbiter, &env.current_contract_address(), &stake);
        let record = Arbiter {
            stake,
            reputation: INITIAL_REPUTATION,
            active: true,
            cases_handled: 0,
        };
        env.storage().persistent().set(&key, &record);

        events::arbiter_registered(
            &env,
            ArbiterRegisteredEvent {
                arbiter,
                stake,
                reputation: INITIAL_REPUTATION,
            },
        );
        Ok(())
    }

    /// Owner-only. Flips the arbiter inactive; there is no reactivation
    /// path, and the record survives for reputation history.
    pub fn deactivate_arbiter(
        env: Env,
        caller: Address,
        arbiter: Address,
    ) -> Result<(), ArbitrationError> {
        caller.require_auth();
        guard::require_owner(&env, &caller)?;

        let key = DataKey::Arbiter(arbiter.clone());
        let mut record: Arbiter = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ArbitrationError::NotArbiter)?;
        record.active = false;
        env.storage().persistent().set(&key, &record);

        events::arbiter_deactivated(&env, ArbiterDeactivatedEvent { arbiter });
        Ok(())
    }

    /// One vote per arbiter per dispute. Voting closes at the deadline
    /// timestamp itself: a vote at exactly `voting_ends_at` is rejected.
    pub fn cast_vote(
        env: Env,
        dispute_id: u64,
        arbiter: Address,
        vote_for_buyer: bool,
        reasoning: String,
    ) -> Result<(), ArbitrationError> {
        arbiter.require_auth();

        let mut record = guard::require_active_arbiter(&env, &arbiter)?;
        let mut dispute = Self::load_dispute(&env, dispute_id)?;
        match dispute.state {
            DisputeState::Voting => {}
            DisputeState::Open => return Err(ArbitrationError::VotingClosed),
            _ => return Err(ArbitrationError::AlreadyResolved),
        }
        let voted_at = env.ledger().timestamp();
        if voted_at >= dispute.voting_ends_at {
            return Err(ArbitrationError::VotingClosed);
        }
        let vote_key = DataKey::Vote(dispute_id, arbiter.clone());
        if env.storage().persistent().has(&vote_key) {
            return Err(ArbitrationError::AlreadyVoted);
        }

        if vote_for_buyer {
            dispute.votes_for_buyer += 1;
        } else {
            dispute.votes_for_seller += 1;
        }
        Self::save_dispute(&env, &dispute);

        let vote = VoteRecord {
            vote_for_buyer,
            reasoning: reasoning.clone(),
            voted_at,
        };
        env.storage().persistent().set(&vote_key, &vote);

        record.cases_handled += 1;
        env.storage()
            .persistent()
            .set(&DataKey::Arbiter(arbiter.clone()), &record);

        events::vote_cast(
            &env,
            VoteCastEvent {
                dispute_id,
                arbiter,
                vote_for_buyer,
                reasoning,
                voted_at,
            },
        );
        Ok(())
    }

    /// Closes voting once quorum is reached and a strict majority exists.
    /// Quorum is the gate: finalization does not wait for the deadline,
    /// which only stops further votes. A tie is not adjudicated; it fails
    /// and the dispute stays in `Voting` until a tie-breaking vote lands.
    /// Returns whether the buyer won.
    pub fn finalize(env: Env, dispute_id: u64) -> Result<bool, ArbitrationError> {
        let mut dispute = Self::load_dispute(&env, dispute_id)?;
        match dispute.state {
            DisputeState::Voting => {}
            DisputeState::Open => return Err(ArbitrationError::InsufficientVotes),
            _ => return Err(ArbitrationError::AlreadyResolved),
        }

        let total = dispute.votes_for_buyer + dispute.votes_for_seller;
        if total < MIN_ARBITER_VOTES || dispute.votes_for_buyer == dispute.votes_for_seller {
            return Err(ArbitrationError::InsufficientVotes);
        }

        let buyer_wins = dispute.votes_for_buyer > dispute.votes_for_seller;
        dispute.state = if buyer_wins {
            DisputeState::ResolvedBuyer
        } else {
            DisputeState::ResolvedSeller
        };
        dispute.resolved_at = env.ledger().timestamp();
        Self::save_dispute(&env, &dispute);

        events::dispute_finalized(
            &env,
            DisputeFinalizedEvent {
                dispute_id,
                votes_for_buyer: dispute.votes_for_buyer,
                votes_for_seller: dispute.votes_for_seller,
                buyer_wins,
                resolved_at: dispute.resolved_at,
            },
        );
        Ok(buyer_wins)
    }

    /// Owner-only. Pays `amount` out of the fee pool to an arbiter. The pool
    /// can never go negative; an overdraw is an authorization failure.
    pub fn distribute_fees(
        env: Env,
        caller: Address,
        dispute_id: u64,
        recipient: Address,
        amount: i128,
    ) -> Result<(), ArbitrationError> {
        caller.require_auth();
        guard::require_owner(&env, &caller)?;

        let pool: i128 = env
            .storage()
            .instance()
            .get(&DataKey::FeePool)
            .unwrap_or(0);
        if amount <= 0 || amount > pool {
            return Err(ArbitrationError::NotAuthorized);
        }

        env.storage()
            .instance()
            .set(&DataKey::FeePool, &(pool - amount));
        Self::fee_token(&env).transfer(&env.current_contract_address(), &recipient, &amount);

        events::fees_distributed(
            &env,
            FeesDistributedEvent {
                dispute_id,
                recipient,
                amount,
            },
        );
        Ok(())
    }

    // Read-only surface.

    pub fn get_dispute(env: Env, dispute_id: u64) -> Result<Dispute, ArbitrationError> {
        Self::load_dispute(&env, dispute_id)
    }

    pub fn get_arbiter(env: Env, arbiter: Address) -> Result<Arbiter, ArbitrationError> {
        env.storage()
            .persistent()
            .get(&DataKey::Arbiter(arbiter))
            .ok_or(ArbitrationError::NotArbiter)
    }

    pub fn get_vote(env: Env, dispute_id: u64, arbiter: Address) -> Option<VoteRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::Vote(dispute_id, arbiter))
    }

    pub fn get_dispute_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::DisputeCount)
            .unwrap_or(0)
    }

    pub fn get_fee_pool(env: Env) -> i128 {
        env.storage().instance().get(&DataKey::FeePool).unwrap_or(0)
    }

    pub fn get_owner(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Owner)
    }
}
