//! Authorization predicates, consulted before any state mutation. All
//! checks here are read-only so a rejected call leaves no partial writes.

use soroban_sdk::{Address, Env};

use crate::error::ArbitrationError;
use crate::types::{Arbiter, DataKey, EscrowParties};

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ArbitrationError> {
    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ArbitrationError::NotAuthorized)?;
    if *caller != owner {
        return Err(ArbitrationError::NotAuthorized);
    }
    Ok(())
}

pub fn require_party(
    parties: &EscrowParties,
    caller: &Address,
) -> Result<(), ArbitrationError> {
    if *caller != parties.buyer && *caller != parties.seller {
        return Err(ArbitrationError::NotParty);
    }
    Ok(())
}

/// Loads the arbiter record and checks it is still active. Unregistered and
/// deactivated callers are indistinguishable to the voting layer.
pub fn require_active_arbiter(
    env: &Env,
    arbiter: &Address,
) -> Result<Arbiter, ArbitrationError> {
    let record: Arbiter = env
        .storage()
        .persistent()
        .get(&DataKey::Arbiter(arbiter.clone()))
        .ok_or(ArbitrationError::NotArbiter)?;
    if !record.active {
        return Err(ArbitrationError::NotArbiter);
    }
    Ok(record)
}
