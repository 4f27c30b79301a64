use soroban_sdk::Env;

use crate::errors::ProposalError;
use crate::types::DataKey;

/// Non-reentrant execution token for fund-moving commands.
///
/// Holding a `ReentrancyGuard` keeps `DataKey::Locked` set; dropping it clears
/// the flag. A failed invocation rolls the flag back with the rest of storage.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, ProposalError> {
        let locked: bool = env
            .storage()
            .temporary()
            .get(&DataKey::Locked)
            .unwrap_or(false);
        if locked {
            return Err(ProposalError::Reentrant);
        }
        env.storage().temporary().set(&DataKey::Locked, &true);
        Ok(ReentrancyGuard { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().temporary().remove(&DataKey::Locked);
    }
}
