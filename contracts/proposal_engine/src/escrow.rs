//! Budget escrow: per-contributor ledger and the value transfers around it.
//!
//! Callers mutate the ledger before calling into a token contract, and any
//! transfer failure aborts the whole invocation.

use soroban_sdk::{token::TokenClient, Address, Env};

use crate::errors::ProposalError;
use crate::types::{
    Config, Currency, DataKey, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};

pub fn token_of(config: &Config, currency: &Currency) -> Address {
    match currency {
        Currency::Native => config.native_token.clone(),
        Currency::Token(token) => token.clone(),
    }
}

/// Takes `value` of native coin from `from`, keeps `due` and refunds the rest.
pub fn collect_value(
    env: &Env,
    config: &Config,
    from: &Address,
    value: i128,
    due: i128,
) -> Result<(), ProposalError> {
    if value < 0 || due < 0 {
        return Err(ProposalError::InvalidInput);
    }
    if value < due {
        return Err(ProposalError::InsufficientValue);
    }
    if value == 0 {
        return Ok(());
    }

    let native = TokenClient::new(env, &config.native_token);
    native.transfer(from, &env.current_contract_address(), &value);
    if value > due {
        native.transfer(&env.current_contract_address(), from, &(value - due));
    }
    Ok(())
}

/// Moves `amount` of `currency` from `from` into the engine.
pub fn collect(env: &Env, config: &Config, currency: &Currency, from: &Address, amount: i128) {
    if amount > 0 {
        TokenClient::new(env, &token_of(config, currency)).transfer(
            from,
            &env.current_contract_address(),
            &amount,
        );
    }
}

/// Pays `amount` of `currency` out of the engine.
pub fn pay(env: &Env, config: &Config, currency: &Currency, to: &Address, amount: i128) {
    if amount > 0 {
        TokenClient::new(env, &token_of(config, currency)).transfer(
            &env.current_contract_address(),
            to,
            &amount,
        );
    }
}

pub fn contribution_of(env: &Env, proposal_id: u64, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(proposal_id, contributor.clone()))
        .unwrap_or(0)
}

pub fn credit(
    env: &Env,
    proposal_id: u64,
    contributor: &Address,
    amount: i128,
) -> Result<i128, ProposalError> {
    let key = DataKey::Contribution(proposal_id, contributor.clone());
    let balance = contribution_of(env, proposal_id, contributor)
        .checked_add(amount)
        .ok_or(ProposalError::Overflow)?;
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    Ok(balance)
}

/// Zeroes a contribution and returns what it held.
pub fn take(env: &Env, proposal_id: u64, contributor: &Address) -> Result<i128, ProposalError> {
    let amount = contribution_of(env, proposal_id, contributor);
    if amount == 0 {
        return Err(ProposalError::NothingToWithdraw);
    }
    let key = DataKey::Contribution(proposal_id, contributor.clone());
    env.storage().persistent().set(&key, &0i128);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ProposalEngine;
    use crate::types::DAY_IN_LEDGERS;
    use soroban_sdk::testutils::{storage::Persistent as _, Address as _, Ledger};

    #[test]
    fn test_take_zeroes_contribution_and_keeps_it_alive() {
        let env = Env::default();
        let engine_id = env.register(ProposalEngine, ());
        let contributor = Address::generate(&env);
        let key = DataKey::Contribution(1, contributor.clone());

        env.as_contract(&engine_id, || {
            env.storage()
                .instance()
                .extend_ttl(PERSISTENT_BUMP_AMOUNT, PERSISTENT_BUMP_AMOUNT);
            assert_eq!(credit(&env, 1, &contributor, 100), Ok(100));
            assert_eq!(env.storage().persistent().get_ttl(&key), PERSISTENT_BUMP_AMOUNT);
        });

        let sequence = env.ledger().sequence();
        env.ledger().set_sequence_number(sequence + 2 * DAY_IN_LEDGERS);

        env.as_contract(&engine_id, || {
            assert_eq!(
                env.storage().persistent().get_ttl(&key),
                PERSISTENT_BUMP_AMOUNT - 2 * DAY_IN_LEDGERS
            );
            assert_eq!(take(&env, 1, &contributor), Ok(100));
            assert_eq!(contribution_of(&env, 1, &contributor), 0);
            assert_eq!(env.storage().persistent().get_ttl(&key), PERSISTENT_BUMP_AMOUNT);
            assert_eq!(
                take(&env, 1, &contributor),
                Err(ProposalError::NothingToWithdraw)
            );
        });
    }
}
