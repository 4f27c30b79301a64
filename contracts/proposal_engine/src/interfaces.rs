use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, Vec};

use crate::types::Validation;

/// Voting-power source backing a proposal's token.
#[contractclient(name = "VotePowerOracleClient")]
pub trait VotePowerOracle {
    fn is_available(env: Env, token_id: u64) -> bool;
    fn total_weight_at(env: Env, token_id: u64, at: u64) -> i128;
    fn weight_of(env: Env, holder: Address, token_id: u64, at: u64) -> i128;
    /// Zone whose managers and moderators administer proposals on `token_id`.
    fn zone_of(env: Env, token_id: u64) -> BytesN<32>;
}

#[contractclient(name = "AdminRegistryClient")]
pub trait AdminRegistry {
    fn verify_admin_signatures(env: Env, message: BytesN<32>, signatures: Vec<BytesN<64>>) -> bool;
    fn is_manager_active_in(env: Env, zone: BytesN<32>, account: Address) -> bool;
    fn is_moderator_active_in(env: Env, zone: BytesN<32>, account: Address) -> bool;
    fn is_governor_authorized(env: Env, governor: Address) -> bool;
}

#[contractclient(name = "ValidatorOracleClient")]
pub trait ValidatorOracle {
    fn verify(env: Env, payload: Bytes, validation: Validation) -> bool;
}
