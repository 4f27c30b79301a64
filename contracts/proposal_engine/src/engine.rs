use soroban_sdk::{
    contract, contractimpl, symbol_short, token::TokenClient, xdr::ToXdr, Address, BytesN, Env,
    IntoVal, String, Val, Vec,
};

use crate::errors::ProposalError;
use crate::escrow;
use crate::events::{
    BudgetContribution, BudgetContributionWithdrawal, ExecutionConclusion, ExecutionConfirmation,
    ExecutionRejection, ExecutionUpdate, Pause, ProposalAdmission, ProposalDisqualification,
    ProposalSubmission, ProposalVote, Unpause,
};
use crate::guard::ReentrancyGuard;
use crate::interfaces::{AdminRegistryClient, ValidatorOracleClient, VotePowerOracleClient};
use crate::overlay;
use crate::types::{
    Config, Currency, DataKey, Proposal, ProposalParams, ProposalState, ProposalVerdict,
    ProposalVoteOption, Validation, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
    RATE_DENOMINATOR,
};
use crate::verdict::{self, Tally};

#[contract]
pub struct ProposalEngine;

#[contractimpl]
impl ProposalEngine {
    /// One-time setup, authorized by `deployer`.
    pub fn initialize(
        env: Env,
        deployer: Address,
        admin: Address,
        validator: Address,
        native_token: Address,
        fee_receiver: Address,
        fee: i128,
    ) -> Result<(), ProposalError> {
        deployer.require_auth();
        if env.storage().instance().has(&DataKey::Config) {
            return Err(ProposalError::AlreadyInitialized);
        }
        if fee < 0 {
            return Err(ProposalError::InvalidInput);
        }

        let config = Config {
            admin,
            validator,
            native_token,
            fee_receiver,
            fee,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::Paused, &false);
        env.storage().instance().set(&DataKey::Nonce, &0u64);
        env.storage().instance().set(&DataKey::ProposalCount, &0u64);
        Ok(())
    }

    pub fn pause(env: Env, signatures: Vec<BytesN<64>>) -> Result<(), ProposalError> {
        let config = Self::require_initialized(&env)?;
        if Self::paused(&env) {
            return Err(ProposalError::Paused);
        }
        let nonce = Self::consume_admin_signatures(&env, &config, "pause", signatures)?;
        env.storage().instance().set(&DataKey::Paused, &true);
        Pause { nonce }.publish(&env);
        Ok(())
    }

    pub fn unpause(env: Env, signatures: Vec<BytesN<64>>) -> Result<(), ProposalError> {
        let config = Self::require_initialized(&env)?;
        if !Self::paused(&env) {
            return Err(ProposalError::InvalidInput);
        }
        let nonce = Self::consume_admin_signatures(&env, &config, "unpause", signatures)?;
        env.storage().instance().set(&DataKey::Paused, &false);
        Unpause { nonce }.publish(&env);
        Ok(())
    }

    /// Opens a Pending proposal. `value` is the native coin attached for the fee;
    /// anything above the fee is refunded.
    pub fn propose(
        env: Env,
        proposer: Address,
        params: ProposalParams,
        value: i128,
        validation: Validation,
    ) -> Result<u64, ProposalError> {
        let config = Self::require_initialized(&env)?;
        Self::require_not_paused(&env)?;
        proposer.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        if params.quorum_rate > RATE_DENOMINATOR {
            return Err(ProposalError::InvalidInput);
        }
        let now = env.ledger().timestamp();
        if params.admission_expiry <= now {
            return Err(ProposalError::InvalidTimestamp);
        }
        if !AdminRegistryClient::new(&env, &config.admin).is_governor_authorized(&params.governor) {
            return Err(ProposalError::Unauthorized);
        }
        if !VotePowerOracleClient::new(&env, &params.governor).is_available(&params.token_id) {
            return Err(ProposalError::UnavailableToken);
        }
        validate(
            &env,
            &config,
            (symbol_short!("propose"), proposer.clone(), params.clone()),
            &validation,
        )?;

        let proposal_id = Self::proposal_count(&env)
            .checked_add(1)
            .ok_or(ProposalError::Overflow)?;
        env.storage().instance().set(&DataKey::ProposalCount, &proposal_id);

        let empty = String::from_str(&env, "");
        let proposal = Proposal {
            id: proposal_id,
            uuid: params.uuid.clone(),
            governor: params.governor.clone(),
            token_id: params.token_id,
            proposer: proposer.clone(),
            operator: params.operator.clone(),
            rule: params.rule,
            quorum_rate: params.quorum_rate,
            quorum: 0,
            total_weight: 0,
            approval_weight: 0,
            disapproval_weight: 0,
            duration: params.duration,
            admission_expiry: params.admission_expiry,
            voting_start: 0,
            voting_deadline: 0,
            state: ProposalState::Pending,
            budget: 0,
            currency: Currency::Native,
            context_uri: empty.clone(),
            review_uri: empty.clone(),
            log_uri: empty,
        };
        Self::save(&env, &proposal);

        escrow::collect_value(&env, &config, &proposer, value, config.fee)?;
        if config.fee > 0 {
            TokenClient::new(&env, &config.native_token).transfer(
                &env.current_contract_address(),
                &config.fee_receiver,
                &config.fee,
            );
        }

        ProposalSubmission {
            proposal_id,
            proposer,
            governor: params.governor,
            token_id: params.token_id,
            uuid: params.uuid,
            operator: params.operator,
            rule: params.rule,
            quorum_rate: params.quorum_rate,
            duration: params.duration,
            admission_expiry: params.admission_expiry,
        }
        .publish(&env);

        Ok(proposal_id)
    }

    /// Opens voting: snapshots total weight, fixes the quorum and rebases the deadline.
    pub fn admit(
        env: Env,
        caller: Address,
        proposal_id: u64,
        context_uri: String,
        review_uri: String,
        currency: Currency,
        validation: Validation,
    ) -> Result<(), ProposalError> {
        let config = Self::require_initialized(&env)?;
        Self::require_not_paused(&env)?;
        let mut proposal = Self::load(&env, proposal_id)?;
        caller.require_auth();

        if proposal.state != ProposalState::Pending {
            return Err(ProposalError::InvalidAdmitting);
        }
        let now = env.ledger().timestamp();
        if now >= proposal.admission_expiry {
            return Err(ProposalError::Timeout);
        }
        let oracle = VotePowerOracleClient::new(&env, &proposal.governor);
        let zone = oracle.zone_of(&proposal.token_id);
        if !Self::is_manager(&env, &config, &zone, &caller) {
            return Err(ProposalError::Unauthorized);
        }
        validate(
            &env,
            &config,
            (
                symbol_short!("admit"),
                proposal_id,
                context_uri.clone(),
                review_uri.clone(),
                currency.clone(),
            ),
            &validation,
        )?;

        let total_weight = oracle.total_weight_at(&proposal.token_id, &now);
        if total_weight <= 0 {
            return Err(ProposalError::NoWeight);
        }
        let quorum =
            verdict::quorum_of(total_weight, proposal.quorum_rate).ok_or(ProposalError::Overflow)?;
        let voting_deadline = now
            .checked_add(proposal.duration)
            .ok_or(ProposalError::Overflow)?;

        proposal.total_weight = total_weight;
        proposal.quorum = quorum;
        proposal.voting_start = now;
        proposal.voting_deadline = voting_deadline;
        proposal.currency = currency.clone();
        proposal.context_uri = context_uri.clone();
        proposal.review_uri = review_uri.clone();
        proposal.state = ProposalState::Voting;
        Self::save(&env, &proposal);

        ProposalAdmission {
            proposal_id,
            context_uri,
            review_uri,
            currency,
            total_weight,
            quorum,
            voting_deadline,
        }
        .publish(&env);
        Ok(())
    }

    /// Managers or moderators may drop a Pending proposal; only managers may drop one in Voting.
    pub fn disqualify(
        env: Env,
        caller: Address,
        proposal_id: u64,
        context_uri: String,
        review_uri: String,
        validation: Validation,
    ) -> Result<(), ProposalError> {
        let config = Self::require_initialized(&env)?;
        Self::require_not_paused(&env)?;
        let mut proposal = Self::load(&env, proposal_id)?;
        caller.require_auth();

        let zone = VotePowerOracleClient::new(&env, &proposal.governor).zone_of(&proposal.token_id);
        let authorized = match overlay::proposal_state(&proposal, env.ledger().timestamp()) {
            ProposalState::Pending => {
                Self::is_manager(&env, &config, &zone, &caller)
                    || AdminRegistryClient::new(&env, &config.admin)
                        .is_moderator_active_in(&zone, &caller)
            }
            ProposalState::Voting => Self::is_manager(&env, &config, &zone, &caller),
            _ => return Err(ProposalError::InvalidDisqualifying),
        };
        if !authorized {
            return Err(ProposalError::Unauthorized);
        }
        validate(
            &env,
            &config,
            (
                symbol_short!("disqual"),
                proposal_id,
                context_uri.clone(),
                review_uri.clone(),
            ),
            &validation,
        )?;

        proposal.context_uri = context_uri.clone();
        proposal.review_uri = review_uri.clone();
        proposal.state = ProposalState::Disqualified;
        Self::save(&env, &proposal);

        ProposalDisqualification {
            proposal_id,
            context_uri,
            review_uri,
        }
        .publish(&env);
        Ok(())
    }

    /// Casts `voter`'s weight at the voting start. Returns the weight credited.
    pub fn vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        option: ProposalVoteOption,
    ) -> Result<i128, ProposalError> {
        Self::cast_vote(&env, voter, proposal_id, option, None)
    }

    pub fn safe_vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        option: ProposalVoteOption,
        anchor: BytesN<32>,
    ) -> Result<i128, ProposalError> {
        Self::cast_vote(&env, voter, proposal_id, option, Some(anchor))
    }

    /// Adds `amount` to the budget. For native currency `value` must cover `amount`;
    /// any native value beyond what is due is refunded.
    pub fn contribute_budget(
        env: Env,
        contributor: Address,
        proposal_id: u64,
        amount: i128,
        value: i128,
    ) -> Result<(), ProposalError> {
        Self::contribute(&env, contributor, proposal_id, amount, value, None)
    }

    pub fn safe_contribute_budget(
        env: Env,
        contributor: Address,
        proposal_id: u64,
        amount: i128,
        value: i128,
        anchor: BytesN<32>,
    ) -> Result<(), ProposalError> {
        Self::contribute(&env, contributor, proposal_id, amount, value, Some(anchor))
    }

    /// Refunds the caller's whole contribution of a rejected or disqualified proposal.
    pub fn withdraw_budget_contribution(
        env: Env,
        contributor: Address,
        proposal_id: u64,
    ) -> Result<i128, ProposalError> {
        let config = Self::require_initialized(&env)?;
        Self::require_not_paused(&env)?;
        let proposal = Self::load(&env, proposal_id)?;
        contributor.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        match overlay::proposal_state(&proposal, env.ledger().timestamp()) {
            ProposalState::Rejected | ProposalState::Disqualified => {}
            // The escrow went to the operator on confirmation.
            ProposalState::Executing
            | ProposalState::SuccessfulExecuted
            | ProposalState::UnsuccessfulExecuted => {
                return Err(ProposalError::NothingToWithdraw)
            }
            _ => return Err(ProposalError::InvalidWithdrawing),
        }

        let amount = escrow::take(&env, proposal_id, &contributor)?;
        escrow::pay(&env, &config, &proposal.currency, &contributor, amount);

        BudgetContributionWithdrawal {
            proposal_id,
            contributor,
            amount,
        }
        .publish(&env);
        Ok(amount)
    }

    /// Moves a passed proposal to Executing and pays the whole budget to its operator.
    pub fn confirm_execution(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<i128, ProposalError> {
        let config = Self::require_initialized(&env)?;
        Self::require_not_paused(&env)?;
        let mut proposal = Self::load(&env, proposal_id)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        let now = env.ledger().timestamp();
        if proposal.state == ProposalState::Voting
            && overlay::is_confirmation_expired(proposal.voting_deadline, now)
        {
            return Err(ProposalError::Overdue);
        }
        if overlay::proposal_state(&proposal, now) != ProposalState::Voting
            || Tally::of(&proposal).verdict(now) != ProposalVerdict::Passed
        {
            return Err(ProposalError::InvalidConfirming);
        }
        let zone = VotePowerOracleClient::new(&env, &proposal.governor).zone_of(&proposal.token_id);
        if !Self::is_manager(&env, &config, &zone, &caller) {
            return Err(ProposalError::Unauthorized);
        }

        proposal.state = ProposalState::Executing;
        Self::save(&env, &proposal);

        escrow::pay(
            &env,
            &config,
            &proposal.currency,
            &proposal.operator,
            proposal.budget,
        );

        ExecutionConfirmation {
            proposal_id,
            operator: proposal.operator,
            budget: proposal.budget,
        }
        .publish(&env);
        Ok(proposal.budget)
    }

    /// The operator may decline at any point of the voting, whatever the verdict.
    pub fn reject_execution(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<(), ProposalError> {
        Self::require_initialized(&env)?;
        Self::require_not_paused(&env)?;
        let mut proposal = Self::load(&env, proposal_id)?;
        caller.require_auth();

        if overlay::proposal_state(&proposal, env.ledger().timestamp()) != ProposalState::Voting {
            return Err(ProposalError::InvalidRejecting);
        }
        if caller != proposal.operator {
            return Err(ProposalError::Unauthorized);
        }

        proposal.state = ProposalState::Rejected;
        Self::save(&env, &proposal);

        ExecutionRejection { proposal_id }.publish(&env);
        Ok(())
    }

    pub fn update_execution(
        env: Env,
        caller: Address,
        proposal_id: u64,
        log_uri: String,
        validation: Validation,
    ) -> Result<(), ProposalError> {
        let config = Self::require_initialized(&env)?;
        Self::require_not_paused(&env)?;
        let mut proposal = Self::load(&env, proposal_id)?;
        caller.require_auth();

        if proposal.state != ProposalState::Executing {
            return Err(ProposalError::InvalidUpdating);
        }
        if caller != proposal.operator {
            return Err(ProposalError::Unauthorized);
        }
        validate(
            &env,
            &config,
            (symbol_short!("update"), proposal_id, log_uri.clone()),
            &validation,
        )?;

        proposal.log_uri = log_uri.clone();
        Self::save(&env, &proposal);

        ExecutionUpdate {
            proposal_id,
            log_uri,
        }
        .publish(&env);
        Ok(())
    }

    pub fn conclude_execution(
        env: Env,
        caller: Address,
        proposal_id: u64,
        log_uri: String,
        is_successful: bool,
        validation: Validation,
    ) -> Result<(), ProposalError> {
        let config = Self::require_initialized(&env)?;
        Self::require_not_paused(&env)?;
        let mut proposal = Self::load(&env, proposal_id)?;
        caller.require_auth();

        if proposal.state != ProposalState::Executing {
            return Err(ProposalError::InvalidConcluding);
        }
        let zone = VotePowerOracleClient::new(&env, &proposal.governor).zone_of(&proposal.token_id);
        if !Self::is_manager(&env, &config, &zone, &caller) {
            return Err(ProposalError::Unauthorized);
        }
        validate(
            &env,
            &config,
            (
                symbol_short!("conclude"),
                proposal_id,
                log_uri.clone(),
                is_successful,
            ),
            &validation,
        )?;

        proposal.log_uri = log_uri.clone();
        proposal.state = if is_successful {
            ProposalState::SuccessfulExecuted
        } else {
            ProposalState::UnsuccessfulExecuted
        };
        Self::save(&env, &proposal);

        ExecutionConclusion {
            proposal_id,
            log_uri,
            is_successful,
        }
        .publish(&env);
        Ok(())
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, ProposalError> {
        Self::require_initialized(&env)?;
        Self::load(&env, proposal_id)
    }

    pub fn get_proposal_state(env: Env, proposal_id: u64) -> Result<ProposalState, ProposalError> {
        Self::require_initialized(&env)?;
        let proposal = Self::load(&env, proposal_id)?;
        Ok(overlay::proposal_state(&proposal, env.ledger().timestamp()))
    }

    pub fn get_proposal_verdict(
        env: Env,
        proposal_id: u64,
    ) -> Result<ProposalVerdict, ProposalError> {
        Self::require_initialized(&env)?;
        let proposal = Self::load(&env, proposal_id)?;
        Ok(verdict::proposal_verdict(&proposal, env.ledger().timestamp()))
    }

    /// Anchor expected by `safe_vote` and `safe_contribute_budget`.
    pub fn get_proposal_anchor(env: Env, proposal_id: u64) -> Result<BytesN<32>, ProposalError> {
        Self::require_initialized(&env)?;
        let proposal = Self::load(&env, proposal_id)?;
        Ok(Self::anchor_of(&env, &proposal))
    }

    pub fn get_vote(
        env: Env,
        proposal_id: u64,
        voter: Address,
    ) -> Result<ProposalVoteOption, ProposalError> {
        Self::require_initialized(&env)?;
        Self::load(&env, proposal_id)?;
        Ok(env
            .storage()
            .persistent()
            .get(&DataKey::Vote(proposal_id, voter))
            .unwrap_or(ProposalVoteOption::Nil))
    }

    pub fn get_contribution(
        env: Env,
        proposal_id: u64,
        contributor: Address,
    ) -> Result<i128, ProposalError> {
        Self::require_initialized(&env)?;
        Self::load(&env, proposal_id)?;
        Ok(escrow::contribution_of(&env, proposal_id, &contributor))
    }

    pub fn get_proposal_count(env: Env) -> Result<u64, ProposalError> {
        Self::require_initialized(&env)?;
        Ok(Self::proposal_count(&env))
    }

    pub fn get_config(env: Env) -> Result<Config, ProposalError> {
        Self::require_initialized(&env)
    }

    pub fn is_paused(env: Env) -> Result<bool, ProposalError> {
        Self::require_initialized(&env)?;
        Ok(Self::paused(&env))
    }

    pub fn nonce(env: Env) -> Result<u64, ProposalError> {
        Self::require_initialized(&env)?;
        Ok(env.storage().instance().get(&DataKey::Nonce).unwrap_or(0u64))
    }

    fn cast_vote(
        env: &Env,
        voter: Address,
        proposal_id: u64,
        option: ProposalVoteOption,
        anchor: Option<BytesN<32>>,
    ) -> Result<i128, ProposalError> {
        Self::require_initialized(env)?;
        Self::require_not_paused(env)?;
        let mut proposal = Self::load(env, proposal_id)?;
        voter.require_auth();
        Self::check_anchor(env, &proposal, anchor)?;

        let now = env.ledger().timestamp();
        if overlay::proposal_state(&proposal, now) != ProposalState::Voting {
            return Err(ProposalError::InvalidVoting);
        }
        if now >= proposal.voting_deadline {
            return Err(ProposalError::Timeout);
        }
        if option == ProposalVoteOption::Nil {
            return Err(ProposalError::InvalidInput);
        }
        let vote_key = DataKey::Vote(proposal_id, voter.clone());
        if env.storage().persistent().has(&vote_key) {
            return Err(ProposalError::AlreadyVoted);
        }

        let weight = VotePowerOracleClient::new(env, &proposal.governor).weight_of(
            &voter,
            &proposal.token_id,
            &proposal.voting_start,
        );
        if weight <= 0 {
            return Err(ProposalError::NoVotingPower);
        }
        if !Tally::of(&proposal).has_room_for(weight) {
            return Err(ProposalError::ConflictedWeight);
        }

        match option {
            ProposalVoteOption::Approval => proposal.approval_weight += weight,
            _ => proposal.disapproval_weight += weight,
        }
        Self::save(env, &proposal);

        env.storage().persistent().set(&vote_key, &option);
        env.storage()
            .persistent()
            .extend_ttl(&vote_key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

        ProposalVote {
            proposal_id,
            voter,
            option,
            weight,
        }
        .publish(env);
        Ok(weight)
    }

    fn contribute(
        env: &Env,
        contributor: Address,
        proposal_id: u64,
        amount: i128,
        value: i128,
        anchor: Option<BytesN<32>>,
    ) -> Result<(), ProposalError> {
        let config = Self::require_initialized(env)?;
        Self::require_not_paused(env)?;
        let mut proposal = Self::load(env, proposal_id)?;
        contributor.require_auth();
        let _guard = ReentrancyGuard::acquire(env)?;
        Self::check_anchor(env, &proposal, anchor)?;

        if overlay::proposal_state(&proposal, env.ledger().timestamp()) != ProposalState::Voting {
            return Err(ProposalError::InvalidContributing);
        }
        if amount <= 0 {
            return Err(ProposalError::InvalidInput);
        }

        proposal.budget = proposal
            .budget
            .checked_add(amount)
            .ok_or(ProposalError::Overflow)?;
        escrow::credit(env, proposal_id, &contributor, amount)?;
        Self::save(env, &proposal);

        match &proposal.currency {
            Currency::Native => escrow::collect_value(env, &config, &contributor, value, amount)?,
            currency => {
                escrow::collect(env, &config, currency, &contributor, amount);
                escrow::collect_value(env, &config, &contributor, value, 0)?;
            }
        }

        BudgetContribution {
            proposal_id,
            contributor,
            amount,
        }
        .publish(env);
        Ok(())
    }

    fn require_initialized(env: &Env) -> Result<Config, ProposalError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(ProposalError::NotInitialized)
    }

    fn paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    fn require_not_paused(env: &Env) -> Result<(), ProposalError> {
        if Self::paused(env) {
            return Err(ProposalError::Paused);
        }
        Ok(())
    }

    fn proposal_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ProposalCount)
            .unwrap_or(0u64)
    }

    fn load(env: &Env, proposal_id: u64) -> Result<Proposal, ProposalError> {
        if proposal_id == 0 || proposal_id > Self::proposal_count(env) {
            return Err(ProposalError::InvalidProposalId);
        }
        env.storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
            .ok_or(ProposalError::InvalidProposalId)
    }

    fn save(env: &Env, proposal: &Proposal) {
        let key = DataKey::Proposal(proposal.id);
        env.storage().persistent().set(&key, proposal);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    fn is_manager(env: &Env, config: &Config, zone: &BytesN<32>, account: &Address) -> bool {
        AdminRegistryClient::new(env, &config.admin).is_manager_active_in(zone, account)
    }

    fn anchor_of(env: &Env, proposal: &Proposal) -> BytesN<32> {
        env.crypto()
            .sha256(&proposal.context_uri.clone().to_xdr(env))
            .to_bytes()
    }

    fn check_anchor(
        env: &Env,
        proposal: &Proposal,
        anchor: Option<BytesN<32>>,
    ) -> Result<(), ProposalError> {
        match anchor {
            Some(anchor) if anchor != Self::anchor_of(env, proposal) => {
                Err(ProposalError::BadAnchor)
            }
            _ => Ok(()),
        }
    }

    /// Verifies admin signatures over `(action, engine, nonce)` and advances the nonce.
    fn consume_admin_signatures(
        env: &Env,
        config: &Config,
        action: &str,
        signatures: Vec<BytesN<64>>,
    ) -> Result<u64, ProposalError> {
        let nonce: u64 = env.storage().instance().get(&DataKey::Nonce).unwrap_or(0u64);
        let message = (
            String::from_str(env, action),
            env.current_contract_address(),
            nonce,
        )
            .to_xdr(env);
        let message = env.crypto().sha256(&message).to_bytes();
        if !AdminRegistryClient::new(env, &config.admin).verify_admin_signatures(&message, &signatures)
        {
            return Err(ProposalError::InvalidSignatures);
        }
        env.storage().instance().set(&DataKey::Nonce, &(nonce + 1));
        Ok(nonce)
    }
}

/// Asks the validator oracle to attest the XDR encoding of `payload`.
fn validate<T: IntoVal<Env, Val>>(
    env: &Env,
    config: &Config,
    payload: T,
    validation: &Validation,
) -> Result<(), ProposalError> {
    let payload = payload.to_xdr(env);
    if !ValidatorOracleClient::new(env, &config.validator).verify(&payload, validation) {
        return Err(ProposalError::InvalidValidation);
    }
    Ok(())
}
