use soroban_sdk::{contractevent, Address, BytesN, String};

use crate::types::{Currency, ProposalRule, ProposalVoteOption};

#[contractevent]
pub struct ProposalSubmission {
    #[topic]
    pub proposal_id: u64,
    pub proposer: Address,
    pub governor: Address,
    pub token_id: u64,
    pub uuid: BytesN<32>,
    pub operator: Address,
    pub rule: ProposalRule,
    pub quorum_rate: u32,
    pub duration: u64,
    pub admission_expiry: u64,
}

#[contractevent]
pub struct ProposalAdmission {
    #[topic]
    pub proposal_id: u64,
    pub context_uri: String,
    pub review_uri: String,
    pub currency: Currency,
    pub total_weight: i128,
    pub quorum: i128,
    pub voting_deadline: u64,
}

#[contractevent]
pub struct ProposalDisqualification {
    #[topic]
    pub proposal_id: u64,
    pub context_uri: String,
    pub review_uri: String,
}

#[contractevent]
pub struct ProposalVote {
    #[topic]
    pub proposal_id: u64,
    #[topic]
    pub voter: Address,
    pub option: ProposalVoteOption,
    pub weight: i128,
}

#[contractevent]
pub struct BudgetContribution {
    #[topic]
    pub proposal_id: u64,
    #[topic]
    pub contributor: Address,
    pub amount: i128,
}

#[contractevent]
pub struct BudgetContributionWithdrawal {
    #[topic]
    pub proposal_id: u64,
    #[topic]
    pub contributor: Address,
    pub amount: i128,
}

#[contractevent]
pub struct ExecutionConfirmation {
    #[topic]
    pub proposal_id: u64,
    pub operator: Address,
    pub budget: i128,
}

#[contractevent]
pub struct ExecutionRejection {
    #[topic]
    pub proposal_id: u64,
}

#[contractevent]
pub struct ExecutionUpdate {
    #[topic]
    pub proposal_id: u64,
    pub log_uri: String,
}

#[contractevent]
pub struct ExecutionConclusion {
    #[topic]
    pub proposal_id: u64,
    pub log_uri: String,
    pub is_successful: bool,
}

#[contractevent]
pub struct Pause {
    pub nonce: u64,
}

#[contractevent]
pub struct Unpause {
    pub nonce: u64,
}
