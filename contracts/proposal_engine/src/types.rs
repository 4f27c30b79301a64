use soroban_sdk::{contracttype, Address, BytesN, String};

/// Basis-point denominator for `quorum_rate` (100%).
pub const RATE_DENOMINATOR: u32 = 10_000;

/// Time after the voting deadline during which a passed proposal can still be confirmed.
pub const CONFIRMATION_GRACE: u64 = 30 * 86_400;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Paused,
    Nonce,
    Locked,
    ProposalCount,
    Proposal(u64),
    Vote(u64, Address),
    Contribution(u64, Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub validator: Address,
    pub native_token: Address,
    pub fee_receiver: Address,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalState {
    Pending = 1,
    Voting = 2,
    Executing = 3,
    SuccessfulExecuted = 4,
    UnsuccessfulExecuted = 5,
    Disqualified = 6,
    Rejected = 7,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalRule {
    /// Approval must reach quorum; the proposal fails when time runs out.
    ApprovalBeyondQuorum = 0,
    /// Disapproval must reach quorum to stop it; the proposal passes when time runs out.
    DisapprovalBeyondQuorum = 1,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalVerdict {
    Unsettled = 0,
    Passed = 1,
    Failed = 2,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalVoteOption {
    Nil = 0,
    Approval = 1,
    Disapproval = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Currency {
    Native,
    Token(Address),
}

/// Off-chain attestation checked by the validator oracle.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Validation {
    pub nonce: u64,
    pub expiry: u64,
    pub signature: BytesN<64>,
}

/// Arguments of `propose`, grouped so the attested payload is a single value.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalParams {
    pub governor: Address,
    pub token_id: u64,
    pub uuid: BytesN<32>,
    pub operator: Address,
    pub rule: ProposalRule,
    pub quorum_rate: u32,
    pub duration: u64,
    pub admission_expiry: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub uuid: BytesN<32>,
    pub governor: Address,
    pub token_id: u64,
    pub proposer: Address,
    pub operator: Address,
    pub rule: ProposalRule,
    pub quorum_rate: u32,
    /// Absolute weight threshold, fixed at admission.
    pub quorum: i128,
    pub total_weight: i128,
    pub approval_weight: i128,
    pub disapproval_weight: i128,
    pub duration: u64,
    pub admission_expiry: u64,
    /// Admission timestamp; every weight snapshot is taken here.
    pub voting_start: u64,
    pub voting_deadline: u64,
    pub state: ProposalState,
    pub budget: i128,
    pub currency: Currency,
    pub context_uri: String,
    pub review_uri: String,
    pub log_uri: String,
}
