use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProposalError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    Paused = 2,
    InvalidProposalId = 3,
    InvalidInput = 4,
    InvalidTimestamp = 5,
    UnavailableToken = 6,
    Unauthorized = 7,
    InvalidSignatures = 8,
    InvalidValidation = 9,
    Timeout = 10,
    Overdue = 11,
    InvalidAdmitting = 12,
    InvalidDisqualifying = 13,
    InvalidVoting = 14,
    AlreadyVoted = 15,
    NoVotingPower = 16,
    ConflictedWeight = 17,
    InvalidContributing = 18,
    InvalidWithdrawing = 19,
    NothingToWithdraw = 20,
    InvalidConfirming = 21,
    InvalidRejecting = 22,
    InvalidUpdating = 23,
    InvalidConcluding = 24,
    BadAnchor = 25,
    InsufficientValue = 26,
    Reentrant = 27,
    Overflow = 28,
    NoWeight = 29,
}
