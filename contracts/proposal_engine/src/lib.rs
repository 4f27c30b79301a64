#![no_std]

mod engine;
mod errors;
mod escrow;
mod events;
mod guard;
mod interfaces;
mod overlay;
mod types;
mod verdict;


pub use engine::{ProposalEngine, ProposalEngineClient};
pub use errors::ProposalError;
pub use interfaces::{
    AdminRegistry, AdminRegistryClient, ValidatorOracle, ValidatorOracleClient, VotePowerOracle,
    VotePowerOracleClient,
};
pub use types::{
    Config, Currency, Proposal, ProposalParams, ProposalRule, ProposalState, ProposalVerdict,
    ProposalVoteOption, Validation, CONFIRMATION_GRACE, RATE_DENOMINATOR,
};
