//! Read-time projection of a proposal's stored state.
//!
//! A proposal left in Voting past `voting_deadline + CONFIRMATION_GRACE` is
//! reported as Disqualified. Nothing is written; the projection is recomputed
//! on every read so an unresponsive manager can never lock the escrow.

use crate::types::{Proposal, ProposalState, CONFIRMATION_GRACE};

/// First timestamp at which a Voting proposal can no longer be confirmed.
pub fn confirmation_deadline(voting_deadline: u64) -> u64 {
    voting_deadline.saturating_add(CONFIRMATION_GRACE)
}

pub fn is_confirmation_expired(voting_deadline: u64, now: u64) -> bool {
    now >= confirmation_deadline(voting_deadline)
}

pub fn project(stored: ProposalState, voting_deadline: u64, now: u64) -> ProposalState {
    if stored == ProposalState::Voting && is_confirmation_expired(voting_deadline, now) {
        ProposalState::Disqualified
    } else {
        stored
    }
}

pub fn proposal_state(proposal: &Proposal, now: u64) -> ProposalState {
    project(proposal.state, proposal.voting_deadline, now)
}
