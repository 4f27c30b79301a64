use crate::overlay;
use crate::types::{Proposal, ProposalRule, ProposalState, ProposalVerdict};

/// Vote tallies of one proposal, detached from storage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tally {
    pub rule: ProposalRule,
    pub total_weight: i128,
    pub quorum: i128,
    pub approval_weight: i128,
    pub disapproval_weight: i128,
    pub voting_deadline: u64,
}

impl Tally {
    pub fn of(proposal: &Proposal) -> Self {
        Tally {
            rule: proposal.rule,
            total_weight: proposal.total_weight,
            quorum: proposal.quorum,
            approval_weight: proposal.approval_weight,
            disapproval_weight: proposal.disapproval_weight,
            voting_deadline: proposal.voting_deadline,
        }
    }

    /// Whether `weight` more votes still fit under the admitted total weight.
    pub fn has_room_for(&self, weight: i128) -> bool {
        self.approval_weight
            .checked_add(self.disapproval_weight)
            .and_then(|cast| cast.checked_add(weight))
            .map_or(false, |cast| cast <= self.total_weight)
    }

    pub fn verdict(&self, now: u64) -> ProposalVerdict {
        // Weight the opposing side can still reach without crossing quorum.
        let slack = self.total_weight - self.quorum;
        match self.rule {
            ProposalRule::ApprovalBeyondQuorum => {
                if self.approval_weight >= self.quorum {
                    ProposalVerdict::Passed
                } else if self.disapproval_weight > slack || now >= self.voting_deadline {
                    ProposalVerdict::Failed
                } else {
                    ProposalVerdict::Unsettled
                }
            }
            ProposalRule::DisapprovalBeyondQuorum => {
                if self.disapproval_weight >= self.quorum {
                    ProposalVerdict::Failed
                } else if self.approval_weight > slack || now >= self.voting_deadline {
                    ProposalVerdict::Passed
                } else {
                    ProposalVerdict::Unsettled
                }
            }
        }
    }
}

/// Verdict as reported for any lifecycle state, including the expired-Voting projection.
pub fn proposal_verdict(proposal: &Proposal, now: u64) -> ProposalVerdict {
    match overlay::proposal_state(proposal, now) {
        ProposalState::Pending => ProposalVerdict::Unsettled,
        ProposalState::Disqualified => ProposalVerdict::Failed,
        _ => Tally::of(proposal).verdict(now),
    }
}

/// `total_weight * rate / RATE_DENOMINATOR`, rounded down.
pub fn quorum_of(total_weight: i128, rate: u32) -> Option<i128> {
    total_weight
        .checked_mul(rate as i128)
        .map(|scaled| scaled / crate::types::RATE_DENOMINATOR as i128)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(rule: ProposalRule, total: i128, rate: u32) -> Tally {
        Tally {
            rule,
            total_weight: total,
            quorum: quorum_of(total, rate).unwrap(),
            approval_weight: 0,
            disapproval_weight: 0,
            voting_deadline: 1_000,
        }
    }

    #[test]
    fn test_quorum_rounds_down() {
        assert_eq!(quorum_of(10, 7_000), Some(7));
        assert_eq!(quorum_of(400, 7_500), Some(300));
        assert_eq!(quorum_of(3, 5_000), Some(1));
        assert_eq!(quorum_of(i128::MAX, 10_000), None);
    }

    #[test]
    fn test_approval_rule_passes_and_stays_passed() {
        let mut t = tally(ProposalRule::ApprovalBeyondQuorum, 10, 7_000);
        assert_eq!(t.quorum, 7);

        t.approval_weight += 2;
        assert_eq!(t.verdict(10), ProposalVerdict::Unsettled);

        t.approval_weight += 5;
        assert_eq!(t.verdict(10), ProposalVerdict::Passed);

        t.disapproval_weight += 3;
        assert_eq!(t.verdict(10), ProposalVerdict::Passed);
        assert_eq!(t.verdict(5_000), ProposalVerdict::Passed);
    }

    #[test]
    fn test_approval_rule_fails_once_quorum_unreachable() {
        let mut t = tally(ProposalRule::ApprovalBeyondQuorum, 10, 7_000);

        t.disapproval_weight = 3;
        assert_eq!(t.verdict(10), ProposalVerdict::Unsettled);

        t.disapproval_weight = 4;
        assert_eq!(t.verdict(10), ProposalVerdict::Failed);

        t.approval_weight = 6;
        assert_eq!(t.verdict(10), ProposalVerdict::Failed);
    }

    #[test]
    fn test_approval_rule_fails_at_deadline() {
        let mut t = tally(ProposalRule::ApprovalBeyondQuorum, 10, 7_000);
        t.approval_weight = 6;
        assert_eq!(t.verdict(999), ProposalVerdict::Unsettled);
        assert_eq!(t.verdict(1_000), ProposalVerdict::Failed);
    }

    #[test]
    fn test_disapproval_rule_fails_and_stays_failed() {
        let mut t = tally(ProposalRule::DisapprovalBeyondQuorum, 400, 7_500);
        assert_eq!(t.quorum, 300);

        t.disapproval_weight += 300;
        assert_eq!(t.verdict(10), ProposalVerdict::Failed);

        t.approval_weight += 100;
        assert_eq!(t.verdict(10), ProposalVerdict::Failed);
    }

    #[test]
    fn test_disapproval_rule_passes_when_stop_unreachable() {
        let mut t = tally(ProposalRule::DisapprovalBeyondQuorum, 400, 7_500);

        t.approval_weight = 100;
        assert_eq!(t.verdict(10), ProposalVerdict::Unsettled);

        t.approval_weight = 101;
        assert_eq!(t.verdict(10), ProposalVerdict::Passed);
    }

    #[test]
    fn test_disapproval_rule_passes_at_deadline() {
        let mut t = tally(ProposalRule::DisapprovalBeyondQuorum, 400, 7_500);
        t.disapproval_weight = 299;
        assert_eq!(t.verdict(999), ProposalVerdict::Unsettled);
        assert_eq!(t.verdict(1_000), ProposalVerdict::Passed);
    }

    #[test]
    fn test_has_room_for() {
        let mut t = tally(ProposalRule::ApprovalBeyondQuorum, 10, 7_000);
        t.approval_weight = 6;
        t.disapproval_weight = 2;
        assert!(t.has_room_for(2));
        assert!(!t.has_room_for(3));
        assert!(!t.has_room_for(i128::MAX));
    }
}
