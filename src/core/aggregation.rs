use crate::core::models::{Participant, SettlementRound};
use std::collections::BTreeMap;

/// Each participant's total across all rounds they belong to.
///
/// A round contributes the participant's override when it has one, otherwise
/// the round's even share. Participants outside every round total 0. Totals
/// saturate at `i64::MAX`.
pub fn per_participant_total(
    rounds: &[SettlementRound],
    participants: &[Participant],
) -> BTreeMap<Participant, i64> {
    participants
        .iter()
        .map(|participant| {
            let total = rounds
                .iter()
                .filter_map(|round| round.share_for(participant))
                .fold(0i64, i64::saturating_add);
            (participant.clone(), total)
        })
        .collect()
}

/// Sum of every round's amount, saturating at `u64::MAX`.
pub fn grand_total(rounds: &[SettlementRound]) -> u64 {
    rounds.iter().map(|round| round.amount).fold(0, u64::saturating_add)
}
