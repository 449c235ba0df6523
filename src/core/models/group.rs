use super::round::SettlementRound;
use crate::core::aggregation::grand_total;
use serde::{Deserialize, Serialize};

/// Derived view over a session's rounds. Never persisted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementGroup {
    pub settlements: Vec<SettlementRound>,
    pub total_amount: u64,
}

impl SettlementGroup {
    pub fn from_rounds(rounds: &[SettlementRound]) -> Self {
        SettlementGroup {
            settlements: rounds.to_vec(),
            total_amount: grand_total(rounds),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.settlements.is_empty()
    }
}
