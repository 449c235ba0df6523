use super::participant::Participant;
use crate::constants::MAX_AMOUNT;
use crate::core::allocation::even_share;
use crate::core::errors::SettleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Per-participant amounts for one round. Signed because the last member of a
/// random split absorbs whatever residual is left.
pub type MemberAmounts = BTreeMap<Participant, i64>;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementRound {
    pub id: String,
    pub title: String,
    pub members: Vec<Participant>,
    /// Total in the smallest currency unit, at most `MAX_AMOUNT`; 0 means not
    /// yet entered.
    pub amount: u64,
    /// Empty means even split. Otherwise sums to `amount`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub member_amounts: MemberAmounts,
}

impl SettlementRound {
    /// Creates round number `ordinal` (1-based) with the given members.
    pub fn new(ordinal: usize, members: Vec<Participant>) -> Self {
        SettlementRound {
            id: Uuid::new_v4().to_string(),
            title: ordinal_title(ordinal),
            members: dedup_members(members),
            amount: 0,
            member_amounts: MemberAmounts::new(),
        }
    }

    pub fn is_member(&self, participant: &Participant) -> bool {
        self.members.contains(participant)
    }

    pub fn has_custom_split(&self) -> bool {
        !self.member_amounts.is_empty()
    }

    /// The shared even-split figure shown when no custom split exists.
    pub fn per_person(&self) -> u64 {
        even_share(self.amount, self.members.len())
    }

    /// Amount charged to `participant` in this round, or `None` if they are
    /// not a member.
    pub fn share_for(&self, participant: &Participant) -> Option<i64> {
        if !self.is_member(participant) {
            return None;
        }
        Some(
            self.member_amounts
                .get(participant)
                .copied()
                .unwrap_or_else(|| to_signed(self.per_person())),
        )
    }

    pub fn with_title(&self, raw: &str) -> Result<Self, SettleError> {
        let title = raw.trim();
        if title.is_empty() {
            return Err(SettleError::EmptyRoundTitle);
        }
        Ok(SettlementRound {
            title: title.to_string(),
            ..self.clone()
        })
    }

    /// Amounts above `MAX_AMOUNT` are clamped to it.
    pub fn with_amount(&self, amount: u64) -> Self {
        SettlementRound {
            amount: amount.min(MAX_AMOUNT),
            member_amounts: MemberAmounts::new(),
            ..self.clone()
        }
    }

    pub fn with_members(&self, members: Vec<Participant>) -> Self {
        SettlementRound {
            members: dedup_members(members),
            member_amounts: MemberAmounts::new(),
            ..self.clone()
        }
    }

    pub fn with_member_amounts(&self, member_amounts: MemberAmounts) -> Self {
        SettlementRound {
            member_amounts,
            ..self.clone()
        }
    }

    /// Drops members rejected by `keep`. Overrides are cleared only if the
    /// membership actually changed.
    pub fn retain_members(&self, keep: impl Fn(&Participant) -> bool) -> Self {
        let members: Vec<Participant> = self.members.iter().filter(|&m| keep(m)).cloned().collect();
        if members.len() == self.members.len() {
            return self.clone();
        }
        self.with_members(members)
    }
}

/// "1st round", "2nd round", "3rd round", "11th round", "22nd round", ...
pub fn ordinal_title(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{} round", n, suffix)
}

/// Saturates at `i64::MAX`; round amounts never exceed `MAX_AMOUNT`.
pub(crate) fn to_signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

fn dedup_members(members: Vec<Participant>) -> Vec<Participant> {
    let mut unique: Vec<Participant> = Vec::with_capacity(members.len());
    for member in members {
        if !unique.contains(&member) {
            unique.push(member);
        }
    }
    unique
}
