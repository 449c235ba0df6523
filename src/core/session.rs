use crate::constants::MAX_AMOUNT;
use crate::core::aggregation::per_participant_total;
use crate::core::allocation::{random_split, reset_split};
use crate::core::errors::SettleError;
use crate::core::models::{Participant, SettlementGroup, SettlementRound};
use crate::core::registry::ParticipantRegistry;
use crate::core::summary::SettlementSummary;
use log::{debug, info};
use rand::Rng;
use std::collections::BTreeMap;

/// The round list for one settlement screen.
///
/// Like the registry this is a versioned value. Mutators return the next
/// version and never touch the receiver, so the holder decides when to swap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    rounds: Vec<SettlementRound>,
    version: u64,
}

impl Settlement {
    /// Starts with `initial_rounds` empty rounds over the full registry.
    pub fn new(registry: &ParticipantRegistry, initial_rounds: usize) -> Self {
        let rounds = (1..=initial_rounds)
            .map(|ordinal| SettlementRound::new(ordinal, registry.participants().to_vec()))
            .collect();
        Settlement { rounds, version: 0 }
    }

    pub fn rounds(&self) -> &[SettlementRound] {
        &self.rounds
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn round(&self, id: &str) -> Option<&SettlementRound> {
        self.rounds.iter().find(|r| r.id == id)
    }

    pub fn add_round(&self, registry: &ParticipantRegistry) -> Self {
        let round = SettlementRound::new(self.rounds.len() + 1, registry.participants().to_vec());
        info!("Adding round '{}' ({})", round.title, round.id);
        let mut rounds = self.rounds.clone();
        rounds.push(round);
        self.next(rounds)
    }

    pub fn rename_round(&self, id: &str, title: &str) -> Result<Self, SettleError> {
        self.update_round(id, |round| round.with_title(title))
    }

    pub fn set_amount(&self, id: &str, amount: u64) -> Result<Self, SettleError> {
        self.update_round(id, |round| Ok(round.with_amount(amount)))
    }

    /// Amount from free text: non-digits are ignored, empty means 0, and
    /// anything too large is clamped to `MAX_AMOUNT`.
    pub fn set_amount_text(&self, id: &str, text: &str) -> Result<Self, SettleError> {
        self.set_amount(id, parse_amount_text(text))
    }

    /// Replaces the round's members with the given ones that are still in the
    /// registry, keeping the given order.
    pub fn select_members(
        &self,
        id: &str,
        members: &[Participant],
        registry: &ParticipantRegistry,
    ) -> Result<Self, SettleError> {
        let selected: Vec<Participant> = members.iter().filter(|m| registry.contains(m)).cloned().collect();
        self.update_round(id, |round| Ok(round.with_members(selected)))
    }

    pub fn delete_round(&self, id: &str) -> Result<Self, SettleError> {
        if self.round(id).is_none() {
            return Err(SettleError::RoundNotFound(id.to_string()));
        }
        info!("Deleting round {}", id);
        let rounds = self.rounds.iter().filter(|r| r.id != id).cloned().collect();
        Ok(self.next(rounds))
    }

    /// Applies a random split. A round with no amount or no members is left
    /// unsplit and the current version is returned.
    pub fn randomize<R: Rng + ?Sized>(&self, id: &str, rng: &mut R) -> Result<Self, SettleError> {
        let round = self
            .round(id)
            .ok_or_else(|| SettleError::RoundNotFound(id.to_string()))?;
        match random_split(round.amount, &round.members, rng) {
            Some(amounts) => self.update_round(id, |round| Ok(round.with_member_amounts(amounts))),
            None => {
                debug!("Round {} has nothing to split", id);
                Ok(self.clone())
            }
        }
    }

    pub fn reset(&self, id: &str) -> Result<Self, SettleError> {
        self.update_round(id, |round| Ok(reset_split(round)))
    }

    /// Drops participants that left the registry from every round.
    pub fn sync_registry(&self, registry: &ParticipantRegistry) -> Self {
        let rounds: Vec<SettlementRound> = self
            .rounds
            .iter()
            .map(|round| round.retain_members(|m| registry.contains(m)))
            .collect();
        if rounds == self.rounds {
            return self.clone();
        }
        debug!("Synced rounds with registry version {}", registry.version());
        self.next(rounds)
    }

    pub fn group(&self) -> SettlementGroup {
        SettlementGroup::from_rounds(&self.rounds)
    }

    pub fn totals(&self, registry: &ParticipantRegistry) -> BTreeMap<Participant, i64> {
        per_participant_total(&self.rounds, registry.participants())
    }

    pub fn summary(&self, registry: &ParticipantRegistry) -> SettlementSummary {
        SettlementSummary::build(&self.rounds, registry.participants())
    }

    fn update_round(
        &self,
        id: &str,
        update: impl FnOnce(&SettlementRound) -> Result<SettlementRound, SettleError>,
    ) -> Result<Self, SettleError> {
        let index = self
            .rounds
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| SettleError::RoundNotFound(id.to_string()))?;
        let updated = update(&self.rounds[index])?;
        let mut rounds = self.rounds.clone();
        rounds[index] = updated;
        Ok(self.next(rounds))
    }

    fn next(&self, rounds: Vec<SettlementRound>) -> Self {
        Settlement {
            rounds,
            version: self.version + 1,
        }
    }
}

pub fn parse_amount_text(text: &str) -> u64 {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| acc.saturating_mul(10).saturating_add(u64::from(digit)))
        .min(MAX_AMOUNT)
}
