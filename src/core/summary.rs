use crate::core::aggregation::{grand_total, per_participant_total};
use crate::core::models::{Participant, SettlementRound};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberLine {
    pub participant: Participant,
    pub amount: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub id: String,
    pub title: String,
    pub amount: u64,
    pub members: Vec<Participant>,
    pub custom_split: bool,
    /// Even share, shown instead of `lines` when there is no custom split.
    pub per_person: u64,
    pub lines: Vec<MemberLine>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantTotal {
    pub participant: Participant,
    pub total: i64,
}

/// Everything the share image shows, in display order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementSummary {
    pub rounds: Vec<RoundSummary>,
    pub total_amount: u64,
    pub totals: Vec<ParticipantTotal>,
    pub generated_at: DateTime<Utc>,
}

impl SettlementSummary {
    /// Totals are listed in `participants` order.
    pub fn build(rounds: &[SettlementRound], participants: &[Participant]) -> Self {
        let round_summaries = rounds
            .iter()
            .map(|round| RoundSummary {
                id: round.id.clone(),
                title: round.title.clone(),
                amount: round.amount,
                members: round.members.clone(),
                custom_split: round.has_custom_split(),
                per_person: round.per_person(),
                lines: round
                    .members
                    .iter()
                    .filter_map(|m| {
                        round.share_for(m).map(|amount| MemberLine {
                            participant: m.clone(),
                            amount,
                        })
                    })
                    .collect(),
            })
            .collect();

        let by_participant = per_participant_total(rounds, participants);
        let totals = participants
            .iter()
            .map(|p| ParticipantTotal {
                participant: p.clone(),
                total: by_participant.get(p).copied().unwrap_or(0),
            })
            .collect();

        SettlementSummary {
            rounds: round_summaries,
            total_amount: grand_total(rounds),
            totals,
            generated_at: Utc::now(),
        }
    }

    pub fn total_for(&self, participant: &Participant) -> Option<i64> {
        self.totals
            .iter()
            .find(|t| t.participant == *participant)
            .map(|t| t.total)
    }

    pub fn render_text(&self, currency_unit: &str) -> String {
        let mut out = String::new();
        for round in &self.rounds {
            let _ = writeln!(out, "{}: {}", round.title, format_amount(round.amount as i128, currency_unit));
            let members: Vec<&str> = round.members.iter().map(|m| m.as_str()).collect();
            let _ = writeln!(out, "  members ({}): {}", members.len(), members.join(", "));
            if round.custom_split {
                for line in &round.lines {
                    let _ = writeln!(
                        out,
                        "  {}: {}",
                        line.participant,
                        format_amount(line.amount as i128, currency_unit)
                    );
                }
            } else if !round.members.is_empty() {
                let _ = writeln!(
                    out,
                    "  per person: {}",
                    format_amount(round.per_person as i128, currency_unit)
                );
            }
        }
        let _ = writeln!(out, "total: {}", format_amount(self.total_amount as i128, currency_unit));
        for total in &self.totals {
            let _ = writeln!(
                out,
                "  {}: {}",
                total.participant,
                format_amount(total.total as i128, currency_unit)
            );
        }
        out
    }
}

/// `1234567` -> `"1,234,567<unit>"`.
pub fn format_amount(amount: i128, currency_unit: &str) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(currency_unit);
    grouped
}
