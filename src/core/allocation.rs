//! Per-round allocation policies.
//!
//! Even split hands every member the same ceiling-rounded share and makes no
//! attempt to sum back to the round total. Random split varies the shares but
//! always reconstructs the total exactly: the last member absorbs the residual.

use crate::constants::{MAX_AMOUNT, SPLIT_MAX_RATIO, SPLIT_MIN_RATIO};
use crate::core::models::round::to_signed;
use crate::core::models::{MemberAmounts, Participant, SettlementRound};
use log::{debug, warn};
use rand::Rng;

/// `ceil(amount / count)`, or 0 when there is nobody to split between.
pub fn even_share(amount: u64, count: usize) -> u64 {
    if count == 0 {
        return 0;
    }
    amount.div_ceil(count as u64)
}

/// Maps every member to the same even share. Empty members give an empty map.
pub fn even_split(amount: u64, members: &[Participant]) -> MemberAmounts {
    let share = to_signed(even_share(amount, members.len()));
    members.iter().map(|m| (m.clone(), share)).collect()
}

/// Randomized split that sums exactly to `amount`.
///
/// Each member but the last draws uniformly from
/// `[floor(avg * 0.3), floor(avg * 1.7)]`, where `avg` is what is left divided
/// by the members still unassigned (current included). The last member takes
/// the remainder unclamped. Returns `None` for a zero amount, an amount above
/// `MAX_AMOUNT`, or no members.
pub fn random_split<R: Rng + ?Sized>(
    amount: u64,
    members: &[Participant],
    rng: &mut R,
) -> Option<MemberAmounts> {
    let (last, rest) = members.split_last()?;
    if amount == 0 {
        debug!("Skipping random split of zero amount across {} members", members.len());
        return None;
    }
    if amount > MAX_AMOUNT {
        warn!("Refusing random split of {}: above the maximum round amount", amount);
        return None;
    }

    let mut remaining = to_signed(amount);
    let mut amounts = MemberAmounts::new();
    for (index, member) in rest.iter().enumerate() {
        let remaining_count = members.len() - index;
        let average = remaining as f64 / remaining_count as f64;
        let low = (average * SPLIT_MIN_RATIO).floor() as i64;
        let high = (average * SPLIT_MAX_RATIO).floor() as i64;
        let (low, high) = if low <= high { (low, high) } else { (high, low) };

        let drawn = rng.gen_range(low..=high);
        *amounts.entry(member.clone()).or_insert(0) += drawn;
        remaining -= drawn;
    }
    *amounts.entry(last.clone()).or_insert(0) += remaining;

    debug!("Random split of {} across {} members: {:?}", amount, members.len(), amounts);
    Some(amounts)
}

/// Clears any custom allocation so the round falls back to even split.
pub fn reset_split(round: &SettlementRound) -> SettlementRound {
    round.with_member_amounts(MemberAmounts::new())
}
