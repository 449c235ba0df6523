use crate::constants::MAX_AMOUNT;
use crate::core::errors::SettleError;
use crate::core::models::ordinal_title;
use crate::core::session::{Settlement, parse_amount_text};
use crate::tests::{participant, participants, registry};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_new_settlement_has_default_rounds() {
    let members = registry(&["A", "B", "C"]);
    let settlement = Settlement::new(&members, 2);

    let titles: Vec<&str> = settlement.rounds().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["1st round", "2nd round"]);
    assert!(settlement.rounds().iter().all(|r| r.members == participants(&["A", "B", "C"])));
    assert!(settlement.rounds().iter().all(|r| r.amount == 0));
    assert_ne!(settlement.rounds()[0].id, settlement.rounds()[1].id);
}

#[test]
fn test_ordinal_titles() {
    assert_eq!(ordinal_title(3), "3rd round");
    assert_eq!(ordinal_title(4), "4th round");
    assert_eq!(ordinal_title(11), "11th round");
    assert_eq!(ordinal_title(12), "12th round");
    assert_eq!(ordinal_title(21), "21st round");
    assert_eq!(ordinal_title(102), "102nd round");
    assert_eq!(ordinal_title(113), "113th round");
}

#[test]
fn test_add_round_uses_next_ordinal_and_full_registry() {
    let members = registry(&["A", "B"]);
    let before = Settlement::new(&members, 2);
    let after = before.add_round(&members);

    assert_eq!(before.rounds().len(), 2);
    assert_eq!(after.rounds().len(), 3);
    assert_eq!(after.rounds()[2].title, "3rd round");
    assert_eq!(after.version(), before.version() + 1);
}

#[test]
fn test_rename_rejects_empty_title() {
    let settlement = Settlement::new(&registry(&["A"]), 1);
    let id = settlement.rounds()[0].id.clone();

    let renamed = settlement.rename_round(&id, "  Dinner ").unwrap();
    assert_eq!(renamed.round(&id).unwrap().title, "Dinner");

    assert_eq!(renamed.rename_round(&id, "   "), Err(SettleError::EmptyRoundTitle));
    assert_eq!(renamed.round(&id).unwrap().title, "Dinner");

    assert!(matches!(
        renamed.rename_round("missing", "x"),
        Err(SettleError::RoundNotFound(_))
    ));
}

#[test]
fn test_amount_text_keeps_digits_only() {
    assert_eq!(parse_amount_text("12,500"), 12_500);
    assert_eq!(parse_amount_text(""), 0);
    assert_eq!(parse_amount_text("abc"), 0);
    assert_eq!(parse_amount_text("-30원"), 30);
    assert_eq!(parse_amount_text("99999999999999999999999"), MAX_AMOUNT);

    let settlement = Settlement::new(&registry(&["A", "B"]), 1);
    let id = settlement.rounds()[0].id.clone();
    let updated = settlement.set_amount_text(&id, "45,000").unwrap();
    assert_eq!(updated.round(&id).unwrap().amount, 45_000);
    assert_eq!(updated.round(&id).unwrap().per_person(), 22_500);
}

#[test]
fn test_amount_change_clears_random_split() {
    let members = registry(&["A", "B", "C"]);
    let settlement = Settlement::new(&members, 1);
    let id = settlement.rounds()[0].id.clone();
    let mut rng = StdRng::seed_from_u64(11);

    let split = settlement
        .set_amount(&id, 1000)
        .unwrap()
        .randomize(&id, &mut rng)
        .unwrap();
    let round = split.round(&id).unwrap();
    assert!(round.has_custom_split());
    assert_eq!(round.member_amounts.values().sum::<i64>(), 1000);

    let changed = split.set_amount(&id, 2000).unwrap();
    assert!(!changed.round(&id).unwrap().has_custom_split());
}

#[test]
fn test_randomize_without_amount_leaves_round_unsplit() {
    let settlement = Settlement::new(&registry(&["A", "B"]), 1);
    let id = settlement.rounds()[0].id.clone();
    let mut rng = StdRng::seed_from_u64(5);

    let same = settlement.randomize(&id, &mut rng).unwrap();
    assert_eq!(same, settlement);

    let empty = Settlement::new(&registry(&[]), 1);
    let empty_id = empty.rounds()[0].id.clone();
    let unchanged = empty
        .set_amount(&empty_id, 100)
        .unwrap()
        .randomize(&empty_id, &mut rng)
        .unwrap();
    assert!(!unchanged.round(&empty_id).unwrap().has_custom_split());
}

#[test]
fn test_reset_restores_even_split() {
    let settlement = Settlement::new(&registry(&["A", "B", "C"]), 1);
    let id = settlement.rounds()[0].id.clone();
    let mut rng = StdRng::seed_from_u64(9);
    let split = settlement
        .set_amount(&id, 1000)
        .unwrap()
        .randomize(&id, &mut rng)
        .unwrap();

    let reset = split.reset(&id).unwrap();
    let round = reset.round(&id).unwrap();
    assert!(!round.has_custom_split());
    assert_eq!(round.share_for(&participant("A")), Some(334));
    assert_eq!(reset.reset(&id).unwrap().rounds(), reset.rounds());
}

#[test]
fn test_select_members_filters_to_registry() {
    let members = registry(&["A", "B", "C"]);
    let settlement = Settlement::new(&members, 1);
    let id = settlement.rounds()[0].id.clone();

    let selected = settlement
        .select_members(&id, &participants(&["C", "Ghost", "A", "C"]), &members)
        .unwrap();
    assert_eq!(selected.round(&id).unwrap().members, participants(&["C", "A"]));
}

#[test]
fn test_delete_round() {
    let members = registry(&["A"]);
    let settlement = Settlement::new(&members, 2);
    let id = settlement.rounds()[0].id.clone();

    let deleted = settlement.delete_round(&id).unwrap();
    assert_eq!(deleted.rounds().len(), 1);
    assert!(deleted.round(&id).is_none());
    assert!(matches!(deleted.delete_round(&id), Err(SettleError::RoundNotFound(_))));
}

#[test]
fn test_sync_registry_drops_removed_participants() {
    let before = registry(&["A", "B", "C"]);
    let settlement = Settlement::new(&before, 2);
    let first = settlement.rounds()[0].id.clone();
    let second = settlement.rounds()[1].id.clone();
    let mut rng = StdRng::seed_from_u64(2);
    let settlement = settlement
        .select_members(&second, &participants(&["A", "C"]), &before)
        .unwrap()
        .set_amount(&first, 900)
        .unwrap()
        .randomize(&first, &mut rng)
        .unwrap();

    let after = before.with_removed("B").unwrap();
    let synced = settlement.sync_registry(&after);

    assert_eq!(synced.round(&first).unwrap().members, participants(&["A", "C"]));
    assert!(!synced.round(&first).unwrap().has_custom_split());
    assert_eq!(synced.round(&second).unwrap().members, participants(&["A", "C"]));

    // Nothing changes when the registry still covers every member
    assert_eq!(synced.sync_registry(&after), synced);
}

#[test]
fn test_group_and_totals() {
    let members = registry(&["A", "B", "C"]);
    let settlement = Settlement::new(&members, 2);
    let first = settlement.rounds()[0].id.clone();
    let second = settlement.rounds()[1].id.clone();
    let settlement = settlement
        .set_amount(&first, 1000)
        .unwrap()
        .set_amount(&second, 200)
        .unwrap()
        .select_members(&second, &participants(&["A", "B"]), &members)
        .unwrap();

    let group = settlement.group();
    assert_eq!(group.total_amount, 1200);
    assert_eq!(group.settlements.len(), 2);

    let totals = settlement.totals(&members);
    assert_eq!(totals[&participant("A")], 434);
    assert_eq!(totals[&participant("B")], 434);
    assert_eq!(totals[&participant("C")], 334);
}

#[test]
fn test_oversized_amounts_clamp_and_summarize() {
    let members = registry(&["A", "B"]);
    let settlement = Settlement::new(&members, 2);
    let first = settlement.rounds()[0].id.clone();
    let second = settlement.rounds()[1].id.clone();
    let settlement = settlement
        .set_amount_text(&first, "99999999999999999999")
        .unwrap()
        .set_amount(&second, u64::MAX)
        .unwrap();
    assert!(settlement.rounds().iter().all(|r| r.amount == MAX_AMOUNT));

    let summary = settlement.summary(&members);
    assert_eq!(summary.total_amount, MAX_AMOUNT * 2);
    assert_eq!(summary.total_for(&participant("A")), Some(i64::MAX));
    assert_eq!(summary.total_for(&participant("B")), Some(i64::MAX));

    let randomized = settlement.randomize(&first, &mut StdRng::seed_from_u64(1)).unwrap();
    let round = randomized.round(&first).unwrap();
    assert!(round.has_custom_split());
    assert_eq!(round.member_amounts.values().sum::<i64>(), i64::MAX);
}
