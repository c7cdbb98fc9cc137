// tests/predicate.rs
//
// Per-record visibility: the four stages and their combination.
//
use proptest::prelude::*;
use trip_finder::filter::{RangeSelector, SelectionState, ValueFormat, matches, tokenize};
use trip_finder::record::TripRecord;

fn rec(days: u64, budget: u64, continents: &[&str], countries: &[&str]) -> TripRecord {
    TripRecord {
        title: format!("{days} days"),
        days,
        budget,
        continents: continents.iter().map(|s| s.to_string()).collect(),
        countries: countries.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn selection() -> SelectionState {
    SelectionState::new(
        RangeSelector::full(1, 14, 1, ValueFormat::Plain),
        RangeSelector::full(1, 500_000, 1, ValueFormat::Thousands),
    )
}

fn sample() -> Vec<TripRecord> {
    vec![
        rec(5, 100_000, &["Asia"], &["Japán"]),
        rec(20, 600_000, &["Europe"], &["Norvégia"]),
    ]
}

fn visible(records: &[TripRecord], sel: &SelectionState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, sel))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn full_ranges_are_open_ended() {
    // 20 days and 600k both sit above the domain maxima; "or more" keeps them
    let sel = selection();
    assert_eq!(visible(&sample(), &sel), vec![0, 1]);
}

#[test]
fn closed_ranges_exclude_records_above_high() {
    // days [1,14] and budget [1,500000] inside wider domains: both closed
    let mut sel = SelectionState::new(
        RangeSelector::full(1, 30, 1, ValueFormat::Plain),
        RangeSelector::full(1, 1_000_000, 1, ValueFormat::Thousands),
    );
    sel.days.set_high(14);
    sel.budget.set_high(500_000);
    assert_eq!(visible(&sample(), &sel), vec![0]);

    let mut sel = selection();
    sel.days.set_high(13);
    sel.budget.set_high(499_999);
    assert_eq!(visible(&sample(), &sel), vec![0]);
}

#[test]
fn europe_with_japan_query_is_empty() {
    let mut sel = selection();
    sel.selected_continents.insert("Europe".into());
    sel.set_country_text("japán");
    assert!(visible(&sample(), &sel).is_empty());
}

#[test]
fn continent_match_is_substring_and_case_insensitive() {
    let r = rec(5, 10_000, &["Dél-Amerika"], &[]);
    let mut sel = selection();
    sel.selected_continents.insert("amerika".into());
    assert!(matches(&r, &sel));

    sel.selected_continents.clear();
    sel.selected_continents.insert("Ázsia".into());
    assert!(!matches(&r, &sel));

    // any selected continent is enough
    sel.selected_continents.insert("AMERIKA".into());
    assert!(matches(&r, &sel));
}

#[test]
fn record_without_continents_fails_a_continent_filter() {
    let r = rec(5, 10_000, &[], &["Japán"]);
    let mut sel = selection();
    assert!(matches(&r, &sel));
    sel.selected_continents.insert("Asia".into());
    assert!(!matches(&r, &sel));
}

#[test]
fn country_tokens_match_any_substring() {
    let r = rec(7, 50_000, &["Asia"], &["Japán", "Dél-Korea"]);
    let mut sel = selection();

    sel.set_country_text("korea");
    assert!(matches(&r, &sel));

    sel.set_country_text("norvégia, jap");
    assert!(matches(&r, &sel));

    sel.set_country_text("norvégia");
    assert!(!matches(&r, &sel));

    sel.set_country_text(" , ,");
    assert!(sel.country_tokens.is_empty());
    assert!(matches(&r, &sel));
}

#[test]
fn tokenize_trims_lowers_and_drops_empties() {
    assert_eq!(tokenize("  Japán ,, NORVÉGIA  ,"), vec!["japán", "norvégia"]);
    assert!(tokenize("").is_empty());
}

#[test]
fn low_bound_is_inclusive() {
    let mut sel = selection();
    sel.days.set_low(7);
    assert!(matches(&rec(7, 1_000, &[], &[]), &sel));
    assert!(!matches(&rec(6, 1_000, &[], &[]), &sel));
}

#[test]
fn zero_valued_fields_fall_below_default_minima() {
    let sel = selection();
    assert!(!matches(&rec(0, 50_000, &[], &[]), &sel));
    assert!(!matches(&rec(5, 0, &[], &[]), &sel));
}

#[test]
fn fresh_selection_is_unfiltered() {
    let mut sel = selection();
    assert!(sel.is_unfiltered());
    sel.set_country_text("x");
    assert!(!sel.is_unfiltered());
}

proptest! {
    #[test]
    fn continent_order_does_not_matter(
        names in prop::collection::vec("[A-Za-z]{1,6}", 0..5),
        record_continent in "[A-Za-z]{1,8}",
    ) {
        let r = rec(5, 10_000, &[record_continent.as_str()], &[]);
        let mut fwd = selection();
        let mut rev = selection();
        for n in &names { fwd.selected_continents.insert(n.clone()); }
        for n in names.iter().rev() { rev.selected_continents.insert(n.clone()); }
        prop_assert_eq!(matches(&r, &fwd), matches(&r, &rev));
    }

    #[test]
    fn country_query_ignores_case_and_padding(
        token in "[a-z]{1,5}",
        pad in " {0,3}",
        upper in any::<bool>(),
    ) {
        let r = rec(5, 10_000, &[], &["Japan", "Korea", "Norway"]);
        let mut plain = selection();
        plain.set_country_text(&token);
        let mut noisy = selection();
        let t = if upper { token.to_uppercase() } else { token.clone() };
        noisy.set_country_text(&format!("{pad}{t}{pad},"));
        prop_assert_eq!(matches(&r, &plain), matches(&r, &noisy));
    }

    #[test]
    fn high_at_max_admits_anything_above_low(days in 1u64..10_000, budget in 1u64..100_000_000) {
        let sel = selection();
        prop_assert!(matches(&rec(days, budget, &[], &[]), &sel));
    }

    #[test]
    fn high_one_step_below_max_excludes_larger(v in 14u64..1_000) {
        let mut sel = selection();
        sel.days.set_high(13);
        prop_assert!(!matches(&rec(v, 10_000, &[], &[]), &sel));
    }
}
