// tests/controller.rs
//
// FilterController end to end over an in-memory store, with a Vec<bool>
// standing in for the card surface.
//
use proptest::prelude::*;
use trip_finder::config::options::{DomainPolicy, SliderOptions};
use trip_finder::filter::controller::{derived_max, resolve_domains};
use trip_finder::filter::{CardSurface, Dimension, FilterController, Handle};
use trip_finder::record::{RecordStore, TripRecord};

fn rec(title: &str, days: u64, budget: u64, continents: &[&str], countries: &[&str]) -> TripRecord {
    TripRecord {
        title: title.into(),
        url: format!("trips/{title}.html"),
        days,
        budget,
        continents: continents.iter().map(|s| s.to_string()).collect(),
        countries: countries.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn store() -> RecordStore {
    RecordStore::new(vec![
        rec("oresund", 4, 180_000, &["Európa"], &["Dánia", "Svédország"]),
        rec("belgium", 3, 120_000, &["Európa"], &["Belgium"]),
        rec("japan", 12, 650_000, &["Ázsia"], &["Japán", "Dél-Korea"]),
        rec("safari", 9, 900_000, &["Afrika"], &["Kenya", "Tanzánia"]),
        rec("fjords", 7, 420_000, &["Európa"], &["Norvégia"]),
    ])
}

fn controller() -> FilterController {
    FilterController::new(store(), &SliderOptions::default())
}

fn shown(v: &[bool]) -> Vec<usize> {
    v.iter().enumerate().filter(|(_, b)| **b).map(|(i, _)| i).collect()
}

#[test]
fn vocabularies_are_sorted_and_distinct() {
    let ctl = controller();
    assert_eq!(ctl.continents(), ["Afrika", "Európa", "Ázsia"]);
    assert_eq!(ctl.countries().names().len(), 8);
    assert_eq!(ctl.countries().names()[0], "Belgium");
}

#[test]
fn initial_state_shows_everything() {
    let ctl = controller();
    let mut v = Vec::new();
    assert_eq!(ctl.apply_filter(&mut v), 5);
    assert_eq!(shown(&v), vec![0, 1, 2, 3, 4]);
    assert_eq!(ctl.labels(Dimension::Days), ("1".into(), "14+".into()));
    assert_eq!(ctl.labels(Dimension::Budget), ("1k".into(), "500k+".into()));
}

#[test]
fn continent_toggle_flips_membership() {
    let mut ctl = controller();
    let mut v = Vec::new();

    assert_eq!(ctl.on_continent_toggle("Európa", &mut v), 3);
    assert!(ctl.is_continent_selected("Európa"));
    assert_eq!(shown(&v), vec![0, 1, 4]);

    assert_eq!(ctl.on_continent_toggle("Afrika", &mut v), 4);
    assert_eq!(ctl.on_continent_toggle("Európa", &mut v), 1);
    assert_eq!(shown(&v), vec![3]);
}

#[test]
fn country_text_filters_and_suggests() {
    let mut ctl = controller();
    let mut v = Vec::new();

    let sugg = ctl.on_country_text_change("dánia, kor", &mut v);
    assert_eq!(sugg, vec!["Dél-Korea"]);
    assert_eq!(shown(&v), vec![0, 2]);
    assert_eq!(ctl.state().country_tokens, vec!["dánia", "kor"]);

    let text = ctl.on_suggestion_pick("Dél-Korea", &mut v);
    assert_eq!(text, "dánia, Dél-Korea");
    assert_eq!(ctl.state().country_text, text);
    assert_eq!(shown(&v), vec![0, 2]);

    assert!(ctl.on_country_text_change("dánia, ", &mut v).is_empty());
}

#[test]
fn range_change_commits_and_refilters() {
    let mut ctl = controller();
    let mut v = Vec::new();

    assert_eq!(ctl.on_range_change(Dimension::Days, 5, 10, &mut v), (5, 10));
    assert_eq!(shown(&v), vec![3, 4]);
    assert_eq!(ctl.labels(Dimension::Days), ("5".into(), "10".into()));

    // budget high left at max: 900k safari still passes
    assert_eq!(ctl.on_range_change(Dimension::Budget, 400_000, 999_999, &mut v), (400_000, 500_000));
    assert_eq!(shown(&v), vec![3, 4]);

    assert_eq!(ctl.on_range_change(Dimension::Budget, 400_000, 450_000, &mut v), (400_000, 450_000));
    assert_eq!(shown(&v), vec![4]);
}

#[test]
fn pointer_drag_moves_the_grabbed_handle() {
    let mut ctl = controller();
    let mut v = Vec::new();

    ctl.on_drag_start(Dimension::Days, Handle::High);
    assert_eq!(ctl.on_drag(Dimension::Days, 8, &mut v), (1, 8));
    assert_eq!(ctl.on_drag(Dimension::Days, 5, &mut v), (1, 5));
    ctl.on_drag_end(Dimension::Days);
    assert_eq!(ctl.selector(Dimension::Days).dragging(), None);
    assert_eq!(shown(&v), vec![0, 1]);

    assert_eq!(ctl.on_handle_move(Dimension::Days, Handle::Low, 9, &mut v), (9, 9));
    assert_eq!(shown(&v), vec![3]);
}

#[test]
fn reset_returns_to_initial_state() {
    let mut ctl = controller();
    let mut v = Vec::new();
    let initial = ctl.visibility();

    ctl.on_continent_toggle("Ázsia", &mut v);
    ctl.on_country_text_change("jap", &mut v);
    ctl.on_range_change(Dimension::Budget, 10_000, 20_000, &mut v);
    assert_eq!(ctl.visible_indices(), Vec::<usize>::new());

    assert_eq!(ctl.reset_filters(&mut v), 5);
    assert_eq!(ctl.state(), ctl.initial_state());
    assert_eq!(v, initial);
}

#[test]
fn empty_store_is_a_quiet_no_op() {
    let mut ctl = FilterController::new(RecordStore::empty(), &SliderOptions::default());
    let mut v: Vec<bool> = Vec::new();
    assert_eq!(ctl.apply_filter(&mut v), 0);
    assert!(v.is_empty());
    assert!(ctl.continents().is_empty());
    assert!(ctl.on_country_text_change("japán", &mut v).is_empty());
    assert_eq!(ctl.reset_filters(&mut v), 0);
}

struct Recording(Vec<(usize, bool)>);
impl CardSurface for Recording {
    fn set_visible(&mut self, index: usize, visible: bool) {
        self.0.push((index, visible));
    }
}

#[test]
fn every_card_is_told_on_every_refilter() {
    let mut ctl = controller();
    let mut surface = Recording(Vec::new());
    ctl.on_continent_toggle("Afrika", &mut surface);
    assert_eq!(
        surface.0,
        vec![(0, false), (1, false), (2, false), (3, true), (4, false)]
    );
}

#[test]
fn derived_max_rounds_up_with_a_floor() {
    assert_eq!(derived_max(1, 1, Some(12)), 12);
    assert_eq!(derived_max(1_000, 1_000, Some(900_500)), 901_000);
    assert_eq!(derived_max(1, 1, Some(1)), 2);
    assert_eq!(derived_max(1, 1, None), 2);
    assert_eq!(derived_max(1_000, 0, Some(5_000)), 5_000);
}

#[test]
fn data_derived_policy_tracks_the_store() {
    let opts = SliderOptions { policy: DomainPolicy::DataDerived, ..Default::default() };
    let (days, budget) = resolve_domains(&store(), &opts);
    assert_eq!(days.domain(), (1, 12));
    assert_eq!(budget.domain(), (1_000, 900_000));

    let mut ctl = FilterController::new(store(), &opts);
    let mut v = Vec::new();
    ctl.on_range_change(Dimension::Days, 1, 11, &mut v);
    assert_eq!(shown(&v), vec![0, 1, 3, 4]);
    ctl.reset_filters(&mut v);
    assert_eq!(ctl.selector(Dimension::Days).domain(), (1, 12));
}

#[derive(Clone, Debug)]
enum Event {
    Toggle(usize),
    Country(String),
    Range(bool, u64, u64),
    Drag(bool, bool, u64),
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0usize..4).prop_map(Event::Toggle),
        "[a-zé, ]{0,8}".prop_map(Event::Country),
        (any::<bool>(), 0u64..1_000_000, 0u64..1_000_000).prop_map(|(d, a, b)| Event::Range(d, a, b)),
        (any::<bool>(), any::<bool>(), 0u64..1_000_000).prop_map(|(d, h, x)| Event::Drag(d, h, x)),
    ]
}

fn dim(days: bool) -> Dimension {
    if days { Dimension::Days } else { Dimension::Budget }
}

proptest! {
    #[test]
    fn reset_after_any_sequence_matches_initial_load(events in prop::collection::vec(event(), 0..25)) {
        let mut ctl = controller();
        let mut v = Vec::new();
        ctl.apply_filter(&mut v);
        let initial = v.clone();
        let names: Vec<String> = ctl.continents().to_vec();

        for e in events {
            match e {
                Event::Toggle(i) => {
                    if let Some(n) = names.get(i) {
                        ctl.on_continent_toggle(n, &mut v);
                    }
                }
                Event::Country(t) => { ctl.on_country_text_change(&t, &mut v); }
                Event::Range(d, a, b) => { ctl.on_range_change(dim(d), a, b, &mut v); }
                Event::Drag(d, high, x) => {
                    ctl.on_drag_start(dim(d), if high { Handle::High } else { Handle::Low });
                    ctl.on_drag(dim(d), x, &mut v);
                    ctl.on_drag_end(dim(d));
                }
            }
            prop_assert_eq!(&v, &ctl.visibility());
        }

        ctl.reset_filters(&mut v);
        prop_assert_eq!(ctl.state(), ctl.initial_state());
        prop_assert_eq!(v, initial);
    }
}
