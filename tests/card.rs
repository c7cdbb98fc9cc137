// tests/card.rs
use trip_finder::card::{Card, build_cards, meta_line};
use trip_finder::core::sanitize::group_thousands;
use trip_finder::record::TripRecord;

#[test]
fn meta_line_groups_thousands() {
    assert_eq!(meta_line(250_000, 7), "250 000 Ft • 7 nap");
    assert_eq!(meta_line(0, 0), "0 Ft • 0 nap");
    assert_eq!(group_thousands(1_234_567), "1 234 567");
    assert_eq!(group_thousands(999), "999");
}

#[test]
fn cards_follow_store_order() {
    let records = vec![
        TripRecord {
            title: "Szafari".into(),
            url: "trips/afrikai-szafari.html".into(),
            countries: vec!["Kenya".into(), "Tanzánia".into()],
            tags: vec!["vadvilág".into(), "kaland".into()],
            days: 9,
            budget: 900_000,
            ..Default::default()
        },
        TripRecord { title: "No link".into(), ..Default::default() },
    ];
    let cards = build_cards(&records);
    assert_eq!(cards.len(), 2);

    let c: &Card = &cards[0];
    assert_eq!(c.index, 0);
    assert_eq!(c.url.as_deref(), Some("trips/afrikai-szafari.html"));
    assert_eq!(c.countries, "Kenya, Tanzánia");
    assert_eq!(c.tags, "#vadvilág #kaland");
    assert_eq!(c.meta, "900 000 Ft • 9 nap");

    assert_eq!(cards[1].index, 1);
    assert_eq!(cards[1].url, None);
}
