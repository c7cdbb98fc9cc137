// src/card.rs
//
// Display text for one trip card. Frontends lay these out; nothing here
// knows about widgets.

use crate::config::consts::labels::{CURRENCY, DAY_UNIT};
use crate::core::sanitize::group_thousands;
use crate::record::TripRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Position of the record in the store.
    pub index: usize,
    pub title: String,
    pub url: Option<String>,
    pub cover: Option<String>,
    /// `"250 000 Ft • 7 nap"`
    pub meta: String,
    /// `"Japán, Dél-Korea"`
    pub countries: String,
    /// `"#tengerpart #kaland"`
    pub tags: String,
}

impl Card {
    pub fn from_record(index: usize, r: &TripRecord) -> Self {
        Self {
            index,
            title: r.title.clone(),
            url: Some(r.url.clone()).filter(|u| !u.is_empty()),
            cover: r.cover.clone(),
            meta: meta_line(r.budget, r.days),
            countries: r.countries.join(", "),
            tags: r.tags.iter().map(|t| join!("#", t)).collect::<Vec<_>>().join(" "),
        }
    }
}

pub fn meta_line(budget: u64, days: u64) -> String {
    format!("{} {CURRENCY} • {days} {DAY_UNIT}", group_thousands(budget))
}

pub fn build_cards<'a, I>(records: I) -> Vec<Card>
where
    I: IntoIterator<Item = &'a TripRecord>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| Card::from_record(i, r))
        .collect()
}
