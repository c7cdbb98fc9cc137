// src/filter/predicate.rs
//
// Per-record visibility decision.
//
// Stages, in order, all must pass:
// 1. continents: any record continent contains any selected continent
//    (case-insensitive substring); empty selection passes;
// 2. country: any query token is a substring of the record's comma-joined
//    country text (case-insensitive); no tokens passes;
// 3. days within the days selector (open-ended at its maximum);
// 4. budget within the budget selector, same rule.

use std::collections::BTreeSet;

use super::range::RangeSelector;
use crate::record::TripRecord;

/// The single live filter state. Owned by `FilterController`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_continents: BTreeSet<String>,
    /// Raw text as typed into the country field.
    pub country_text: String,
    /// `country_text` split on ',', trimmed, lower-cased, empties dropped.
    pub country_tokens: Vec<String>,
    pub days: RangeSelector,
    pub budget: RangeSelector,
}

impl SelectionState {
    pub fn new(days: RangeSelector, budget: RangeSelector) -> Self {
        Self {
            selected_continents: BTreeSet::new(),
            country_text: s!(),
            country_tokens: Vec::new(),
            days,
            budget,
        }
    }

    pub fn set_country_text(&mut self, text: &str) {
        self.country_text = s!(text);
        self.country_tokens = tokenize(text);
    }

    /// Nothing narrows the result: no continents, no tokens, both full.
    pub fn is_unfiltered(&self) -> bool {
        self.selected_continents.is_empty()
            && self.country_tokens.is_empty()
            && self.days.is_full()
            && self.budget.is_full()
    }
}

/// Comma-separated query → lower-cased, trimmed, non-empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn matches(record: &TripRecord, sel: &SelectionState) -> bool {
    continent_matches(record, &sel.selected_continents)
        && country_matches(record, &sel.country_tokens)
        && sel.days.contains(record.days)
        && sel.budget.contains(record.budget)
}

pub fn continent_matches(record: &TripRecord, selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    let have: Vec<String> = record.continents.iter().map(|c| c.to_lowercase()).collect();
    selected.iter().any(|want| {
        let want = want.to_lowercase();
        have.iter().any(|c| c.contains(&want))
    })
}

pub fn country_matches(record: &TripRecord, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }
    let hay = record.country_text().to_lowercase();
    tokens.iter().any(|t| hay.contains(t.as_str()))
}
