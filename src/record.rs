// src/record.rs
//
// Trip records and the store that holds them.
//
// - TripRecord: one trip's metadata as embedded in its page. Decoding is
//   lenient: a missing or malformed number becomes 0, list fields accept an
//   array, a single comma-separated string, or null.
// - RecordStore: the immutable, ordered list of records that loaded
//   successfully, plus the derived vocabularies the filters need.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::sanitize::{clean_list, leading_number, normalize_ws};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(deserialize_with = "lenient_opt_text")]
    pub cover: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub continents: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub countries: Vec<String>,
    #[serde(deserialize_with = "lenient_count")]
    pub days: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub budget: u64,
    #[serde(deserialize_with = "lenient_list")]
    pub tags: Vec<String>,
}

impl TripRecord {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text.trim())
    }

    /// Comma-joined country text, the haystack for country queries.
    pub fn country_text(&self) -> String {
        self.countries.join(",")
    }
}

fn lenient_count<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => leading_number(&s),
        _ => 0,
    })
}

fn lenient_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => clean_list(items.iter().filter_map(Value::as_str)),
        Value::String(s) => clean_list(s.split(',')),
        _ => Vec::new(),
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(lenient_opt_text(d)?.unwrap_or_default())
}

fn lenient_opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(normalize_ws(&s)).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Loaded records, in page order. Never mutated after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<TripRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<TripRecord>) -> Self { Self { records } }
    pub fn empty() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn get(&self, index: usize) -> Option<&TripRecord> { self.records.get(index) }
    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> { self.records.iter() }

    /// Distinct continents across all records, sorted, display case kept.
    pub fn continents(&self) -> Vec<String> {
        self.distinct(|r| &r.continents)
    }

    /// Distinct countries across all records, sorted. Autocomplete source.
    pub fn countries(&self) -> Vec<String> {
        self.distinct(|r| &r.countries)
    }

    pub fn max_days(&self) -> Option<u64> {
        self.records.iter().map(|r| r.days).max()
    }

    pub fn max_budget(&self) -> Option<u64> {
        self.records.iter().map(|r| r.budget).max()
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&TripRecord) -> &Vec<String>,
    {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|r| field(r).iter().map(String::as_str))
            .collect();
        set.into_iter().map(|s| s!(s)).collect()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}
