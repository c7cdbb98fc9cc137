// src/filter/suggest.rs
//
// Country autocomplete: the sorted list of known countries and the two
// operations the suggestion popup needs (query by last token, accept a pick).

use crate::config::consts::SUGGESTION_LIMIT;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryIndex {
    names: Vec<String>,
}

impl CountryIndex {
    /// `names` is expected sorted and distinct (see `RecordStore::countries`).
    pub fn new(names: Vec<String>) -> Self { Self { names } }

    pub fn names(&self) -> &[String] { &self.names }

    /// Up to `SUGGESTION_LIMIT` names containing `token`, case-insensitive,
    /// in sorted order. A blank token suggests nothing.
    pub fn suggestions_for(&self, token: &str) -> Vec<String> {
        let needle = token.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.names
            .iter()
            .filter(|n| n.to_lowercase().contains(&needle))
            .take(SUGGESTION_LIMIT)
            .cloned()
            .collect()
    }
}

/// The token after the last comma, trimmed. The one being typed.
pub fn last_token(text: &str) -> &str {
    text.rsplit(',').next().unwrap_or("").trim()
}

/// Replace the last token with `pick` and normalize to `"a, b, c"`.
pub fn apply_suggestion(text: &str, pick: &str) -> String {
    let mut parts: Vec<&str> = text.split(',').collect();
    if let Some(last) = parts.last_mut() {
        *last = pick;
    }
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
