// src/filter/controller.rs
//
// Owns the live SelectionState and turns UI events into re-filters.
//
// Every handler mutates the state, then re-evaluates every record and pushes
// the result into the caller's CardSurface. There is no incremental diffing:
// visibility is always recomputed from scratch, so the settled result never
// depends on how many intermediate events were coalesced away.

use std::collections::BTreeSet;

use super::{
    predicate::{self, SelectionState},
    range::{Handle, RangeSelector, ValueFormat},
    suggest::{self, CountryIndex},
};
use crate::config::options::{DomainPolicy, SliderOptions};
use crate::record::{RecordStore, TripRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Days,
    Budget,
}

/// Whatever renders the cards. Card `index` is the record's position in
/// the store.
pub trait CardSurface {
    fn set_visible(&mut self, index: usize, visible: bool);
}

/// Plain visibility vector; grows as needed.
impl CardSurface for Vec<bool> {
    fn set_visible(&mut self, index: usize, visible: bool) {
        if index >= self.len() {
            self.resize(index + 1, false);
        }
        self[index] = visible;
    }
}

pub struct FilterController {
    store: RecordStore,
    continents: Vec<String>,
    countries: CountryIndex,
    initial: SelectionState,
    state: SelectionState,
}

impl FilterController {
    pub fn new(store: RecordStore, sliders: &SliderOptions) -> Self {
        let (days, budget) = resolve_domains(&store, sliders);
        let initial = SelectionState::new(days, budget);

        let continents = store.continents();
        let countries = CountryIndex::new(store.countries());

        logf!(
            "Filter: init records={} continents={} countries={} days={:?} budget={:?} policy={:?}",
            store.len(),
            continents.len(),
            countries.names().len(),
            initial.days.domain(),
            initial.budget.domain(),
            sliders.policy
        );

        Self {
            store,
            continents,
            countries,
            state: initial.clone(),
            initial,
        }
    }

    /* ---------- read access ---------- */

    pub fn store(&self) -> &RecordStore { &self.store }
    pub fn state(&self) -> &SelectionState { &self.state }
    pub fn initial_state(&self) -> &SelectionState { &self.initial }
    pub fn continents(&self) -> &[String] { &self.continents }
    pub fn countries(&self) -> &CountryIndex { &self.countries }

    pub fn selector(&self, dim: Dimension) -> &RangeSelector {
        match dim {
            Dimension::Days => &self.state.days,
            Dimension::Budget => &self.state.budget,
        }
    }

    fn selector_mut(&mut self, dim: Dimension) -> &mut RangeSelector {
        match dim {
            Dimension::Days => &mut self.state.days,
            Dimension::Budget => &mut self.state.budget,
        }
    }

    /// `(min label, max label)` for the slider of `dim`.
    pub fn labels(&self, dim: Dimension) -> (String, String) {
        let r = self.selector(dim);
        (r.low_label(), r.high_label())
    }

    pub fn is_continent_selected(&self, name: &str) -> bool {
        self.state.selected_continents.contains(name)
    }

    pub fn matches(&self, record: &TripRecord) -> bool {
        predicate::matches(record, &self.state)
    }

    /* ---------- events ---------- */

    /// Flip `name` in the continent selection, then re-filter.
    pub fn on_continent_toggle(&mut self, name: &str, surface: &mut dyn CardSurface) -> usize {
        let sel = &mut self.state.selected_continents;
        if !sel.remove(name) {
            sel.insert(s!(name));
        }
        logd!("Filter: continents → {:?}", self.state.selected_continents);
        self.apply_filter(surface)
    }

    /// Replace the whole continent selection, then re-filter.
    pub fn set_continents<I, S>(&mut self, names: I, surface: &mut dyn CardSurface) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.selected_continents = names.into_iter().map(Into::into).collect::<BTreeSet<_>>();
        self.apply_filter(surface)
    }

    /// Re-tokenize the country query and re-filter. Returns the autocomplete
    /// suggestions for the token being typed.
    pub fn on_country_text_change(&mut self, text: &str, surface: &mut dyn CardSurface) -> Vec<String> {
        self.state.set_country_text(text);
        self.apply_filter(surface);
        self.countries.suggestions_for(suggest::last_token(text))
    }

    /// Accept an autocomplete pick. Returns the rewritten query text.
    pub fn on_suggestion_pick(&mut self, pick: &str, surface: &mut dyn CardSurface) -> String {
        let text = suggest::apply_suggestion(&self.state.country_text, pick);
        self.state.set_country_text(&text);
        self.apply_filter(surface);
        text
    }

    /// Typed/committed range for `dim`. Returns the accepted `(low, high)`.
    pub fn on_range_change(
        &mut self,
        dim: Dimension,
        low: u64,
        high: u64,
        surface: &mut dyn CardSurface,
    ) -> (u64, u64) {
        let committed = self.selector_mut(dim).set_range(low, high);
        logd!("Filter: {dim:?} range → {committed:?}");
        self.apply_filter(surface);
        committed
    }

    /// Move a single handle, as a slider input does.
    pub fn on_handle_move(
        &mut self,
        dim: Dimension,
        handle: Handle,
        value: u64,
        surface: &mut dyn CardSurface,
    ) -> (u64, u64) {
        let committed = self.selector_mut(dim).set(handle, value);
        self.apply_filter(surface);
        committed
    }

    pub fn on_drag_start(&mut self, dim: Dimension, handle: Handle) {
        self.selector_mut(dim).begin_drag(handle);
    }

    /// Pointer moved while a handle of `dim` is held.
    pub fn on_drag(&mut self, dim: Dimension, value: u64, surface: &mut dyn CardSurface) -> (u64, u64) {
        let committed = self.selector_mut(dim).drag_to(value);
        self.apply_filter(surface);
        committed
    }

    pub fn on_drag_end(&mut self, dim: Dimension) {
        self.selector_mut(dim).end_drag();
        logd!("Filter: {dim:?} settled at {:?}", self.selector(dim).range());
    }

    /// Back to the state right after load, then re-filter.
    pub fn reset_filters(&mut self, surface: &mut dyn CardSurface) -> usize {
        self.state = self.initial.clone();
        logf!("Filter: reset");
        self.apply_filter(surface)
    }

    /// Evaluate every record and push visibility. Returns the visible count.
    pub fn apply_filter(&self, surface: &mut dyn CardSurface) -> usize {
        let mut visible = 0usize;
        for (i, record) in self.store.iter().enumerate() {
            let ok = predicate::matches(record, &self.state);
            surface.set_visible(i, ok);
            visible += usize::from(ok);
        }
        logd!("Filter: {visible}/{} visible", self.store.len());
        visible
    }

    /// Fresh visibility vector for the current state.
    pub fn visibility(&self) -> Vec<bool> {
        self.store.iter().map(|r| predicate::matches(r, &self.state)).collect()
    }

    /// Indices of the records that pass the current state.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.store
            .iter()
            .enumerate()
            .filter(|(_, r)| predicate::matches(r, &self.state))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Build the days and budget selectors, both spanning their full domain.
pub fn resolve_domains(store: &RecordStore, opts: &SliderOptions) -> (RangeSelector, RangeSelector) {
    let (days_max, budget_max) = match opts.policy {
        DomainPolicy::Fixed => (opts.days_max, opts.budget_max),
        DomainPolicy::DataDerived => (
            derived_max(opts.days_min, opts.days_step, store.max_days()),
            derived_max(opts.budget_min, opts.budget_step, store.max_budget()),
        ),
    };
    (
        RangeSelector::full(opts.days_min, days_max, opts.days_step, ValueFormat::Plain),
        RangeSelector::full(opts.budget_min, budget_max, opts.budget_step, ValueFormat::Thousands),
    )
}

/// Data maximum rounded up onto the step grid, never below `min + step`.
pub fn derived_max(min: u64, step: u64, data_max: Option<u64>) -> u64 {
    let step = step.max(1);
    let floor = min.saturating_add(step);
    match data_max {
        Some(m) if m > floor => min.saturating_add((m - min).div_ceil(step).saturating_mul(step)),
        _ => floor,
    }
}
