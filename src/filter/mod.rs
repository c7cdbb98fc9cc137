// src/filter/mod.rs
//
// Filter core: range selectors, the per-record predicate, and the
// controller that keeps selection state, labels and card visibility in step.
//
// RecordStore ──► FilterController ──► predicate::matches ──► CardSurface
//                   ▲     owns SelectionState (+ two RangeSelectors)
//   UI events ──────┘

pub mod controller;
pub mod predicate;
pub mod range;
pub mod suggest;

pub use controller::{CardSurface, Dimension, FilterController};
pub use predicate::{SelectionState, matches, tokenize};
pub use range::{Handle, RangeSelector, ValueFormat};
pub use suggest::CountryIndex;
