// src/filter/range.rs
//
// Dual-handle numeric range selector.
//
// Holds `domain_min <= low <= high <= domain_max` after every update:
// - every incoming value is clamped to the domain, then snapped to the step
//   grid anchored at `domain_min` (`domain_max` is always reachable);
// - when a single-handle move would cross the other handle, the other
//   handle jumps to the moved handle's value. The moving handle always wins,
//   for pointer drags and typed values alike.
//
// A high value equal to `domain_max` is open-ended ("or more"): filters treat
// it as no upper bound and the label gets a `+`.
//
// Fill fractions and labels are pure functions of the committed state.

use crate::config::consts::OPEN_END_MARKER;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    Low,
    High,
}

/// How handle values are shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    /// `7`
    Plain,
    /// Base units shown in thousands: `250000` → `250k`.
    Thousands,
}

impl ValueFormat {
    pub fn format(self, v: u64) -> String {
        match self {
            ValueFormat::Plain => v.to_string(),
            ValueFormat::Thousands if v % 1000 == 0 => format!("{}k", v / 1000),
            ValueFormat::Thousands => format!("{:.1}k", v as f64 / 1000.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeSelector {
    domain_min: u64,
    domain_max: u64,
    step: u64,
    low: u64,
    high: u64,
    format: ValueFormat,
    /// Handle of the drag in progress, if any.
    dragging: Option<Handle>,
}

impl RangeSelector {
    /// A reversed domain is swapped; a zero step is treated as 1. Initial
    /// values go through the same clamp/snap; if they arrive inverted, low
    /// is pulled down to high.
    pub fn new(
        domain_min: u64,
        domain_max: u64,
        initial_low: u64,
        initial_high: u64,
        step: u64,
        format: ValueFormat,
    ) -> Self {
        let (domain_min, domain_max) = if domain_min <= domain_max {
            (domain_min, domain_max)
        } else {
            (domain_max, domain_min)
        };
        let mut r = Self {
            domain_min,
            domain_max,
            step: step.max(1),
            low: domain_min,
            high: domain_max,
            format,
            dragging: None,
        };
        r.high = r.accept(initial_high);
        r.low = r.accept(initial_low).min(r.high);
        r
    }

    /// Selector spanning its whole domain.
    pub fn full(domain_min: u64, domain_max: u64, step: u64, format: ValueFormat) -> Self {
        Self::new(domain_min, domain_max, domain_min, domain_max, step, format)
    }

    /* ---------- committed state ---------- */

    #[inline] pub fn low(&self) -> u64 { self.low }
    #[inline] pub fn high(&self) -> u64 { self.high }
    #[inline] pub fn range(&self) -> (u64, u64) { (self.low, self.high) }
    #[inline] pub fn domain(&self) -> (u64, u64) { (self.domain_min, self.domain_max) }
    #[inline] pub fn step(&self) -> u64 { self.step }
    #[inline] pub fn format(&self) -> ValueFormat { self.format }
    #[inline] pub fn dragging(&self) -> Option<Handle> { self.dragging }

    pub fn value(&self, handle: Handle) -> u64 {
        match handle {
            Handle::Low => self.low,
            Handle::High => self.high,
        }
    }

    /// High handle sits at the domain maximum: "or more".
    pub fn is_open_ended(&self) -> bool {
        self.high >= self.domain_max
    }

    /// Effective upper bound for filtering; `None` means unbounded.
    pub fn upper_bound(&self) -> Option<u64> {
        (!self.is_open_ended()).then_some(self.high)
    }

    pub fn contains(&self, v: u64) -> bool {
        v >= self.low && self.upper_bound().is_none_or(|hi| v <= hi)
    }

    pub fn is_full(&self) -> bool {
        self.low == self.domain_min && self.high == self.domain_max
    }

    /* ---------- updates ---------- */

    /// Move one handle. Returns the committed `(low, high)`.
    pub fn set(&mut self, handle: Handle, v: u64) -> (u64, u64) {
        let v = self.accept(v);
        match handle {
            Handle::Low => {
                self.low = v;
                if self.high < v { self.high = v; }
            }
            Handle::High => {
                self.high = v;
                if self.low > v { self.low = v; }
            }
        }
        self.range()
    }

    pub fn set_low(&mut self, v: u64) -> (u64, u64) { self.set(Handle::Low, v) }
    pub fn set_high(&mut self, v: u64) -> (u64, u64) { self.set(Handle::High, v) }

    /// Typed entry of both values: low moves first, then high, so an
    /// inverted pair collapses onto `high`.
    pub fn set_range(&mut self, low: u64, high: u64) -> (u64, u64) {
        self.set(Handle::Low, low);
        self.set(Handle::High, high)
    }

    /// Back to the full domain, no drag in progress.
    pub fn reset(&mut self) {
        self.low = self.domain_min;
        self.high = self.domain_max;
        self.dragging = None;
    }

    /* ---------- pointer drag ---------- */

    pub fn begin_drag(&mut self, handle: Handle) {
        self.dragging = Some(handle);
    }

    /// Move the dragged handle; no-op (returns current range) if no drag.
    pub fn drag_to(&mut self, v: u64) -> (u64, u64) {
        match self.dragging {
            Some(h) => self.set(h, v),
            None => self.range(),
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Which handle a press at `v` should grab: the nearer one. When both
    /// sit on the same value, pressing below grabs low, at or above grabs
    /// high, so a collapsed pair can always be pulled apart.
    pub fn nearest_handle(&self, v: u64) -> Handle {
        if self.low == self.high {
            return if v < self.low { Handle::Low } else { Handle::High };
        }
        let dl = v.abs_diff(self.low);
        let dh = v.abs_diff(self.high);
        if dl <= dh { Handle::Low } else { Handle::High }
    }

    /* ---------- presentation ---------- */

    /// Position of `v` along the track, in `[0, 1]`.
    pub fn fraction(&self, v: u64) -> f32 {
        let span = self.domain_max - self.domain_min;
        if span == 0 {
            return 0.0;
        }
        let v = v.clamp(self.domain_min, self.domain_max);
        ((v - self.domain_min) as f64 / span as f64) as f32
    }

    /// `(low, high)` track fractions for the filled segment.
    pub fn fill(&self) -> (f32, f32) {
        (self.fraction(self.low), self.fraction(self.high))
    }

    /// Inverse of `fraction`, snapped onto the step grid.
    pub fn value_at(&self, t: f32) -> u64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let span = (self.domain_max - self.domain_min) as f64;
        self.accept(self.domain_min + (f64::from(t) * span).round() as u64)
    }

    pub fn low_label(&self) -> String {
        self.format.format(self.low)
    }

    pub fn high_label(&self) -> String {
        let s = self.format.format(self.high);
        if self.is_open_ended() { join!(s, OPEN_END_MARKER) } else { s }
    }

    /* ---------- internals ---------- */

    fn accept(&self, v: u64) -> u64 {
        let v = v.clamp(self.domain_min, self.domain_max);
        if v == self.domain_max {
            return v;
        }
        let offset = v - self.domain_min;
        let snapped = offset.saturating_add(self.step / 2) / self.step * self.step;
        self.domain_min.saturating_add(snapped).min(self.domain_max)
    }
}
