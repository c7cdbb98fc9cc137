// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        match self.status.lock() {
            Ok(mut g) => *g = text,
            Err(poisoned) => *poisoned.into_inner() = text,
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Loading {total} trip page(s)…"));
    }
    fn item_done(&mut self, _index: usize, location: &str) {
        self.done += 1;
        self.set_status(format!("Loaded {location} ({}/{})", self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, _index: usize, location: &str) {
        self.failed += 1;
        self.set_status(format!("Skipped {location} ({}/{})", self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            self.set_status(format!("Load complete ({}/{})", self.done, self.total));
        } else {
            self.set_status(format!(
                "Load complete ({}/{}, {} skipped)",
                self.done, self.total, self.failed
            ));
        }
    }
}
