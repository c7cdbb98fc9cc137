// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
    thread,
};

use eframe::egui;

use crate::{
    card::{self, Card},
    config::{consts::labels, state::AppState},
    filter::FilterController,
    loader,
    record::RecordStore,
};

use super::{components, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        labels::WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for options (UI thread only)
    pub state: AppState,

    // status line (the loader thread writes here)
    pub status: Arc<Mutex<String>>,

    // pending background load; None once the store arrived
    pub loading: Option<mpsc::Receiver<RecordStore>>,

    // filter core; None until the store arrived
    pub filter: Option<FilterController>,

    // one card per record, same order as the store
    pub cards: Vec<Card>,
    pub visible: Vec<bool>,

    // country field text + its open suggestion list
    pub country_text: String,
    pub suggestions: Vec<String>,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        let status = Arc::new(Mutex::new(s!("Loading…")));
        let (tx, rx) = mpsc::channel();

        let source = state.options.source.clone();
        let status_arc = status.clone();
        let ctx2 = ctx.clone();

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status_arc);
            let store = loader::load_records(&source, Some(&mut prog));
            let _ = tx.send(store);
            ctx2.request_repaint();
        });

        logf!("Init: loading {} page(s)", state.options.source.pages.len());

        Self {
            state,
            status,
            loading: Some(rx),
            filter: None,
            cards: Vec::new(),
            visible: Vec::new(),
            country_text: s!(),
            suggestions: Vec::new(),
        }
    }

    /* ---------- tiny helpers ---------- */

    pub fn status<T: Into<String>>(&self, msg: T) {
        match self.status.lock() {
            Ok(mut g) => *g = msg.into(),
            Err(poisoned) => *poisoned.into_inner() = msg.into(),
        }
    }

    pub fn status_text(&self) -> String {
        match self.status.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool { self.loading.is_some() }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Pick up the store once the loader thread delivers it.
    fn poll_loading(&mut self) {
        let Some(rx) = &self.loading else { return };
        let store = match rx.try_recv() {
            Ok(store) => store,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                loge!("Init: loader thread vanished; continuing with no trips");
                RecordStore::empty()
            }
        };
        self.loading = None;
        self.install(store);
    }

    /// Build cards + controller from a freshly loaded store.
    pub fn install(&mut self, store: RecordStore) {
        self.cards = card::build_cards(store.iter());
        let ctl = FilterController::new(store, &self.state.options.sliders);
        self.visible = vec![false; self.cards.len()];
        let shown = ctl.apply_filter(&mut self.visible);
        self.filter = Some(ctl);
        self.status(format!("{} trip(s) loaded", self.cards.len()));
        logf!("Init: {} card(s), {shown} visible", self.cards.len());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loading();

        egui::SidePanel::left("filters")
            .resizable(false)
            .min_width(280.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::card_grid::draw(ui, self);
        });
    }
}
