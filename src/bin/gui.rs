// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use trip_finder::{
    config::{
        consts::{CONFIG_FILE, LOG_FILE, labels},
        options::AppOptions,
        state::AppState,
    },
    gui, log,
};

fn main() {
    let _guard = log::init_file(Path::new(LOG_FILE));

    let state = AppState::with_options(AppOptions::load_or_default(Path::new(CONFIG_FILE)));
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w, state.gui.window_h])
            .with_title(labels::WINDOW_TITLE),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
