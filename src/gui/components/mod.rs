// src/gui/components/mod.rs
pub mod card_grid;
pub mod filter_panel;
pub mod range_slider;
