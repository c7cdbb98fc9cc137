// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod card;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod filter;
pub mod gui;
pub mod loader;
pub mod progress;
pub mod record;
