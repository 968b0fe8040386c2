// src/lib.rs

#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;

pub mod export;
pub mod filter;
pub mod gui;
pub mod loader;
pub mod model;
pub mod progress;
pub mod render;
pub mod scrape;
pub mod session;

pub use loader::{LoadError, Source};
pub use model::{JobRecord, JobsDocument};
pub use session::Session;
