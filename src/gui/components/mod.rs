// src/gui/components/mod.rs
pub mod export_bar;
pub mod jobs_table;
pub mod search_bar;
