//! Searchable overlay listing keyboard shortcuts by category.

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod filter;
pub mod help;
pub mod keys;
pub mod logging;
pub mod selection;
pub mod terminal;
pub mod ui;
