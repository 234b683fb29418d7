//! CLI library components for the bookstore catalog.

pub mod commands;
pub mod logging;
pub mod sample;
pub mod summary;
