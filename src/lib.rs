//! Scrape Results Dashboard Client
//!
//! This library keeps an in-memory list of scrape jobs in sync with the
//! backend that runs them, and renders each job's result as a declarative
//! chart spec, a product grid, an image gallery and a header summary.

pub mod app_state;
pub mod config;
pub mod flows;
pub mod format;
pub mod models;
pub mod services;
pub mod store;
pub mod views;
