//! Configuration loading and management for the Child Support Assessment Engine.
//!
//! Rate tables are loaded once from YAML files, one per financial year, and
//! treated as read-only afterwards.
//!
//! # Example
//!
//! ```no_run
//! use child_support_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/child_support").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CareCostBand, CostsOfChildrenRates, RateTable, SchemeConfig, SchemeMetadata};
