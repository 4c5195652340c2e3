//! Child Support Assessment Engine
//!
//! This crate implements Australia's 8-step child support assessment formula
//! and the 15% wage reduction check, with yearly rate tables loaded from
//! configuration and an HTTP API around the engine.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
