//! Configuration loading and management for the Rate Engine.
//!
//! This module provides functionality to load fleet rate settings from
//! YAML files, including fleet metadata and the fleet-wide bulk discount
//! rule.
//!
//! # Example
//!
//! ```no_run
//! use rate_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fleet").unwrap();
//! println!("Loaded fleet: {}", config.fleet().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BulkDiscountConfig, FleetConfig, FleetMetadata};
