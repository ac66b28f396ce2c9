//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fleet rate
//! settings from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::validate_bulk_rule;
use crate::error::{RateError, RateResult};
use crate::models::BulkDiscountRule;

use super::types::{BulkDiscountConfig, FleetConfig, FleetMetadata};

/// Loads and provides access to fleet configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to fleet metadata and the fleet-wide bulk
/// discount rule.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/fleet/
/// ├── fleet.yaml          # Fleet metadata
/// └── bulk_discount.yaml  # Fleet-wide bulk discount rule
/// ```
///
/// # Example
///
/// ```no_run
/// use rate_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/fleet").unwrap();
/// println!("Loaded fleet: {}", loader.fleet().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FleetConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// The bulk discount rule, if present, is validated on load so that a
    /// misconfigured discount fails startup rather than individual quotes.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/fleet")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The bulk discount rule exceeds the allowed discount cap
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rate_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/fleet")?;
    /// # Ok::<(), rate_engine::error::RateError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> RateResult<Self> {
        let path = path.as_ref();

        let fleet_path = path.join("fleet.yaml");
        let metadata = Self::load_yaml::<FleetMetadata>(&fleet_path)?;

        let bulk_path = path.join("bulk_discount.yaml");
        let bulk_config = Self::load_yaml::<BulkDiscountConfig>(&bulk_path)?;

        if let Some(rule) = &bulk_config.bulk_discount {
            validate_bulk_rule(rule)?;
        }

        let config = FleetConfig::new(metadata, bulk_config.bulk_discount);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RateResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RateError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RateError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying fleet configuration.
    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Returns the fleet metadata.
    pub fn fleet(&self) -> &FleetMetadata {
        self.config.fleet()
    }

    /// Returns the fleet-wide bulk discount rule, if one is active.
    pub fn bulk_discount(&self) -> Option<&BulkDiscountRule> {
        self.config.bulk_discount()
    }
}
