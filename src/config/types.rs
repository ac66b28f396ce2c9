//! Configuration types for fleet rate settings.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::BulkDiscountRule;

/// Metadata about the fleet.
///
/// Contains identifying information about the fleet whose vehicles are
/// priced by this engine.
#[derive(Debug, Clone, Deserialize)]
pub struct FleetMetadata {
    /// The human-readable name of the fleet.
    pub name: String,
    /// The region the fleet operates in.
    pub region: String,
    /// The version or effective date of this configuration.
    pub version: String,
}

/// Bulk discount configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkDiscountConfig {
    /// The fleet-wide bulk discount rule, if one is currently active.
    pub bulk_discount: Option<BulkDiscountRule>,
}

/// The complete fleet configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct FleetConfig {
    /// Fleet metadata.
    metadata: FleetMetadata,
    /// The active fleet-wide bulk discount rule, if any.
    bulk_discount: Option<BulkDiscountRule>,
}

impl FleetConfig {
    /// Creates a new FleetConfig from its component parts.
    pub fn new(metadata: FleetMetadata, bulk_discount: Option<BulkDiscountRule>) -> Self {
        Self {
            metadata,
            bulk_discount,
        }
    }

    /// Returns the fleet metadata.
    pub fn fleet(&self) -> &FleetMetadata {
        &self.metadata
    }

    /// Returns the active bulk discount rule, if any.
    pub fn bulk_discount(&self) -> Option<&BulkDiscountRule> {
        self.bulk_discount.as_ref()
    }
}
