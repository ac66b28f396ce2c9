//! Rate Engine for the Ride.Rent vehicle rental fleet
//!
//! This crate resolves effective rental rates (daily/weekly/monthly) from a
//! vehicle's base rental table, per-vehicle manual overrides, and fleet-wide
//! bulk discount rules, and calculates booking amounts with an itemised
//! final-amount breakdown.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
