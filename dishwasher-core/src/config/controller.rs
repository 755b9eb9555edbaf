//! Controller settings
//!
//! Board-level tuning of the wash controller. The defaults reproduce the
//! stock appliance behavior; a board can override them from TOML with
//! the `toml` feature.

use crate::traits::filter::FULL_CAPACITY;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default filter threshold (percent)
///
/// A filter reporting this capacity or less is considered clogged.
pub const MIN_FILTER_CAPACITY: f32 = 0.0;

/// Result of evaluating a filter capacity reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterCondition {
    /// Filter has enough capacity left for a cycle
    Ok,
    /// Filter capacity at or below the threshold
    Clogged,
    /// Reading is not a percentage (NaN, infinite, or out of range)
    InvalidReading,
}

/// Filter acceptance policy
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FilterPolicy {
    /// Capacity (percent) at or below which the filter is rejected
    pub min_capacity: f32,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            min_capacity: MIN_FILTER_CAPACITY,
        }
    }
}

impl FilterPolicy {
    /// Create a policy with the given threshold
    pub const fn new(min_capacity: f32) -> Self {
        Self { min_capacity }
    }

    /// Evaluate a capacity reading against this policy
    ///
    /// A policy whose own threshold is invalid rejects every reading.
    pub fn evaluate(&self, capacity: f32) -> FilterCondition {
        if !self.is_valid() {
            return FilterCondition::Clogged;
        }

        if !capacity.is_finite() || !(0.0..=FULL_CAPACITY).contains(&capacity) {
            return FilterCondition::InvalidReading;
        }

        if capacity <= self.min_capacity {
            FilterCondition::Clogged
        } else {
            FilterCondition::Ok
        }
    }

    /// Check that the threshold leaves some acceptable range
    pub fn is_valid(&self) -> bool {
        self.min_capacity.is_finite() && (0.0..FULL_CAPACITY).contains(&self.min_capacity)
    }
}

/// Controller configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Filter threshold outside 0.0..100.0
    InvalidFilterThreshold,
}

/// Wash controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ControllerConfig {
    /// Dirt filter acceptance policy
    pub filter: FilterPolicy,
}

impl ControllerConfig {
    /// Create a configuration with a custom filter policy
    pub const fn new(filter: FilterPolicy) -> Self {
        Self { filter }
    }

    /// Validate all settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.filter.is_valid() {
            return Err(ConfigError::InvalidFilterThreshold);
        }
        Ok(())
    }
}
