//! Construction-time configuration for springs and spring systems.
//!
//! This module is the single source of truth for ranges and defaults. Every
//! model entity receives its configuration here, at construction; there are
//! no ambient overrides. The structs are:
//!
//! - **Serializable**: can be saved/loaded as JSON for scene presets
//! - **Testable**: tests construct them directly
//! - **Validated**: a malformed range is a system-assembly bug and fails
//!   loudly at construction, not at first use

use serde::{Deserialize, Serialize};

/// An inclusive numeric range with a default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl RangeSpec {
    /// Creates a range.
    ///
    /// # Panics
    ///
    /// Panics unless `min <= default <= max` and all three are finite.
    pub fn new(min: f64, max: f64, default: f64) -> Self {
        assert!(
            min.is_finite() && max.is_finite() && default.is_finite(),
            "range bounds must be finite: [{min}, {max}] default {default}"
        );
        assert!(
            min <= default && default <= max,
            "range default out of bounds: [{min}, {max}] default {default}"
        );
        Self { min, max, default }
    }

    /// Clamps `value` into the range.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Whether `value` lies inside the range (inclusive).
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Configuration for a single [`Spring`](crate::Spring).
///
/// The displacement range is not configured directly; it is derived from the
/// applied-force range at the softest configured spring constant,
/// `[F.min / k.min, F.max / k.min]`, so that every reachable force maps to a
/// reachable displacement and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Position of the left (attached) end, in meters.
    pub left: f64,
    /// Unstretched length, in meters.
    pub equilibrium_length: f64,
    /// Spring constant range, N/m. `min` must be strictly positive.
    pub spring_constant_range: RangeSpec,
    /// Applied force range, N.
    pub applied_force_range: RangeSpec,
}

impl SpringConfig {
    /// Validates the configuration.
    ///
    /// # Panics
    ///
    /// Panics if the minimum spring constant is not strictly positive (a
    /// zero constant would divide by zero in `x = F / k`) or if the
    /// equilibrium length is not positive and finite.
    pub fn validate(&self) {
        assert!(
            self.left.is_finite(),
            "left end position must be finite: {}",
            self.left
        );
        assert!(
            self.equilibrium_length.is_finite() && self.equilibrium_length > 0.0,
            "equilibrium length must be positive: {}",
            self.equilibrium_length
        );
        assert!(
            self.spring_constant_range.min > 0.0,
            "minimum spring constant must be strictly positive: {}",
            self.spring_constant_range.min
        );
    }

    /// Displacement range derived from the force range at the softest
    /// spring constant.
    pub fn displacement_range(&self) -> RangeSpec {
        let k_min = self.spring_constant_range.min;
        let k_default = self.spring_constant_range.default;
        RangeSpec::new(
            self.applied_force_range.min / k_min,
            self.applied_force_range.max / k_min,
            self.applied_force_range.default / k_default,
        )
    }

    /// Preset for the single-spring scene.
    pub fn single() -> Self {
        Self {
            left: 0.0,
            equilibrium_length: 1.5,
            spring_constant_range: RangeSpec::new(100.0, 1000.0, 200.0),
            applied_force_range: RangeSpec::new(-100.0, 100.0, 0.0),
        }
    }

    /// Preset for each spring of the series scene.
    pub fn series_component() -> Self {
        Self {
            left: 0.0,
            equilibrium_length: 1.5,
            spring_constant_range: RangeSpec::new(200.0, 600.0, 200.0),
            applied_force_range: RangeSpec::new(-200.0, 200.0, 0.0),
        }
    }

    /// Preset for each spring of the parallel scene.
    pub fn parallel_component() -> Self {
        Self::series_component()
    }

    /// Preset for the energy scene (softer springs, larger stretch).
    pub fn energy() -> Self {
        Self {
            left: 0.0,
            equilibrium_length: 1.5,
            spring_constant_range: RangeSpec::new(100.0, 400.0, 100.0),
            applied_force_range: RangeSpec::new(-100.0, 100.0, 0.0),
        }
    }
}

/// Configuration for the two-scene [`SystemsModel`](crate::SystemsModel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemsConfig {
    pub series: SpringConfig,
    pub parallel: SpringConfig,
}

impl Default for SystemsConfig {
    fn default() -> Self {
        Self {
            series: SpringConfig::series_component(),
            parallel: SpringConfig::parallel_component(),
        }
    }
}
