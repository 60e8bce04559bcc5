//! Quasi-static spring obeying Hooke's law.
//!
//! The spring has no mass and no damping: applied force and displacement
//! are always mutually consistent (`F = kx`), never independently
//! transient. Changing one input recomputes the other side of the equation
//! before the setter returns.
//!
//! Sign conventions: positive displacement stretches the spring to the
//! right; the restoring force `-kx` therefore points left when stretched.

use observable::{Property, Subscription};
use tracing::{debug, trace};

use crate::config::{RangeSpec, SpringConfig};
use crate::error::SpringError;

/// A massless ideal spring in one dimension.
///
/// Geometry along the x axis:
///
/// ```text
/// left ----[ equilibrium_length ]----+--[ displacement ]-- right
///                                    |
///                              equilibrium_x
/// ```
///
/// All inputs are clamped to the configured ranges; the minimum spring
/// constant is strictly positive, so `x = F / k` is always finite.
pub struct Spring {
    config: SpringConfig,
    displacement_range: RangeSpec,
    left_fixed: bool,

    spring_constant: Property,
    applied_force: Property,
    displacement: Property,
    left: Property,
    // Derived, kept observable for the presentation layer.
    right: Property,
    spring_force: Property,
}

impl Spring {
    /// Creates a spring whose left end may be repositioned.
    ///
    /// # Panics
    ///
    /// Panics on an invalid configuration (see [`SpringConfig::validate`]).
    pub fn new(config: SpringConfig) -> Self {
        Self::build(config, false)
    }

    /// Creates a spring whose left end is mounted to the wall.
    ///
    /// [`set_left`](Self::set_left) on a wall-mounted spring returns
    /// [`SpringError::LeftEndFixed`].
    ///
    /// # Panics
    ///
    /// Panics on an invalid configuration (see [`SpringConfig::validate`]).
    pub fn wall_mounted(config: SpringConfig) -> Self {
        Self::build(config, true)
    }

    fn build(config: SpringConfig, left_fixed: bool) -> Self {
        config.validate();
        let displacement_range = config.displacement_range();
        let k = config.spring_constant_range.default;
        let force = config.applied_force_range.default;
        let x = force / k;
        let left = config.left;
        Self {
            spring_constant: Property::new(k),
            applied_force: Property::new(force),
            displacement: Property::new(x),
            left: Property::new(left),
            right: Property::new(left + config.equilibrium_length + x),
            spring_force: Property::new(-k * x),
            config,
            displacement_range,
            left_fixed,
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Spring constant `k`, N/m.
    pub fn spring_constant(&self) -> f64 {
        self.spring_constant.get()
    }

    /// External applied force `F`, N.
    pub fn applied_force(&self) -> f64 {
        self.applied_force.get()
    }

    /// Displacement `x` of the free end from equilibrium, m.
    pub fn displacement(&self) -> f64 {
        self.displacement.get()
    }

    /// Position of the left (attached) end, m.
    pub fn left(&self) -> f64 {
        self.left.get()
    }

    /// Position of the free end: `left + equilibrium_length + displacement`.
    pub fn right(&self) -> f64 {
        self.right.get()
    }

    /// Restoring force `-kx`, equal and opposite to the applied force.
    pub fn spring_force(&self) -> f64 {
        self.spring_force.get()
    }

    /// Position of the free end when the spring is unstretched.
    pub fn equilibrium_x(&self) -> f64 {
        self.left.get() + self.config.equilibrium_length
    }

    /// Unstretched length, m.
    pub fn equilibrium_length(&self) -> f64 {
        self.config.equilibrium_length
    }

    /// Elastic potential energy stored in the spring, `½kx²`, J.
    pub fn potential_energy(&self) -> f64 {
        let x = self.displacement.get();
        0.5 * self.spring_constant.get() * x * x
    }

    /// Whether the left end is mounted to the wall.
    pub fn is_left_fixed(&self) -> bool {
        self.left_fixed
    }

    pub fn spring_constant_range(&self) -> RangeSpec {
        self.config.spring_constant_range
    }

    pub fn applied_force_range(&self) -> RangeSpec {
        self.config.applied_force_range
    }

    pub fn displacement_range(&self) -> RangeSpec {
        self.displacement_range
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    pub fn observe_spring_constant(&self, f: impl FnMut(f64, f64) + 'static) -> Subscription {
        self.spring_constant.subscribe(f)
    }

    pub fn observe_applied_force(&self, f: impl FnMut(f64, f64) + 'static) -> Subscription {
        self.applied_force.subscribe(f)
    }

    pub fn observe_displacement(&self, f: impl FnMut(f64, f64) + 'static) -> Subscription {
        self.displacement.subscribe(f)
    }

    pub fn observe_left(&self, f: impl FnMut(f64, f64) + 'static) -> Subscription {
        self.left.subscribe(f)
    }

    pub fn observe_right(&self, f: impl FnMut(f64, f64) + 'static) -> Subscription {
        self.right.subscribe(f)
    }

    pub fn observe_spring_force(&self, f: impl FnMut(f64, f64) + 'static) -> Subscription {
        self.spring_force.subscribe(f)
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Applies an external force, recomputing displacement as `x = F / k`.
    ///
    /// The force is clamped to the configured range. Returns whether any
    /// state changed.
    pub fn set_applied_force(&mut self, force: f64) -> bool {
        let force = self.config.applied_force_range.clamp(force);
        let changed = self.applied_force.set(force);
        if changed {
            self.displacement.set(force / self.spring_constant.get());
            self.sync_derived();
            trace!(force, displacement = self.displacement.get(), "applied force set");
        }
        changed
    }

    /// Changes the spring constant, holding the applied force constant and
    /// recomputing displacement as `x = F / k`.
    ///
    /// The constant is clamped to the configured range. Returns whether any
    /// state changed.
    pub fn set_spring_constant(&mut self, spring_constant: f64) -> bool {
        let k = self.config.spring_constant_range.clamp(spring_constant);
        let changed = self.spring_constant.set(k);
        if changed {
            self.displacement.set(self.applied_force.get() / k);
            self.sync_derived();
            trace!(spring_constant = k, displacement = self.displacement.get(), "spring constant set");
        }
        changed
    }

    /// Moves the free end to a displacement, recomputing the applied force
    /// as `F = kx`.
    ///
    /// The displacement is clamped to its derived range and the resulting
    /// force to the force range; when the force clamp bites, the
    /// displacement is re-derived from the clamped force so `F = kx` holds
    /// exactly. Returns whether any state changed.
    pub fn set_displacement(&mut self, displacement: f64) -> bool {
        let x = self.displacement_range.clamp(displacement);
        let k = self.spring_constant.get();
        let force = self.config.applied_force_range.clamp(k * x);
        let x = force / k;
        let displacement_changed = self.displacement.set(x);
        let force_changed = self.applied_force.set(force);
        let changed = displacement_changed || force_changed;
        if changed {
            self.sync_derived();
            trace!(displacement = x, force, "displacement set");
        }
        changed
    }

    /// Moves the left end.
    ///
    /// # Errors
    ///
    /// Returns [`SpringError::LeftEndFixed`] on a wall-mounted spring; that
    /// is a system-assembly bug, not a clampable user action.
    pub fn set_left(&mut self, left: f64) -> Result<bool, SpringError> {
        if self.left_fixed {
            return Err(SpringError::LeftEndFixed { attempted: left });
        }
        Ok(self.translate_to(left))
    }

    /// Repositions a movable spring. System-internal: series systems re-seat
    /// their second spring through this path, which stays infallible.
    pub(crate) fn translate_to(&mut self, left: f64) -> bool {
        debug_assert!(!self.left_fixed, "translate_to on a wall-mounted spring");
        let changed = self.left.set(left);
        if changed {
            self.sync_derived();
        }
        changed
    }

    /// Restores the construction-time defaults. Idempotent.
    pub fn reset(&mut self) {
        let k = self.config.spring_constant_range.default;
        let force = self.config.applied_force_range.default;
        self.spring_constant.set(k);
        self.applied_force.set(force);
        self.displacement.set(force / k);
        self.left.set(self.config.left);
        self.sync_derived();
        debug!("spring reset");
    }

    /// Re-derives `right` and `spring_force` from the primary properties.
    fn sync_derived(&mut self) {
        let x = self.displacement.get();
        self.right
            .set(self.left.get() + self.config.equilibrium_length + x);
        self.spring_force.set(-self.spring_constant.get() * x);
    }
}

impl std::fmt::Debug for Spring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spring")
            .field("spring_constant", &self.spring_constant.get())
            .field("applied_force", &self.applied_force.get())
            .field("displacement", &self.displacement.get())
            .field("left", &self.left.get())
            .field("left_fixed", &self.left_fixed)
            .finish_non_exhaustive()
    }
}
