//! Two springs connected side-by-side.

use observable::{Property, Subscription};
use tracing::debug;

use crate::config::{RangeSpec, SpringConfig};
use crate::spring::Spring;

/// Two springs in parallel: both share one displacement, and the applied
/// force splits between them in proportion to their constants
/// (`F_i = k_i · x`).
///
/// Both springs are wall-mounted side-by-side. The effective constant is
/// the sum `k1 + k2`. Spring-constant changes hold the *total* applied
/// force constant and recompute the shared displacement; each spring's
/// individual force then follows `k_i · x`.
pub struct ParallelSystem {
    top_spring: Spring,
    bottom_spring: Spring,
    force_range: RangeSpec,
    // Observable aggregates for the presentation layer.
    applied_force: Property,
    displacement: Property,
}

impl ParallelSystem {
    /// Assembles the system from the per-spring configuration.
    pub fn new(component: SpringConfig) -> Self {
        let top_spring = Spring::wall_mounted(component);
        let bottom_spring = Spring::wall_mounted(component);
        let force_range = component.applied_force_range;
        let displacement = top_spring.displacement();
        Self {
            top_spring,
            bottom_spring,
            force_range,
            applied_force: Property::new(force_range.default),
            displacement: Property::new(displacement),
        }
    }

    pub fn top_spring(&self) -> &Spring {
        &self.top_spring
    }

    pub fn bottom_spring(&self) -> &Spring {
        &self.bottom_spring
    }

    /// Total force applied to the pair, N.
    pub fn applied_force(&self) -> f64 {
        self.applied_force.get()
    }

    /// Shared displacement of both springs, m.
    pub fn displacement(&self) -> f64 {
        self.displacement.get()
    }

    /// Additive combination `k1 + k2`.
    pub fn effective_spring_constant(&self) -> f64 {
        self.top_spring.spring_constant() + self.bottom_spring.spring_constant()
    }

    pub fn observe_applied_force(&self, f: impl FnMut(f64, f64) + 'static) -> Subscription {
        self.applied_force.subscribe(f)
    }

    pub fn observe_displacement(&self, f: impl FnMut(f64, f64) + 'static) -> Subscription {
        self.displacement.subscribe(f)
    }

    /// Applies a total force: the pair moves together to
    /// `x = F / (k1 + k2)`, each spring carrying `k_i · x`.
    pub fn set_applied_force(&mut self, force: f64) {
        let force = self.force_range.clamp(force);
        self.applied_force.set(force);
        self.distribute();
    }

    /// Changes the top spring's constant, holding the total force constant.
    pub fn set_spring_constant1(&mut self, spring_constant: f64) {
        self.top_spring.set_spring_constant(spring_constant);
        self.distribute();
    }

    /// Changes the bottom spring's constant, holding the total force
    /// constant.
    pub fn set_spring_constant2(&mut self, spring_constant: f64) {
        self.bottom_spring.set_spring_constant(spring_constant);
        self.distribute();
    }

    /// Drags the pair to a displacement; the equivalent total force
    /// `(k1 + k2) · x` is applied (and clamped) as usual.
    pub fn drag_to_displacement(&mut self, displacement: f64) {
        let force = self.effective_spring_constant() * displacement;
        self.set_applied_force(force);
    }

    /// Restores both springs and the aggregates to construction-time
    /// defaults. Idempotent.
    pub fn reset(&mut self) {
        self.top_spring.reset();
        self.bottom_spring.reset();
        self.applied_force.set(self.force_range.default);
        self.distribute();
        debug!("parallel system reset");
    }

    /// Re-derives the shared displacement from the held total force and
    /// seats both springs on it.
    fn distribute(&mut self) {
        let x = self.applied_force.get() / self.effective_spring_constant();
        self.top_spring.set_displacement(x);
        self.bottom_spring.set_displacement(x);
        self.displacement.set(x);
    }
}

impl std::fmt::Debug for ParallelSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelSystem")
            .field("applied_force", &self.applied_force.get())
            .field("displacement", &self.displacement.get())
            .field("top_spring", &self.top_spring)
            .field("bottom_spring", &self.bottom_spring)
            .finish()
    }
}
