//! Two springs connected end-to-end.

use observable::{Property, Subscription};
use tracing::debug;

use crate::config::{RangeSpec, SpringConfig};
use crate::spring::Spring;

/// Two springs in series: the whole applied force is transmitted through
/// both, and their displacements add.
///
/// Spring 1 is wall-mounted; spring 2's left end is re-seated to spring 1's
/// free end after every mutation, so `spring2.left == spring1.right` is an
/// invariant of the system. The effective constant is the harmonic
/// combination `1 / (1/k1 + 1/k2)`.
pub struct SeriesSystem {
    spring1: Spring,
    spring2: Spring,
    force_range: RangeSpec,
    // Observable aggregates for the presentation layer.
    applied_force: Property,
    total_displacement: Property,
}

impl SeriesSystem {
    /// Assembles the system from the per-spring configuration (both springs
    /// share it; spring 2 starts seated at spring 1's free end).
    pub fn new(component: SpringConfig) -> Self {
        let spring1 = Spring::wall_mounted(component);
        let spring2 = Spring::new(SpringConfig {
            left: spring1.right(),
            ..component
        });
        let force_range = component.applied_force_range;
        let total = spring1.displacement() + spring2.displacement();
        Self {
            spring1,
            spring2,
            force_range,
            applied_force: Property::new(force_range.default),
            total_displacement: Property::new(total),
        }
    }

    pub fn spring1(&self) -> &Spring {
        &self.spring1
    }

    pub fn spring2(&self) -> &Spring {
        &self.spring2
    }

    /// Total force applied at the right end, N.
    pub fn applied_force(&self) -> f64 {
        self.applied_force.get()
    }

    /// Sum of both springs' displacements, m.
    pub fn total_displacement(&self) -> f64 {
        self.total_displacement.get()
    }

    /// Harmonic combination `1 / (1/k1 + 1/k2)`.
    pub fn effective_spring_constant(&self) -> f64 {
        1.0 / (1.0 / self.spring1.spring_constant() + 1.0 / self.spring2.spring_constant())
    }

    /// Position of the wall attachment.
    pub fn left(&self) -> f64 {
        self.spring1.left()
    }

    /// Position of the free end of the chain.
    pub fn right(&self) -> f64 {
        self.spring2.right()
    }

    pub fn observe_applied_force(&self, f: impl FnMut(f64, f64) + 'static) -> Subscription {
        self.applied_force.subscribe(f)
    }

    pub fn observe_total_displacement(&self, f: impl FnMut(f64, f64) + 'static) -> Subscription {
        self.total_displacement.subscribe(f)
    }

    /// Applies a force to the chain: series transmits it unchanged, so both
    /// springs receive the same force and stretch per their own constants.
    pub fn set_applied_force(&mut self, force: f64) {
        let force = self.force_range.clamp(force);
        self.spring1.set_applied_force(force);
        self.spring2.set_applied_force(force);
        self.seat_second_spring();
        self.applied_force.set(force);
        self.sync_total();
    }

    /// Changes spring 1's constant; the transmitted force is held constant,
    /// so only that spring's displacement (and the total) changes.
    pub fn set_spring_constant1(&mut self, spring_constant: f64) {
        self.spring1.set_spring_constant(spring_constant);
        self.seat_second_spring();
        self.sync_total();
    }

    /// Changes spring 2's constant; same rule as
    /// [`set_spring_constant1`](Self::set_spring_constant1).
    pub fn set_spring_constant2(&mut self, spring_constant: f64) {
        self.spring2.set_spring_constant(spring_constant);
        self.sync_total();
    }

    /// Drags the free end of the chain to a total displacement; the
    /// equivalent force `k_eff · x` is applied (and clamped) as usual.
    pub fn drag_to_displacement(&mut self, total_displacement: f64) {
        let force = self.effective_spring_constant() * total_displacement;
        self.set_applied_force(force);
    }

    /// Restores both springs and the aggregates to construction-time
    /// defaults. Idempotent.
    pub fn reset(&mut self) {
        self.spring1.reset();
        self.spring2.reset();
        self.seat_second_spring();
        self.applied_force.set(self.force_range.default);
        self.sync_total();
        debug!("series system reset");
    }

    fn seat_second_spring(&mut self) {
        self.spring2.translate_to(self.spring1.right());
    }

    fn sync_total(&mut self) {
        self.total_displacement
            .set(self.spring1.displacement() + self.spring2.displacement());
    }
}

impl std::fmt::Debug for SeriesSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesSystem")
            .field("applied_force", &self.applied_force.get())
            .field("total_displacement", &self.total_displacement.get())
            .field("spring1", &self.spring1)
            .field("spring2", &self.spring2)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn both_springs_carry_the_same_force() {
        let mut system = SeriesSystem::new(SpringConfig::series_component());
        system.set_applied_force(120.0);
        assert_eq!(system.spring1().applied_force(), 120.0);
        assert_eq!(system.spring2().applied_force(), 120.0);
    }

    #[test]
    fn effective_constant_is_harmonic_combination() {
        let mut system = SeriesSystem::new(SpringConfig::series_component());
        system.set_spring_constant1(300.0);
        system.set_spring_constant2(600.0);
        system.set_applied_force(100.0);

        let k_eff = 1.0 / (1.0 / 300.0 + 1.0 / 600.0);
        assert!(approx_eq(system.effective_spring_constant(), k_eff));
        assert!(approx_eq(
            system.applied_force() / system.total_displacement(),
            k_eff
        ));
    }

    #[test]
    fn second_spring_stays_seated() {
        let mut system = SeriesSystem::new(SpringConfig::series_component());
        assert!(approx_eq(system.spring2().left(), system.spring1().right()));

        system.set_applied_force(150.0);
        assert!(approx_eq(system.spring2().left(), system.spring1().right()));

        system.set_spring_constant1(550.0);
        assert!(approx_eq(system.spring2().left(), system.spring1().right()));
    }

    #[test]
    fn drag_reports_equivalent_force() {
        let mut system = SeriesSystem::new(SpringConfig::series_component());
        // k1 = k2 = 200 ⇒ k_eff = 100; x_total = 0.5 ⇒ F = 50.
        system.drag_to_displacement(0.5);
        assert!(approx_eq(system.applied_force(), 50.0));
        assert!(approx_eq(system.total_displacement(), 0.5));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut system = SeriesSystem::new(SpringConfig::series_component());
        system.set_applied_force(199.0);
        system.set_spring_constant2(555.0);

        system.reset();
        let once = (
            system.applied_force(),
            system.total_displacement(),
            system.spring2().left(),
        );
        system.reset();
        let twice = (
            system.applied_force(),
            system.total_displacement(),
            system.spring2().left(),
        );
        assert_eq!(once, twice);
        assert_eq!(once.0, 0.0);
    }
}
