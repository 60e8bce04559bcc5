//! One wall-mounted spring, dragged by a robotic arm.

use tracing::{debug, trace};

use crate::arm::RoboticArm;
use crate::config::{RangeSpec, SpringConfig};
use crate::spring::Spring;

/// A wall-mounted [`Spring`] with a [`RoboticArm`] gripping its free end.
///
/// The dependency graph is cycle-free and every write is epsilon-gated:
///
/// - authoritative edge: `arm.left → spring.displacement`
///   (`x = arm.left − equilibrium_x`),
/// - echo-back edge: `spring.right → arm.left`, applied after force or
///   spring-constant changes so the arm stays attached to the free end.
///
/// The spring's left end is immutable for the lifetime of the system;
/// [`Spring::set_left`] on it reports
/// [`SpringError::LeftEndFixed`](crate::SpringError::LeftEndFixed).
#[derive(Debug)]
pub struct SingleSpringSystem {
    spring: Spring,
    arm: RoboticArm,
}

impl SingleSpringSystem {
    /// Assembles the system: wall-mounts the spring and pins the arm's
    /// travel to the spring's reachable free-end positions.
    pub fn new(config: SpringConfig) -> Self {
        let spring = Spring::wall_mounted(config);
        let x_range = spring.displacement_range();
        let equilibrium_x = spring.equilibrium_x();
        let arm_range = RangeSpec::new(
            equilibrium_x + x_range.min,
            equilibrium_x + x_range.max,
            spring.right(),
        );
        let arm = RoboticArm::new(arm_range);
        Self { spring, arm }
    }

    /// Read-only access to the spring (observation and derived values).
    ///
    /// Mutation goes through the system so the arm and spring stay coupled.
    pub fn spring(&self) -> &Spring {
        &self.spring
    }

    /// Read-only access to the arm.
    pub fn arm(&self) -> &RoboticArm {
        &self.arm
    }

    /// Applies a force to the spring; the arm follows the free end.
    pub fn set_applied_force(&mut self, force: f64) {
        if self.spring.set_applied_force(force) {
            self.arm.set_left(self.spring.right());
        }
    }

    /// Changes the spring constant (applied force held constant); the arm
    /// follows the repositioned free end.
    pub fn set_spring_constant(&mut self, spring_constant: f64) {
        if self.spring.set_spring_constant(spring_constant) {
            self.arm.set_left(self.spring.right());
        }
    }

    /// Drags the arm to `left`, clamped to its travel range; the spring's
    /// displacement (and hence applied force) follows the gripper.
    pub fn drag_arm_to(&mut self, left: f64) {
        self.arm.set_left(left);
        let x = self.arm.left() - self.spring.equilibrium_x();
        if self.spring.set_displacement(x) {
            // The spring may have settled short of the gripper when the
            // force clamp bites; echo the final position back to the arm.
            self.arm.set_left(self.spring.right());
        }
        trace!(
            arm_left = self.arm.left(),
            displacement = self.spring.displacement(),
            "arm dragged"
        );
    }

    /// Sets the spring displacement directly (the energy scene's control);
    /// the arm follows.
    pub fn set_displacement(&mut self, displacement: f64) {
        if self.spring.set_displacement(displacement) {
            self.arm.set_left(self.spring.right());
        }
    }

    /// Restores spring and arm to construction-time defaults. Idempotent.
    pub fn reset(&mut self) {
        self.spring.reset();
        self.arm.reset();
        debug!("single spring system reset");
    }
}
