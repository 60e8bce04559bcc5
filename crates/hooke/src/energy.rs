//! The energy scene: a displacement-driven single spring with an energy
//! readout.

use tracing::debug;

use crate::config::SpringConfig;
use crate::single::SingleSpringSystem;

/// A [`SingleSpringSystem`] driven by displacement rather than force,
/// exposing the elastic potential energy `½kx²`.
#[derive(Debug)]
pub struct EnergyModel {
    system: SingleSpringSystem,
}

impl EnergyModel {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            system: SingleSpringSystem::new(config),
        }
    }

    pub fn system(&self) -> &SingleSpringSystem {
        &self.system
    }

    /// Sets the spring displacement directly; force and energy follow.
    pub fn set_displacement(&mut self, displacement: f64) {
        self.system.set_displacement(displacement);
    }

    /// Changes the spring constant (applied force held constant).
    pub fn set_spring_constant(&mut self, spring_constant: f64) {
        self.system.set_spring_constant(spring_constant);
    }

    /// Drags the arm; equivalent to setting the corresponding displacement.
    pub fn drag_arm_to(&mut self, left: f64) {
        self.system.drag_arm_to(left);
    }

    /// Elastic potential energy currently stored, J.
    pub fn potential_energy(&self) -> f64 {
        self.system.spring().potential_energy()
    }

    /// Resets the scene. Idempotent.
    pub fn reset(&mut self) {
        self.system.reset();
        debug!("energy model reset");
    }
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self::new(SpringConfig::energy())
    }
}
