//! The introductory scene: two independent single-spring setups.

use tracing::debug;

use crate::config::SpringConfig;
use crate::single::SingleSpringSystem;

/// Two side-by-side [`SingleSpringSystem`]s for comparing spring constants.
#[derive(Debug)]
pub struct IntroModel {
    system1: SingleSpringSystem,
    system2: SingleSpringSystem,
}

impl IntroModel {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            system1: SingleSpringSystem::new(config),
            system2: SingleSpringSystem::new(config),
        }
    }

    pub fn system1(&self) -> &SingleSpringSystem {
        &self.system1
    }

    pub fn system1_mut(&mut self) -> &mut SingleSpringSystem {
        &mut self.system1
    }

    pub fn system2(&self) -> &SingleSpringSystem {
        &self.system2
    }

    pub fn system2_mut(&mut self) -> &mut SingleSpringSystem {
        &mut self.system2
    }

    /// Resets both setups. Idempotent.
    pub fn reset(&mut self) {
        self.system1.reset();
        self.system2.reset();
        debug!("intro model reset");
    }
}

impl Default for IntroModel {
    fn default() -> Self {
        Self::new(SpringConfig::single())
    }
}
