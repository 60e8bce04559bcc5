//! The two-scene systems model: one series system and one parallel system.

use tracing::debug;

use crate::config::SystemsConfig;
use crate::parallel::ParallelSystem;
use crate::series::SeriesSystem;

/// Top-level aggregate of a [`SeriesSystem`] and a [`ParallelSystem`].
///
/// The two scenes are independent and non-interacting; they only share a
/// `reset`.
#[derive(Debug)]
pub struct SystemsModel {
    series: SeriesSystem,
    parallel: ParallelSystem,
}

impl SystemsModel {
    pub fn new(config: SystemsConfig) -> Self {
        Self {
            series: SeriesSystem::new(config.series),
            parallel: ParallelSystem::new(config.parallel),
        }
    }

    pub fn series(&self) -> &SeriesSystem {
        &self.series
    }

    pub fn series_mut(&mut self) -> &mut SeriesSystem {
        &mut self.series
    }

    pub fn parallel(&self) -> &ParallelSystem {
        &self.parallel
    }

    pub fn parallel_mut(&mut self) -> &mut ParallelSystem {
        &mut self.parallel
    }

    /// Resets both scenes. Idempotent.
    pub fn reset(&mut self) {
        self.series.reset();
        self.parallel.reset();
        debug!("systems model reset");
    }
}

impl Default for SystemsModel {
    fn default() -> Self {
        Self::new(SystemsConfig::default())
    }
}
