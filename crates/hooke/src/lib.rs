#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::return_self_not_must_use)]

//! # Hooke
//!
//! A quasi-static spring model for interactive teaching scenes built on
//! Hooke's law, `F = kx`.
//!
//! Hooke provides:
//! - **Spring**: a massless ideal spring whose applied force, spring
//!   constant, and displacement are always mutually consistent
//! - **RoboticArm**: a draggable gripper clamped to the spring's reach
//! - **SingleSpringSystem**: one wall-mounted spring dragged by an arm
//! - **SeriesSystem** / **ParallelSystem**: two-spring combinations with
//!   harmonic (`1/(1/k1+1/k2)`) and additive (`k1+k2`) effective constants
//! - **SystemsModel**, **IntroModel**, **EnergyModel**: the scene-level
//!   aggregates, each with an idempotent `reset`
//!
//! Every model value is an observable property (see the `observable`
//! crate): mutators clamp out-of-range inputs instead of failing, suppress
//! writes within `1e-10` of the current value, and notify subscribers
//! synchronously before returning. The single structural misuse (moving a
//! wall-mounted spring's left end) surfaces as [`SpringError`].
//!
//! ## Example
//!
//! ```rust
//! use hooke::{SingleSpringSystem, SpringConfig};
//!
//! let mut system = SingleSpringSystem::new(SpringConfig::single());
//!
//! // Pull with 10 N on the default 200 N/m spring: x = F / k = 0.05 m.
//! system.set_applied_force(10.0);
//! assert!((system.spring().displacement() - 0.05).abs() < 1e-9);
//!
//! // Drag the arm back to the same spot: the spring reports 10 N again.
//! let equilibrium_x = system.spring().equilibrium_x();
//! system.drag_arm_to(equilibrium_x + 0.05);
//! assert!((system.spring().applied_force() - 10.0).abs() < 1e-9);
//! ```

mod arm;
mod config;
mod energy;
mod error;
mod intro;
mod parallel;
mod series;
mod single;
mod spring;
mod systems;

pub use arm::RoboticArm;
pub use config::{RangeSpec, SpringConfig, SystemsConfig};
pub use energy::EnergyModel;
pub use error::SpringError;
pub use intro::IntroModel;
pub use parallel::ParallelSystem;
pub use series::SeriesSystem;
pub use single::SingleSpringSystem;
pub use spring::Spring;
pub use systems::SystemsModel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::arm::RoboticArm;
    pub use crate::config::{RangeSpec, SpringConfig, SystemsConfig};
    pub use crate::energy::EnergyModel;
    pub use crate::error::SpringError;
    pub use crate::intro::IntroModel;
    pub use crate::parallel::ParallelSystem;
    pub use crate::series::SeriesSystem;
    pub use crate::single::SingleSpringSystem;
    pub use crate::spring::Spring;
    pub use crate::systems::SystemsModel;
}
