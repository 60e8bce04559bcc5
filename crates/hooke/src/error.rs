//! Model errors.
//!
//! Range violations are never errors in this model: forces, spring
//! constants, and displacements are clamped to their configured bounds so a
//! user can lean on a slider without consequence. The only error here marks
//! a structural misuse that indicates a bug in system assembly.

use thiserror::Error;

/// Fatal precondition violations on a [`Spring`](crate::Spring).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpringError {
    /// The spring's left end is mounted to the wall; moving it is a
    /// programming error, not a user action to clamp.
    #[error("left end is fixed to the wall and cannot be moved to {attempted}")]
    LeftEndFixed {
        /// Position the caller tried to move the fixed end to.
        attempted: f64,
    },
}
