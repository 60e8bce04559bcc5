//! The robotic arm that grips and drags a spring's free end.

use observable::{Property, Subscription};

use crate::config::RangeSpec;

/// A draggable gripper pinned to a horizontal travel range.
///
/// The owning system derives the range from its spring's displacement
/// bounds. Every position update is clamped and applied synchronously, one
/// input sample at a time; there is no easing and no batching.
#[derive(Debug)]
pub struct RoboticArm {
    left: Property,
    range: RangeSpec,
}

impl RoboticArm {
    /// Creates an arm with the gripper at the range's default position.
    pub fn new(range: RangeSpec) -> Self {
        Self {
            left: Property::new(range.default),
            range,
        }
    }

    /// Gripper position, m.
    pub fn left(&self) -> f64 {
        self.left.get()
    }

    /// Permitted travel range of the gripper.
    pub fn range(&self) -> RangeSpec {
        self.range
    }

    /// Moves the gripper, clamped into the travel range.
    ///
    /// Returns whether the position actually changed.
    pub fn set_left(&mut self, left: f64) -> bool {
        self.left.set(self.range.clamp(left))
    }

    pub fn observe_left(&self, f: impl FnMut(f64, f64) + 'static) -> Subscription {
        self.left.subscribe(f)
    }

    /// Returns the gripper to the range default. Idempotent.
    pub fn reset(&mut self) {
        self.left.set(self.range.default);
    }
}
