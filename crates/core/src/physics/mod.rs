//! Projection calculators
//!
//! Each calculator is a pure function that validates its own inputs and
//! returns a typed result. None of them depends on another's output.

pub mod distance;
pub mod fuel_consumption;
pub mod kinematics;

pub use distance::compute_new_distance;
pub use fuel_consumption::compute_remaining_fuel;
pub use kinematics::compute_new_velocity;
