//! Systems - per-frame particle rules and render packing

pub mod matrix;
pub mod motion;

pub use matrix::{write_instance_matrix, MATRIX_FLOATS};
pub use motion::{shared_rotation, sway_offset, Motion, MotionContext, MotionResult, RisingMotion};
