//! Domain types: particles, transforms and field configuration

pub mod config;
pub mod error;
pub mod particle;

pub use config::{FieldConfig, SpanF32, DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT};
pub use error::FieldError;
pub use particle::{Particle, Transform, Vec3};
