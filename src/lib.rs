//! Backdrop Engine - rising particle field for the awards page, in WASM
//!
//! The page's three.js scene owns the clock and the instanced sphere mesh;
//! this crate owns the particle pool and produces one transform per particle
//! per frame.
//!
//! Layout:
//! - core/       - Console logging
//! - domain/     - Particle, transform and config types
//! - systems/    - Motion rule and matrix packing
//! - simulation/ - FieldCore orchestration and the wasm facade

// Macros must be declared before the modules that use them
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Backdrop engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{FieldConfig, FieldError, Particle, SpanF32, Transform, Vec3};
pub use simulation::{FieldCore, FrameStats, ParticleField};

/// Default pool size, for JS callers that size their instanced mesh up front
#[wasm_bindgen]
pub fn default_particle_count() -> i32 { domain::DEFAULT_PARTICLE_COUNT }

/// Floats per instance matrix
#[wasm_bindgen]
pub fn matrix_floats() -> usize { systems::MATRIX_FLOATS }
