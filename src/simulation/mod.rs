//! Field - rising particle simulation
//!
//! FieldCore owns the particle pool and steps it once per rendered frame.
//! The scene host supplies elapsed time; FieldCore hands back one transform
//! per particle and a packed instance matrix buffer, slot i always being
//! particle i.
//!
//! Motion rules live in systems/, tunables in domain/config.rs.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::domain::{FieldConfig, FieldError, Particle, Transform};
use crate::systems::RisingMotion;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::ParticleField;
pub use perf_stats::FrameStats;
pub use random::entropy_seed;

use perf_timer::PerfTimer;

/// Buffers read by the scene host after each step
struct RenderBuffers {
    /// 16 floats per particle, column-major
    instance_matrices: Vec<f32>,
}

/// The particle field
pub struct FieldCore<R = ChaCha8Rng> {
    config: FieldConfig,
    motion: RisingMotion,
    particles: Vec<Particle>,
    transforms: Vec<Transform>,
    render: RenderBuffers,
    rng: R,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: FrameStats,
}

impl FieldCore<ChaCha8Rng> {
    /// Default field of `count` particles, reproducible from `seed`
    pub fn from_seed(count: i32, seed: u64) -> Self {
        Self::new(count, random::seeded(seed))
    }

    /// Field from JSON config, reproducible from `seed`
    pub fn from_config_json(json: &str, seed: u64) -> Result<Self, FieldError> {
        let config = FieldConfig::from_json(json)?;
        Ok(Self::with_config(config, random::seeded(seed)))
    }
}

impl<R: Rng> FieldCore<R> {
    /// Create a default field of `count` particles drawing from `rng`.
    /// A non-positive count gives an empty pool.
    pub fn new(count: i32, rng: R) -> Self {
        init::create_field_core(FieldConfig::with_count(count), rng)
    }

    pub fn with_config(config: FieldConfig, rng: R) -> Self {
        init::create_field_core(config, rng)
    }

    pub fn config(&self) -> &FieldConfig { &self.config }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    /// Transforms emitted by the most recent update (zeroed before the first)
    pub fn transforms(&self) -> &[Transform] { &self.transforms }

    /// Advance every particle one frame at `elapsed` seconds since start
    pub fn update(&mut self, elapsed: f32) -> &[Transform] {
        step::step(self, elapsed);
        &self.transforms
    }

    /// Rebuild the pool with fresh draws from the same random stream
    pub fn reset(&mut self) {
        settings::reset(self);
    }

    /// Rebuild the pool with a different size
    pub fn set_count(&mut self, count: i32) {
        settings::set_count(self, count);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> FrameStats {
        settings::get_perf_stats(self)
    }

    /// Packed instance matrices, 16 floats per particle
    pub fn instance_matrices(&self) -> &[f32] {
        &self.render.instance_matrices
    }

    /// Get pointer to instance matrices (for JS `Float32Array` view)
    pub fn instance_matrices_ptr(&self) -> *const f32 {
        self.render.instance_matrices.as_ptr()
    }

    pub fn instance_matrices_len(&self) -> usize {
        self.render.instance_matrices.len()
    }

    pub fn instance_matrices_byte_len(&self) -> usize {
        self.render.instance_matrices.len() * std::mem::size_of::<f32>()
    }

    /// Current transforms as JSON (debug aid)
    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
