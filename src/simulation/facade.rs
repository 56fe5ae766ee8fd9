use wasm_bindgen::prelude::*;

use crate::domain::{DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT};

use super::perf_stats::FrameStats;
use super::random::entropy_seed;
use super::FieldCore;

/// JS handle to a particle field.
///
/// Typical frame loop on the host side:
/// ```js
/// field.update(clock.elapsedTime);
/// const m = new Float32Array(memory.buffer, field.instance_matrices_ptr(), field.instance_matrices_len());
/// mesh.instanceMatrix.array.set(m);
/// mesh.instanceMatrix.needsUpdate = true;
/// ```
#[wasm_bindgen]
pub struct ParticleField {
    core: FieldCore,
}

#[wasm_bindgen]
impl ParticleField {
    /// Create a field of `count` particles with a non-reproducible seed.
    /// Omitting `count` gives the default backdrop size.
    #[wasm_bindgen(constructor)]
    pub fn new(count: Option<i32>) -> Self {
        let count = count.unwrap_or(DEFAULT_PARTICLE_COUNT);
        warn_on_count(count);
        Self {
            core: FieldCore::from_seed(count, entropy_seed()),
        }
    }

    /// Reproducible field for screenshots and tests
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(count: i32, seed: u32) -> Self {
        warn_on_count(count);
        Self {
            core: FieldCore::from_seed(count, seed as u64),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String, seed: Option<u32>) -> Result<ParticleField, JsValue> {
        let seed = seed.map(u64::from).unwrap_or_else(entropy_seed);
        let core = FieldCore::from_config_json(&json, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        console_log!("ParticleField: loaded config with {} particles", core.particle_count());
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Advance one frame; `elapsed` is the host clock in seconds since start
    pub fn update(&mut self, elapsed: f32) {
        self.core.update(elapsed);
    }

    /// Rebuild the pool (view remount)
    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn set_count(&mut self, count: i32) {
        warn_on_count(count);
        self.core.set_count(count);
        console_log!("ParticleField: rebuilt with {} particles", self.core.particle_count());
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> FrameStats {
        self.core.perf_stats()
    }

    /// Get pointer to instance matrices (16 floats per particle, column-major)
    pub fn instance_matrices_ptr(&self) -> *const f32 {
        self.core.instance_matrices_ptr()
    }

    pub fn instance_matrices_len(&self) -> usize {
        self.core.instance_matrices_len()
    }

    pub fn instance_matrices_byte_len(&self) -> usize {
        self.core.instance_matrices_byte_len()
    }

    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}

/// Console message for a count that won't give the requested pool, if any
pub(super) fn count_warning(count: i32) -> Option<String> {
    if count <= 0 {
        Some(format!("ParticleField: count {} gives an empty field", count))
    } else if count > MAX_PARTICLE_COUNT {
        Some(format!(
            "ParticleField: count {} clamped to {}",
            count, MAX_PARTICLE_COUNT
        ))
    } else {
        None
    }
}

fn warn_on_count(count: i32) {
    if let Some(msg) = count_warning(count) {
        console_warn!("{}", msg);
    }
}
