use wasm_bindgen::prelude::*;

/// Snapshot of the last `update` call
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    pub(super) update_ms: f64,
    pub(super) extract_ms: f64,
    pub(super) particles_updated: u32,
    pub(super) wraps: u32,
    pub(super) frame: u64,
    pub(super) elapsed: f32,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    /// Total time spent in `update`, including matrix packing
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn extract_ms(&self) -> f64 { self.extract_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_updated(&self) -> u32 { self.particles_updated }
    /// Particles that crossed the top edge this frame
    #[wasm_bindgen(getter)]
    pub fn wraps(&self) -> u32 { self.wraps }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn elapsed(&self) -> f32 { self.elapsed }
}
