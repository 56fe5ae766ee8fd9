//! Browser-side checks: `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use backdrop_engine::ParticleField;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn init_and_update_in_browser() {
    backdrop_engine::init();
    let mut field = ParticleField::new(Some(80));
    field.enable_perf_metrics(true);
    field.update(0.016);
    assert_eq!(field.count(), 80);
    assert!(field.get_perf_stats().update_ms() >= 0.0);
}

#[wasm_bindgen_test]
fn bad_config_surfaces_as_js_error() {
    let err = ParticleField::from_config_json("{\"wrap_top\": -99}".to_string(), None);
    assert!(err.is_err());
}
