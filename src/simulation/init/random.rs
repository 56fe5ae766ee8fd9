use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for a given seed
pub(super) fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Non-reproducible seed for normal page runs.
///
/// wasm32-unknown-unknown has no OS entropy without extra glue, so mix the
/// page's `Math.random()` with the wall clock instead.
#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = js_sys::Date::now() as u64;
    (hi << 32) ^ lo
}

#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x9E37_79B9_7F4A_7C15)
}
