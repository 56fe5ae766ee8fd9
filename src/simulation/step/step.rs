use rand::Rng;

use crate::systems::{shared_rotation, Motion, MotionContext};

use super::render_extract;
use super::FieldCore;
use super::PerfTimer;

/// One frame: move every particle, then repack the instance matrices.
///
/// Transform i is always written from particle i.
pub(super) fn step<R: Rng>(field: &mut FieldCore<R>, elapsed: f32) {
    let perf_on = field.perf_enabled;
    let step_timer = if perf_on { Some(PerfTimer::start()) } else { None };

    let rotation = shared_rotation(&field.config, elapsed);
    let mut wraps = 0u32;

    for (particle, slot) in field.particles.iter_mut().zip(field.transforms.iter_mut()) {
        let mut ctx = MotionContext {
            particle,
            rng: &mut field.rng,
            config: &field.config,
            elapsed,
            rotation,
        };
        let result = field.motion.update(&mut ctx);
        if result.wrapped {
            wraps += 1;
        }
        *slot = result.transform;
    }

    let extract_timer = if perf_on { Some(PerfTimer::start()) } else { None };
    render_extract::pack_instance_matrices(&field.transforms, &mut field.render.instance_matrices);

    field.frame += 1;

    if let (Some(step_timer), Some(extract_timer)) = (step_timer, extract_timer) {
        let stats = &mut field.perf_stats;
        stats.update_ms = step_timer.elapsed_ms();
        stats.extract_ms = extract_timer.elapsed_ms();
        stats.particles_updated = field.particles.len() as u32;
        stats.wraps = wraps;
        stats.frame = field.frame;
        stats.elapsed = elapsed;
    }
}
