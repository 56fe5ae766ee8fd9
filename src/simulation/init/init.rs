use rand::Rng;

use crate::domain::{FieldConfig, Particle, Transform, Vec3};
use crate::systems::{RisingMotion, MATRIX_FLOATS};

use super::perf_stats::FrameStats;
use super::{FieldCore, RenderBuffers};

pub(super) fn create_field_core<R: Rng>(config: FieldConfig, rng: R) -> FieldCore<R> {
    let mut field = FieldCore {
        config,
        motion: RisingMotion,
        particles: Vec::new(),
        transforms: Vec::new(),
        render: RenderBuffers {
            instance_matrices: Vec::new(),
        },
        rng,
        frame: 0,
        perf_enabled: false,
        perf_stats: FrameStats::default(),
    };
    populate(&mut field);
    field
}

/// (Re)build the pool, transforms and matrix buffer from the current config.
/// Slot counts are fixed here and never touched by `step`.
pub(super) fn populate<R: Rng>(field: &mut FieldCore<R>) {
    let size = field.config.pool_size();

    field.particles.clear();
    field.particles.reserve_exact(size);
    for _ in 0..size {
        let particle = spawn_particle(&field.config, &mut field.rng);
        field.particles.push(particle);
    }

    field.transforms.clear();
    field.transforms.resize(size, Transform::default());

    field.render.instance_matrices.clear();
    field.render.instance_matrices.resize(size * MATRIX_FLOATS, 0.0);

    field.frame = 0;
    field.perf_stats.reset();
}

/// Draw one particle. Order of draws is part of seeded reproducibility.
pub(super) fn spawn_particle<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Particle {
    let position = Vec3::new(
        config.spawn_x.sample(rng),
        config.spawn_y.sample(rng),
        config.spawn_z.sample(rng),
    );
    let speed = config.speed.sample(rng);
    let scale = config.scale.sample(rng);
    let phase = config.phase.sample(rng);
    Particle::new(position, speed, scale, phase)
}
