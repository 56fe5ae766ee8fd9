//! Rising motion: climb, sway, wrap
//!
//! Each frame a particle climbs by its own speed, sways sideways on a sine of
//! elapsed time (render only, stored x untouched) and wraps from the top edge
//! back to the bottom edge with a fresh x.

use rand::Rng;

use crate::domain::{FieldConfig, Particle, Transform, Vec3};

/// Per-particle update context
pub struct MotionContext<'a, R: Rng + ?Sized> {
    pub particle: &'a mut Particle,
    pub rng: &'a mut R,
    pub config: &'a FieldConfig,
    pub elapsed: f32,
    /// Shared rotation for this frame, see [`shared_rotation`]
    pub rotation: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionResult {
    pub transform: Transform,
    pub wrapped: bool,
}

/// Motion rule applied to every particle in the pool
pub trait Motion {
    fn update<R: Rng + ?Sized>(&self, ctx: &mut MotionContext<'_, R>) -> MotionResult;
}

/// The awards backdrop rule
#[derive(Clone, Copy, Debug, Default)]
pub struct RisingMotion;

impl Motion for RisingMotion {
    fn update<R: Rng + ?Sized>(&self, ctx: &mut MotionContext<'_, R>) -> MotionResult {
        let config = ctx.config;
        let p = &mut *ctx.particle;

        p.position.y += p.speed();

        let sway = sway_offset(config, ctx.elapsed, p.phase());

        let wrapped = p.position.y > config.wrap_top;
        if wrapped {
            p.position.y = config.wrap_bottom;
            p.position.x = config.spawn_x.sample(&mut *ctx.rng);
        }

        MotionResult {
            transform: Transform {
                translation: Vec3::new(p.position.x + sway, p.position.y, p.position.z),
                scale: p.scale(),
                rotation: ctx.rotation,
            },
            wrapped,
        }
    }
}

/// Lateral render offset; never written back into the particle
#[inline]
pub fn sway_offset(config: &FieldConfig, elapsed: f32, phase: f32) -> f32 {
    (elapsed * config.sway_frequency + phase).sin() * config.sway_amplitude
}

/// Rotation shared by every particle at `elapsed`
#[inline]
pub fn shared_rotation(config: &FieldConfig, elapsed: f32) -> Vec3 {
    Vec3::new(elapsed * config.spin_x, elapsed * config.spin_y, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn step(particle: &mut Particle, elapsed: f32, rng: &mut ChaCha8Rng) -> MotionResult {
        let config = FieldConfig::default();
        let mut ctx = MotionContext {
            particle,
            rng,
            config: &config,
            elapsed,
            rotation: shared_rotation(&config, elapsed),
        };
        RisingMotion.update(&mut ctx)
    }

    #[test]
    fn particle_climbs_by_its_speed() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut p = Particle::new(Vec3::new(1.0, 0.0, -2.0), 0.04, 1.0, 0.0);

        let out = step(&mut p, 0.0, &mut rng);

        assert!((p.position.y - 0.04).abs() < 1e-6);
        assert!(!out.wrapped);
        assert_eq!(out.transform.translation.y, p.position.y);
        assert_eq!(out.transform.translation.z, -2.0);
    }

    #[test]
    fn sway_is_render_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let phase = std::f32::consts::FRAC_PI_2;
        let mut p = Particle::new(Vec3::new(3.0, 0.0, 0.0), 0.02, 1.0, phase);

        let out = step(&mut p, 0.0, &mut rng);

        // sin(pi/2) * 0.02
        assert!((out.transform.translation.x - 3.02).abs() < 1e-6);
        assert_eq!(p.position.x, 3.0);
    }

    #[test]
    fn crossing_the_top_wraps_to_bottom_with_new_x() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut p = Particle::new(Vec3::new(40.0, 11.99, 0.0), 0.05, 1.0, 0.0);

        let out = step(&mut p, 1.0, &mut rng);

        assert!(out.wrapped);
        assert_eq!(p.position.y, -12.0);
        assert!(p.position.x >= -12.5 && p.position.x <= 12.5);
    }

    #[test]
    fn exactly_at_top_does_not_wrap() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut p = Particle::new(Vec3::new(0.0, 11.5, 0.0), 0.5, 1.0, 0.0);

        let out = step(&mut p, 0.0, &mut rng);

        assert!(!out.wrapped);
        assert_eq!(p.position.y, 12.0);
    }

    #[test]
    fn rotation_depends_on_time_only() {
        let config = FieldConfig::default();
        let r = shared_rotation(&config, 10.0);
        assert!((r.x - 2.0).abs() < 1e-6);
        assert!((r.y - 3.0).abs() < 1e-6);
        assert_eq!(r.z, 0.0);
    }
}
