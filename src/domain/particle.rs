use serde::Serialize;

/// 3D vector for particle placement
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }
}

/// A single rising particle.
///
/// Only `position` changes after creation; `speed`, `scale` and `phase`
/// are fixed for the particle's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    speed: f32,
    scale: f32,
    phase: f32,
}

impl Particle {
    pub fn new(position: Vec3, speed: f32, scale: f32, phase: f32) -> Self {
        Self { position, speed, scale, phase }
    }

    /// Rise per frame in world units
    #[inline]
    pub fn speed(&self) -> f32 { self.speed }

    #[inline]
    pub fn scale(&self) -> f32 { self.scale }

    /// Sway oscillation offset in radians
    #[inline]
    pub fn phase(&self) -> f32 { self.phase }
}

/// Per-instance rigid transform handed to the renderer.
///
/// `rotation` is Euler XYZ in radians. It is derived from elapsed time only,
/// so every particle in a frame carries the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Transform {
    pub translation: Vec3,
    pub scale: f32,
    pub rotation: Vec3,
}
