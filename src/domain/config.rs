use std::f32::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::FieldError;

pub const DEFAULT_PARTICLE_COUNT: i32 = 80;
/// Upper bound on pool size; keeps the matrix buffer well inside wasm32 memory
pub const MAX_PARTICLE_COUNT: i32 = 100_000;

/// Sampling interval `[min, max)`. A span with `min == max` always yields `min`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpanF32 {
    pub min: f32,
    pub max: f32,
}

impl SpanF32 {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    fn check(&self, name: &str) -> Result<(), FieldError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(FieldError::InvalidConfig(format!("{} must be finite", name)));
        }
        if self.min > self.max {
            return Err(FieldError::InvalidConfig(format!(
                "{} min ({}) exceeds max ({})",
                name, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Tunables for the rising particle field.
///
/// Defaults reproduce the awards page backdrop. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Pool size. Zero or negative means an empty pool; values above
    /// `MAX_PARTICLE_COUNT` are rejected by `validate` and clamped otherwise.
    pub count: i32,
    pub spawn_x: SpanF32,
    pub spawn_y: SpanF32,
    pub spawn_z: SpanF32,
    pub speed: SpanF32,
    pub scale: SpanF32,
    pub phase: SpanF32,
    /// Particles above this height wrap to `wrap_bottom`
    pub wrap_top: f32,
    pub wrap_bottom: f32,
    pub sway_frequency: f32,
    pub sway_amplitude: f32,
    /// Shared spin about X in radians per second of elapsed time
    pub spin_x: f32,
    pub spin_y: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            spawn_x: SpanF32::new(-12.5, 12.5),
            spawn_y: SpanF32::new(-15.0, 5.0),
            spawn_z: SpanF32::new(-7.0, 3.0),
            speed: SpanF32::new(0.02, 0.06),
            scale: SpanF32::new(0.5, 1.3),
            phase: SpanF32::new(0.0, TAU),
            wrap_top: 12.0,
            wrap_bottom: -12.0,
            sway_frequency: 0.5,
            sway_amplitude: 0.02,
            spin_x: 0.2,
            spin_y: 0.3,
        }
    }
}

impl FieldConfig {
    pub fn with_count(count: i32) -> Self {
        Self { count, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain data with finite floats; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Number of particles the pool will hold, clamped to `[0, MAX_PARTICLE_COUNT]`
    pub fn pool_size(&self) -> usize {
        self.count.clamp(0, MAX_PARTICLE_COUNT) as usize
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.count > MAX_PARTICLE_COUNT {
            return Err(FieldError::InvalidConfig(format!(
                "count ({}) exceeds {}",
                self.count, MAX_PARTICLE_COUNT
            )));
        }
        self.spawn_x.check("spawn_x")?;
        self.spawn_y.check("spawn_y")?;
        self.spawn_z.check("spawn_z")?;
        self.speed.check("speed")?;
        self.scale.check("scale")?;
        self.phase.check("phase")?;

        if self.speed.min <= 0.0 {
            return Err(FieldError::InvalidConfig("speed must be positive".into()));
        }
        if self.scale.min <= 0.0 {
            return Err(FieldError::InvalidConfig("scale must be positive".into()));
        }

        let scalars = [
            ("wrap_top", self.wrap_top),
            ("wrap_bottom", self.wrap_bottom),
            ("sway_frequency", self.sway_frequency),
            ("sway_amplitude", self.sway_amplitude),
            ("spin_x", self.spin_x),
            ("spin_y", self.spin_y),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(FieldError::InvalidConfig(format!("{} must be finite", name)));
            }
        }

        if self.wrap_bottom >= self.wrap_top {
            return Err(FieldError::InvalidConfig(format!(
                "wrap_bottom ({}) must be below wrap_top ({})",
                self.wrap_bottom, self.wrap_top
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = FieldConfig::from_json("{}").expect("empty object should parse");
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = FieldConfig::from_json(r#"{"count": 12, "wrap_top": 20.0}"#).unwrap();
        assert_eq!(config.count, 12);
        assert_eq!(config.wrap_top, 20.0);
        assert_eq!(config.speed, FieldConfig::default().speed);
    }

    #[test]
    fn inverted_span_is_rejected() {
        let err = FieldConfig::from_json(r#"{"scale": {"min": 2.0, "max": 1.0}}"#).unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfig(_)));
    }

    #[test]
    fn wrap_bounds_must_be_ordered() {
        let config = FieldConfig { wrap_bottom: 5.0, wrap_top: 5.0, ..FieldConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        let config = FieldConfig { speed: SpanF32::new(0.0, 0.1), ..FieldConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_reports_json_error() {
        let err = FieldConfig::from_json("{count: }").unwrap_err();
        assert!(matches!(err, FieldError::Json(_)));
    }

    #[test]
    fn negative_count_is_an_empty_pool() {
        assert_eq!(FieldConfig::with_count(-3).pool_size(), 0);
        assert_eq!(FieldConfig::default().pool_size(), 80);
    }

    #[test]
    fn oversized_count_is_rejected() {
        let err = FieldConfig::from_json(r#"{"count": 2147483647}"#).unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfig(_)));

        let at_cap = format!(r#"{{"count": {}}}"#, MAX_PARTICLE_COUNT);
        assert!(FieldConfig::from_json(&at_cap).is_ok());
    }

    #[test]
    fn unvalidated_count_is_clamped_to_the_cap() {
        assert_eq!(FieldConfig::with_count(i32::MAX).pool_size(), MAX_PARTICLE_COUNT as usize);
    }

    #[test]
    fn span_contains_its_closed_bounds() {
        let span = SpanF32::new(-1.0, 1.0);
        assert!(span.contains(-1.0));
        assert!(span.contains(1.0));
        assert!(!span.contains(1.01));
    }

    #[test]
    fn degenerate_span_samples_its_single_value() {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
        let span = SpanF32::new(0.25, 0.25);
        assert_eq!(span.sample(&mut rng), 0.25);
    }
}
