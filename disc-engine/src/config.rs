use crate::Region;

use serde::Deserialize;
use thiserror::Error;

/// Tunables of a [`World`](crate::World).
///
/// Every field has a default, so a partial YAML/JSON document only needs to
/// name what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Region area that accounts for one body of the population
    pub area_per_body: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub pointer_radius: f64,
    /// Upper bound of each color channel (red, green, blue), in 0..=1
    pub color_weights: [f32; 3],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            area_per_body: 2500.,
            min_radius: 10.,
            max_radius: 30.,
            pointer_radius: 30.,
            color_weights: [1., 1., 1.],
        }
    }
}

/// Smallest accepted `area_per_body`, keeps the population bounded by the
/// region's area
pub const MIN_AREA_PER_BODY: f64 = 1.;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("area per body must be finite and at least 1 (got {0})")]
    InvalidAreaPerBody(f64),
    #[error("radius range {min}..{max} is invalid, expected 0 < min <= max")]
    InvalidRadiusRange { min: f64, max: f64 },
    #[error("pointer radius must not be negative (got {0})")]
    InvalidPointerRadius(f64),
    #[error("color weights must be within 0..=1 (got {0:?})")]
    InvalidColorWeights([f32; 3]),
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.area_per_body.is_finite() && self.area_per_body >= MIN_AREA_PER_BODY) {
            return Err(ConfigError::InvalidAreaPerBody(self.area_per_body));
        }
        if !(self.min_radius > 0. && self.min_radius <= self.max_radius && self.max_radius.is_finite()) {
            return Err(ConfigError::InvalidRadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !(self.pointer_radius >= 0.) {
            return Err(ConfigError::InvalidPointerRadius(self.pointer_radius));
        }
        if !self.color_weights.iter().all(|w| (0. ..=1.).contains(w)) {
            return Err(ConfigError::InvalidColorWeights(self.color_weights));
        }
        Ok(())
    }

    /// Number of bodies the region should hold, one per whole
    /// `area_per_body` of area.
    pub fn target_population(&self, region: Region) -> usize {
        // `as` saturates, NaN and negatives give 0
        (region.area() / self.area_per_body).floor() as usize
    }
}
