use crate::delaunay::error::{Result, TriangulationError};
use serde::{Deserialize, Serialize};

/// Configuration for super-triangle construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangulatorConfig {
    /// Half-width of the super-triangle in units of the bounding-box extent.
    /// The default of 100 gives a triangle 200 × extent wide.
    /// Must be at least 2 so that every input point lies strictly inside.
    pub super_triangle_scale: f64,

    /// Extent used when all input points coincide (zero-size bounding box)
    pub min_extent: f64,
}

impl Default for TriangulatorConfig {
    fn default() -> Self {
        Self {
            super_triangle_scale: 100.0,
            min_extent: 1.0,
        }
    }
}

impl TriangulatorConfig {
    /// Create a new configuration with custom parameters
    pub fn new(super_triangle_scale: f64, min_extent: f64) -> Self {
        Self {
            super_triangle_scale,
            min_extent,
        }
    }

    /// Check that the parameters describe a usable super-triangle
    pub fn validate(&self) -> Result<()> {
        if !self.super_triangle_scale.is_finite() || self.super_triangle_scale < 2.0 {
            return Err(TriangulationError::InvalidConfig(
                "super_triangle_scale must be finite and at least 2",
            ));
        }
        if !self.min_extent.is_finite() || self.min_extent <= 0.0 {
            return Err(TriangulationError::InvalidConfig(
                "min_extent must be finite and positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(TriangulatorConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_small_scale_and_bad_extent() {
        assert!(TriangulatorConfig::new(1.0, 1.0).validate().is_err());
        assert!(TriangulatorConfig::new(f64::NAN, 1.0).validate().is_err());
        assert!(TriangulatorConfig::new(100.0, 0.0).validate().is_err());
        assert!(TriangulatorConfig::new(100.0, f64::INFINITY).validate().is_err());
    }
}
