//! Spatial index configuration.
//!
//! All values are supplied once, at `SpatialIndex` construction. Only the
//! hex radius can change afterwards (`SpatialIndex::set_hex_radius`), and
//! doing so invalidates every level.

use crate::error::Result;
use crate::cull_bail;

/// Construction parameters for a `SpatialIndex`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialIndexConfig {
    /// Hex tile circumradius in world units
    pub hex_radius: f32,
    /// Bucket cell width of the finest level, in multiples of `hex_radius`
    pub base_bucket_size: u32,
    /// Number of hierarchy levels (finest first)
    pub level_count: usize,
    /// Bucket size multiplier between consecutive levels
    pub growth_factor: u32,
}

impl Default for SpatialIndexConfig {
    fn default() -> Self {
        Self {
            hex_radius: 1.0,
            base_bucket_size: 16,
            level_count: 3,
            growth_factor: 2,
        }
    }
}

impl SpatialIndexConfig {
    /// Reject configurations that cannot produce a strictly increasing
    /// level hierarchy or a usable grid.
    pub fn validate(&self) -> Result<()> {
        validate_hex_radius(self.hex_radius)?;
        if self.base_bucket_size == 0 {
            cull_bail!("hexcull::SpatialIndexConfig", InvalidConfig,
                "base_bucket_size must be at least 1");
        }
        if self.level_count == 0 {
            cull_bail!("hexcull::SpatialIndexConfig", InvalidConfig,
                "level_count must be at least 1");
        }
        if self.growth_factor < 2 {
            cull_bail!("hexcull::SpatialIndexConfig", InvalidConfig,
                "growth_factor must be at least 2 (got {})", self.growth_factor);
        }
        if self.bucket_size_checked(self.level_count - 1).is_none() {
            cull_bail!("hexcull::SpatialIndexConfig", InvalidConfig,
                "bucket size overflows at level {}", self.level_count - 1);
        }
        Ok(())
    }

    /// Bucket size of `level` (0 = finest): `base_bucket_size * growth_factor^level`.
    ///
    /// Saturates on overflow; `validate` rejects such configurations.
    pub fn bucket_size(&self, level: usize) -> u32 {
        self.bucket_size_checked(level).unwrap_or(u32::MAX)
    }

    fn bucket_size_checked(&self, level: usize) -> Option<u32> {
        let exponent = u32::try_from(level).ok()?;
        self.growth_factor
            .checked_pow(exponent)
            .and_then(|scale| scale.checked_mul(self.base_bucket_size))
    }
}

pub(crate) fn validate_hex_radius(hex_radius: f32) -> Result<()> {
    if !hex_radius.is_finite() || hex_radius <= 0.0 {
        cull_bail!("hexcull::SpatialIndexConfig", InvalidConfig,
            "hex_radius must be finite and positive (got {})", hex_radius);
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
