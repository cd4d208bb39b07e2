/// SpatialIndex: multi-resolution bucket grids over the world's tiles.
///
/// Every tile is inserted into every level, one bucket per level. The
/// index never owns tiles; it stores `TileRef` handles and positions
/// derived from them at rebuild time.
///
/// Lifecycle: create once per world, `rebuild` whenever the tile set
/// changes, query any number of times per frame. Until the first rebuild,
/// and after any invalidation, every query yields nothing.

use glam::Vec3;
use crate::config::{self, SpatialIndexConfig};
use crate::error::Result;
use crate::hex::TileRef;
use crate::{cull_debug, cull_info, cull_trace};
use super::level::Level;

#[derive(Debug, Clone)]
pub struct SpatialIndex {
    config: SpatialIndexConfig,
    /// Finest level first
    levels: Vec<Level>,
    /// Tiles supplied to the last rebuild
    tile_count: usize,
    needs_rebuild: bool,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        let config = SpatialIndexConfig::default();
        Self {
            levels: Self::make_levels(&config),
            config,
            tile_count: 0,
            needs_rebuild: true,
        }
    }
}

impl SpatialIndex {
    /// Create an empty index. It needs a `rebuild` before answering queries.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if `config` fails validation.
    pub fn new(config: SpatialIndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            levels: Self::make_levels(&config),
            config,
            tile_count: 0,
            needs_rebuild: true,
        })
    }

    fn make_levels(config: &SpatialIndexConfig) -> Vec<Level> {
        (0..config.level_count)
            .map(|level| Level::new(config.bucket_size(level), config.hex_radius))
            .collect()
    }

    // ===== CONFIGURATION =====

    pub fn config(&self) -> &SpatialIndexConfig {
        &self.config
    }

    pub fn hex_radius(&self) -> f32 {
        self.config.hex_radius
    }

    /// Change the hex radius.
    ///
    /// Any change discards every level; the index must be rebuilt.
    pub fn set_hex_radius(&mut self, hex_radius: f32) -> Result<()> {
        config::validate_hex_radius(hex_radius)?;
        if hex_radius == self.config.hex_radius {
            return Ok(());
        }

        cull_info!("hexcull::SpatialIndex", "Hex radius changed {} -> {}, rebuild required",
            self.config.hex_radius, hex_radius);

        self.config.hex_radius = hex_radius;
        self.levels = Self::make_levels(&self.config);
        self.tile_count = 0;
        self.needs_rebuild = true;
        Ok(())
    }

    // ===== STATE =====

    pub fn needs_rebuild(&self) -> bool {
        self.needs_rebuild
    }

    /// Mark the index stale (tile set changed). Queries return nothing
    /// until the next `rebuild`.
    pub fn invalidate(&mut self) {
        self.needs_rebuild = true;
    }

    /// Rebuilt and non-empty hierarchy.
    pub fn is_ready(&self) -> bool {
        !self.needs_rebuild && !self.levels.is_empty()
    }

    /// Number of tiles supplied to the last rebuild.
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn finest_level(&self) -> Option<&Level> {
        self.levels.first()
    }

    pub fn coarsest_level(&self) -> Option<&Level> {
        self.levels.last()
    }

    // ===== REBUILD =====

    /// Replace the index contents with `tiles`.
    ///
    /// Clears every level, inserts each tile into every level, then
    /// recomputes all bucket bounds in one pass.
    pub fn rebuild(&mut self, tiles: &[TileRef]) {
        let hex_radius = self.config.hex_radius;

        for level in &mut self.levels {
            level.clear();
        }

        for tile in tiles {
            let position = tile.world_position(hex_radius);
            for level in &mut self.levels {
                level.insert(*tile, position);
            }
        }

        for level in &mut self.levels {
            level.recompute_bounds();
        }

        self.tile_count = tiles.len();
        self.needs_rebuild = false;

        cull_debug!("hexcull::SpatialIndex", "Rebuilt with {} tiles: {}",
            tiles.len(),
            self.levels
                .iter()
                .map(|l| format!("size {} -> {} buckets", l.bucket_size(), l.bucket_count()))
                .collect::<Vec<_>>()
                .join(", "));
    }

    // ===== RANGE QUERIES =====

    /// Append every tile whose center lies within `radius` of `center`.
    ///
    /// Exact and unculled: no frustum is involved. Appends nothing when
    /// the index is stale or `radius` is negative or NaN.
    pub fn query_sphere(&self, center: Vec3, radius: f32, out: &mut Vec<TileRef>) {
        if radius.is_nan() || radius < 0.0 {
            return;
        }
        let Some(level) = self.ready_finest_level("query_sphere") else {
            return;
        };

        let expand = Vec3::splat(radius + self.config.hex_radius);
        let radius_sq = radius * radius;

        level.for_each_bucket_in(
            level.cell_coords(center - expand),
            level.cell_coords(center + expand),
            |bucket| {
                for (tile, position) in bucket.tiles().iter().zip(bucket.positions()) {
                    if position.distance_squared(center) <= radius_sq {
                        out.push(*tile);
                    }
                }
            },
        );
    }

    /// Append every tile whose center lies inside the box `[min, max]`
    /// (inclusive). Appends nothing when the index is stale or the box is
    /// inverted on any axis.
    pub fn query_aabb(&self, min: Vec3, max: Vec3, out: &mut Vec<TileRef>) {
        let Some(level) = self.ready_finest_level("query_aabb") else {
            return;
        };

        let expand = Vec3::splat(self.config.hex_radius);

        level.for_each_bucket_in(
            level.cell_coords(min - expand),
            level.cell_coords(max + expand),
            |bucket| {
                for (tile, position) in bucket.tiles().iter().zip(bucket.positions()) {
                    if position.cmpge(min).all() && position.cmple(max).all() {
                        out.push(*tile);
                    }
                }
            },
        );
    }

    fn ready_finest_level(&self, query: &str) -> Option<&Level> {
        if !self.is_ready() {
            cull_trace!("hexcull::SpatialIndex", "{} on stale index, returning nothing", query);
            return None;
        }
        self.levels.first()
    }
}

#[cfg(test)]
#[path = "spatial_index_tests.rs"]
mod tests;
