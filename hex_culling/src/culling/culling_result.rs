/// CullingResult: output of one frustum query, valid for one frame.
///
/// Tiles are split by how they were accepted: `visible_tiles` were proven
/// fully inside (either individually or by their whole bucket),
/// `intersecting_tiles` straddle the frustum boundary. Renderers draw both;
/// the split only matters for boundary effects such as dithering.

use crate::hex::TileRef;

/// Per-query counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullingStats {
    /// Non-empty buckets classified in the coarse pass
    pub buckets_tested: usize,
    /// Tiles accepted by bucket or classified individually
    pub tiles_tested: usize,
    /// Tiles rejected, by bucket or individually
    pub tiles_culled: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CullingResult {
    visible_tiles: Vec<TileRef>,
    intersecting_tiles: Vec<TileRef>,
    total_tested: usize,
    total_culled: usize,
}

impl CullingResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiles fully inside the frustum.
    pub fn visible_tiles(&self) -> &[TileRef] {
        &self.visible_tiles
    }

    /// Tiles straddling the frustum boundary.
    pub fn intersecting_tiles(&self) -> &[TileRef] {
        &self.intersecting_tiles
    }

    pub fn total_tested(&self) -> usize {
        self.total_tested
    }

    pub fn total_culled(&self) -> usize {
        self.total_culled
    }

    /// Number of tiles to draw: visible plus intersecting.
    pub fn total_visible(&self) -> usize {
        self.visible_tiles.len() + self.intersecting_tiles.len()
    }

    /// No tile to draw.
    pub fn is_empty(&self) -> bool {
        self.visible_tiles.is_empty() && self.intersecting_tiles.is_empty()
    }

    /// Every tile to draw, visible first.
    pub fn iter_all(&self) -> impl Iterator<Item = &TileRef> {
        self.visible_tiles.iter().chain(&self.intersecting_tiles)
    }

    /// Reset for reuse, keeping allocations.
    pub fn clear(&mut self) {
        self.visible_tiles.clear();
        self.intersecting_tiles.clear();
        self.total_tested = 0;
        self.total_culled = 0;
    }

    pub(crate) fn push_visible(&mut self, tile: TileRef) {
        self.visible_tiles.push(tile);
    }

    pub(crate) fn extend_visible(&mut self, tiles: &[TileRef]) {
        self.visible_tiles.extend_from_slice(tiles);
    }

    pub(crate) fn push_intersecting(&mut self, tile: TileRef) {
        self.intersecting_tiles.push(tile);
    }

    pub(crate) fn set_totals(&mut self, stats: &CullingStats) {
        self.total_tested = stats.tiles_tested;
        self.total_culled = stats.tiles_culled;
    }
}
