/// Bucket: one grid cell of a hierarchy level.
///
/// Holds the tiles whose position quantizes into the cell, their cached
/// world positions, and bounding data derived from those positions.
/// Bounds are never maintained on insert: `recompute_bounds` runs once per
/// bucket after a full rebuild, so they always describe final membership.

use glam::Vec3;
use crate::hex::TileRef;

#[derive(Debug, Clone, Default)]
pub struct Bucket {
    tiles: Vec<TileRef>,
    /// World positions, parallel to `tiles`
    positions: Vec<Vec3>,
    min: Vec3,
    max: Vec3,
    center: Vec3,
    radius: f32,
}

impl Bucket {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a tile. Bounds become stale until `recompute_bounds`.
    pub(crate) fn push(&mut self, tile: TileRef, position: Vec3) {
        self.tiles.push(tile);
        self.positions.push(position);
    }

    /// Recompute min/max corners, center (midpoint of the corners) and
    /// radius (center to max corner) from the current members.
    pub(crate) fn recompute_bounds(&mut self) {
        let Some((first, rest)) = self.positions.split_first() else {
            self.min = Vec3::ZERO;
            self.max = Vec3::ZERO;
            self.center = Vec3::ZERO;
            self.radius = 0.0;
            return;
        };

        let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        self.min = min;
        self.max = max;
        self.center = (min + max) * 0.5;
        self.radius = self.center.distance(max);
    }

    pub fn tiles(&self) -> &[TileRef] {
        &self.tiles
    }

    /// World positions of `tiles()`, same order.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}
