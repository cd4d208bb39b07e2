/// Level: one bucket grid of the hierarchy.
///
/// A tile at world position `p` lands in cell
/// `(floor(p.x / cell), floor(p.z / cell))` with
/// `cell = hex_radius * bucket_size`. The two cell coordinates are packed
/// into a single `u64` key, x in the high half, z in the low half, both as
/// two's-complement `i32`.

use glam::Vec3;
use rustc_hash::FxHashMap;
use crate::hex::TileRef;
use super::bucket::Bucket;

/// Pack signed cell coordinates into a bucket key.
#[inline]
pub fn pack_bucket_key(x: i32, z: i32) -> u64 {
    ((x as u32 as u64) << 32) | (z as u32 as u64)
}

/// Inverse of `pack_bucket_key`.
#[inline]
pub fn unpack_bucket_key(key: u64) -> (i32, i32) {
    ((key >> 32) as u32 as i32, key as u32 as i32)
}

#[derive(Debug, Clone)]
pub struct Level {
    /// Cell width in multiples of the hex radius
    bucket_size: u32,
    /// Cell width in world units
    cell_size: f32,
    buckets: FxHashMap<u64, Bucket>,
}

impl Level {
    pub(crate) fn new(bucket_size: u32, hex_radius: f32) -> Self {
        Self {
            bucket_size,
            cell_size: hex_radius * bucket_size as f32,
            buckets: FxHashMap::default(),
        }
    }

    pub fn bucket_size(&self) -> u32 {
        self.bucket_size
    }

    /// Cell width in world units.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Integer cell coordinates containing `position` (y is ignored).
    #[inline]
    pub fn cell_coords(&self, position: Vec3) -> (i32, i32) {
        (
            (position.x / self.cell_size).floor() as i32,
            (position.z / self.cell_size).floor() as i32,
        )
    }

    /// Bucket key containing `position`.
    #[inline]
    pub fn key_for(&self, position: Vec3) -> u64 {
        let (x, z) = self.cell_coords(position);
        pack_bucket_key(x, z)
    }

    pub fn buckets(&self) -> &FxHashMap<u64, Bucket> {
        &self.buckets
    }

    pub fn bucket(&self, key: u64) -> Option<&Bucket> {
        self.buckets.get(&key)
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Sum of bucket sizes.
    pub fn tile_count(&self) -> usize {
        self.buckets.values().map(Bucket::len).sum()
    }

    pub(crate) fn insert(&mut self, tile: TileRef, position: Vec3) {
        let key = self.key_for(position);
        self.buckets.entry(key).or_insert_with(Bucket::new).push(tile, position);
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
    }

    pub(crate) fn recompute_bounds(&mut self) {
        for bucket in self.buckets.values_mut() {
            bucket.recompute_bounds();
        }
    }

    /// Visit every bucket whose cell lies in the inclusive rectangle
    /// `[x0, x1] x [z0, z1]`.
    ///
    /// Walks the rectangle cell by cell, or the bucket map when that is
    /// smaller.
    pub(crate) fn for_each_bucket_in(
        &self,
        (x0, z0): (i32, i32),
        (x1, z1): (i32, i32),
        mut visit: impl FnMut(&Bucket),
    ) {
        if x0 > x1 || z0 > z1 {
            return;
        }

        // Saturated coordinates span up to 2^32 cells per axis.
        let cells = (x1 as i64 - x0 as i64 + 1).checked_mul(z1 as i64 - z0 as i64 + 1);
        if cells.map_or(true, |cells| cells > self.buckets.len() as i64) {
            for (key, bucket) in &self.buckets {
                let (x, z) = unpack_bucket_key(*key);
                if (x0..=x1).contains(&x) && (z0..=z1).contains(&z) {
                    visit(bucket);
                }
            }
            return;
        }

        for x in x0..=x1 {
            for z in z0..=z1 {
                if let Some(bucket) = self.buckets.get(&pack_bucket_key(x, z)) {
                    visit(bucket);
                }
            }
        }
    }
}
