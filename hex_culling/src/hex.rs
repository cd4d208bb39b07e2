//! Hex tile identity and placement.
//!
//! Tiles are owned by the world. The culling core only sees `TileRef`
//! handles: a stable key plus the tile's axial coordinate, from which the
//! world-space position is derived.

use glam::Vec3;
use slotmap::new_key_type;

/// `sqrt(3)`, used by the axial to world conversion.
const SQRT_3: f32 = 1.732_050_8;

new_key_type! {
    /// Stable key of a tile in the world's tile storage.
    ///
    /// Keys stay valid when other tiles are removed.
    pub struct TileKey;
}

/// Axial hex coordinate (flat-top layout).
///
/// The third cube component `s` is implicit: `q + r + s == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Build from cube coordinates. Returns `None` unless `q + r + s == 0`.
    pub fn from_cube(q: i32, r: i32, s: i32) -> Option<Self> {
        if q.wrapping_add(r).wrapping_add(s) == 0 {
            Some(Self { q, r })
        } else {
            None
        }
    }

    /// Derived cube component.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Grid distance in steps between two cells.
    pub fn distance(&self, other: &HexCoord) -> u32 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = (self.s() - other.s()).unsigned_abs();
        dq.max(dr).max(ds)
    }

    /// Center of the cell in world space; tiles lie on the `y = 0` plane.
    ///
    /// `x = radius * 1.5 * q`, `z = radius * sqrt(3) * (r + q / 2)`.
    pub fn to_world(&self, radius: f32) -> Vec3 {
        let q = self.q as f32;
        let r = self.r as f32;
        Vec3::new(radius * 1.5 * q, 0.0, radius * SQRT_3 * (r + q * 0.5))
    }

    /// Every cell within `range` steps of `self`, ring order not guaranteed.
    pub fn spiral(self, range: u32) -> impl Iterator<Item = HexCoord> {
        let n = range as i32;
        (-n..=n).flat_map(move |dq| {
            let r_min = (-n).max(-dq - n);
            let r_max = n.min(-dq + n);
            (r_min..=r_max).map(move |dr| HexCoord::new(self.q + dq, self.r + dr))
        })
    }
}

/// Read-only handle to a world tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRef {
    pub key: TileKey,
    pub coord: HexCoord,
}

impl TileRef {
    pub fn new(key: TileKey, coord: HexCoord) -> Self {
        Self { key, coord }
    }

    /// World-space center of the tile for a given hex radius.
    #[inline]
    pub fn world_position(&self, hex_radius: f32) -> Vec3 {
        self.coord.to_world(hex_radius)
    }
}

#[cfg(test)]
#[path = "hex_tests.rs"]
mod tests;
