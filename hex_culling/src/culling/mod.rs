//! Culling module: frustum queries over the spatial index.
//!
//! A `TileCuller` turns a `SpatialIndex` and a `Frustum` into a
//! `CullingResult` once per frame. The result is consumed by the renderer,
//! which draws visible and intersecting tiles alike.

mod culling_result;
mod culler;

pub use culling_result::{CullingResult, CullingStats};
pub use culler::{TileCuller, HierarchicalCuller, BruteForceCuller, TILE_BOUNDING_FACTOR};
