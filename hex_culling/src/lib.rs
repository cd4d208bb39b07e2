/*!
# HexCull

Hierarchical frustum culling for hex-tile worlds.

Given a camera's view-projection matrix and a world of up to millions of
hex tiles, this crate decides every frame which tiles must be submitted
for rendering. It is pure CPU geometry: no GPU work, no occlusion.

## Architecture

- **Frustum**: six clip planes extracted from a view-projection matrix,
  tri-state point/sphere/box classification, batched sphere testing
- **SpatialIndex**: bucket grids of geometrically increasing cell size,
  rebuilt from the full tile set
- **TileCuller**: coarse-to-fine frustum query producing a `CullingResult`

Tiles are owned by the world; the crate only handles `TileRef` handles.
Every culling structure is owned by its caller. The logger registry is the
only process-wide state.

## Example

```no_run
use hex_culling::hexcull::{
    Frustum, HexCoord, HierarchicalCuller, SpatialIndex, SpatialIndexConfig, TileCuller, TileKey,
    TileRef,
};
use hex_culling::glam::{Mat4, Vec3};
use slotmap::SlotMap;

let mut storage = SlotMap::<TileKey, HexCoord>::with_key();
let tiles: Vec<TileRef> = HexCoord::ORIGIN
    .spiral(32)
    .map(|coord| TileRef::new(storage.insert(coord), coord))
    .collect();

let mut index = SpatialIndex::new(SpatialIndexConfig::default())?;
index.rebuild(&tiles);

let mut frustum = Frustum::new();
let vp = Mat4::perspective_rh_gl(1.0, 16.0 / 9.0, 0.1, 500.0)
    * Mat4::look_at_rh(Vec3::new(0.0, 40.0, 60.0), Vec3::ZERO, Vec3::Y);
frustum.update_frustum(&vp)?;

let mut culler = HierarchicalCuller::new();
let visible = culler.cull(&index, &frustum);
println!("{} tiles to draw", visible.total_visible());
# Ok::<(), hex_culling::hexcull::Error>(())
```
*/

// Internal modules
mod error;
mod config;
mod hex;
pub mod log;
pub mod frustum;
pub mod spatial;
pub mod culling;

// Main hexcull namespace module
pub mod hexcull {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::SpatialIndexConfig;

    // Tiles
    pub use crate::hex::{HexCoord, TileKey, TileRef};

    // Logging sub-module (types and registry; macros live at the crate root)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity, is_enabled,
            log, log_detailed,
        };
    }

    pub use crate::frustum::{
        CullResult, Frustum, Plane,
        SphereBatchTester, ScalarSphereTester, WideSphereTester,
        PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
        PLANE_NAMES,
    };

    pub use crate::spatial::{Bucket, Level, SpatialIndex, pack_bucket_key, unpack_bucket_key};

    pub use crate::culling::{
        CullingResult, CullingStats, TileCuller,
        HierarchicalCuller, BruteForceCuller, TILE_BOUNDING_FACTOR,
    };
}

// Re-export math library at crate root
pub use glam;
