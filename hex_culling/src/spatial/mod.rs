//! Hierarchical spatial index over hex tiles.
//!
//! Every level is a hash grid of buckets keyed by packed integer cell
//! coordinates. Levels share the hex radius and grow geometrically in
//! bucket size, finest first.

mod bucket;
mod level;
mod spatial_index;

pub use bucket::Bucket;
pub use level::{Level, pack_bucket_key, unpack_bucket_key};
pub use spatial_index::SpatialIndex;
