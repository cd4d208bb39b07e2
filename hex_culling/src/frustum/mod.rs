//! Frustum module: clip planes, frustum extraction and tri-state classification.
//!
//! The frustum is owned by the caller (typically the per-frame render
//! preparation step) and refreshed from the camera's view-projection
//! matrix once per frame.

mod plane;
mod frustum;
mod batch;

pub use plane::Plane;
pub use frustum::{
    CullResult, Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
    PLANE_NAMES,
};
pub use batch::{SphereBatchTester, ScalarSphereTester, WideSphereTester};
