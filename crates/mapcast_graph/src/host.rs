// SPDX-License-Identifier: MIT OR Apache-2.0
//! Read-only interface to the hosting 3-D application.
//!
//! Camera and mesh nodes may bind to live host objects. Everything the
//! export needs from those objects comes through [`HostScene`]; the core
//! never reaches into the host's data model directly.

use crate::error::HostError;

/// Camera placement resolved by the host from its object transform
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    /// Eye position in world units
    pub eye: [f64; 3],
    /// Look-at target in world units
    pub target: [f64; 3],
    /// Up vector
    pub up: [f64; 3],
    /// Vertical field of view in degrees
    pub fov: f64,
    /// Principal point from lens shift
    pub principal_point: [f64; 2],
}

/// One corner of a triangle, indexing into the attribute arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertex {
    /// Position index
    pub position: u32,
    /// Texture coordinate index, if the mesh carries UVs
    pub uv: Option<u32>,
    /// Normal index, if the mesh carries normals
    pub normal: Option<u32>,
}

/// Triangulated geometry pulled from a live host object
#[derive(Debug, Clone, Default)]
pub struct MeshGeometry {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Texture coordinates
    pub uvs: Vec<[f32; 2]>,
    /// Vertex normals
    pub normals: Vec<[f32; 3]>,
    /// Triangles as attribute-index triplets
    pub triangles: Vec<[FaceVertex; 3]>,
}

/// Read-only access to the host scene's objects
pub trait HostScene {
    /// Resolve a bound camera object to its rig, or `None` when the host
    /// has no camera of that name
    fn camera_rig(&self, object: &str) -> Option<CameraRig>;

    /// Pull triangulated, UV-preserving geometry for a bound mesh object
    fn mesh_geometry(&self, object: &str) -> Result<MeshGeometry, HostError>;
}

/// Host stand-in for headless runs: no live objects exist, so every lookup
/// fails. File-based nodes export normally against it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedHost;

impl HostScene for DetachedHost {
    fn camera_rig(&self, _object: &str) -> Option<CameraRig> {
        None
    }

    fn mesh_geometry(&self, object: &str) -> Result<MeshGeometry, HostError> {
        Err(HostError::ObjectNotFound(object.to_string()))
    }
}
