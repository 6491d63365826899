// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node graph model for the Mapcast editor.
//!
//! This crate holds everything the editor knows about a mapping setup
//! before it becomes engine configuration:
//! - Typed nodes (camera, image, mesh, object, probe, scene, window, gui,
//!   world) with kind-specific parameters
//! - The link-compatibility policy deciding which kinds may feed which
//! - The link graph with creation-time edge validation
//! - The depth-first tree walker that validates and collects nodes for
//!   export
//! - The scene merger used by project (assets-only) exports
//! - The read-only [`host::HostScene`] boundary to the surrounding 3-D
//!   application
//!
//! Rendering the collected result into configuration text lives in the
//! `mapcast_export` crate.

pub mod connection;
pub mod error;
pub mod graph;
pub mod host;
pub mod merge;
pub mod node;
pub mod params;
pub mod walk;

pub use connection::{Connection, ConnectionId};
pub use error::{HostError, ValidationError, WalkError};
pub use graph::{ConnectionError, NodeGraph};
pub use host::{CameraRig, DetachedHost, FaceVertex, HostScene, MeshGeometry};
pub use merge::merge_project;
pub use node::{Node, NodeId, NodeKind};
pub use params::NodeParams;
pub use walk::{walk_world, Link, SceneWalk, WalkResult};
