// SPDX-License-Identifier: MIT OR Apache-2.0
//! Configuration export for the Mapcast editor.
//!
//! Takes a walked node graph from `mapcast_graph` and renders it into the
//! structured text the rendering engine consumes:
//! - Per-node property collection with fixed key ordering
//! - Deterministic, byte-for-byte reproducible text serialization
//! - OBJ export of live host meshes as auxiliary files
//! - The single-call [`export_tree`] pipeline with full / project-only /
//!   nodes-only modes
//!
//! Failure anywhere cancels the whole export; the destination file is
//! written in one shot only after everything else has succeeded.

pub mod error;
pub mod export;
pub mod geometry;
pub mod properties;
pub mod value;
pub mod writer;

pub use error::ExportError;
pub use export::{export_tree, ExportMode, ExportOptions};
pub use geometry::{export_object_mesh, write_obj};
pub use properties::{node_properties, ExportContext};
pub use value::{Properties, PropertyValue};
pub use writer::serialize;
