// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions and the link-compatibility policy.

use crate::params::NodeParams;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// The closed set of node kinds understood by the engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Projection camera, renders the objects fed into it
    Camera,
    /// Still or streamed texture source
    Image,
    /// Geometry source, either a file or a live host object
    Mesh,
    /// Textured drawable combining meshes and images
    Object,
    /// Off-screen probe re-projecting the objects fed into it
    Probe,
    /// One engine process driving one display
    Scene,
    /// Operating-system output window
    Window,
    /// On-screen control surface
    Gui,
    /// Traversal root holding global configuration
    World,
}

impl NodeKind {
    /// Which upstream kinds may feed this kind's link inputs.
    ///
    /// This is the single source of truth for edge legality; it is enforced
    /// when a connection is created and relied upon by the tree walker.
    pub fn accepts_upstream(self, upstream: NodeKind) -> bool {
        match self {
            Self::World => matches!(upstream, Self::Scene),
            Self::Scene => matches!(upstream, Self::Window | Self::Gui),
            Self::Window => matches!(upstream, Self::Camera | Self::Image),
            Self::Camera => matches!(upstream, Self::Object),
            Self::Object => matches!(upstream, Self::Image | Self::Mesh | Self::Probe),
            Self::Probe => matches!(upstream, Self::Object),
            Self::Image | Self::Mesh | Self::Gui => false,
        }
    }

    /// Whether this kind has an output link socket. World is the root and
    /// never feeds anything.
    pub fn has_output(self) -> bool {
        !matches!(self, Self::World)
    }

    /// Kinds retained by a project (assets-only) export
    pub fn is_project_asset(self) -> bool {
        matches!(self, Self::Image | Self::Mesh | Self::Object)
    }
}

/// A node instance in the graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Display name; doubles as the node's identity in exported text, so it
    /// must be unique within the graph when an export runs
    pub name: String,
    /// Position on the editor canvas
    pub position: [f32; 2],
    /// Kind-specific parameters
    pub params: NodeParams,
}

impl Node {
    /// Create a new node
    pub fn new(name: impl Into<String>, params: NodeParams) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            position: [0.0, 0.0],
            params,
        }
    }

    /// Set the canvas position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = [x, y];
        self
    }

    /// Get the node kind
    pub fn kind(&self) -> NodeKind {
        self.params.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{NodeParams, ObjectParams, ProbeParams};

    #[test]
    fn test_accepted_links_table() {
        use NodeKind::*;
        assert!(World.accepts_upstream(Scene));
        assert!(!World.accepts_upstream(Window));
        assert!(Scene.accepts_upstream(Window));
        assert!(Scene.accepts_upstream(Gui));
        assert!(Window.accepts_upstream(Camera));
        assert!(Window.accepts_upstream(Image));
        assert!(!Window.accepts_upstream(Mesh));
        assert!(Camera.accepts_upstream(Object));
        assert!(!Camera.accepts_upstream(Image));
        assert!(Object.accepts_upstream(Image));
        assert!(Object.accepts_upstream(Mesh));
        assert!(Object.accepts_upstream(Probe));
        assert!(Probe.accepts_upstream(Object));
        // Leaves accept nothing
        for upstream in [Camera, Image, Mesh, Object, Probe, Scene, Window, Gui, World] {
            assert!(!Image.accepts_upstream(upstream));
            assert!(!Mesh.accepts_upstream(upstream));
            assert!(!Gui.accepts_upstream(upstream));
        }
    }

    #[test]
    fn test_world_has_no_output() {
        assert!(!NodeKind::World.has_output());
        assert!(NodeKind::Scene.has_output());
    }

    #[test]
    fn test_project_asset_kinds() {
        assert!(NodeKind::Image.is_project_asset());
        assert!(NodeKind::Mesh.is_project_asset());
        assert!(NodeKind::Object.is_project_asset());
        assert!(!NodeKind::Window.is_project_asset());
        assert!(!NodeKind::Scene.is_project_asset());
    }

    #[test]
    fn test_node_kind_follows_params() {
        let node = Node::new("obj", NodeParams::Object(ObjectParams::default()));
        assert_eq!(node.kind(), NodeKind::Object);
        let node = Node::new("probe", NodeParams::Probe(ProbeParams::default()));
        assert_eq!(node.kind(), NodeKind::Probe);
    }
}
