// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes and connections.

use crate::connection::{Connection, ConnectionId};
use crate::node::{Node, NodeId, NodeKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node graph describing one mapping setup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeGraph {
    /// Graph name
    pub name: String,
    /// Nodes in the graph
    nodes: IndexMap<NodeId, Node>,
    /// Connections between nodes, in creation order
    connections: IndexMap<ConnectionId, Connection>,
}

impl NodeGraph {
    /// Create a new empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: IndexMap::new(),
            connections: IndexMap::new(),
        }
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Remove a node and all its incident connections
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.connections.retain(|_, c| !c.involves_node(node_id));
        self.nodes.shift_remove(&node_id)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Connect `from_node`'s output to a link input of `to_node`.
    ///
    /// Legality is decided by the kind compatibility table; this is the
    /// host-side enforcement point, the walker never repairs edges.
    pub fn connect(
        &mut self,
        from_node: NodeId,
        to_node: NodeId,
    ) -> Result<ConnectionId, ConnectionError> {
        let source = self
            .nodes
            .get(&from_node)
            .ok_or(ConnectionError::NodeNotFound(from_node))?;
        let target = self
            .nodes
            .get(&to_node)
            .ok_or(ConnectionError::NodeNotFound(to_node))?;

        if from_node == to_node {
            return Err(ConnectionError::SelfLoop);
        }
        if !source.kind().has_output() {
            return Err(ConnectionError::NoOutput(source.kind()));
        }
        if !target.kind().accepts_upstream(source.kind()) {
            return Err(ConnectionError::IncompatibleKinds {
                from: source.kind(),
                to: target.kind(),
            });
        }
        // One logical connection per pair; parallel edges mean nothing to
        // the exported configuration.
        if self
            .connections
            .values()
            .any(|c| c.from_node == from_node && c.to_node == to_node)
        {
            return Err(ConnectionError::AlreadyConnected);
        }

        let connection = Connection::new(from_node, to_node);
        let id = connection.id;
        self.connections.insert(id, connection);
        Ok(id)
    }

    /// Remove a connection
    pub fn disconnect(&mut self, connection_id: ConnectionId) -> Option<Connection> {
        self.connections.shift_remove(&connection_id)
    }

    /// Get all connections
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Get the number of connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Nodes feeding `node_id`'s link inputs, in connection creation order.
    /// This order is the walker's discovery order.
    pub fn upstream_of(&self, node_id: NodeId) -> impl Iterator<Item = &Node> {
        self.connections
            .values()
            .filter(move |c| c.to_node == node_id)
            .filter_map(|c| self.nodes.get(&c.from_node))
    }

    /// Whether the node's output feeds anything
    pub fn is_output_linked(&self, node_id: NodeId) -> bool {
        self.connections.values().any(|c| c.from_node == node_id)
    }
}

impl Default for NodeGraph {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

/// Error when creating a connection
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// The target kind does not accept the source kind upstream
    #[error("A {from:?} node cannot feed a {to:?} node")]
    IncompatibleKinds {
        /// Source kind
        from: NodeKind,
        /// Target kind
        to: NodeKind,
    },

    /// The source kind has no output socket
    #[error("A {0:?} node has no output link")]
    NoOutput(NodeKind),

    /// The pair is already connected
    #[error("These nodes are already connected")]
    AlreadyConnected,

    /// Self-loop not allowed
    #[error("Self-loop not allowed")]
    SelfLoop,
}
