// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection (edge) definitions for the graph.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    /// Create a new random connection ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// A directed link: the source node's output feeds one of the target
/// node's link inputs. Parallel edges between the same pair carry no extra
/// meaning and are rejected at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    /// Unique connection ID
    pub id: ConnectionId,
    /// Source (upstream) node ID
    pub from_node: NodeId,
    /// Target (downstream) node ID
    pub to_node: NodeId,
}

impl Connection {
    /// Create a new connection
    pub fn new(from_node: NodeId, to_node: NodeId) -> Self {
        Self {
            id: ConnectionId::new(),
            from_node,
            to_node,
        }
    }

    /// Check if this connection involves a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.from_node == node_id || self.to_node == node_id
    }
}
