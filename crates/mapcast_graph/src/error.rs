// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for validation, traversal and host lookups.
//!
//! Every message that can surface to the user names the offending node;
//! nothing here is retried or silently swallowed.

use crate::node::NodeId;

/// A node's own state is incomplete or inconsistent. Always fatal to the
/// export that discovered it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    /// A file-backed node has an empty path
    #[error("No filename has been set for node \"{node}\"")]
    MissingFile {
        /// Offending node name
        node: String,
    },

    /// A stream-backed image has no server name
    #[error("No server name has been set for node \"{node}\"")]
    MissingServer {
        /// Offending node name
        node: String,
    },

    /// A bound host object does not exist
    #[error("Object \"{object}\" bound to node \"{node}\" was not found in the host scene")]
    UnknownObject {
        /// Offending node name
        node: String,
        /// Missing host object name
        object: String,
    },

    /// A bound mesh object carries no texture coordinates
    #[error("Object \"{object}\" bound to node \"{node}\" has no UV coordinates")]
    MissingUvs {
        /// Offending node name
        node: String,
        /// Host object name
        object: String,
    },
}

/// Traversal failure. Validation failures pass through unchanged;
/// structural variants indicate a corrupted graph.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// A visited node failed its own validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A node was reached again while still on the current traversal path
    #[error("Cycle detected at node \"{name}\"")]
    CycleDetected {
        /// Node closing the cycle
        name: String,
    },

    /// Two distinct nodes carry the same name within one walk
    #[error("Duplicate node name \"{name}\"")]
    DuplicateName {
        /// The shared name
        name: String,
    },

    /// A connection references a node missing from the graph
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// The export was started from a node that is not a World node
    #[error("Node \"{name}\" is not a world node")]
    NotAWorld {
        /// The offending root's name
        name: String,
    },
}

/// Failure of a host-object lookup
#[derive(Debug, Clone, thiserror::Error)]
pub enum HostError {
    /// No object of that name exists in the host scene
    #[error("Host object \"{0}\" not found")]
    ObjectNotFound(String),

    /// The object exists but its data cannot be read
    #[error("Host object \"{object}\" is unreadable: {reason}")]
    Unreadable {
        /// Host object name
        object: String,
        /// Host-provided reason
        reason: String,
    },
}
