// SPDX-License-Identifier: MIT OR Apache-2.0
//! Export pipeline errors.

use mapcast_graph::{HostError, WalkError};

/// Anything that can abort an export. Whatever the variant, the
/// destination file is never left partially written.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Walking the graph failed (validation or structural)
    #[error("{0}")]
    Walk(#[from] WalkError),

    /// A host-object lookup failed while collecting properties
    #[error("{0}")]
    Host(#[from] HostError),

    /// A numeric property was NaN or infinite; the engine cannot parse
    /// such literals
    #[error("Non-finite value for \"{key}\" on node \"{node}\"")]
    NonFinite {
        /// Offending node name
        node: String,
        /// Offending property key
        key: String,
    },

    /// Writing the configuration or an auxiliary geometry file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// In-memory text assembly failed
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}
