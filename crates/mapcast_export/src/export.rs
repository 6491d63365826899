// SPDX-License-Identifier: MIT OR Apache-2.0
//! Export pipeline entry point.
//!
//! One call runs walk -> (merge) -> serialize -> write. The destination
//! file is only touched after the walk has succeeded and the whole
//! document exists in memory, so a failed export never leaves a partial
//! file behind.

use crate::error::ExportError;
use crate::properties::{node_properties, ExportContext};
use crate::writer::serialize;
use mapcast_graph::{merge_project, walk_world, HostScene, NodeGraph, NodeId, WalkError};
use std::path::Path;

/// What the export describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    /// Complete engine configuration: world, scenes, displays, assets
    #[default]
    FullConfiguration,
    /// Assets only (images, meshes, objects), scenes merged into one
    ProjectOnly,
}

/// Caller-supplied export modifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Full configuration or assets-only project
    pub mode: ExportMode,
    /// Evaluate every node (triggering geometry side effects) but write no
    /// configuration text at all
    pub nodes_only: bool,
}

/// Export the graph reachable from `world_id` to `path`.
///
/// Auxiliary geometry files for live-object meshes are written next to
/// `path`. Any validation failure aborts the export before the
/// destination is created.
pub fn export_tree(
    graph: &NodeGraph,
    host: &dyn HostScene,
    world_id: NodeId,
    path: &Path,
    options: ExportOptions,
) -> Result<(), ExportError> {
    let project_only = options.mode == ExportMode::ProjectOnly;
    let mut result = walk_world(graph, host, world_id, project_only)?;

    let output_dir = match path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    let ctx = ExportContext {
        graph,
        host,
        output_dir,
    };

    if options.nodes_only {
        for walk in result.scenes.values() {
            for id in walk.nodes.values() {
                let node = ctx
                    .graph
                    .node(*id)
                    .ok_or(ExportError::Walk(WalkError::NodeNotFound(*id)))?;
                node_properties(node, &ctx)?;
            }
        }
        tracing::info!("evaluated nodes without writing a configuration");
        return Ok(());
    }

    if project_only {
        merge_project(&mut result);
    }

    let text = serialize(&result, world_id, &ctx, options.mode)?;
    std::fs::write(path, text)?;
    tracing::info!(
        path = %path.display(),
        scenes = result.scene_order.len(),
        mode = ?options.mode,
        "wrote configuration"
    );
    Ok(())
}
