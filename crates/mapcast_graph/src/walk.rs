// SPDX-License-Identifier: MIT OR Apache-2.0
//! Depth-first tree walker collecting nodes and links for export.
//!
//! Traversal starts at a world node and follows link inputs upstream:
//! world → scenes → windows/GUIs → cameras → objects → meshes/images.
//! Each reachable node is validated as it is discovered; the first failure
//! aborts the whole walk and no partial result survives.

use crate::error::WalkError;
use crate::graph::NodeGraph;
use crate::host::HostScene;
use crate::node::{Node, NodeId, NodeKind};
use indexmap::IndexMap;

/// One directed link as exported: (from name, to name)
pub type Link = (String, String);

/// Everything collected from one scene subgraph
#[derive(Debug, Clone, Default)]
pub struct SceneWalk {
    /// Visited nodes keyed by name, in discovery order
    pub nodes: IndexMap<String, NodeId>,
    /// Discovered links in discovery order, exact pairs deduplicated
    pub links: Vec<Link>,
}

/// The complete result of walking a world node
#[derive(Debug, Clone, Default)]
pub struct WalkResult {
    /// Scene names in the order they feed the world node
    pub scene_order: Vec<String>,
    /// Per-scene walk results
    pub scenes: IndexMap<String, SceneWalk>,
}

/// Walk every scene subgraph feeding `world_id`.
///
/// With `project_only` set, only Image/Mesh/Object nodes enter the name
/// maps; traversal and link discovery are unaffected by the filter.
pub fn walk_world(
    graph: &NodeGraph,
    host: &dyn HostScene,
    world_id: NodeId,
    project_only: bool,
) -> Result<WalkResult, WalkError> {
    let world = graph
        .node(world_id)
        .ok_or(WalkError::NodeNotFound(world_id))?;
    if world.kind() != NodeKind::World {
        return Err(WalkError::NotAWorld {
            name: world.name.clone(),
        });
    }

    let mut result = WalkResult::default();
    for scene in graph.upstream_of(world_id) {
        let mut walk = SceneWalk::default();
        let mut seen = IndexMap::new();
        let mut on_path = Vec::new();
        walk_node(graph, host, scene, &mut walk, &mut seen, &mut on_path, project_only)?;

        if result.scenes.contains_key(&scene.name) {
            return Err(WalkError::DuplicateName {
                name: scene.name.clone(),
            });
        }
        tracing::debug!(
            scene = %scene.name,
            nodes = walk.nodes.len(),
            links = walk.links.len(),
            "walked scene subgraph"
        );
        result.scene_order.push(scene.name.clone());
        result.scenes.insert(scene.name.clone(), walk);
    }
    Ok(result)
}

fn walk_node(
    graph: &NodeGraph,
    host: &dyn HostScene,
    node: &Node,
    walk: &mut SceneWalk,
    seen: &mut IndexMap<String, NodeId>,
    on_path: &mut Vec<NodeId>,
    project_only: bool,
) -> Result<(), WalkError> {
    // Well-typed graphs are acyclic in practice, but the compatibility
    // table does permit Object <-> Probe loops; fail instead of recursing
    // forever on a corrupted graph.
    if on_path.contains(&node.id) {
        return Err(WalkError::CycleDetected {
            name: node.name.clone(),
        });
    }

    node.params.validate(&node.name, host)?;

    // Names are checked for every visited node, not just the ones kept by
    // a project filter; filtered-out names still reach the emitted links.
    match seen.get(&node.name) {
        Some(existing) if *existing != node.id => {
            return Err(WalkError::DuplicateName {
                name: node.name.clone(),
            });
        }
        _ => {
            seen.insert(node.name.clone(), node.id);
        }
    }

    if !project_only || node.kind().is_project_asset() {
        walk.nodes.insert(node.name.clone(), node.id);
    }

    on_path.push(node.id);
    for upstream in graph.upstream_of(node.id) {
        let link = (upstream.name.clone(), node.name.clone());
        if !walk.links.contains(&link) {
            walk.links.push(link);
        }
        walk_node(graph, host, upstream, walk, seen, on_path, project_only)?;
    }
    on_path.pop();

    Ok(())
}
