// SPDX-License-Identifier: MIT OR Apache-2.0
//! `mapcast` - headless export of saved Mapcast graph documents.
//!
//! The editor normally triggers exports itself; this binary re-runs the
//! same pipeline against a graph document saved to disk (RON), for build
//! scripts and render farms. There is no live host scene here, so graphs
//! using live-bound cameras or meshes must be exported from the editor.

use clap::Parser;
use mapcast_export::{export_tree, ExportMode, ExportOptions};
use mapcast_graph::{DetachedHost, NodeGraph, NodeId, NodeKind};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Parser)]
#[command(name = "mapcast", version, about = "Export a Mapcast graph document to engine configuration")]
struct Args {
    /// Graph document to load (RON)
    graph: PathBuf,

    /// Destination configuration file
    #[arg(short, long)]
    output: PathBuf,

    /// Name of the world node to export from (defaults to the only one)
    #[arg(long)]
    world: Option<String>,

    /// Export assets only (images, meshes, objects), merged into one scene
    #[arg(long)]
    project: bool,

    /// Evaluate nodes and their side effects without writing configuration
    #[arg(long)]
    nodes_only: bool,
}

fn find_world(graph: &NodeGraph, name: Option<&str>) -> Result<NodeId, String> {
    let mut worlds = graph
        .nodes()
        .filter(|n| n.kind() == NodeKind::World)
        .filter(|n| name.map_or(true, |wanted| n.name == wanted));
    let Some(world) = worlds.next() else {
        return Err(match name {
            Some(wanted) => format!("no world node named \"{wanted}\" in the document"),
            None => "the document contains no world node".to_string(),
        });
    };
    if worlds.next().is_some() {
        return Err("the document contains several world nodes; pick one with --world".to_string());
    }
    Ok(world.id)
}

fn run(args: &Args) -> Result<(), String> {
    let text = std::fs::read_to_string(&args.graph)
        .map_err(|e| format!("cannot read {}: {e}", args.graph.display()))?;
    let graph: NodeGraph =
        ron::from_str(&text).map_err(|e| format!("cannot parse {}: {e}", args.graph.display()))?;
    tracing::info!(
        graph = %graph.name,
        nodes = graph.node_count(),
        connections = graph.connection_count(),
        "loaded graph document"
    );

    let world = find_world(&graph, args.world.as_deref())?;
    let options = ExportOptions {
        mode: if args.project {
            ExportMode::ProjectOnly
        } else {
            ExportMode::FullConfiguration
        },
        nodes_only: args.nodes_only,
    };
    export_tree(&graph, &DetachedHost, world, &args.output, options)
        .map_err(|e| e.to_string())
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        tracing::error!("Export failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcast_graph::params::{NodeParams, SceneParams, WorldParams};
    use mapcast_graph::Node;

    #[test]
    fn test_find_world_by_name() {
        let mut graph = NodeGraph::new("doc");
        let a = graph.add_node(Node::new("a", NodeParams::World(WorldParams::default())));
        let b = graph.add_node(Node::new("b", NodeParams::World(WorldParams::default())));
        assert_eq!(find_world(&graph, Some("a")).unwrap(), a);
        assert_eq!(find_world(&graph, Some("b")).unwrap(), b);
        assert!(find_world(&graph, Some("c")).is_err());
        // Ambiguous without a name.
        assert!(find_world(&graph, None).is_err());
    }

    #[test]
    fn test_find_world_requires_world_kind() {
        let mut graph = NodeGraph::new("doc");
        graph.add_node(Node::new("scene", NodeParams::Scene(SceneParams::default())));
        assert!(find_world(&graph, None).is_err());
    }
}
