// SPDX-License-Identifier: MIT OR Apache-2.0
//! Configuration text serializer.
//!
//! The engine parses what we emit, so indentation, key order, quoting and
//! comma placement are all part of the contract and must stay
//! byte-for-byte reproducible for a given graph snapshot. The document is
//! assembled in memory; callers decide when (and whether) it reaches disk.

use crate::error::ExportError;
use crate::export::ExportMode;
use crate::properties::{node_properties, ExportContext};
use crate::value::Properties;
use mapcast_graph::{Node, NodeId, NodeKind, WalkError, WalkResult};
use std::fmt::Write;

fn resolve<'a>(ctx: &ExportContext<'a>, id: NodeId) -> Result<&'a Node, ExportError> {
    ctx.graph
        .node(id)
        .ok_or(ExportError::Walk(WalkError::NodeNotFound(id)))
}

fn write_properties(out: &mut String, props: &Properties) -> Result<(), ExportError> {
    for (index, (key, value)) in props.iter().enumerate() {
        let separator = if index < props.len() - 1 { "," } else { "" };
        writeln!(out, "            \"{key}\" : {value}{separator}")?;
    }
    Ok(())
}

/// Render the walked graph as configuration text.
///
/// `world_id` must be the world node the walk started from; its framerate
/// feeds the `world` block of a full configuration.
pub fn serialize(
    result: &WalkResult,
    world_id: NodeId,
    ctx: &ExportContext<'_>,
    mode: ExportMode,
) -> Result<String, ExportError> {
    let mut out = String::new();
    writeln!(out, "// Mapcast configuration file")?;
    writeln!(out, "// Exported with the Mapcast editor")?;
    writeln!(out, "{{")?;

    match mode {
        ExportMode::ProjectOnly => {
            writeln!(out, "    \"description\" : \"mapcastProject\",")?;
        }
        ExportMode::FullConfiguration => {
            writeln!(out, "    \"description\" : \"mapcastConfiguration\",")?;

            let world = resolve(ctx, world_id)?;
            let world_props = node_properties(world, ctx)?;
            writeln!(out, "    \"world\" : {{")?;
            write_properties(&mut out, &world_props)?;
            writeln!(out, "    }},")?;

            // One entry per scene, in discovery order.
            writeln!(out, "    \"scenes\" : [")?;
            let scene_count = result.scenes.len();
            let mut scene_index = 0;
            for scene_name in &result.scene_order {
                for id in result.scenes[scene_name].nodes.values() {
                    let node = resolve(ctx, *id)?;
                    if node.kind() != NodeKind::Scene {
                        continue;
                    }
                    let props = node_properties(node, ctx)?;
                    writeln!(out, "        {{")?;
                    write_properties(&mut out, &props)?;
                    let separator = if scene_index < scene_count - 1 { "," } else { "" };
                    writeln!(out, "        }}{separator}")?;
                    scene_index += 1;
                }
            }
            writeln!(out, "    ],")?;
        }
    }

    let scene_count = result.scenes.len();
    for (scene_index, scene_name) in result.scene_order.iter().enumerate() {
        if mode == ExportMode::FullConfiguration {
            writeln!(out, "    \"{scene_name}\" : {{")?;
        }

        let walk = &result.scenes[scene_name];
        for (name, id) in &walk.nodes {
            let node = resolve(ctx, *id)?;
            if node.kind() == NodeKind::Scene {
                continue;
            }
            let props = node_properties(node, ctx)?;
            writeln!(out, "        \"{name}\" : {{")?;
            write_properties(&mut out, &props)?;
            // A links array always follows, so node sections always end
            // with a comma.
            writeln!(out, "        }},")?;
        }

        writeln!(out, "        \"links\" : [")?;
        for (index, (from, to)) in walk.links.iter().enumerate() {
            let separator = if index < walk.links.len() - 1 { "," } else { "" };
            writeln!(out, "            [\"{from}\", \"{to}\"]{separator}")?;
        }
        writeln!(out, "        ]")?;

        let closer = if scene_index < scene_count - 1 { "    }," } else { "    }" };
        writeln!(out, "{closer}")?;
    }

    if mode == ExportMode::FullConfiguration {
        write!(out, "}}")?;
    }
    Ok(out)
}
