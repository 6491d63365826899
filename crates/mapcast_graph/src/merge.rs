// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene merging for project (assets-only) exports.

use crate::walk::WalkResult;

/// Union all walked scenes into the first one, in discovery order.
///
/// Nodes are claimed first-writer-wins: a later scene cannot override a
/// name an earlier scene already holds, which can drop nodes when two
/// independent scenes reuse a name for different content. Links are
/// appended verbatim with no cross-scene deduplication. After the merge
/// the result describes exactly one scene, carrying the first scene's
/// identity.
pub fn merge_project(result: &mut WalkResult) {
    if result.scene_order.len() <= 1 {
        return;
    }

    let master = result.scene_order[0].clone();
    let followers: Vec<String> = result.scene_order[1..].to_vec();
    for name in followers {
        let Some(scene) = result.scenes.shift_remove(&name) else {
            continue;
        };
        let Some(target) = result.scenes.get_mut(&master) else {
            continue;
        };
        for (node_name, node_id) in scene.nodes {
            target.nodes.entry(node_name).or_insert(node_id);
        }
        target.links.extend(scene.links);
    }

    tracing::debug!(
        scene = %master,
        merged = result.scene_order.len() - 1,
        "merged scene subgraphs for project export"
    );
    result.scene_order.truncate(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;
    use crate::walk::SceneWalk;
    use indexmap::IndexMap;

    fn scene(nodes: &[(&str, NodeId)], links: &[(&str, &str)]) -> SceneWalk {
        SceneWalk {
            nodes: nodes
                .iter()
                .map(|(name, id)| (name.to_string(), *id))
                .collect(),
            links: links
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_merge_is_noop_for_single_scene() {
        let id = NodeId::new();
        let mut result = WalkResult {
            scene_order: vec!["only".to_string()],
            scenes: IndexMap::from([(
                "only".to_string(),
                scene(&[("img", id)], &[("img", "obj")]),
            )]),
        };
        merge_project(&mut result);
        assert_eq!(result.scene_order, ["only"]);
        assert_eq!(result.scenes["only"].nodes.len(), 1);
    }

    #[test]
    fn test_merge_first_writer_wins_and_appends_links() {
        let a_img = NodeId::new();
        let b_img = NodeId::new();
        let b_geo = NodeId::new();
        let mut result = WalkResult {
            scene_order: vec!["a".to_string(), "b".to_string()],
            scenes: IndexMap::from([
                (
                    "a".to_string(),
                    scene(&[("img", a_img)], &[("img", "obj_a")]),
                ),
                (
                    "b".to_string(),
                    scene(&[("img", b_img), ("geo", b_geo)], &[("img", "obj_b")]),
                ),
            ]),
        };
        merge_project(&mut result);

        assert_eq!(result.scene_order, ["a"]);
        assert_eq!(result.scenes.len(), 1);
        let merged = &result.scenes["a"];
        // Scene A keeps its claim on "img"; scene B's novel node survives.
        assert_eq!(merged.nodes["img"], a_img);
        assert_eq!(merged.nodes["geo"], b_geo);
        // Scene B's links come after scene A's, undeduplicated.
        assert_eq!(
            merged.links,
            [
                ("img".to_string(), "obj_a".to_string()),
                ("img".to_string(), "obj_b".to_string()),
            ]
        );
    }

    #[test]
    fn test_merge_three_scenes_collapses_to_first() {
        let ids: Vec<NodeId> = (0..3).map(|_| NodeId::new()).collect();
        let mut result = WalkResult {
            scene_order: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            scenes: IndexMap::from([
                ("a".to_string(), scene(&[("n0", ids[0])], &[])),
                ("b".to_string(), scene(&[("n1", ids[1])], &[])),
                ("c".to_string(), scene(&[("n2", ids[2])], &[])),
            ]),
        };
        merge_project(&mut result);
        assert_eq!(result.scene_order, ["a"]);
        let names: Vec<&str> = result.scenes["a"].nodes.keys().map(String::as_str).collect();
        assert_eq!(names, ["n0", "n1", "n2"]);
    }
}
