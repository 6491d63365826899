// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-node property collection.
//!
//! Turns one validated node into the ordered key -> literal map its
//! configuration section is written from. Key order per kind is part of
//! the output contract and is fixed here.

use crate::error::ExportError;
use crate::geometry::export_object_mesh;
use crate::value::{Properties, PropertyValue};
use mapcast_graph::params::{ImageSource, MeshSource, NodeParams};
use mapcast_graph::{HostScene, Node, NodeGraph};
use std::path::PathBuf;

/// Everything property collection may reach for: the graph (window layout
/// needs connection order), the host (bound objects), and the directory
/// auxiliary geometry files land in.
pub struct ExportContext<'a> {
    /// Graph being exported
    pub graph: &'a NodeGraph,
    /// Host scene for bound camera/mesh objects
    pub host: &'a dyn HostScene,
    /// Directory of the destination file; OBJ side-effect files go here
    pub output_dir: PathBuf,
}

/// Collect one node's exported properties, in output key order.
///
/// For a mesh node bound to a live object this also writes the auxiliary
/// geometry file, so calling it is meaningful even when no configuration
/// text is produced (nodes-only export).
pub fn node_properties(node: &Node, ctx: &ExportContext<'_>) -> Result<Properties, ExportError> {
    let mut props = Properties::new();
    match &node.params {
        NodeParams::World(params) => {
            props.insert("framerate".into(), PropertyValue::Int(params.framerate));
        }
        NodeParams::Scene(params) => {
            props.insert("name".into(), PropertyValue::Str(node.name.clone()));
            props.insert("display".into(), PropertyValue::Int(params.display));
            props.insert("swapInterval".into(), PropertyValue::Int(params.swap_interval));
        }
        NodeParams::Camera(params) => {
            props.insert("type".into(), PropertyValue::Str("camera".into()));
            if let Some(rig) = params
                .object
                .as_deref()
                .and_then(|object| ctx.host.camera_rig(object))
            {
                props.insert("eye".into(), PropertyValue::FloatVec(rig.eye.to_vec()));
                props.insert("target".into(), PropertyValue::FloatVec(rig.target.to_vec()));
                props.insert("up".into(), PropertyValue::FloatVec(rig.up.to_vec()));
                props.insert("fov".into(), PropertyValue::Float(rig.fov));
                props.insert(
                    "principalPoint".into(),
                    PropertyValue::FloatVec(rig.principal_point.to_vec()),
                );
            }
            props.insert(
                "size".into(),
                PropertyValue::IntVec(vec![params.width, params.height]),
            );
        }
        NodeParams::Image(params) => match &params.source {
            ImageSource::File {
                path,
                flip,
                flop,
                srgb,
                clock,
            } => {
                props.insert("type".into(), PropertyValue::Str("image".into()));
                props.insert("file".into(), PropertyValue::Str(path.clone()));
                props.insert("flip".into(), PropertyValue::from(*flip));
                props.insert("flop".into(), PropertyValue::from(*flop));
                props.insert("srgb".into(), PropertyValue::from(*srgb));
                props.insert("clock".into(), PropertyValue::from(*clock));
            }
            ImageSource::Stream {
                server_name,
                app_name,
            } => {
                props.insert("type".into(), PropertyValue::Str("image_stream".into()));
                props.insert("servername".into(), PropertyValue::Str(server_name.clone()));
                props.insert("appname".into(), PropertyValue::Str(app_name.clone()));
            }
        },
        NodeParams::Mesh(params) => {
            props.insert("type".into(), PropertyValue::Str("mesh".into()));
            let file = match &params.source {
                MeshSource::File { path } => path.clone(),
                MeshSource::Object { name } => {
                    let geometry = ctx.host.mesh_geometry(name)?;
                    let path = export_object_mesh(&ctx.output_dir, &node.name, &geometry)?;
                    path.display().to_string()
                }
            };
            props.insert("file".into(), PropertyValue::Str(file));
        }
        NodeParams::Object(params) => {
            props.insert("type".into(), PropertyValue::Str("object".into()));
            props.insert("color".into(), PropertyValue::FloatVec(params.color.to_vec()));
            props.insert("sideness".into(), PropertyValue::Int(params.sideness));
        }
        NodeParams::Probe(params) => {
            props.insert("type".into(), PropertyValue::Str("virtual_probe".into()));
            props.insert(
                "size".into(),
                PropertyValue::IntVec(vec![params.width, params.height]),
            );
            props.insert("projection".into(), PropertyValue::Str(params.projection.clone()));
            props.insert(
                "position".into(),
                PropertyValue::FloatVec(params.position.to_vec()),
            );
            props.insert(
                "rotation".into(),
                PropertyValue::FloatVec(params.rotation.to_vec()),
            );
        }
        NodeParams::Window(params) => {
            props.insert("type".into(), PropertyValue::Str("window".into()));
            props.insert("decorated".into(), PropertyValue::from(params.decorated));
            let fullscreen = if params.fullscreen { params.screen } else { -1 };
            props.insert("fullscreen".into(), PropertyValue::Int(fullscreen));
            props.insert(
                "position".into(),
                PropertyValue::FloatVec(params.position.to_vec()),
            );
            props.insert(
                "size".into(),
                PropertyValue::IntVec(vec![params.width, params.height]),
            );
            props.insert("srgb".into(), PropertyValue::from(params.srgb));
            // One layout slot per connected input, in connection order.
            let layout: Vec<i64> = (0..ctx.graph.upstream_of(node.id).count() as i64).collect();
            props.insert("layout".into(), PropertyValue::IntVec(layout));
        }
        NodeParams::Gui(_) => {
            props.insert("type".into(), PropertyValue::Str("gui".into()));
        }
    }
    ensure_finite(&node.name, &props)?;
    Ok(props)
}

// Host-supplied rigs can smuggle NaN/inf through f64 fields; the emitted
// literals would not parse, so fail here instead of in the engine.
fn ensure_finite(node_name: &str, props: &Properties) -> Result<(), ExportError> {
    for (key, value) in props {
        let finite = match value {
            PropertyValue::Float(v) => v.is_finite(),
            PropertyValue::FloatVec(values) => values.iter().all(|v| v.is_finite()),
            _ => true,
        };
        if !finite {
            return Err(ExportError::NonFinite {
                node: node_name.to_string(),
                key: key.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcast_graph::params::{
        CameraParams, ImageParams, MeshParams, ObjectParams, WindowParams,
    };
    use mapcast_graph::{CameraRig, DetachedHost, HostError, MeshGeometry};

    struct StubHost;

    impl HostScene for StubHost {
        fn camera_rig(&self, object: &str) -> Option<CameraRig> {
            (object == "Camera").then(|| CameraRig {
                eye: [0.0, -5.0, 2.0],
                target: [0.0, 0.0, 0.0],
                up: [0.0, 0.0, 1.0],
                fov: 35.0,
                principal_point: [0.5, 0.5],
            })
        }

        fn mesh_geometry(&self, object: &str) -> Result<MeshGeometry, HostError> {
            if object != "Dome" {
                return Err(HostError::ObjectNotFound(object.to_string()));
            }
            Ok(MeshGeometry {
                positions: vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
                uvs: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
                normals: vec![],
                triangles: vec![],
            })
        }
    }

    fn ctx<'a>(graph: &'a NodeGraph, host: &'a dyn HostScene, dir: PathBuf) -> ExportContext<'a> {
        ExportContext {
            graph,
            host,
            output_dir: dir,
        }
    }

    #[test]
    fn test_unbound_camera_has_no_rig_keys() {
        let graph = NodeGraph::new("g");
        let node = Node::new("cam", NodeParams::Camera(CameraParams::default()));
        let ctx = ctx(&graph, &DetachedHost, PathBuf::from("."));
        let props = node_properties(&node, &ctx).unwrap();
        let keys: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(keys, ["type", "size"]);
        assert_eq!(props["size"].to_string(), "[1920, 1080]");
    }

    #[test]
    fn test_bound_camera_key_order() {
        let graph = NodeGraph::new("g");
        let node = Node::new(
            "cam",
            NodeParams::Camera(CameraParams {
                object: Some("Camera".to_string()),
                ..CameraParams::default()
            }),
        );
        let ctx = ctx(&graph, &StubHost, PathBuf::from("."));
        let props = node_properties(&node, &ctx).unwrap();
        let keys: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["type", "eye", "target", "up", "fov", "principalPoint", "size"]
        );
        assert_eq!(props["eye"].to_string(), "[0.0, -5.0, 2.0]");
        assert_eq!(props["fov"].to_string(), "35.0");
    }

    #[test]
    fn test_non_finite_rig_value_is_rejected() {
        struct BrokenRigHost;

        impl HostScene for BrokenRigHost {
            fn camera_rig(&self, _object: &str) -> Option<CameraRig> {
                Some(CameraRig {
                    eye: [0.0, -5.0, 2.0],
                    target: [0.0, 0.0, 0.0],
                    up: [0.0, 0.0, 1.0],
                    fov: f64::NAN,
                    principal_point: [0.5, 0.5],
                })
            }

            fn mesh_geometry(&self, object: &str) -> Result<MeshGeometry, HostError> {
                Err(HostError::ObjectNotFound(object.to_string()))
            }
        }

        let graph = NodeGraph::new("g");
        let node = Node::new(
            "cam",
            NodeParams::Camera(CameraParams {
                object: Some("Camera".to_string()),
                ..CameraParams::default()
            }),
        );
        let ctx = ctx(&graph, &BrokenRigHost, PathBuf::from("."));
        let err = node_properties(&node, &ctx).unwrap_err();
        assert!(matches!(
            err,
            ExportError::NonFinite { ref node, ref key } if node == "cam" && key == "fov"
        ));
    }

    #[test]
    fn test_window_layout_tracks_connected_inputs() {
        let mut graph = NodeGraph::new("g");
        let win = graph.add_node(Node::new("win", NodeParams::Window(WindowParams::default())));
        let cam = graph.add_node(Node::new("cam", NodeParams::Camera(CameraParams::default())));
        let img = graph.add_node(Node::new("img", NodeParams::Image(ImageParams::default())));
        graph.connect(cam, win).unwrap();
        graph.connect(img, win).unwrap();

        let node = graph.node(win).unwrap().clone();
        let ctx = ctx(&graph, &DetachedHost, PathBuf::from("."));
        let props = node_properties(&node, &ctx).unwrap();
        assert_eq!(props["layout"].to_string(), "[0, 1]");
        assert_eq!(props["fullscreen"].to_string(), "-1");
        assert_eq!(props["decorated"].to_string(), "1");
    }

    #[test]
    fn test_fullscreen_window_exports_screen_index() {
        let graph = NodeGraph::new("g");
        let node = Node::new(
            "win",
            NodeParams::Window(WindowParams {
                fullscreen: true,
                screen: 2,
                ..WindowParams::default()
            }),
        );
        let ctx = ctx(&graph, &DetachedHost, PathBuf::from("."));
        let props = node_properties(&node, &ctx).unwrap();
        assert_eq!(props["fullscreen"].to_string(), "2");
    }

    #[test]
    fn test_object_defaults() {
        let graph = NodeGraph::new("g");
        let node = Node::new("obj", NodeParams::Object(ObjectParams::default()));
        let ctx = ctx(&graph, &DetachedHost, PathBuf::from("."));
        let props = node_properties(&node, &ctx).unwrap();
        assert_eq!(props["type"].to_string(), "\"object\"");
        assert_eq!(props["color"].to_string(), "[1.0, 1.0, 1.0, 1.0]");
        assert_eq!(props["sideness"].to_string(), "0");
    }

    #[test]
    fn test_live_mesh_writes_obj_and_exports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let graph = NodeGraph::new("g");
        let node = Node::new(
            "dome_geo",
            NodeParams::Mesh(MeshParams {
                source: MeshSource::Object {
                    name: "Dome".to_string(),
                },
            }),
        );
        let ctx = ctx(&graph, &StubHost, dir.path().to_path_buf());
        let props = node_properties(&node, &ctx).unwrap();

        let obj_path = dir.path().join("dome_geo.obj");
        assert!(obj_path.exists());
        assert_eq!(
            props["file"].to_string(),
            format!("\"{}\"", obj_path.display())
        );
    }
}
