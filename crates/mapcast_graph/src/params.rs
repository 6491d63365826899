// SPDX-License-Identifier: MIT OR Apache-2.0
//! Kind-specific node parameters.
//!
//! Every node kind owns one parameter struct; the [`NodeParams`] tagged
//! union keeps the set closed so `kind`/`validate` dispatch is exhaustive
//! at compile time.

use crate::error::ValidationError;
use crate::host::HostScene;
use crate::node::NodeKind;
use serde::{Deserialize, Serialize};

/// World-level configuration held by the traversal root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldParams {
    /// Engine refresh rate in frames per second
    pub framerate: i64,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self { framerate: 60 }
    }
}

/// Per-display engine process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneParams {
    /// Physical display index driven by this scene
    pub display: i64,
    /// Buffer swap interval (0 disables vsync)
    pub swap_interval: i64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            display: 0,
            swap_interval: 1,
        }
    }
}

/// Projection camera parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraParams {
    /// Name of the bound host camera object, if any. When set, the export
    /// asks the host for the full camera rig (eye, target, up, fov,
    /// principal point).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Render target width in pixels
    pub width: i64,
    /// Render target height in pixels
    pub height: i64,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            object: None,
            width: 1920,
            height: 1080,
        }
    }
}

/// Where an image node gets its pixels from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImageSource {
    /// Still image or video file on disk
    File {
        /// Path to the media file
        path: String,
        /// Mirror vertically
        flip: bool,
        /// Mirror horizontally
        flop: bool,
        /// Treat the file as sRGB encoded
        srgb: bool,
        /// Sync playback to the engine clock
        clock: bool,
    },
    /// Live texture published by another application
    Stream {
        /// Publishing server name
        server_name: String,
        /// Publishing application name
        app_name: String,
    },
}

impl Default for ImageSource {
    fn default() -> Self {
        Self::File {
            path: String::new(),
            flip: false,
            flop: false,
            srgb: true,
            clock: false,
        }
    }
}

/// Image node parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageParams {
    /// Pixel source
    pub source: ImageSource,
}

/// Where a mesh node gets its geometry from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MeshSource {
    /// Geometry file on disk
    File {
        /// Path to the geometry file
        path: String,
    },
    /// Live host object, exported to an auxiliary geometry file beside the
    /// configuration at export time
    Object {
        /// Host object name
        name: String,
    },
}

impl Default for MeshSource {
    fn default() -> Self {
        Self::File {
            path: String::new(),
        }
    }
}

/// Mesh node parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshParams {
    /// Geometry source
    pub source: MeshSource,
}

/// Drawable object parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectParams {
    /// Base color as RGBA
    pub color: [f64; 4],
    /// Which face side is rendered (0 both, 1 front, 2 back)
    pub sideness: i64,
}

impl Default for ObjectParams {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0, 1.0],
            sideness: 0,
        }
    }
}

/// Virtual probe parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeParams {
    /// Probe render width in pixels
    pub width: i64,
    /// Probe render height in pixels
    pub height: i64,
    /// Re-projection applied by the probe
    pub projection: String,
    /// Probe position in world units
    pub position: [f64; 3],
    /// Probe rotation in degrees
    pub rotation: [f64; 3],
}

impl Default for ProbeParams {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            projection: "equirectangular".to_string(),
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
        }
    }
}

/// Output window parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowParams {
    /// Draw OS window decorations
    pub decorated: bool,
    /// Make the window fullscreen on `screen`
    pub fullscreen: bool,
    /// Screen index used when `fullscreen` is set
    pub screen: i64,
    /// Window position on the desktop
    pub position: [f64; 2],
    /// Window width in pixels
    pub width: i64,
    /// Window height in pixels
    pub height: i64,
    /// Render to an sRGB framebuffer
    pub srgb: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            decorated: true,
            fullscreen: false,
            screen: 0,
            position: [0.0, 0.0],
            width: 1920,
            height: 1080,
            srgb: true,
        }
    }
}

/// Control-surface parameters. The GUI carries no tunable state of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuiParams {}

/// Kind-specific parameters, one variant per node kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NodeParams {
    /// Projection camera
    Camera(CameraParams),
    /// Texture source
    Image(ImageParams),
    /// Geometry source
    Mesh(MeshParams),
    /// Textured drawable
    Object(ObjectParams),
    /// Virtual probe
    Probe(ProbeParams),
    /// Engine process
    Scene(SceneParams),
    /// Output window
    Window(WindowParams),
    /// Control surface
    Gui(GuiParams),
    /// Traversal root
    World(WorldParams),
}

impl NodeParams {
    /// The kind tag for this parameter set
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Camera(_) => NodeKind::Camera,
            Self::Image(_) => NodeKind::Image,
            Self::Mesh(_) => NodeKind::Mesh,
            Self::Object(_) => NodeKind::Object,
            Self::Probe(_) => NodeKind::Probe,
            Self::Scene(_) => NodeKind::Scene,
            Self::Window(_) => NodeKind::Window,
            Self::Gui(_) => NodeKind::Gui,
            Self::World(_) => NodeKind::World,
        }
    }

    /// Check that this node's own state is complete enough to export.
    ///
    /// Only the node's parameters and host lookups for bound objects are
    /// inspected; graph context never is. `node_name` is used to build
    /// user-facing messages.
    pub fn validate(
        &self,
        node_name: &str,
        host: &dyn HostScene,
    ) -> Result<(), ValidationError> {
        match self {
            Self::Image(params) => match &params.source {
                ImageSource::File { path, .. } if path.is_empty() => {
                    Err(ValidationError::MissingFile {
                        node: node_name.to_string(),
                    })
                }
                ImageSource::Stream { server_name, .. } if server_name.is_empty() => {
                    Err(ValidationError::MissingServer {
                        node: node_name.to_string(),
                    })
                }
                _ => Ok(()),
            },
            Self::Mesh(params) => match &params.source {
                MeshSource::File { path } if path.is_empty() => {
                    Err(ValidationError::MissingFile {
                        node: node_name.to_string(),
                    })
                }
                MeshSource::File { .. } => Ok(()),
                MeshSource::Object { name } => {
                    let geometry = host.mesh_geometry(name).map_err(|_| {
                        ValidationError::UnknownObject {
                            node: node_name.to_string(),
                            object: name.clone(),
                        }
                    })?;
                    if geometry.uvs.is_empty() {
                        return Err(ValidationError::MissingUvs {
                            node: node_name.to_string(),
                            object: name.clone(),
                        });
                    }
                    Ok(())
                }
            },
            Self::Camera(params) => {
                if let Some(object) = &params.object {
                    if host.camera_rig(object).is_none() {
                        return Err(ValidationError::UnknownObject {
                            node: node_name.to_string(),
                            object: object.clone(),
                        });
                    }
                }
                Ok(())
            }
            // The remaining kinds have no state that can be incomplete.
            Self::Object(_)
            | Self::Probe(_)
            | Self::Scene(_)
            | Self::Window(_)
            | Self::Gui(_)
            | Self::World(_) => Ok(()),
        }
    }
}
