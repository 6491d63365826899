// SPDX-License-Identifier: MIT OR Apache-2.0
//! OBJ writer for live-object meshes.
//!
//! Mesh nodes bound to a host object get their geometry materialized next
//! to the configuration file, in the OBJ flavor the engine loads:
//! `v`/`vt`/`vn` records followed by triangle `f` records with 1-based,
//! per-attribute indices.

use mapcast_graph::{FaceVertex, MeshGeometry};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write one mesh as OBJ text into `out`
pub fn write_obj<W: Write>(out: &mut W, name: &str, mesh: &MeshGeometry) -> io::Result<()> {
    writeln!(out, "o {name}")?;
    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for t in &mesh.uvs {
        writeln!(out, "vt {} {}", t[0], t[1])?;
    }
    for n in &mesh.normals {
        writeln!(out, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    for triangle in &mesh.triangles {
        write!(out, "f")?;
        for vertex in triangle {
            write!(out, " ")?;
            write_face_vertex(out, vertex)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_face_vertex<W: Write>(out: &mut W, vertex: &FaceVertex) -> io::Result<()> {
    // OBJ indices are 1-based.
    let p = vertex.position + 1;
    match (vertex.uv, vertex.normal) {
        (None, None) => write!(out, "{p}"),
        (Some(t), None) => write!(out, "{p}/{}", t + 1),
        (None, Some(n)) => write!(out, "{p}//{}", n + 1),
        (Some(t), Some(n)) => write!(out, "{p}/{}/{}", t + 1, n + 1),
    }
}

/// Write `node_name`'s geometry to `<dir>/<node_name>.obj` and return the
/// file path for the node's `file` property.
pub fn export_object_mesh(
    dir: &Path,
    node_name: &str,
    mesh: &MeshGeometry,
) -> io::Result<PathBuf> {
    let path = dir.join(format!("{node_name}.obj"));
    let file = std::fs::File::create(&path)?;
    let mut out = BufWriter::new(file);
    write_obj(&mut out, node_name, mesh)?;
    out.flush()?;
    tracing::debug!(path = %path.display(), "wrote auxiliary geometry file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> MeshGeometry {
        MeshGeometry {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            uvs: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            normals: vec![[0.0, 0.0, 1.0]],
            triangles: vec![[
                FaceVertex {
                    position: 0,
                    uv: Some(0),
                    normal: Some(0),
                },
                FaceVertex {
                    position: 1,
                    uv: Some(1),
                    normal: Some(0),
                },
                FaceVertex {
                    position: 2,
                    uv: Some(2),
                    normal: Some(0),
                },
            ]],
        }
    }

    #[test]
    fn test_obj_output_lines() {
        let mut out = Vec::new();
        write_obj(&mut out, "screen", &unit_triangle()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "o screen");
        assert_eq!(lines[1], "v 0 0 0");
        assert_eq!(lines[4], "vt 0 0");
        assert_eq!(lines[7], "vn 0 0 1");
        assert_eq!(lines[8], "f 1/1/1 2/2/1 3/3/1");
    }

    #[test]
    fn test_face_vertex_without_uv_or_normal() {
        let mesh = MeshGeometry {
            positions: vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            uvs: vec![],
            normals: vec![],
            triangles: vec![[
                FaceVertex {
                    position: 0,
                    uv: None,
                    normal: None,
                },
                FaceVertex {
                    position: 1,
                    uv: None,
                    normal: None,
                },
                FaceVertex {
                    position: 2,
                    uv: None,
                    normal: None,
                },
            ]],
        };
        let mut out = Vec::new();
        write_obj(&mut out, "bare", &mesh).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|l| l == "f 1 2 3"));
    }

    #[test]
    fn test_export_object_mesh_creates_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_object_mesh(dir.path(), "dome", &unit_triangle()).unwrap();
        assert_eq!(path, dir.path().join("dome.obj"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("o dome\n"));
    }
}
