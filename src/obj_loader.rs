use std::collections::HashMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use nalgebra::Point3;
use obj::{Group, ObjData, ObjError, SimplePolygon};
use smallvec::SmallVec;
use thiserror::Error;

use crate::assets::AssetLocator;
use crate::logging::trace;
use crate::mesh::{Element, MeshDataset, MeshError};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ObjError,
    },
    #[error("{0} contains no faces")]
    NoFaces(PathBuf),
    #[error("{path}: polygon with {corners} corners cannot be triangulated")]
    DegeneratePolygon { path: PathBuf, corners: usize },
    #[error("{path}: face references position {index}, but only {count} positions are defined")]
    BadPositionIndex {
        path: PathBuf,
        index: usize,
        count: usize,
    },
    #[error("{path}: invalid mesh part")]
    Mesh {
        path: PathBuf,
        #[source]
        source: MeshError,
    },
}

/// How corners of faces map onto vertices of the produced datasets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VertexMode {
    /// Corners referring to the same OBJ position share one vertex.
    Shared,
    /// Every triangle gets three vertices of its own.
    #[default]
    Discrete,
}

/// Reads Wavefront OBJ files into one triangle dataset per object group.
pub struct ObjLoader<'a> {
    asset_locator: &'a AssetLocator,
    vertex_mode: VertexMode,
}

#[derive(Default)]
struct PartBuilder {
    vertices: Vec<Point3<f32>>,
    elements: Vec<Element>,
    remap: HashMap<usize, u32>,
}

impl<'a> ObjLoader<'a> {
    pub fn new(asset_locator: &'a AssetLocator) -> Self {
        Self {
            asset_locator,
            vertex_mode: VertexMode::default(),
        }
    }

    pub fn with_vertex_mode(mut self, vertex_mode: VertexMode) -> Self {
        self.vertex_mode = vertex_mode;
        self
    }

    pub fn load_from_file(&self, path: &Path) -> Result<Vec<MeshDataset>, LoadError> {
        let reader = self.asset_locator.open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_from_reader(reader, path)
    }

    /// `path` is only used to label errors.
    pub fn load_from_reader<R: Read>(
        &self,
        reader: R,
        path: &Path,
    ) -> Result<Vec<MeshDataset>, LoadError> {
        let obj = ObjData::load_buf(reader).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let parts = self.assemble(&obj, path)?;
        if parts.is_empty() {
            return Err(LoadError::NoFaces(path.to_path_buf()));
        }

        Ok(parts)
    }

    fn assemble(&self, obj: &ObjData, path: &Path) -> Result<Vec<MeshDataset>, LoadError> {
        let mut parts = Vec::with_capacity(1);
        for object in &obj.objects {
            for group in object.groups.iter().filter(|g| !g.polys.is_empty()) {
                trace!(
                    "Assembling group \"{}\" of object \"{}\" ({} polygons)",
                    group.name,
                    object.name,
                    group.polys.len()
                );
                let part = self.assemble_group(obj, group, path)?;
                let mesh = MeshDataset::new(part.vertices, part.elements).map_err(|source| {
                    LoadError::Mesh {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                parts.push(mesh);
            }
        }

        Ok(parts)
    }

    fn assemble_group(
        &self,
        obj: &ObjData,
        group: &Group,
        path: &Path,
    ) -> Result<PartBuilder, LoadError> {
        let positions = &obj.position;
        let mut part = PartBuilder::default();
        for poly in &group.polys {
            let triangles = triangulate(poly).ok_or_else(|| LoadError::DegeneratePolygon {
                path: path.to_path_buf(),
                corners: poly.0.len(),
            })?;

            for triangle in triangles {
                let mut element = [0; 3];
                for (slot, &position_ix) in element.iter_mut().zip(&triangle) {
                    let pos = positions.get(position_ix).ok_or_else(|| {
                        LoadError::BadPositionIndex {
                            path: path.to_path_buf(),
                            index: position_ix,
                            count: positions.len(),
                        }
                    })?;
                    *slot = part.vertex(position_ix, pos, self.vertex_mode);
                }
                part.elements.push(element);
            }
        }

        Ok(part)
    }
}

impl PartBuilder {
    fn vertex(&mut self, position_ix: usize, pos: &[f32; 3], mode: VertexMode) -> u32 {
        let vertices = &mut self.vertices;
        let mut push = || {
            vertices.push(Point3::new(pos[0], pos[1], pos[2]));
            (vertices.len() - 1) as u32
        };

        match mode {
            VertexMode::Discrete => push(),
            VertexMode::Shared => *self.remap.entry(position_ix).or_insert_with(push),
        }
    }
}

/// Fans a convex polygon into triangles of OBJ position indices.
fn triangulate(poly: &SimplePolygon) -> Option<SmallVec<[[usize; 3]; 4]>> {
    let tuples = &poly.0;
    if tuples.len() < 3 {
        return None;
    }

    let first = tuples[0].0;
    Some(
        tuples[1..]
            .windows(2)
            .map(|pair| [first, pair[0].0, pair[1].0])
            .collect(),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    const QUAD_AND_TRIANGLE: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
o plane
f 1 2 3 4
o spike
f 1 2 5
";

    fn load(source: &str, mode: VertexMode) -> Result<Vec<MeshDataset>, LoadError> {
        let locator = AssetLocator::new(std::env::temp_dir());
        ObjLoader::new(&locator)
            .with_vertex_mode(mode)
            .load_from_reader(source.as_bytes(), Path::new("test.obj"))
    }

    #[test]
    fn test_one_dataset_per_object() {
        let parts = load(QUAD_AND_TRIANGLE, VertexMode::Shared).unwrap();
        assert_eq!(parts.len(), 2);

        let plane = &parts[0];
        assert_eq!(plane.vertices().len(), 4);
        assert_eq!(plane.elements(), &[[0, 1, 2], [0, 2, 3]]);

        let spike = &parts[1];
        assert_eq!(spike.vertices().len(), 3);
        assert_eq!(spike.vertices()[2], Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_discrete_triangles_do_not_share_vertices() {
        let parts = load(QUAD_AND_TRIANGLE, VertexMode::Discrete).unwrap();
        let plane = &parts[0];
        assert_eq!(plane.vertices().len(), 6);
        assert_eq!(plane.elements(), &[[0, 1, 2], [3, 4, 5]]);
        assert_eq!(plane.vertices()[3], plane.vertices()[0]);
    }

    #[test]
    fn test_file_without_faces() {
        let result = load("v 0 0 0\nv 1 0 0\n", VertexMode::Shared);
        assert!(matches!(result, Err(LoadError::NoFaces(_))));
    }

    #[test]
    fn test_missing_file() {
        let locator = AssetLocator::new(std::env::temp_dir());
        let result = ObjLoader::new(&locator).load_from_file(Path::new("glade-missing.obj"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_loads_from_file() {
        let dir = std::env::temp_dir().join("glade-obj-loader-test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("tri.obj"), "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        let locator = AssetLocator::new(&dir);
        let parts = ObjLoader::new(&locator)
            .load_from_file(Path::new("tri.obj"))
            .unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].vertices().len(), 3);
        assert_eq!(parts[0].elements().len(), 1);
    }
}
