use nalgebra::Point3;
use thiserror::Error;

pub type Element = [u32; 3];

/// Immutable triangle geometry: vertex positions and index triples into them.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshDataset {
    vertices: Vec<Point3<f32>>,
    elements: Vec<Element>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("mesh has no vertices")]
    NoVertices,
    #[error("mesh has no elements")]
    NoElements,
    #[error(
        "element {element} references vertex {index}, \
         but the mesh has only {vertex_count} vertices"
    )]
    IndexOutOfRange {
        element: usize,
        index: u32,
        vertex_count: usize,
    },
}

impl MeshDataset {
    /// Checks that geometry is non-empty and every index is in range.
    pub fn new(vertices: Vec<Point3<f32>>, elements: Vec<Element>) -> Result<Self, MeshError> {
        if vertices.is_empty() {
            return Err(MeshError::NoVertices);
        }
        if elements.is_empty() {
            return Err(MeshError::NoElements);
        }

        let vertex_count = vertices.len();
        for (element, triple) in elements.iter().enumerate() {
            if let Some(&index) = triple.iter().find(|&&ix| ix as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    element,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Self { vertices, elements })
    }

    pub fn new_triangle() -> Self {
        Self {
            vertices: vec![
                Point3::new(-0.5, 0.0, 0.0),
                Point3::new(0.5, 0.0, 0.0),
                Point3::new(0.0, 0.5, 0.0),
            ],
            elements: vec![[0, 1, 2]],
        }
    }

    pub fn new_plane() -> Self {
        Self {
            vertices: vec![
                Point3::new(-0.5, -0.5, 0.0),
                Point3::new(-0.5, 0.5, 0.0),
                Point3::new(0.5, 0.5, 0.0),
                Point3::new(0.5, -0.5, 0.0),
            ],
            elements: vec![[1, 2, 0], [2, 3, 0]],
        }
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn bbox(&self) -> BBox {
        let first = self.vertices[0];
        let (min, max) = self
            .vertices
            .iter()
            .fold((first, first), |(min, max), v| (min.inf(v), max.sup(v)));

        BBox { min, max }
    }
}

/// Axis-aligned bounds in the mesh's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl BBox {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn length(&self) -> f32 {
        self.max.z - self.min.z
    }
}
