use nalgebra::Point3;
use thiserror::Error;

use crate::logging::{debug, warn};
use crate::mesh::{Element, MeshDataset, MeshError};
use crate::object::{ObjectError, SceneObject};

/// Stable identity of a registered object: its insertion position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error(transparent)]
    Object(#[from] ObjectError),
    #[error("objects cannot be added or edited after the frame loop has started")]
    Frozen,
    #[error("no object with id {0:?}")]
    UnknownObject(ObjectId),
}

impl From<MeshError> for SceneError {
    fn from(e: MeshError) -> Self {
        SceneError::Object(e.into())
    }
}

/// Append-only owner of every scene object.
///
/// Setup appends and edits; `finalize` freezes the registry, after which
/// only the frame driver's time pushes change objects. Iteration order is
/// insertion order.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    objects: Vec<SceneObject>,
    frozen: bool,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_from_mesh(&mut self, mesh: &MeshDataset) -> Result<ObjectId, SceneError> {
        self.push(SceneObject::new(mesh.clone()))
    }

    /// Builds the mesh from raw arrays; out-of-range indices are rejected.
    pub fn add_from_arrays(
        &mut self,
        vertices: &[Point3<f32>],
        elements: &[Element],
    ) -> Result<ObjectId, SceneError> {
        let mesh = MeshDataset::new(vertices.to_vec(), elements.to_vec())?;
        self.push(SceneObject::new(mesh))
    }

    fn push(&mut self, object: SceneObject) -> Result<ObjectId, SceneError> {
        if self.frozen {
            return Err(SceneError::Frozen);
        }

        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        Ok(id)
    }

    pub fn get(&self, id: ObjectId) -> Result<&SceneObject, SceneError> {
        self.objects.get(id.0).ok_or(SceneError::UnknownObject(id))
    }

    /// Setup-time access. Once finalized, objects can no longer be edited;
    /// only the frame driver advances their time.
    pub fn get_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject, SceneError> {
        if self.frozen {
            return Err(SceneError::Frozen);
        }
        self.objects
            .get_mut(id.0)
            .ok_or(SceneError::UnknownObject(id))
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub(crate) fn objects_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> {
        self.objects.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> {
        (0..self.objects.len()).map(ObjectId)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Applies render modes, flags geometry for upload and runs each object's
    /// one-time initialization, then freezes the registry. Repeat calls only
    /// re-set the same flags.
    pub fn finalize(&mut self) {
        if self.frozen {
            warn!("Scene registry finalized more than once");
        }

        for object in &mut self.objects {
            object.finalize();
        }
        self.frozen = true;

        debug!("Finalized {} scene objects", self.objects.len());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rendering::PolygonMode;
    use nalgebra::{Matrix4, Vector3};

    fn triangle_at(x: f32) -> MeshDataset {
        MeshDataset::new(
            vec![
                Point3::new(x, 0.0, 0.0),
                Point3::new(x + 1.0, 0.0, 0.0),
                Point3::new(x, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_copy_fidelity() {
        let mesh = MeshDataset::new_plane();
        let mut registry = SceneRegistry::new();
        let id = registry.add_from_mesh(&mesh).unwrap();

        let stored = registry.get(id).unwrap().mesh();
        assert_eq!(stored.vertices().len(), 4);
        assert_eq!(stored.elements().len(), 2);
        assert_eq!(stored, &mesh);
    }

    #[test]
    fn test_insertion_order_is_iteration_order() {
        let mut registry = SceneRegistry::new();
        let ids: Vec<_> = (0..5)
            .map(|i| registry.add_from_mesh(&triangle_at(i as f32)).unwrap())
            .collect();

        assert_eq!(registry.ids().collect::<Vec<_>>(), ids);
        for (i, object) in registry.objects().iter().enumerate() {
            assert_eq!(object.mesh().vertices()[0].x, i as f32);
        }
    }

    #[test]
    fn test_add_from_arrays_rejects_bad_input() {
        let mut registry = SceneRegistry::new();
        let vertices = [Point3::origin(), Point3::new(1.0, 0.0, 0.0)];

        assert_eq!(
            registry.add_from_arrays(&vertices, &[[0, 1, 2]]),
            Err(SceneError::Object(ObjectError::Mesh(
                MeshError::IndexOutOfRange {
                    element: 0,
                    index: 2,
                    vertex_count: 2
                }
            )))
        );
        assert_eq!(
            registry.add_from_arrays(&[], &[]),
            Err(MeshError::NoVertices.into())
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_no_additions_after_finalize() {
        let mut registry = SceneRegistry::new();
        registry.add_from_mesh(&MeshDataset::new_triangle()).unwrap();
        registry.finalize();

        assert_eq!(
            registry.add_from_mesh(&MeshDataset::new_triangle()),
            Err(SceneError::Frozen)
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_no_edits_after_finalize() {
        let mut registry = SceneRegistry::new();
        let id = registry.add_from_mesh(&MeshDataset::new_triangle()).unwrap();
        registry.get_mut(id).unwrap().set_ka(Vector3::new(0.3, 0.3, 0.3));
        registry.finalize();

        assert_eq!(registry.get_mut(id).err(), Some(SceneError::Frozen));
        assert_eq!(
            registry.get(id).unwrap().material().ambient,
            Vector3::new(0.3, 0.3, 0.3)
        );
    }

    #[test]
    fn test_finalize_twice_is_idempotent() {
        let mut registry = SceneRegistry::new();
        let id = registry.add_from_mesh(&MeshDataset::new_plane()).unwrap();
        {
            let object = registry.get_mut(id).unwrap();
            object.set_model_matrix(Matrix4::new_scaling(2.0));
            object.set_ka(Vector3::new(0.3, 0.3, 0.3));
            object.declare_polygon_mode(PolygonMode::Points);
        }
        registry.add_from_mesh(&MeshDataset::new_triangle()).unwrap();

        registry.finalize();
        let first: Vec<_> = registry.objects().to_vec();
        registry.finalize();

        for (before, after) in first.iter().zip(registry.objects()) {
            assert!(after.is_data_refreshed());
            assert_eq!(before.mesh(), after.mesh());
            assert_eq!(before.model_matrix(), after.model_matrix());
            assert_eq!(before.material(), after.material());
            assert_eq!(before.polygon_mode(), after.polygon_mode());
        }
        assert_eq!(registry.objects()[0].polygon_mode(), PolygonMode::Points);
        assert_eq!(registry.objects()[1].polygon_mode(), PolygonMode::Fill);
    }

    #[test]
    fn test_unknown_id() {
        let registry = SceneRegistry::new();
        assert_eq!(
            registry.get(ObjectId(3)).err(),
            Some(SceneError::UnknownObject(ObjectId(3)))
        );
    }
}
