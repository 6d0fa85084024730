mod glade;

use std::path::Path;

use nalgebra::Point3;
use thiserror::Error;

pub use glade::{build_objects, register_assets, register_lights, Glade};

use crate::assets::{AssetError, AssetLocator};
use crate::config::ObjPartPolicy;
use crate::lighting::LightingError;
use crate::logging::{info, warn};
use crate::mesh::Element;
use crate::obj_loader::{LoadError, ObjLoader, VertexMode};
use crate::object::{ObjectError, SceneObject};
use crate::scene::{ObjectId, SceneError, SceneRegistry};

/// Anything that stops the scene from being built. Always fatal.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("failed to load mesh")]
    Load(#[from] LoadError),
    #[error("asset setup failed")]
    Asset(#[from] AssetError),
    #[error("scene construction failed")]
    Scene(#[from] SceneError),
    #[error("light setup failed")]
    Lighting(#[from] LightingError),
}

impl From<ObjectError> for SetupError {
    fn from(e: ObjectError) -> Self {
        SetupError::Scene(e.into())
    }
}

/// Setup-time construction helpers around a fresh [`SceneRegistry`].
pub struct SceneBuilder<'a> {
    registry: SceneRegistry,
    asset_locator: &'a AssetLocator,
    obj_parts: ObjPartPolicy,
    vertex_mode: VertexMode,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(asset_locator: &'a AssetLocator, obj_parts: ObjPartPolicy) -> Self {
        Self {
            registry: SceneRegistry::new(),
            asset_locator,
            obj_parts,
            vertex_mode: VertexMode::Discrete,
        }
    }

    pub fn with_vertex_mode(mut self, vertex_mode: VertexMode) -> Self {
        self.vertex_mode = vertex_mode;
        self
    }

    /// Loads an OBJ file and creates objects from it according to the part
    /// policy, running `setup` on each new object.
    pub fn add_obj_mesh_object<F>(
        &mut self,
        path: &Path,
        setup: F,
    ) -> Result<Vec<ObjectId>, SetupError>
    where
        F: Fn(&mut SceneObject) -> Result<(), SetupError>,
    {
        let mut parts = ObjLoader::new(self.asset_locator)
            .with_vertex_mode(self.vertex_mode)
            .load_from_file(path)?;

        if self.obj_parts == ObjPartPolicy::First && parts.len() > 1 {
            warn!(
                "{} has {} parts, only the first one is used",
                path.display(),
                parts.len()
            );
            parts.truncate(1);
        }

        let mut ids = Vec::with_capacity(parts.len());
        for mesh in &parts {
            let id = self.registry.add_from_mesh(mesh)?;
            info!(
                "Loaded mesh from {}, #vtx: {}, #ele: {}",
                path.display(),
                mesh.vertices().len(),
                mesh.elements().len()
            );
            setup(self.registry.get_mut(id)?)?;
            ids.push(id);
        }

        Ok(ids)
    }

    pub fn add_tri_mesh_object(
        &mut self,
        vertices: &[Point3<f32>],
        elements: &[Element],
    ) -> Result<ObjectId, SetupError> {
        Ok(self.registry.add_from_arrays(vertices, elements)?)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject, SetupError> {
        Ok(self.registry.get_mut(id)?)
    }

    /// Runs the finalization pass and hands over the frozen registry.
    pub fn finish(mut self) -> SceneRegistry {
        self.registry.finalize();
        self.registry
    }
}
