use std::collections::BTreeMap;

use nalgebra::Matrix4;
use thiserror::Error;

use crate::assets::{ShaderId, TextureId};
use crate::mesh::{BBox, MeshDataset, MeshError};
use crate::rendering::material::{Color, Material};
use crate::rendering::{PolygonMode, ShadingMode};
use crate::transform::Transform;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjectError {
    #[error(transparent)]
    Mesh(#[from] MeshError),
    #[error("shininess must be non-negative, got {0}")]
    NegativeShininess(f32),
}

/// A renderable mesh with placement, material and shader bindings.
///
/// Everything except the animation time is written during setup. The frame
/// driver is the only writer of `time` afterwards.
#[derive(Clone, Debug)]
pub struct SceneObject {
    mesh: MeshDataset,
    model_matrix: Matrix4<f32>,
    material: Material,
    textures: BTreeMap<String, TextureId>,
    shader: Option<ShaderId>,
    time: f32,
    declared_polygon_mode: Option<PolygonMode>,
    declared_shading_mode: Option<ShadingMode>,
    polygon_mode: PolygonMode,
    shading_mode: ShadingMode,
    data_refreshed: bool,
    bbox: Option<BBox>,
}

impl SceneObject {
    pub(crate) fn new(mesh: MeshDataset) -> Self {
        Self {
            mesh,
            model_matrix: Matrix4::identity(),
            material: Material::default(),
            textures: BTreeMap::new(),
            shader: None,
            time: 0.0,
            declared_polygon_mode: None,
            declared_shading_mode: None,
            polygon_mode: PolygonMode::default(),
            shading_mode: ShadingMode::default(),
            data_refreshed: false,
            bbox: None,
        }
    }

    pub fn mesh(&self) -> &MeshDataset {
        &self.mesh
    }

    pub fn model_matrix(&self) -> &Matrix4<f32> {
        &self.model_matrix
    }

    /// Replaces the whole model matrix.
    pub fn set_model_matrix(&mut self, model_matrix: Matrix4<f32>) {
        self.model_matrix = model_matrix;
    }

    pub fn set_transform(&mut self, transform: &Transform) {
        self.model_matrix = transform.matrix();
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_ka(&mut self, ambient: Color) {
        self.material.ambient = ambient;
    }

    pub fn set_kd(&mut self, diffuse: Color) {
        self.material.diffuse = diffuse;
    }

    pub fn set_ks(&mut self, specular: Color) {
        self.material.specular = specular;
    }

    pub fn set_shininess(&mut self, shininess: f32) -> Result<(), ObjectError> {
        if shininess.is_nan() || shininess < 0.0 {
            return Err(ObjectError::NegativeShininess(shininess));
        }
        self.material.shininess = shininess;
        Ok(())
    }

    pub fn add_texture(&mut self, name: &str, texture: TextureId) {
        self.textures.insert(name.to_string(), texture);
    }

    pub fn texture(&self, name: &str) -> Option<TextureId> {
        self.textures.get(name).copied()
    }

    pub fn textures(&self) -> impl Iterator<Item = (&str, TextureId)> {
        self.textures.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn shader(&self) -> Option<ShaderId> {
        self.shader
    }

    pub fn set_shader(&mut self, shader: ShaderId) {
        self.shader = Some(shader);
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub(crate) fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    /// Overrides the polygon mode applied at finalization.
    pub fn declare_polygon_mode(&mut self, mode: PolygonMode) {
        self.declared_polygon_mode = Some(mode);
    }

    /// Overrides the shading mode applied at finalization.
    pub fn declare_shading_mode(&mut self, mode: ShadingMode) {
        self.declared_shading_mode = Some(mode);
    }

    pub fn polygon_mode(&self) -> PolygonMode {
        self.polygon_mode
    }

    pub fn shading_mode(&self) -> ShadingMode {
        self.shading_mode
    }

    pub fn is_data_refreshed(&self) -> bool {
        self.data_refreshed
    }

    pub fn is_initialized(&self) -> bool {
        self.bbox.is_some()
    }

    /// Local-space bounds, available once the object has been initialized.
    pub fn bbox(&self) -> Option<&BBox> {
        self.bbox.as_ref()
    }

    pub(crate) fn finalize(&mut self) {
        self.polygon_mode = self.declared_polygon_mode.unwrap_or_default();
        self.shading_mode = self.declared_shading_mode.unwrap_or_default();
        self.data_refreshed = true;
        self.initialize();
    }

    fn initialize(&mut self) {
        if self.bbox.is_none() {
            self.bbox = Some(self.mesh.bbox());
        }
    }
}
