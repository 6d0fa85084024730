use bytemuck::{Pod, Zeroable};

use crate::assets::{Assets, TextureId};
use crate::effects::{BackgroundEffect, Skybox};
use crate::lighting::{Light, Lights};
use crate::logging::{debug, trace, warn};
use crate::object::SceneObject;

/// Read-only view of one fully updated frame.
pub struct FrameSnapshot<'a> {
    pub objects: &'a [SceneObject],
    pub background: Option<&'a BackgroundEffect>,
    pub skybox: Option<&'a Skybox>,
    pub elapsed: f32,
    pub frame: u64,
}

/// Draw and present step. Called once per frame, after every time push.
pub trait Renderer {
    fn draw(&mut self, frame: &FrameSnapshot);
}

/// Per-object uniform block as laid out for the GPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub ka: [f32; 4],
    pub kd: [f32; 4],
    pub ks: [f32; 4],
    pub shininess: f32,
    pub time: f32,
    _pad: [f32; 2],
}

impl From<&SceneObject> for ObjectUniforms {
    fn from(object: &SceneObject) -> Self {
        let material = object.material();
        Self {
            model: (*object.model_matrix()).into(),
            ka: material.ambient.push(1.0).into(),
            kd: material.diffuse.push(1.0).into(),
            ks: material.specular.push(1.0).into(),
            shininess: material.shininess,
            time: object.time(),
            _pad: [0.0; 2],
        }
    }
}

/// One light as laid out for the GPU; xyz of each field, w = 1.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LightUniforms {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

impl From<&Light> for LightUniforms {
    fn from(light: &Light) -> Self {
        Self {
            position: light.position.to_homogeneous().into(),
            ambient: light.ambient.push(1.0).into(),
            diffuse: light.diffuse.push(1.0).into(),
            specular: light.specular.push(1.0).into(),
        }
    }
}

/// Packs the fixed light block once and each frame's object uniforms into
/// contiguous staging buffers, ready for a GPU backend to upload.
///
/// Geometry of an object, and the pixels of every texture it binds, are
/// staged the first time the object is seen with its data-refreshed flag
/// set, and never again.
pub struct StagingRenderer {
    assets: Assets,
    lights: Vec<LightUniforms>,
    staging: Vec<ObjectUniforms>,
    geometry: Vec<[f32; 3]>,
    texels: Vec<u8>,
    uploaded: Vec<bool>,
    uploaded_textures: Vec<TextureId>,
    frames_drawn: u64,
    last_elapsed: f32,
}

impl StagingRenderer {
    /// Takes over the asset library that object bindings were resolved from.
    pub fn new(lights: &Lights, assets: Assets) -> Self {
        Self {
            assets,
            lights: lights.as_slice().iter().map(LightUniforms::from).collect(),
            staging: Vec::new(),
            geometry: Vec::new(),
            texels: Vec::new(),
            uploaded: Vec::new(),
            uploaded_textures: Vec::new(),
            frames_drawn: 0,
            last_elapsed: 0.0,
        }
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    /// Raw bytes of the staged light blocks.
    pub fn light_staging(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lights)
    }

    pub fn lights(&self) -> &[LightUniforms] {
        &self.lights
    }

    /// Raw bytes of the staged uniform blocks.
    pub fn staging(&self) -> &[u8] {
        bytemuck::cast_slice(&self.staging)
    }

    pub fn uniforms(&self) -> &[ObjectUniforms] {
        &self.staging
    }

    /// Every vertex position uploaded so far, in upload order.
    pub fn geometry(&self) -> &[[f32; 3]] {
        &self.geometry
    }

    /// RGBA8 pixels of every texture uploaded so far, in upload order.
    pub fn texels(&self) -> &[u8] {
        &self.texels
    }

    pub fn uploaded_textures(&self) -> &[TextureId] {
        &self.uploaded_textures
    }

    pub fn is_uploaded(&self, index: usize) -> bool {
        self.uploaded.get(index).copied().unwrap_or(false)
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn last_elapsed(&self) -> f32 {
        self.last_elapsed
    }

    fn upload_refreshed(&mut self, objects: &[SceneObject]) {
        self.uploaded.resize(objects.len(), false);
        for (index, object) in objects.iter().enumerate() {
            if self.uploaded[index] || !object.is_data_refreshed() {
                continue;
            }

            let vertices = object.mesh().vertices();
            self.geometry.extend(vertices.iter().map(|v| [v.x, v.y, v.z]));
            self.uploaded[index] = true;
            debug!("Uploaded geometry of object {index} ({} vertices)", vertices.len());

            for (name, texture_id) in object.textures() {
                self.upload_texture(name, texture_id);
            }
        }
    }

    fn upload_texture(&mut self, name: &str, texture_id: TextureId) {
        if self.uploaded_textures.contains(&texture_id) {
            return;
        }

        match self.assets.texture(texture_id) {
            Some(texture) => {
                self.texels.extend_from_slice(texture.pixels());
                self.uploaded_textures.push(texture_id);
                debug!(
                    "Uploaded texture bound as \"{name}\" ({}x{})",
                    texture.width(),
                    texture.height()
                );
            }
            None => warn!("Texture bound as \"{name}\" is not in the asset library"),
        }
    }
}

impl Renderer for StagingRenderer {
    fn draw(&mut self, frame: &FrameSnapshot) {
        self.upload_refreshed(frame.objects);

        self.staging.clear();
        self.staging
            .extend(frame.objects.iter().map(ObjectUniforms::from));
        self.frames_drawn += 1;
        self.last_elapsed = frame.elapsed;

        trace!(
            "Frame {} at {:.3}s: staged {} bytes for {} objects",
            frame.frame,
            frame.elapsed,
            self.staging().len(),
            frame.objects.len()
        );
    }
}
