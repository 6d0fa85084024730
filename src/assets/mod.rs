mod asset_locator;

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

pub use crate::assets::asset_locator::AssetLocator;
use crate::logging::debug;
use crate::rendering::shader::ShaderProgram;
use crate::rendering::texture::Texture;

type AssetId = u128;
pub type TextureId = AssetId;
pub type ShaderId = AssetId;

fn new_uuid() -> AssetId {
    Uuid::new_v4().as_u128()
}

pub trait Asset {
    fn id(&self) -> AssetId;
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("no shader named \"{0}\" has been registered")]
    UnknownShader(String),
    #[error("no texture named \"{0}\" has been registered")]
    UnknownTexture(String),
    #[error("failed to read shader source for \"{name}\"")]
    ShaderSource {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to open texture {path}")]
    TextureFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode texture {path}")]
    TextureDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Name-keyed shader and texture registry, filled once during setup.
///
/// Passed explicitly to whoever needs lookups; there is no global instance.
pub struct Assets {
    asset_locator: AssetLocator,
    shader_names: HashMap<String, ShaderId>,
    texture_names: HashMap<String, TextureId>,
    textures: HashMap<TextureId, Texture>,
    shaders: HashMap<ShaderId, ShaderProgram>,
}

impl Assets {
    pub fn new(asset_locator: AssetLocator) -> Self {
        Self {
            asset_locator,
            shader_names: HashMap::new(),
            texture_names: HashMap::new(),
            textures: HashMap::new(),
            shaders: HashMap::new(),
        }
    }

    pub fn asset_locator(&self) -> &AssetLocator {
        &self.asset_locator
    }

    pub fn add_shader_from_file(
        &mut self,
        vertex_path: &Path,
        fragment_path: &Path,
        name: &str,
    ) -> Result<ShaderId, AssetError> {
        let shader = ShaderProgram::from_asset(&self.asset_locator, vertex_path, fragment_path)
            .map_err(|source| AssetError::ShaderSource {
                name: name.to_string(),
                source,
            })?;

        Ok(self.insert_shader(name, shader))
    }

    pub fn add_texture_from_file(
        &mut self,
        path: &Path,
        name: &str,
    ) -> Result<TextureId, AssetError> {
        let reader = self
            .asset_locator
            .open(path)
            .map_err(|source| AssetError::TextureFile {
                path: path.to_path_buf(),
                source,
            })?;
        let texture = Texture::from_reader(reader).map_err(|source| AssetError::TextureDecode {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded texture \"{name}\" ({}x{}) from {}",
            texture.width(),
            texture.height(),
            path.display()
        );

        Ok(self.insert_texture(name, texture))
    }

    /// Registers `shader` under `name`, replacing any earlier shader with that name.
    pub fn insert_shader(&mut self, name: &str, mut shader: ShaderProgram) -> ShaderId {
        let shader_id = new_uuid();
        shader.id = shader_id;
        if let Some(old_id) = self.shader_names.insert(name.to_string(), shader.id()) {
            self.shaders.remove(&old_id);
        }
        self.shaders.insert(shader_id, shader);

        shader_id
    }

    /// Registers `texture` under `name`, replacing any earlier texture with that name.
    pub fn insert_texture(&mut self, name: &str, mut texture: Texture) -> TextureId {
        let texture_id = new_uuid();
        texture.id = texture_id;
        if let Some(old_id) = self.texture_names.insert(name.to_string(), texture.id()) {
            self.textures.remove(&old_id);
        }
        self.textures.insert(texture_id, texture);

        texture_id
    }

    pub fn shader_id(&self, name: &str) -> Result<ShaderId, AssetError> {
        self.shader_names
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::UnknownShader(name.to_string()))
    }

    pub fn texture_id(&self, name: &str) -> Result<TextureId, AssetError> {
        self.texture_names
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::UnknownTexture(name.to_string()))
    }

    pub fn shader(&self, id: ShaderId) -> Option<&ShaderProgram> {
        self.shaders.get(&id)
    }

    pub fn texture(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(&id)
    }

    pub fn shaders(&self) -> impl Iterator<Item = &ShaderProgram> {
        self.shaders.values()
    }

    pub fn textures(&self) -> impl Iterator<Item = &Texture> {
        self.textures.values()
    }
}
