use std::io::{self, Read};
use std::path::Path;

use crate::assets::{Asset, AssetLocator, ShaderId};
use crate::logging::debug;

/// A vertex + fragment source pair. Compilation belongs to the GPU backend.
#[derive(Clone, Debug)]
pub struct ShaderProgram {
    pub id: ShaderId,
    vertex_source: String,
    fragment_source: String,
}

impl ShaderProgram {
    pub fn new(vertex_source: impl Into<String>, fragment_source: impl Into<String>) -> Self {
        Self {
            id: 0,
            vertex_source: vertex_source.into(),
            fragment_source: fragment_source.into(),
        }
    }

    pub fn from_asset(
        asset_locator: &AssetLocator,
        vertex_path: &Path,
        fragment_path: &Path,
    ) -> io::Result<Self> {
        let vertex_source = read_source(asset_locator, vertex_path)?;
        let fragment_source = read_source(asset_locator, fragment_path)?;
        debug!(
            "Read shader sources {} ({} bytes) and {} ({} bytes)",
            vertex_path.display(),
            vertex_source.len(),
            fragment_path.display(),
            fragment_source.len()
        );

        Ok(Self::new(vertex_source, fragment_source))
    }

    pub fn vertex_source(&self) -> &str {
        &self.vertex_source
    }

    pub fn fragment_source(&self) -> &str {
        &self.fragment_source
    }
}

fn read_source(asset_locator: &AssetLocator, path: &Path) -> io::Result<String> {
    let mut reader = asset_locator.open(path)?;
    let mut source = String::with_capacity(1024);
    reader.read_to_string(&mut source)?;
    Ok(source)
}

impl Asset for ShaderProgram {
    fn id(&self) -> ShaderId {
        self.id
    }
}
