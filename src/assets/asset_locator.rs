use std::fs::File;
use std::io::{BufReader, Result};
use std::path::{Path, PathBuf};

use crate::path_wrangler::PathWrangler;

/// Resolves asset-relative paths against the configured asset root.
#[derive(Clone, Debug)]
pub struct AssetLocator {
    root: PathBuf,
}

impl AssetLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        let path = PathWrangler::new(&path.to_string_lossy())
            .with_os_convention()
            .finish();
        self.root.join(path)
    }

    pub fn open(&self, path: &Path) -> Result<BufReader<File>> {
        let f = File::open(self.resolve(path))?;
        Ok(BufReader::new(f))
    }
}
