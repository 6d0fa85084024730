use std::env;
use std::path::PathBuf;

use crate::logging::warn;

const TITLE: &str = "Glade";
const ASSET_BASE_PATH: &str = "./assets";
const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

const ASSETS_VAR: &str = "GLADE_ASSETS";
const OBJ_PARTS_VAR: &str = "GLADE_OBJ_PARTS";

/// Which datasets of a multi-part OBJ file become scene objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObjPartPolicy {
    /// Only the first part; the rest are dropped with a warning.
    #[default]
    First,
    /// One scene object per part, all sharing the declared placement.
    All,
}

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub title: String,
    pub asset_root: PathBuf,
    pub window_width: u32,
    pub window_height: u32,
    pub obj_parts: ObjPartPolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            asset_root: PathBuf::from(ASSET_BASE_PATH),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            obj_parts: ObjPartPolicy::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(ASSETS_VAR).ok(), env::var(OBJ_PARTS_VAR).ok())
    }

    fn from_vars(asset_root: Option<String>, obj_parts: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(root) = asset_root {
            config.asset_root = root.into();
        }
        match obj_parts.as_deref() {
            None => {}
            Some("first") => config.obj_parts = ObjPartPolicy::First,
            Some("all") => config.obj_parts = ObjPartPolicy::All,
            Some(other) => warn!("Ignoring unknown {OBJ_PARTS_VAR} value \"{other}\""),
        }

        config
    }
}
