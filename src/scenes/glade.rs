use std::path::Path;

use nalgebra::{Matrix4, Point3, Vector3};

use crate::assets::Assets;
use crate::config::ViewerConfig;
use crate::lighting::Lights;
use crate::logging::info;
use crate::object::SceneObject;
use crate::scene::SceneRegistry;
use crate::scenes::{SceneBuilder, SetupError};
use crate::transform::Transform;

/// (vertex source, fragment source, name)
const SHADERS: &[(&str, &str, &str)] = &[
    ("shaders/basic.vert", "shaders/basic.frag", "basic"),
    ("shaders/basic.vert", "shaders/environment.frag", "environment"),
    ("shaders/stars.vert", "shaders/stars.frag", "stars"),
    ("shaders/basic.vert", "shaders/alphablend.frag", "blend"),
    ("shaders/billboard.vert", "shaders/alphablend.frag", "billboard"),
    ("shaders/terrain.vert", "shaders/terrain.frag", "terrain"),
    ("shaders/skybox.vert", "shaders/skybox.frag", "skybox"),
];

/// (file, name)
const TEXTURES: &[(&str, &str)] = &[
    ("tex/earth_color.png", "sphere_color"),
    ("tex/earth_normal.png", "sphere_normal"),
    ("tex/bunny_color.jpg", "bunny_color"),
    ("tex/bunny_normal.png", "bunny_normal"),
    ("tex/window.png", "window_color"),
    ("tex/buzz_color.png", "buzz_color"),
    ("tex/star.png", "star_color"),
    ("tex/Bark__0.jpg", "bark0"),
    ("tex/Bark__1.jpg", "bark1"),
    ("tex/Bark__S.jpg", "barkS"),
    ("tex/Bottom_T.jpg", "barkBottom"),
    ("tex/Mossy_Tr.jpg", "mossyTree"),
    ("tex/Oak_Leav.jpg", "oakLeaves"),
    ("tex/Sonnerat.jpg", "sonnerat"),
    ("tex/Walnut_L.jpg", "walnutLeaves"),
];

const TERRAIN_MESH: &str = "obj/plane.obj";
const TREE_MESH: &str = "obj/trees9.obj";

const TREE_X: [f32; 2] = [-6.0, 1.2];
const TREE_Y: f32 = -2.0;
const TREE_Z: f32 = -2.0;
const TREE_SCALE: f32 = 0.15;

/// The terrain-and-trees scene shown by the viewer.
pub struct Glade {
    pub registry: SceneRegistry,
    pub lights: Lights,
}

impl Glade {
    /// Full setup sequence: assets, lights, objects, finalization.
    pub fn new(config: &ViewerConfig, assets: &mut Assets) -> Result<Self, SetupError> {
        register_assets(assets)?;

        let mut lights = Lights::new();
        register_lights(&mut lights)?;

        let locator = assets.asset_locator().clone();
        let mut builder = SceneBuilder::new(&locator, config.obj_parts);
        build_objects(&mut builder, assets)?;
        let registry = builder.finish();

        info!(
            "Scene ready: {} objects, {} lights",
            registry.len(),
            lights.as_slice().len()
        );

        Ok(Self { registry, lights })
    }
}

pub fn register_assets(assets: &mut Assets) -> Result<(), SetupError> {
    for (vertex, fragment, name) in SHADERS {
        assets.add_shader_from_file(Path::new(vertex), Path::new(fragment), name)?;
    }
    for (file, name) in TEXTURES {
        assets.add_texture_from_file(Path::new(file), name)?;
    }

    Ok(())
}

pub fn register_lights(lights: &mut Lights) -> Result<(), SetupError> {
    lights.add_light(
        Point3::new(3.0, 1.0, 3.0),
        Vector3::repeat(0.1),
        Vector3::repeat(1.0),
        Vector3::repeat(0.5),
    )?;
    lights.add_light(
        Point3::new(0.0, 0.0, -5.0),
        Vector3::repeat(0.1),
        Vector3::repeat(0.9),
        Vector3::repeat(0.5),
    )?;
    lights.add_light(
        Point3::new(-5.0, 1.0, 3.0),
        Vector3::repeat(0.1),
        Vector3::repeat(0.9),
        Vector3::repeat(0.5),
    )?;

    Ok(())
}

/// Adds the terrain and the trees along the path. Shader and texture names
/// must already be registered in `assets`.
pub fn build_objects(builder: &mut SceneBuilder, assets: &Assets) -> Result<(), SetupError> {
    let terrain_shader = assets.shader_id("terrain")?;
    builder.add_obj_mesh_object(Path::new(TERRAIN_MESH), |terrain| {
        terrain.set_transform(&terrain_transform());
        terrain.set_ka(Vector3::repeat(0.3));
        terrain.set_kd(Vector3::repeat(1.0));
        terrain.set_ks(Vector3::repeat(0.2));
        terrain.set_shininess(32.0)?;
        terrain.set_shader(terrain_shader);
        Ok(())
    })?;

    let tree_shader = assets.shader_id("basic")?;
    let tree_texture = assets.texture_id("mossyTree")?;
    for x in TREE_X {
        builder.add_obj_mesh_object(Path::new(TREE_MESH), |tree| {
            tree.set_transform(&tree_transform(x));
            set_tree_material(tree)?;
            tree.add_texture("tex_color", tree_texture);
            tree.set_shader(tree_shader);
            Ok(())
        })?;
    }

    Ok(())
}

/// Plane laid flat (its +Y turned to +Z), stretched into a ground strip and
/// nudged left and down.
fn terrain_transform() -> Transform {
    #[rustfmt::skip]
    let lay_flat = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, -1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    Transform::identity()
        .translated(Vector3::new(-7.5, -3.2, -3.0))
        .with_rotation_matrix(lay_flat)
        .scaled(Vector3::new(3.0, 1.0, 4.0))
}

fn tree_transform(x: f32) -> Transform {
    Transform::identity()
        .translated(Vector3::new(x, TREE_Y, TREE_Z))
        .scaled_uniform(TREE_SCALE)
}

fn set_tree_material(tree: &mut SceneObject) -> Result<(), SetupError> {
    tree.set_ka(Vector3::new(0.05, 0.1, 0.05));
    tree.set_kd(Vector3::new(0.2, 0.5, 0.2));
    tree.set_ks(Vector3::repeat(0.05));
    tree.set_shininess(16.0)?;
    Ok(())
}
