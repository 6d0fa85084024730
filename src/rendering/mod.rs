pub mod material;
pub mod renderer;
pub mod shader;
pub mod texture;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolygonMode {
    #[default]
    Fill,
    Wireframe,
    Points,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadingMode {
    None,
    Lighting,
    Texture,
    TexLighting,
    #[default]
    TexAlpha,
}
