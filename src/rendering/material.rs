use nalgebra::Vector3;

pub type Color = Vector3<f32>;

/// Phong lighting coefficients. Colors are not clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vector3::repeat(0.1),
            diffuse: Vector3::repeat(0.7),
            specular: Vector3::repeat(0.5),
            shininess: 32.0,
        }
    }
}
