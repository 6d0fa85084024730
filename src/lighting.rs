use nalgebra::Point3;
use thiserror::Error;

use crate::rendering::material::Color;

pub const MAX_LIGHTS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Point3<f32>,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LightingError {
    #[error("at most {} lights are supported", MAX_LIGHTS)]
    TooManyLights,
}

/// Lights fixed during setup. The frame loop only reads them.
#[derive(Clone, Debug, Default)]
pub struct Lights {
    lights: Vec<Light>,
}

impl Lights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_light(
        &mut self,
        position: Point3<f32>,
        ambient: Color,
        diffuse: Color,
        specular: Color,
    ) -> Result<(), LightingError> {
        if self.lights.len() >= MAX_LIGHTS {
            return Err(LightingError::TooManyLights);
        }

        self.lights.push(Light {
            position,
            ambient,
            diffuse,
            specular,
        });

        Ok(())
    }

    pub fn as_slice(&self) -> &[Light] {
        &self.lights
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_light_limit() {
        let mut lights = Lights::new();
        for i in 0..MAX_LIGHTS {
            lights
                .add_light(
                    Point3::new(i as f32, 0.0, 0.0),
                    Vector3::repeat(0.1),
                    Vector3::repeat(1.0),
                    Vector3::repeat(0.5),
                )
                .unwrap();
        }

        let overflow = lights.add_light(
            Point3::origin(),
            Vector3::zeros(),
            Vector3::zeros(),
            Vector3::zeros(),
        );
        assert_eq!(overflow, Err(LightingError::TooManyLights));
        assert_eq!(lights.as_slice().len(), MAX_LIGHTS);
        assert_eq!(lights.as_slice()[2].position.x, 2.0);
    }
}
