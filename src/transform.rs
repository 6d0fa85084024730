use nalgebra::{Matrix4, Rotation3, Translation3, Unit, Vector3};

const TOLERANCE: f32 = 1e-4;

/// Placement of an object built from named translate, rotate and scale parts.
///
/// The parts are kept separately so every call site composes them in the same
/// order: `T * R * S`. Scale and rotation act in local space, translation moves
/// the result to its world position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    translation: Matrix4<f32>,
    rotation: Matrix4<f32>,
    scale: Matrix4<f32>,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translation: Matrix4::identity(),
            rotation: Matrix4::identity(),
            scale: Matrix4::identity(),
        }
    }

    pub fn translated(mut self, offset: Vector3<f32>) -> Self {
        let translation: Translation3<f32> = offset.into();
        self.translation = translation.to_homogeneous();
        self
    }

    /// Rotation of `angle_deg` degrees around `axis`. Angles within tolerance of
    /// zero (or a zero axis) leave the rotation at identity.
    pub fn rotated(mut self, axis: Vector3<f32>, angle_deg: f32) -> Self {
        self.rotation = if angle_deg.abs() > TOLERANCE && axis.norm() > TOLERANCE {
            Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle_deg.to_radians())
                .to_homogeneous()
        } else {
            Matrix4::identity()
        };
        self
    }

    /// Uses `rotation` verbatim as the rotation part.
    pub fn with_rotation_matrix(mut self, rotation: Matrix4<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scaled(mut self, factors: Vector3<f32>) -> Self {
        self.scale = Matrix4::new_nonuniform_scaling(&factors);
        self
    }

    pub fn scaled_uniform(self, factor: f32) -> Self {
        self.scaled(Vector3::repeat(factor))
    }

    pub fn translation(&self) -> &Matrix4<f32> {
        &self.translation
    }

    pub fn rotation(&self) -> &Matrix4<f32> {
        &self.rotation
    }

    pub fn scale(&self) -> &Matrix4<f32> {
        &self.scale
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        self.translation * self.rotation * self.scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Transform> for Matrix4<f32> {
    fn from(transform: Transform) -> Self {
        transform.matrix()
    }
}
