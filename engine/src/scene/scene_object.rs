use cgmath::{Matrix4, SquareMatrix, Vector3, Vector4};

use super::{Geometry, Material};

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Matrix4<f32>,
    pub visible: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> SceneObject {
        SceneObject {
            name: name.into(),
            geometry,
            material,
            transform: Matrix4::identity(),
            visible: true,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn with_transform(mut self, transform: Matrix4<f32>) -> SceneObject {
        self.transform = transform;
        self
    }

    pub fn with_shadows(mut self, cast: bool, receive: bool) -> SceneObject {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    pub fn set_transform(&mut self, transform: Matrix4<f32>) {
        self.transform = transform;
    }

    pub fn get_transform(&self) -> Matrix4<f32> {
        self.transform
    }

    pub fn get_world_position(&self) -> Vector3<f32> {
        let p = self.transform * Vector4::new(0.0, 0.0, 0.0, 1.0);
        Vector3::new(p.x, p.y, p.z)
    }
}

/// Translation * uniform-or-not scale, the common case for props.
pub fn placement(position: Vector3<f32>, scale: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from_translation(position) * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
}
