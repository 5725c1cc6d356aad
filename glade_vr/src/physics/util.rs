use cgmath::Vector3;
use rapier3d::prelude::*;

pub fn npoint_to_cgvec(point: Point<Real>) -> Vector3<f32> {
    Vector3::new(point.x, point.y, point.z)
}

pub fn vec_to_npoint(vec: Vector3<f32>) -> Point<Real> {
    point![vec.x, vec.y, vec.z]
}

pub fn vec_to_nvec(vec: Vector3<f32>) -> Vector<Real> {
    vector![vec.x, vec.y, vec.z]
}
