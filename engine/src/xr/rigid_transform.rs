use cgmath::{InnerSpace, One, Quaternion, Rotation, Vector3, Zero};

/// Translation + rotation, no scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidTransform {
    pub position: Vector3<f32>,
    pub orientation: Quaternion<f32>,
}

impl RigidTransform {
    pub fn identity() -> Self {
        RigidTransform {
            position: Vector3::zero(),
            orientation: Quaternion::one(),
        }
    }

    pub fn new(position: Vector3<f32>, orientation: Quaternion<f32>) -> Self {
        RigidTransform {
            position,
            orientation: orientation.normalize(),
        }
    }

    pub fn from_translation(position: Vector3<f32>) -> Self {
        Self::new(position, Quaternion::one())
    }

    /// `self` followed by `other`, expressed in `self`'s frame.
    pub fn multiply(&self, other: &RigidTransform) -> RigidTransform {
        RigidTransform {
            position: self.position + self.orientation.rotate_vector(other.position),
            orientation: (self.orientation * other.orientation).normalize(),
        }
    }

    pub fn inverse(&self) -> RigidTransform {
        let orientation = self.orientation.invert();
        RigidTransform {
            position: -orientation.rotate_vector(self.position),
            orientation,
        }
    }

    pub fn transform_point(&self, point: Vector3<f32>) -> Vector3<f32> {
        self.position + self.orientation.rotate_vector(point)
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{vec3, Deg, Rotation3};

    fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_multiply_translations_add() {
        let a = RigidTransform::from_translation(vec3(1.0, 2.0, 3.0));
        let b = RigidTransform::from_translation(vec3(-4.0, 0.5, 1.0));
        assert_close(a.multiply(&b).position, vec3(-3.0, 2.5, 4.0));
    }

    #[test]
    fn test_multiply_rotates_child_translation() {
        let a = RigidTransform::new(vec3(0.0, 0.0, 0.0), Quaternion::from_angle_y(Deg(90.0)));
        let b = RigidTransform::from_translation(vec3(0.0, 0.0, -1.0));
        assert_close(a.multiply(&b).position, vec3(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_inverse_round_trips_point() {
        let xform = RigidTransform::new(vec3(3.0, -1.0, 2.0), Quaternion::from_angle_x(Deg(30.0)));
        let point = vec3(0.25, 4.0, -7.0);
        let back = xform.inverse().transform_point(xform.transform_point(point));
        assert_close(back, point);
    }
}
