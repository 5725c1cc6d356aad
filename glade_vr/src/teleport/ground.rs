use cgmath::{InnerSpace, Matrix3, Matrix4, Vector3, vec3};

use crate::physics::{SceneColliders, SceneCollisionGroups};

/// A ray from a controller along its local `-Z` axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AimRay {
    pub origin: Vector3<f32>,
    pub direction: Vector3<f32>,
}

impl AimRay {
    /// Origin is the matrix translation; direction uses only the rotation
    /// part (columns normalized, so any scale on the controller is ignored).
    pub fn from_world_matrix(world: &Matrix4<f32>) -> AimRay {
        let rotation = Matrix3::from_cols(
            world.x.truncate().normalize(),
            world.y.truncate().normalize(),
            world.z.truncate().normalize(),
        );

        AimRay {
            origin: world.w.truncate(),
            direction: (rotation * vec3(0.0, 0.0, -1.0)).normalize(),
        }
    }

    pub fn point_at(&self, distance: f32) -> Vector3<f32> {
        self.origin + self.direction * distance
    }
}

/// The surface teleport rays are tested against. Implementations return the
/// nearest hit along the ray, or `None` on a miss.
pub trait GroundSurface {
    fn cast_ray(&self, ray: &AimRay, max_distance: f32) -> Option<Vector3<f32>>;
}

/// Infinite horizontal plane at `height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneGround {
    pub height: f32,
}

impl GroundSurface for PlaneGround {
    fn cast_ray(&self, ray: &AimRay, max_distance: f32) -> Option<Vector3<f32>> {
        if ray.direction.y.abs() < f32::EPSILON {
            return None;
        }

        let distance = (self.height - ray.origin.y) / ray.direction.y;
        if !(0.0..=max_distance).contains(&distance) {
            return None;
        }

        Some(ray.point_at(distance))
    }
}

/// Only colliders tagged `GROUND` participate; props never block the aim.
impl GroundSurface for SceneColliders {
    fn cast_ray(&self, ray: &AimRay, max_distance: f32) -> Option<Vector3<f32>> {
        self.ray_cast(
            ray.origin,
            ray.direction,
            max_distance,
            SceneCollisionGroups::GROUND,
        )
        .map(|hit| hit.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Quaternion, Rotation3};

    fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < 1e-4, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_ray_from_identity_points_forward() {
        let world = Matrix4::from_translation(vec3(1.0, 2.0, 3.0));
        let ray = AimRay::from_world_matrix(&world);
        assert_close(ray.origin, vec3(1.0, 2.0, 3.0));
        assert_close(ray.direction, vec3(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_ray_ignores_scale() {
        let world = Matrix4::from(Quaternion::from_angle_y(Deg(90.0))) * Matrix4::from_scale(3.0);
        let ray = AimRay::from_world_matrix(&world);
        assert_close(ray.direction, vec3(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_scene_colliders_respect_max_distance() {
        let mut colliders = SceneColliders::new();
        colliders.add_box(
            vec3(0.0, -0.5, 0.0),
            vec3(20.0, 1.0, 20.0),
            SceneCollisionGroups::GROUND,
        );
        colliders.update();

        let down = AimRay {
            origin: vec3(0.0, 4.0, 0.0),
            direction: vec3(0.0, -1.0, -1.0).normalize(),
        };
        // The top face is reached after 4 * sqrt(2) ~= 5.66 units.
        assert_close(colliders.cast_ray(&down, 10.0).unwrap(), vec3(0.0, 0.0, -4.0));
        assert!(colliders.cast_ray(&down, 5.0).is_none());
    }

    #[test]
    fn test_plane_hit_and_miss() {
        let ground = PlaneGround { height: 0.0 };
        let down = AimRay {
            origin: vec3(0.0, 2.0, 0.0),
            direction: vec3(0.0, -1.0, -1.0).normalize(),
        };
        assert_close(ground.cast_ray(&down, 100.0).unwrap(), vec3(0.0, 0.0, -2.0));
        assert!(ground.cast_ray(&down, 1.0).is_none());

        let level = AimRay {
            origin: vec3(0.0, 2.0, 0.0),
            direction: vec3(0.0, 0.0, -1.0),
        };
        assert!(ground.cast_ray(&level, 100.0).is_none());

        let up = AimRay {
            origin: vec3(0.0, 2.0, 0.0),
            direction: vec3(0.0, 1.0, 0.0),
        };
        assert!(ground.cast_ray(&up, 100.0).is_none());
    }
}
