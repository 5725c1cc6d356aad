pub mod util;

use bitflags::bitflags;
use cgmath::Vector3;
use engine::scene_log;
use rapier3d::prelude::*;

use util::{npoint_to_cgvec, vec_to_npoint, vec_to_nvec};

bitflags! {
    pub struct SceneCollisionGroups: u32 {
        const GROUND = 0b0001;
        const PROP = 0b0010;
        const ALL = Self::GROUND.bits | Self::PROP.bits;
    }
}

impl SceneCollisionGroups {
    fn to_group(self) -> Group {
        Group::from_bits_truncate(self.bits())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub collider: ColliderHandle,
    pub point: Vector3<f32>,
    pub distance: f32,
}

/// Static colliders for the scene plus the query pipeline used to ray cast
/// against them. Nothing here is simulated; there are no dynamic bodies.
pub struct SceneColliders {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    query_pipeline: QueryPipeline,
    dirty: bool,
}

impl SceneColliders {
    pub fn new() -> Self {
        SceneColliders {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            query_pipeline: QueryPipeline::new(),
            dirty: false,
        }
    }

    /// Registers an axis-aligned box given by its center and full extents.
    pub fn add_box(
        &mut self,
        center: Vector3<f32>,
        size: Vector3<f32>,
        groups: SceneCollisionGroups,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(size.x * 0.5, size.y * 0.5, size.z * 0.5)
            .translation(vec_to_nvec(center))
            .collision_groups(InteractionGroups::new(groups.to_group(), Group::ALL))
            .build();
        scene_log!(DEBUG, "collider box at {:?} size {:?} ({:?})", center, size, groups);
        self.insert(collider)
    }

    pub fn add_ball(
        &mut self,
        center: Vector3<f32>,
        radius: f32,
        groups: SceneCollisionGroups,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::ball(radius)
            .translation(vec_to_nvec(center))
            .collision_groups(InteractionGroups::new(groups.to_group(), Group::ALL))
            .build();
        self.insert(collider)
    }

    fn insert(&mut self, collider: Collider) -> ColliderHandle {
        self.dirty = true;
        self.colliders.insert(collider)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Rebuilds the acceleration structure after colliders were added.
    pub fn update(&mut self) {
        if self.dirty {
            self.query_pipeline.update(&self.bodies, &self.colliders);
            self.dirty = false;
        }
    }

    /// Nearest solid hit among colliders in `mask`. `direction` must be unit
    /// length for `distance` to be in world units.
    pub fn ray_cast(
        &self,
        origin: Vector3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
        mask: SceneCollisionGroups,
    ) -> Option<RayHit> {
        let ray = Ray::new(vec_to_npoint(origin), vec_to_nvec(direction));
        let filter =
            QueryFilter::default().groups(InteractionGroups::new(Group::ALL, mask.to_group()));

        self.query_pipeline
            .cast_ray(&self.bodies, &self.colliders, &ray, max_distance, true, filter)
            .map(|(collider, toi)| RayHit {
                collider,
                point: npoint_to_cgvec(ray.point_at(toi)),
                distance: toi,
            })
    }
}

impl Default for SceneColliders {
    fn default() -> Self {
        Self::new()
    }
}
