use cgmath::{Vector3, vec3};
use engine::scene::{Geometry, Material, SceneObject, placement};

use crate::physics::{SceneColliders, SceneCollisionGroups};

pub const TREE_POSITIONS: [[f32; 3]; 8] = [
    [-10.0, 3.0, -10.0],
    [10.0, 3.0, -10.0],
    [-10.0, 3.0, 10.0],
    [10.0, 3.0, 10.0],
    [12.0, 3.0, 0.0],
    [-12.0, 3.0, 0.0],
    [0.0, 3.0, -13.0],
    [0.0, 3.0, 13.0],
];

pub const ROCK_POSITIONS: [[f32; 3]; 11] = [
    [-20.0, -2.0, 0.0],
    [-18.0, -2.0, 12.0],
    [-7.0, -2.0, -6.0],
    [9.0, -2.0, -12.0],
    [-15.0, -2.0, -8.0],
    [8.0, -2.0, 12.0],
    [17.0, -2.0, -19.0],
    [5.0, -2.0, 19.0],
    [-12.0, -2.0, -6.0],
    [19.0, -2.0, -6.0],
    [12.0, -2.0, 18.0],
];

const TREE_SCALE: f32 = 5.0;
const ROCK_SCALE: f32 = 0.01;
const LAMP_POSITION: Vector3<f32> = Vector3::new(-1.5, -1.0, 1.0);
const LAMP_SCALE: f32 = 0.5;

/// Trunk blocker spanning from the ground top up to the model origin.
const TREE_TRUNK_SIZE: Vector3<f32> = Vector3::new(0.8, 5.5, 0.8);
const ROCK_RADIUS: f32 = 0.6;
const LAMP_SIZE: Vector3<f32> = Vector3::new(0.4, 2.0, 0.4);

fn model(name: String, asset: &str, position: Vector3<f32>, scale: f32) -> SceneObject {
    SceneObject::new(
        name,
        Geometry::Model {
            asset: asset.to_owned(),
        },
        Material::FromAsset,
    )
    .with_transform(placement(position, vec3(scale, scale, scale)))
}

pub fn create_trees(colliders: &mut SceneColliders) -> Vec<SceneObject> {
    TREE_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let position = Vector3::from(*p);
            colliders.add_box(
                position - vec3(0.0, TREE_TRUNK_SIZE.y * 0.5, 0.0),
                TREE_TRUNK_SIZE,
                SceneCollisionGroups::PROP,
            );
            model(format!("tree_{}", i), "models/tree.glb", position, TREE_SCALE)
                .with_shadows(true, false)
        })
        .collect()
}

pub fn create_rocks(colliders: &mut SceneColliders) -> Vec<SceneObject> {
    ROCK_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let position = Vector3::from(*p);
            colliders.add_ball(position, ROCK_RADIUS, SceneCollisionGroups::PROP);
            model(format!("rock_{}", i), "models/rock.glb", position, ROCK_SCALE)
                .with_shadows(true, false)
        })
        .collect()
}

pub fn create_lamp(colliders: &mut SceneColliders) -> SceneObject {
    colliders.add_box(
        LAMP_POSITION - vec3(0.0, 0.5, 0.0),
        LAMP_SIZE,
        SceneCollisionGroups::PROP,
    );
    model("lamp".to_owned(), "models/lamp.glb", LAMP_POSITION, LAMP_SCALE)
}
