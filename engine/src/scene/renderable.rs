use cgmath::{Matrix4, SquareMatrix};

use super::SceneObject;

/// Anything that can be flattened into scene objects for the host renderer.
pub trait Renderable {
    fn render_objects(&self) -> Vec<SceneObject>;
}

impl Renderable for SceneObject {
    fn render_objects(&self) -> Vec<SceneObject> {
        if self.visible {
            vec![self.clone()]
        } else {
            Vec::new()
        }
    }
}

/// Applies a parent transform to every child, e.g. controller visuals that
/// follow the controller's world pose.
pub struct TransformSceneObject {
    pub transform: Matrix4<f32>,
    pub children: Vec<Box<dyn Renderable>>,
}

impl TransformSceneObject {
    pub fn new() -> Self {
        Self::with_transform(Matrix4::identity())
    }

    pub fn with_transform(transform: Matrix4<f32>) -> Self {
        Self {
            transform,
            children: Vec::new(),
        }
    }

    pub fn add_scene_object(&mut self, scene_object: SceneObject) {
        self.children.push(Box::new(scene_object));
    }
}

impl Default for TransformSceneObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for TransformSceneObject {
    fn render_objects(&self) -> Vec<SceneObject> {
        self.children
            .iter()
            .flat_map(|child| child.render_objects())
            .map(|mut obj| {
                obj.set_transform(self.transform * obj.get_transform());
                obj
            })
            .collect()
    }
}

pub fn flatten_renderables(renderables: Vec<Box<dyn Renderable>>) -> Vec<SceneObject> {
    renderables
        .into_iter()
        .flat_map(|renderable| renderable.render_objects())
        .collect()
}

pub fn create_transform_group(
    transform: Matrix4<f32>,
    objects: Vec<SceneObject>,
) -> TransformSceneObject {
    let mut group = TransformSceneObject::with_transform(transform);
    for obj in objects {
        group.add_scene_object(obj);
    }
    group
}
