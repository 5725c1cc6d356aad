use cgmath::{Matrix4, vec3};
use engine::scene::{Blending, Geometry, Material, SceneObject, create_transform_group};
use serde::{Deserialize, Serialize};

use crate::{
    input_context::{ControllerState, InputContext},
    vr_config::ControllerId,
};

/// How a controller's target ray is produced, as reported on connect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetRayMode {
    Gaze,
    TrackedPointer,
    Screen,
    TransientPointer,
}

pub struct ControllerVisual;

impl ControllerVisual {
    /// Visual attached to a controller in its local space; `None` for modes
    /// that have nothing to draw.
    pub fn for_mode(mode: TargetRayMode) -> Option<SceneObject> {
        match mode {
            TargetRayMode::TrackedPointer => Some(Self::pointer_line()),
            TargetRayMode::Gaze => Some(Self::gaze_reticle()),
            TargetRayMode::Screen | TargetRayMode::TransientPointer => None,
        }
    }

    fn pointer_line() -> SceneObject {
        let geometry = Geometry::Lines {
            points: vec![vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0)],
            colors: Some(vec![vec3(0.5, 0.5, 0.5), vec3(0.0, 0.0, 0.0)]),
        };
        let material = Material::VertexColors {
            blending: Blending::Additive,
        };
        SceneObject::new("controller_ray", geometry, material)
    }

    fn gaze_reticle() -> SceneObject {
        let geometry = Geometry::Ring {
            inner_radius: 0.02,
            outer_radius: 0.04,
            segments: 32,
        };
        let material = Material::Basic {
            color: vec3(1.0, 1.0, 1.0),
            opacity: 0.5,
            blending: Blending::Normal,
        };
        SceneObject::new("controller_reticle", geometry, material)
            .with_transform(Matrix4::from_translation(vec3(0.0, 0.0, -1.0)))
    }

    /// Grip model shown wherever the controller is held.
    pub fn grip_model(id: ControllerId) -> SceneObject {
        let asset = match id {
            ControllerId::First => "controllers/generic-left.glb",
            ControllerId::Second => "controllers/generic-right.glb",
        };
        SceneObject::new(
            format!("controller_grip_{}", id.index()),
            Geometry::Model {
                asset: asset.to_owned(),
            },
            Material::FromAsset,
        )
    }
}

/// Scene objects for every connected controller, placed at its world pose.
pub fn render_controllers(input: &InputContext) -> Vec<SceneObject> {
    use engine::scene::Renderable;

    ControllerId::ALL
        .into_iter()
        .flat_map(|id| {
            let state: &ControllerState = input.controller(id);
            let Some(mode) = state.target_ray_mode else {
                return Vec::new();
            };

            let mut children = vec![ControllerVisual::grip_model(id)];
            children.extend(ControllerVisual::for_mode(mode));
            create_transform_group(state.pose.world_matrix(), children).render_objects()
        })
        .collect()
}
