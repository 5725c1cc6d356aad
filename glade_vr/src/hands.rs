use cgmath::vec3;
use engine::{
    scene::{Geometry, Material, Renderable, SceneObject, create_transform_group},
    scene_log,
};

use crate::{input_context::InputContext, vr_config::Handedness};

/// Interchangeable hand-tracking models, cycled by pinching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandModelStyle {
    Boxes,
    Spheres,
    Mesh,
}

impl HandModelStyle {
    pub fn next(self) -> HandModelStyle {
        match self {
            HandModelStyle::Boxes => HandModelStyle::Spheres,
            HandModelStyle::Spheres => HandModelStyle::Mesh,
            HandModelStyle::Mesh => HandModelStyle::Boxes,
        }
    }

    fn scene_object(self, hand: Handedness) -> SceneObject {
        let side = match hand {
            Handedness::Left => "left",
            Handedness::Right => "right",
        };
        let name = format!("hand_{}_{:?}", side, self).to_lowercase();
        let joint_color = vec3(0.8, 0.8, 0.8);

        match self {
            HandModelStyle::Boxes => SceneObject::new(
                name,
                Geometry::Box {
                    size: vec3(0.01, 0.01, 0.01),
                },
                Material::basic(joint_color),
            ),
            HandModelStyle::Spheres => SceneObject::new(
                name,
                Geometry::Sphere {
                    radius: 0.008,
                    segments: 10,
                },
                Material::basic(joint_color),
            ),
            HandModelStyle::Mesh => SceneObject::new(
                name,
                Geometry::Model {
                    asset: format!("hands/{}.glb", side),
                },
                Material::FromAsset,
            ),
        }
    }
}

/// Current model per hand; each hand cycles independently.
#[derive(Clone, Debug)]
pub struct HandModels {
    current: [HandModelStyle; 2],
}

impl Default for HandModels {
    fn default() -> Self {
        HandModels {
            current: [HandModelStyle::Boxes; 2],
        }
    }
}

impl HandModels {
    pub fn current(&self, hand: Handedness) -> HandModelStyle {
        self.current[hand.index()]
    }

    pub fn on_pinch_end(&mut self, hand: Handedness) {
        let slot = &mut self.current[hand.index()];
        *slot = slot.next();
        scene_log!(DEBUG, "{:?} hand model -> {:?}", hand, *slot);
    }

    /// The visible model for each tracked hand.
    pub fn render(&self, input: &InputContext) -> Vec<SceneObject> {
        [Handedness::Left, Handedness::Right]
            .into_iter()
            .filter_map(|hand| {
                let pose = input.hand_pose(hand)?;
                let model = self.current(hand).scene_object(hand);
                Some(create_transform_group(pose.world_matrix(), vec![model]).render_objects())
            })
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_context::Pose;

    #[test]
    fn test_pinch_cycles_through_all_styles() {
        let mut hands = HandModels::default();
        assert_eq!(hands.current(Handedness::Left), HandModelStyle::Boxes);

        hands.on_pinch_end(Handedness::Left);
        assert_eq!(hands.current(Handedness::Left), HandModelStyle::Spheres);
        hands.on_pinch_end(Handedness::Left);
        assert_eq!(hands.current(Handedness::Left), HandModelStyle::Mesh);
        hands.on_pinch_end(Handedness::Left);
        assert_eq!(hands.current(Handedness::Left), HandModelStyle::Boxes);
    }

    #[test]
    fn test_hands_cycle_independently() {
        let mut hands = HandModels::default();
        hands.on_pinch_end(Handedness::Right);
        assert_eq!(hands.current(Handedness::Left), HandModelStyle::Boxes);
        assert_eq!(hands.current(Handedness::Right), HandModelStyle::Spheres);
    }

    #[test]
    fn test_only_tracked_hands_render_one_model() {
        let mut input = InputContext::default();
        let hands = HandModels::default();
        assert!(hands.render(&input).is_empty());

        input.set_hand_pose(Handedness::Right, Some(Pose::default()));
        let objects = hands.render(&input);
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].name, "hand_right_boxes");
    }
}
