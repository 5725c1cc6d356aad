use cgmath::{Matrix4, One, Quaternion, Vector3, Zero};
use serde::Serialize;

use crate::{
    controllers::TargetRayMode,
    vr_config::{ControllerId, Handedness},
};

/// World-space position and rotation as reported by the XR runtime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pose {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

impl Pose {
    pub fn new(position: Vector3<f32>, rotation: Quaternion<f32>) -> Self {
        Pose { position, rotation }
    }

    pub fn world_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position) * Matrix4::from(self.rotation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose {
            position: Vector3::zero(),
            rotation: Quaternion::one(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ControllerState {
    pub pose: Pose,
    /// Set by select-start, cleared by select-end.
    pub is_selecting: bool,
    /// `Some` while the controller is connected.
    pub target_ray_mode: Option<TargetRayMode>,
}

impl ControllerState {
    pub fn is_connected(&self) -> bool {
        self.target_ray_mode.is_some()
    }
}

/// Snapshot of everything the host input system tracks, updated from the
/// input queue at the start of each frame.
#[derive(Clone, Debug, Default)]
pub struct InputContext {
    controllers: [ControllerState; 2],
    hand_poses: [Option<Pose>; 2],
}

impl InputContext {
    pub fn controller(&self, id: ControllerId) -> &ControllerState {
        &self.controllers[id.index()]
    }

    pub fn controller_mut(&mut self, id: ControllerId) -> &mut ControllerState {
        &mut self.controllers[id.index()]
    }

    pub fn hand_pose(&self, hand: Handedness) -> Option<Pose> {
        self.hand_poses[hand.index()]
    }

    pub fn set_hand_pose(&mut self, hand: Handedness, pose: Option<Pose>) {
        self.hand_poses[hand.index()] = pose;
    }

    /// First selecting controller in priority order.
    pub fn aiming_controller(&self) -> Option<ControllerId> {
        ControllerId::ALL
            .into_iter()
            .find(|id| self.controller(*id).is_selecting)
    }
}
