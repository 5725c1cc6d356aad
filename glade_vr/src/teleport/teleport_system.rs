use cgmath::{Vector3, vec3};
use engine::{
    teleport_log,
    xr::{ReferenceSpace, RigidTransform},
};
use serde::Deserialize;

use super::{AimRay, GroundSurface, TeleportMarker};
use crate::{input_context::InputContext, vr_config::ControllerId};

/// Vertical offset folded into every teleport: the viewer ends up this far
/// above the targeted ground point (the offset is negated with the point).
pub const DEFAULT_HEIGHT_OFFSET: f32 = -2.5;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TeleportConfig {
    pub enabled: bool,
    pub height_offset: f32,
    pub max_ray_distance: f32,
}

impl Default for TeleportConfig {
    fn default() -> Self {
        TeleportConfig {
            enabled: true,
            height_offset: DEFAULT_HEIGHT_OFFSET,
            max_ray_distance: 100.0,
        }
    }
}

/// What a select-end did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TeleportOutcome {
    /// The active reference space is now the base space offset by `offset`.
    Teleported {
        target: Vector3<f32>,
        offset: RigidTransform,
    },
    /// Released without a ground hit.
    NoTarget,
    /// Released before any session start captured a base space.
    NoBaseReferenceSpace,
    Disabled,
}

/// Teleport targeting for both controllers.
///
/// The intersection is recomputed from scratch every frame; the marker mirrors
/// it exactly. Commits always derive from the base reference space captured at
/// session start, so successive teleports are absolute, not cumulative.
pub struct TeleportSystem {
    config: TeleportConfig,
    intersection: Option<Vector3<f32>>,
    marker: TeleportMarker,
    base_reference_space: Option<ReferenceSpace>,
    active_reference_space: Option<ReferenceSpace>,
}

impl TeleportSystem {
    pub fn new(config: TeleportConfig) -> Self {
        TeleportSystem {
            config,
            intersection: None,
            marker: TeleportMarker::default(),
            base_reference_space: None,
            active_reference_space: None,
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(TeleportConfig::default())
    }

    pub fn on_session_start(&mut self, reference_space: ReferenceSpace) {
        teleport_log!(INFO, "session started, base reference space {:?}", reference_space);
        self.base_reference_space = Some(reference_space);
        self.active_reference_space = Some(reference_space);
    }

    pub fn on_session_end(&mut self) {
        teleport_log!(INFO, "session ended");
        self.base_reference_space = None;
        self.active_reference_space = None;
        self.intersection = None;
        self.marker.visible = false;
    }

    pub fn on_select_start(&mut self, input: &mut InputContext, controller: ControllerId) {
        input.controller_mut(controller).is_selecting = true;
    }

    /// Clears the controller's select flag and, if the last evaluated frame
    /// found a ground target, relocates the viewer there.
    pub fn on_select_end(
        &mut self,
        input: &mut InputContext,
        controller: ControllerId,
    ) -> TeleportOutcome {
        input.controller_mut(controller).is_selecting = false;

        if !self.config.enabled {
            return TeleportOutcome::Disabled;
        }

        let Some(target) = self.intersection else {
            teleport_log!(DEBUG, "{:?} released without a target", controller);
            return TeleportOutcome::NoTarget;
        };

        let Some(base) = self.base_reference_space else {
            teleport_log!(
                DEBUG,
                "{:?} released over {:?} before session start, ignoring",
                controller,
                target
            );
            return TeleportOutcome::NoBaseReferenceSpace;
        };

        let offset = self.offset_for_target(target);
        self.active_reference_space = Some(base.get_offset_reference_space(&offset));
        teleport_log!(
            INFO,
            "{:?} teleported to {:?} (offset {:?})",
            controller,
            target,
            offset.position
        );

        TeleportOutcome::Teleported { target, offset }
    }

    fn offset_for_target(&self, target: Vector3<f32>) -> RigidTransform {
        RigidTransform::from_translation(vec3(
            -target.x,
            -target.y + self.config.height_offset,
            -target.z,
        ))
    }

    /// Per-frame targeting pass. Only the first selecting controller casts.
    pub fn evaluate(&mut self, input: &InputContext, ground: &dyn GroundSurface) {
        self.intersection = None;

        if self.config.enabled {
            if let Some(controller) = input.aiming_controller() {
                let pose = input.controller(controller).pose;
                let ray = AimRay::from_world_matrix(&pose.world_matrix());
                self.intersection = ground.cast_ray(&ray, self.config.max_ray_distance);
                teleport_log!(TRACE, "{:?} aim {:?} -> {:?}", controller, ray, self.intersection);
            }
        }

        if let Some(point) = self.intersection {
            self.marker.position = point;
        }
        self.marker.visible = self.intersection.is_some();
    }

    pub fn intersection(&self) -> Option<Vector3<f32>> {
        self.intersection
    }

    pub fn marker(&self) -> &TeleportMarker {
        &self.marker
    }

    pub fn base_reference_space(&self) -> Option<&ReferenceSpace> {
        self.base_reference_space.as_ref()
    }

    /// The space the renderer should query poses in.
    pub fn active_reference_space(&self) -> Option<&ReferenceSpace> {
        self.active_reference_space.as_ref()
    }

    pub fn set_config(&mut self, config: TeleportConfig) {
        self.config = config;
    }
}
