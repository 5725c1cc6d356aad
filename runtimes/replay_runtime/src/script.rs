use std::path::Path;

use anyhow::{Context, anyhow};
use cgmath::{InnerSpace, Quaternion, Vector3};
use engine::xr::{ReferenceSpace, ReferenceSpaceType, RigidTransform};
use glade_vr::{
    controllers::TargetRayMode,
    input_context::Pose,
    input_events::InputEvent,
    vr_config::{ControllerId, Handedness},
};
use serde::Deserialize;

/// A recorded session: one entry per rendered frame.
#[derive(Debug, Deserialize)]
pub struct SessionScript {
    pub frames: Vec<ScriptFrame>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScriptFrame {
    /// Seconds since the previous frame; falls back to the CLI default.
    #[serde(default)]
    pub delta: Option<f32>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

fn identity_rotation() -> [f32; 4] {
    [1.0, 0.0, 0.0, 0.0]
}

/// Rotations are `[w, x, y, z]`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    SessionStart {
        #[serde(default)]
        origin: Option<[f32; 3]>,
    },
    SessionEnd,
    SelectStart {
        controller: usize,
    },
    SelectEnd {
        controller: usize,
    },
    Connected {
        controller: usize,
        target_ray_mode: TargetRayMode,
    },
    Disconnected {
        controller: usize,
    },
    PinchEnd {
        hand: Handedness,
    },
    Pose {
        controller: usize,
        position: [f32; 3],
        #[serde(default = "identity_rotation")]
        rotation: [f32; 4],
    },
    HandPose {
        hand: Handedness,
        /// Omitted when tracking is lost.
        #[serde(default)]
        position: Option<[f32; 3]>,
        #[serde(default = "identity_rotation")]
        rotation: [f32; 4],
    },
}

fn controller(index: usize) -> anyhow::Result<ControllerId> {
    ControllerId::from_index(index)
        .ok_or_else(|| anyhow!("controller index {} out of range (expected 0 or 1)", index))
}

/// Recorded rotations need not be unit length; they are normalized here.
fn pose(position: [f32; 3], [w, x, y, z]: [f32; 4]) -> anyhow::Result<Pose> {
    let rotation = Quaternion::new(w, x, y, z);
    let magnitude = rotation.magnitude();
    if !magnitude.is_finite() || magnitude < 1e-6 {
        anyhow::bail!("rotation {:?} cannot be normalized", [w, x, y, z]);
    }
    Ok(Pose::new(Vector3::from(position), rotation / magnitude))
}

impl ScriptEvent {
    pub fn into_input_event(self) -> anyhow::Result<InputEvent> {
        let event = match self {
            ScriptEvent::SessionStart { origin } => {
                let offset = origin
                    .map(|o| RigidTransform::from_translation(Vector3::from(o)))
                    .unwrap_or_default();
                InputEvent::SessionStart {
                    reference_space: ReferenceSpace::with_origin_offset(
                        ReferenceSpaceType::LocalFloor,
                        offset,
                    ),
                }
            }
            ScriptEvent::SessionEnd => InputEvent::SessionEnd,
            ScriptEvent::SelectStart { controller: c } => InputEvent::SelectStart(controller(c)?),
            ScriptEvent::SelectEnd { controller: c } => InputEvent::SelectEnd(controller(c)?),
            ScriptEvent::Connected {
                controller: c,
                target_ray_mode,
            } => InputEvent::Connected {
                controller: controller(c)?,
                target_ray_mode,
            },
            ScriptEvent::Disconnected { controller: c } => InputEvent::Disconnected(controller(c)?),
            ScriptEvent::PinchEnd { hand } => InputEvent::PinchEnd(hand),
            ScriptEvent::Pose {
                controller: c,
                position,
                rotation,
            } => InputEvent::ControllerPose {
                controller: controller(c)?,
                pose: pose(position, rotation)?,
            },
            ScriptEvent::HandPose {
                hand,
                position,
                rotation,
            } => InputEvent::HandPose {
                hand,
                pose: position.map(|p| pose(p, rotation)).transpose()?,
            },
        };
        Ok(event)
    }
}

impl ScriptFrame {
    pub fn into_input_events(self) -> anyhow::Result<Vec<InputEvent>> {
        self.events
            .into_iter()
            .map(ScriptEvent::into_input_event)
            .collect()
    }
}

pub fn parse(json: &str) -> anyhow::Result<SessionScript> {
    serde_json::from_str(json).context("invalid session script")
}

pub fn load(path: &Path) -> anyhow::Result<SessionScript> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session script {}", path.display()))?;
    parse(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frames_and_events() {
        let script = parse(
            r#"{
                "frames": [
                    { "events": [
                        { "type": "session_start", "origin": [0.0, 0.0, 1.0] },
                        { "type": "connected", "controller": 1, "target_ray_mode": "tracked-pointer" },
                        { "type": "pose", "controller": 1, "position": [0.0, 1.6, 0.0] },
                        { "type": "select_start", "controller": 1 }
                    ] },
                    { "delta": 0.5 },
                    { "events": [ { "type": "pinch_end", "hand": "left" } ] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(script.frames.len(), 3);
        assert_eq!(script.frames[1].delta, Some(0.5));

        let mut frames = script.frames.into_iter();
        let events = frames.next().unwrap().into_input_events().unwrap();
        assert_eq!(events.len(), 4);
        assert!(matches!(
            events[0],
            InputEvent::SessionStart { reference_space } if reference_space.origin_offset.position == Vector3::new(0.0, 0.0, 1.0)
        ));
        assert_eq!(
            events[1],
            InputEvent::Connected {
                controller: ControllerId::Second,
                target_ray_mode: TargetRayMode::TrackedPointer,
            }
        );
        assert_eq!(events[3], InputEvent::SelectStart(ControllerId::Second));

        assert!(frames.next().unwrap().into_input_events().unwrap().is_empty());
        assert_eq!(
            frames.next().unwrap().into_input_events().unwrap(),
            vec![InputEvent::PinchEnd(Handedness::Left)]
        );
    }

    #[test]
    fn test_bad_controller_index_is_an_error() {
        let script = parse(r#"{ "frames": [ { "events": [ { "type": "select_end", "controller": 2 } ] } ] }"#)
            .unwrap();
        let err = script
            .frames
            .into_iter()
            .next()
            .unwrap()
            .into_input_events()
            .unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    fn single_event(json: &str) -> anyhow::Result<InputEvent> {
        let script = parse(&format!(r#"{{ "frames": [ {{ "events": [ {} ] }} ] }}"#, json))?;
        let mut events = script
            .frames
            .into_iter()
            .next()
            .unwrap()
            .into_input_events()?;
        Ok(events.remove(0))
    }

    #[test]
    fn test_scaled_rotation_is_normalized() {
        // 45 degree downward pitch, scaled by two
        let event = single_event(
            r#"{ "type": "pose", "controller": 0, "position": [0.0, -1.0, 0.0], "rotation": [1.8478, -0.7654, 0.0, 0.0] }"#,
        )
        .unwrap();
        let InputEvent::ControllerPose { pose, .. } = event else {
            panic!("expected a controller pose, got {:?}", event);
        };

        assert!((pose.rotation.magnitude() - 1.0).abs() < 1e-4);
        let forward = pose.rotation * Vector3::new(0.0, 0.0, -1.0);
        assert!(forward.z < -0.7 && forward.y < -0.7, "{:?}", forward);
    }

    #[test]
    fn test_zero_rotation_is_an_error() {
        let err = single_event(
            r#"{ "type": "pose", "controller": 0, "position": [0.0, 0.0, 0.0], "rotation": [0.0, 0.0, 0.0, 0.0] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("cannot be normalized"));

        assert!(single_event(
            r#"{ "type": "hand_pose", "hand": "right", "position": [0.0, 0.0, 0.0], "rotation": [0.0, 0.0, 0.0, 0.0] }"#,
        )
        .is_err());
    }

    #[test]
    fn test_unknown_event_type_fails_to_parse() {
        assert!(parse(r#"{ "frames": [ { "events": [ { "type": "jump" } ] } ] }"#).is_err());
    }
}
