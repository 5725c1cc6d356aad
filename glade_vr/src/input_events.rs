use std::collections::VecDeque;

use engine::{input_log, xr::ReferenceSpace};

use crate::{
    controllers::TargetRayMode,
    input_context::Pose,
    vr_config::{ControllerId, Handedness},
};

/// Discrete events delivered by the XR runtime between frames.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    SessionStart { reference_space: ReferenceSpace },
    SessionEnd,
    SelectStart(ControllerId),
    SelectEnd(ControllerId),
    Connected {
        controller: ControllerId,
        target_ray_mode: TargetRayMode,
    },
    Disconnected(ControllerId),
    PinchEnd(Handedness),
    ControllerPose {
        controller: ControllerId,
        pose: Pose,
    },
    /// `None` when hand tracking is lost.
    HandPose {
        hand: Handedness,
        pose: Option<Pose>,
    },
}

/// FIFO of pending events, drained once at the start of every frame so the
/// targeting pass always sees a settled input state.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        input_log!(TRACE, "queued {:?}", event);
        self.pending.push_back(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.push(event);
        }
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
