use cgmath::{InnerSpace, Vector3};

use super::Color;

/// Orthographic frustum used for directional shadow maps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl ShadowCamera {
    pub fn symmetric(extent: f32) -> Self {
        ShadowCamera {
            left: -extent,
            right: extent,
            top: extent,
            bottom: -extent,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Directional {
        color: Color,
        intensity: f32,
        position: Vector3<f32>,
        target: Vector3<f32>,
        shadow: Option<ShadowCamera>,
    },
}

impl Light {
    pub fn position(&self) -> Option<Vector3<f32>> {
        match self {
            Light::Ambient { .. } => None,
            Light::Directional { position, .. } => Some(*position),
        }
    }

    /// No-op for ambient lights.
    pub fn set_position(&mut self, new_position: Vector3<f32>) {
        if let Light::Directional { position, .. } = self {
            *position = new_position;
        }
    }

    /// Unit vector the light travels along, if it has one.
    pub fn direction(&self) -> Option<Vector3<f32>> {
        match self {
            Light::Ambient { .. } => None,
            Light::Directional {
                position, target, ..
            } => {
                let dir = target - position;
                if dir.magnitude2() > 0.0 {
                    Some(dir.normalize())
                } else {
                    None
                }
            }
        }
    }
}
