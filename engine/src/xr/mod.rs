//! Minimal model of XR reference spaces.
//!
//! Locomotion never moves scene objects: a teleport swaps the active reference
//! space for one offset from the space captured at session start.

pub mod reference_space;
pub mod rigid_transform;

pub use reference_space::{ReferenceSpace, ReferenceSpaceType};
pub use rigid_transform::RigidTransform;
