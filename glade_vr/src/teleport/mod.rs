// VR teleport locomotion
//
// While a controller's select is held, its forward ray is cast against the
// ground and a marker shows where it lands. Releasing select over the ground
// swaps the active XR reference space for one offset from the session's base
// space, so the viewer appears at the marker.

pub mod ground;
pub mod teleport_system;
pub mod teleport_ui;

pub use ground::{AimRay, GroundSurface, PlaneGround};
pub use teleport_system::{DEFAULT_HEIGHT_OFFSET, TeleportConfig, TeleportOutcome, TeleportSystem};
pub use teleport_ui::{TeleportMarker, TeleportVisualStyle};
