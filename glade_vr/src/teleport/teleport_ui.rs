use cgmath::{Matrix4, Rad, Vector3, Zero};
use engine::scene::{Color, Geometry, Material, SceneObject, color_from_hex};

#[derive(Clone, Copy, Debug)]
pub struct TeleportVisualStyle {
    pub marker_color: Color,
    pub marker_radius: f32,
    pub marker_segments: u32,
}

impl Default for TeleportVisualStyle {
    fn default() -> Self {
        Self {
            marker_color: color_from_hex(0xbcbcbc),
            marker_radius: 0.25,
            marker_segments: 32,
        }
    }
}

/// Landing indicator. Created once per session and only ever moved or hidden.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeleportMarker {
    pub position: Vector3<f32>,
    pub visible: bool,
}

impl Default for TeleportMarker {
    fn default() -> Self {
        TeleportMarker {
            position: Vector3::zero(),
            visible: false,
        }
    }
}

impl TeleportMarker {
    /// A flat disc lying on the ground at the marker position, hidden when the
    /// marker is.
    pub fn scene_object(&self, style: &TeleportVisualStyle) -> SceneObject {
        let lay_flat = Matrix4::from_angle_x(Rad(-std::f32::consts::FRAC_PI_2));
        let mut disc = SceneObject::new(
            "teleport_marker",
            Geometry::Circle {
                radius: style.marker_radius,
                segments: style.marker_segments,
            },
            Material::basic(style.marker_color),
        )
        .with_transform(Matrix4::from_translation(self.position) * lay_flat);
        disc.visible = self.visible;
        disc
    }
}
