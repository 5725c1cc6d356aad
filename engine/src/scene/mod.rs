//! Renderer-agnostic scene descriptions.
//!
//! The host renderer owns meshes, textures and shaders; this module only
//! describes what should be drawn and where.

pub mod fog;
pub use fog::Fog;

pub mod geometry;
pub use geometry::Geometry;

pub mod light;
pub use light::{Light, ShadowCamera};

pub mod material;
pub use material::{Blending, Material, TextureSource};

pub mod renderable;
pub use renderable::{create_transform_group, flatten_renderables, Renderable, TransformSceneObject};

pub mod scene_object;
pub use scene_object::{placement, SceneObject};

pub type Color = cgmath::Vector3<f32>;

/// Convert a packed `0xRRGGBB` value into linear 0..1 components.
pub fn color_from_hex(hex: u32) -> Color {
    cgmath::vec3(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = color_from_hex(0xff8000);
        assert_eq!(c.x, 1.0);
        assert!((c.y - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.z, 0.0);
    }
}
