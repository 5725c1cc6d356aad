use super::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blending {
    Normal,
    Additive,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TextureSource {
    Asset(String),
    /// A host canvas re-uploaded whenever `generation` changes.
    Canvas { element_id: String, generation: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Unlit flat color.
    Basic {
        color: Color,
        opacity: f32,
        blending: Blending,
    },
    /// Unlit, colors taken per vertex from the geometry.
    VertexColors { blending: Blending },
    /// Lit and textured.
    Standard {
        texture: TextureSource,
        repeat: (f32, f32),
    },
    /// Unlit textured, rendered from the inside (sky domes).
    BackSide { texture: TextureSource },
    /// Whatever the model asset ships with.
    FromAsset,
}

impl Material {
    pub fn basic(color: Color) -> Material {
        Material::Basic {
            color,
            opacity: 1.0,
            blending: Blending::Normal,
        }
    }

    pub fn is_transparent(&self) -> bool {
        match self {
            Material::Basic {
                opacity, blending, ..
            } => *opacity < 1.0 || *blending == Blending::Additive,
            Material::VertexColors { blending } => *blending == Blending::Additive,
            _ => false,
        }
    }
}
