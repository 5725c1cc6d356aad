use super::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fog {
    /// Exponential-squared falloff: `1 - exp(-(density * distance)^2)`.
    Exp2 { color: Color, density: f32 },
}

impl Fog {
    pub fn density(&self) -> f32 {
        match self {
            Fog::Exp2 { density, .. } => *density,
        }
    }
}
