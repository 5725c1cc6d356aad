use cgmath::{Vector3, vec3};
use engine::scene::{Color, Fog, color_from_hex};

const DEGREES_PER_SECOND: f32 = 20.0;
const FOG_COLOR: u32 = 0x555577;

/// A sun orbiting in the YZ plane. It doubles as the main light position and
/// drives a night-time fog.
#[derive(Clone, Debug, PartialEq)]
pub struct Sun {
    /// Degrees, kept in `[0, 360)`.
    pub angle: f32,
    pub distance: f32,
    pub x: f32,
}

impl Default for Sun {
    fn default() -> Self {
        Sun {
            angle: 90.0,
            distance: 10.0,
            x: 0.0,
        }
    }
}

impl Sun {
    pub fn tick(&mut self, delta_seconds: f32) {
        self.angle = (self.angle + DEGREES_PER_SECOND * delta_seconds).rem_euclid(360.0);
    }

    pub fn position(&self) -> Vector3<f32> {
        let radians = self.angle.to_radians();
        vec3(
            self.x,
            radians.sin() * self.distance,
            radians.cos() * self.distance,
        )
    }

    /// Zero while the sun is above the horizon, thickening as it sets.
    pub fn fog_density(&self) -> f32 {
        (-self.angle.to_radians().sin() / 30.0).max(0.0)
    }

    pub fn fog(&self) -> Fog {
        Fog::Exp2 {
            color: Self::fog_color(),
            density: self.fog_density(),
        }
    }

    pub fn fog_color() -> Color {
        color_from_hex(FOG_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    #[test]
    fn test_sun_starts_overhead() {
        let sun = Sun::default();
        assert!((sun.position() - vec3(0.0, 10.0, 0.0)).magnitude() < 1e-5);
        assert_eq!(sun.fog_density(), 0.0);
    }

    #[test]
    fn test_sun_orbits_twenty_degrees_per_second() {
        let mut sun = Sun::default();
        sun.tick(4.5);
        assert!((sun.angle - 180.0).abs() < 1e-4);
        assert!((sun.position() - vec3(0.0, 0.0, -10.0)).magnitude() < 1e-4);
    }

    #[test]
    fn test_angle_wraps() {
        let mut sun = Sun::default();
        sun.tick(15.0);
        assert!((sun.angle - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_fog_peaks_at_midnight() {
        let mut sun = Sun::default();
        sun.tick(9.0);
        assert!((sun.angle - 270.0).abs() < 1e-4);
        assert!((sun.fog_density() - 1.0 / 30.0).abs() < 1e-6);
    }
}
