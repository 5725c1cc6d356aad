use cgmath::Vector3;

/// Primitive shapes, sized in local units before the object transform applies.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// Axis-aligned box with the given full extents.
    Box { size: Vector3<f32> },
    Sphere { radius: f32, segments: u32 },
    /// Flat disc in the local XY plane.
    Circle { radius: f32, segments: u32 },
    /// Flat annulus in the local XY plane.
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        segments: u32,
    },
    /// Line segments; `points` are consumed pairwise.
    Lines {
        points: Vec<Vector3<f32>>,
        colors: Option<Vec<Vector3<f32>>>,
    },
    /// An externally loaded model, referenced by asset path.
    Model { asset: String },
}

impl Geometry {
    pub fn unit_box() -> Geometry {
        Geometry::Box {
            size: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn unit_sphere() -> Geometry {
        Geometry::Sphere {
            radius: 1.0,
            segments: 32,
        }
    }
}
