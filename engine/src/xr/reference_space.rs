use cgmath::Vector3;

use super::RigidTransform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceSpaceType {
    Viewer,
    Local,
    LocalFloor,
    BoundedFloor,
    Unbounded,
}

/// A coordinate frame the XR runtime reports poses in.
///
/// `origin_offset` places this space's origin relative to the runtime's native
/// origin for `space_type`. Offset spaces are derived values: deriving never
/// mutates the space it was derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceSpace {
    pub space_type: ReferenceSpaceType,
    pub origin_offset: RigidTransform,
}

impl ReferenceSpace {
    pub fn new(space_type: ReferenceSpaceType) -> Self {
        ReferenceSpace {
            space_type,
            origin_offset: RigidTransform::identity(),
        }
    }

    pub fn with_origin_offset(space_type: ReferenceSpaceType, origin_offset: RigidTransform) -> Self {
        ReferenceSpace {
            space_type,
            origin_offset,
        }
    }

    pub fn get_offset_reference_space(&self, offset: &RigidTransform) -> ReferenceSpace {
        let origin_offset = self.origin_offset.multiply(offset);
        crate::xr_log!(
            TRACE,
            "{:?} offset by {:?} -> origin {:?}",
            self.space_type,
            offset.position,
            origin_offset.position
        );
        ReferenceSpace {
            space_type: self.space_type,
            origin_offset,
        }
    }

    /// Express a point given relative to the native origin in this space.
    pub fn native_to_space(&self, native_point: Vector3<f32>) -> Vector3<f32> {
        self.origin_offset.inverse().transform_point(native_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{vec3, InnerSpace};

    #[test]
    fn test_offset_space_leaves_base_untouched() {
        let base = ReferenceSpace::new(ReferenceSpaceType::LocalFloor);
        let derived =
            base.get_offset_reference_space(&RigidTransform::from_translation(vec3(1.0, 0.0, 0.0)));

        assert_eq!(base.origin_offset, RigidTransform::identity());
        assert_eq!(derived.origin_offset.position, vec3(1.0, 0.0, 0.0));
        assert_eq!(derived.space_type, ReferenceSpaceType::LocalFloor);
    }

    #[test]
    fn test_offset_moves_viewer_the_opposite_way() {
        let base = ReferenceSpace::new(ReferenceSpaceType::Local);
        let derived = base
            .get_offset_reference_space(&RigidTransform::from_translation(vec3(-2.0, -2.5, 3.0)));

        let viewer = derived.native_to_space(vec3(0.0, 0.0, 0.0));
        assert!((viewer - vec3(2.0, 2.5, -3.0)).magnitude() < 1e-5);
    }
}
