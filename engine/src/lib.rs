pub mod logging;
pub mod scene;
pub mod xr;

mod macros;

pub use xr::{ReferenceSpace, RigidTransform};
