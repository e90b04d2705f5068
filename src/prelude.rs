/* 

This is intended to quickly import commonly used items across
the crate and for users of the library.

@date: 19 Oct, 2026
*/

// Collaborator modules log through tracing, core modules never do
pub use tracing::{info, error, warn, debug};

pub use crate::numeric::{Float, Vector3};
pub use crate::interval::{Interval, FloatConst};
pub use crate::bbox::Box3D;
pub use crate::ray::Ray3D;
