/*

    Axis Aligned Bounding Box given by two corner points.

    Box3D is a plain value: no validation on construction, no heap,
    no logging, so it can be copied into device-side buffers as is.
    A box is only geometrically meaningful when min <= max on every
    axis, checking that is up to the caller (see is_valid).

    @date: 19 Oct, 2026
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::numeric::{format_g6, Float, Vector3};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box3D {
    pub min: Vector3,
    pub max: Vector3,
}

impl Box3D {
    #[inline]
    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    pub fn from_intervals(xint: &Interval, yint: &Interval, zint: &Interval) -> Self {
        Self {
            min: Vector3::new(xint.min, yint.min, zint.min),
            max: Vector3::new(xint.max, yint.max, zint.max),
        }
    }

    #[inline]
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// True if min <= max on every axis. Never called by the
    /// intersection test itself.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    pub fn contains(&self, p: Vector3) -> bool {
        let inside = |min: Float, max: Float, x: Float| min <= x && x <= max;
        inside(self.min.x, self.max.x, p.x)
            && inside(self.min.y, self.max.y, p.y)
            && inside(self.min.z, self.max.z, p.z)
    }
}

impl Default for Box3D {
    fn default() -> Self {
        Box3D::new(Vector3::ZERO, Vector3::ONE)
    }
}

// Diagnostics only, not meant to be parsed back
impl fmt::Display for Box3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Box3D(({},{},{}),({},{},{}))",
            format_g6(self.min.x), format_g6(self.min.y), format_g6(self.min.z),
            format_g6(self.max.x), format_g6(self.max.y), format_g6(self.max.z)
        )
    }
}
