/*

    Parametric ray r(t) = o + t*d and the slab-method ray/box test.

    d is not normalized, so every t reported here is in units of d.

    @date: 19 Oct, 2026
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bbox::Box3D;
use crate::interval::Interval;
use crate::numeric::*;


#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray3D {
    pub o: Vector3,
    pub d: Vector3,
}

impl Ray3D {

    #[inline]
    pub const fn new(o: Vector3, d: Vector3) -> Self {
        Self { o, d }
    }

    #[inline]
    pub fn at(&self, t: Float) -> Vector3 {
        self.o + self.d * t
    }

    #[inline]
    pub fn reversed(&self) -> Ray3D {
        Ray3D::new(self.o, -self.d)
    }

    /// Slab test. Writes entry/exit distances to `tnear`/`tfar` whatever
    /// the verdict and returns `tfar > tnear`.
    ///
    /// Zero direction components are not guarded: 1/0 gives a signed
    /// infinity, which keeps the ray inside that slab when the origin is
    /// between the two planes and rejects the box otherwise. Nothing is
    /// clamped to t >= 0, a box behind the origin still reports a hit at
    /// negative t.
    #[inline]
    pub fn intersect(&self, bbox: &Box3D, tnear: &mut Float, tfar: &mut Float) -> bool {
        let invr = vdiv(Vector3::ONE, self.d);
        let tbot = vmul(invr, vsub(bbox.min, self.o));
        let ttop = vmul(invr, vsub(bbox.max, self.o));

        // Negative direction components swap entry and exit on that axis
        let tmin = vmin(ttop, tbot);
        let tmax = vmax(ttop, tbot);

        *tnear = max_component(tmin);
        *tfar = min_component(tmax);

        *tfar > *tnear
    }

    /// [tnear, tfar] of the slab test, returned even on a miss.
    #[inline]
    pub fn slab_interval(&self, bbox: &Box3D) -> Interval {
        let (mut tnear, mut tfar) = (0.0, 0.0);
        self.intersect(bbox, &mut tnear, &mut tfar);
        Interval::new(tnear, tfar)
    }

    #[inline]
    pub fn hit(&self, bbox: &Box3D) -> Option<Interval> {
        let (mut tnear, mut tfar) = (0.0, 0.0);
        if self.intersect(bbox, &mut tnear, &mut tfar) {
            Some(Interval::new(tnear, tfar))
        } else {
            None
        }
    }
}

impl fmt::Display for Ray3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ray3D(({},{},{}),({},{},{}))",
            format_g6(self.o.x), format_g6(self.o.y), format_g6(self.o.z),
            format_g6(self.d.x), format_g6(self.d.y), format_g6(self.d.z)
        )
    }
}
