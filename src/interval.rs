/*

    Closed parametric ranges [a, b] along a ray.

    The slab test reports its entry/exit distances as an Interval, and
    callers clip it against the range they care about (e.g. forward-only
    rays use NONNEGATIVE).

    See also associated constants of Interval class:
    - EMPTY: (inf, -inf)
    - UNIVERSE: (-inf, inf)
    - NONNEGATIVE: (0, inf)

    @date: 19 Oct, 2026

*/

use serde::Serialize;

use crate::numeric::Float;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub const EMPTY: Self = Self {
        min: FloatConst::INF,
        max: FloatConst::NEG_INF,
    };

    pub const UNIVERSE: Self = Self {
        min: FloatConst::NEG_INF,
        max: FloatConst::INF,
    };

    pub const NONNEGATIVE: Self = Self {
        min: 0.0,
        max: FloatConst::INF,
    };

    pub const fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    pub fn positive(epsilon: Float) -> Self {
        // [epsilon, inf)
        Self {
            min: epsilon,
            max: FloatConst::INF,
        }
    }

    pub fn validate(&self) -> bool {
        self.max >= self.min
    }

    /// Same rule as the slab verdict: only max > min is a non-empty span.
    /// NaN bounds count as empty.
    pub fn is_empty(&self) -> bool {
        !(self.max > self.min)
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn surrounds(&self, x: Float) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: Float) -> Float {
        if x < self.min { self.min }
        else if x > self.max { self.max }
        else { x }
    }

    pub fn expand(&mut self, x: Float) {
        if x < self.min { self.min = x; }
        if x > self.max { self.max = x; }
    }

    /// Overlap of two ranges, may come out empty.
    pub fn clip(&self, other: &Interval) -> Interval {
        Interval::new(self.min.max(other.min), self.max.min(other.max))
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::EMPTY
    }
}


pub trait FloatConst: Copy {
    const INF: Self;
    const NEG_INF: Self;
}

impl FloatConst for f32 {
    const INF: Self = f32::INFINITY;
    const NEG_INF: Self = f32::NEG_INFINITY;
}

impl FloatConst for f64 {
    const INF: Self = f64::INFINITY;
    const NEG_INF: Self = f64::NEG_INFINITY;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_universe() {
        assert!(Interval::EMPTY.is_empty());
        assert!(!Interval::UNIVERSE.is_empty());
        assert!(Interval::new(1., 1.).is_empty()); // zero width does not count
        assert!(Interval::new(Float::NAN, 1.).is_empty());
    }

    #[test]
    fn test_expand_from_empty() {
        let mut int = Interval::EMPTY;
        for x in [3., -1., 2.] {
            int.expand(x);
        }
        assert_eq!(int, Interval::new(-1., 3.));
        assert_eq!(int.size(), 4.);
        assert!(int.validate());
    }

    #[test]
    fn test_clip_to_forward_range() {
        let span = Interval::new(-0.5, 0.5);
        let clipped = span.clip(&Interval::NONNEGATIVE);
        assert_eq!(clipped, Interval::new(0., 0.5));

        let behind = Interval::new(-3., -2.).clip(&Interval::NONNEGATIVE);
        assert!(behind.is_empty());
    }

    #[test]
    fn test_contains_surrounds_clamp() {
        let int = Interval::new(0., 1.);
        assert!(int.contains(0.) && int.contains(1.));
        assert!(!int.surrounds(0.) && int.surrounds(0.5));
        assert_eq!(int.clamp(4.), 1.);
        assert_eq!(int.clamp(-4.), 0.);
        assert_eq!(Interval::positive(1e-3).min, 1e-3);
    }
}
