use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::warn;

use crate::bbox::Box3D;
use crate::ray::Ray3D;
use crate::numeric::*;

//////////////////////////////////////////////////////////////////////////
/// SAMPLING UTILS
//////////////////////////////////////////////////////////////////////////

/// Uniform float in [0, 1) from the thread rng
pub fn random_float() -> Float {
    rand::random::<Float>()
}

/// Uniform point inside `region`. Region is assumed valid (min <= max).
pub fn random_in_box<R: Rng + ?Sized>(rng: &mut R, region: &Box3D) -> Vector3 {
    debug_assert!(region.is_valid());
    let u = Vector3::new(rng.random::<Float>(), rng.random::<Float>(), rng.random::<Float>());
    region.min + region.size() * u
}

/// Rejection sampling in the unit ball, then normalize
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    loop {
        let p = Vector3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        let len_sq = p.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return p / len_sq.sqrt();
        }
    }
}

/// Box enclosing all finite boxes, grown by one unit, used as origin
/// region for random rays. None when no box has finite corners.
pub fn sampling_region(boxes: &[Box3D]) -> Option<Box3D> {
    let mut min = Vector3::splat(Float::INFINITY);
    let mut max = Vector3::splat(Float::NEG_INFINITY);
    let mut found = false;
    for (i, b) in boxes.iter().enumerate() {
        if !(b.min.is_finite() && b.max.is_finite()) {
            warn!("Skipping box [{}] {} with non-finite corners for ray sampling", i, b);
            continue;
        }
        // Inverted boxes are still spanned by their two corners
        min = vmin(vmin(min, b.min), b.max);
        max = vmax(vmax(max, b.min), b.max);
        found = true;
    }
    found.then(|| Box3D::new(min - Vector3::ONE, max + Vector3::ONE))
}

/// Deterministic batch of rays with origins inside `region`
/// and uniformly distributed unit directions.
pub fn sample_rays(n: usize, region: &Box3D, seed: u64) -> Vec<Ray3D> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let o = random_in_box(&mut rng, region);
            let d = random_unit_vector(&mut rng);
            Ray3D::new(o, d)
        })
        .collect()
}
