/*

    Host side orchestration of many slab tests.

    Each ray is handled independently (the CPU counterpart of one
    device thread per ray), aggregation across boxes happens here and
    not in the core test:
        - intersect_all: one box, many rays
        - nearest_hit: one ray, many boxes, closest entry wins
        - trace_all: many rays, many boxes


    @date: 19 Oct, 2026
*/

use rayon::prelude::*;
use serde::Serialize;

use crate::bbox::Box3D;
use crate::interval::{FloatConst, Interval};
use crate::numeric::Float;
use crate::ray::Ray3D;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxHit {
    pub box_index: usize,
    pub span: Interval, // slab span clipped to the caller's range
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BatchStats {
    pub rays: usize,
    pub hits: usize,
    pub misses: usize,
}

impl BatchStats {
    pub fn from_hits<T>(hits: &[Option<T>]) -> Self {
        let n_hits = hits.iter().filter(|h| h.is_some()).count();
        Self {
            rays: hits.len(),
            hits: n_hits,
            misses: hits.len() - n_hits,
        }
    }
}

/// Slab spans of every ray against a single box, unclipped.
pub fn intersect_all(rays: &[Ray3D], bbox: &Box3D) -> Vec<Option<Interval>> {
    rays.par_iter()
        .map(|ray| ray.hit(bbox))
        .collect()
}

/// Iterate over all boxes to find the closest entry within `t_range`
pub fn nearest_hit(ray: &Ray3D, boxes: &[Box3D], t_range: &Interval) -> Option<BoxHit> {
    let mut rec = None;
    let mut t_min: Float = FloatConst::INF;
    for (box_index, bbox) in boxes.iter().enumerate() {
        let (mut tnear, mut tfar) = (0.0, 0.0);
        if !ray.intersect(bbox, &mut tnear, &mut tfar) {
            continue;
        }

        let span = Interval::new(tnear, tfar).clip(t_range);
        if span.is_empty() {
            continue; // e.g. the whole box is behind a forward-only ray
        }

        // Update if new hit is closer
        if span.min < t_min {
            t_min = span.min;
            rec = Some(BoxHit { box_index, span });
        }
    }
    rec
}

pub fn trace_all(rays: &[Ray3D], boxes: &[Box3D], t_range: &Interval) -> Vec<Option<BoxHit>> {
    rays.par_iter()
        .map(|ray| nearest_hit(ray, boxes, t_range))
        .collect()
}
