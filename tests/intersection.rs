// Integration tests for the slab test through the public API

use vol_slab::batch::{nearest_hit, trace_all, BatchStats};
use vol_slab::json_parser::parse_query_str;
use vol_slab::prelude::*;
use vol_slab::sampler::sample_rays;

fn unit_box() -> Box3D {
    Box3D::new(Vector3::new(0., 0., 0.), Vector3::new(1., 1., 1.))
}

fn intersect(ray: &Ray3D, bbox: &Box3D) -> (bool, Float, Float) {
    let (mut tnear, mut tfar) = (0.0, 0.0);
    let hit = ray.intersect(bbox, &mut tnear, &mut tfar);
    (hit, tnear, tfar)
}

#[test]
fn test_center_of_valid_boxes() {
    let region = Box3D::new(Vector3::splat(-10.), Vector3::splat(10.));
    // Random corners, sorted per axis to get valid boxes
    for ray in sample_rays(50, &region, 3) {
        let a = ray.o;
        let b = ray.o + ray.d * 4.0;
        let bbox = Box3D::new(a.min(b), a.max(b));
        assert!(bbox.is_valid());
        let c = bbox.center();
        assert_eq!(c, (bbox.min + bbox.max) / 2.0);
        assert!(bbox.contains(c));
    }
}

#[test]
fn test_reference_scenarios() {
    let bbox = unit_box();

    let inside = Ray3D::new(Vector3::new(0.5, 0.5, 0.5), Vector3::new(1., 0., 0.));
    assert_eq!(intersect(&inside, &bbox), (true, -0.5, 0.5));

    let miss = Ray3D::new(Vector3::new(5., 5., 5.), Vector3::new(1., 0., 0.));
    let (hit, tnear, tfar) = intersect(&miss, &bbox);
    assert!(!hit);
    assert!(tnear >= tfar);

    let parallel_in = Ray3D::new(Vector3::new(0.5, 0.5, -5.), Vector3::new(0., 0., 1.));
    assert_eq!(intersect(&parallel_in, &bbox), (true, 5., 6.));

    let parallel_out = Ray3D::new(Vector3::new(5., 0.5, -5.), Vector3::new(0., 0., 1.));
    assert!(!intersect(&parallel_out, &bbox).0);
}

#[test]
fn test_non_finite_inputs_give_ieee_outputs() {
    let bbox = unit_box();

    let nan_origin = Ray3D::new(Vector3::new(Float::NAN, 0.5, 0.5), Vector3::new(1., 0., 0.));
    assert_eq!(intersect(&nan_origin, &bbox), (true, Float::NEG_INFINITY, Float::INFINITY));

    let on_plane = Ray3D::new(Vector3::new(0., 0.5, -5.), Vector3::new(0., 0., 1.));
    assert_eq!(intersect(&on_plane, &bbox), (false, Float::INFINITY, 6.));

    // Same plane from the max side: NaN on ttop, tbot = -inf wins
    let on_max_plane = Ray3D::new(Vector3::new(1., 0.5, -5.), Vector3::new(0., 0., 1.));
    assert_eq!(intersect(&on_max_plane, &bbox), (false, 5., Float::NEG_INFINITY));
}

#[test]
fn test_swapped_corners_give_same_result() {
    let bbox = unit_box();
    let inverted = Box3D::new(bbox.max, bbox.min);
    let rays = [
        Ray3D::new(Vector3::new(0.5, 0.5, 0.5), Vector3::new(1., 0., 0.)),
        Ray3D::new(Vector3::new(5., 5., 5.), Vector3::new(1., 0., 0.)),
        Ray3D::new(Vector3::new(0.5, 0.5, -5.), Vector3::new(0., 0., 1.)),
        Ray3D::new(Vector3::new(-2., -1., 0.25), Vector3::new(1., 0.75, 0.1)),
    ];
    for ray in rays {
        assert_eq!(intersect(&ray, &bbox), intersect(&ray, &inverted), "{}", ray);
    }
}

#[test]
fn test_reversed_direction_flips_span() {
    let bbox = unit_box();
    let crossing = [
        Ray3D::new(Vector3::new(-1., 0.5, 0.5), Vector3::new(1., 0., 0.)),
        Ray3D::new(Vector3::new(0.5, 3., 0.5), Vector3::new(0., -2., 0.)),
        Ray3D::new(Vector3::new(-1., -1., -1.), Vector3::new(1., 1., 1.)),
    ];
    for ray in crossing {
        let (hit, tnear, tfar) = intersect(&ray, &bbox);
        let (hit_rev, tnear_rev, tfar_rev) = intersect(&ray.reversed(), &bbox);
        assert!(hit && hit_rev);
        assert_eq!(tnear_rev, -tfar);
        assert_eq!(tfar_rev, -tnear);
    }
}

#[test]
fn test_hits_lie_on_box_surface() {
    let bbox = Box3D::new(Vector3::new(-1., -2., -3.), Vector3::new(2., 1., 0.5));
    let region = Box3D::new(Vector3::splat(-6.), Vector3::splat(6.));
    let mut n_hits = 0;
    for ray in sample_rays(200, &region, 99) {
        if let Some(span) = ray.hit(&bbox) {
            n_hits += 1;
            for t in [span.min, span.max] {
                let p = ray.at(t);
                let grown = Box3D::new(bbox.min - Vector3::splat(1e-3), bbox.max + Vector3::splat(1e-3));
                assert!(grown.contains(p), "{} at t={} gives {} outside {}", ray, t, p, bbox);
            }
        }
    }
    assert!(n_hits > 0);
}

#[test]
fn test_query_round_through_batch() {
    let q = parse_query_str(r#"
    { "Query": {
        "ForwardOnly": "true",
        "Box": [
            { "_id": "1", "Min": "0 0 0", "Max": "1 1 1" },
            { "_id": "2", "Min": "2 0 0", "Max": "3 1 1" }
        ],
        "Ray": [
            { "Origin": "-1 0.5 0.5", "Direction": "1 0 0" },
            { "Origin": "1.5 0.5 0.5", "Direction": "1 0 0" },
            { "Origin": "5 5 5", "Direction": "1 0 0" }
        ]
    } }"#).unwrap().query;

    let boxes = q.all_boxes();
    let rays = q.all_rays();
    let hits = trace_all(&rays, &boxes, &q.t_range());

    assert_eq!(hits[0].map(|h| h.box_index), Some(0));
    assert_eq!(hits[1].map(|h| (h.box_index, h.span)), Some((1, Interval::new(0.5, 1.5))));
    assert_eq!(hits[2], None);
    assert_eq!(hits[1], nearest_hit(&rays[1], &boxes, &q.t_range()));

    let stats = BatchStats::from_hits(&hits);
    assert_eq!((stats.rays, stats.hits, stats.misses), (3, 2, 1));
}
