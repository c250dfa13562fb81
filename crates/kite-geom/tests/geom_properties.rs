// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use std::collections::HashMap;

use proptest::prelude::*;

use kite_geom::{
    closest_point, generate_hull_faces, intersection, overlap, proximity, Aabb, HullOptions, Obb,
    Plane, VertexBuffer,
};
use kite_math::{Affine4, Quat, Vec3};

fn vec3_in(range: core::ops::Range<f32>) -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(range).prop_map(Vec3::from)
}

/// Integer-valued corners keep extent arithmetic exact.
fn int_aabb() -> impl Strategy<Value = Aabb> {
    (prop::array::uniform3(-20i16..20), prop::array::uniform3(0i16..10)).prop_map(|(min, size)| {
        let min = Vec3::from(min.map(f32::from));
        let size = Vec3::from(size.map(f32::from));
        Aabb::new(min, min.add(&size))
    })
}

fn obb() -> impl Strategy<Value = Obb> {
    (
        vec3_in(0.1..3.0),
        vec3_in(-5.0..5.0),
        vec3_in(-1.0..1.0),
        -3.0f32..3.0,
        vec3_in(0.5..2.0),
    )
        .prop_filter("axis must not be degenerate", |(_, _, axis, _, _)| axis.length() > 0.1)
        .prop_map(|(half, position, axis, angle, scale)| {
            let extent = Aabb::from_center_half_extents(Vec3::ZERO, half);
            let rotation = Quat::from_axis_angle(axis, angle);
            Obb::new(extent, Affine4::compose(position, &rotation, scale)).unwrap()
        })
}

/// Points on a sphere, kept apart so no two are nearly coincident.
fn sphere_cloud() -> impl Strategy<Value = Vec<f32>> {
    (
        prop::collection::vec((0.0f32..core::f32::consts::TAU, -1.0f32..1.0), 5..24),
        0.5f32..5.0,
        vec3_in(-10.0..10.0),
    )
        .prop_map(|(angles, radius, center)| {
            angles
                .into_iter()
                .map(|(theta, z)| {
                    let ring = (1.0 - z * z).sqrt();
                    Vec3::new(ring * theta.cos(), ring * theta.sin(), z)
                        .scale(radius)
                        .add(&center)
                })
                .collect::<Vec<_>>()
        })
        .prop_filter("points too close", |points| {
            points
                .iter()
                .enumerate()
                .all(|(i, p)| points[..i].iter().all(|q| p.distance(q) > 0.05))
        })
        .prop_map(|points| points.iter().flat_map(|p| p.to_array()).collect())
}

proptest! {
    #[test]
    fn sphere_distance_is_symmetric(
        a in vec3_in(-10.0..10.0), ra in 0.0f32..5.0,
        b in vec3_in(-10.0..10.0), rb in 0.0f32..5.0,
    ) {
        prop_assert_eq!(
            proximity::sphere_to_sphere(&a, ra, &b, rb),
            proximity::sphere_to_sphere(&b, rb, &a, ra)
        );
        prop_assert_eq!(
            overlap::sphere_with_sphere(&a, ra, &b, rb),
            proximity::sphere_to_sphere(&a, ra, &b, rb) < 0.0
        );
    }

    #[test]
    fn aabb_distance_sign_matches_overlap(a in int_aabb(), b in int_aabb()) {
        let d = proximity::aabb_to_aabb(&a, &b);
        prop_assert_eq!(d, proximity::aabb_to_aabb(&b, &a));
        prop_assert_eq!(overlap::aabb_with_aabb(&a, &b), d <= 0.0);
        prop_assert_eq!(overlap::aabb_with_aabb(&a, &b), overlap::aabb_with_aabb(&b, &a));
    }

    #[test]
    fn box_overlap_is_symmetric(a in obb(), b in obb()) {
        prop_assert_eq!(proximity::box_to_box(&a, &b), proximity::box_to_box(&b, &a));
        prop_assert_eq!(overlap::box_with_box(&a, &b), overlap::box_with_box(&b, &a));
        prop_assert_eq!(overlap::box_with_box(&a, &b), proximity::box_to_box(&a, &b) < 0.0);
    }

    #[test]
    fn shrunken_copy_is_within_and_overlapping(b in obb(), factor in 0.2f32..0.8) {
        let shrunk = Aabb::from_center_half_extents(
            b.extent().center(),
            b.extent().dimensions().scale(0.5 * factor),
        );
        let inner = Obb::new(shrunk, *b.box_to_world()).unwrap();
        prop_assert!(overlap::box_within_box(&inner, &b));
        prop_assert!(overlap::box_with_box(&inner, &b));
        prop_assert!(!overlap::box_within_box(&b, &inner));
    }

    #[test]
    fn points_inside_a_box_touch_small_spheres(b in obb(), t in vec3_in(0.05..0.95)) {
        let e = b.extent();
        let local = e.min().add(&e.dimensions().multiply(&t));
        let world = b.box_to_world().transform_point(&local);
        prop_assert!(proximity::point_to_box(&world, &b) < 0.0);
        prop_assert!(overlap::sphere_with_box(&world, 0.01, &b));
    }

    #[test]
    fn crossing_segment_hits_the_plane(
        normal in vec3_in(-1.0..1.0),
        constant in -5.0f32..5.0,
        start in vec3_in(-10.0..10.0),
        end in vec3_in(-10.0..10.0),
    ) {
        prop_assume!(normal.length() > 0.1);
        let plane = Plane::new(normal.normalize(), constant);
        let d0 = proximity::point_to_plane(&start, &plane);
        let d1 = proximity::point_to_plane(&end, &plane);
        prop_assume!(d0 > 0.1 && d1 < -0.1);
        prop_assert_eq!(proximity::line_to_plane(&start, &end, &plane), 0.0);
        let hit = intersection::line_and_plane(&start, &end, &plane);
        prop_assert!(hit.is_some());
        if let Some(p) = hit {
            prop_assert!(proximity::point_to_plane(&p, &plane).abs() < 1e-3);
        }
    }

    #[test]
    fn closest_point_is_orthogonal_projection(
        start in vec3_in(-10.0..10.0),
        end in vec3_in(-10.0..10.0),
        p in vec3_in(-10.0..10.0),
    ) {
        let dir = end.sub(&start);
        prop_assume!(dir.length() > 0.1);
        let q = closest_point::line_to_point(&start, &end, &p, false);
        prop_assert!(p.sub(&q).dot(&dir.normalize()).abs() < 1e-2);
        let clamped = closest_point::line_to_point(&start, &end, &p, true);
        prop_assert!(clamped.distance(&p) + 1e-3 >= q.distance(&p));
    }

    #[test]
    fn sphere_hull_is_closed_convex_and_outward(data in sphere_cloud()) {
        let buffer = VertexBuffer::packed(&data);
        let offsets: Vec<usize> = buffer.offsets().collect();
        let faces = generate_hull_faces(&buffer, &offsets, &HullOptions::default()).unwrap();

        let mut edges: HashMap<(usize, usize), usize> = HashMap::new();
        for f in &faces {
            for (p, q) in [(f.a, f.b), (f.b, f.c), (f.c, f.a)] {
                *edges.entry((p.min(q), p.max(q))).or_default() += 1;
            }
        }
        prop_assert!(edges.values().all(|&n| n == 2));

        let center = buffer.centroid();
        let scale = Aabb::from_vertices(&buffer).dimensions().largest_component();
        for f in &faces {
            let a = buffer.vec3_at(f.a);
            prop_assert!(f.normal.dot(&a.sub(&center)) > 0.0);
            for &o in &offsets {
                prop_assert!(f.normal.dot(&buffer.vec3_at(o).sub(&a)) <= 1e-3 * scale);
            }
        }
    }
}
