// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use std::collections::HashMap;

use kite_geom::{
    generate_hull_faces, generate_hull_indices, generate_hull_triangles, is_point_inside,
    ConvexHull, HullError, HullOptions, VertexBuffer,
};
use kite_math::{Prng, Vec3};
use tracing_subscriber::EnvFilter;

const CUBE: [f32; 24] = [
    -1.0, -1.0, -1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0, -1.0, //
    1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0,
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sorted(mut v: Vec<usize>) -> Vec<usize> {
    v.sort_unstable();
    v
}

/// Every undirected edge of a closed triangle mesh is shared by exactly two
/// triangles.
fn assert_closed(triangles: &[usize]) {
    let mut edges: HashMap<(usize, usize), usize> = HashMap::new();
    for t in triangles.chunks_exact(3) {
        for (p, q) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
            *edges.entry((p.min(q), p.max(q))).or_default() += 1;
        }
    }
    for (edge, count) in edges {
        assert_eq!(count, 2, "edge {edge:?} used {count} times");
    }
}

fn assert_outward(buffer: &VertexBuffer<'_>, triangles: &[usize], center: &Vec3) {
    for t in triangles.chunks_exact(3) {
        let a = buffer.vec3_at(t[0]);
        let b = buffer.vec3_at(t[1]);
        let c = buffer.vec3_at(t[2]);
        let n = b.sub(&a).cross(&c.sub(&a));
        assert!(n.dot(&a.sub(center)) > 0.0, "triangle {t:?} faces inward");
    }
}

#[test]
fn cube_corners_are_all_hull_points() {
    init_tracing();
    let buffer = VertexBuffer::packed(&CUBE);
    let hull = generate_hull_indices(&buffer);
    assert_eq!(sorted(hull), vec![0, 3, 6, 9, 12, 15, 18, 21]);
}

#[test]
fn cube_center_is_not_a_hull_point() {
    let mut data = CUBE.to_vec();
    data.extend_from_slice(&[0.0, 0.0, 0.0]);
    let buffer = VertexBuffer::packed(&data);
    let hull = generate_hull_indices(&buffer);
    assert_eq!(sorted(hull), vec![0, 3, 6, 9, 12, 15, 18, 21]);
}

#[test]
fn interior_points_are_dropped_from_box_with_extras() {
    let data = [
        -1.0, -1.0, -1.0, 0.0, 0.0, 0.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0, -1.0, //
        1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0, //
        -0.5, -0.5, -0.5, 0.5, 0.5, 0.5,
    ];
    let buffer = VertexBuffer::packed(&data);
    let hull = generate_hull_indices(&buffer);
    assert_eq!(sorted(hull), vec![0, 6, 9, 12, 15, 18, 21, 24]);
}

#[test]
fn repeated_points_appear_once() {
    let mut data = CUBE.to_vec();
    data.extend_from_slice(&CUBE);
    let buffer = VertexBuffer::packed(&data);
    let hull = generate_hull_indices(&buffer);
    assert_eq!(hull.len(), 8);
    assert!(hull.iter().all(|&o| o < CUBE.len()));
}

#[test]
fn hull_of_empty_buffer_is_empty() {
    let buffer = VertexBuffer::packed(&[]);
    assert!(generate_hull_indices(&buffer).is_empty());
}

#[test]
fn center_is_inside_cube_and_far_point_is_not() {
    let buffer = VertexBuffer::packed(&CUBE);
    let hull: Vec<usize> = buffer.offsets().collect();
    assert!(is_point_inside(&buffer, &hull, &Vec3::ZERO));
    assert!(!is_point_inside(&buffer, &hull, &Vec3::new(5.0, 0.2, 0.1)));
}

#[test]
fn cube_triangulates_into_twelve_outward_triangles() {
    init_tracing();
    let buffer = VertexBuffer::packed(&CUBE);
    let hull = generate_hull_indices(&buffer);
    let triangles = generate_hull_triangles(&buffer, &hull).unwrap();
    assert_eq!(triangles.len(), 36);
    assert_closed(&triangles);
    assert_outward(&buffer, &triangles, &Vec3::ZERO);
}

#[test]
fn face_normals_are_unit_and_outward() {
    let buffer = VertexBuffer::packed(&CUBE);
    let hull: Vec<usize> = buffer.offsets().collect();
    let faces = generate_hull_faces(&buffer, &hull, &HullOptions::default()).unwrap();
    assert_eq!(faces.len(), 12);
    for face in faces {
        assert!((face.normal.length() - 1.0).abs() < 1e-5);
        let a = buffer.vec3_at(face.a);
        assert!(face.normal.dot(&a) > 0.0);
    }
}

#[test]
fn interior_point_passed_to_triangulation_is_skipped() {
    let mut data = CUBE.to_vec();
    data.extend_from_slice(&[0.1, -0.2, 0.3]);
    let buffer = VertexBuffer::packed(&data);
    let all: Vec<usize> = buffer.offsets().collect();
    let triangles = generate_hull_triangles(&buffer, &all).unwrap();
    assert_eq!(triangles.len(), 36);
    assert!(!triangles.contains(&24));
}

#[test]
fn tetrahedron_has_four_triangles() {
    let data = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let buffer = VertexBuffer::packed(&data);
    let triangles = generate_hull_triangles(&buffer, &[0, 3, 6, 9]).unwrap();
    assert_eq!(triangles.len(), 12);
    assert_closed(&triangles);
    assert_outward(&buffer, &triangles, &buffer.centroid());
}

#[test]
fn too_few_points_is_an_error() {
    let data = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let buffer = VertexBuffer::packed(&data);
    let err = generate_hull_triangles(&buffer, &[0, 3, 6]).unwrap_err();
    assert_eq!(err, HullError::TooFewPoints { count: 3 });
    assert_eq!(err.to_string(), "need at least four hull points, got 3");
}

#[test]
fn flat_square_is_coplanar() {
    let data = [
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.5, 0.5, 0.0,
    ];
    let buffer = VertexBuffer::packed(&data);
    let all: Vec<usize> = buffer.offsets().collect();
    assert_eq!(
        generate_hull_triangles(&buffer, &all),
        Err(HullError::Coplanar)
    );
}

#[test]
fn build_honours_stride() {
    // xyz followed by an rgb payload that must not influence the hull.
    let mut data = Vec::new();
    for corner in CUBE.chunks_exact(3) {
        data.extend_from_slice(corner);
        data.extend_from_slice(&[9.0, -9.0, 9.0]);
    }
    let options = HullOptions::default().with_stride(6);
    let hull = ConvexHull::build(&data, &options).unwrap();
    assert_eq!(sorted(hull.indices.clone()), vec![0, 6, 12, 18, 24, 30, 36, 42]);
    assert_eq!(hull.triangle_count(), 12);
    assert!(hull.triangles_iter().flatten().all(|o| o % 6 == 0));
}

/// `count` points drawn uniformly from the unit ball.
fn ball_cloud(seed: u64, count: usize) -> Vec<f32> {
    let mut rng = Prng::from_seed_u64(seed);
    let mut data = Vec::with_capacity(count * 3);
    while data.len() < count * 3 {
        let p = rng.next_vec3(&Vec3::splat(-1.0), &Vec3::ONE);
        if p.length_squared() <= 1.0 {
            data.extend_from_slice(&p.to_array());
        }
    }
    data
}

#[test]
fn built_hull_encloses_every_ball_cloud_point() {
    init_tracing();
    for seed in [7, 1, 42, 1234] {
        let data = ball_cloud(seed, 60);
        let buffer = VertexBuffer::packed(&data);
        let hull = ConvexHull::build(&data, &HullOptions::default()).unwrap();
        assert_closed(&hull.triangles);
        assert!(hull.indices.windows(2).all(|w| w[0] < w[1]));
        for [a, b, c] in hull.triangles_iter() {
            assert!(hull.indices.contains(&a) && hull.indices.contains(&b) && hull.indices.contains(&c));
            let pa = buffer.vec3_at(a);
            let normal = buffer.vec3_at(b).sub(&pa).cross(&buffer.vec3_at(c).sub(&pa)).normalize();
            for offset in buffer.offsets() {
                let height = normal.dot(&buffer.vec3_at(offset).sub(&pa));
                assert!(height <= 1e-4, "seed {seed}: offset {offset} is {height} outside {:?}", [a, b, c]);
            }
        }
    }
}

#[test]
fn points_left_off_the_hull_are_inside_it() {
    let mut data = CUBE.to_vec();
    data.extend_from_slice(&[0.0, 0.0, 0.0, 0.9, 0.9, 0.9, -0.3, 0.2, 0.7]);
    let buffer = VertexBuffer::packed(&data);
    let hull = generate_hull_indices(&buffer);
    for offset in buffer.offsets().filter(|o| !hull.contains(o)) {
        assert!(is_point_inside(&buffer, &hull, &buffer.vec3_at(offset)), "offset {offset}");
    }
}
