// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, PI};

use kite_math::Vec3;

const EPS: f32 = 1e-6;

#[test]
fn normalize_zero_vector_is_zero() {
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    assert_eq!(Vec3::splat(1e-8).normalize(), Vec3::ZERO);
    let n = Vec3::new(3.0, 0.0, 4.0).normalize();
    assert!(n.approx_eq(&Vec3::new(0.6, 0.0, 0.8), EPS));
}

#[test]
fn cross_follows_right_hand_rule() {
    assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_X), -Vec3::UNIT_Z);
}

#[test]
fn operators_match_methods() {
    let a = Vec3::new(1.0, -2.0, 3.0);
    let b = Vec3::new(0.5, 4.0, -1.0);
    assert_eq!(a + b, a.add(&b));
    assert_eq!(a - b, a.sub(&b));
    assert_eq!(a * 2.0, a.scale(2.0));
    assert_eq!(a.scale_and_add(&b, 2.0), a + b * 2.0);
}

#[test]
fn lengths_and_distances() {
    let a = Vec3::new(1.0, 2.0, 2.0);
    assert_eq!(a.length(), 3.0);
    assert_eq!(a.length_squared(), 9.0);
    assert_eq!(Vec3::new(-1.0, 2.0, -3.0).manhattan_length(), 6.0);
    assert_eq!(Vec3::ZERO.distance(&a), 3.0);
    assert_eq!(a.distance_squared(&Vec3::ZERO), 9.0);
    assert!((a.set_length(6.0).length() - 6.0).abs() < 1e-5);
}

#[test]
fn min_max_clamp() {
    let a = Vec3::new(1.0, 5.0, -2.0);
    let b = Vec3::new(3.0, -1.0, 0.0);
    assert_eq!(a.min(&b).to_array(), [1.0, -1.0, -2.0]);
    assert_eq!(a.max(&b).to_array(), [3.0, 5.0, 0.0]);
    assert_eq!(a.clamp(0.0, 2.0).to_array(), [1.0, 2.0, 0.0]);
    assert_eq!(
        a.clamp_to(&Vec3::splat(-1.0), &Vec3::new(0.5, 1.0, 1.0)).to_array(),
        [0.5, 1.0, -1.0]
    );
    assert_eq!(a.smallest_component(), -2.0);
    assert_eq!(a.largest_component(), 5.0);
}

#[test]
#[should_panic(expected = "invalid clamp range")]
fn clamp_rejects_inverted_range() {
    let _ = Vec3::ONE.clamp(2.0, 1.0);
}

#[test]
fn lerp_interpolates_linearly() {
    let a = Vec3::new(0.0, 10.0, -4.0);
    let b = Vec3::new(2.0, 20.0, 4.0);
    assert_eq!(a.lerp(&b, 0.5).to_array(), [1.0, 15.0, 0.0]);
    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
}

#[test]
fn project_onto_second_vector() {
    let a = Vec3::new(2.0, 3.0, 0.0);
    assert_eq!(a.project(&Vec3::new(4.0, 0.0, 0.0)).to_array(), [2.0, 0.0, 0.0]);
    assert_eq!(a.project(&Vec3::ZERO), Vec3::ZERO);
}

#[test]
fn reflect_off_plane() {
    let v = Vec3::new(1.0, -1.0, 0.0);
    assert_eq!(v.reflect(&Vec3::UNIT_Y).to_array(), [1.0, 1.0, 0.0]);
}

#[test]
fn angle_between_vectors() {
    assert!((Vec3::UNIT_X.angle(&Vec3::UNIT_Y) - FRAC_PI_2).abs() < EPS);
    assert!((Vec3::UNIT_X.angle(&-Vec3::UNIT_X) - PI).abs() < EPS);
    assert_eq!(Vec3::ZERO.angle(&Vec3::UNIT_X), 0.0);
}

#[test]
fn spherical_and_cylindrical_coordinates() {
    let v = Vec3::from_spherical(2.0, FRAC_PI_2, 0.0);
    assert!(v.approx_eq(&Vec3::new(0.0, 0.0, 2.0), 1e-5), "{v:?}");
    let v = Vec3::from_spherical(1.0, 0.0, 1.3);
    assert!(v.approx_eq(&Vec3::UNIT_Y, 1e-5), "{v:?}");
    let v = Vec3::from_cylindrical(3.0, FRAC_PI_2, -1.0);
    assert!(v.approx_eq(&Vec3::new(3.0, -1.0, 0.0), 1e-5), "{v:?}");
}

#[test]
fn plane_normal_follows_winding() {
    let n = Vec3::plane_normal(&Vec3::ZERO, &Vec3::UNIT_X, &Vec3::UNIT_Y);
    assert!(n.approx_eq(&Vec3::UNIT_Z, EPS), "{n:?}");
    let collinear = Vec3::plane_normal(&Vec3::ZERO, &Vec3::UNIT_X, &Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(collinear, Vec3::ZERO);
}

#[test]
fn reciprocal_guards_zero() {
    assert_eq!(Vec3::new(2.0, 0.0, -4.0).reciprocal().to_array(), [0.5, 0.0, -0.25]);
}
