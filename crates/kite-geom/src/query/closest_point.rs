// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kite_math::Vec3;

/// Parameter `t` of the projection of `point` onto the line through `start`
/// and `end`; `0` for a zero-length segment.
pub fn line_to_point_parametric(start: &Vec3, end: &Vec3, point: &Vec3) -> f32 {
    let dir = end.sub(start);
    let len_sq = dir.length_squared();
    if len_sq == 0.0 {
        return 0.0;
    }
    dir.dot(&point.sub(start)) / len_sq
}

/// Point on the line through `start` and `end` closest to `point`.
///
/// With `clamp_to_segment` the result is restricted to the segment.
pub fn line_to_point(start: &Vec3, end: &Vec3, point: &Vec3, clamp_to_segment: bool) -> Vec3 {
    let t = line_to_point_parametric(start, end, point);
    let t = if clamp_to_segment { t.clamp(0.0, 1.0) } else { t };
    start.scale_and_add(&end.sub(start), t)
}
