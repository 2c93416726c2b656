//! Small scalar and vector helpers shared by the motion and orbit systems.
//!
//! Angles are in degrees unless a name says otherwise. Vectors use raylib's
//! [`Vector2`] so they flow straight into the ECS components.

use raylib::prelude::Vector2;

/// Vectors shorter than this are treated as zero when normalizing.
pub const NORMALIZE_EPSILON: f32 = 1e-5;

/// Clamp `t` into `[0, 1]`.
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Wrap `t` into `[0, length)`.
fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Signed shortest difference `to - from`, wrapped into `(-180, 180]`.
pub fn delta_angle(from: f32, to: f32) -> f32 {
    let mut delta = repeat(to - from, 360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Interpolate between two headings along the shortest arc.
///
/// `t` is clamped, so `lerp_angle(a, b, 1.0)` lands on `a + delta_angle(a, b)`
/// which is `b` up to a multiple of 360. The result is not wrapped; callers
/// that accumulate heading keep a continuous value.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    from + delta_angle(from, to) * clamp01(t)
}

/// Unit vector in the direction of `v`, or zero for (near) zero-length input.
pub fn normalize_or_zero(v: Vector2) -> Vector2 {
    let len = v.length();
    if len > NORMALIZE_EPSILON {
        Vector2 {
            x: v.x / len,
            y: v.y / len,
        }
    } else {
        Vector2 { x: 0.0, y: 0.0 }
    }
}

/// Heading in degrees for a direction, with "up" (`+y`) mapped to 0.
pub fn heading_from_direction(direction: Vector2) -> f32 {
    direction.y.atan2(direction.x).to_degrees() - 90.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn delta_angle_takes_the_short_way_round() {
        assert!(approx_eq(delta_angle(10.0, 350.0), -20.0));
        assert!(approx_eq(delta_angle(350.0, 10.0), 20.0));
        assert!(approx_eq(delta_angle(0.0, -90.0), -90.0));
        assert!(approx_eq(delta_angle(0.0, 180.0), 180.0));
        assert!(approx_eq(delta_angle(0.0, 720.0), 0.0));
    }

    #[test]
    fn lerp_angle_clamps_factor() {
        assert!(approx_eq(lerp_angle(0.0, 90.0, 0.5), 45.0));
        assert!(approx_eq(lerp_angle(0.0, 90.0, 2.0), 90.0));
        assert!(approx_eq(lerp_angle(0.0, 90.0, -1.0), 0.0));
        // 170 -> -170 crosses 180 instead of sweeping back through 0
        assert!(approx_eq(lerp_angle(170.0, -170.0, 0.5), 180.0));
    }

    #[test]
    fn normalize_or_zero_handles_zero() {
        let z = normalize_or_zero(Vector2 { x: 0.0, y: 0.0 });
        assert!(approx_eq(z.x, 0.0) && approx_eq(z.y, 0.0));
        let d = normalize_or_zero(Vector2 { x: 1.0, y: 1.0 });
        assert!(approx_eq(d.x, std::f32::consts::FRAC_1_SQRT_2));
        assert!(approx_eq(d.y, std::f32::consts::FRAC_1_SQRT_2));
    }

    #[test]
    fn heading_maps_up_to_zero() {
        assert!(approx_eq(heading_from_direction(Vector2 { x: 0.0, y: 1.0 }), 0.0));
        assert!(approx_eq(heading_from_direction(Vector2 { x: 1.0, y: 0.0 }), -90.0));
        assert!(approx_eq(heading_from_direction(Vector2 { x: -1.0, y: 0.0 }), 90.0));
    }
}
