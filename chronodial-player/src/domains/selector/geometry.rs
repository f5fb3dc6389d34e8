//! Pure layout math for points on the selector circle. Angles are degrees in
//! screen space (y grows downward).

use iced::{Point, Vector};

use crate::infra::constants::wheel::START_ANGLE_DEG;

/// Angular distance between neighbouring points.
pub fn angle_step(count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        360.0 / count as f32
    }
}

/// Resting angle of point `index` before any circle rotation.
pub fn point_angle(index: usize, count: usize) -> f32 {
    START_ANGLE_DEG + index as f32 * angle_step(count)
}

/// Offset of a point from the circle centre with the circle rotated by
/// `rotation_deg`.
pub fn point_offset(
    index: usize,
    count: usize,
    radius: f32,
    rotation_deg: f32,
) -> Vector {
    let angle = (point_angle(index, count) + rotation_deg).to_radians();
    Vector::new(radius * angle.cos(), radius * angle.sin())
}

pub fn point_position(
    index: usize,
    count: usize,
    center: Point,
    radius: f32,
    rotation_deg: f32,
) -> Point {
    center + point_offset(index, count, radius, rotation_deg)
}

/// Normalise an angle into `(-180, 180]`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Shortest signed rotation taking point `from` to where point `to` sits.
/// Never more than half a turn.
pub fn rotation_delta(from: usize, to: usize, count: usize) -> f32 {
    let raw = (to as f32 - from as f32) * angle_step(count);
    normalize_degrees(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_zero_is_always_at_start_angle() {
        for count in 1..=12 {
            assert_eq!(point_angle(0, count), -60.0);
        }
    }

    #[test]
    fn points_divide_the_circle_evenly() {
        for count in 1..=12 {
            let step = angle_step(count);
            assert!((step * count as f32 - 360.0).abs() < 1e-3);
            for index in 1..count {
                let gap = point_angle(index, count) - point_angle(index - 1, count);
                assert!((gap - step).abs() < 1e-3);
            }
        }
        assert_eq!(angle_step(0), 0.0);
    }

    #[test]
    fn point_zero_sits_upper_right() {
        let p = point_position(0, 6, Point::new(0.0, 0.0), 100.0, 0.0);
        assert!((p.x - 50.0).abs() < 1e-3);
        assert!((p.y + 86.602).abs() < 1e-2);
    }

    #[test]
    fn rotating_by_negative_delta_brings_target_to_active_slot() {
        let count = 6;
        let center = Point::new(0.0, 0.0);
        let active_slot = point_position(0, count, center, 100.0, 0.0);
        for to in 0..count {
            let rotation = -rotation_delta(0, to, count);
            let p = point_position(to, count, center, 100.0, rotation);
            assert!((p.x - active_slot.x).abs() < 1e-2, "to={to}");
            assert!((p.y - active_slot.y).abs() < 1e-2, "to={to}");
        }
    }

    #[test]
    fn deltas_stay_within_half_turn() {
        for count in 1..=12 {
            for from in 0..count {
                for to in 0..count {
                    let delta = rotation_delta(from, to, count);
                    assert!(delta > -180.0 && delta <= 180.0, "{from}->{to}/{count}: {delta}");
                }
            }
        }
    }

    #[test]
    fn normalisation_examples() {
        assert_eq!(normalize_degrees(240.0), -120.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(540.0), 180.0);
        assert_eq!(normalize_degrees(-240.0), 120.0);
        assert_eq!(rotation_delta(0, 2, 3), -120.0);
        assert_eq!(rotation_delta(2, 0, 3), 120.0);
        assert_eq!(rotation_delta(0, 3, 6), 180.0);
        assert_eq!(rotation_delta(3, 0, 6), 180.0);
    }
}
