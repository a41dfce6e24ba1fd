use crate::math::Vec2;
use std::f64::consts::TAU;
use thiserror::Error;

use super::LAYOUT_OFFSET;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("sector count must be positive")]
    InvalidSectorCount,
}

/// Angle of the pointing vector in [0, 2PI), after the configured offset.
pub fn wheel_angle(pointing: Vec2, offset: f64) -> f64 {
    (pointing.angle() + offset).rem_euclid(TAU)
}

/// Maps an angle onto the nearest of `count` equally sized sectors.
/// Rounding is half-away-from-zero, so the exact boundary between two
/// sectors belongs to the higher one; the upper half of the last sector
/// wraps back to sector 0.
pub fn sector_at(angle: f64, count: usize) -> Result<usize, GeometryError> {
    if count == 0 {
        return Err(GeometryError::InvalidSectorCount);
    }
    Ok((angle / TAU * count as f64).round() as usize % count)
}

/// Layout anchor for one sector: step 2PI/count around the wheel, with
/// slot 0 at the top. Used when the layout is (re)built, not per tick.
pub fn circle_position(index: usize, count: usize, radius: f64) -> Vec2 {
    let angle = index as f64 * (TAU / count as f64) + LAYOUT_OFFSET;
    Vec2::new(radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn every_angle_maps_into_range() {
        for count in [1, 2, 3, 5, 8, 12] {
            for step in 0..1000 {
                let angle = step as f64 / 1000.0 * TAU;
                let sector = sector_at(angle, count).unwrap();
                assert!(sector < count, "angle {angle} count {count} -> {sector}");
            }
        }
    }

    #[test]
    fn sector_centers_map_to_themselves() {
        for count in [1, 4, 8, 6] {
            for index in 0..count {
                let angle = index as f64 * TAU / count as f64;
                assert_eq!(sector_at(angle, count).unwrap(), index);
            }
        }
    }

    #[test]
    fn boundaries_split_adjacent_sectors_evenly() {
        let count = 8;
        let step = TAU / count as f64;
        let eps = 1e-9;

        for index in 0..count - 1 {
            let boundary = (index as f64 + 0.5) * step;
            assert_eq!(sector_at(boundary - eps, count).unwrap(), index);
            assert_eq!(sector_at(boundary + eps, count).unwrap(), index + 1);
        }
    }

    #[test]
    fn exact_boundary_rounds_away_from_zero() {
        let count = 8;
        let step = TAU / count as f64;

        assert_eq!(sector_at(0.5 * step, count).unwrap(), 1);
        assert_eq!(sector_at(2.5 * step, count).unwrap(), 3);
        // The half step past the last sector wraps back around.
        assert_eq!(sector_at(7.5 * step, count).unwrap(), 0);
    }

    #[test]
    fn zero_sectors_is_rejected() {
        assert_eq!(sector_at(1.0, 0), Err(GeometryError::InvalidSectorCount));
    }

    #[test]
    fn offset_angle_wraps_to_positive() {
        // atan2(0, 1) = 0, shifted by -PI/2, wraps to 3PI/2.
        let angle = wheel_angle(Vec2::new(1.0, 0.0), -FRAC_PI_2);
        assert!(close(angle, 1.5 * std::f64::consts::PI));

        // Straight up lands on zero with the same offset.
        assert!(close(wheel_angle(Vec2::new(0.0, 1.0), -FRAC_PI_2), 0.0));
    }

    #[test]
    fn pointing_right_on_an_eight_wheel_is_sector_six() {
        let angle = wheel_angle(Vec2::new(1.0, 0.0), -FRAC_PI_2);
        assert_eq!(sector_at(angle, 8).unwrap(), 6);
    }

    #[test]
    fn slot_zero_sits_at_the_top() {
        let pos = circle_position(0, 8, 100.0);
        assert!(close(pos.x, 0.0));
        assert!(close(pos.y, 100.0));
    }

    #[test]
    fn layout_walks_counter_clockwise_from_the_top() {
        // Two steps of PI/4 past the top is the left of the wheel.
        let pos = circle_position(2, 8, 50.0);
        assert!(close(pos.x, -50.0));
        assert!(close(pos.y, 0.0));
    }
}
