//! Wheel layout: shares projected onto circular sectors.
//!
//! Angles are in degrees with 0 at 12 o'clock, increasing clockwise. A share
//! of `s` percent spans `s * 3.6` degrees. Segments are emitted in participant
//! order and walk a cumulative counter from 0, so they are contiguous and,
//! when shares sum to 100, cover `[0, 360)` exactly.

use amethyst_types::{
    Color, JackpotError, Participant, DEGREES_PER_PERCENT, GRADIENT_SHADE, INNER_RADIUS,
    LABEL_RADIUS, OUTER_RADIUS, WHEEL_CENTER,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A point in the wheel's view box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Where and how large the wheel is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelGeometry {
    pub center: Point,
    /// Rim of the wheel.
    pub outer_radius: f64,
    /// Ring on which participant labels are anchored.
    pub label_radius: f64,
    /// Ring of the decorative inner arc.
    pub inner_radius: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            center: Point {
                x: WHEEL_CENTER.0,
                y: WHEEL_CENTER.1,
            },
            outer_radius: OUTER_RADIUS,
            label_radius: LABEL_RADIUS,
            inner_radius: INNER_RADIUS,
        }
    }
}

impl WheelGeometry {
    /// Radii must be positive and nested (`inner <= label <= outer`).
    pub fn validate(&self) -> Result<(), JackpotError> {
        if !(self.outer_radius > 0.0 && self.label_radius > 0.0 && self.inner_radius > 0.0) {
            return Err(JackpotError::InvalidConfig("wheel radii must be positive"));
        }
        if self.label_radius > self.outer_radius || self.inner_radius > self.label_radius {
            return Err(JackpotError::InvalidConfig(
                "wheel radii must satisfy inner <= label <= outer",
            ));
        }
        Ok(())
    }

    /// Point at `radius` from the centre in the direction of `angle`.
    pub fn point_at(&self, radius: f64, angle: f64) -> Point {
        let radians = (angle - 90.0) * (PI / 180.0);
        Point {
            x: self.center.x + radius * radians.cos(),
            y: self.center.y + radius * radians.sin(),
        }
    }
}

/// One participant's slice of the wheel. Derived; rebuilt whenever shares change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WheelSegment {
    pub participant_id: String,
    pub color: Color,
    pub share_percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    /// Sweep exceeds a half turn.
    pub large_arc: bool,
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_start: Point,
    pub inner_end: Point,
    pub label: Point,
    pub geometry: WheelGeometry,
}

impl WheelSegment {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// SVG arc flag for the sweep.
    pub fn large_arc_flag(&self) -> u8 {
        u8::from(self.large_arc)
    }

    /// Near and far fill colours of the segment gradient.
    pub fn gradient_stops(&self) -> (Color, Color) {
        (self.color, self.color.shade(GRADIENT_SHADE))
    }

    /// Half-open containment on `[start, end)`, with `angle` taken mod 360.
    pub fn contains(&self, angle: f64) -> bool {
        let angle = angle.rem_euclid(360.0);
        angle >= self.start_angle && angle < self.end_angle
    }

    /// Filled sector: centre, out to the rim, along the arc, back to centre.
    pub fn sector_path(&self) -> String {
        let Point { x: cx, y: cy } = self.geometry.center;
        let r = self.geometry.outer_radius;
        if self.is_full_circle() {
            // A single arc cannot start and end on the same point.
            let opposite = self.geometry.point_at(r, self.start_angle + 180.0);
            return format!(
                "M {cx} {cy} L {sx} {sy} A {r} {r} 0 1 1 {ox} {oy} A {r} {r} 0 1 1 {sx} {sy} Z",
                sx = self.outer_start.x,
                sy = self.outer_start.y,
                ox = opposite.x,
                oy = opposite.y,
            );
        }
        format!(
            "M {cx} {cy} L {sx} {sy} A {r} {r} 0 {large} 1 {ex} {ey} Z",
            sx = self.outer_start.x,
            sy = self.outer_start.y,
            large = self.large_arc_flag(),
            ex = self.outer_end.x,
            ey = self.outer_end.y,
        )
    }

    /// The two radial edges separating this segment from its neighbours.
    pub fn divider_path(&self) -> String {
        let Point { x: cx, y: cy } = self.geometry.center;
        format!(
            "M {sx} {sy} L {cx} {cy} L {ex} {ey}",
            sx = self.outer_start.x,
            sy = self.outer_start.y,
            ex = self.outer_end.x,
            ey = self.outer_end.y,
        )
    }

    /// Decorative arc on the inner ring.
    pub fn inner_arc_path(&self) -> String {
        let r = self.geometry.inner_radius;
        format!(
            "M {sx} {sy} A {r} {r} 0 {large} 1 {ex} {ey}",
            sx = self.inner_start.x,
            sy = self.inner_start.y,
            large = self.large_arc_flag(),
            ex = self.inner_end.x,
            ey = self.inner_end.y,
        )
    }

    fn is_full_circle(&self) -> bool {
        self.sweep() >= 360.0 - 1e-9
    }
}

/// Lay out one segment per participant, in participant order.
pub fn generate_segments(participants: &[Participant], geometry: &WheelGeometry) -> Vec<WheelSegment> {
    let mut cumulative = 0.0;
    participants
        .iter()
        .map(|participant| {
            let start_angle = cumulative * DEGREES_PER_PERCENT;
            cumulative += participant.share_percent;
            let end_angle = cumulative * DEGREES_PER_PERCENT;
            let mid_angle = (start_angle + end_angle) / 2.0;
            WheelSegment {
                participant_id: participant.id.clone(),
                color: participant.color,
                share_percent: participant.share_percent,
                start_angle,
                end_angle,
                mid_angle,
                large_arc: end_angle - start_angle > 180.0,
                outer_start: geometry.point_at(geometry.outer_radius, start_angle),
                outer_end: geometry.point_at(geometry.outer_radius, end_angle),
                inner_start: geometry.point_at(geometry.inner_radius, start_angle),
                inner_end: geometry.point_at(geometry.inner_radius, end_angle),
                label: geometry.point_at(geometry.label_radius, mid_angle),
                geometry: *geometry,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::participants_with_values;
    use crate::weights::compute_shares;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn segments_for(values: &[f64]) -> Vec<WheelSegment> {
        let mut participants = participants_with_values(values);
        compute_shares(&mut participants).unwrap();
        generate_segments(&participants, &WheelGeometry::default())
    }

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    #[test]
    fn test_angles_follow_cumulative_share() {
        let segments = segments_for(&[20.0, 50.0, 30.0]);
        let angles: Vec<(f64, f64, f64)> = segments
            .iter()
            .map(|s| (s.start_angle, s.end_angle, s.mid_angle))
            .collect();
        assert_eq!(
            angles,
            vec![(0.0, 72.0, 36.0), (72.0, 252.0, 162.0), (252.0, 360.0, 306.0)]
        );
        assert_eq!(segments[1].participant_id, "p2");
    }

    #[test]
    fn test_large_arc_flag() {
        let segments = segments_for(&[20.0, 50.0, 30.0]);
        assert_eq!(segments[0].large_arc_flag(), 0);
        // Exactly half the wheel is not a large arc.
        assert_eq!(segments[1].large_arc_flag(), 0);

        let segments = segments_for(&[60.0, 40.0]);
        assert_eq!(segments[0].large_arc_flag(), 1);
        assert_eq!(segments[1].large_arc_flag(), 0);
    }

    #[test]
    fn test_points_use_top_clockwise_convention() {
        let geometry = WheelGeometry::default();
        assert_point(geometry.point_at(50.0, 0.0), 50.0, 0.0);
        assert_point(geometry.point_at(50.0, 90.0), 100.0, 50.0);
        assert_point(geometry.point_at(50.0, 180.0), 50.0, 100.0);
        assert_point(geometry.point_at(50.0, 270.0), 0.0, 50.0);
    }

    #[test]
    fn test_label_sits_on_label_ring_at_mid_angle() {
        let segments = segments_for(&[50.0, 50.0]);
        // First half spans 0..180, mid 90 => to the right of centre.
        assert_point(segments[0].label, 85.0, 50.0);
        assert_point(segments[1].label, 15.0, 50.0);
        assert_point(segments[0].inner_start, 50.0, 30.0);
    }

    #[test]
    fn test_paths() {
        let segments = segments_for(&[50.0, 50.0]);
        let first = &segments[0];
        // Right half: top of the rim round to the bottom.
        assert_eq!(first.sector_path(), "M 50 50 L 50 0 A 50 50 0 0 1 50 100 Z");
        assert_eq!(first.divider_path(), "M 50 0 L 50 50 L 50 100");
        assert!(first.inner_arc_path().starts_with("M 50 30 A 20 20 0 0 1 "));
    }

    #[test]
    fn test_gradient_darkens_far_stop() {
        let segments = segments_for(&[1.0]);
        let (near, far) = segments[0].gradient_stops();
        assert_eq!(near, Color::rgb(0xff, 0x5e, 0x7d));
        assert_eq!(far, Color::rgb(0xe1, 0x40, 0x5f));
    }

    #[test]
    fn test_single_participant_full_circle() {
        let segments = segments_for(&[10.0]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].sweep(), 360.0);
        assert!(segments[0].large_arc);
        let path = segments[0].sector_path();
        // Two half arcs via the bottom of the wheel.
        assert_eq!(path.matches(" A ").count(), 2);
        assert!(path.contains("50 100"));
    }

    #[test]
    fn test_contains_is_half_open() {
        let segments = segments_for(&[20.0, 50.0, 30.0]);
        assert!(segments[0].contains(0.0));
        assert!(!segments[0].contains(72.0));
        assert!(segments[1].contains(72.0));
        assert!(segments[2].contains(359.9));
        assert!(segments[0].contains(360.0 + 10.0));
    }

    #[test]
    fn test_geometry_validation() {
        assert!(WheelGeometry::default().validate().is_ok());
        let inverted = WheelGeometry {
            label_radius: 60.0,
            ..WheelGeometry::default()
        };
        assert!(inverted.validate().is_err());
        let zero = WheelGeometry {
            inner_radius: 0.0,
            ..WheelGeometry::default()
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_empty_roster_has_no_segments() {
        assert!(generate_segments(&[], &WheelGeometry::default()).is_empty());
    }

    proptest! {
        #[test]
        fn prop_segments_contiguous_and_cover_wheel(values in prop::collection::vec(0.01f64..10_000.0, 1..30)) {
            let segments = segments_for(&values);
            prop_assert_eq!(segments.len(), values.len());
            prop_assert_eq!(segments[0].start_angle, 0.0);
            for pair in segments.windows(2) {
                prop_assert_eq!(pair[0].end_angle, pair[1].start_angle);
                prop_assert!(pair[0].sweep() >= 0.0);
            }
            let last = segments.last().unwrap();
            prop_assert!((last.end_angle - 360.0).abs() < 1e-6);
        }
    }
}
