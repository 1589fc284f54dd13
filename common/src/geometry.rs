//! Face geometry: center point, hand lengths and hand endpoints.
//!
//! Geometry is derived from the surface bounds once and cached in
//! [`GeometryCache`] until the host reports different bounds. Hand vectors are
//! cheap but still only recomputed when the time or the bounds change.

use embedded_graphics::prelude::{Point, Size};
use micromath::F32;

use crate::clock::HandAngles;
use crate::config::{HOUR_OFFSET, MINUTE_OFFSET, SECOND_OFFSET};

/// Sub-pixel point. Rounded to a [`Point`] only when drawing.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(
        x: f32,
        y: f32,
    ) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    pub fn offset(
        self,
        dx: f32,
        dy: f32,
    ) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Translate by another point treated as a vector.
    #[inline]
    pub fn add(
        self,
        other: Self,
    ) -> Self {
        self.offset(other.x, other.y)
    }

    /// Nearest integer pixel.
    pub fn to_point(self) -> Point { Point::new(round(self.x), round(self.y)) }
}

/// Round half away from zero without `std`.
#[inline]
pub(crate) fn round(v: f32) -> i32 {
    if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 }
}

/// Center and hand lengths for one set of surface bounds.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FaceGeometry {
    pub center: PointF,
    pub second_length: f32,
    pub minute_length: f32,
    pub hour_length: f32,
}

impl FaceGeometry {
    /// Derive geometry from surface bounds.
    ///
    /// The face is centered on the full surface, ignoring insets, so round
    /// panels with a flat "chin" still get a centered dial. Returns `None` for
    /// empty bounds.
    pub fn from_bounds(bounds: Size) -> Option<Self> {
        if bounds.width == 0 || bounds.height == 0 {
            return None;
        }
        let center = PointF::new(bounds.width as f32 / 2.0, bounds.height as f32 / 2.0);
        Some(Self {
            center,
            second_length: center.x - SECOND_OFFSET,
            minute_length: center.x - MINUTE_OFFSET,
            hour_length: center.x - HOUR_OFFSET,
        })
    }
}

/// Offset of a hand tip from the center: `(sin(a) * len, -cos(a) * len)`.
#[inline]
pub fn hand_offset(
    angle: f32,
    length: f32,
) -> PointF {
    let a = F32(angle);
    PointF::new(a.sin().0 * length, -a.cos().0 * length)
}

/// Absolute hand tip position.
#[inline]
pub fn hand_endpoint(
    center: PointF,
    angle: f32,
    length: f32,
) -> PointF {
    center.add(hand_offset(angle, length))
}

/// Hand tip offsets relative to the center.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HandVectors {
    pub hour: PointF,
    pub minute: PointF,
    pub second: PointF,
}

impl HandVectors {
    pub fn compute(
        geometry: &FaceGeometry,
        angles: &HandAngles,
    ) -> Self {
        Self {
            hour: hand_offset(angles.hour, geometry.hour_length),
            minute: hand_offset(angles.minute, geometry.minute_length),
            second: hand_offset(angles.second, geometry.second_length),
        }
    }
}

/// Geometry cached per reported bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeometryCache {
    bounds: Option<Size>,
    geometry: Option<FaceGeometry>,
}

impl GeometryCache {
    pub const fn new() -> Self {
        Self {
            bounds: None,
            geometry: None,
        }
    }

    /// Record new bounds. Returns `true` if the geometry was recomputed.
    pub fn update(
        &mut self,
        bounds: Size,
    ) -> bool {
        if self.bounds == Some(bounds) {
            return false;
        }
        self.bounds = Some(bounds);
        self.geometry = FaceGeometry::from_bounds(bounds);
        true
    }

    #[inline]
    pub const fn get(&self) -> Option<&FaceGeometry> { self.geometry.as_ref() }

    #[inline]
    pub const fn bounds(&self) -> Option<Size> { self.bounds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ClockTime, second_angle};

    const EPS: f32 = 0.5;

    fn close(
        a: PointF,
        b: PointF,
    ) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_geometry_from_bounds() {
        let geometry = FaceGeometry::from_bounds(Size::new(200, 200)).unwrap();
        assert_eq!(geometry.center, PointF::new(100.0, 100.0));
        assert_eq!(geometry.second_length, 40.0);
        assert_eq!(geometry.minute_length, 60.0);
        assert_eq!(geometry.hour_length, 80.0);
    }

    #[test]
    fn test_geometry_empty_bounds() {
        assert!(FaceGeometry::from_bounds(Size::new(0, 200)).is_none());
        assert!(FaceGeometry::from_bounds(Size::zero()).is_none());
    }

    #[test]
    fn test_second_hand_at_zero_points_up() {
        let center = PointF::new(100.0, 100.0);
        let tip = hand_endpoint(center, second_angle(0), 40.0);
        assert!(close(tip, PointF::new(100.0, 60.0)));
    }

    #[test]
    fn test_second_hand_at_fifteen_points_right() {
        let center = PointF::new(100.0, 100.0);
        let tip = hand_endpoint(center, second_angle(15), 40.0);
        assert!(close(tip, PointF::new(140.0, 100.0)));
    }

    #[test]
    fn test_hand_vectors_six_oclock() {
        let geometry = FaceGeometry::from_bounds(Size::new(200, 200)).unwrap();
        let time = ClockTime::new(6, 30, 45).unwrap();
        let hands = HandVectors::compute(&geometry, &HandAngles::from_time(time));
        // Minute at :30 points straight down
        assert!(close(hands.minute, PointF::new(0.0, 60.0)));
        // Second at :45 points left
        assert!(close(hands.second, PointF::new(-40.0, 0.0)));
    }

    #[test]
    fn test_cache_only_recomputes_on_change() {
        let mut cache = GeometryCache::new();
        assert!(cache.get().is_none());
        assert!(cache.update(Size::new(240, 240)));
        assert!(!cache.update(Size::new(240, 240)));
        assert_eq!(cache.get().unwrap().center, PointF::new(120.0, 120.0));
        assert!(cache.update(Size::new(320, 240)));
        assert_eq!(cache.get().unwrap().center, PointF::new(160.0, 120.0));
    }

    #[test]
    fn test_point_rounding() {
        assert_eq!(PointF::new(1.4, 1.6).to_point(), Point::new(1, 2));
        assert_eq!(PointF::new(-1.6, -0.4).to_point(), Point::new(-2, 0));
    }
}
