/// A point on the map, captured by a single tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Visible map region: a center plus the span covered by the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Maps an element-relative tap (fractions in [0, 1], origin at the
    /// top-left corner) to the geographic position under the finger.
    pub fn position_at(&self, fx: f64, fy: f64) -> GeoPosition {
        let fx = fx.clamp(0.0, 1.0);
        let fy = fy.clamp(0.0, 1.0);

        GeoPosition {
            // screen y grows downwards, latitude grows upwards
            latitude: self.latitude + self.latitude_delta * (0.5 - fy),
            longitude: self.longitude + self.longitude_delta * (fx - 0.5),
        }
    }

    /// Inverse of [`MapRegion::position_at`]: where inside the view a
    /// position sits, as fractions. Values outside [0, 1] mean the
    /// position is off screen.
    pub fn locate(&self, position: GeoPosition) -> (f64, f64) {
        let fx = (position.longitude - self.longitude) / self.longitude_delta + 0.5;
        let fy = 0.5 - (position.latitude - self.latitude) / self.latitude_delta;
        (fx, fy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> MapRegion {
        MapRegion {
            latitude: -9.414112,
            longitude: -36.6328008,
            latitude_delta: 0.008,
            longitude_delta: 0.008,
        }
    }

    #[test]
    fn test_center_tap_hits_region_center() {
        let pos = region().position_at(0.5, 0.5);
        assert!((pos.latitude - -9.414112).abs() < 1e-9);
        assert!((pos.longitude - -36.6328008).abs() < 1e-9);
    }

    #[test]
    fn test_top_left_tap() {
        let r = region();
        let pos = r.position_at(0.0, 0.0);
        assert!((pos.latitude - (r.latitude + r.latitude_delta / 2.0)).abs() < 1e-9);
        assert!((pos.longitude - (r.longitude - r.longitude_delta / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_locate_round_trips() {
        let r = region();
        let pos = r.position_at(0.25, 0.75);
        let (fx, fy) = r.locate(pos);
        assert!((fx - 0.25).abs() < 1e-9);
        assert!((fy - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_tap_outside_is_clamped() {
        let r = region();
        assert_eq!(r.position_at(2.0, -1.0), r.position_at(1.0, 0.0));
    }
}
