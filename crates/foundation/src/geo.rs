/// Mean Earth radius (kilometers).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lng_deg: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lng_deg: f64) -> Self {
        Self { lat_deg, lng_deg }
    }

    pub fn is_finite(&self) -> bool {
        self.lat_deg.is_finite() && self.lng_deg.is_finite()
    }
}

/// Great-circle distance between two points, in kilometers.
///
/// Haversine over the mean Earth radius. This layer performs no input
/// validation: identical points give 0, out-of-range degrees give a
/// meaningless but non-crashing value. Callers validate coordinates first.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat_deg - a.lat_deg).to_radians();
    let d_lng = (b.lng_deg - a.lng_deg).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat_deg.to_radians().cos() * b.lat_deg.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Inclusive latitude/longitude bounding region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoBounds {
    pub min_lat_deg: f64,
    pub max_lat_deg: f64,
    pub min_lng_deg: f64,
    pub max_lng_deg: f64,
}

impl GeoBounds {
    pub const fn new(min_lat_deg: f64, max_lat_deg: f64, min_lng_deg: f64, max_lng_deg: f64) -> Self {
        Self {
            min_lat_deg,
            max_lat_deg,
            min_lng_deg,
            max_lng_deg,
        }
    }

    /// The whole globe, for callers that only want finiteness checks.
    pub fn world() -> Self {
        Self::new(-90.0, 90.0, -180.0, 180.0)
    }

    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat_deg >= self.min_lat_deg
            && p.lat_deg <= self.max_lat_deg
            && p.lng_deg >= self.min_lng_deg
            && p.lng_deg <= self.max_lng_deg
    }
}
