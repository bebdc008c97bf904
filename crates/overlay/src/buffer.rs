use analysis::coverage::service_radius_m;
use foundation::geo::{EARTH_RADIUS_KM, GeoPoint};
use model::Facility;

/// Approximates a circle of `radius_m` around `center` as a closed ring.
///
/// Small-circle approximation on the local tangent plane; accurate enough
/// for service radii of a few kilometers. The ring is closed (first point
/// repeated last) so it can be handed straight to a polygon renderer.
pub fn circle_ring(center: GeoPoint, radius_m: f64, segments: usize) -> Vec<GeoPoint> {
    if segments < 3 || !center.is_finite() || !(radius_m > 0.0) {
        return Vec::new();
    }

    let radius_km = radius_m / 1000.0;
    let d_lat = (radius_km / EARTH_RADIUS_KM).to_degrees();
    let cos_lat = center.lat_deg.to_radians().cos();
    // Poleward of ~89.99 degrees the longitude scale degenerates; nothing
    // we monitor lives there, so an empty ring is fine.
    if cos_lat.abs() < 1e-6 {
        return Vec::new();
    }
    let d_lng = d_lat / cos_lat;

    let mut ring = Vec::with_capacity(segments + 1);
    for i in 0..segments {
        let theta = (i as f64 / segments as f64) * std::f64::consts::TAU;
        ring.push(GeoPoint::new(
            center.lat_deg + d_lat * theta.sin(),
            center.lng_deg + d_lng * theta.cos(),
        ));
    }
    ring.push(ring[0]);
    ring
}

/// Service-area ring for a facility, sized by its category's radius policy.
pub fn service_area(facility: &Facility, segments: usize) -> Vec<GeoPoint> {
    let radius_m = service_radius_m(facility.kind()) as f64;
    circle_ring(facility.position, radius_m, segments)
}

#[cfg(test)]
mod tests {
    use super::{circle_ring, service_area};
    use foundation::geo::{GeoPoint, haversine_km};
    use model::Facility;

    #[test]
    fn ring_points_sit_on_the_radius() {
        let center = GeoPoint::new(13.0827, 80.2707);
        let ring = circle_ring(center, 3000.0, 32);
        assert_eq!(ring.len(), 33);
        for p in &ring {
            let d = haversine_km(center, *p);
            assert!((d - 3.0).abs() < 0.05, "point at {d} km");
        }
    }

    #[test]
    fn ring_is_closed() {
        let ring = circle_ring(GeoPoint::new(13.0, 80.0), 2000.0, 16);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn degenerate_inputs_yield_empty_rings() {
        assert!(circle_ring(GeoPoint::new(13.0, 80.0), 0.0, 32).is_empty());
        assert!(circle_ring(GeoPoint::new(13.0, 80.0), -10.0, 32).is_empty());
        assert!(circle_ring(GeoPoint::new(13.0, 80.0), 1000.0, 2).is_empty());
        assert!(circle_ring(GeoPoint::new(f64::NAN, 80.0), 1000.0, 32).is_empty());
    }

    #[test]
    fn service_area_uses_the_category_radius() {
        let hospital = Facility {
            id: "1".to_string(),
            name: "GH".to_string(),
            kind_raw: "hospital".to_string(),
            status: "operational".to_string(),
            position: GeoPoint::new(13.0827, 80.2707),
            capacity: None,
            contact: None,
            description: None,
        };
        let ring = service_area(&hospital, 32);
        let d = haversine_km(hospital.position, ring[0]);
        assert!((d - 3.0).abs() < 0.05, "hospital radius should be 3 km, got {d}");
    }
}
