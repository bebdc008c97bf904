use std::cmp::Ordering;

use foundation::geo::{GeoPoint, haversine_km};
use model::{Facility, FacilityKind};

/// A facility annotated with its distance to the reference point.
///
/// Ephemeral: borrows the facility snapshot for the duration of one
/// analysis call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProximityHit<'a> {
    pub facility: &'a Facility,
    pub distance_km: f64,
}

/// Ranks the closest available facilities of one category.
///
/// Damaged facilities are excluded; so is anything whose position is not
/// finite (ingestion already guarantees this, the check here just keeps the
/// function safe on hand-built inputs). The sort is stable, so equidistant
/// facilities keep their input order. No matches yields an empty vec.
pub fn nearest_facilities<'a>(
    target: GeoPoint,
    kind: FacilityKind,
    facilities: &'a [Facility],
    limit: usize,
) -> Vec<ProximityHit<'a>> {
    let mut hits: Vec<ProximityHit<'a>> = facilities
        .iter()
        .filter(|f| f.kind() == Some(kind) && f.is_available() && f.position.is_finite())
        .map(|facility| ProximityHit {
            facility,
            distance_km: haversine_km(target, facility.position),
        })
        .collect();

    hits.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });
    hits.truncate(limit);
    hits
}
