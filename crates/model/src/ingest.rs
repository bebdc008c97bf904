//! Normalization boundary between the loose feed payloads and the canonical
//! domain types.
//!
//! The backing API is tolerated as-is: coordinates arrive as numbers or
//! numeric strings, under several field names, or nested in a `location`
//! object; zone geometry may be a JSON-encoded string. All of that is
//! resolved here, once. Records that cannot be normalized are skipped and
//! counted, never raised as errors.

use foundation::geo::{GeoBounds, GeoPoint};
use serde::Deserialize;

use crate::facility::Facility;
use crate::zone::{FloodZone, RiskLevel};

/// Plausibility region for the monitored metro area (greater Chennai).
pub const DEFAULT_REGION: GeoBounds = GeoBounds::new(12.8, 13.3, 79.8, 80.5);

/// Errors surfaced by feed envelope parsing. Per-record problems are never
/// errors; they only show up in [`IngestStats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    Json(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Json(msg) => write!(f, "feed payload is not valid JSON: {msg}"),
        }
    }
}

impl std::error::Error for FeedError {}

/// Counts from one normalization pass.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct IngestStats {
    pub accepted: usize,
    pub skipped: usize,
}

/// A scalar that the feed may serialize as a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Num(f64),
    Text(String),
}

impl RawScalar {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawScalar::Num(v) => Some(*v),
            RawScalar::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Display form for fields that are text in spirit (ids, capacities).
    pub fn display(&self) -> String {
        match self {
            RawScalar::Num(v) if v.fract() == 0.0 => format!("{v:.0}"),
            RawScalar::Num(v) => v.to_string(),
            RawScalar::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLocation {
    #[serde(default)]
    pub lat: Option<RawScalar>,
    #[serde(default)]
    pub lng: Option<RawScalar>,
}

/// A facility record as the feed reports it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFacility {
    #[serde(default)]
    pub id: Option<RawScalar>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub latitude: Option<RawScalar>,
    #[serde(default)]
    pub longitude: Option<RawScalar>,
    #[serde(default)]
    pub lat: Option<RawScalar>,
    #[serde(default)]
    pub lng: Option<RawScalar>,
    #[serde(default)]
    pub location: Option<RawLocation>,
    #[serde(default, alias = "capacity_overall")]
    pub capacity: Option<RawScalar>,
    #[serde(default, alias = "contact_info")]
    pub contact: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RawFacility {
    // Precedence: explicit latitude/longitude, then lat/lng, then the
    // nested location object.
    fn lat(&self) -> Option<f64> {
        self.latitude
            .as_ref()
            .or(self.lat.as_ref())
            .or(self.location.as_ref().and_then(|l| l.lat.as_ref()))
            .and_then(RawScalar::as_f64)
    }

    fn lng(&self) -> Option<f64> {
        self.longitude
            .as_ref()
            .or(self.lng.as_ref())
            .or(self.location.as_ref().and_then(|l| l.lng.as_ref()))
            .and_then(RawScalar::as_f64)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FacilityFeed {
    #[serde(default)]
    pub facilities: Vec<RawFacility>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ZoneFeed {
    #[serde(default)]
    pub zones: Vec<RawZone>,
}

/// Zone geometry: either an inline object or a JSON-encoded string of one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawGeometry {
    Object(GeometryObject),
    Encoded(String),
}

/// Polygon rings of `[lng, lat]` positions; only the outer ring is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeometryObject {
    #[serde(default)]
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawZone {
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub water_level: Option<RawScalar>,
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
    #[serde(default)]
    pub description: Option<String>,
}

pub fn parse_facility_feed(json: &str) -> Result<Vec<RawFacility>, FeedError> {
    let feed: FacilityFeed =
        serde_json::from_str(json).map_err(|e| FeedError::Json(e.to_string()))?;
    Ok(feed.facilities)
}

pub fn parse_zone_feed(json: &str) -> Result<Vec<RawZone>, FeedError> {
    let feed: ZoneFeed = serde_json::from_str(json).map_err(|e| FeedError::Json(e.to_string()))?;
    Ok(feed.zones)
}

/// Normalizes one raw facility. `None` when coordinates are missing,
/// non-numeric, non-finite, or outside the plausibility region.
pub fn normalize_facility(raw: RawFacility, region: GeoBounds) -> Option<Facility> {
    let position = GeoPoint::new(raw.lat()?, raw.lng()?);
    if !position.is_finite() || !region.contains(position) {
        return None;
    }

    Some(Facility {
        id: raw.id.map(|id| id.display()).unwrap_or_default(),
        name: raw.name.unwrap_or_default(),
        kind_raw: raw.kind.unwrap_or_default(),
        status: raw.status.unwrap_or_default(),
        position,
        capacity: raw.capacity.map(|c| c.display()),
        contact: raw.contact,
        description: raw.description,
    })
}

pub fn normalize_facilities(
    raws: Vec<RawFacility>,
    region: GeoBounds,
) -> (Vec<Facility>, IngestStats) {
    let mut stats = IngestStats::default();
    let mut out = Vec::with_capacity(raws.len());
    for raw in raws {
        match normalize_facility(raw, region) {
            Some(facility) => {
                stats.accepted += 1;
                out.push(facility);
            }
            None => stats.skipped += 1,
        }
    }
    (out, stats)
}

fn outer_ring(geometry: RawGeometry) -> Option<Vec<GeoPoint>> {
    let object = match geometry {
        RawGeometry::Object(object) => object,
        RawGeometry::Encoded(text) => serde_json::from_str(&text).ok()?,
    };

    let ring: Vec<GeoPoint> = object
        .coordinates
        .first()?
        .iter()
        .map(|&[lng, lat]| GeoPoint::new(lat, lng))
        .collect();
    if ring.is_empty() || ring.iter().any(|p| !p.is_finite()) {
        return None;
    }
    Some(ring)
}

/// Normalizes one raw zone. `None` when the outer ring is absent, empty, or
/// contains non-finite positions.
pub fn normalize_zone(raw: RawZone) -> Option<FloodZone> {
    let ring = outer_ring(raw.geometry?)?;

    Some(FloodZone {
        zone_name: raw.zone_name.unwrap_or_default(),
        risk_level: RiskLevel::parse(raw.risk_level.as_deref().unwrap_or_default()),
        water_level_m: raw.water_level.and_then(|w| w.as_f64()).unwrap_or(0.0),
        ring,
        description: raw.description,
    })
}

pub fn normalize_zones(raws: Vec<RawZone>) -> (Vec<FloodZone>, IngestStats) {
    let mut stats = IngestStats::default();
    let mut out = Vec::with_capacity(raws.len());
    for raw in raws {
        match normalize_zone(raw) {
            Some(zone) => {
                stats.accepted += 1;
                out.push(zone);
            }
            None => stats.skipped += 1,
        }
    }
    (out, stats)
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_REGION, IngestStats, normalize_facilities, normalize_zone, parse_facility_feed,
        parse_zone_feed,
    };
    use crate::zone::RiskLevel;
    use foundation::geo::GeoBounds;
    use pretty_assertions::assert_eq;

    #[test]
    fn coerces_numeric_string_coordinates() {
        let raws = parse_facility_feed(
            r#"{"facilities": [{"id": 1, "name": "GH", "type": "hospital",
                "status": "operational",
                "location": {"lat": "13.08", "lng": "80.27"}}]}"#,
        )
        .unwrap();
        let (facilities, stats) = normalize_facilities(raws, DEFAULT_REGION);
        assert_eq!(stats, IngestStats { accepted: 1, skipped: 0 });
        assert_eq!(facilities[0].position.lat_deg, 13.08);
        assert_eq!(facilities[0].position.lng_deg, 80.27);
        assert_eq!(facilities[0].id, "1");
    }

    #[test]
    fn explicit_fields_win_over_nested_location() {
        let raws = parse_facility_feed(
            r#"{"facilities": [{"name": "A", "type": "shelter", "status": "operational",
                "latitude": 13.1, "longitude": 80.2,
                "location": {"lat": 13.2, "lng": 80.3}}]}"#,
        )
        .unwrap();
        let (facilities, _) = normalize_facilities(raws, DEFAULT_REGION);
        assert_eq!(facilities[0].position.lat_deg, 13.1);
        assert_eq!(facilities[0].position.lng_deg, 80.2);
    }

    #[test]
    fn skips_non_numeric_coordinates() {
        let raws = parse_facility_feed(
            r#"{"facilities": [
                {"name": "Bad", "type": "shelter", "lat": "not-a-number", "lng": 80.2},
                {"name": "Good", "type": "shelter", "lat": 13.0, "lng": 80.2}]}"#,
        )
        .unwrap();
        let (facilities, stats) = normalize_facilities(raws, DEFAULT_REGION);
        assert_eq!(stats, IngestStats { accepted: 1, skipped: 1 });
        assert_eq!(facilities[0].name, "Good");
    }

    #[test]
    fn skips_missing_and_out_of_region_coordinates() {
        let raws = parse_facility_feed(
            r#"{"facilities": [
                {"name": "NoCoords", "type": "hospital"},
                {"name": "Elsewhere", "type": "hospital", "lat": 51.5, "lng": -0.1}]}"#,
        )
        .unwrap();
        let (facilities, stats) = normalize_facilities(raws, DEFAULT_REGION);
        assert!(facilities.is_empty());
        assert_eq!(stats, IngestStats { accepted: 0, skipped: 2 });
    }

    #[test]
    fn world_region_accepts_any_finite_coordinates() {
        let raws = parse_facility_feed(
            r#"{"facilities": [{"name": "Elsewhere", "type": "hospital",
                "lat": 51.5, "lng": -0.1}]}"#,
        )
        .unwrap();
        let (facilities, _) = normalize_facilities(raws, GeoBounds::world());
        assert_eq!(facilities.len(), 1);
    }

    #[test]
    fn unknown_kind_is_kept_for_counting() {
        let raws = parse_facility_feed(
            r#"{"facilities": [{"name": "Depot", "type": "warehouse",
                "status": "operational", "lat": 13.0, "lng": 80.2}]}"#,
        )
        .unwrap();
        let (facilities, _) = normalize_facilities(raws, DEFAULT_REGION);
        assert_eq!(facilities.len(), 1);
        assert_eq!(facilities[0].kind(), None);
        assert_eq!(facilities[0].kind_raw, "warehouse");
    }

    #[test]
    fn missing_facilities_array_means_empty_feed() {
        assert!(parse_facility_feed("{}").unwrap().is_empty());
        assert!(parse_zone_feed("{}").unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_envelope() {
        assert!(parse_facility_feed("not json").is_err());
    }

    #[test]
    fn parses_inline_zone_geometry() {
        let raws = parse_zone_feed(
            r#"{"zones": [{"zone_name": "Adyar Basin", "risk_level": "extreme",
                "water_level": 2.4,
                "geometry": {"coordinates": [[[80.2, 13.0], [80.3, 13.0], [80.3, 13.1]]]}}]}"#,
        )
        .unwrap();
        let zone = normalize_zone(raws.into_iter().next().unwrap()).unwrap();
        assert_eq!(zone.risk_level, RiskLevel::Extreme);
        assert_eq!(zone.water_level_m, 2.4);
        assert_eq!(zone.ring.len(), 3);
        // Feed positions are [lng, lat].
        assert_eq!(zone.ring[0].lat_deg, 13.0);
        assert_eq!(zone.ring[0].lng_deg, 80.2);
    }

    #[test]
    fn parses_json_encoded_zone_geometry() {
        let raws = parse_zone_feed(
            r#"{"zones": [{"zone_name": "Velachery", "risk_level": "high",
                "geometry": "{\"coordinates\": [[[80.21, 12.98], [80.22, 12.98]]]}"}]}"#,
        )
        .unwrap();
        let zone = normalize_zone(raws.into_iter().next().unwrap()).unwrap();
        assert_eq!(zone.zone_name, "Velachery");
        assert_eq!(zone.ring.len(), 2);
    }

    #[test]
    fn zone_without_usable_ring_is_skipped() {
        let raws = parse_zone_feed(
            r#"{"zones": [
                {"zone_name": "NoGeometry", "risk_level": "high"},
                {"zone_name": "EmptyRing", "geometry": {"coordinates": [[]]}},
                {"zone_name": "Garbled", "geometry": "not json either"}]}"#,
        )
        .unwrap();
        let (zones, stats) = super::normalize_zones(raws);
        assert!(zones.is_empty());
        assert_eq!(stats, IngestStats { accepted: 0, skipped: 3 });
    }
}
