use std::collections::BTreeSet;

use analysis::coverage::service_radius_m;
use foundation::geo::GeoPoint;
use model::{Facility, FacilityKind, FloodZone};

use crate::symbology::{Paint, marker_size_px, status_paint, zone_paint};

/// Which parts of the overlay the operator has toggled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayFilter {
    pub show_flood_zones: bool,
    pub visible_kinds: BTreeSet<FacilityKind>,
}

impl Default for OverlayFilter {
    fn default() -> Self {
        Self {
            show_flood_zones: true,
            visible_kinds: FacilityKind::ALL.into_iter().collect(),
        }
    }
}

impl OverlayFilter {
    pub fn toggle_kind(&mut self, kind: FacilityKind) {
        if !self.visible_kinds.remove(&kind) {
            self.visible_kinds.insert(kind);
        }
    }

    fn shows(&self, facility: &Facility) -> bool {
        match facility.kind() {
            Some(kind) => self.visible_kinds.contains(&kind),
            // Unrecognized categories have no checkbox; keep them visible.
            None => true,
        }
    }
}

/// One renderable facility marker.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityMarker {
    pub position: GeoPoint,
    pub paint: Paint,
    pub size_px: u32,
    pub title: String,
    pub popup_lines: Vec<String>,
}

/// One renderable flood-zone polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneShape {
    pub ring: Vec<GeoPoint>,
    pub fill: Paint,
    pub title: String,
    pub water_level_m: f64,
}

/// Popup body for a facility, as plain lines.
pub fn popup_lines(facility: &Facility) -> Vec<String> {
    let not_available = "N/A".to_string();
    vec![
        format!("Type: {}", facility.kind_label()),
        format!("Status: {}", facility.status_bucket().label()),
        format!("Service Radius: {}m", service_radius_m(facility.kind())),
        format!(
            "Capacity: {}",
            facility.capacity.as_ref().unwrap_or(&not_available)
        ),
        format!(
            "Contact: {}",
            facility.contact.as_ref().unwrap_or(&not_available)
        ),
    ]
}

/// Snapshot of markers for the current facility list and filter state.
pub fn extract_markers(facilities: &[Facility], filter: &OverlayFilter) -> Vec<FacilityMarker> {
    facilities
        .iter()
        .filter(|f| filter.shows(f))
        .map(|facility| {
            let bucket = facility.status_bucket();
            FacilityMarker {
                position: facility.position,
                paint: status_paint(bucket),
                size_px: marker_size_px(bucket),
                title: facility.name.clone(),
                popup_lines: popup_lines(facility),
            }
        })
        .collect()
}

/// Snapshot of zone polygons, empty when the layer is toggled off.
pub fn extract_zones(zones: &[FloodZone], filter: &OverlayFilter) -> Vec<ZoneShape> {
    if !filter.show_flood_zones {
        return Vec::new();
    }
    zones
        .iter()
        .map(|zone| ZoneShape {
            ring: zone.ring.clone(),
            fill: zone_paint(zone.risk_level),
            title: zone.zone_name.clone(),
            water_level_m: zone.water_level_m,
        })
        .collect()
}
