use model::{FacilityKind, RiskLevel, StatusBucket};

/// A fill or marker color: 8-bit channels plus a separate opacity, matching
/// what the map SDK consumes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl Paint {
    pub const fn opaque(rgb: [u8; 3]) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    pub const fn with_alpha(rgb: [u8; 3], alpha: f32) -> Self {
        Self { rgb, alpha }
    }
}

/// Marker color for a facility's status bucket.
pub fn status_paint(bucket: StatusBucket) -> Paint {
    let rgb = match bucket {
        StatusBucket::Operational => [0, 150, 0],
        StatusBucket::Limited => [255, 140, 0],
        StatusBucket::Damaged => [220, 20, 20],
        StatusBucket::Unknown => [128, 128, 128],
    };
    Paint::opaque(rgb)
}

/// Damaged facilities get a visibly smaller marker.
pub fn marker_size_px(bucket: StatusBucket) -> u32 {
    match bucket {
        StatusBucket::Damaged => 8,
        _ => 12,
    }
}

fn kind_rgb(kind: Option<FacilityKind>) -> [u8; 3] {
    match kind {
        Some(FacilityKind::Hospital) => [255, 0, 0],
        Some(FacilityKind::Shelter) => [0, 255, 0],
        Some(FacilityKind::SupplyCenter) => [0, 0, 255],
        Some(FacilityKind::CommandCenter) => [255, 165, 0],
        None => [128, 128, 128],
    }
}

/// Category color for markers and service-area outlines.
pub fn kind_paint(kind: Option<FacilityKind>) -> Paint {
    Paint::opaque(kind_rgb(kind))
}

/// Translucent category fill for service-area buffers.
pub fn buffer_paint(kind: Option<FacilityKind>) -> Paint {
    Paint::with_alpha(kind_rgb(kind), 0.1)
}

/// Fill color for a flood zone polygon.
pub fn zone_paint(risk: RiskLevel) -> Paint {
    match risk {
        RiskLevel::Extreme => Paint::with_alpha([227, 25, 55], 0.5),
        RiskLevel::High => Paint::with_alpha([255, 193, 7], 0.5),
        RiskLevel::Moderate | RiskLevel::Low => Paint::with_alpha([0, 51, 102], 0.3),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub paint: Paint,
}

/// Legend rows for the zone-risk swatches.
pub fn zone_legend() -> Vec<LegendEntry> {
    vec![
        LegendEntry { label: "Extreme Risk", paint: zone_paint(RiskLevel::Extreme) },
        LegendEntry { label: "High Risk", paint: zone_paint(RiskLevel::High) },
        LegendEntry { label: "Moderate/Low Risk", paint: zone_paint(RiskLevel::Moderate) },
    ]
}

/// Legend rows for the facility-status swatches.
pub fn status_legend() -> Vec<LegendEntry> {
    [
        StatusBucket::Operational,
        StatusBucket::Limited,
        StatusBucket::Damaged,
        StatusBucket::Unknown,
    ]
    .into_iter()
    .map(|bucket| LegendEntry {
        label: bucket.label(),
        paint: status_paint(bucket),
    })
    .collect()
}
