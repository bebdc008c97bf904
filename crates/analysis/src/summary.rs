use std::collections::BTreeMap;

use foundation::geo::GeoPoint;
use model::{Facility, FacilityKind};

use crate::proximity::nearest_facilities;

/// Reference point and categories for one analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Fixed city-center reference for the nearest-facility lists.
    pub center: GeoPoint,
    pub kinds: Vec<FacilityKind>,
    pub limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            // Chennai city center.
            center: GeoPoint::new(13.0827, 80.2707),
            kinds: vec![FacilityKind::Hospital, FacilityKind::Shelter],
            limit: 3,
        }
    }
}

/// Owned, serializable-as-text result of one analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestEntry {
    pub name: String,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisSummary {
    pub total: usize,
    pub operational: usize,
    pub damaged: usize,
    pub nearest: BTreeMap<FacilityKind, Vec<NearestEntry>>,
}

impl AnalysisSummary {
    /// Renders the summary the way the dashboard panel shows it.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Total Facilities: {}", self.total),
            format!("Operational: {}", self.operational),
            format!("Damaged: {}", self.damaged),
        ];
        for (kind, entries) in &self.nearest {
            match entries.first() {
                Some(entry) => lines.push(format!(
                    "Nearest {}: {} ({:.2}km)",
                    kind.label(),
                    entry.name,
                    entry.distance_km
                )),
                None => lines.push(format!("Nearest {}: None", kind.label())),
            }
        }
        lines
    }
}

/// One pure, synchronous pass over a facility snapshot.
///
/// Holds no state across calls: the result reflects only the slice passed
/// in. "Operational" here means not explicitly damaged, matching the
/// availability rule used by the ranker.
pub fn analyze(facilities: &[Facility], config: &AnalysisConfig) -> AnalysisSummary {
    let mut nearest = BTreeMap::new();
    for &kind in &config.kinds {
        let entries = nearest_facilities(config.center, kind, facilities, config.limit)
            .into_iter()
            .map(|hit| NearestEntry {
                name: hit.facility.name.clone(),
                distance_km: hit.distance_km,
            })
            .collect();
        nearest.insert(kind, entries);
    }

    AnalysisSummary {
        total: facilities.len(),
        operational: facilities.iter().filter(|f| f.is_available()).count(),
        damaged: facilities.iter().filter(|f| !f.is_available()).count(),
        nearest,
    }
}
