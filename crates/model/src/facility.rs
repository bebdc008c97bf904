use foundation::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// Facility categories tracked by the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityKind {
    Hospital,
    Shelter,
    SupplyCenter,
    CommandCenter,
}

impl FacilityKind {
    pub const ALL: [FacilityKind; 4] = [
        FacilityKind::Hospital,
        FacilityKind::Shelter,
        FacilityKind::SupplyCenter,
        FacilityKind::CommandCenter,
    ];

    /// Parses a raw feed category. Unrecognized strings are `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "hospital" => Some(FacilityKind::Hospital),
            "shelter" => Some(FacilityKind::Shelter),
            "supply_center" => Some(FacilityKind::SupplyCenter),
            "command_center" => Some(FacilityKind::CommandCenter),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FacilityKind::Hospital => "Hospital",
            FacilityKind::Shelter => "Shelter",
            FacilityKind::SupplyCenter => "Supply Center",
            FacilityKind::CommandCenter => "Command Center",
        }
    }
}

impl std::fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse severity bucket derived from a facility's raw status string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StatusBucket {
    Operational,
    Limited,
    Damaged,
    Unknown,
}

impl StatusBucket {
    /// Total over all strings: unrecognized or empty input falls back to
    /// `Unknown` rather than failing.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "operational" => StatusBucket::Operational,
            "damaged" => StatusBucket::Damaged,
            "low_capacity" | "low_stock" | "full" => StatusBucket::Limited,
            _ => StatusBucket::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBucket::Operational => "Operational",
            StatusBucket::Limited => "Limited",
            StatusBucket::Damaged => "Damaged",
            StatusBucket::Unknown => "Unknown",
        }
    }
}

/// A canonical facility record.
///
/// `position` is finite and region-checked by construction: records are only
/// built through the ingestion boundary, which drops anything malformed.
/// Downstream code never re-implements coordinate fallbacks.
///
/// The raw category and status strings are kept as reported; facilities with
/// unrecognized categories still participate in totals and get the default
/// service radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub id: String,
    pub name: String,
    /// Raw feed category, e.g. "hospital".
    pub kind_raw: String,
    /// Raw operational state, e.g. "operational".
    pub status: String,
    pub position: GeoPoint,
    pub capacity: Option<String>,
    pub contact: Option<String>,
    pub description: Option<String>,
}

impl Facility {
    pub fn kind(&self) -> Option<FacilityKind> {
        FacilityKind::parse(&self.kind_raw)
    }

    /// Display name of the category, falling back to the raw string.
    pub fn kind_label(&self) -> &str {
        match self.kind() {
            Some(kind) => kind.label(),
            None => &self.kind_raw,
        }
    }

    pub fn status_bucket(&self) -> StatusBucket {
        StatusBucket::classify(&self.status)
    }

    /// Anything not explicitly damaged counts as available for dispatch.
    pub fn is_available(&self) -> bool {
        self.status != "damaged"
    }
}

#[cfg(test)]
mod tests {
    use super::{Facility, FacilityKind, StatusBucket};
    use foundation::geo::GeoPoint;
    use pretty_assertions::assert_eq;

    fn facility(kind_raw: &str, status: &str) -> Facility {
        Facility {
            id: "1".to_string(),
            name: "Test".to_string(),
            kind_raw: kind_raw.to_string(),
            status: status.to_string(),
            position: GeoPoint::new(13.08, 80.27),
            capacity: None,
            contact: None,
            description: None,
        }
    }

    #[test]
    fn parses_known_kinds() {
        assert_eq!(FacilityKind::parse("hospital"), Some(FacilityKind::Hospital));
        assert_eq!(
            FacilityKind::parse("supply_center"),
            Some(FacilityKind::SupplyCenter)
        );
        assert_eq!(FacilityKind::parse("warehouse"), None);
        assert_eq!(FacilityKind::parse(""), None);
    }

    #[test]
    fn kind_label_falls_back_to_raw_string() {
        assert_eq!(facility("command_center", "operational").kind_label(), "Command Center");
        assert_eq!(facility("warehouse", "operational").kind_label(), "warehouse");
    }

    #[test]
    fn classifies_recognized_statuses() {
        assert_eq!(StatusBucket::classify("operational"), StatusBucket::Operational);
        assert_eq!(StatusBucket::classify("damaged"), StatusBucket::Damaged);
        assert_eq!(StatusBucket::classify("low_capacity"), StatusBucket::Limited);
        assert_eq!(StatusBucket::classify("low_stock"), StatusBucket::Limited);
        assert_eq!(StatusBucket::classify("full"), StatusBucket::Limited);
    }

    #[test]
    fn classify_is_total_over_strings() {
        assert_eq!(StatusBucket::classify(""), StatusBucket::Unknown);
        assert_eq!(StatusBucket::classify("OPERATIONAL"), StatusBucket::Unknown);
        assert_eq!(StatusBucket::classify("closed forever"), StatusBucket::Unknown);
    }

    #[test]
    fn only_damaged_is_unavailable() {
        assert!(facility("hospital", "operational").is_available());
        assert!(facility("hospital", "low_stock").is_available());
        assert!(facility("hospital", "").is_available());
        assert!(!facility("hospital", "damaged").is_available());
    }
}
