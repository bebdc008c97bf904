use foundation::geo::GeoPoint;

/// Flood risk tiers reported by the zone feed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl RiskLevel {
    /// Anything the feed reports outside the known tiers is treated as low.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "extreme" => RiskLevel::Extreme,
            "high" => RiskLevel::High,
            "moderate" => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Extreme => "Extreme",
        }
    }
}

/// A canonical flood zone with its outer polygon ring.
#[derive(Debug, Clone, PartialEq)]
pub struct FloodZone {
    pub zone_name: String,
    pub risk_level: RiskLevel,
    pub water_level_m: f64,
    /// Outer ring, validated finite at ingestion.
    pub ring: Vec<GeoPoint>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::RiskLevel;

    #[test]
    fn parses_known_risk_levels() {
        assert_eq!(RiskLevel::parse("extreme"), RiskLevel::Extreme);
        assert_eq!(RiskLevel::parse("high"), RiskLevel::High);
        assert_eq!(RiskLevel::parse("moderate"), RiskLevel::Moderate);
        assert_eq!(RiskLevel::parse("low"), RiskLevel::Low);
    }

    #[test]
    fn unknown_risk_defaults_to_low() {
        assert_eq!(RiskLevel::parse("severe"), RiskLevel::Low);
        assert_eq!(RiskLevel::parse(""), RiskLevel::Low);
    }
}
