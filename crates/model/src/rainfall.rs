use serde::Deserialize;

/// Latest rainfall observation from the weather feed.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct RainfallReading {
    #[serde(alias = "rain_last_hour")]
    pub rain_last_hour_mm: f64,
}

impl RainfallReading {
    pub fn new(rain_last_hour_mm: f64) -> Self {
        Self { rain_last_hour_mm }
    }
}

/// Forecast risk tier derived from hourly rainfall.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RainRisk {
    Low,
    Moderate,
    High,
    Extreme,
}

impl RainRisk {
    /// Threshold bands: >20 mm/h extreme, >10 high, >5 moderate, else low.
    pub fn for_rainfall(mm_per_hour: f64) -> Self {
        if mm_per_hour > 20.0 {
            RainRisk::Extreme
        } else if mm_per_hour > 10.0 {
            RainRisk::High
        } else if mm_per_hour > 5.0 {
            RainRisk::Moderate
        } else {
            RainRisk::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RainRisk::Low => "low",
            RainRisk::Moderate => "moderate",
            RainRisk::High => "high",
            RainRisk::Extreme => "extreme",
        }
    }

    /// Recommended operator action for this tier.
    pub fn action(&self) -> &'static str {
        match self {
            RainRisk::Low => "Normal monitoring",
            RainRisk::Moderate => "Monitor weather conditions closely",
            RainRisk::High => "Prepare evacuation plans and monitor conditions",
            RainRisk::Extreme => "Evacuate immediately from flood-prone areas",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RainRisk;

    #[test]
    fn thresholds_are_exclusive_at_band_edges() {
        assert_eq!(RainRisk::for_rainfall(0.0), RainRisk::Low);
        assert_eq!(RainRisk::for_rainfall(5.0), RainRisk::Low);
        assert_eq!(RainRisk::for_rainfall(5.1), RainRisk::Moderate);
        assert_eq!(RainRisk::for_rainfall(10.0), RainRisk::Moderate);
        assert_eq!(RainRisk::for_rainfall(10.1), RainRisk::High);
        assert_eq!(RainRisk::for_rainfall(20.0), RainRisk::High);
        assert_eq!(RainRisk::for_rainfall(20.1), RainRisk::Extreme);
    }

    #[test]
    fn negative_rainfall_reads_as_low() {
        assert_eq!(RainRisk::for_rainfall(-1.0), RainRisk::Low);
    }

    #[test]
    fn every_tier_has_an_action() {
        for risk in [
            RainRisk::Low,
            RainRisk::Moderate,
            RainRisk::High,
            RainRisk::Extreme,
        ] {
            assert!(!risk.action().is_empty());
        }
    }
}
