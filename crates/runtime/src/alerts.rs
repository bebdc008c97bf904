use model::{RainRisk, RainfallReading};

/// A derived flood warning, ready to emit on the bus.
#[derive(Debug, Clone, PartialEq)]
pub struct FloodWarning {
    pub severity: RainRisk,
    pub message: String,
    pub recommendation: &'static str,
}

/// Derives a warning from the latest rainfall reading.
///
/// Quiet below 10 mm/h; High up to 20 mm/h, Extreme beyond. Pure, so the
/// same reading always produces the same warning.
pub fn flood_warning(reading: &RainfallReading) -> Option<FloodWarning> {
    let mm = reading.rain_last_hour_mm;
    if mm <= 10.0 {
        return None;
    }

    let severity = RainRisk::for_rainfall(mm);
    Some(FloodWarning {
        severity,
        message: format!("Heavy rainfall detected: {mm}mm/h"),
        recommendation: if severity == RainRisk::Extreme {
            "Evacuate immediately"
        } else {
            "Prepare evacuation plans"
        },
    })
}
