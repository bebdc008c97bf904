use model::FacilityKind;

/// Radius applied to facilities whose category the feed does not recognize.
pub const DEFAULT_SERVICE_RADIUS_M: u32 = 2000;

/// Nominal coverage radius for a facility category, in meters.
///
/// Total: every category, including an unrecognized one (`None`), maps to a
/// positive radius.
pub fn service_radius_m(kind: Option<FacilityKind>) -> u32 {
    match kind {
        Some(FacilityKind::Hospital) => 3000,
        Some(FacilityKind::Shelter) => 2000,
        Some(FacilityKind::SupplyCenter) => 1500,
        Some(FacilityKind::CommandCenter) => 5000,
        None => DEFAULT_SERVICE_RADIUS_M,
    }
}
