use std::env;
use std::fs;

use analysis::{AnalysisConfig, analyze};
use foundation::geo::GeoPoint;
use model::ingest::{
    DEFAULT_REGION, normalize_facilities, normalize_zones, parse_facility_feed, parse_zone_feed,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "usage: floodwatch analyze <facilities.json> [--zones <zones.json>] [--limit N]\n\
     env: FLOODWATCH_CENTER_LAT / FLOODWATCH_CENTER_LNG override the reference point"
        .to_string()
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "analyze" => cmd_analyze(args),
        _ => Err(usage()),
    }
}

fn cmd_analyze(args: Vec<String>) -> Result<(), String> {
    if args.is_empty() {
        return Err(usage());
    }

    let facilities_path = args[0].clone();
    let mut zones_path: Option<String> = None;
    let mut config = AnalysisConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--zones" => {
                i += 1;
                zones_path = Some(
                    args.get(i)
                        .cloned()
                        .ok_or_else(|| "--zones requires a path".to_string())?,
                );
            }
            "--limit" => {
                i += 1;
                let raw = args
                    .get(i)
                    .ok_or_else(|| "--limit requires a number".to_string())?;
                config.limit = raw
                    .parse()
                    .map_err(|_| format!("--limit: not a number: {raw}"))?;
            }
            s => return Err(format!("unknown arg: {s}\n\n{}", usage())),
        }
        i += 1;
    }

    if let Some(center) = center_from_env() {
        config.center = center;
    }

    let json = fs::read_to_string(&facilities_path)
        .map_err(|e| format!("read {facilities_path}: {e}"))?;
    let raws = parse_facility_feed(&json).map_err(|e| e.to_string())?;
    let (facilities, stats) = normalize_facilities(raws, DEFAULT_REGION);
    info!(
        accepted = stats.accepted,
        skipped = stats.skipped,
        "facility feed normalized"
    );

    let summary = analyze(&facilities, &config);
    for line in summary.report_lines() {
        println!("{line}");
    }

    if let Some(path) = zones_path {
        let json = fs::read_to_string(&path).map_err(|e| format!("read {path}: {e}"))?;
        let raws = parse_zone_feed(&json).map_err(|e| e.to_string())?;
        let (zones, stats) = normalize_zones(raws);
        info!(
            accepted = stats.accepted,
            skipped = stats.skipped,
            "zone feed normalized"
        );

        println!();
        println!("Flood Zones:");
        for zone in &zones {
            println!(
                "  {} [{}] water {:.1}m",
                zone.zone_name,
                zone.risk_level.label(),
                zone.water_level_m
            );
        }
    }

    Ok(())
}

fn center_from_env() -> Option<GeoPoint> {
    let lat = env::var("FLOODWATCH_CENTER_LAT").ok()?;
    let lng = env::var("FLOODWATCH_CENTER_LNG").ok()?;
    match (lat.parse::<f64>(), lng.parse::<f64>()) {
        (Ok(lat), Ok(lng)) => {
            let center = GeoPoint::new(lat, lng);
            if center.is_finite() {
                Some(center)
            } else {
                warn!("ignoring non-finite center override");
                None
            }
        }
        _ => {
            warn!("ignoring unparsable center override ({lat}, {lng})");
            None
        }
    }
}
