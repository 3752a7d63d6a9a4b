use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::acquire::{LocationAcquirer, ManualProvider, cache_last_fix};
use crate::core::engine::AttendanceEngine;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::PunchSummary;
use crate::models::location::LocationFix;
use crate::store::LocalRecordStore;
use crate::ui::messages::success;
use crate::utils::date::SystemClock;
use crate::utils::mins2readable;
use std::time::Duration;

/// Punch in / punch out.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::In { photo, lat, lon } => {
            let coords = parse_coords(*lat, *lon)?;
            let engine = build_engine(cfg, coords)?;

            let summary = engine.punch_in(photo)?;

            finish(cfg, coords, "punch_in", photo)?;
            success(format!(
                "Punched in at {} ({})",
                summary.punch_in.as_deref().unwrap_or("--"),
                summary.punch_in_coords.as_deref().unwrap_or("--"),
            ));
            Ok(())
        }

        Commands::Out { lat, lon } => {
            let coords = parse_coords(*lat, *lon)?;
            let engine = build_engine(cfg, coords)?;

            let summary = engine.punch_out()?;

            finish(cfg, coords, "punch_out", "")?;
            success(format!(
                "Punched out at {} ({})",
                summary.punch_out.as_deref().unwrap_or("--"),
                summary.punch_out_coords.as_deref().unwrap_or("--"),
            ));
            print_worked(&summary);
            Ok(())
        }

        _ => Ok(()),
    }
}

/// Wire the engine onto the configured database.
fn build_engine(
    cfg: &Config,
    coords: Option<(f64, f64)>,
) -> AppResult<AttendanceEngine<ManualProvider, SystemClock>> {
    let store = LocalRecordStore::open(&cfg.database)?;
    let provider = ManualProvider::new(coords, cfg.location_enabled, &cfg.database);
    let acquirer = LocationAcquirer::new(provider, Duration::from_secs(cfg.location_wait_secs));
    Ok(AttendanceEngine::new(store, acquirer, SystemClock))
}

fn parse_coords(lat: Option<f64>, lon: Option<f64>) -> AppResult<Option<(f64, f64)>> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(AppError::InvalidCoordinate(format!(
                    "latitude {} out of range [-90, 90]",
                    lat
                )));
            }
            if !(-180.0..=180.0).contains(&lon) {
                return Err(AppError::InvalidCoordinate(format!(
                    "longitude {} out of range [-180, 180]",
                    lon
                )));
            }
            Ok(Some((lat, lon)))
        }
        _ => Ok(None),
    }
}

/// Post-transition bookkeeping: cache the fresh fix for later fallback
/// use and write the audit row.
fn finish(
    cfg: &Config,
    coords: Option<(f64, f64)>,
    operation: &str,
    target: &str,
) -> AppResult<()> {
    let mut store = LocalRecordStore::open(&cfg.database)?;

    if let Some((lat, lon)) = coords {
        cache_last_fix(&mut store, &LocationFix::new(lat, lon, chrono::Local::now()))?;
    }

    if let Err(e) = ttlog(store.conn(), operation, target, "attendance transition") {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    Ok(())
}

fn print_worked(summary: &PunchSummary) {
    if let Some(mins) = summary.worked_minutes {
        println!("⏱️  Worked today: {}", mins2readable(mins, false));
    }
}
