use crate::config::Config;
use crate::core::acquire::{LocationAcquirer, ManualProvider};
use crate::core::engine::AttendanceEngine;
use crate::errors::AppResult;
use crate::store::LocalRecordStore;
use crate::utils::colors::{RESET, color_for_state, colorize_optional};
use crate::utils::date::SystemClock;
use crate::utils::formatting::bold;
use crate::utils::mins2readable;
use std::time::Duration;

/// Show today's attendance summary. Pure read: never mutates the record.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = LocalRecordStore::open(&cfg.database)?;
    let provider = ManualProvider::new(None, cfg.location_enabled, &cfg.database);
    let acquirer = LocationAcquirer::new(provider, Duration::from_secs(cfg.location_wait_secs));
    let engine = AttendanceEngine::new(store, acquirer, SystemClock);

    let summary = engine.summary()?;
    let state = summary.state.as_str();

    println!("{}", bold("Today's attendance"));
    println!(
        "  State:     {}{}{}",
        color_for_state(state),
        state,
        RESET
    );
    println!(
        "  Punch in:  {} {}",
        colorize_optional(summary.punch_in.as_deref().unwrap_or("--:--")),
        colorize_optional(summary.punch_in_coords.as_deref().unwrap_or("")),
    );
    println!(
        "  Punch out: {} {}",
        colorize_optional(summary.punch_out.as_deref().unwrap_or("--:--")),
        colorize_optional(summary.punch_out_coords.as_deref().unwrap_or("")),
    );

    if let Some(mins) = summary.worked_minutes {
        println!("  Worked:    {}", mins2readable(mins, false));
    }

    Ok(())
}
