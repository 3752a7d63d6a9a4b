//! The punch in/out state machine.
//!
//! One record per calendar day, persisted whole under a single key so a
//! transition is either fully recorded or not at all. A punch without a
//! location fix is refused outright: an attendance event with no location
//! evidence would not be auditable.

use crate::core::acquire::{LocationAcquirer, LocationProvider};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, PunchState, PunchSummary};
use crate::store::LocalRecordStore;
use crate::utils::date::Clock;
use chrono::NaiveDate;
use std::sync::Mutex;

/// Day-scoped store key. The record carries its own date; a date mismatch
/// at year + day-of-year granularity marks the record as stale.
pub const ATTENDANCE_KEY: &str = "attendance.today";

pub struct AttendanceEngine<P: LocationProvider, C: Clock> {
    inner: Mutex<EngineInner<P, C>>,
}

struct EngineInner<P: LocationProvider, C: Clock> {
    store: LocalRecordStore,
    acquirer: LocationAcquirer<P>,
    clock: C,
}

impl<P: LocationProvider, C: Clock> EngineInner<P, C> {
    /// Today's record, if any. A leftover record from a prior day is
    /// discarded when `prune` is set, and treated as absent either way.
    fn load_today(&mut self, today: NaiveDate, prune: bool) -> AppResult<Option<AttendanceRecord>> {
        let rec: Option<AttendanceRecord> = self.store.get(ATTENDANCE_KEY)?;

        match rec {
            Some(r) if r.is_stale(today) => {
                if prune {
                    self.store.remove(ATTENDANCE_KEY)?;
                }
                Ok(None)
            }
            other => Ok(other),
        }
    }
}

impl<P: LocationProvider, C: Clock> AttendanceEngine<P, C> {
    pub fn new(store: LocalRecordStore, acquirer: LocationAcquirer<P>, clock: C) -> Self {
        Self {
            inner: Mutex::new(EngineInner {
                store,
                acquirer,
                clock,
            }),
        }
    }

    /// Record the start of the shift.
    ///
    /// Legal only when not yet punched today. The location fix is acquired
    /// first; on `PermissionDenied` or `LocationUnavailable` nothing is
    /// written and the state is unchanged, so the caller can retry the
    /// same action after fixing the cause.
    pub fn punch_in(&self, photo_ref: &str) -> AppResult<PunchSummary> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());

        let now = inner.clock.now();
        let today = now.date_naive();

        if let Some(rec) = inner.load_today(today, true)? {
            return Err(AppError::InvalidTransition(format!(
                "punch-in is not allowed while {}",
                rec.state().as_str()
            )));
        }

        let fix = inner.acquirer.acquire()?;

        let rec = AttendanceRecord::punched_in(today, now, fix, photo_ref);
        // Whole record in one put: no partially-punched state survives a crash.
        inner.store.put(ATTENDANCE_KEY, &rec)?;

        Ok(PunchSummary::from_record(&rec))
    }

    /// Record the end of the shift. Legal only while punched in;
    /// punched-out is terminal for the day.
    pub fn punch_out(&self) -> AppResult<PunchSummary> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());

        let now = inner.clock.now();
        let today = now.date_naive();

        let mut rec = inner.load_today(today, true)?.ok_or_else(|| {
            AppError::InvalidTransition("punch-out requires a punch-in first".to_string())
        })?;

        if rec.punch_out_time.is_some() {
            return Err(AppError::InvalidTransition(
                "already punched out today".to_string(),
            ));
        }

        let fix = inner.acquirer.acquire()?;

        let out_time = inner.clock.now();
        if out_time < rec.punch_in_time {
            return Err(AppError::InvalidTransition(
                "punch-out time precedes punch-in time".to_string(),
            ));
        }

        rec.punch_out_time = Some(out_time);
        rec.punch_out_location = Some(fix);
        inner.store.put(ATTENDANCE_KEY, &rec)?;

        Ok(PunchSummary::from_record(&rec))
    }

    /// Pure read of today's state. A stale record reads as `NotPunched`
    /// but is left in place; the next punch operation prunes it.
    pub fn summary(&self) -> AppResult<PunchSummary> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());

        let today = inner.clock.now().date_naive();
        match inner.load_today(today, false)? {
            Some(rec) => Ok(PunchSummary::from_record(&rec)),
            None => Ok(PunchSummary::empty()),
        }
    }

    /// Current state, derived the same way `summary` derives it.
    pub fn state(&self) -> AppResult<PunchState> {
        Ok(self.summary()?.state)
    }
}
