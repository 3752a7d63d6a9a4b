use crate::models::location::LocationFix;
use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Attendance state for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchState {
    NotPunched,
    PunchedIn,
    PunchedOut,
}

impl PunchState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchState::NotPunched => "not punched",
            PunchState::PunchedIn => "punched in",
            PunchState::PunchedOut => "punched out",
        }
    }
}

/// The single day-scoped attendance record.
///
/// A record only comes into existence at punch-in, so `punch_in_time` is
/// mandatory: a punch-out without a punch-in is not constructible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub punch_in_time: DateTime<Local>,
    pub punch_in_location: Option<LocationFix>,
    pub punch_in_photo: Option<String>,
    pub punch_out_time: Option<DateTime<Local>>,
    pub punch_out_location: Option<LocationFix>,
}

impl AttendanceRecord {
    /// Open a new record for `date` at punch-in.
    pub fn punched_in(
        date: NaiveDate,
        time: DateTime<Local>,
        location: LocationFix,
        photo_ref: &str,
    ) -> Self {
        Self {
            date,
            punch_in_time: time,
            punch_in_location: Some(location),
            punch_in_photo: Some(photo_ref.to_string()),
            punch_out_time: None,
            punch_out_location: None,
        }
    }

    pub fn state(&self) -> PunchState {
        if self.punch_out_time.is_some() {
            PunchState::PunchedOut
        } else {
            PunchState::PunchedIn
        }
    }

    /// True when this record belongs to a previous calendar day
    /// (compared at year + day-of-year granularity, local time).
    pub fn is_stale(&self, today: NaiveDate) -> bool {
        (self.date.year(), self.date.ordinal()) != (today.year(), today.ordinal())
    }

    /// Net worked minutes, available once both ends are recorded.
    pub fn worked_minutes(&self) -> Option<i64> {
        self.punch_out_time
            .map(|out| (out - self.punch_in_time).num_minutes())
    }
}

/// Read-only snapshot of today's attendance, as shown by `status`.
#[derive(Debug, Clone, Serialize)]
pub struct PunchSummary {
    pub state: PunchState,
    pub punch_in: Option<String>,
    pub punch_in_coords: Option<String>,
    pub punch_out: Option<String>,
    pub punch_out_coords: Option<String>,
    pub worked_minutes: Option<i64>,
}

impl PunchSummary {
    pub fn empty() -> Self {
        Self {
            state: PunchState::NotPunched,
            punch_in: None,
            punch_in_coords: None,
            punch_out: None,
            punch_out_coords: None,
            worked_minutes: None,
        }
    }

    pub fn from_record(rec: &AttendanceRecord) -> Self {
        Self {
            state: rec.state(),
            punch_in: Some(rec.punch_in_time.format("%Y-%m-%d %H:%M").to_string()),
            punch_in_coords: rec.punch_in_location.map(|f| f.coords_str()),
            punch_out: rec
                .punch_out_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
            punch_out_coords: rec.punch_out_location.map(|f| f.coords_str()),
            worked_minutes: rec.worked_minutes(),
        }
    }
}
