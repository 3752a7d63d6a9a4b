//! Best-effort geolocation acquisition.
//!
//! One logical request: try a fresh fix within a bounded wait, fall back
//! to the platform's last-known fix, otherwise fail. The acquirer never
//! retries on its own; callers decide whether to re-prompt or retry.

use crate::errors::{AppError, AppResult};
use crate::models::location::LocationFix;
use crate::store::LocalRecordStore;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::time::Duration;

/// Store key under which the most recent successful fix is cached.
pub const LAST_FIX_KEY: &str = "location.last_fix";

/// An in-flight fresh-fix request.
///
/// The provider resolves it by sending at most one value on the channel.
/// Dropping the request cancels it: a late send on the provider side
/// simply fails and mutates nothing.
pub struct FixRequest {
    rx: Receiver<Option<LocationFix>>,
}

impl FixRequest {
    pub fn new() -> (Self, Sender<Option<LocationFix>>) {
        let (tx, rx) = channel();
        (Self { rx }, tx)
    }

    /// Wait up to `bound` for the request to resolve.
    /// Timeout and a hung-up provider both count as "no fix".
    pub fn wait(self, bound: Duration) -> Option<LocationFix> {
        match self.rx.recv_timeout(bound) {
            Ok(fix) => fix,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// The platform location-services collaborator.
pub trait LocationProvider {
    /// Whether the user has granted location access.
    fn permission_granted(&self) -> bool;

    /// Start a fresh high-accuracy fix request. Must not block.
    fn request_fresh_fix(&self) -> FixRequest;

    /// The most recent previously-known fix, if the platform kept one.
    fn last_known_fix(&self) -> Option<LocationFix>;
}

pub struct LocationAcquirer<P: LocationProvider> {
    provider: P,
    wait_bound: Duration,
}

impl<P: LocationProvider> LocationAcquirer<P> {
    pub fn new(provider: P, wait_bound: Duration) -> Self {
        Self {
            provider,
            wait_bound,
        }
    }

    /// Resolve to a fix or a definitive failure, never blocking beyond
    /// the configured bound.
    ///
    /// The fresh fix always wins over the cached one: the record is meant
    /// to capture location at the moment of the attendance event.
    pub fn acquire(&self) -> AppResult<LocationFix> {
        if !self.provider.permission_granted() {
            return Err(AppError::PermissionDenied);
        }

        if let Some(fix) = self.provider.request_fresh_fix().wait(self.wait_bound) {
            return Ok(fix);
        }

        self.provider
            .last_known_fix()
            .ok_or(AppError::LocationUnavailable)
    }
}

/// CLI-side provider: the fresh fix comes from the command line
/// (`--lat`/`--lon`), the cached fix from the record store, and the
/// permission from configuration.
pub struct ManualProvider {
    coords: Option<(f64, f64)>,
    enabled: bool,
    db_path: String,
}

impl ManualProvider {
    pub fn new(coords: Option<(f64, f64)>, enabled: bool, db_path: &str) -> Self {
        Self {
            coords,
            enabled,
            db_path: db_path.to_string(),
        }
    }
}

impl LocationProvider for ManualProvider {
    fn permission_granted(&self) -> bool {
        self.enabled
    }

    fn request_fresh_fix(&self) -> FixRequest {
        let (req, tx) = FixRequest::new();
        let fix = self
            .coords
            .map(|(lat, lon)| LocationFix::new(lat, lon, chrono::Local::now()));
        // Resolves immediately; the channel is buffered so this cannot block.
        let _ = tx.send(fix);
        req
    }

    fn last_known_fix(&self) -> Option<LocationFix> {
        let store = LocalRecordStore::open(&self.db_path).ok()?;
        store.get::<LocationFix>(LAST_FIX_KEY).ok().flatten()
    }
}

/// Persist `fix` as the last-known fix for later fallback use.
pub fn cache_last_fix(store: &mut LocalRecordStore, fix: &LocationFix) -> AppResult<()> {
    store.put(LAST_FIX_KEY, fix)
}
