use chrono::{DateTime, Local};
use std::sync::Arc;

/// Time source for the attendance engine. Production code uses the
/// system clock; tests substitute a settable one to simulate day
/// rollovers without waiting for midnight.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}
