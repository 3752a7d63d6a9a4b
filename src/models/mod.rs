pub mod attendance;
pub mod dpr;
pub mod location;
