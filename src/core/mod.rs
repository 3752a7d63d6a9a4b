pub mod acquire;
pub mod dpr;
pub mod engine;
