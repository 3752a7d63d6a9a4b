pub mod config;
pub mod db;
pub mod dpr;
pub mod init;
pub mod log;
pub mod punch;
pub mod status;
