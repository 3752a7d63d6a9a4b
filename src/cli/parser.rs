use clap::{Parser, Subcommand};

/// Command-line interface definition for sitelogger
/// CLI application to record field attendance and daily progress reports
#[derive(Parser)]
#[command(
    name = "sitelogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Offline field attendance: punch in/out with photo and GPS evidence, log daily progress reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Punch in: start of shift, with photo and location evidence
    In {
        /// Reference to the captured punch-in photo (path or handle)
        #[arg(long = "photo", required = true)]
        photo: String,

        /// Fresh latitude in decimal degrees
        #[arg(long = "lat", requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Fresh longitude in decimal degrees
        #[arg(long = "lon", requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Punch out: end of shift, with location evidence
    Out {
        /// Fresh latitude in decimal degrees
        #[arg(long = "lat", requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Fresh longitude in decimal degrees
        #[arg(long = "lon", requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Show today's attendance summary
    Status,

    /// Daily progress reports
    Dpr {
        #[command(subcommand)]
        action: DprCommands,
    },
}

#[derive(Subcommand)]
pub enum DprCommands {
    /// Append a progress-report entry
    Add {
        /// What was done (must not be empty)
        description: String,

        #[arg(long = "remarks", default_value = "")]
        remarks: String,

        /// Reference to an attached photo (path or handle)
        #[arg(long = "photo")]
        photo: Option<String>,
    },

    /// List all progress-report entries in append order
    List,
}
