use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for chargelog
/// CLI timesheet: log time against project/task charge codes in SQLite
#[derive(Parser)]
#[command(
    name = "chargelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple CLI timesheet: log time against charge codes and review weekly calendars and totals",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as a different user profile
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Manage charge codes
    Code {
        #[command(subcommand)]
        action: CodeCommands,
    },

    /// Add a time entry
    Add {
        /// Entry date (YYYY-MM-DD)
        date: String,

        /// Charge code id (see `code list`)
        code: String,

        /// Start time (HH:MM, 24-hour)
        start: String,

        /// End time (HH:MM, 24-hour)
        end: String,

        /// What you worked on
        text: String,
    },

    /// Edit a time entry; omitted fields keep their stored values
    Edit {
        /// Entry id
        id: i64,

        #[arg(long = "date", help = "New entry date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "code", help = "New charge code id")]
        code: Option<String>,

        #[arg(long = "start", help = "New start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "New end time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "text", help = "New activity text")]
        text: Option<String>,
    },

    /// Delete a time entry by id
    Del {
        /// Entry id
        id: i64,
    },

    /// Show the weekly hours overview
    Week {
        #[arg(long = "date", help = "Anchor date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Show the weekly calendar
    Cal {
        #[arg(long = "date", help = "Anchor date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Export the weekly overview
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "date", help = "Anchor date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CodeCommands {
    /// Create a charge code
    Add {
        /// Project number
        project: String,

        /// Task number
        task: String,

        /// Free-text description
        description: String,

        #[arg(long, help = "Create the code deactivated")]
        inactive: bool,
    },

    /// List active charge codes
    List {
        #[arg(long, help = "Include deactivated codes")]
        all: bool,
    },

    /// Activate or deactivate a charge code
    Toggle {
        /// Charge code id
        id: i64,

        #[arg(long, help = "Deactivate instead of activate")]
        off: bool,
    },
}
