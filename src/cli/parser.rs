use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hrcal
/// Leave calendar of the HR system in the terminal
#[derive(Parser)]
#[command(
    name = "hrcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Show approved leave requests on a Monday-first month calendar",
    long_about = None
)]
pub struct Cli {
    /// Read leaves from the backend SQLite database at this path
    #[arg(global = true, long = "db", conflicts_with = "leaves")]
    pub db: Option<String>,

    /// Read leaves from a JSON file saved from /api/leaves/
    #[arg(global = true, long = "leaves")]
    pub leaves: Option<String>,

    /// Reference date used as "today" (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Add missing fields to the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the leave calendar of a month
    Show {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(long, value_name = "N", default_value_t = 0, help = "Go back N months")]
        prev: u32,

        #[arg(long, value_name = "N", default_value_t = 0, help = "Go forward N months")]
        next: u32,

        #[arg(long, help = "Disable colors")]
        plain: bool,
    },

    /// List leave records
    Leaves {
        #[arg(long, help = "Filter by status (PENDING, APPROVED, REJECTED, CANCELLED)")]
        status: Option<String>,

        #[arg(long, short, value_name = "YYYY-MM", help = "Only leaves touching this month")]
        month: Option<String>,
    },

    /// Export the days of a month
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, value_name = "YYYY-MM", help = "Month to export (default: current)")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
