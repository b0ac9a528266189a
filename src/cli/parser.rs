use crate::export::ExportFormat;
use crate::models::Theme;
use clap::{Parser, Subcommand};

/// Command-line interface definition for craftlog
#[derive(Parser)]
#[command(
    name = "craftlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal stopwatch that logs timed sessions into a CSV history",
    long_about = None
)]
pub struct Cli {
    /// Override history file path (useful for tests or a second history)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Colour theme for this run only (not saved)
    #[arg(global = true, long = "theme", value_enum)]
    pub theme: Option<Theme>,

    /// Show debug logging on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the history file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Open the stopwatch screen and record sessions
    Start {
        /// Note attached to every session recorded from this screen
        #[arg(long)]
        note: Option<String>,
    },

    /// Add a session by hand
    Add {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Time (HH:MM:SS or HH:MM)
        time: String,
        /// Duration minutes
        minute: u32,
        /// Duration seconds (0-59)
        second: u32,
        /// Optional note
        #[arg(long)]
        note: Option<String>,
    },

    /// Replace fields of a recorded session (number as shown by `list`)
    Edit {
        /// Session number (1 = newest)
        number: usize,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New time (HH:MM:SS or HH:MM)")]
        time: Option<String>,

        #[arg(long = "min", help = "New duration minutes")]
        minute: Option<u32>,

        #[arg(long = "sec", help = "New duration seconds (0-59)")]
        second: Option<u32>,

        #[arg(long, help = "New note (an empty string clears it)")]
        note: Option<String>,
    },

    /// List recorded sessions, newest first
    List {
        /// Show only the first N sessions
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Delete one session, or all of them
    Del {
        /// Session number (1 = newest)
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        number: Option<usize>,

        /// Delete every session
        #[arg(long)]
        all: bool,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show count, average duration, and this week's / month's sessions
    Stats {
        /// Reference date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },

    /// Export the history to a file
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long = "to", value_name = "FILE")]
        to: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Append the sessions of a CSV file to the history
    Import {
        /// CSV file with header `date_time,minute,second,note`
        #[arg(long = "from", value_name = "FILE")]
        from: String,
    },

    /// Show or set the colour theme (system, light, dark)
    Theme {
        /// New theme; omit to print the current one
        #[arg(value_enum)]
        mode: Option<Theme>,
    },
}
