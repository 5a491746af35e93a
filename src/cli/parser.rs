use crate::export::ExportFormat;
use crate::models::Participant;
use crate::models::participant::parse_participant_arg;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rActivity
/// CLI application to record activities and their participants
#[derive(Parser)]
#[command(
    name = "ractivity",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple activity register: record activities, owners and participants in a local store",
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

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new activity
    Add {
        #[arg(long, help = "Activity name")]
        name: String,

        #[arg(long, help = "Person responsible for the activity")]
        owner: String,

        /// Free text, stored as typed
        #[arg(long, help = "Activity date (free text)")]
        date: String,

        #[arg(long, help = "Activity description")]
        description: String,

        /// Repeat for each participant, e.g. --participant "Ana <ana@mail.com>"
        #[arg(
            long = "participant",
            short = 'p',
            value_name = "NAME <EMAIL>",
            value_parser = parse_participant_arg,
            help = "Participant as \"Name <email>\" (repeatable)"
        )]
        participants: Vec<Participant>,
    },

    /// List recorded activities
    List {
        #[arg(long = "details", short = 'd', help = "Show description and participants")]
        details: bool,

        #[arg(long, short = 's', help = "Filter by name or owner (case-insensitive)")]
        search: Option<String>,
    },

    /// Show every field of one activity
    Show {
        /// Activity id
        id: i64,
    },

    /// Edit an existing activity
    Edit {
        /// Activity id
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        owner: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Replaces the whole participant list
        #[arg(
            long = "participant",
            short = 'p',
            value_name = "NAME <EMAIL>",
            value_parser = parse_participant_arg,
            help = "Replace participants with this list (repeatable)"
        )]
        participants: Vec<Participant>,

        /// Pairs of position and value, e.g. --edit-participant 2 "Ana <ana@mail.com>"
        #[arg(
            long = "edit-participant",
            num_args = 2,
            value_names = ["N", "NAME <EMAIL>"],
            help = "Change the N-th participant in place, 1-based (repeatable)"
        )]
        edit_participants: Vec<String>,

        #[arg(
            long = "add-participant",
            value_name = "NAME <EMAIL>",
            value_parser = parse_participant_arg,
            help = "Append a participant (repeatable)"
        )]
        add_participants: Vec<Participant>,

        #[arg(
            long = "remove-participant",
            value_name = "N",
            help = "Remove the N-th participant, 1-based (repeatable)"
        )]
        remove_participants: Vec<usize>,
    },

    /// Delete an activity by id
    Del {
        /// Activity id
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup as .zip")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },

    /// Export activities
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },

    /// Import activities from a JSON file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
