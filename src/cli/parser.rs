use crate::export::ExportFormat;
use crate::models::{Category, Status};
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for presensi
#[derive(Parser)]
#[command(
    name = "presensi",
    version = env!("CARGO_PKG_VERSION"),
    about = "Staff attendance log, visitor book with signatures and exam-room rolls",
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
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        /// Only rows of this operation (e.g. attendance_add, guest_add, export)
        #[arg(long, requires = "print")]
        operation: Option<String>,
    },

    /// Staff attendance log
    #[command(visible_alias = "presensi")]
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },

    /// Visitor book
    #[command(visible_alias = "tamu")]
    Guest {
        #[command(subcommand)]
        action: GuestAction,
    },

    /// Print the seating roster of an exam room from a spreadsheet
    Seating {
        /// Participant spreadsheet (.xlsx / .xls)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Room to show (default: first room in the sheet)
        #[arg(long)]
        room: Option<String>,
    },

    /// Take attendance for imported exam participants
    Roll {
        /// Participant spreadsheet (.xlsx / .xls)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Room to show (default: first room; "all" shows everyone)
        #[arg(long)]
        room: Option<String>,

        /// Mark everyone in the shown room
        #[arg(long, value_enum)]
        all: Option<Mark>,

        /// Set one participant, e.g. --set 12345=hadir (repeatable)
        #[arg(long = "set", value_name = "NIS=VALUE")]
        set: Vec<String>,

        /// Write the shown roll to a file
        #[arg(long, value_name = "FILE")]
        export: Option<String>,

        /// Export format (default: from the file extension)
        #[arg(long, value_enum, requires = "export")]
        format: Option<ExportFormat>,

        /// Overwrite the export file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mark {
    Present,
    Absent,
}

#[derive(Subcommand)]
pub enum AttendanceAction {
    /// Add an attendance entry
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        #[arg(long, value_enum, default_value = "guru")]
        category: Category,

        #[arg(long, value_enum, default_value = "hadir")]
        status: Status,

        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,

        /// Optional remark
        #[arg(long, default_value = "")]
        remark: String,
    },

    /// List entries, newest first
    List {
        /// Name contains (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_enum)]
        category: Option<Category>,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Export every entry (filters do not apply)
    Export {
        /// Output file (default: presensi.csv in the export directory)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum GuestAction {
    /// Record a visit
    Add {
        /// Visitor name
        #[arg(long)]
        name: String,

        /// Organization
        #[arg(long, default_value = "")]
        org: String,

        /// Purpose of the visit
        #[arg(long, default_value = "")]
        purpose: String,

        /// Recorded drawing session (JSON: rect + pointer/touch/mouse events)
        #[arg(long, value_name = "SCRIPT")]
        signature: Option<String>,
    },

    /// List visits, newest first
    List {
        /// Name or organization contains (case-insensitive)
        #[arg(long)]
        query: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Export every visit (filters do not apply)
    Export {
        /// Output file (default: buku_tamu.csv in the export directory)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Save the signature of a visit as a PNG file
    Signature {
        /// Visit id
        #[arg(long)]
        id: String,

        /// Output PNG file
        #[arg(long, value_name = "FILE")]
        out: String,
    },
}
