use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for barshift
/// Staff shift tracking and tiered access control over SQLite
#[derive(Parser)]
#[command(
    name = "barshift",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track staff shifts and manage venue roles, backed by SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Acting identity (verified email). Falls back to $BARSHIFT_USER
    #[arg(global = true, long = "user", value_name = "EMAIL")]
    pub user: Option<String>,

    /// Run in test mode (no config file read/update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for problems")]
        check: bool,
    },

    /// Resolve and print the acting identity's permission tier
    Whoami,

    /// Manage the staff roster
    Staff {
        #[command(subcommand)]
        action: StaffCmd,
    },

    /// Manage custom roles (owner only)
    Role {
        #[command(subcommand)]
        action: RoleCmd,
    },

    /// Clock your own shift
    Clock {
        #[command(subcommand)]
        action: ClockCmd,
    },

    /// List finished shifts (manager and above)
    Logs {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, value_name = "EMAIL", help = "Only shifts of this staff member")]
        staff: Option<String>,
    },

    /// Export the shift history (manager and above)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Customer ratings
    Rate {
        #[command(subcommand)]
        action: RateCmd,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum StaffCmd {
    /// Add a staff member (manager and above)
    Add {
        #[arg(long)]
        email: String,

        #[arg(long)]
        name: String,

        #[arg(long, help = "Role name: Dueño, Gerente, a custom role, or free text")]
        role: Option<String>,
    },

    /// Edit a staff member (manager and above)
    Edit {
        email: String,

        #[arg(long = "email", value_name = "NEW_EMAIL", help = "Rebind to a new email")]
        new_email: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        role: Option<String>,
    },

    /// Remove a staff member; their shift history is kept
    Del { email: String },

    /// Show the roster
    List,

    /// Live roster view, re-rendered on every remote change
    Watch {
        #[arg(long, default_value_t = 2, help = "Poll interval in seconds")]
        interval: u64,
    },
}

#[derive(Subcommand)]
pub enum RoleCmd {
    /// Create a custom role (owner only)
    Add {
        name: String,

        #[arg(long, help = "Access level: staff, gerente or dueno")]
        level: String,
    },

    /// Delete a custom role (owner only)
    Del { name: String },

    /// List custom roles
    List,
}

#[derive(Subcommand)]
pub enum ClockCmd {
    /// Start your shift
    In {
        #[arg(long, value_name = "EMAIL", help = "Target staff member (defaults to yourself)")]
        staff: Option<String>,
    },

    /// Pause your shift
    Pause {
        #[arg(long, value_name = "EMAIL")]
        staff: Option<String>,
    },

    /// Resume your paused shift
    Resume {
        #[arg(long, value_name = "EMAIL")]
        staff: Option<String>,
    },

    /// Finish your shift and record the work log
    Out {
        #[arg(long, value_name = "EMAIL")]
        staff: Option<String>,
    },

    /// Show the current session state
    Status {
        #[arg(long, value_name = "EMAIL")]
        staff: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum RateCmd {
    /// Submit a score (1-5) for a staff member
    Add { email: String, score: u8 },

    /// Per-staff rating averages
    Stats,
}
