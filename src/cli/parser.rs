use crate::export::{ExportData, ExportFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkHours
/// Hours tracking per company/project/ISO week, with an HTTP JSON API
#[derive(Parser)]
#[command(
    name = "rworkhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track worked hours per company/project/ISO week and serve them over a JSON API",
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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Run the HTTP JSON API
    Serve {
        /// Address to listen on (overrides config `bind`)
        #[arg(long = "bind", value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Log hours for a worker on a project in an ISO week
    Add {
        #[arg(long = "worker")]
        worker: String,

        #[arg(long = "company")]
        company: String,

        #[arg(long = "project")]
        project: String,

        /// ISO week (YYYY-Www) or any date inside it (YYYY-MM-DD)
        #[arg(long = "week")]
        week: String,

        #[arg(long = "hours")]
        hours: f64,
    },

    /// List logged hours
    List {
        #[arg(long, short, help = "Only entries filed under this month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long, short, help = "Only entries of this worker")]
        worker: Option<String>,

        #[arg(long = "all", help = "Show every entry instead of the most recent ones")]
        all: bool,
    },

    /// Delete one entry by id
    Del {
        #[arg(long = "id")]
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Hours per worker/company/project for a month
    Summary {
        #[arg(long, short, help = "Month (YYYY-MM), default current month")]
        month: Option<String>,
    },

    /// List projects, or delete one with all its hours
    Projects {
        #[arg(long, short, help = "Only projects assigned to this month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long = "delete", requires_all = ["company", "project"], help = "Delete the project and its entries")]
        delete: bool,

        #[arg(long = "company")]
        company: Option<String>,

        #[arg(long = "project")]
        project: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Assign a project to a month (and optionally to workers)
    Assign {
        #[arg(long = "company")]
        company: String,

        #[arg(long = "project")]
        project: String,

        #[arg(long = "month", help = "Month (YYYY-MM)")]
        month: String,

        #[arg(long = "worker", help = "Worker allowed on the project (repeatable)")]
        workers: Vec<String>,
    },

    /// List work division (event setup/dismantle) items
    Work,

    /// Convert between ISO weeks, dates and months
    Week {
        /// YYYY-Www, YYYY-MM-DD or YYYY-MM
        value: String,
    },

    /// Export entries or projects
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_enum, default_value = "entries")]
        data: ExportData,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Only this month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print a bcrypt hash for the `app_pass_hash` config key
    HashPassword {
        password: String,

        #[arg(long = "cost", default_value_t = bcrypt::DEFAULT_COST)]
        cost: u32,
    },
}
