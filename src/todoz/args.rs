use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todoz")]
#[command(about = "Small task list manager with CSV export", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo
    #[command(alias = "a")]
    Add {
        /// Title of the todo (words are joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// List todos
    #[command(alias = "ls")]
    List {
        /// Only show todos that are not done
        #[arg(long, conflicts_with = "completed")]
        active: bool,

        /// Only show completed todos
        #[arg(long)]
        completed: bool,
    },

    /// Flip completion of one or more todos
    #[command(alias = "toggle")]
    Done {
        /// Indexes or ids of the todos (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Change the title of a todo
    #[command(alias = "e")]
    Edit {
        /// Index or id of the todo
        selector: String,

        /// New title (words are joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// Delete one or more todos
    #[command(alias = "delete")]
    Rm {
        /// Indexes or ids of the todos (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Export all todos as a CSV file
    Export {
        /// Directory to write into (defaults to the configured export-dir)
        #[arg(short, long)]
        out: Option<std::path::PathBuf>,

        /// Do not prepend the UTF-8 byte order mark
        #[arg(long)]
        no_bom: bool,
    },

    /// Show totals
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (export-dir, bom)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
