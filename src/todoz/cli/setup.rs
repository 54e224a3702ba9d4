use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "todoz", bin_name = "todoz", version)]
#[command(about = "A small JSON-backed todo list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Todo document to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo to the list
    Add {
        /// Todo content
        #[arg(long, default_value = "")]
        content: String,
    },

    /// List todos
    List {
        /// Only show `completed` or `incompleted` todos
        #[arg(long, value_name = "FILTER")]
        completed: Option<String>,
    },

    /// Update a todo's content or completion
    Update {
        /// Id of the todo to update
        #[arg(long, required = true, allow_hyphen_values = true)]
        id: String,

        /// New content
        #[arg(long)]
        content: Option<String>,

        /// Completion of the todo
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        completed: Option<bool>,
    },

    /// Delete a single todo
    Delete {
        /// Id of the todo to delete
        #[arg(long, required = true, allow_hyphen_values = true)]
        id: String,
    },

    /// Delete the whole list, or only its completed todos
    #[command(name = "deleteAll")]
    DeleteAll {
        /// Delete completed todos only
        #[arg(long = "deleteCompleted", num_args = 0..=1, default_missing_value = "true")]
        delete_completed: Option<bool>,
    },
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v` when set.
pub fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();
}
