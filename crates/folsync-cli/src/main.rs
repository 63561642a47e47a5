// Rust guideline compliant 2026-10-19

//! Folsync CLI Application
//!
//! Command-line interface for the Folsync reconciliation toolkit.

use clap::Parser;
use folsync_app::AppContext;
use folsync_cli::commands;
use folsync_cli::commands::search::MatchFilter;
use folsync_cli::commands::sync::SyncView;
use folsync_cli::{create_formatter, should_use_color, OutputFormatter};
use folsync_server::{init_tracing, LogFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "folsync",
    version,
    about = "Folsync: account identifier reconciliation toolkit",
    long_about = "Folsync normalizes usernames, handles and profile links, matches them against a reference dataset, and reconciles followers and following exports.",
    after_help = "Examples:\n  folsync search pasted.txt\n  folsync sync followers_1.json following.json --view both\n  folsync clean notes.txt\n  folsync normalize @Jane https://www.instagram.com/jane/\n  folsync serve --port 3000\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory containing folsync.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log library events to stderr at the configured level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Match pasted identifiers against the reference dataset
    Search {
        /// Input file, one identifier per line ('-' or omitted for stdin)
        input: Option<PathBuf>,

        /// Dataset JSON file overriding the configured one
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Which results to show
        #[arg(long, value_enum, default_value_t = MatchFilter::All)]
        filter: MatchFilter,
    },

    /// Reconcile a followers export with a following export
    Sync {
        /// Followers export (JSON or HTML)
        followers: PathBuf,

        /// Following export (JSON or HTML)
        following: PathBuf,

        /// Which lists to show
        #[arg(long, value_enum, default_value_t = SyncView::NotFollowingBack)]
        view: SyncView,
    },

    /// Extract instagram.com/<user> links from free text
    Clean {
        /// Input file ('-' or omitted for stdin)
        input: Option<PathBuf>,

        /// Keep existing link lines instead of extracting
        #[arg(long)]
        keep_links: bool,
    },

    /// Show the canonical forms of identifiers
    Normalize {
        /// Usernames, handles or profile URLs
        identifiers: Vec<String>,
    },

    /// Show reference dataset status
    Status,

    /// Run the HTTP search service
    Serve {
        /// Bind address
        #[arg(long)]
        bind: Option<String>,

        /// Port
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let context = AppContext::load(cli.config.as_deref());
    let configured = context
        .as_ref()
        .map(|context| context.config().output_format)
        .unwrap_or_default();
    let format = match cli.format {
        Some(OutputFormat::Json) => folsync_core::OutputFormat::Json,
        Some(OutputFormat::Table) => folsync_core::OutputFormat::Table,
        Some(OutputFormat::Plain) => folsync_core::OutputFormat::Plain,
        None if cli.json => folsync_core::OutputFormat::Json,
        None => configured,
    };
    let formatter = create_formatter(format, use_color);

    let result = context
        .map_err(anyhow::Error::from)
        .and_then(|context| run(cli, &context, formatter.as_ref()));
    if let Err(err) = result {
        eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
        std::process::exit(1);
    }
}

fn run(cli: Cli, context: &AppContext, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    let is_serve = matches!(cli.command, Some(Commands::Serve { .. }));
    let _guard = if cli.verbose && !is_serve {
        let config = context.config();
        init_tracing(&config.log_level, config.log_file.as_deref(), LogFormat::Text)?
    } else {
        None
    };

    match cli.command {
        Some(Commands::Search {
            input,
            dataset,
            filter,
        }) => {
            commands::search::execute(context, input, dataset, filter, formatter)?;
        }
        Some(Commands::Sync {
            followers,
            following,
            view,
        }) => {
            commands::sync::execute(&followers, &following, view, formatter)?;
        }
        Some(Commands::Clean { input, keep_links }) => {
            commands::clean::execute(input, keep_links, formatter)?;
        }
        Some(Commands::Normalize { identifiers }) => {
            commands::normalize::execute(identifiers, formatter)?;
        }
        Some(Commands::Status) => {
            commands::status::execute(context, formatter)?;
        }
        Some(Commands::Serve { bind, port }) => {
            commands::serve::execute(context, bind, port)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
