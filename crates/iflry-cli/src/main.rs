use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use iflry_core::Locale;

mod commands;
mod utils;
use commands::{
    cmd_events, cmd_export, cmd_href, cmd_init, cmd_members, cmd_nav, cmd_paths, cmd_people,
    cmd_status, cmd_vacancies, cmd_validate,
};

/// iflry command-line interface.
#[derive(Parser, Debug)]
#[command(name = "iflry", author, version, about)]
struct Cli {
    /// Silence warnings about unresolvable content.
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize iflry.json with defaults.
    Init,
    /// Show configuration, document counts and dataset sizes.
    Status,
    /// Check content against the editing rules.
    Validate,
    /// Print the canonical path of a document.
    Href {
        /// Document type: post, page, event or programme.
        document_type: String,
        #[arg(short, long)]
        locale: Option<Locale>,
        #[arg(short, long)]
        slug: Option<String>,
    },
    /// Print the resolved header navigation.
    Nav {
        #[arg(short, long)]
        locale: Option<Locale>,
    },
    /// Print current role holders, grouped by role type.
    People {
        #[arg(short, long)]
        locale: Option<Locale>,
        /// Instant to evaluate roles at (RFC 3339), defaults to now.
        #[arg(long)]
        date: Option<DateTime<Utc>>,
        /// List roles that have ended instead.
        #[arg(long)]
        archive: bool,
    },
    /// Print the merged member list.
    Members {
        /// Group members by membership type.
        #[arg(short, long)]
        grouped: bool,
    },
    /// Print open vacancies.
    Vacancies {
        #[arg(short, long)]
        locale: Option<Locale>,
        /// Day to check deadlines against (YYYY-MM-DD), defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print upcoming (or past) events, one page at a time.
    Events {
        #[arg(short, long)]
        locale: Option<Locale>,
        #[arg(short, long)]
        page: Option<String>,
        #[arg(long)]
        archive: bool,
        /// Instant that separates upcoming from past (RFC 3339), defaults to now.
        #[arg(long)]
        date: Option<DateTime<Utc>>,
    },
    /// Print every path to generate ahead of time.
    Paths,
    /// Write one JSON bundle per locale.
    Export {
        /// Output directory (defaults to exportDir in iflry.json).
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    iflry_resolver::diagnostics::set_quiet(cli.quiet);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Init => cmd_init(),
        Commands::Status => cmd_status(),
        Commands::Validate => cmd_validate(),
        Commands::Href {
            document_type,
            locale,
            slug,
        } => cmd_href(document_type, locale, slug),
        Commands::Nav { locale } => cmd_nav(locale),
        Commands::People {
            locale,
            date,
            archive,
        } => cmd_people(locale, date, archive),
        Commands::Members { grouped } => cmd_members(grouped),
        Commands::Vacancies { locale, date } => cmd_vacancies(locale, date),
        Commands::Events {
            locale,
            page,
            archive,
            date,
        } => cmd_events(locale, page, archive, date),
        Commands::Paths => cmd_paths(),
        Commands::Export { out } => cmd_export(out).await,
    }
}
