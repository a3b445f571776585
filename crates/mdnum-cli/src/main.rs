//! mdnum CLI — rename numbered Markdown notes after their first line
//!
//! Commands: rename, export, completions

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdnum_core::policy::{Policy, RenameOptions};
use mdnum_export::{build_catalog, format_catalog, write_xlsx, OutputFormat};
use mdnum_vault::{config, rename_in, BatchOptions, Config, Mode};

#[derive(Parser)]
#[command(name = "mdnum")]
#[command(version)]
#[command(about = "Rename numbered Markdown notes after their first line")]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Rename numbered notes after their first non-blank line
    #[command(alias = "mv")]
    Rename(RenameArgs),
    /// Export titled notes with links to a spreadsheet
    Export(ExportArgs),
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(clap::Args)]
struct RenameArgs {
    /// Notes directory
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Numbering policy: keep, sequential, or append
    #[arg(short, long)]
    policy: Option<Policy>,

    /// First number handed out
    #[arg(long)]
    start: Option<u64>,

    /// Minimum digits in assigned numbers
    #[arg(long)]
    width: Option<usize>,

    /// Cap the title part of file names at this many characters
    #[arg(long)]
    max_title_chars: Option<usize>,

    /// Show what would be renamed without touching files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Skip notes that cannot be read instead of aborting
    #[arg(long)]
    skip_unreadable: bool,
}

#[derive(clap::Args)]
struct ExportArgs {
    /// Notes directory
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Base URL each file name is appended to
    #[arg(long)]
    base_url: Option<String>,

    /// Spreadsheet path (default: md_links.xlsx in the notes directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: xlsx, json, table, or markdown
    #[arg(short, long, default_value = "xlsx")]
    format: OutputFormat,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "mdnum=info",
        1 => "mdnum=debug",
        _ => "mdnum=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(dir: &Path) -> Result<Config> {
    config::load(dir).with_context(|| format!("loading config from {}", dir.display()))
}

fn run_rename(args: RenameArgs) -> Result<()> {
    if args.max_title_chars == Some(0) {
        anyhow::bail!("--max-title-chars must be at least 1");
    }
    let cfg = load_config(&args.dir)?;
    let defaults = cfg.rename_options();
    let options = BatchOptions {
        rename: RenameOptions {
            policy: args.policy.unwrap_or(defaults.policy),
            start: args.start.unwrap_or(defaults.start),
            width: args.width.unwrap_or(defaults.width),
            max_title_chars: args.max_title_chars.or(defaults.max_title_chars),
        },
        mode: if args.dry_run {
            Mode::DryRun
        } else {
            Mode::Apply
        },
        skip_unreadable: args.skip_unreadable || cfg.skip_unreadable.unwrap_or(false),
    };

    let verb = if args.dry_run {
        "Would rename"
    } else {
        "Renamed"
    };
    let report = rename_in(&args.dir, &options, |entry| {
        println!("{verb}: {} -> {}", entry.from, entry.to);
    })
    .with_context(|| format!("renaming notes in {}", args.dir.display()))?;

    info!(
        renamed = report.renamed.len(),
        unchanged = report.unchanged.len(),
        untouched = report.untouched.len(),
        unreadable = report.unreadable.len(),
        "batch finished"
    );
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    let cfg = load_config(&args.dir)?;
    let base_url = args
        .base_url
        .or(cfg.base_url)
        .unwrap_or_else(|| mdnum_export::DEFAULT_BASE_URL.to_string());

    let catalog = build_catalog(&args.dir, &base_url)
        .with_context(|| format!("scanning {}", args.dir.display()))?;

    if args.format != OutputFormat::Xlsx {
        println!("{}", format_catalog(&catalog, args.format).trim_end());
        return Ok(());
    }

    for row in &catalog.rows {
        println!("Added: {}", row.title);
    }
    let output = args.output.unwrap_or_else(|| {
        args.dir
            .join(cfg.output.as_deref().unwrap_or(mdnum_export::DEFAULT_OUTPUT))
    });
    write_xlsx(&catalog, &output)
        .with_context(|| format!("writing spreadsheet {}", output.display()))?;
    println!("Saved {} rows to {}", catalog.total, output.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Rename(args) => run_rename(args),
        Commands::Export(args) => run_export(args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "mdnum", &mut io::stdout());
            Ok(())
        }
    }
}
