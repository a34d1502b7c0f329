//! Command-line interface for the arch-docs generator.
//!
//! Running the binary without a subcommand builds the site; `catalog` loads
//! and validates the catalog and prints it as JSON without writing anything.

use std::{
    io,
    path::{Path, PathBuf},
    process,
};

use arch_docs::{
    BuildSummary, Catalog, DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR, DEFAULT_PASSTHROUGH_FILES, Error,
    INDEX_FILE, SITEMAP_FILE, SiteOptions, build_site, load_catalog,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Command line interface for rendering the architecture-docs portal.
#[derive(Debug, Parser,)]
#[command(name = "arch-docs", version, about = "Render the repository catalog into a static site")]
struct Cli
{
    #[command(subcommand)]
    command: Option<Command,>,

    /// Build options used when no subcommand is given.
    #[command(flatten)]
    build: BuildArgs,

    /// Enable debug logging on stderr.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Render index.html and sitemap.xml into the output directory.
    Build(BuildArgs,),
    /// Validate the catalog and print it as JSON.
    Catalog(CatalogArgs,),
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `build` subcommand.
struct BuildArgs
{
    /// Path to the YAML catalog.
    #[arg(long = "config", value_name = "PATH", env = "ARCH_DOCS_CONFIG", default_value = "repos.yaml")]
    config: PathBuf,

    /// Directory receiving the generated site.
    #[arg(long = "output", value_name = "DIR", env = "ARCH_DOCS_OUTPUT", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Host prefix for sitemap entries.
    #[arg(long = "base-url", value_name = "URL", env = "ARCH_DOCS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Optional file copied verbatim into the output directory; repeatable.
    #[arg(
        long = "passthrough",
        value_name = "PATH",
        default_values = DEFAULT_PASSTHROUGH_FILES
    )]
    passthrough: Vec<PathBuf,>,
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `catalog` subcommand.
struct CatalogArgs
{
    /// Path to the YAML catalog.
    #[arg(long = "config", value_name = "PATH", env = "ARCH_DOCS_CONFIG", default_value = "repos.yaml")]
    config: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    let cli = Cli::parse();
    init_tracing(cli.verbose,);

    if let Err(error,) = run(cli,) {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Logs go to stderr so stdout only carries the summary or JSON output.
fn init_tracing(verbose: bool,)
{
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV,).ok().as_deref(), verbose,);
    let _ = tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).try_init();
}

/// `RUST_LOG` wins when set and valid; otherwise `--verbose` picks the level.
fn log_filter(directives: Option<&str,>, verbose: bool,) -> EnvFilter
{
    let level = if verbose { "debug" } else { "warn" };
    directives
        .filter(|raw| !raw.trim().is_empty(),)
        .and_then(|raw| EnvFilter::try_new(raw,).ok(),)
        .unwrap_or_else(|| EnvFilter::new(level,),)
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors from catalog loading, rendering and writing.
fn run(cli: Cli,) -> Result<(), Error,>
{
    match cli.command {
        Some(Command::Build(args,),) => run_build(&args,),
        Some(Command::Catalog(args,),) => run_catalog(&args,),
        None => run_build(&cli.build,),
    }
}

fn run_build(args: &BuildArgs,) -> Result<(), Error,>
{
    let catalog = load_catalog(&args.config,)?;
    let options = SiteOptions {
        output_dir:  args.output.clone(),
        base_url:    args.base_url.clone(),
        passthrough: args.passthrough.clone(),
    };
    let summary = build_site(&catalog, &options,)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_summary(&mut handle, &summary,).map_err(|source| {
        arch_docs::render_write_error(Path::new("<stdout>",), source,)
    },)
}

fn write_summary<W: io::Write,>(writer: &mut W, summary: &BuildSummary,) -> io::Result<(),>
{
    writeln!(
        writer,
        "Generated {INDEX_FILE} and {SITEMAP_FILE} ({} repos)",
        summary.repository_count
    )
}

fn run_catalog(args: &CatalogArgs,) -> Result<(), Error,>
{
    let catalog = load_catalog(&args.config,)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_catalog(&mut handle, &catalog, args.pretty,)
}

fn write_catalog<W: io::Write,>(writer: &mut W, catalog: &Catalog, pretty: bool,) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, catalog,)?;
    } else {
        serde_json::to_writer(writer, catalog,)?;
    }

    Ok((),)
}
