mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{build, render, wrap, BuildArgs, RenderArgs, WrapArgs};
use tracing_subscriber::EnvFilter;

/// Polaris CLI - Render view components to static HTML
#[derive(Parser, Debug)]
#[command(name = "polaris")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log rendering decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single component spec
    Render(RenderArgs),

    /// Wrap the top-level children of an HTML fragment
    Wrap(WrapArgs),

    /// Render every component spec in the source directory
    Build(BuildArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Command::Render(args) => render(args, &cwd),
        Command::Wrap(args) => wrap(args, &cwd),
        Command::Build(args) => build(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
