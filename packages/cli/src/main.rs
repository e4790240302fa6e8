mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{focus, init, report, resolve, FocusArgs, InitArgs, ReportArgs, ResolveArgs};
use doclayout::LayoutConfig;

/// Doclayout CLI - resolve document layouts and map validation reports
#[derive(Parser, Debug)]
#[command(name = "doclayout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a doclayout.config.json in the current directory
    Init(InitArgs),

    /// Resolve the layout a document is rendered with
    Resolve(ResolveArgs),

    /// Map a validation report onto messages and bound widgets
    Report(ReportArgs),

    /// Show which element auto-focus would pick in a rendered tree
    Focus(FocusArgs),
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Resolve(args) => resolve(args, &LayoutConfig::load(&cwd)?),
        Command::Report(args) => report(args, &LayoutConfig::load(&cwd)?),
        Command::Focus(args) => focus(args),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
