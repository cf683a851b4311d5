use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{CommandFactory, Parser, Subcommand};
use sporelog_core::cli;
use sporelog_core::conf::load_config;
use sporelog_core::logging::{LogFormat, LogLevel, default_log_format, init_logging};
use sporelog_core::window::{TimeWindow, parse_window_bound};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "sporelog",
    version,
    about = "Sporelog: grow-enclosure log parser and frame correlator"
)]
struct Cli {
    /// Log verbosity (RUST_LOG overrides)
    #[arg(short, long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log output format (default: pretty on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Dump parsed and correlated data as JSON to stdout
    #[arg(short, long, global = true)]
    json: bool,

    /// Ignore events before this time (DD-MM-YYYY HH:MM:SS)
    #[arg(short, long, global = true, value_parser = parse_window_bound)]
    start: Option<NaiveDateTime>,

    /// Ignore events after this time (DD-MM-YYYY HH:MM:SS)
    #[arg(short, long, global = true, value_parser = parse_window_bound)]
    end: Option<NaiveDateTime>,

    /// Path to the config file (default: ./sporelog.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Air sensor log, overriding the config file
    #[arg(long, global = true)]
    air_log: Option<PathBuf>,

    /// Monitor log, overriding the config file
    #[arg(long, global = true)]
    monitor_log: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot air readings to a PNG
    Graph(cli::graph::GraphArgs),

    /// Write annotated copies of captured frames
    Frames(cli::frames::FramesArgs),
}

fn main() {
    let cli = Cli::parse();

    init_logging(
        cli.log_level,
        cli.log_format.unwrap_or_else(default_log_format),
    );

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.json && cli.command.is_none() {
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    let window = TimeWindow::checked(cli.start, cli.end)?;

    let mut cfg = load_config(cli.config.as_deref())?;
    if let Some(air) = cli.air_log {
        cfg.logs.air = air;
    }
    if let Some(monitor) = cli.monitor_log {
        cfg.logs.monitor = monitor;
    }

    debug!(
        air = %cfg.logs.air.display(),
        monitor = %cfg.logs.monitor.display(),
        ?window,
        "resolved settings"
    );

    // JSON export wins over any subcommand.
    if cli.json {
        return cli::json::run(&cfg, &window);
    }

    match cli.command {
        Some(Command::Graph(args)) => cli::graph::run(&cfg, &window, &args),
        Some(Command::Frames(args)) => cli::frames::run(&cfg, &window, &args).map(|_| ()),
        None => Ok(()),
    }
}
