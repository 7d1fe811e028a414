use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use procrows::{MAX_LINE_LENGTH, ProcFsLoader, ProcRows, ScanOptions, ScanStatistics};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod tsv;

use tsv::TsvSink;

#[derive(Parser, Debug)]
#[command(name = "procrows")]
#[command(about = "Print a kernel virtual file as numbered rows", long_about = None)]
pub struct Cli {
    /// File to read; must live under --root
    pub path: PathBuf,

    /// Directory every readable file must live under
    #[arg(long, default_value = ProcFsLoader::DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Refuse lines that reach this many bytes, terminator included
    #[arg(long, default_value_t = MAX_LINE_LENGTH)]
    pub max_line_length: usize,

    /// Print scan statistics instead of rows
    #[arg(long)]
    pub stats: bool,

    /// Omit the `lineno<TAB>data` header row
    #[arg(long)]
    pub no_header: bool,
}

fn init_logging() {
    // RUST_LOG=procrows=debug procrows /proc/meminfo
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn write_statistics(out: &mut impl Write, statistics: &ScanStatistics) -> io::Result<()> {
    writeln!(out, "total_chars             = {}", statistics.total_chars)?;
    writeln!(out, "line_count              = {}", statistics.line_count)?;
    writeln!(out, "max_line_length         = {}", statistics.max_line_length)?;
    match statistics.first_terminator_offset {
        Some(offset) => writeln!(out, "first_terminator_offset = {offset}"),
        None => writeln!(out, "first_terminator_offset = none"),
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let procrows = ProcRows::with_loader(
        ProcFsLoader::with_root(&cli.root),
        ScanOptions {
            max_line_length: cli.max_line_length,
            ..Default::default()
        },
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.stats {
        let statistics = procrows
            .statistics(&cli.path)
            .with_context(|| format!("cannot measure {}", cli.path.display()))?;
        write_statistics(&mut out, &statistics)?;
        return Ok(());
    }

    let mut sink = TsvSink::new(&mut out).with_header(!cli.no_header);
    procrows
        .read_rows(&cli.path, &mut sink)
        .with_context(|| format!("cannot read rows from {}", cli.path.display()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    tracing::debug!(?cli, "starting");
    run(&cli)
}
