//! docdump - Schema-inferring CSV backup for document collections

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use docdump::backup::{run_backup, BackupSummary};
use docdump::config::BackupConfig;
use docdump::source::JsonDirSource;
use docdump::store::FsStore;

/// Schema-inferring CSV backup for semi-structured document collections
#[derive(Parser, Debug)]
#[command(name = "docdump")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backup configuration file (JSON)
    #[arg(short, long)]
    config: PathBuf,

    /// Directory holding the document snapshots to export
    #[arg(long)]
    data_dir: PathBuf,

    /// Directory the destination bucket is materialized under
    #[arg(long)]
    output_dir: PathBuf,

    /// Backup date used in object names (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run() {
        Ok(summary) => {
            if summary.has_failures() {
                ExitCode::from(1) // Some targets were skipped on error
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<BackupSummary> {
    let cli = Cli::parse();

    let config = BackupConfig::load(&cli.config)?;
    let source = JsonDirSource::new(cli.data_dir);
    let store = FsStore::new(cli.output_dir.join(&config.storage.bucket));
    let date = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let summary = run_backup(&config, &source, &store, date)?;
    print_summary(&summary)?;
    Ok(summary)
}

fn print_summary(summary: &BackupSummary) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    for exported in &summary.exported {
        write_status(&mut stdout, "exported", Color::Green)?;
        writeln!(
            stdout,
            " {} → {} ({} rows)",
            exported.path, exported.object, exported.rows
        )?;
    }
    for path in &summary.skipped {
        write_status(&mut stdout, " skipped", Color::Yellow)?;
        writeln!(stdout, " {} (no documents)", path)?;
    }
    for failed in &summary.failed {
        write_status(&mut stdout, "  failed", Color::Red)?;
        writeln!(stdout, " {}: {}", failed.path, failed.reason)?;
    }

    writeln!(
        stdout,
        "{} exported, {} skipped, {} failed",
        summary.exported.len(),
        summary.skipped.len(),
        summary.failed.len()
    )?;
    Ok(())
}

fn write_status(stdout: &mut StandardStream, label: &str, color: Color) -> Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(stdout, "{}", label)?;
    stdout.reset()?;
    Ok(())
}
