use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use mir_motion::{MotionDocument, MotionError, PreviewSnapshot};

#[derive(Parser, Debug)]
#[command(name = "mir-motion", version)]
struct Cli {
    /// Log resolution details to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve every timeline at a global time.
    Snapshot(SnapshotArgs),
    /// Resolve one timeline at a local cursor.
    Preview(PreviewArgs),
    /// Resolve every timeline over a time range, one JSON line per sample.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct SnapshotArgs {
    /// Input motion document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Global time in milliseconds.
    #[arg(long)]
    at: f64,

    /// Print the full snapshot as JSON instead of CSS text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input motion document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Timeline id.
    #[arg(long)]
    timeline: String,

    /// Local cursor in milliseconds.
    #[arg(long)]
    cursor: f64,

    /// Print the full snapshot as JSON instead of CSS text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input motion document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First sample time in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last sample time (inclusive); defaults to the latest timeline end.
    #[arg(long)]
    to: Option<f64>,

    /// Distance between samples in milliseconds.
    #[arg(long, default_value_t = 100.0)]
    step: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Snapshot(args) => cmd_snapshot(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_doc(path: &Path) -> anyhow::Result<MotionDocument> {
    MotionDocument::from_path(path)
        .with_context(|| format!("load motion document '{}'", path.display()))
}

fn print_snapshot(snap: &PreviewSnapshot<'_>, json: bool) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, snap).context("write snapshot JSON")?;
        writeln!(out)?;
    } else if !snap.css_text.is_empty() {
        writeln!(out, "{}", snap.css_text)?;
    }
    Ok(())
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    let doc = read_doc(&args.in_path)?;
    let snap = mir_motion::build_snapshot(&doc.timelines, args.at.max(0.0), &doc.svg_filters);
    print_snapshot(&snap, args.json)
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let doc = read_doc(&args.in_path)?;
    let timeline = doc.timeline(&args.timeline)?;
    let snap = mir_motion::build_preview_snapshot(timeline, args.cursor, &doc.svg_filters);
    print_snapshot(&snap, args.json)
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if !(args.step.is_finite() && args.step > 0.0) {
        return Err(MotionError::validation(format!("--step must be > 0, got {}", args.step)).into());
    }
    let doc = read_doc(&args.in_path)?;
    let from = args.from.max(0.0);
    let to = args
        .to
        .or_else(|| doc.end_ms())
        .unwrap_or(from + 1000.0);
    if !to.is_finite() {
        return Err(MotionError::validation(format!("--to must be finite, got {to}")).into());
    }
    tracing::debug!(from, to, step = args.step, "sweeping");

    let mut out = std::io::stdout().lock();
    let mut i = 0u64;
    loop {
        let at_ms = from + args.step * i as f64;
        if at_ms > to {
            break;
        }
        let snap = mir_motion::build_snapshot(&doc.timelines, at_ms, &doc.svg_filters);
        let line = serde_json::json!({ "atMs": at_ms, "cssText": snap.css_text });
        serde_json::to_writer(&mut out, &line).context("write sweep line")?;
        writeln!(out)?;
        i += 1;
    }
    Ok(())
}
