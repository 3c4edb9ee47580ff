//! Export command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use places_export::config::{load_config, merge_cli_with_config, CliOverrides};
use places_export::{DirSink, ExportError, ReportPipeline, ReportView, RunSummary, SqlitePlaces};

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the places.sqlite file
    #[arg(value_name = "PLACES_FILE")]
    pub places_file: PathBuf,

    /// Name of prefix for output files [default: places]
    #[arg(short = 'p', long, value_name = "PREFIX", env = "PLACES_EXPORT_PREFIX")]
    pub output_prefix: Option<String>,

    /// Include an output file listing bookmarks to GitHub URLs
    #[arg(short = 'g', long)]
    pub do_github: bool,

    /// Directory for output files [default: output]
    #[arg(short = 'o', long, value_name = "DIR", env = "PLACES_EXPORT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to config file (places-export.toml or places-export.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Omit generation timestamps for reproducible diffs
    #[arg(long)]
    pub no_timestamp: bool,

    /// Also write a JSON manifest of the run
    #[arg(long)]
    pub report: bool,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let start_time = Instant::now();

    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let file_config = load_config(&cwd, args.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides {
            output_dir: args.output_dir,
            output_prefix: args.output_prefix,
            do_github: args.do_github,
            no_timestamp: args.no_timestamp,
            write_report: args.report,
        },
    );
    tracing::debug!(?config, "effective configuration");

    let db_path = args.places_file;
    let source = match SqlitePlaces::open(&db_path) {
        Ok(source) => source,
        Err(ExportError::NotFound { path }) => {
            eprintln!("ERROR: Cannot find {}", path.display());
            println!("Done (nothing written).");
            return Ok(());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to open {}", db_path.display()))
        }
    };
    println!("Reading {}", db_path.display());

    let views = ReportView::selected(config.do_github);
    let mut sink = DirSink::new(&config.output_dir).announce(true);
    let mut pipeline = ReportPipeline::new(source, &config);
    let summary = match pipeline.run(&views, &mut sink) {
        Ok(summary) => summary,
        Err(err) if err.is_structural() => {
            eprintln!("ERROR: Bookmark folder tree in {} is corrupt", db_path.display());
            println!("Done (with errors).");
            return Err(err).context("Bookmark folders could not be resolved");
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Export from {} failed", db_path.display()))
        }
    };
    drop(pipeline);

    print_summary(&summary, &sink, start_time.elapsed().as_secs_f64());
    println!("Done.");
    Ok(())
}

fn print_summary(summary: &RunSummary, sink: &DirSink, seconds: f64) {
    println!();
    println!("Statistics:");
    for output in &summary.outputs {
        println!("  {:<32} {} rows", output.file_name, output.rows);
    }
    if summary.bookmarks_skipped > 0 {
        println!("  Bookmarks skipped (non-http): {}", summary.bookmarks_skipped);
    }
    println!("  Files written:   {}", sink.written().len());
    println!("  Output dir:      {}", sink.dir().display());
    println!("  Processing time: {:.2}s", seconds);
    println!();
}
