use clap::Parser;
use perfviz::analysis::SummaryStatistics;
use perfviz::charts::{render_dashboard, render_distribution};
use perfviz::cli::Cli;
use perfviz::core::constants::{output, summary_formats};
use perfviz::data::{SampleSeries, load_metrics};
use perfviz::discovery::find_latest_metrics_csv;
use perfviz::logging;
use perfviz::preflight;
use perfviz::reporting::{self, HtmlReport};

use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.quiet);

    match run_perfviz_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main analysis flow extracted from main() for testing.
///
/// Recoverable failures (usage, load, environment, generation) are printed
/// with a hint and surface as exit code 1; only unexpected faults bubble.
pub fn run_perfviz_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    if !cli.quiet {
        println!("\u{1F680} perfviz - Performance Metrics Visualizer");
        println!("===========================================");
    }

    // Fail fast before any work when the rendering stack is unusable
    if let Err(e) = preflight::check_rendering_support() {
        eprintln!("\u{274C} {e}");
        return Ok(1);
    }

    let Some(csv_file) = resolve_input_file(cli)? else {
        eprintln!("\u{274C} No metrics CSV files found!");
        eprintln!("Usage: perfviz <csv_file>");
        eprintln!("Or run the monitoring script first to produce metrics_*.csv");
        return Ok(1);
    };

    if !csv_file.exists() {
        eprintln!("\u{274C} File not found: {}", csv_file.display());
        return Ok(1);
    }

    if !cli.quiet {
        println!("\u{1F4CA} Loading performance data from {}...", csv_file.display());
    }

    let series = match load_metrics(&csv_file) {
        Ok(series) => series,
        Err(e) => {
            eprintln!("\u{274C} Error loading data: {e}");
            return Ok(1);
        }
    };

    // Statistics come first so a bad series never leaves partial outputs
    let stats = match SummaryStatistics::compute(&series) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("\u{274C} Error loading data: {e}");
            return Ok(1);
        }
    };

    if !cli.quiet {
        println!("\u{2705} Loaded {} data points", series.len());
        if let (Some(first), Some(last)) = (series.first_timestamp(), series.last_timestamp()) {
            println!("\u{1F4C5} Time range: {first} to {last}");
        }
    }

    let output_dir = Path::new(output::REPORT_DIR);
    if let Err(e) = generate_outputs(cli, &series, &stats, &csv_file, output_dir) {
        eprintln!("\u{274C} Error during analysis: {e}");
        eprintln!(
            "\u{1F4A1} Check that the output directory is writable and a sans-serif font is installed"
        );
        return Ok(1);
    }

    match cli.format.as_str() {
        summary_formats::JSON => println!("{}", reporting::render_json(&stats)?),
        _ => reporting::print_summary(&stats),
    }

    if !cli.quiet {
        println!("\n\u{1F389} Analysis completed successfully!");
        println!("\u{1F4C1} All files saved to: {}/", output_dir.display());
        println!(
            "\u{1F310} Open {} in your browser to view the full report",
            output::REPORT_FILE
        );
    }

    Ok(0)
}

/// Input resolution order: explicit argument, else newest metrics_*.csv in
/// the working directory.
fn resolve_input_file(cli: &Cli) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    if let Some(file) = &cli.file {
        return Ok(Some(file.clone()));
    }

    let found = find_latest_metrics_csv(Path::new("."))?;
    if let Some(path) = &found {
        if !cli.quiet {
            println!("\u{1F4C1} Auto-detected latest CSV file: {}", path.display());
        }
    }
    Ok(found)
}

fn generate_outputs(
    cli: &Cli,
    series: &SampleSeries,
    stats: &SummaryStatistics,
    csv_file: &Path,
    output_dir: &Path,
) -> perfviz::Result<()> {
    if !cli.quiet {
        println!("\n\u{1F3A8} Generating performance dashboard...");
    }
    render_dashboard(series, output_dir)?;

    if !cli.quiet {
        println!("\u{1F4C8} Generating statistical analysis...");
    }
    render_distribution(series, output_dir)?;

    if !cli.quiet {
        println!("\u{1F4C4} Generating HTML report...");
    }
    let source_name = csv_file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown");
    let report = HtmlReport::write(series, stats, source_name, output_dir)?;
    if !cli.quiet {
        println!("\u{1F4C4} HTML Report generated: {}", report.display());
    }

    Ok(())
}
