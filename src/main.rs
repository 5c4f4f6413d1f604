/*!
 * Command-line interface for treedump
 */

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use treedump::config::{Args, Config};
use treedump::report::{ReportFormat, Reporter, ScanReport};
use treedump::scanner::Scanner;
use treedump::writer::TreeWriter;

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "treedump", &mut io::stdout());
        return Ok(());
    }

    let config = Config::from_args(args);

    // Validate before the output file is touched
    config.validate()?;

    let progress = if config.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos} dirs ⏱️  {elapsed_precise}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    };
    progress.set_prefix("🌳 Walking");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    let start_time = Instant::now();

    let scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let mut writer = TreeWriter::create(&config.output_file)?;
    let scan_result = scanner.scan(&mut writer);

    progress.finish_and_clear();

    let statistics = scan_result?;
    writer.finish()?;

    let duration = start_time.elapsed();

    for skipped in &statistics.skipped {
        eprintln!(
            "Warning: skipped directory {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }

    if !config.quiet {
        let report = ScanReport {
            root: config.target_dir.display().to_string(),
            output_file: config.output_file.display().to_string(),
            duration,
            statistics,
        };
        Reporter::new(ReportFormat::ConsoleTable).print_report(&report);
    }

    Ok(())
}
