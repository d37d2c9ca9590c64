use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Local;
use log::info;

use crate::collector::collect_student_files;
use crate::config::RunConfig;
use crate::discovery::discover_day_folders;
use crate::error::Result;
use crate::metrics::FileAnalyzer;
use crate::models::{DailyAggregate, FileDetail, FileRecord, RunSnapshot, StudentProgress};

/// Run the whole pipeline: discover day folders, extract per-student
/// submissions, aggregate, and write the snapshot and the markdown report.
/// A failure to write the snapshot aborts the run; the report is only
/// written after the snapshot succeeds.
pub fn generate_report(config: &RunConfig) -> Result<RunSnapshot> {
    let snapshot = build_snapshot(config)?;
    save_snapshot(&snapshot, &config.snapshot_path)?;
    write_markdown_report(&config.report_path)?;
    Ok(snapshot)
}

pub fn build_snapshot(config: &RunConfig) -> Result<RunSnapshot> {
    let analyzer = FileAnalyzer::new()?;
    let day_folders = discover_day_folders(&config.working_dir);
    info!(
        "Found {} day folders in {}",
        day_folders.len(),
        config.working_dir.display()
    );

    let mut snapshot = RunSnapshot::default();

    for student in &config.students {
        let mut progress = StudentProgress::default();

        for folder in &day_folders {
            let files = collect_student_files(&config.working_dir, folder, student, &analyzer);
            if files.is_empty() {
                continue;
            }

            let day_key = folder.day_key();
            progress.total_files += files.len() as u64;
            progress.completed_days += 1;
            progress
                .daily_submissions
                .insert(day_key.clone(), files.len() as u64);
            *snapshot.daily_submissions.entry(day_key.clone()).or_insert(0) +=
                files.len() as u64;

            for file in &files {
                *progress
                    .file_types
                    .entry(file.extension.clone())
                    .or_insert(0) += 1;
                *snapshot
                    .language_distribution
                    .entry(file.extension.clone())
                    .or_insert(0) += 1;
            }

            let daily = fold_daily(&files);
            progress.total_lines += daily.total_lines;
            progress.detailed_daily_stats.insert(day_key, daily);
        }

        // Guard: with no day folders at all there is nothing to complete.
        let completion_rate = if day_folders.is_empty() {
            0.0
        } else {
            progress.completed_days as f64 / day_folders.len() as f64 * 100.0
        };
        snapshot
            .completion_rates
            .insert(student.full_name.clone(), completion_rate);
        snapshot
            .student_progress
            .insert(student.full_name.clone(), progress);
    }

    Ok(snapshot)
}

/// Fold one day's matched files into per-day totals, keeping the individual
/// file summaries.
pub fn fold_daily(files: &[FileRecord]) -> DailyAggregate {
    let mut daily = DailyAggregate {
        files: files.len() as u64,
        ..Default::default()
    };
    for file in files {
        let metrics = &file.metrics;
        daily.total_lines += metrics.lines;
        daily.code_lines += metrics.code_lines;
        daily.comment_lines += metrics.comment_lines;
        daily.functions += metrics.functions;
        daily.classes += metrics.classes;
        daily.file_details.push(FileDetail {
            name: file.name.clone(),
            path: file.path.clone(),
            extension: file.extension.clone(),
            lines: metrics.lines,
            code_lines: metrics.code_lines,
            comment_lines: metrics.comment_lines,
            functions: metrics.functions,
            classes: metrics.classes,
            size: metrics.size_bytes,
        });
    }
    daily
}

fn save_snapshot(snapshot: &RunSnapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    info!("Snapshot written to {}", path.display());
    Ok(())
}

/// Title, timestamp, and the overall-progress heading. Per-student detail
/// is not emitted yet.
fn write_markdown_report(path: &Path) -> Result<()> {
    let mut report = String::new();
    let _ = writeln!(report, "# Python 30-Day Project Progress Report");
    let _ = writeln!(report);
    let _ = writeln!(
        report,
        "*Last Updated: {}*",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(report);
    let _ = writeln!(report, "## Overall Progress");
    fs::write(path, report)?;
    info!("Report written to {}", path.display());
    Ok(())
}
