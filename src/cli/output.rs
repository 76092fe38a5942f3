//! Output formatting utilities

use crate::application::package::{BuildReport, JobReport};

/// Format one job line: `<input> -> <n> entries (<m> skipped)`
pub fn format_job_report(job: &JobReport) -> String {
    format!(
        "{} -> {} entries ({} skipped)",
        job.input.display(),
        job.summary.records,
        job.summary.skipped
    )
}

/// Format a finished build, one line per job unless `quiet`, then the archive.
pub fn format_build_report(report: &BuildReport, quiet: bool) -> String {
    let mut output = String::new();
    if !quiet {
        for job in &report.jobs {
            output.push_str(&format_job_report(job));
            output.push('\n');
        }
    }
    output.push_str(&format!(
        "辞書ファイルを作成しました: {}",
        report.archive_path.display()
    ));
    output
}
