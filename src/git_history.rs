use std::path::Path;
use std::process::Command;

use crate::error::{Result, TrackerError};
use crate::models::CommitEntry;

const LOG_FORMAT: &str = "--format=%H|%an|%ae|%at|%s";

/// Full commit history for one file, newest first, following renames.
/// `file_path` is relative to `working_dir`, which must be inside the
/// repository being queried.
pub fn file_history(working_dir: &Path, file_path: &str) -> Result<Vec<CommitEntry>> {
    let output = run_git_command(working_dir, &["log", "--follow", LOG_FORMAT, file_path])?;
    parse_history(&output)
}

fn run_git_command(working_dir: &Path, args: &[&str]) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.current_dir(working_dir);
    cmd.arg("--no-pager");
    cmd.args(args);

    let output = cmd
        .output()
        .map_err(|e| TrackerError::CommandError(format!("Failed to run git command: {}", e)))?;

    if !output.status.success() {
        let error = String::from_utf8_lossy(&output.stderr);
        return Err(TrackerError::CommandError(format!(
            "Git command failed: {}",
            error
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// One commit per line, five pipe-separated fields. A subject line that
/// itself contains a pipe produces a sixth field and fails the whole
/// parse; known limitation of the record format.
fn parse_history(output: &str) -> Result<Vec<CommitEntry>> {
    let mut commits = Vec::new();
    for line in output.lines() {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('|').collect();
        if fields.len() != 5 {
            return Err(TrackerError::Other(format!(
                "Malformed log record: {}",
                line
            )));
        }
        let timestamp = fields[3].parse::<i64>().map_err(|_| {
            TrackerError::Other(format!("Invalid commit timestamp: {}", fields[3]))
        })?;
        commits.push(CommitEntry {
            hash: fields[0].to_string(),
            author: fields[1].to_string(),
            email: fields[2].to_string(),
            timestamp,
            message: fields[4].to_string(),
        });
    }
    Ok(commits)
}
