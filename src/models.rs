use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One roster entry. Fragments are lowercase substrings tested against
/// lowercased file names.
#[derive(Debug, Clone)]
pub struct Student {
    pub full_name: String,
    pub github_username: String,
    pub file_prefixes: Vec<String>,
}

impl Student {
    pub fn new(full_name: &str, github_username: &str, file_prefixes: &[&str]) -> Self {
        Student {
            full_name: full_name.to_string(),
            github_username: github_username.to_string(),
            file_prefixes: file_prefixes.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        let file_lower = file_name.to_lowercase();
        self.file_prefixes
            .iter()
            .any(|prefix| file_lower.contains(prefix.as_str()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommitEntry {
    pub hash: String,
    pub author: String,
    pub email: String,
    pub timestamp: i64,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMetrics {
    pub lines: u64,
    pub code_lines: u64,
    pub comment_lines: u64,
    pub functions: u64,
    pub classes: u64,
    pub size_bytes: u64,
}

/// One matched submission file. The commit history is carried for the run
/// but is not part of the serialized snapshot.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub name: String,
    pub path: String,
    pub extension: String,
    pub metrics: FileMetrics,
    pub git_history: Vec<CommitEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileDetail {
    pub name: String,
    pub path: String,
    pub extension: String,
    pub lines: u64,
    pub code_lines: u64,
    pub comment_lines: u64,
    pub functions: u64,
    pub classes: u64,
    pub size: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyAggregate {
    pub total_lines: u64,
    pub code_lines: u64,
    pub comment_lines: u64,
    pub functions: u64,
    pub classes: u64,
    pub files: u64,
    pub file_details: Vec<FileDetail>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StudentProgress {
    pub total_files: u64,
    pub completed_days: u64,
    pub daily_submissions: BTreeMap<String, u64>,
    pub file_types: BTreeMap<String, u64>,
    pub total_lines: u64,
    pub detailed_daily_stats: BTreeMap<String, DailyAggregate>,
}

/// Declared in the snapshot but never populated from commit history.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RepositoryActivity {
    pub activity_timeline: BTreeMap<String, u64>,
    pub contribution_history: BTreeMap<String, BTreeMap<String, u64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunSnapshot {
    pub daily_submissions: BTreeMap<String, u64>,
    pub student_progress: BTreeMap<String, StudentProgress>,
    pub completion_rates: BTreeMap<String, f64>,
    pub language_distribution: BTreeMap<String, u64>,
    pub repository_activity: RepositoryActivity,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joe() -> Student {
        Student::new("Joe Martin", "JoeMartinRince", &["joe_m", "joem", "martin"])
    }

    #[test]
    fn fragment_match_attributes_file() {
        assert!(joe().matches("joe_martin_final.py"));
        assert!(joe().matches("day3_martin.py"));
    }

    #[test]
    fn fragment_match_is_case_insensitive() {
        assert!(joe().matches("Joe_Martin_FINAL.PY"));
    }

    #[test]
    fn unrelated_file_does_not_match() {
        assert!(!joe().matches("no_match.py"));
    }

    #[test]
    fn default_snapshot_has_empty_structures() {
        let snapshot = RunSnapshot::default();
        assert!(snapshot.daily_submissions.is_empty());
        assert!(snapshot.repository_activity.activity_timeline.is_empty());
        assert!(snapshot.repository_activity.contribution_history.is_empty());
    }
}
