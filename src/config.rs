use std::path::PathBuf;

use crate::models::Student;

pub const SNAPSHOT_FILE: &str = "chart_data.json";
pub const REPORT_FILE: &str = "Progress_Report.md";

/// Everything one run needs, passed in explicitly: the working directory to
/// scan, where the two output files go, and the student roster.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub working_dir: PathBuf,
    pub snapshot_path: PathBuf,
    pub report_path: PathBuf,
    pub students: Vec<Student>,
}

impl RunConfig {
    pub fn new(working_dir: impl Into<PathBuf>, students: Vec<Student>) -> Self {
        let working_dir = working_dir.into();
        RunConfig {
            snapshot_path: working_dir.join(SNAPSHOT_FILE),
            report_path: working_dir.join(REPORT_FILE),
            working_dir,
            students,
        }
    }
}

/// The course roster. Static configuration, not loaded from anywhere.
pub fn default_roster() -> Vec<Student> {
    vec![
        Student::new("Joe Martin", "JoeMartinRince", &["joe_m", "joem", "martin"]),
        Student::new("Ganesh Chandran", "Ganesh-Chandran005", &["ganesh", "chandran"]),
        Student::new("Job Thomas", "Jobthomas10", &["job", "thomas", "job_t"]),
        Student::new("Indhu Subash", "IndhuSubash-2007", &["indhu", "subash"]),
    ]
}
