use std::fs;
use std::path::Path;

use log::warn;

use crate::discovery::DayFolder;
use crate::git_history;
use crate::metrics::FileAnalyzer;
use crate::models::{FileMetrics, FileRecord, Student};

/// Collect the submission files one student left in one day folder: every
/// direct-child regular file whose lowercased name contains any of the
/// student's fragments. Extraction failures degrade per file (zeroed
/// metrics, empty history); a failure to list the folder degrades to an
/// empty result.
pub fn collect_student_files(
    working_dir: &Path,
    folder: &DayFolder,
    student: &Student,
    analyzer: &FileAnalyzer,
) -> Vec<FileRecord> {
    let entries = match fs::read_dir(&folder.path) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Error processing folder {}: {}", folder.name, err);
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Error processing folder {}: {}", folder.name, err);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !student.matches(&name) {
            continue;
        }

        // Path relative to the working directory, the same form the git
        // query expects.
        let relative_path = Path::new(&folder.name).join(&name);
        let relative_path = relative_path.to_string_lossy().to_string();

        let metrics = match analyzer.analyze(&path) {
            Ok(metrics) => metrics,
            Err(err) => {
                warn!("Error analyzing file {}: {}", relative_path, err);
                FileMetrics::default()
            }
        };
        let git_history = match git_history::file_history(working_dir, &relative_path) {
            Ok(commits) => commits,
            Err(err) => {
                warn!("Error getting git history for {}: {}", relative_path, err);
                Vec::new()
            }
        };

        files.push(FileRecord {
            extension: file_extension(&name),
            name,
            path: relative_path,
            metrics,
            git_history,
        });
    }
    files
}

/// Extension including the dot, lowercased; empty when the name has no dot
/// or only a leading one.
fn file_extension(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::discovery::discover_day_folders;

    fn student() -> Student {
        Student::new("Joe Martin", "JoeMartinRince", &["joe_m", "joem", "martin"])
    }

    fn write_file(dir: &Path, name: &str, content: &[u8]) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content).unwrap();
    }

    #[test]
    fn only_matching_files_are_collected() {
        let dir = tempfile::tempdir().unwrap();
        let day = dir.path().join("day1");
        fs::create_dir(&day).unwrap();
        write_file(&day, "joe_martin_final.py", b"x = 1\n");
        write_file(&day, "no_match.py", b"x = 2\n");

        let folders = discover_day_folders(dir.path());
        let analyzer = FileAnalyzer::new().unwrap();
        let files = collect_student_files(dir.path(), &folders[0], &student(), &analyzer);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "joe_martin_final.py");
        assert_eq!(files[0].extension, ".py");
        assert_eq!(files[0].metrics.lines, 1);
    }

    #[test]
    fn a_file_matching_two_fragments_is_collected_once() {
        let dir = tempfile::tempdir().unwrap();
        let day = dir.path().join("day1");
        fs::create_dir(&day).unwrap();
        write_file(&day, "joe_martin.py", b"x = 1\n");

        let folders = discover_day_folders(dir.path());
        let analyzer = FileAnalyzer::new().unwrap();
        let files = collect_student_files(dir.path(), &folders[0], &student(), &analyzer);
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn subdirectories_are_not_submissions() {
        let dir = tempfile::tempdir().unwrap();
        let day = dir.path().join("day1");
        fs::create_dir(&day).unwrap();
        fs::create_dir(day.join("martin_drafts")).unwrap();

        let folders = discover_day_folders(dir.path());
        let analyzer = FileAnalyzer::new().unwrap();
        let files = collect_student_files(dir.path(), &folders[0], &student(), &analyzer);
        assert!(files.is_empty());
    }

    #[test]
    fn unreadable_file_degrades_to_zeroed_metrics() {
        let dir = tempfile::tempdir().unwrap();
        let day = dir.path().join("day1");
        fs::create_dir(&day).unwrap();
        write_file(&day, "martin.py", &[0xff, 0xfe, 0xfd]);

        let folders = discover_day_folders(dir.path());
        let analyzer = FileAnalyzer::new().unwrap();
        let files = collect_student_files(dir.path(), &folders[0], &student(), &analyzer);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].metrics, FileMetrics::default());
    }

    #[test]
    fn outside_a_repository_history_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let day = dir.path().join("day1");
        fs::create_dir(&day).unwrap();
        write_file(&day, "martin.py", b"x = 1\n");

        let folders = discover_day_folders(dir.path());
        let analyzer = FileAnalyzer::new().unwrap();
        let files = collect_student_files(dir.path(), &folders[0], &student(), &analyzer);
        assert!(files[0].git_history.is_empty());
    }

    #[test]
    fn extension_is_lowercased_with_dot() {
        assert_eq!(file_extension("solution.PY"), ".py");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension("README"), "");
        assert_eq!(file_extension(".gitignore"), "");
    }
}
