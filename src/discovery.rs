use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

const DAY_FOLDER_PREFIX: &str = "day";

#[derive(Debug, Clone)]
pub struct DayFolder {
    pub name: String,
    pub path: PathBuf,
    /// Digit characters as they appear in the name, e.g. "07" for "day07".
    pub digits: String,
    pub day_number: u64,
}

impl DayFolder {
    /// Key used for the per-day maps in the snapshot. Preserves leading
    /// zeros from the folder name.
    pub fn day_key(&self) -> String {
        format!("Day {}", self.digits)
    }
}

fn digit_run(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// List subdirectories of `working_dir` whose lowercased name starts with
/// the day prefix, ordered by the integer value of their digit characters.
/// An unreadable directory yields an empty list; a day-named folder with no
/// digits has no usable sort key and is skipped.
pub fn discover_day_folders(working_dir: &Path) -> Vec<DayFolder> {
    let entries = match fs::read_dir(working_dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Error listing {}: {}", working_dir.display(), err);
            return Vec::new();
        }
    };

    let mut folders = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.to_lowercase().starts_with(DAY_FOLDER_PREFIX) {
            continue;
        }
        let digits = digit_run(&name);
        match digits.parse::<u64>() {
            Ok(day_number) => folders.push(DayFolder {
                name,
                path,
                digits,
                day_number,
            }),
            Err(_) => warn!("Skipping day folder without a day number: {}", name),
        }
    }

    folders.sort_by_key(|folder| folder.day_number);
    folders
}
