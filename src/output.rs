use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::AppError;
use crate::riot::Platform;
use crate::table::Table;

/// `{summoner}_{PLATFORM}_ranked_stats.csv` inside `dir`.
pub fn output_path(dir: &Path, summoner_name: &str, platform: Platform) -> PathBuf {
    dir.join(format!(
        "{}_{}_ranked_stats.csv",
        sanitize_file_stem(summoner_name),
        platform
    ))
}

/// Replace characters that are not safe in a file name on common filesystems.
pub fn sanitize_file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '#' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        "summoner".to_string()
    } else {
        stem
    }
}

/// Write the table as CSV, replacing any existing file at `path`.
///
/// Rows go to a sibling temporary file that is renamed over `path` once
/// complete, so a failure never leaves a partial table behind.
pub fn write_table(table: &Table, path: &Path) -> Result<(), AppError> {
    let tmp_path = tmp_path_for(path);

    let result = write_csv(table, &tmp_path).and_then(|()| Ok(fs::rename(&tmp_path, path)?));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }

    result
}

fn write_csv(table: &Table, path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    let columns = table.columns();
    if !columns.is_empty() {
        writer.write_record(&columns)?;
    }
    for record in table.records(&columns) {
        writer.write_record(&record)?;
    }

    writer.flush()?;
    debug!(path = %path.display(), rows = table.len(), "💾 CSV written");

    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
