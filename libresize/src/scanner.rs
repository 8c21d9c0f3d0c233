use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Both the input and the output directory have to exist before any work is done.
pub fn check_directories(input_dir: &Path, output_dir: &Path) -> Result<()> {
    if input_dir.exists() && output_dir.exists() {
        Ok(())
    } else {
        Err(Error::MissingDirectories {
            input: input_dir.to_path_buf(),
            output: output_dir.to_path_buf(),
        })
    }
}

/// Recursively list every regular file under `root`.
///
/// `root` itself is never listed, even when it is a plain file.
///
/// Entries are visited in file name order so a run over unchanged inputs
/// always sees the same sequence. Entries that cannot be read are skipped.
pub fn scan_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {:?}: {}", root, e);
                continue;
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    debug!("Found {} file(s) under {:?}", files.len(), root);
    files
}
