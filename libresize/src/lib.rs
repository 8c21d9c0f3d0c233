pub mod config;
pub mod dimensions;
pub mod error;
pub mod naming;
pub mod processing;
pub mod scanner;
pub mod validate;

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, error};
use serde::Serialize;

pub use config::{FailurePolicy, HeightRule, ResizeConfig};
pub use error::{Error, Result};

use processing::{resize_file, FileOutcome, ImageFile, WrittenImage};
use scanner::{check_directories, scan_files};
use validate::valid_files;

/// Per-file messages emitted while a directory is processed.
#[derive(Debug)]
pub enum Notice<'a> {
    IncorrectFileType(&'a Path),
    WrongAspectRatio(&'a Path),
    Failed(&'a Path, &'a Error),
}

impl fmt::Display for Notice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::IncorrectFileType(path) => write!(f, "Incorrect file type: {}", path.display()),
            Notice::WrongAspectRatio(path) => write!(f, "Wrong aspect ratio: {}", path.display()),
            Notice::Failed(path, err) => write!(f, "Failed to process {}: {}", path.display(), err),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub scanned: usize,
    pub rejected: Vec<PathBuf>,
    pub wrong_aspect_ratio: Vec<PathBuf>,
    pub failed: Vec<FailedFile>,
    pub written: Vec<WrittenImage>,
}

/// Resize every valid image under `input_dir` into `output_dir`.
///
/// Returns early with `Error::MissingDirectories` before touching anything if
/// either directory is absent. Under `FailurePolicy::Halt` the first failing
/// file ends the run with its error.
pub fn process_directory<F>(
    input_dir: &Path,
    output_dir: &Path,
    config: &ResizeConfig,
    mut on_notice: F,
) -> Result<RunReport>
where
    F: FnMut(&Notice),
{
    check_directories(input_dir, output_dir)?;

    let mut report = RunReport::default();
    let files = scan_files(input_dir);
    report.scanned = files.len();

    let files = valid_files(files, config, |path| {
        on_notice(&Notice::IncorrectFileType(path));
        report.rejected.push(path.to_path_buf());
    });

    for path in files {
        debug!("Processing {:?}", path);
        let file = ImageFile::new(path);
        match resize_file(&file, output_dir, config) {
            Ok(FileOutcome::Resized(mut written)) => report.written.append(&mut written),
            Ok(FileOutcome::WrongAspectRatio { .. }) => {
                on_notice(&Notice::WrongAspectRatio(&file.path));
                report.wrong_aspect_ratio.push(file.path);
            }
            Err(e) => match config.failure_policy {
                FailurePolicy::Halt => return Err(e),
                FailurePolicy::Isolate => {
                    error!("{:?}: {}", file.path, e);
                    on_notice(&Notice::Failed(&file.path, &e));
                    report.failed.push(FailedFile {
                        path: file.path,
                        error: e.to_string(),
                    });
                }
            },
        }
    }

    Ok(report)
}
