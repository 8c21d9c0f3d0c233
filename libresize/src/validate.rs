use std::path::{Path, PathBuf};

use log::debug;

use crate::config::ResizeConfig;

/// Everything after the last `.` of the full path string.
///
/// A path without any `.` comes back whole, which never matches a valid extension.
pub fn file_extension(path: &Path) -> String {
    let path = path.to_string_lossy();
    match path.rfind('.') {
        Some(idx) => path[idx + 1..].to_string(),
        None => path.into_owned(),
    }
}

/// Keep the paths whose extension is in the configured set, in their original order.
pub fn valid_files<F>(paths: Vec<PathBuf>, config: &ResizeConfig, mut on_rejected: F) -> Vec<PathBuf>
where
    F: FnMut(&Path),
{
    let mut valid = Vec::with_capacity(paths.len());
    for path in paths {
        if config.is_valid_extension(&file_extension(&path)) {
            valid.push(path);
        } else {
            debug!("Rejecting {:?} by extension", path);
            on_rejected(&path);
        }
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_taken_after_last_dot() {
        assert_eq!(file_extension(Path::new("images/My Photo.jpg")), "jpg");
        assert_eq!(file_extension(Path::new("images/archive.tar.png")), "png");
        assert_eq!(file_extension(Path::new("images/shot.JPEG")), "JPEG");
    }

    #[test]
    fn dot_in_directory_name_is_not_skipped() {
        assert_eq!(file_extension(Path::new("images/v1.2/README")), "2/README");
    }

    #[test]
    fn no_dot_returns_whole_path() {
        assert_eq!(file_extension(Path::new("images/README")), "images/README");
    }

    #[test]
    fn filters_by_exact_extension_and_keeps_order() {
        let config = ResizeConfig::default();
        let paths = vec![
            PathBuf::from("images/c.png"),
            PathBuf::from("images/notes.txt"),
            PathBuf::from("images/a.jpeg"),
            PathBuf::from("images/b.JPG"),
            PathBuf::from("images/d.jpg"),
        ];

        let mut rejected = Vec::new();
        let valid = valid_files(paths, &config, |p| rejected.push(p.to_path_buf()));

        assert_eq!(
            valid,
            vec![
                PathBuf::from("images/c.png"),
                PathBuf::from("images/a.jpeg"),
                PathBuf::from("images/d.jpg"),
            ]
        );
        assert_eq!(
            rejected,
            vec![PathBuf::from("images/notes.txt"), PathBuf::from("images/b.JPG")]
        );
    }
}
