use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::{debug, info};
use serde::Serialize;

use crate::config::ResizeConfig;
use crate::dimensions::{plan, TargetDimension};
use crate::error::{Error, Result};
use crate::naming::{base_name, output_file_name};
use crate::validate::file_extension;

/// A candidate input file and the names derived from its path.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub base_name: String,
    pub extension: String,
}

impl ImageFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            base_name: base_name(&path),
            extension: file_extension(&path),
            path,
        }
    }

    /// Pixel dimensions read from the image header.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        image::image_dimensions(&self.path).map_err(|source| Error::Image {
            path: self.path.clone(),
            source,
        })
    }

    fn format(&self) -> Result<ImageFormat> {
        ImageFormat::from_extension(&self.extension).ok_or_else(|| Error::UnsupportedFormat {
            extension: self.extension.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WrittenImage {
    pub path: PathBuf,
    #[serde(flatten)]
    pub size: TargetDimension,
}

#[derive(Debug, Clone)]
pub enum FileOutcome {
    Resized(Vec<WrittenImage>),
    /// Width differs from the reference width; nothing was written.
    WrongAspectRatio { width: u32, height: u32 },
}

/// Only images exactly as wide as the reference are resized. The height is not checked.
pub fn passes_width_gate(width: u32, config: &ResizeConfig) -> bool {
    width == config.reference_width
}

/// Resize one file into every target size and write the results into `output_dir`.
///
/// Each resize starts from the previous result rather than the decoded original.
/// Existing outputs with the same name are overwritten.
pub fn resize_file(file: &ImageFile, output_dir: &Path, config: &ResizeConfig) -> Result<FileOutcome> {
    let format = file.format()?;
    let (width, height) = file.dimensions()?;
    if !passes_width_gate(width, config) {
        debug!("{:?} is {}x{}, skipping", file.path, width, height);
        return Ok(FileOutcome::WrongAspectRatio { width, height });
    }

    let mut current = image::open(&file.path).map_err(|source| Error::Image {
        path: file.path.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(config.percentages.len());
    for size in plan(width, height, config) {
        if size.width == 0 || size.height == 0 {
            return Err(Error::InvalidDimensions {
                path: file.path.clone(),
                width: size.width,
                height: size.height,
            });
        }
        current = current.resize_exact(size.width, size.height, config.filter);

        let name = output_file_name(&file.base_name, size.width, size.height, &file.extension);
        let out_path = output_dir.join(name);
        current
            .save_with_format(&out_path, format)
            .map_err(|source| Error::Image {
                path: out_path.clone(),
                source,
            })?;
        info!("Wrote {:?}", out_path);

        written.push(WrittenImage {
            path: out_path,
            size,
        });
    }

    Ok(FileOutcome::Resized(written))
}
