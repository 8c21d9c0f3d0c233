use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error: Either images and/or processed_images directories do not exist!")]
    MissingDirectories { input: PathBuf, output: PathBuf },

    #[error("Image error on {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot resize {path:?} to {width}x{height}")]
    InvalidDimensions { path: PathBuf, width: u32, height: u32 },

    #[error("No image format for extension '{extension}'")]
    UnsupportedFormat { extension: String },
}

pub type Result<T> = std::result::Result<T, Error>;
