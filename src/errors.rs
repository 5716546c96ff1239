use std::path::PathBuf;

use image::ImageError;
use qrcodegen::DataTooLong;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("Please enter text to generate a QR code.")]
    EmptyInput,

    #[error("{0}")]
    Encoding(#[source] DataTooLong),

    #[error("rasterizer produced an unexpected artifact: {0}")]
    UnexpectedArtifactType(String),

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("could not load resource {}: {source}", path.display())]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

impl QrError {
    /// Short name of the error, shown to the user next to the message.
    pub fn kind(&self) -> &'static str {
        match self {
            QrError::EmptyInput => "EmptyInputError",
            QrError::Encoding(_) => "EncodingError",
            QrError::UnexpectedArtifactType(_) => "UnexpectedArtifactTypeError",
            QrError::Write { .. } => "WriteError",
            QrError::ResourceLoad { .. } => "ResourceLoadWarning",
        }
    }
}

pub type Result<T> = std::result::Result<T, QrError>;
