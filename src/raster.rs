use std::path::Path;

use image::{imageops, DynamicImage, GrayImage, ImageFormat, Luma};

use crate::{
    errors::{QrError, Result},
    qrcode::{Symbol, SymbolConfig},
};

const FOREGROUND: Luma<u8> = Luma([0]);
const BACKGROUND: Luma<u8> = Luma([255]);

/// Whatever a rasterizer hands back before it is turned into a bitmap.
pub enum RasterOutput {
    Bitmap(GrayImage),
    Wrapped(DynamicImage),
    Raw {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    },
}

impl RasterOutput {
    /// Extracts the grayscale pixel buffer regardless of which shape the
    /// rasterizer produced.
    pub fn into_bitmap(self) -> Result<GrayImage> {
        match self {
            RasterOutput::Bitmap(bitmap) => Ok(bitmap),
            RasterOutput::Wrapped(DynamicImage::ImageLuma8(bitmap)) => Ok(bitmap),
            RasterOutput::Wrapped(image @ DynamicImage::ImageRgb8(_))
            | RasterOutput::Wrapped(image @ DynamicImage::ImageRgba8(_)) => Ok(image.to_luma8()),
            RasterOutput::Wrapped(other) => Err(QrError::UnexpectedArtifactType(format!(
                "wrapped image with color type {:?}",
                other.color()
            ))),
            RasterOutput::Raw {
                width,
                height,
                pixels,
            } => {
                let len = pixels.len();
                GrayImage::from_raw(width, height, pixels).ok_or_else(|| {
                    QrError::UnexpectedArtifactType(format!(
                        "{} raw bytes do not fill a {}x{} bitmap",
                        len, width, height
                    ))
                })
            }
        }
    }
}

/// Draws the symbol black on white, `module_size` pixels per module, with a
/// quiet zone of `border` modules on every side.
pub fn rasterize(symbol: &Symbol, config: &SymbolConfig) -> RasterOutput {
    let side = (symbol.width() + 2 * config.border) * config.module_size;
    let bitmap = GrayImage::from_fn(side, side, |x, y| {
        let mx = x / config.module_size;
        let my = y / config.module_size;
        let inside = mx >= config.border
            && my >= config.border
            && mx < config.border + symbol.width()
            && my < config.border + symbol.width();

        if inside && symbol.is_dark(mx - config.border, my - config.border) {
            FOREGROUND
        } else {
            BACKGROUND
        }
    });

    RasterOutput::Bitmap(bitmap)
}

/// Scales the bitmap to fit inside a `bound` x `bound` box, keeping the
/// aspect ratio.
pub fn preview(bitmap: &GrayImage, bound: u32) -> GrayImage {
    let (width, height) = bitmap.dimensions();
    let scale = f64::min(bound as f64 / width as f64, bound as f64 / height as f64);
    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);

    imageops::resize(bitmap, new_width, new_height, imageops::FilterType::Lanczos3)
}

/// Writes the bitmap using the format implied by the path's extension. A
/// path without an extension is written as PNG.
pub fn write_bitmap(bitmap: &GrayImage, path: &Path) -> Result<()> {
    let written = match path.extension() {
        Some(_) => bitmap.save(path),
        None => bitmap.save_with_format(path, ImageFormat::Png),
    };

    written.map_err(|source| QrError::Write {
        path: path.to_path_buf(),
        source,
    })
}
