use qrcode_generator::{QrCodeEcc, QrSegment};
use qrcodegen::{QrCode, Version};

use crate::errors::{QrError, Result};

/// Fixed encoder settings shared by every generated symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolConfig {
    pub ecc: QrCodeEcc,
    /// Pixels per module in the full-resolution bitmap.
    pub module_size: u32,
    /// Quiet zone width, in modules.
    pub border: u32,
    /// Smallest version the encoder may pick.
    pub min_version: u8,
}

impl SymbolConfig {
    pub const DEFAULT: SymbolConfig = SymbolConfig {
        ecc: QrCodeEcc::Low,
        module_size: 10,
        border: 4,
        min_version: 1,
    };
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Module grid of an encoded symbol, `true` meaning a dark module.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub version: u8,
    pub modules: Vec<Vec<bool>>,
}

impl Symbol {
    /// Number of modules along one side, without the quiet zone.
    pub fn width(&self) -> u32 {
        self.modules.len() as u32
    }

    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        self.modules[y as usize][x as usize]
    }
}

/// Encodes `text`, letting the encoder choose the smallest version that fits
/// at the configured error-correction level. The level is never raised above
/// the configured one.
pub fn qrcode_encode(text: &str, config: &SymbolConfig) -> Result<Symbol> {
    let segments = QrSegment::make_segments(text);
    let min_version = config
        .min_version
        .clamp(Version::MIN.value(), Version::MAX.value());
    let qr = QrCode::encode_segments_advanced(
        &segments,
        config.ecc,
        Version::new(min_version),
        Version::MAX,
        None,
        false,
    )
    .map_err(QrError::Encoding)?;

    let size = qr.size();
    let modules = (0..size)
        .map(|y| (0..size).map(|x| qr.get_module(x, y)).collect())
        .collect();

    Ok(Symbol {
        version: qr.version().value(),
        modules,
    })
}
