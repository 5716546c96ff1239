use std::{
    env,
    path::{Path, PathBuf},
};

use crate::errors::{QrError, Result};

pub const ICON_FILENAME: &str = "qr.png";
pub const PREVIEW_SIZE: u32 = 300;
pub const MIN_WINDOW_SIZE: (u32, u32) = (400, 550);
pub const SUGGESTED_FILENAME: &str = "qr_code.png";

/// Settings resolved once at startup and constant for the life of the
/// process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub diagnostics: bool,
    pub resource_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let work_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            diagnostics: cfg!(feature = "diagnostics"),
            resource_dir: resolve_resource_dir(exe_dir.as_deref(), &work_dir),
        }
    }

    pub fn icon_path(&self) -> PathBuf {
        self.resource_dir.join(ICON_FILENAME)
    }

    pub fn window_title(&self) -> String {
        if self.diagnostics {
            String::from("QR Code Generator (diagnostic mode)")
        } else {
            String::from("QR Code Generator")
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            diagnostics: false,
            resource_dir: PathBuf::from("."),
        }
    }
}

/// Packaged builds ship resources next to the executable; during development
/// they live in the working directory.
fn resolve_resource_dir(exe_dir: Option<&Path>, work_dir: &Path) -> PathBuf {
    match exe_dir {
        Some(dir) if dir.join(ICON_FILENAME).is_file() => dir.to_path_buf(),
        _ => work_dir.to_path_buf(),
    }
}

/// Window icon decoded to RGBA.
pub struct IconData {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub fn load_icon(path: &Path) -> Result<IconData> {
    let icon = image::open(path)
        .map_err(|source| QrError::ResourceLoad {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let (width, height) = icon.dimensions();

    Ok(IconData {
        rgba: icon.into_raw(),
        width,
        height,
    })
}

/// Writes the startup environment to the diagnostic log.
pub fn log_environment(config: &AppConfig) {
    tracing::debug!(
        "{} {} on {}/{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env::consts::OS,
        env::consts::ARCH
    );
    tracing::debug!("resource directory: {}", config.resource_dir.display());
    tracing::debug!("window icon: {}", config.icon_path().display());
    tracing::debug!("dependency versions are not available at runtime");
}
