use std::path::PathBuf;

use image::GrayImage;

use crate::{
    config::PREVIEW_SIZE,
    dialogs::Dialogs,
    errors::{QrError, Result},
    qrcode::{qrcode_encode, SymbolConfig},
    raster::{preview, rasterize, write_bitmap},
};

/// Full-resolution bitmap of the last successful encode.
#[derive(Debug, Clone)]
pub struct QrArtifact {
    pub text: String,
    pub version: u8,
    pub bitmap: GrayImage,
    pub preview: GrayImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Empty,
    Generating,
    Ready,
    Failed,
}

#[derive(Debug)]
pub enum GenerateOutcome {
    Ready { version: u8 },
    Empty,
    Failed(QrError),
}

#[derive(Debug)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
    NothingToSave,
    Failed(QrError),
}

pub struct QrController {
    config: SymbolConfig,
    diagnostics: bool,
    state: PipelineState,
    artifact: Option<QrArtifact>,
}

impl QrController {
    pub fn new(config: SymbolConfig, diagnostics: bool) -> Self {
        Self {
            config,
            diagnostics,
            state: PipelineState::Empty,
            artifact: None,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn artifact(&self) -> Option<&QrArtifact> {
        self.artifact.as_ref()
    }

    pub fn save_enabled(&self) -> bool {
        self.artifact.is_some()
    }

    pub fn generate(&mut self, text: &str, dialogs: &dyn Dialogs) -> GenerateOutcome {
        let request = text.trim();
        tracing::debug!("generating QR code for {:?} ({} bytes)", request, request.len());

        if request.is_empty() {
            self.artifact = None;
            self.state = PipelineState::Empty;
            tracing::debug!("nothing to encode, asking for input");
            dialogs.warning("Warning", &QrError::EmptyInput.to_string());
            return GenerateOutcome::Empty;
        }

        self.state = PipelineState::Generating;
        match self.build_artifact(request) {
            Ok(artifact) => {
                let version = artifact.version;
                tracing::debug!(
                    "QR code ready: version {}, {}x{} px",
                    version,
                    artifact.bitmap.width(),
                    artifact.bitmap.height()
                );
                self.artifact = Some(artifact);
                self.state = PipelineState::Ready;
                GenerateOutcome::Ready { version }
            }
            Err(err) => {
                self.artifact = None;
                self.state = PipelineState::Failed;
                tracing::debug!("QR generation failed: {}: {}", err.kind(), err);
                dialogs.error("Generation error", &self.failure_message(&err));
                GenerateOutcome::Failed(err)
            }
        }
    }

    fn build_artifact(&self, request: &str) -> Result<QrArtifact> {
        let symbol = qrcode_encode(request, &self.config)?;
        tracing::debug!("encoder picked version {}", symbol.version);

        let bitmap = rasterize(&symbol, &self.config).into_bitmap()?;
        let preview = preview(&bitmap, PREVIEW_SIZE);

        Ok(QrArtifact {
            text: request.to_owned(),
            version: symbol.version,
            bitmap,
            preview,
        })
    }

    fn failure_message(&self, err: &QrError) -> String {
        if self.diagnostics {
            tracing::debug!("error details: {:?}", err);
            format!(
                "Could not generate the QR code.\n\nError type: {}\nMessage: {}\n\nDetails in the console.",
                err.kind(),
                err
            )
        } else {
            format!("Could not generate the QR code ({}): {}", err.kind(), err)
        }
    }

    pub fn save(&self, dialogs: &dyn Dialogs) -> SaveOutcome {
        let artifact = match &self.artifact {
            Some(artifact) => artifact,
            None => {
                tracing::debug!("save requested before a QR code was generated");
                dialogs.warning("Warning", "Generate a QR code first, then save it.");
                return SaveOutcome::NothingToSave;
            }
        };

        let path = match dialogs.choose_save_path() {
            Some(path) => path,
            None => {
                tracing::debug!("save cancelled by the user");
                return SaveOutcome::Cancelled;
            }
        };
        tracing::debug!("saving QR code to {}", path.display());

        match write_bitmap(&artifact.bitmap, &path) {
            Ok(()) => {
                tracing::debug!("QR code saved");
                dialogs.info("Saved", &format!("QR code saved to:\n{}", path.display()));
                SaveOutcome::Saved(path)
            }
            Err(err) => {
                tracing::debug!("saving failed: {}: {}", err.kind(), err);
                if self.diagnostics {
                    tracing::debug!("error details: {:?}", err);
                }
                dialogs.error("Save error", &format!("Could not save the file: {}", err));
                SaveOutcome::Failed(err)
            }
        }
    }
}
