//! Desktop QR code generator: text in, QR bitmap out, saved wherever the
//! user chooses.

pub mod config;
pub mod controller;
pub mod dialogs;
pub mod errors;
pub mod gui;
pub mod qrcode;
pub mod raster;

pub use controller::{GenerateOutcome, PipelineState, QrArtifact, QrController, SaveOutcome};
pub use errors::QrError;
pub use qrcode::SymbolConfig;
