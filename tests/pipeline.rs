use std::{cell::RefCell, path::{Path, PathBuf}};

use qrdesk::{
    dialogs::Dialogs, GenerateOutcome, PipelineState, QrController, SaveOutcome, SymbolConfig,
};
use test_case::test_case;

#[derive(Default)]
struct FakeDialogs {
    save_path: Option<PathBuf>,
    cancel: bool,
    warnings: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    infos: RefCell<Vec<String>>,
    prompted: RefCell<bool>,
}

impl FakeDialogs {
    fn saving_to(path: &Path) -> Self {
        Self {
            save_path: Some(path.to_path_buf()),
            ..Default::default()
        }
    }
}

impl Dialogs for FakeDialogs {
    fn warning(&self, _title: &str, message: &str) {
        self.warnings.borrow_mut().push(message.to_owned());
    }

    fn error(&self, _title: &str, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }

    fn info(&self, _title: &str, message: &str) {
        self.infos.borrow_mut().push(message.to_owned());
    }

    fn choose_save_path(&self) -> Option<PathBuf> {
        *self.prompted.borrow_mut() = true;
        if self.cancel {
            return None;
        }
        self.save_path.clone()
    }
}

fn decode_file(path: &Path) -> (usize, String) {
    let img = image::open(path).unwrap().to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1);
    let (meta, content) = grids[0].decode().unwrap();
    (meta.version.0, content)
}

#[test]
fn example_url_generates_saves_and_decodes() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");
    let dialogs = FakeDialogs::saving_to(&out);
    let mut qr = QrController::new(SymbolConfig::DEFAULT, false);

    let version = match qr.generate("https://www.example.com", &dialogs) {
        GenerateOutcome::Ready { version } => version,
        other => panic!("expected a QR code, got {:?}", other),
    };
    assert!(version >= 1);
    assert!(qr.save_enabled());

    assert!(matches!(qr.save(&dialogs), SaveOutcome::Saved(_)));
    assert!(out.is_file());
    assert_eq!(dialogs.infos.borrow().len(), 1);

    let (decoded_version, content) = decode_file(&out);
    assert_eq!(decoded_version, version as usize);
    assert_eq!(content, "https://www.example.com");
}

#[test]
fn empty_input_warns_and_disables_save() {
    let dialogs = FakeDialogs::default();
    let mut qr = QrController::new(SymbolConfig::DEFAULT, false);

    assert!(matches!(qr.generate("", &dialogs), GenerateOutcome::Empty));
    assert_eq!(dialogs.warnings.borrow().len(), 1);
    assert!(!qr.save_enabled());
    assert_eq!(qr.state(), PipelineState::Empty);
}

#[test_case("  padded text  ", "padded text")]
#[test_case("0123456789", "0123456789")]
#[test_case("MixedCase and symbols: $%*+-./", "MixedCase and symbols: $%*+-./")]
#[test_case("line one\nline two", "line one\nline two")]
fn saved_file_decodes_to_trimmed_input(input: &str, expected: &str) {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("qr_code.png");
    let dialogs = FakeDialogs::saving_to(&out);
    let mut qr = QrController::new(SymbolConfig::DEFAULT, false);

    qr.generate(input, &dialogs);
    assert!(matches!(qr.save(&dialogs), SaveOutcome::Saved(_)));

    let (_, content) = decode_file(&out);
    assert_eq!(content, expected);
}

#[test]
fn cancelled_save_leaves_directory_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("qr_code.png");
    let dialogs = FakeDialogs {
        cancel: true,
        ..FakeDialogs::saving_to(&target)
    };
    let mut qr = QrController::new(SymbolConfig::DEFAULT, false);
    qr.generate("cancel me", &dialogs);
    let state_before = qr.state();

    assert!(matches!(qr.save(&dialogs), SaveOutcome::Cancelled));
    assert!(*dialogs.prompted.borrow());
    assert!(!target.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert_eq!(qr.state(), state_before);
    assert!(qr.save_enabled());
    assert_eq!(qr.artifact().unwrap().text, "cancel me");
    assert!(dialogs.infos.borrow().is_empty());
    assert!(dialogs.errors.borrow().is_empty());

    // same dialog without cancelling writes to that path
    let accepting = FakeDialogs::saving_to(&target);
    assert!(matches!(qr.save(&accepting), SaveOutcome::Saved(_)));
    assert!(target.is_file());
}

#[test]
fn save_before_generate_never_prompts() {
    let dir = tempfile::tempdir().unwrap();
    let dialogs = FakeDialogs::saving_to(&dir.path().join("never.png"));
    let qr = QrController::new(SymbolConfig::DEFAULT, false);

    assert!(matches!(qr.save(&dialogs), SaveOutcome::NothingToSave));
    assert!(!*dialogs.prompted.borrow());
    assert_eq!(dialogs.warnings.borrow().len(), 1);
    assert!(!dir.path().join("never.png").exists());
}

#[test]
fn oversized_input_replaces_ready_state_with_failure() {
    let dialogs = FakeDialogs::default();
    let mut qr = QrController::new(SymbolConfig::DEFAULT, false);
    qr.generate("ready", &dialogs);
    assert_eq!(qr.state(), PipelineState::Ready);

    assert!(matches!(
        qr.generate(&"x".repeat(8000), &dialogs),
        GenerateOutcome::Failed(_)
    ));
    assert!(qr.artifact().is_none());
    assert!(!qr.save_enabled());
    assert_eq!(dialogs.errors.borrow().len(), 1);

    // recovers on the next valid input
    assert!(matches!(
        qr.generate("ready again", &dialogs),
        GenerateOutcome::Ready { .. }
    ));
    assert!(qr.save_enabled());
}
