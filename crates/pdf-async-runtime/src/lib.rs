use std::path::PathBuf;

// Re-export types from library crates
pub use pdf_assemble::{Notification, PageSettings, Severity, SourceImage};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum ConvertCommand {
    AssembleGenerate {
        images: Vec<SourceImage>,
        settings: PageSettings,
        output_path: PathBuf,
    },
    SettingsSave {
        settings: PageSettings,
        path: PathBuf,
    },
    SettingsLoad {
        path: PathBuf,
    },
    SplitLoad {
        path: PathBuf,
    },
    SplitGenerate {
        input_path: PathBuf,
        selection: String,
        output_path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum ConvertUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    AssembleComplete {
        path: PathBuf,
        page_count: usize,
    },
    SettingsLoaded {
        settings: PageSettings,
    },
    SplitLoaded {
        path: PathBuf,
        page_count: usize,
    },
    SplitComplete {
        path: PathBuf,
        page_count: usize,
    },
    Error {
        message: String,
    },
}
