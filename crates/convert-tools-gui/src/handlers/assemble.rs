use pdf_assemble::{PageSettings, SourceImage};
use pdf_async_runtime::ConvertUpdate;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_generate(
    images: Vec<SourceImage>,
    settings: PageSettings,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    let total = images.len();
    let _ = update_tx.send(ConvertUpdate::Progress {
        operation: "Assembling images".to_string(),
        current: 0,
        total,
    });

    match pdf_assemble::assemble_to_file(images, &settings, &output_path).await {
        Ok(page_count) => {
            let _ = update_tx.send(ConvertUpdate::AssembleComplete {
                path: output_path,
                page_count,
            });
        }
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: format!("Failed to create PDF: {e}"),
            });
        }
    }
}

pub async fn handle_settings_save(
    settings: PageSettings,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    match settings.save(&path).await {
        Ok(()) => log::info!("Settings saved to {}", path.display()),
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: format!("Failed to save settings: {e}"),
            });
        }
    }
}

pub async fn handle_settings_load(path: PathBuf, update_tx: &mpsc::UnboundedSender<ConvertUpdate>) {
    match PageSettings::load(&path).await {
        Ok(settings) => {
            let _ = update_tx.send(ConvertUpdate::SettingsLoaded { settings });
        }
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: format!("Failed to load settings: {e}"),
            });
        }
    }
}
