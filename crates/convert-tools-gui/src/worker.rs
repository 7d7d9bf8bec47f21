use pdf_async_runtime::{ConvertCommand, ConvertUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes conversion commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<ConvertCommand>,
    update_tx: mpsc::UnboundedSender<ConvertUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            ConvertCommand::AssembleGenerate {
                images,
                settings,
                output_path,
            } => {
                handlers::assemble::handle_generate(images, settings, output_path, &update_tx)
                    .await;
            }
            ConvertCommand::SettingsSave { settings, path } => {
                handlers::assemble::handle_settings_save(settings, path, &update_tx).await;
            }
            ConvertCommand::SettingsLoad { path } => {
                handlers::assemble::handle_settings_load(path, &update_tx).await;
            }
            ConvertCommand::SplitLoad { path } => {
                handlers::split::handle_load(path, &update_tx).await;
            }
            ConvertCommand::SplitGenerate {
                input_path,
                selection,
                output_path,
            } => {
                handlers::split::handle_generate(input_path, selection, output_path, &update_tx)
                    .await;
            }
        }
    }
}
