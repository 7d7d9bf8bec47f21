use pdf_async_runtime::ConvertUpdate;
use pdf_split::PageSet;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_load(path: PathBuf, update_tx: &mpsc::UnboundedSender<ConvertUpdate>) {
    match pdf_split::load_pdf(&path).await {
        Ok(doc) => {
            let page_count = pdf_split::page_count(&doc) as usize;
            let _ = update_tx.send(ConvertUpdate::SplitLoaded { path, page_count });
        }
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: format!("Failed to load PDF: {e}"),
            });
        }
    }
}

pub async fn handle_generate(
    input_path: PathBuf,
    selection: String,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    // The view validates before sending, but the string travels raw so the
    // selection is parsed where it is used.
    let selection = match PageSet::parse(&selection) {
        Ok(selection) => selection,
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: e.to_string(),
            });
            return;
        }
    };

    match pdf_split::split_file(&input_path, &selection, &output_path).await {
        Ok(page_count) => {
            let _ = update_tx.send(ConvertUpdate::SplitComplete {
                path: output_path,
                page_count,
            });
        }
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: format!("Failed to split PDF: {e}"),
            });
        }
    }
}
