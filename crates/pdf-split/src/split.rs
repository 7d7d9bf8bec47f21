//! Page extraction backed by lopdf

use crate::pageset::PageSet;
use crate::types::{Result, SplitError};
use lopdf::Document;
use std::collections::BTreeSet;
use std::path::Path;

/// Load a PDF document from disk
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Save a document to disk
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, SplitError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Number of pages in a document
pub fn page_count(doc: &Document) -> u32 {
    doc.get_pages().len() as u32
}

/// Build a new document containing only the selected pages.
///
/// Selected pages keep their source order; duplicate selections collapse.
/// The complement of the selection is deleted from a copy of the source,
/// then unreferenced objects are pruned and the rest renumbered.
pub fn extract_pages(doc: &Document, selection: &PageSet) -> Result<Document> {
    let total = page_count(doc);
    if total == 0 {
        return Err(SplitError::NoPages);
    }

    let keep: BTreeSet<u32> = selection.pages(total)?.into_iter().collect();

    let mut output = doc.clone();
    let delete: Vec<u32> = (1..=total).filter(|n| !keep.contains(n)).collect();
    if !delete.is_empty() {
        output.delete_pages(&delete);
    }
    output.prune_objects();
    output.renumber_objects();
    output.compress();

    log::debug!("Extracted {} of {} page(s)", keep.len(), total);
    Ok(output)
}

/// Extract `selection` from `input` into `output`; returns the number of
/// pages written.
pub async fn split_file(
    input: impl AsRef<Path>,
    selection: &PageSet,
    output: impl AsRef<Path>,
) -> Result<usize> {
    let doc = load_pdf(input).await?;
    let selection = selection.clone();
    let extracted = tokio::task::spawn_blocking(move || extract_pages(&doc, &selection)).await??;
    let pages_written = extracted.get_pages().len();
    save_pdf(extracted, output).await?;
    Ok(pages_written)
}
