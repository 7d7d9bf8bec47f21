//! Sequential page assembly against printpdf

use crate::layout::fit_to_page;
use crate::settings::PageSettings;
use crate::types::{AssembleError, ImageKind, Result};
use image::GenericImageView;
use printpdf::{Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, RawImage, XObjectTransform};
use std::path::Path;

/// Image bytes queued for assembly, detached from any UI resources
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub name: String,
    pub kind: ImageKind,
    pub data: Vec<u8>,
}

/// Output encoding chosen per entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEncoding {
    Png,
    Jpeg,
}

/// Default output name derived from the current time
pub fn default_output_name() -> String {
    format!("images-{}.pdf", chrono::Local::now().format("%Y%m%d-%H%M%S"))
}

/// Assemble and write to `output_path`; returns the page count.
pub async fn assemble_to_file(
    images: Vec<SourceImage>,
    settings: &PageSettings,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    let settings = settings.clone();
    let output_path = output_path.as_ref().to_owned();
    let page_count = images.len();

    // PDF generation is CPU-bound, spawn blocking
    let bytes =
        tokio::task::spawn_blocking(move || assemble_pdf_bytes(&images, &settings)).await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(page_count)
}

/// Build the PDF in memory: one page per image, strictly in order.
///
/// Any decode or embed failure aborts the whole run; no partial document
/// is returned.
pub fn assemble_pdf_bytes(images: &[SourceImage], settings: &PageSettings) -> Result<Vec<u8>> {
    if images.is_empty() {
        return Err(AssembleError::NoImages);
    }

    let settings = settings.clamped();
    let (page_width_mm, page_height_mm) = settings.page_size_mm();

    let mut doc = PdfDocument::new("Images");
    let mut warnings = Vec::new();

    for source in images {
        let decoded = image::load_from_memory(&source.data)?;
        let (img_width, img_height) = decoded.dimensions();

        let placement = fit_to_page(
            img_width,
            img_height,
            page_width_mm,
            page_height_mm,
            settings.margin_mm,
        );

        let (encoded, _encoding) =
            encode_for_pdf(source.kind, &source.data, &decoded, settings.quality)?;
        let raw = RawImage::decode_from_bytes(&encoded, &mut warnings).map_err(|e| {
            AssembleError::Pdf(format!("{} could not be embedded: {}", source.name, e))
        })?;
        let image_id = doc.add_image(&raw);

        // At 72 dpi one pixel maps to one point, so the scale factors are
        // target size in points over intrinsic size in pixels.
        let target_width_pt = Mm(placement.width_mm).into_pt().0;
        let target_height_pt = Mm(placement.height_mm).into_pt().0;

        let ops = vec![Op::UseXobject {
            id: image_id.clone(),
            transform: XObjectTransform {
                translate_x: Some(Mm(placement.x_mm).into_pt()),
                translate_y: Some(Mm(placement.y_mm).into_pt()),
                rotate: None,
                scale_x: Some(target_width_pt / img_width as f32),
                scale_y: Some(target_height_pt / img_height as f32),
                dpi: Some(72.0),
            },
        }];

        doc.pages
            .push(PdfPage::new(Mm(page_width_mm), Mm(page_height_mm), ops));
    }

    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}

/// Pick the output encoding for one entry and produce the bytes to embed.
///
/// PNG sources keep their original bytes; every other accepted format is
/// transcoded to JPEG at `quality`. The decision is per entry, so a mixed
/// collection round-trips formats unevenly.
pub fn encode_for_pdf(
    kind: ImageKind,
    original: &[u8],
    decoded: &image::DynamicImage,
    quality: u8,
) -> Result<(Vec<u8>, OutputEncoding)> {
    match kind {
        ImageKind::Png => Ok((original.to_vec(), OutputEncoding::Png)),
        ImageKind::Jpeg | ImageKind::WebP | ImageKind::Gif => {
            let mut buf = Vec::new();
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality);
            decoded.to_rgb8().write_with_encoder(encoder)?;
            Ok((buf, OutputEncoding::Jpeg))
        }
    }
}
