use pdf_assemble::*;

fn png_source(name: &str, width: u32, height: u32) -> SourceImage {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 60, 60]));
    let mut buf = Vec::new();
    img.write_with_encoder(image::codecs::png::PngEncoder::new(&mut buf))
        .unwrap();
    SourceImage {
        name: name.to_string(),
        kind: ImageKind::Png,
        data: buf,
    }
}

fn jpeg_source(name: &str, width: u32, height: u32) -> SourceImage {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Vec::new();
    img.write_with_encoder(image::codecs::jpeg::JpegEncoder::new_with_quality(
        &mut buf, 90,
    ))
    .unwrap();
    SourceImage {
        name: name.to_string(),
        kind: ImageKind::Jpeg,
        data: buf,
    }
}

fn gif_source(name: &str, width: u32, height: u32) -> SourceImage {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([40, 160, 90, 255]));
    let mut buf = Vec::new();
    {
        let mut encoder = image::codecs::gif::GifEncoder::new(&mut buf);
        encoder.encode_frame(image::Frame::new(img)).unwrap();
    }
    SourceImage {
        name: name.to_string(),
        kind: ImageKind::Gif,
        data: buf,
    }
}

fn webp_source(name: &str, width: u32, height: u32) -> SourceImage {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([10, 10, 200]));
    let mut buf = Vec::new();
    img.write_with_encoder(image::codecs::webp::WebPEncoder::new_lossless(&mut buf))
        .unwrap();
    SourceImage {
        name: name.to_string(),
        kind: ImageKind::WebP,
        data: buf,
    }
}

#[test]
fn test_assembly_of_empty_collection_fails() {
    let result = assemble_pdf_bytes(&[], &PageSettings::default());
    assert!(matches!(result, Err(AssembleError::NoImages)));
}

#[test]
fn test_assembly_produces_one_page_per_image() {
    let sources = vec![
        png_source("tall.png", 100, 200),
        jpeg_source("wide.jpg", 400, 100),
        gif_source("square.gif", 300, 300),
    ];

    let bytes = assemble_pdf_bytes(&sources, &PageSettings::default()).unwrap();

    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
}

#[test]
fn test_fit_ratio_for_reference_entries() {
    // Portrait A4 with a 10 mm margin leaves a 190x277 mm region.
    let cases = [
        ((100u32, 200u32), (277.0_f32 / 200.0)),
        ((400, 100), 190.0 / 400.0),
        ((300, 300), 190.0 / 300.0),
    ];

    for ((w, h), expected) in cases {
        let p = fit_to_page(w, h, 210.0, 297.0, 10.0);
        assert!(
            (p.ratio - expected).abs() < 1e-4,
            "{}x{}: got ratio {}, expected {}",
            w,
            h,
            p.ratio,
            expected
        );
        assert!((p.x_mm - (210.0 - p.width_mm) / 2.0).abs() < 1e-4);
        assert!((p.y_mm - (297.0 - p.height_mm) / 2.0).abs() < 1e-4);
    }
}

#[test]
fn test_png_sources_stay_png() {
    let source = png_source("keep.png", 8, 8);
    let decoded = image::load_from_memory(&source.data).unwrap();

    let (bytes, encoding) = encode_for_pdf(source.kind, &source.data, &decoded, 80).unwrap();

    assert_eq!(encoding, OutputEncoding::Png);
    assert_eq!(bytes, source.data);
}

#[test]
fn test_non_png_sources_become_jpeg() {
    for source in [
        jpeg_source("a.jpg", 8, 8),
        gif_source("b.gif", 8, 8),
        webp_source("c.webp", 8, 8),
    ] {
        let decoded = image::load_from_memory(&source.data).unwrap();
        let (bytes, encoding) = encode_for_pdf(source.kind, &source.data, &decoded, 80).unwrap();

        assert_eq!(encoding, OutputEncoding::Jpeg, "{}", source.name);
        // JPEG SOI marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8], "{}", source.name);
    }
}

#[test]
fn test_quality_drives_jpeg_size() {
    let source = jpeg_source("gradient.jpg", 128, 128);
    let decoded = image::load_from_memory(&source.data).unwrap();

    let (low, _) = encode_for_pdf(source.kind, &source.data, &decoded, 50).unwrap();
    let (high, _) = encode_for_pdf(source.kind, &source.data, &decoded, 100).unwrap();

    assert!(low.len() < high.len());
}

#[test]
fn test_corrupt_image_aborts_whole_run() {
    let mut broken = png_source("broken.png", 16, 16);
    broken.data.truncate(20);

    let sources = vec![png_source("ok.png", 16, 16), broken];
    let result = assemble_pdf_bytes(&sources, &PageSettings::default());

    assert!(result.is_err());
}

#[tokio::test]
async fn test_assemble_to_file_writes_a_readable_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.pdf");

    let sources = vec![png_source("a.png", 40, 40), jpeg_source("b.jpg", 40, 60)];
    let settings = PageSettings {
        orientation: Orientation::Landscape,
        margin_mm: 5.0,
        quality: 75,
    };

    let pages = assemble_to_file(sources, &settings, &output)
        .await
        .unwrap();

    assert_eq!(pages, 2);
    let bytes = std::fs::read(&output).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn test_settings_out_of_bounds_are_clamped_for_assembly() {
    // A margin past the bound would otherwise shrink the drawing region
    // below the clamp's; the clamped run must match margin = 30.
    let source = png_source("a.png", 100, 100);

    let wild = PageSettings {
        orientation: Orientation::Portrait,
        margin_mm: 500.0,
        quality: 0,
    };
    let bytes = assemble_pdf_bytes(std::slice::from_ref(&source), &wild).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}
