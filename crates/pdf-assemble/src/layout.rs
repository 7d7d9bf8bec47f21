//! Fit-to-page geometry for placing one image on one page

/// Computed placement of a scaled image on a page, in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
    /// Uniform scale factor applied to both axes
    pub ratio: f32,
}

/// Inscribe an image within the margin-inset region of a page.
///
/// The scale factor is uniform so aspect ratio is preserved. The scaled
/// image is centered on the full page, not the inset region; with equal
/// margins on both sides these coincide.
pub fn fit_to_page(
    img_width: u32,
    img_height: u32,
    page_width_mm: f32,
    page_height_mm: f32,
    margin_mm: f32,
) -> Placement {
    let avail_width = page_width_mm - 2.0 * margin_mm;
    let avail_height = page_height_mm - 2.0 * margin_mm;

    let scale_w = avail_width / img_width as f32;
    let scale_h = avail_height / img_height as f32;
    let ratio = scale_w.min(scale_h);

    let width_mm = img_width as f32 * ratio;
    let height_mm = img_height as f32 * ratio;

    Placement {
        x_mm: (page_width_mm - width_mm) / 2.0,
        y_mm: (page_height_mm - height_mm) / 2.0,
        width_mm,
        height_mm,
        ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A4_PORTRAIT: (f32, f32) = (210.0, 297.0);

    #[test]
    fn test_ratio_is_min_of_both_axes() {
        let (page_w, page_h) = A4_PORTRAIT;

        // Tall image: height-limited
        let p = fit_to_page(100, 200, page_w, page_h, 10.0);
        assert!((p.ratio - (277.0_f32 / 200.0)).abs() < 1e-4);

        // Wide image: width-limited
        let p = fit_to_page(400, 100, page_w, page_h, 10.0);
        assert!((p.ratio - (190.0_f32 / 400.0)).abs() < 1e-4);

        // Square image on portrait A4: width-limited
        let p = fit_to_page(300, 300, page_w, page_h, 10.0);
        assert!((p.ratio - (190.0_f32 / 300.0)).abs() < 1e-4);
    }

    #[test]
    fn test_scaled_image_fits_inside_margins() {
        let (page_w, page_h) = A4_PORTRAIT;
        let p = fit_to_page(400, 100, page_w, page_h, 10.0);

        assert!(p.width_mm <= 190.0 + 1e-3);
        assert!(p.height_mm <= 277.0 + 1e-3);
        assert!(p.x_mm >= 10.0 - 1e-3);
        assert!(p.y_mm >= 10.0 - 1e-3);
    }

    #[test]
    fn test_centered_on_full_page() {
        let (page_w, page_h) = A4_PORTRAIT;
        let p = fit_to_page(300, 300, page_w, page_h, 10.0);

        assert!((p.x_mm - (page_w - p.width_mm) / 2.0).abs() < 1e-4);
        assert!((p.y_mm - (page_h - p.height_mm) / 2.0).abs() < 1e-4);
        // Symmetric placement
        assert!((p.x_mm + p.width_mm + p.x_mm - page_w).abs() < 1e-3);
        assert!((p.y_mm + p.height_mm + p.y_mm - page_h).abs() < 1e-3);
    }

    #[test]
    fn test_small_image_scales_up_to_ratio() {
        // The ratio is applied as-is, so small sources grow to fill the
        // inset region on the limiting axis.
        let p = fit_to_page(10, 10, 210.0, 297.0, 10.0);
        assert!((p.ratio - 19.0).abs() < 1e-4);
        assert!((p.width_mm - 190.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_margin_uses_full_page() {
        let p = fit_to_page(210, 297, 210.0, 297.0, 0.0);
        assert!((p.ratio - 1.0).abs() < 1e-4);
        assert!(p.x_mm.abs() < 1e-3);
        assert!(p.y_mm.abs() < 1e-3);
    }
}
