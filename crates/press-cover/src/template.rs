//! Two-page cover template emitter: an outside-cover spread with spine
//! and safety guides, and an inside-cover spread with the glue-safe band
//! added on top of the same guides.
//!
//! Draws through the same [`PdfSurface`] trait `press-impose` renders
//! imposed sheets through, reusing [`LopdfSurface`] rather than building
//! a second `lopdf` document assembler for this crate.

use press_geometry::{in_to_pt, PrintError, Rect};
use press_impose::{LineDash, LopdfSurface, PageHandle, PdfSurface, RectanglePaint};

use crate::constants::{
    BLACK, CYAN, GLUE_PINK, GUIDE_LINE_WIDTH_PT, HINGE_OFFSET_IN, SAFETY_MARGIN_IN,
    SPINE_LINE_WIDTH_PT, TRIM_LINE_WIDTH_PT,
};
use crate::spine::CoverSpread;

const LABEL_FONT_SIZE: f64 = 9.0;

/// Geometry needed to lay out the template, independent of the spine
/// math that produced the spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverTemplateSpec {
    pub trim_width_in: f64,
    pub trim_height_in: f64,
    pub bleed_in: f64,
    pub spread: CoverSpread,
}

impl CoverTemplateSpec {
    fn trim_rect_pt(&self) -> Rect {
        let bleed = in_to_pt(self.bleed_in);
        Rect::new(bleed, bleed, in_to_pt(self.spread.spread_width_in) - 2.0 * bleed, in_to_pt(self.trim_height_in))
    }

    fn back_panel_x_pt(&self) -> f64 {
        in_to_pt(self.bleed_in)
    }

    fn spine_left_x_pt(&self) -> f64 {
        self.back_panel_x_pt() + in_to_pt(self.trim_width_in)
    }

    fn spine_right_x_pt(&self) -> f64 {
        self.spine_left_x_pt() + in_to_pt(self.spread.spine_width_in)
    }
}

/// Render the two-page cover template PDF: page 1 is the outside cover,
/// page 2 is the inside cover.
pub fn emit_cover_template(spec: &CoverTemplateSpec) -> Result<Vec<u8>, PrintError> {
    let width_pt = in_to_pt(spec.spread.spread_width_in);
    let height_pt = in_to_pt(spec.spread.spread_height_in);

    let mut surface = LopdfSurface::new();

    let outside = surface.add_page(width_pt, height_pt);
    draw_outside_cover(&mut surface, outside, spec);

    let inside = surface.add_page(width_pt, height_pt);
    draw_inside_cover(&mut surface, inside, spec);

    Box::new(surface).finish()
}

fn draw_shared_guides(surface: &mut dyn PdfSurface, page: PageHandle, spec: &CoverTemplateSpec) {
    let trim = spec.trim_rect_pt();
    surface.draw_rectangle(
        page,
        trim,
        RectanglePaint::Stroke { rgb: BLACK, width_pt: TRIM_LINE_WIDTH_PT, dash: LineDash::Solid },
    );

    let spine_left = spec.spine_left_x_pt();
    let spine_right = spec.spine_right_x_pt();
    surface.draw_line(page, spine_left, trim.y, spine_left, trim.top(), SPINE_LINE_WIDTH_PT, CYAN, LineDash::Solid);
    surface.draw_line(page, spine_right, trim.y, spine_right, trim.top(), SPINE_LINE_WIDTH_PT, CYAN, LineDash::Solid);

    let hinge_offset_pt = in_to_pt(HINGE_OFFSET_IN);
    for x in [spine_left - hinge_offset_pt, spine_left + hinge_offset_pt, spine_right - hinge_offset_pt, spine_right + hinge_offset_pt]
    {
        surface.draw_line(page, x, trim.y, x, trim.top(), GUIDE_LINE_WIDTH_PT, BLACK, LineDash::Dashed);
    }
}

fn draw_outside_cover(surface: &mut dyn PdfSurface, page: PageHandle, spec: &CoverTemplateSpec) {
    let trim = spec.trim_rect_pt();
    let margin_pt = in_to_pt(SAFETY_MARGIN_IN);
    let spine_left = spec.spine_left_x_pt();
    let spine_right = spec.spine_right_x_pt();

    draw_shared_guides(surface, page, spec);

    let back_safety = Rect::new(
        trim.x + margin_pt,
        trim.y + margin_pt,
        (spine_left - trim.x - 2.0 * margin_pt).max(0.0),
        (trim.height - 2.0 * margin_pt).max(0.0),
    );
    surface.draw_rectangle(
        page,
        back_safety,
        RectanglePaint::Stroke { rgb: BLACK, width_pt: GUIDE_LINE_WIDTH_PT, dash: LineDash::Dashed },
    );

    let front_safety = Rect::new(
        spine_right + margin_pt,
        trim.y + margin_pt,
        (trim.right() - spine_right - 2.0 * margin_pt).max(0.0),
        (trim.height - 2.0 * margin_pt).max(0.0),
    );
    surface.draw_rectangle(
        page,
        front_safety,
        RectanglePaint::Stroke { rgb: BLACK, width_pt: GUIDE_LINE_WIDTH_PT, dash: LineDash::Dashed },
    );

    draw_label_centered(surface, page, back_safety.center_x(), trim.y - 14.0, "BACK COVER");
    draw_label_centered(surface, page, (spine_left + spine_right) / 2.0, trim.y - 14.0, "SPINE");
    draw_label_centered(surface, page, front_safety.center_x(), trim.y - 14.0, "FRONT COVER");
}

fn draw_inside_cover(surface: &mut dyn PdfSurface, page: PageHandle, spec: &CoverTemplateSpec) {
    let trim = spec.trim_rect_pt();
    let hinge_offset_pt = in_to_pt(HINGE_OFFSET_IN);
    let spine_left = spec.spine_left_x_pt();
    let spine_right = spec.spine_right_x_pt();

    let band_x = spine_left - hinge_offset_pt;
    let band_width = (spine_right - spine_left) + 2.0 * hinge_offset_pt;

    surface.draw_rectangle(page, Rect::new(band_x, trim.y, band_width, trim.height), RectanglePaint::Fill { rgb: GLUE_PINK });
    draw_shared_guides(surface, page, spec);
    draw_label_centered(surface, page, (spine_left + spine_right) / 2.0, trim.center_y(), "NO PRINTING - GLUE AREA");

    draw_label_centered(surface, page, (trim.x + spine_left) / 2.0, trim.y - 14.0, "INSIDE BACK COVER");
    draw_label_centered(surface, page, (spine_right + trim.right()) / 2.0, trim.y - 14.0, "INSIDE FRONT COVER");
}

fn draw_label_centered(surface: &mut dyn PdfSurface, page: PageHandle, center_x: f64, y: f64, text: &str) {
    let width = text.len() as f64 * LABEL_FONT_SIZE * press_impose::constants::HELVETICA_CHAR_WIDTH_RATIO;
    surface.draw_text(page, center_x - width / 2.0, y, LABEL_FONT_SIZE, text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spine::{compute_spread, SpineInputs};

    fn sample_spec() -> CoverTemplateSpec {
        let spread = compute_spread(
            SpineInputs { interior_pages: 96, interior_ppi: 400.0, cover_caliper_in: 0.0095 },
            6.0,
            9.0,
            0.125,
        )
        .unwrap();
        CoverTemplateSpec { trim_width_in: 6.0, trim_height_in: 9.0, bleed_in: 0.125, spread }
    }

    #[test]
    fn emits_a_two_page_document() {
        let bytes = emit_cover_template(&sample_spec()).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn outside_cover_draws_two_spine_lines() {
        let spec = sample_spec();
        let mut surface = LopdfSurface::new();
        let page = surface.add_page(
            in_to_pt(spec.spread.spread_width_in),
            in_to_pt(spec.spread.spread_height_in),
        );
        let before = surface.estimated_bytes();
        draw_outside_cover(&mut surface, page, &spec);
        assert!(surface.estimated_bytes() > before);
    }

    #[test]
    fn inside_cover_includes_the_glue_band() {
        let spec = sample_spec();
        let mut surface = LopdfSurface::new();
        let page = surface.add_page(
            in_to_pt(spec.spread.spread_width_in),
            in_to_pt(spec.spread.spread_height_in),
        );
        draw_inside_cover(&mut surface, page, &spec);
        assert!(surface.estimated_bytes() > 0);
    }
}
