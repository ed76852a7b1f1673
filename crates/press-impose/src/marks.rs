//! Printer's marks: crop marks, spine indicator, spine slug text, and the
//! job slug (QR code plus human-readable line). Every function draws
//! straight onto a [`PdfSurface`] page rather than returning a content
//! fragment, so none of this module names a `lopdf` type.

use crate::constants::{CROP_MARK_GAP, CROP_MARK_LENGTH, CROP_MARK_WIDTH, SLUG_FONT_SIZE, SLUG_QR_SIZE_CM};
use crate::plan::Slot;
use crate::surface::{LineDash, PageHandle, PdfSurface, RectanglePaint};
use press_geometry::{PrintError, Rect};

const BLACK: (f64, f64, f64) = (0.0, 0.0, 0.0);

/// Crop marks at the four corners of a slot's trim rectangle, each leg
/// suppressed on sides shared with a neighboring slot (no mark needed
/// where two trim rectangles abut).
pub fn draw_crop_marks(surface: &mut dyn PdfSurface, page: PageHandle, slot: &Slot) {
    let r = &slot.trim_rect;

    if !slot.has_left_neighbor {
        corner_leg_vertical(surface, page, r.x, r.top(), 1.0);
        corner_leg_vertical(surface, page, r.x, r.y, -1.0);
    }
    if !slot.has_right_neighbor {
        corner_leg_vertical(surface, page, r.right(), r.top(), 1.0);
        corner_leg_vertical(surface, page, r.right(), r.y, -1.0);
    }
    if !slot.has_top_neighbor {
        corner_leg_horizontal(surface, page, r.x, r.top(), -1.0);
        corner_leg_horizontal(surface, page, r.right(), r.top(), 1.0);
    }
    if !slot.has_bottom_neighbor {
        corner_leg_horizontal(surface, page, r.x, r.y, -1.0);
        corner_leg_horizontal(surface, page, r.right(), r.y, 1.0);
    }
}

/// A vertical mark leg standing off from `(x, y)` by the crop gap, then
/// running `CROP_MARK_LENGTH` further in `direction` (+1 up, -1 down).
fn corner_leg_vertical(surface: &mut dyn PdfSurface, page: PageHandle, x: f64, y: f64, direction: f64) {
    let y0 = y + direction * CROP_MARK_GAP;
    let y1 = y0 + direction * CROP_MARK_LENGTH;
    surface.draw_line(page, x, y0, x, y1, CROP_MARK_WIDTH, BLACK, LineDash::Solid);
}

/// A horizontal mark leg standing off from `(x, y)` by the crop gap,
/// then running `CROP_MARK_LENGTH` further in `direction` (+1 right, -1
/// left).
fn corner_leg_horizontal(surface: &mut dyn PdfSurface, page: PageHandle, x: f64, y: f64, direction: f64) {
    let x0 = x + direction * CROP_MARK_GAP;
    let x1 = x0 + direction * CROP_MARK_LENGTH;
    surface.draw_line(page, x0, y, x1, y, CROP_MARK_WIDTH, BLACK, LineDash::Solid);
}

/// Small chevron plus "SPINE" label below the trim rectangle's binding
/// edge (two line legs rather than a filled triangle, since the surface
/// exposes line/rectangle/text primitives only). Only meaningful on the
/// first and last sheets of a job; callers decide when to call this.
pub fn draw_spine_indicator(surface: &mut dyn PdfSurface, page: PageHandle, trim_rect: &Rect, spine_is_left: bool) {
    let (edge_x, tick_dir) = if spine_is_left { (trim_rect.x, -1.0) } else { (trim_rect.right(), 1.0) };
    let base_y = trim_rect.y - CROP_MARK_GAP;
    let size = 6.0;

    let tip_x = edge_x + tick_dir * size;
    let apex_x = edge_x + tick_dir * size / 2.0;
    let apex_y = base_y - size;
    surface.draw_line(page, edge_x, base_y, apex_x, apex_y, 0.75, BLACK, LineDash::Solid);
    surface.draw_line(page, apex_x, apex_y, tip_x, base_y, 0.75, BLACK, LineDash::Solid);

    let label_x = edge_x + tick_dir * (size + 2.0);
    surface.draw_text(page, label_x, base_y - size - SLUG_FONT_SIZE, SLUG_FONT_SIZE, "SPINE");
}

/// "FRONT SPINE" / "BACK SPINE" repeated vertically inside the bleed
/// strip along the binding edge.
pub fn draw_spine_slug_text(
    surface: &mut dyn PdfSurface,
    page: PageHandle,
    trim_rect: &Rect,
    bleed_pt: f64,
    spine_is_left: bool,
    is_back: bool,
) {
    if bleed_pt <= 0.0 {
        return;
    }
    let label = if is_back { "BACK SPINE" } else { "FRONT SPINE" };
    let x = if spine_is_left { trim_rect.x - bleed_pt / 2.0 } else { trim_rect.right() + bleed_pt / 2.0 };

    let line_height = SLUG_FONT_SIZE * 1.4;
    let mut y = trim_rect.y + line_height;
    while y < trim_rect.top() {
        draw_text_centered(surface, page, x, y, SLUG_FONT_SIZE, label);
        y += line_height * 3.0;
    }
}

/// The job slug: a QR code encoding `qr_payload` at the spec's 2 cm
/// target size, plus a single line of human-readable text, both placed
/// within a strip along the bottom of the sheet.
pub fn draw_job_slug(
    surface: &mut dyn PdfSurface,
    page: PageHandle,
    qr_payload: &str,
    summary_line: &str,
) -> Result<(), PrintError> {
    let qr_size_pt = press_geometry::mm_to_pt(SLUG_QR_SIZE_CM * 10.0);
    let margin = 10.0;
    let qr_x = margin;
    let qr_y = margin;

    let code = qrcode::QrCode::new(qr_payload.as_bytes())
        .map_err(|e| PrintError::QrGenerationError(e.to_string()))?;
    let width = code.width();
    let colors = code.to_colors();
    let module_size = qr_size_pt / width as f64;

    for row in 0..width {
        for col in 0..width {
            if colors[row * width + col] == qrcode::Color::Dark {
                let x = qr_x + col as f64 * module_size;
                let y = qr_y + (width - 1 - row) as f64 * module_size;
                surface.draw_rectangle(
                    page,
                    Rect::new(x, y, module_size, module_size),
                    RectanglePaint::Fill { rgb: BLACK },
                );
            }
        }
    }

    let text_x = qr_x + qr_size_pt + margin;
    let text_y = qr_y + qr_size_pt / 2.0 - SLUG_FONT_SIZE / 2.0;
    surface.draw_text(page, text_x, text_y, SLUG_FONT_SIZE, summary_line);
    Ok(())
}

/// Fills the entire sheet with `rgb`, then knocks every slot's trim
/// rectangle and the slug strip back out to white, producing a colored
/// separator sheet that still shows the layout and slug. Used for the
/// first-sheet slip feature.
pub fn draw_first_sheet_slip(
    surface: &mut dyn PdfSurface,
    page: PageHandle,
    sheet_width_pt: f64,
    sheet_height_pt: f64,
    slug_strip_height_pt: f64,
    rgb: (f64, f64, f64),
    slot_trim_rects: &[Rect],
) {
    surface.draw_rectangle(page, Rect::new(0.0, 0.0, sheet_width_pt, sheet_height_pt), RectanglePaint::Fill { rgb });
    for rect in slot_trim_rects {
        surface.draw_rectangle(page, *rect, RectanglePaint::Fill { rgb: (1.0, 1.0, 1.0) });
    }
    surface.draw_rectangle(
        page,
        Rect::new(0.0, 0.0, sheet_width_pt, slug_strip_height_pt),
        RectanglePaint::Fill { rgb: (1.0, 1.0, 1.0) },
    );
}

fn draw_text_centered(surface: &mut dyn PdfSurface, page: PageHandle, x: f64, y: f64, size: f64, text: &str) {
    let width = text.len() as f64 * size * crate::constants::HELVETICA_CHAR_WIDTH_RATIO;
    surface.draw_text(page, x - width / 2.0, y, size, text);
}
