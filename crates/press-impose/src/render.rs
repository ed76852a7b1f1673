//! Top-level render loop: ties planning, pagination, and marks together
//! against an injected [`PdfSurface`], chunked per
//! [`crate::chunk::ChunkPolicy`]. Nothing here names a `lopdf` type —
//! that lives entirely behind [`crate::surface::LopdfSurface`].

use crate::cancel::{CancellationToken, ProgressSink};
use crate::chunk::ChunkPolicy;
use crate::marks;
use crate::paginate::{self, SlotAssignment};
use crate::plan::{self, PlannedSheet};
use crate::surface::{InputDocument, PdfSurface, PdfSurfaceFactory, Placement};
use crate::types::{ImpositionReport, ImpositionSpec, JobSlug};
use press_geometry::PrintError;

const SLUG_STRIP_HEIGHT_PT: f64 = 40.0;

/// Run a full imposition job synchronously: plan once (assuming a
/// uniform input page size), paginate every sheet, render fronts and
/// backs in order, and flush chunks per the chunk policy. The async
/// `impose` entry point in `lib.rs` wraps this in `spawn_blocking`.
pub fn render_job(
    input: &InputDocument,
    spec: &ImpositionSpec,
    slug: Option<&JobSlug>,
    surface_factory: &dyn PdfSurfaceFactory,
    token: &CancellationToken,
    progress: &dyn ProgressSink,
) -> Result<(Vec<(Vec<u8>, u32, u32)>, ImpositionReport), PrintError> {
    let spec = spec.clone().normalized()?;
    let total_pages = input.page_count();
    let (page_w, page_h) = if total_pages > 0 { input.page_size_pt(0)? } else { (612.0, 792.0) };

    let planned = plan::plan_sheet(&spec, page_w, page_h)?;
    let sheets = paginate::paginate(&spec, total_pages, planned.columns, planned.rows);
    let total_sheets = sheets.len();
    let policy = ChunkPolicy::for_mode(spec.imposition_type);

    let mut chunks: Vec<Vec<u8>> = Vec::new();
    let mut surface = surface_factory.create();

    for sheet in &sheets {
        token.check()?;
        let is_first = sheet.sheet_index == 0;
        let is_last = sheet.sheet_index + 1 == total_sheets;
        let first_sheet_slip = is_first && spec.first_sheet_slip_color.rgb().is_some();

        render_side(
            surface.as_mut(),
            input,
            &spec,
            &planned,
            &sheet.front,
            sheet.sheet_index,
            total_sheets,
            false,
            is_first || is_last,
            first_sheet_slip,
            slug,
            token,
        )?;

        if let Some(back) = &sheet.back {
            render_side(
                surface.as_mut(),
                input,
                &spec,
                &planned,
                back,
                sheet.sheet_index,
                total_sheets,
                true,
                is_first || is_last,
                false,
                slug,
                token,
            )?;
        }

        progress.on_sheet_rendered(chunks.len(), sheet.sheet_index, total_sheets);

        // Evaluated once per sheet, after both sides have rendered, so a
        // duplex sheet's front and back always land in the same chunk
        // (spec: "chunk boundaries land on whole sheets").
        if policy.should_flush(surface.page_count(), surface.estimated_bytes()) {
            token.check()?;
            let finished = std::mem::replace(&mut surface, surface_factory.create());
            chunks.push(finished.finish()?);
        }
    }

    if surface.page_count() > 0 {
        chunks.push(surface.finish()?);
    }

    let total_parts = chunks.len().max(1) as u32;
    let tagged = chunks
        .into_iter()
        .enumerate()
        .map(|(i, bytes)| (bytes, i as u32 + 1, total_parts))
        .collect();

    Ok((
        tagged,
        ImpositionReport {
            total_sheets,
            slots_per_sheet: planned.columns * planned.rows,
            chosen_orientation: planned.orientation,
            warnings: planned.warnings.clone(),
        },
    ))
}

#[allow(clippy::too_many_arguments)]
fn render_side(
    surface: &mut dyn PdfSurface,
    input: &InputDocument,
    spec: &ImpositionSpec,
    planned: &PlannedSheet,
    assignments: &[SlotAssignment],
    sheet_index: usize,
    total_sheets: usize,
    is_back: bool,
    draw_spine_indicator: bool,
    first_sheet_slip: bool,
    slug: Option<&JobSlug>,
    token: &CancellationToken,
) -> Result<(), PrintError> {
    let page = surface.add_page(planned.sheet_width_pt, planned.sheet_height_pt);

    if first_sheet_slip {
        let (r, g, b) = spec.first_sheet_slip_color.rgb().expect("checked by caller");
        let trim_rects: Vec<_> = planned.slots.iter().map(|s| s.trim_rect).collect();
        marks::draw_first_sheet_slip(
            surface,
            page,
            planned.sheet_width_pt,
            planned.sheet_height_pt,
            SLUG_STRIP_HEIGHT_PT,
            (r, g, b),
            &trim_rects,
        );
    }

    for assignment in assignments {
        let slot = planned.slot(assignment.row, assignment.col);

        if let Some(page_index) = assignment.source_page {
            token.check()?;
            let embedded = surface.embed_page(input, page_index, None)?;
            let (src_w, src_h) = input.page_size_pt(page_index)?;
            let placement = compute_placement(slot, src_w, src_h, assignment);
            surface.draw_embedded(page, embedded, placement);
        }

        marks::draw_crop_marks(surface, page, slot);

        if spec.show_spine_marks && draw_spine_indicator {
            marks::draw_spine_indicator(surface, page, &slot.trim_rect, assignment.spine_is_left);
        }
        marks::draw_spine_slug_text(
            surface,
            page,
            &slot.trim_rect,
            press_geometry::in_to_pt(spec.bleed_inches),
            assignment.spine_is_left,
            is_back,
        );
    }

    if spec.include_slug {
        if let Some(slug) = slug {
            token.check()?;
            let payload = slug.qr_payload(sheet_index, total_sheets);
            let summary = slug.summary_line(sheet_index, total_sheets);
            marks::draw_job_slug(surface, page, &payload, &summary)?;
        }
    }

    Ok(())
}

/// Compute where and at what scale a source page lands in its slot:
/// centered and scaled to fit the cell (bleed is already inside the
/// input page, so the cell — not the inset trim rectangle — is the
/// target), shifted by the booklet creep offset, and rotated 180
/// degrees when the assignment calls for a work-and-turn flip.
fn compute_placement(slot: &plan::Slot, src_w: f64, src_h: f64, assignment: &SlotAssignment) -> Placement {
    let (rect, scale) = slot.cell_rect.center_fit(src_w, src_h);
    let x = rect.x + assignment.creep_offset_pt;

    if assignment.rotated {
        Placement { x: x + rect.width, y: rect.y + rect.height, scale, rotated: true }
    } else {
        Placement { x, y: rect.y, scale, rotated: false }
    }
}
