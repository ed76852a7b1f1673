//! Imposition engine: places the pages of a single input PDF onto
//! press sheets for printing and post-press cutting, folding, or
//! binding.
//!
//! The synchronous core lives in [`plan`], [`paginate`], [`marks`], and
//! [`render`]; [`impose`] is the async entry point that runs that core
//! on a blocking thread, matching how CPU-bound PDF work is kept off
//! the async runtime elsewhere in this workspace.

pub mod cancel;
pub mod chunk;
pub mod constants;
pub mod marks;
pub mod paginate;
pub mod plan;
pub mod render;
pub mod surface;
pub mod types;

pub use cancel::{CancellationToken, NoopProgressSink, ProgressSink};
pub use paginate::{SheetPagination, SlotAssignment};
pub use plan::{PlannedSheet, Slot};
pub use surface::{
    EmbeddedHandle, ImageHandle, InputDocument, LineDash, LopdfSurface, LopdfSurfaceFactory,
    PageHandle, PdfSurface, PdfSurfaceFactory, Placement, RectanglePaint,
};
pub use types::{
    AlternateRotation, ImpositionReport, ImpositionSpec, ImpositionType, JobSlug,
    OrientationChoice, ReadingDirection, RowOffset, SlipColor,
};

use press_geometry::PrintError;

/// Run an imposition job. Loads `input_pdf_bytes`, plans and paginates
/// per `spec`, and renders every sheet, returning one `(bytes,
/// part_index, total_parts)` tuple per output chunk plus the job
/// report.
///
/// Runs the actual PDF work via [`tokio::task::spawn_blocking`] since
/// `lopdf` document construction is synchronous, CPU-bound work that
/// should not occupy an async worker thread.
pub async fn impose(
    input_pdf_bytes: Vec<u8>,
    spec: ImpositionSpec,
    slug: Option<JobSlug>,
    surface_factory: std::sync::Arc<dyn PdfSurfaceFactory>,
    token: CancellationToken,
    progress: std::sync::Arc<dyn ProgressSink>,
) -> Result<(Vec<(Vec<u8>, u32, u32)>, ImpositionReport), PrintError> {
    tracing::info!(
        imposition_type = ?spec.imposition_type,
        columns = spec.columns,
        rows = spec.rows,
        "starting imposition job"
    );

    let result = tokio::task::spawn_blocking(move || {
        let input = InputDocument::load(&input_pdf_bytes)?;
        render::render_job(&input, &spec, slug.as_ref(), surface_factory.as_ref(), &token, progress.as_ref())
    })
    .await
    .map_err(|e| PrintError::PdfRenderError(format!("imposition task panicked: {e}")))?;

    match &result {
        Ok((chunks, report)) => {
            tracing::info!(
                total_sheets = report.total_sheets,
                chunks = chunks.len(),
                "imposition job finished"
            );
        }
        Err(err) => {
            tracing::warn!(error = %err, "imposition job failed");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Dictionary, Document, Object};
    use press_catalog::PressSheetSize;
    use std::sync::Arc;

    fn minimal_pdf_bytes(page_count: usize) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let mut kids = Vec::new();
        for _ in 0..page_count {
            let mut page_dict = Dictionary::new();
            page_dict.set("Type", Object::Name(b"Page".to_vec()));
            page_dict.set("Parent", Object::Reference(pages_id));
            page_dict.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(306.0),
                    Object::Real(396.0),
                ]),
            );
            let id = doc.add_object(page_dict);
            kids.push(Object::Reference(id));
        }
        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Kids", Object::Array(kids));
        pages_dict.set("Count", Object::Integer(page_count as i64));
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
        let catalog_id =
            doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Catalog".to_vec())),
                ("Pages", Object::Reference(pages_id)),
            ]));
        doc.trailer.set("Root", catalog_id);
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    fn test_spec() -> ImpositionSpec {
        ImpositionSpec {
            selected_sheet: PressSheetSize::SHEET_11X17,
            columns: 2,
            rows: 2,
            bleed_inches: 0.0,
            horizontal_gutter_inches: 0.0,
            vertical_gutter_inches: 0.0,
            imposition_type: ImpositionType::Stack,
            orientation: OrientationChoice::Landscape,
            duplex: false,
            reading_direction: ReadingDirection::Ltr,
            row_offset: RowOffset::None,
            alternate_rotation: AlternateRotation::None,
            creep_inches: 0.0,
            include_slug: false,
            show_spine_marks: false,
            first_sheet_slip_color: SlipColor::None,
        }
    }

    #[tokio::test]
    async fn impose_end_to_end_produces_one_chunk() {
        let bytes = minimal_pdf_bytes(8);
        let (chunks, report) = impose(
            bytes,
            test_spec(),
            None,
            Arc::new(LopdfSurfaceFactory),
            CancellationToken::new(),
            Arc::new(NoopProgressSink),
        )
        .await
        .unwrap();
        assert_eq!(report.total_sheets, 2);
        assert_eq!(chunks.len(), 1);
    }

    #[tokio::test]
    async fn impose_rejects_garbage_input() {
        let err = impose(
            vec![1, 2, 3],
            test_spec(),
            None,
            Arc::new(LopdfSurfaceFactory),
            CancellationToken::new(),
            Arc::new(NoopProgressSink),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, PrintError::PdfParseError(_)));
    }
}
