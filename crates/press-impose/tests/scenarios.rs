//! Black-box coverage of the worked imposition scenarios, driven through
//! the crate's public `impose` entry point rather than its internal
//! pagination/rendering functions.

use std::sync::Arc;

use lopdf::{Dictionary, Document, Object};
use press_catalog::PressSheetSize;
use press_impose::{
    AlternateRotation, CancellationToken, ImpositionSpec, ImpositionType, LopdfSurfaceFactory,
    NoopProgressSink, OrientationChoice, ReadingDirection, RowOffset, SlipColor,
};

fn test_pdf_bytes(page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (0..page_count)
        .map(|_| {
            let mut page = Dictionary::new();
            page.set("Type", Object::Name(b"Page".to_vec()));
            page.set("Parent", Object::Reference(pages_id));
            page.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(612.0),
                    Object::Real(792.0),
                ]),
            );
            Object::Reference(doc.add_object(page))
        })
        .collect();

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", Object::Integer(page_count as i64));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

fn base_spec(imposition_type: ImpositionType, columns: u32, rows: u32, duplex: bool, bleed_inches: f64) -> ImpositionSpec {
    ImpositionSpec {
        selected_sheet: PressSheetSize::SHEET_11X17,
        columns,
        rows,
        bleed_inches,
        horizontal_gutter_inches: 0.0,
        vertical_gutter_inches: 0.0,
        imposition_type,
        orientation: OrientationChoice::Landscape,
        duplex,
        reading_direction: ReadingDirection::Ltr,
        row_offset: RowOffset::None,
        alternate_rotation: AlternateRotation::None,
        creep_inches: 0.0,
        include_slug: false,
        show_spine_marks: false,
        first_sheet_slip_color: SlipColor::None,
    }
}

/// Scenario A: 8-page input, simplex stack, 2x2, 11x17 landscape.
#[tokio::test]
async fn scenario_a_stack_2x2_duplex_off() {
    let bytes = test_pdf_bytes(8);
    let spec = base_spec(ImpositionType::Stack, 2, 2, false, 0.0);

    let (chunks, report) = press_impose::impose(
        bytes,
        spec,
        None,
        Arc::new(LopdfSurfaceFactory),
        CancellationToken::new(),
        Arc::new(NoopProgressSink),
    )
    .await
    .unwrap();

    assert_eq!(report.total_sheets, 2);
    assert_eq!(report.slots_per_sheet, 4);
    assert_eq!(chunks.len(), 1);
    assert!(!chunks[0].0.is_empty());
}

/// Scenario B: 16-page booklet, bleed 0.125in, no creep — 4 sheets out.
#[tokio::test]
async fn scenario_b_booklet_16_pages() {
    let bytes = test_pdf_bytes(16);
    let mut spec = base_spec(ImpositionType::Booklet, 2, 1, true, 0.125);
    spec = spec.normalized().unwrap();

    let (chunks, report) = press_impose::impose(
        bytes,
        spec,
        None,
        Arc::new(LopdfSurfaceFactory),
        CancellationToken::new(),
        Arc::new(NoopProgressSink),
    )
    .await
    .unwrap();

    assert_eq!(report.total_sheets, 4);
    assert!(!chunks.is_empty());
}

/// Scenario C: 8-page input, collate_cut 2-up duplex — 2 sheets out.
#[tokio::test]
async fn scenario_c_collate_cut_2up_duplex() {
    let bytes = test_pdf_bytes(8);
    let spec = base_spec(ImpositionType::CollateCut, 2, 1, true, 0.0);

    let (_chunks, report) = press_impose::impose(
        bytes,
        spec,
        None,
        Arc::new(LopdfSurfaceFactory),
        CancellationToken::new(),
        Arc::new(NoopProgressSink),
    )
    .await
    .unwrap();

    assert_eq!(report.total_sheets, 2);
    assert_eq!(report.slots_per_sheet, 2);
}

/// Garbage input is rejected with a typed parse error rather than a panic.
#[tokio::test]
async fn malformed_input_is_a_typed_error_not_a_panic() {
    let spec = base_spec(ImpositionType::Stack, 2, 2, false, 0.0);
    let err = press_impose::impose(
        b"not a pdf".to_vec(),
        spec,
        None,
        Arc::new(LopdfSurfaceFactory),
        CancellationToken::new(),
        Arc::new(NoopProgressSink),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, press_geometry::PrintError::PdfParseError(_)));
}

/// Cancelling before the job starts surfaces as `PrintError::Cancelled`
/// rather than partial output.
#[tokio::test]
async fn cancellation_before_start_short_circuits() {
    let bytes = test_pdf_bytes(8);
    let spec = base_spec(ImpositionType::Stack, 2, 2, false, 0.0);
    let token = CancellationToken::new();
    token.cancel();

    let err = press_impose::impose(
        bytes,
        spec,
        None,
        Arc::new(LopdfSurfaceFactory),
        token,
        Arc::new(NoopProgressSink),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, press_geometry::PrintError::Cancelled));
}
