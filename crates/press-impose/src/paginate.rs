//! Pagination phase: assigning input-page indices to grid slots for each
//! of the four imposition modes, plus the cross-cutting transforms that
//! apply on top of the base assignment (work-and-turn, reading
//! direction, alternate rotation, booklet creep).

use crate::types::{AlternateRotation, ImpositionSpec, ImpositionType, ReadingDirection};

/// One slot's pagination result: which input page (if any) lands there,
/// whether it needs a 180-degree rotation, a signed creep offset along
/// the column axis (booklet only), and the spine-slug polarity to use
/// when drawing marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotAssignment {
    pub row: usize,
    pub col: usize,
    pub source_page: Option<usize>,
    pub rotated: bool,
    pub creep_offset_pt: f64,
    /// True if the binding edge is to the left of this slot's trim
    /// rectangle.
    pub spine_is_left: bool,
}

#[derive(Debug, Clone)]
pub struct SheetPagination {
    pub sheet_index: usize,
    pub front: Vec<SlotAssignment>,
    pub back: Option<Vec<SlotAssignment>>,
}

fn ceil_div(a: usize, b: usize) -> usize {
    if b == 0 { 0 } else { (a + b - 1) / b }
}

fn base_spine_is_left(reading_direction: ReadingDirection) -> bool {
    matches!(reading_direction, ReadingDirection::Ltr)
}

fn is_rotated(spec: &ImpositionSpec, row: usize, col: usize) -> bool {
    match spec.alternate_rotation {
        AlternateRotation::None => false,
        AlternateRotation::AlternateColumns => col % 2 == 1,
        AlternateRotation::AlternateRows => row % 2 == 1,
    }
}

fn page_or_none(index: usize, total_pages: usize) -> Option<usize> {
    if index < total_pages { Some(index) } else { None }
}

/// Reverse page assignments within each row — the vertical-axis flip
/// work-and-turn duplex applies to the back side.
fn reverse_within_rows(slots: &mut [SlotAssignment], columns: usize) {
    let rows = slots.len() / columns.max(1);
    let mut pages: Vec<Option<usize>> = slots.iter().map(|s| s.source_page).collect();
    for row in 0..rows {
        let start = row * columns;
        pages[start..start + columns].reverse();
    }
    for (slot, page) in slots.iter_mut().zip(pages) {
        slot.source_page = page;
    }
}

/// Paginate a full job: returns one [`SheetPagination`] per output sheet,
/// in ascending sheet order (fronts precede backs is represented by the
/// `front`/`back` split within each entry).
pub fn paginate(
    spec: &ImpositionSpec,
    total_pages: usize,
    columns: usize,
    rows: usize,
) -> Vec<SheetPagination> {
    match spec.imposition_type {
        ImpositionType::Stack => paginate_stack(spec, total_pages, columns, rows),
        ImpositionType::Repeat => paginate_repeat(spec, total_pages, columns, rows),
        ImpositionType::CollateCut => paginate_collate_cut(spec, total_pages, columns, rows),
        ImpositionType::Booklet => paginate_booklet(spec, total_pages),
    }
}

fn make_slot(
    spec: &ImpositionSpec,
    row: usize,
    col: usize,
    page: Option<usize>,
    is_back: bool,
) -> SlotAssignment {
    let rotated = is_rotated(spec, row, col);
    let mut spine_is_left = base_spine_is_left(spec.reading_direction);
    if is_back {
        spine_is_left = !spine_is_left;
    }
    if rotated {
        spine_is_left = !spine_is_left;
    }
    SlotAssignment {
        row,
        col,
        source_page: page,
        rotated,
        creep_offset_pt: 0.0,
        spine_is_left,
    }
}

fn paginate_stack(
    spec: &ImpositionSpec,
    total_pages: usize,
    columns: usize,
    rows: usize,
) -> Vec<SheetPagination> {
    let s = columns * rows;
    let per_sheet = if spec.duplex { s * 2 } else { s };
    let total_sheets = ceil_div(total_pages.max(1), per_sheet.max(1));

    (0..total_sheets)
        .map(|sheet_index| {
            let base = if spec.duplex { sheet_index * s * 2 } else { sheet_index * s };
            let front: Vec<SlotAssignment> = (0..s)
                .map(|i| {
                    let (row, col) = (i / columns, i % columns);
                    let page_index = if spec.duplex { base + 2 * i } else { base + i };
                    make_slot(spec, row, col, page_or_none(page_index, total_pages), false)
                })
                .collect();

            let back = if spec.duplex {
                let mut back: Vec<SlotAssignment> = (0..s)
                    .map(|i| {
                        let (row, col) = (i / columns, i % columns);
                        let page_index = base + 2 * i + 1;
                        make_slot(spec, row, col, page_or_none(page_index, total_pages), true)
                    })
                    .collect();
                if columns > 1 {
                    reverse_within_rows(&mut back, columns);
                }
                Some(back)
            } else {
                None
            };

            SheetPagination { sheet_index, front, back }
        })
        .collect()
}

fn paginate_repeat(
    spec: &ImpositionSpec,
    total_pages: usize,
    columns: usize,
    rows: usize,
) -> Vec<SheetPagination> {
    let s = columns * rows;
    let per_sheet = if spec.duplex { 2 } else { 1 };
    let total_sheets = ceil_div(total_pages.max(1), per_sheet);

    (0..total_sheets)
        .map(|sheet_index| {
            let front_master = if spec.duplex { 2 * sheet_index } else { sheet_index };
            let front: Vec<SlotAssignment> = (0..s)
                .map(|i| {
                    let (row, col) = (i / columns, i % columns);
                    make_slot(spec, row, col, page_or_none(front_master, total_pages), false)
                })
                .collect();

            let back = if spec.duplex {
                let back_master = 2 * sheet_index + 1;
                Some(
                    (0..s)
                        .map(|i| {
                            let (row, col) = (i / columns, i % columns);
                            make_slot(spec, row, col, page_or_none(back_master, total_pages), true)
                        })
                        .collect(),
                )
            } else {
                None
            };

            SheetPagination { sheet_index, front, back }
        })
        .collect()
}

fn paginate_collate_cut(
    spec: &ImpositionSpec,
    total_pages: usize,
    columns: usize,
    rows: usize,
) -> Vec<SheetPagination> {
    let s = columns * rows;
    let p_stack = ceil_div(total_pages.max(1), s.max(1));
    let sheets_per_mode = if spec.duplex { ceil_div(p_stack, 2) } else { p_stack };
    let face_stride = if spec.duplex { 2 } else { 1 };

    (0..sheets_per_mode)
        .map(|sheet_index| {
            let front: Vec<SlotAssignment> = (0..s)
                .map(|i| {
                    let (row, col) = (i / columns, i % columns);
                    let slot_offset = i * sheets_per_mode * face_stride;
                    let page_index = sheet_index * face_stride + slot_offset;
                    make_slot(spec, row, col, page_or_none(page_index, total_pages), false)
                })
                .collect();

            let back = if spec.duplex {
                let mut back: Vec<SlotAssignment> = (0..s)
                    .map(|i| {
                        let (row, col) = (i / columns, i % columns);
                        let slot_offset = i * sheets_per_mode * face_stride;
                        let page_index = sheet_index * face_stride + slot_offset + 1;
                        make_slot(spec, row, col, page_or_none(page_index, total_pages), true)
                    })
                    .collect();
                if columns > 1 {
                    reverse_within_rows(&mut back, columns);
                }
                Some(back)
            } else {
                None
            };

            SheetPagination { sheet_index, front, back }
        })
        .collect()
}

fn paginate_booklet(spec: &ImpositionSpec, total_pages: usize) -> Vec<SheetPagination> {
    let padded = total_pages.max(1).div_ceil(4) * 4;
    let n = padded / 4;
    let step = if n > 1 {
        press_geometry::in_to_pt(spec.creep_inches) / (n - 1) as f64
    } else {
        0.0
    };

    (0..n)
        .map(|k| {
            let front_left_idx = padded - 2 * k - 1;
            let front_right_idx = 2 * k;
            let back_left_idx = 2 * k + 1;
            let back_right_idx = padded - 2 * k - 2;

            // Outer (left) page of the signature shifts inward by
            // -k*step/2; inner (right) page shifts outward by +k*step/2.
            let outer_shift = -(k as f64) * step / 2.0;
            let inner_shift = (k as f64) * step / 2.0;

            let (left_col, right_col) = if spec.reading_direction == ReadingDirection::Rtl {
                (1, 0)
            } else {
                (0, 1)
            };

            let mut front = vec![
                slot_with_creep(spec, 0, left_col, front_left_idx, total_pages, outer_shift, false),
                slot_with_creep(spec, 0, right_col, front_right_idx, total_pages, inner_shift, false),
            ];
            front.sort_by_key(|s| s.col);

            let mut back = vec![
                slot_with_creep(spec, 0, left_col, back_left_idx, total_pages, inner_shift, true),
                slot_with_creep(spec, 0, right_col, back_right_idx, total_pages, outer_shift, true),
            ];
            back.sort_by_key(|s| s.col);

            SheetPagination { sheet_index: k, front, back: Some(back) }
        })
        .collect()
}

fn slot_with_creep(
    spec: &ImpositionSpec,
    row: usize,
    col: usize,
    page_index: usize,
    total_pages: usize,
    creep_offset_pt: f64,
    is_back: bool,
) -> SlotAssignment {
    let mut slot = make_slot(spec, row, col, page_or_none(page_index, total_pages), is_back);
    slot.creep_offset_pt = creep_offset_pt;
    // Booklet slots never rotate; "spine is left" is simply "this is the
    // left half of the spread".
    slot.rotated = false;
    slot.spine_is_left = col == 0;
    slot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrientationChoice, RowOffset, SlipColor};
    use press_catalog::PressSheetSize;

    fn spec(imposition_type: ImpositionType, duplex: bool, columns: u32, rows: u32) -> ImpositionSpec {
        ImpositionSpec {
            selected_sheet: PressSheetSize::SHEET_11X17,
            columns,
            rows,
            bleed_inches: 0.0,
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

    #[test]
    fn scenario_a_stack_2x2_simplex() {
        let spec = spec(ImpositionType::Stack, false, 2, 2);
        let sheets = paginate(&spec, 8, 2, 2);
        assert_eq!(sheets.len(), 2);
        let sheet0: Vec<_> = sheets[0].front.iter().map(|s| s.source_page.unwrap()).collect();
        assert_eq!(sheet0, vec![0, 1, 2, 3]);
        let sheet1: Vec<_> = sheets[1].front.iter().map(|s| s.source_page.unwrap()).collect();
        assert_eq!(sheet1, vec![4, 5, 6, 7]);
    }

    #[test]
    fn scenario_b_booklet_16_pages() {
        let spec = spec(ImpositionType::Booklet, true, 2, 1);
        let sheets = paginate_booklet(&spec, 16);
        assert_eq!(sheets.len(), 4);

        let sheet0 = &sheets[0];
        assert_eq!(sheet0.front[0].source_page, Some(15));
        assert_eq!(sheet0.front[1].source_page, Some(0));
        assert_eq!(sheet0.back.as_ref().unwrap()[0].source_page, Some(1));
        assert_eq!(sheet0.back.as_ref().unwrap()[1].source_page, Some(14));

        let sheet3 = &sheets[3];
        assert_eq!(sheet3.front[0].source_page, Some(9));
        assert_eq!(sheet3.front[1].source_page, Some(6));
        assert_eq!(sheet3.back.as_ref().unwrap()[0].source_page, Some(7));
        assert_eq!(sheet3.back.as_ref().unwrap()[1].source_page, Some(8));
    }

    #[test]
    fn booklet_signature_law_sums_to_2_padded_minus_2() {
        let spec = spec(ImpositionType::Booklet, true, 2, 1);
        let sheets = paginate_booklet(&spec, 18); // pads to 20
        let padded = 20;
        for sheet in &sheets {
            let sum: usize = sheet
                .front
                .iter()
                .chain(sheet.back.as_ref().unwrap().iter())
                .map(|s| s.source_page.unwrap_or(0))
                .sum();
            assert_eq!(sum, 2 * padded - 2);
        }
    }

    #[test]
    fn scenario_c_collate_cut_2up_duplex() {
        let spec = spec(ImpositionType::CollateCut, true, 2, 1);
        let sheets = paginate(&spec, 8, 2, 1);
        assert_eq!(sheets.len(), 2);

        let front: Vec<_> = sheets[0].front.iter().map(|s| s.source_page.unwrap()).collect();
        assert_eq!(front, vec![0, 4]);
        let back: Vec<_> = sheets[0].back.as_ref().unwrap().iter().map(|s| s.source_page.unwrap()).collect();
        assert_eq!(back, vec![5, 1]);

        // Reconstruction: column 0 front, back, column 1 front, back.
        let mut reconstructed = Vec::new();
        for col in 0..2 {
            for sheet in &sheets {
                reconstructed.push(sheet.front[col].source_page.unwrap());
                reconstructed.push(sheet.back.as_ref().unwrap()[col].source_page.unwrap());
            }
        }
        assert_eq!(reconstructed, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn repeat_mode_every_slot_same_master() {
        let spec = spec(ImpositionType::Repeat, true, 2, 2);
        let sheets = paginate(&spec, 4, 2, 2);
        for slot in &sheets[0].front {
            assert_eq!(slot.source_page, Some(0));
        }
        for slot in sheets[0].back.as_ref().unwrap() {
            assert_eq!(slot.source_page, Some(1));
        }
    }

    #[test]
    fn no_double_assignment_within_a_sheet_side() {
        let spec = spec(ImpositionType::Stack, true, 2, 2);
        let sheets = paginate(&spec, 15, 2, 2);
        for sheet in &sheets {
            let mut seen = std::collections::HashSet::new();
            for slot in sheet.front.iter().chain(sheet.back.as_ref().unwrap().iter()) {
                if let Some(p) = slot.source_page {
                    assert!(seen.insert((slot.row, slot.col, p)));
                }
            }
        }
    }
}
