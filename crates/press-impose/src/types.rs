//! Core types for the imposition engine: the spec a caller fills in, the
//! informational job slug embedded in output, and the report handed
//! back once imposition completes.

use press_geometry::Orientation as ResolvedOrientation;
use press_catalog::PressSheetSize;

/// The four pagination algorithms described in the planning/pagination
/// design. `Booklet` forces `columns = 2`, `rows = 1`, and `duplex =
/// true` when a spec is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpositionType {
    Stack,
    Repeat,
    CollateCut,
    Booklet,
}

/// Sheet orientation choice. `Auto` is resolved at plan time by
/// [`crate::plan::plan_sheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrientationChoice {
    #[default]
    Auto,
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingDirection {
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowOffset {
    None,
    Half,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlternateRotation {
    None,
    AlternateColumns,
    AlternateRows,
}

/// Color of the first-sheet separator slip, or `None` to disable it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlipColor {
    Grey,
    Yellow,
    Green,
    Pink,
    Blue,
    #[default]
    None,
}

impl SlipColor {
    /// RGB fill used when painting the separator sheet, `0.0..=1.0`.
    pub fn rgb(self) -> Option<(f64, f64, f64)> {
        match self {
            SlipColor::Grey => Some((0.80, 0.80, 0.80)),
            SlipColor::Yellow => Some((1.00, 0.92, 0.30)),
            SlipColor::Green => Some((0.55, 0.85, 0.55)),
            SlipColor::Pink => Some((0.95, 0.70, 0.80)),
            SlipColor::Blue => Some((0.65, 0.80, 0.95)),
            SlipColor::None => None,
        }
    }
}

/// Everything an imposition call needs beyond the input document itself.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpositionSpec {
    pub selected_sheet: PressSheetSize,
    pub columns: u32,
    pub rows: u32,
    pub bleed_inches: f64,
    pub horizontal_gutter_inches: f64,
    pub vertical_gutter_inches: f64,
    pub imposition_type: ImpositionType,
    pub orientation: OrientationChoice,
    pub duplex: bool,
    pub reading_direction: ReadingDirection,
    pub row_offset: RowOffset,
    pub alternate_rotation: AlternateRotation,
    pub creep_inches: f64,
    pub include_slug: bool,
    pub show_spine_marks: bool,
    pub first_sheet_slip_color: SlipColor,
}

impl ImpositionSpec {
    /// Normalize the booklet-forced fields and check the invariants from
    /// the data model (`columns >= 1`, `rows >= 1`). Called once at plan
    /// time before any output is produced.
    pub fn normalized(mut self) -> Result<Self, press_geometry::PrintError> {
        if self.imposition_type == ImpositionType::Booklet {
            self.columns = 2;
            self.rows = 1;
            self.duplex = true;
        }
        if self.columns < 1 || self.rows < 1 {
            return Err(press_geometry::PrintError::InvalidGeometry(
                "columns and rows must each be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Purely informational job metadata embedded in slug text. Blank
/// strings on input are not special-cased here; callers pass `None` for
/// fields they have nothing to say about.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobSlug {
    pub job_id: String,
    pub customer: Option<String>,
    pub contact: Option<String>,
    pub filename: Option<String>,
    pub quantity: Option<u32>,
    pub due_date: Option<String>,
    pub trim_size: Option<String>,
    pub interior_spec: Option<String>,
    pub cover_spec: Option<String>,
    pub finishing: Option<String>,
    pub binding: Option<String>,
    pub notes: Option<String>,
}

impl JobSlug {
    /// The plain multiline QR payload text from the external interfaces
    /// section: one field per line, `sheet_index`/`total_sheets` filled
    /// in by the caller per sheet.
    pub fn qr_payload(&self, sheet_index: usize, total_sheets: usize) -> String {
        let mut lines = vec![
            format!("Sheet: {}/{}", sheet_index + 1, total_sheets),
            format!("JobID: {}", self.job_id),
        ];
        let push = |lines: &mut Vec<String>, label: &str, value: &Option<String>| {
            if let Some(v) = value {
                lines.push(format!("{label}: {v}"));
            }
        };
        push(&mut lines, "Customer", &self.customer);
        push(&mut lines, "Contact", &self.contact);
        push(&mut lines, "File", &self.filename);
        if let Some(qty) = self.quantity {
            lines.push(format!("Qty: {qty}"));
        }
        push(&mut lines, "Due", &self.due_date);
        push(&mut lines, "Trim", &self.trim_size);
        push(&mut lines, "Interior", &self.interior_spec);
        push(&mut lines, "Cover", &self.cover_spec);
        push(&mut lines, "Finish", &self.finishing);
        push(&mut lines, "Binding", &self.binding);
        push(&mut lines, "Notes", &self.notes);
        lines.join("\n")
    }

    /// The one-line human-readable summary drawn alongside the QR code.
    pub fn summary_line(&self, sheet_index: usize, total_sheets: usize) -> String {
        format!(
            "Sheet {}/{}  Job {}  Qty {}  Due {}  Trim {}",
            sheet_index + 1,
            total_sheets,
            self.job_id,
            self.quantity.map(|q| q.to_string()).unwrap_or_else(|| "-".to_string()),
            self.due_date.as_deref().unwrap_or("-"),
            self.trim_size.as_deref().unwrap_or("-"),
        )
    }
}

/// Result of an imposition call: total sheets, slots per sheet, the
/// orientation that was actually chosen (relevant when `orientation =
/// auto`), and any non-fatal warnings surfaced during planning.
#[derive(Debug, Clone)]
pub struct ImpositionReport {
    pub total_sheets: usize,
    pub slots_per_sheet: usize,
    pub chosen_orientation: ResolvedOrientation,
    pub warnings: Vec<String>,
}
