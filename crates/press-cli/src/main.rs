use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use press_catalog::{Catalogs, CoverPaperType, CoverWeight, InteriorPaperType, InteriorWeight, PressSheetSize};
use press_cost::{Binding as CostBinding, JobSpec, Lamination, PrintColor};
use press_cover::CoverJob;
use press_impose::{
    AlternateRotation, CancellationToken, ImpositionSpec, ImpositionType, JobSlug,
    LopdfSurfaceFactory, NoopProgressSink, OrientationChoice, ReadingDirection, RowOffset, SlipColor,
};

#[derive(Parser)]
#[command(name = "pressctl", about = "Print-production toolkit: imposition, cover templates, and cost quotes", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose a PDF's pages onto press sheets
    Impose {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file. Multi-part jobs get `-partN` suffixed before
        /// the extension.
        #[arg(short, long)]
        output: PathBuf,

        /// Press sheet size
        #[arg(long, default_value = "19x25", value_enum)]
        sheet: SheetArg,

        /// Columns of slots per sheet
        #[arg(long, default_value_t = 2)]
        columns: u32,

        /// Rows of slots per sheet
        #[arg(long, default_value_t = 2)]
        rows: u32,

        /// Pagination algorithm
        #[arg(long, default_value = "stack", value_enum)]
        imposition_type: ImpositionTypeArg,

        /// Sheet orientation
        #[arg(long, default_value = "auto", value_enum)]
        orientation: OrientationArg,

        /// Print both sides of the sheet
        #[arg(long)]
        duplex: bool,

        /// Reading direction for slot fill order
        #[arg(long, default_value = "ltr", value_enum)]
        reading_direction: ReadingDirectionArg,

        /// Offset alternate rows by half a slot width
        #[arg(long, default_value = "none", value_enum)]
        row_offset: RowOffsetArg,

        /// Rotate alternating columns or rows 180 degrees
        #[arg(long, default_value = "none", value_enum)]
        alternate_rotation: AlternateRotationArg,

        /// Bleed in inches, applied outside each slot's trim box
        #[arg(long, default_value_t = 0.0)]
        bleed_in: f64,

        /// Horizontal gutter between slots, in inches
        #[arg(long, default_value_t = 0.0)]
        horizontal_gutter_in: f64,

        /// Vertical gutter between slots, in inches
        #[arg(long, default_value_t = 0.0)]
        vertical_gutter_in: f64,

        /// Binder's creep compensation per sheet, in inches
        #[arg(long, default_value_t = 0.0)]
        creep_in: f64,

        /// Draw a QR job slug in the sheet margin
        #[arg(long)]
        include_slug: bool,

        /// Draw spine-fold marks for saddle-stitch/booklet jobs
        #[arg(long)]
        show_spine_marks: bool,

        /// Separator slip color ahead of the first sheet
        #[arg(long, default_value = "none", value_enum)]
        slip_color: SlipColorArg,

        /// Job ID embedded in the slug, when --include-slug is set
        #[arg(long, default_value = "")]
        job_id: String,
    },

    /// Build a two-page cover template PDF (outside + inside spreads)
    Cover {
        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Interior page count
        #[arg(long)]
        interior_pages: u32,

        /// Interior paper quick-type
        #[arg(long, value_enum)]
        interior_paper: InteriorPaperArg,

        /// Interior paper weight
        #[arg(long, value_enum)]
        interior_weight: InteriorWeightArg,

        /// Cover paper quick-type
        #[arg(long, value_enum)]
        cover_paper: CoverPaperArg,

        /// Cover paper weight
        #[arg(long, value_enum)]
        cover_weight: CoverWeightArg,

        /// Trim width in inches
        #[arg(long)]
        trim_width_in: f64,

        /// Trim height in inches
        #[arg(long)]
        trim_height_in: f64,

        /// Bleed in inches
        #[arg(long, default_value_t = 0.125)]
        bleed_in: f64,
    },

    /// Produce a cost quote for a print job
    Estimate {
        #[arg(long)]
        quantity: u32,

        #[arg(long)]
        finished_width_in: f64,
        #[arg(long)]
        finished_height_in: f64,

        #[arg(long, default_value_t = 0)]
        bw_pages: u32,
        #[arg(long, default_value = "")]
        bw_paper_sku: String,

        #[arg(long, default_value_t = 0)]
        color_pages: u32,
        #[arg(long, default_value = "")]
        color_paper_sku: String,

        #[arg(long)]
        has_cover: bool,
        #[arg(long, default_value = "")]
        cover_paper_sku: String,
        #[arg(long, default_value = "bw", value_enum)]
        cover_print_color: PrintColorArg,
        #[arg(long)]
        cover_prints_both_sides: bool,

        #[arg(long, default_value = "none", value_enum)]
        lamination: LaminationArg,
        #[arg(long, value_enum)]
        binding: BindingArg,

        #[arg(long)]
        labor_rate_per_hour: f64,
        #[arg(long)]
        markup_percent: f64,
        #[arg(long, default_value_t = 0.0)]
        spoilage_percent: f64,

        #[arg(long)]
        calculate_shipping: bool,
        #[arg(long)]
        override_shipping_box: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SheetArg {
    #[value(name = "11x17")]
    Sheet11x17,
    #[value(name = "12x18")]
    Sheet12x18,
    #[value(name = "13x19")]
    Sheet13x19,
    #[value(name = "19x25")]
    Sheet19x25,
    #[value(name = "23x35")]
    Sheet23x35,
    #[value(name = "25x38")]
    Sheet25x38,
}

impl From<SheetArg> for PressSheetSize {
    fn from(arg: SheetArg) -> Self {
        match arg {
            SheetArg::Sheet11x17 => Self::SHEET_11X17,
            SheetArg::Sheet12x18 => Self::SHEET_12X18,
            SheetArg::Sheet13x19 => Self::SHEET_13X19,
            SheetArg::Sheet19x25 => Self::SHEET_19X25,
            SheetArg::Sheet23x35 => Self::SHEET_23X35,
            SheetArg::Sheet25x38 => Self::SHEET_25X38,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ImpositionTypeArg {
    Stack,
    Repeat,
    CollateCut,
    Booklet,
}

impl From<ImpositionTypeArg> for ImpositionType {
    fn from(arg: ImpositionTypeArg) -> Self {
        match arg {
            ImpositionTypeArg::Stack => Self::Stack,
            ImpositionTypeArg::Repeat => Self::Repeat,
            ImpositionTypeArg::CollateCut => Self::CollateCut,
            ImpositionTypeArg::Booklet => Self::Booklet,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Auto,
    Portrait,
    Landscape,
}

impl From<OrientationArg> for OrientationChoice {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Auto => Self::Auto,
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReadingDirectionArg {
    Ltr,
    Rtl,
}

impl From<ReadingDirectionArg> for ReadingDirection {
    fn from(arg: ReadingDirectionArg) -> Self {
        match arg {
            ReadingDirectionArg::Ltr => Self::Ltr,
            ReadingDirectionArg::Rtl => Self::Rtl,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RowOffsetArg {
    None,
    Half,
}

impl From<RowOffsetArg> for RowOffset {
    fn from(arg: RowOffsetArg) -> Self {
        match arg {
            RowOffsetArg::None => Self::None,
            RowOffsetArg::Half => Self::Half,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum AlternateRotationArg {
    None,
    AlternateColumns,
    AlternateRows,
}

impl From<AlternateRotationArg> for AlternateRotation {
    fn from(arg: AlternateRotationArg) -> Self {
        match arg {
            AlternateRotationArg::None => Self::None,
            AlternateRotationArg::AlternateColumns => Self::AlternateColumns,
            AlternateRotationArg::AlternateRows => Self::AlternateRows,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SlipColorArg {
    None,
    Grey,
    Yellow,
    Green,
    Pink,
    Blue,
}

impl From<SlipColorArg> for SlipColor {
    fn from(arg: SlipColorArg) -> Self {
        match arg {
            SlipColorArg::None => Self::None,
            SlipColorArg::Grey => Self::Grey,
            SlipColorArg::Yellow => Self::Yellow,
            SlipColorArg::Green => Self::Green,
            SlipColorArg::Pink => Self::Pink,
            SlipColorArg::Blue => Self::Blue,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum InteriorPaperArg {
    Opaque,
    Gloss,
    Matte,
    Recycled,
}

impl From<InteriorPaperArg> for InteriorPaperType {
    fn from(arg: InteriorPaperArg) -> Self {
        match arg {
            InteriorPaperArg::Opaque => Self::Opaque,
            InteriorPaperArg::Gloss => Self::Gloss,
            InteriorPaperArg::Matte => Self::Matte,
            InteriorPaperArg::Recycled => Self::Recycled,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum InteriorWeightArg {
    Lb50,
    Lb60,
    Lb70,
    Lb80,
    Lb100,
}

impl From<InteriorWeightArg> for InteriorWeight {
    fn from(arg: InteriorWeightArg) -> Self {
        match arg {
            InteriorWeightArg::Lb50 => Self::Lb50,
            InteriorWeightArg::Lb60 => Self::Lb60,
            InteriorWeightArg::Lb70 => Self::Lb70,
            InteriorWeightArg::Lb80 => Self::Lb80,
            InteriorWeightArg::Lb100 => Self::Lb100,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CoverPaperArg {
    Silk,
    Gloss,
    Matte,
    Uncoated,
}

impl From<CoverPaperArg> for CoverPaperType {
    fn from(arg: CoverPaperArg) -> Self {
        match arg {
            CoverPaperArg::Silk => Self::Silk,
            CoverPaperArg::Gloss => Self::Gloss,
            CoverPaperArg::Matte => Self::Matte,
            CoverPaperArg::Uncoated => Self::Uncoated,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CoverWeightArg {
    Lb80,
    Lb100,
    Lb120,
    Lb140,
}

impl From<CoverWeightArg> for CoverWeight {
    fn from(arg: CoverWeightArg) -> Self {
        match arg {
            CoverWeightArg::Lb80 => Self::Lb80,
            CoverWeightArg::Lb100 => Self::Lb100,
            CoverWeightArg::Lb120 => Self::Lb120,
            CoverWeightArg::Lb140 => Self::Lb140,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PrintColorArg {
    Bw,
    Color,
}

impl From<PrintColorArg> for PrintColor {
    fn from(arg: PrintColorArg) -> Self {
        match arg {
            PrintColorArg::Bw => Self::Bw,
            PrintColorArg::Color => Self::Color,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LaminationArg {
    None,
    Gloss,
    Matte,
}

impl From<LaminationArg> for Lamination {
    fn from(arg: LaminationArg) -> Self {
        match arg {
            LaminationArg::None => Self::None,
            LaminationArg::Gloss => Self::Gloss,
            LaminationArg::Matte => Self::Matte,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BindingArg {
    PerfectBound,
    SaddleStitch,
    None,
}

impl From<BindingArg> for CostBinding {
    fn from(arg: BindingArg) -> Self {
        match arg {
            BindingArg::PerfectBound => Self::PerfectBound,
            BindingArg::SaddleStitch => Self::SaddleStitch,
            BindingArg::None => Self::None,
        }
    }
}

fn numbered_output_path(output: &std::path::Path, part_index: u32, total_parts: u32) -> PathBuf {
    if total_parts <= 1 {
        return output.to_path_buf();
    }
    let stem = output.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    let ext = output.extension().and_then(|s| s.to_str()).unwrap_or("pdf");
    output.with_file_name(format!("{stem}-part{}.{ext}", part_index + 1))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Impose {
            input,
            output,
            sheet,
            columns,
            rows,
            imposition_type,
            orientation,
            duplex,
            reading_direction,
            row_offset,
            alternate_rotation,
            bleed_in,
            horizontal_gutter_in,
            vertical_gutter_in,
            creep_in,
            include_slug,
            show_spine_marks,
            slip_color,
            job_id,
        } => {
            let spec = ImpositionSpec {
                selected_sheet: sheet.into(),
                columns,
                rows,
                bleed_inches: bleed_in,
                horizontal_gutter_inches: horizontal_gutter_in,
                vertical_gutter_inches: vertical_gutter_in,
                imposition_type: imposition_type.into(),
                orientation: orientation.into(),
                duplex,
                reading_direction: reading_direction.into(),
                row_offset: row_offset.into(),
                alternate_rotation: alternate_rotation.into(),
                creep_inches: creep_in,
                include_slug,
                show_spine_marks,
                first_sheet_slip_color: slip_color.into(),
            };

            let input_bytes = tokio::fs::read(&input)
                .await
                .with_context(|| format!("reading {}", input.display()))?;

            let slug = include_slug.then(|| JobSlug { job_id, ..Default::default() });

            let (chunks, report) = press_impose::impose(
                input_bytes,
                spec,
                slug,
                Arc::new(LopdfSurfaceFactory),
                CancellationToken::new(),
                Arc::new(NoopProgressSink),
            )
            .await?;

            println!("Imposition report:");
            println!("  Total sheets: {}", report.total_sheets);
            println!("  Slots per sheet: {}", report.slots_per_sheet);
            println!("  Chosen orientation: {:?}", report.chosen_orientation);
            for warning in &report.warnings {
                println!("  Warning: {warning}");
            }

            let total_parts = chunks.len() as u32;
            for (bytes, part_index, _) in chunks {
                let path = numbered_output_path(&output, part_index, total_parts);
                tokio::fs::write(&path, bytes)
                    .await
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
        }

        Commands::Cover {
            output,
            interior_pages,
            interior_paper,
            interior_weight,
            cover_paper,
            cover_weight,
            trim_width_in,
            trim_height_in,
            bleed_in,
        } => {
            let catalogs = Catalogs::default();
            let job = CoverJob {
                interior_pages,
                interior_paper: interior_paper.into(),
                interior_weight: interior_weight.into(),
                cover_paper: cover_paper.into(),
                cover_weight: cover_weight.into(),
                trim_width_in,
                trim_height_in,
                bleed_in,
            };

            let (pdf, spread) = press_cover::build_cover(&job, &catalogs)?;
            tokio::fs::write(&output, pdf).await.with_context(|| format!("writing {}", output.display()))?;

            println!("Spine width: {:.4} in", spread.spine_width_in);
            println!("Spread size: {:.4} x {:.4} in", spread.spread_width_in, spread.spread_height_in);
            if spread.odd_page_count {
                println!("Warning: odd interior page count");
            }
            println!("Wrote {}", output.display());
        }

        Commands::Estimate {
            quantity,
            finished_width_in,
            finished_height_in,
            bw_pages,
            bw_paper_sku,
            color_pages,
            color_paper_sku,
            has_cover,
            cover_paper_sku,
            cover_print_color,
            cover_prints_both_sides,
            lamination,
            binding,
            labor_rate_per_hour,
            markup_percent,
            spoilage_percent,
            calculate_shipping,
            override_shipping_box,
        } => {
            let catalogs = Catalogs::default();
            let job = JobSpec {
                quantity,
                finished_width_in,
                finished_height_in,
                bw_pages,
                bw_paper_sku,
                color_pages,
                color_paper_sku,
                has_cover,
                cover_paper_sku,
                cover_print_color: cover_print_color.into(),
                cover_prints_both_sides,
                lamination: lamination.into(),
                binding: binding.into(),
                labor_rate_per_hour,
                markup_percent,
                spoilage_percent,
                calculate_shipping,
                override_shipping_box,
            };

            let breakdown = press_cost::estimate(&job, &catalogs);
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
            if breakdown.error.is_some() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
