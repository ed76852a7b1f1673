//! Shared error enum for the print production toolkit.
//!
//! This mirrors the error-kind taxonomy used across the workspace:
//! configuration mistakes the caller can fix, external-input failures
//! (a malformed source PDF, a bad QR payload), and the single
//! control-flow "signal" kind (`Cancelled`) that is not really a
//! failure at all.

use thiserror::Error;

/// Errors shared by the geometry, catalog, imposition, and cover crates.
#[derive(Error, Debug)]
pub enum PrintError {
    #[error("geometry is invalid: {0}")]
    InvalidGeometry(String),

    #[error("layout exceeds the sheet bounds")]
    LayoutExceedsSheet,

    #[error("bleed extends beyond the page")]
    BleedExceedsPage,

    #[error("page count is not valid for this binding")]
    InvalidPageCountForBinding,

    #[error("unknown paper SKU: {0}")]
    UnknownPaperSku(String),

    #[error("finished size does not fit on the selected paper: {0}")]
    FinishedSizeDoesNotFitPaper(String),

    #[error("cover spread does not fit the selected cover stock")]
    CoverSpreadDoesNotFitCover,

    #[error("failed to parse PDF: {0}")]
    PdfParseError(String),

    #[error("failed to render PDF: {0}")]
    PdfRenderError(String),

    #[error("failed to generate QR payload: {0}")]
    QrGenerationError(String),

    #[error("operation was cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PrintError>;
