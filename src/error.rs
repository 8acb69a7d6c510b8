use std::path::PathBuf;

use thiserror::Error;

pub type CalendarResult<T> = Result<T, CalendarError>;

/// Errors surfaced to whoever asked for a calendar to be laid out.
///
/// Holiday fetch problems never show up here, see [`crate::holidays::HolidayOracle`].
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("unknown font: {0}")]
    UnknownFont(String),

    #[error("unknown color preset: {0}")]
    UnknownPreset(String),

    #[error("month out of range: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("year out of supported range: {0}")]
    InvalidYear(i32),

    #[error("embedded font table is malformed: {0}")]
    FontTable(String),

    #[error("cannot load font file {}: {reason}", .path.display())]
    FontAsset { path: PathBuf, reason: String },

    #[error("invalid layout constants: {0}")]
    InvalidLayout(String),
}
