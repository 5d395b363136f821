//! Recommendation report rendering and output.
//!
//! # Responsibility
//! - Render tier-classified rows into the text or JSON report shape.
//! - Own output-file I/O; a failed write may leave a partial file behind,
//!   callers surface the error instead of rolling back.

use log::info;
use spreadtrace_core::{RecommendationRow, Tier};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const MEDICAL_SUPERVISION_MSG: &str = "Medical supervision required";
const REGULAR_QUARANTINE_MSG: &str = "Regular quarantine required";
const CLEAN_MSG: &str = "No quarantine required";

/// Output encodings for the recommendation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Report rendering and output failures.
#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize report: {err}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Writes the report for all rows to `path`.
pub fn write_report(
    rows: &[RecommendationRow],
    format: ReportFormat,
    path: &Path,
) -> Result<(), ReportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ReportFormat::Text => {
            for row in rows {
                writeln!(writer, "{}", render_line(row))?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    info!(
        "event=report_written status=ok rows={} path={}",
        rows.len(),
        path.display()
    );
    Ok(())
}

/// Renders one row into its tier template.
fn render_line(row: &RecommendationRow) -> String {
    let message = match row.tier {
        Tier::MedicalSupervision => MEDICAL_SUPERVISION_MSG,
        Tier::RegularQuarantine => REGULAR_QUARANTINE_MSG,
        Tier::Clean => CLEAN_MSG,
    };
    format!(
        "{message}: {name} {id} {age} {risk:.6}.",
        name = row.name,
        id = row.id,
        age = row.age,
        risk = row.risk_score
    )
}
