//! Trace export.
//!
//! Serializes a finished trace for external renderers or archival: JSON
//! Lines (one step per line, streaming-friendly) or a single pretty JSON
//! document.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TraceError, TraceResult};
use crate::trace::Trace;

/// Export format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// JSON Lines: one step object per line.
    #[default]
    JsonLines,
    /// One pretty-printed JSON array for the whole trace.
    Json,
}

/// Trace exporter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exporter {
    format: ExportFormat,
}

impl Exporter {
    /// Create an exporter with the default (JSON Lines) format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with an explicit format.
    #[must_use]
    pub const fn with_format(format: ExportFormat) -> Self {
        Self { format }
    }

    /// Write `trace` to any writer.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or writing fails.
    pub fn export<W: Write>(&self, trace: &Trace, writer: &mut W) -> TraceResult<()> {
        match self.format {
            ExportFormat::JsonLines => {
                for step in trace {
                    let json = serde_json::to_string(step)
                        .map_err(|e| TraceError::serialization(e.to_string()))?;
                    writeln!(writer, "{json}")?;
                }
            }
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(trace)
                    .map_err(|e| TraceError::serialization(e.to_string()))?;
                writeln!(writer, "{json}")?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Write `trace` to a file at `path`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or writing fails.
    pub fn export_to_path<P: AsRef<Path>>(&self, trace: &Trace, path: P) -> TraceResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.export(trace, &mut writer)
    }
}
