//! Spreadsheet export of flattened rows.
//!
//! Rows are first laid out as a [`Sheet`]: a header row holding every column
//! in the order first encountered, then one line per row with blank cells
//! for columns a row lacks. A sink serialises that grid without styling.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use rust_xlsxwriter::Workbook;

use crate::{error::ExportError, flatten::FlatRow, utils};

/// A single-sheet grid ready for serialisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn from_rows(name: impl Into<String>, rows: &[FlatRow]) -> Self {
        let mut headers: Vec<String> = Vec::new();
        for row in rows {
            for column in row.columns() {
                if !headers.iter().any(|h| h == column) {
                    headers.push(column.to_string());
                }
            }
        }

        let grid = rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|h| row.get(h).unwrap_or_default().to_string())
                    .collect()
            })
            .collect();

        Self {
            name: name.into(),
            headers,
            rows: grid,
        }
    }

    pub fn data_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Serialises a [`Sheet`] into the bytes of a downloadable file.
pub trait ExportSink {
    fn export(&self, sheet: &Sheet) -> Result<Vec<u8>, ExportError>;

    fn extension(&self) -> &'static str;
}

/// Office Open XML workbook with one worksheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxSink;

impl ExportSink for XlsxSink {
    fn export(&self, sheet: &Sheet) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        if !sheet.name.is_empty() {
            worksheet.set_name(sheet.name.as_str())?;
        }

        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string(0, col as u16, header.as_str())?;
        }
        for (row_idx, row) in sheet.rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                worksheet.write_string(row_idx as u32 + 1, col as u16, value.as_str())?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }
}

/// Comma-separated values with a header line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSink;

impl ExportSink for CsvSink {
    fn export(&self, sheet: &Sheet) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&sheet.headers)?;
        for row in &sheet.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn sink(&self) -> Box<dyn ExportSink + Send + Sync> {
        match self {
            ExportFormat::Xlsx => Box::new(XlsxSink),
            ExportFormat::Csv => Box::new(CsvSink),
        }
    }
}

/// Serialises `sheet` and writes it to `<dir>/<stem>.<ext>`, creating `dir`
/// if needed. Returns the written path.
pub async fn write_sheet(
    dir: &Path,
    stem: &str,
    format: ExportFormat,
    sheet: &Sheet,
) -> Result<PathBuf, ExportError> {
    let sink = format.sink();
    let bytes = sink.export(sheet)?;

    async_fs::create_dir_all(dir).await?;
    let path = dir.join(format!(
        "{}.{}",
        utils::sanitize_file_name(stem),
        sink.extension()
    ));
    async_fs::write(&path, bytes).await?;
    Ok(path)
}

/// Writes the spreadsheets of one command run into a single directory.
///
/// File names are never reused within a run: a second `Song_tracks` is
/// written as `Song_tracks_2`. Names compare case-insensitively since some
/// file systems do.
#[derive(Debug, Clone)]
pub struct SheetWriter {
    dir: PathBuf,
    format: ExportFormat,
    used: HashSet<String>,
}

impl SheetWriter {
    pub fn new(dir: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
            used: HashSet::new(),
        }
    }

    /// Reserves a file stem for `stem` that no earlier sheet of this writer
    /// has taken.
    pub fn unique_stem(&mut self, stem: &str) -> String {
        let base = utils::sanitize_file_name(stem);
        let mut candidate = base.clone();
        let mut n = 1;
        while !self.used.insert(candidate.to_lowercase()) {
            n += 1;
            candidate = format!("{}_{}", base, n);
        }
        candidate
    }

    pub async fn write(&mut self, stem: &str, sheet: &Sheet) -> Result<PathBuf, ExportError> {
        let stem = self.unique_stem(stem);
        write_sheet(&self.dir, &stem, self.format, sheet).await
    }
}
