use std::{path::PathBuf, time::Duration};

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::builder::Builder;
use tokio::io::AsyncReadExt;

use crate::{
    config, error,
    export::{ExportFormat, Sheet, SheetWriter},
    utils,
    normalize::{self, BatchParse, EntityKind},
    spotify::SpotifyClient,
    success, warning,
};

/// Where identifiers come from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputOptions {
    /// Spotify IDs, URIs or open.spotify.com URLs
    pub ids: Vec<String>,

    /// Read identifiers from a file, one per line or comma-separated
    #[clap(long, short = 'i')]
    pub input: Option<PathBuf>,
}

/// Where and how spreadsheets are written.
#[derive(Args, Debug, Clone)]
pub struct ExportOptions {
    /// Directory the spreadsheets are written to
    #[clap(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Spreadsheet format
    #[clap(long, value_enum, default_value_t = ExportFormat::Xlsx)]
    pub format: ExportFormat,

    /// Do not print the rows as a table
    #[clap(long)]
    pub no_preview: bool,
}

impl ExportOptions {
    /// A writer for every spreadsheet of one command run.
    pub fn writer(&self) -> SheetWriter {
        SheetWriter::new(&self.output_dir, self.format)
    }

    pub fn preview(&self) -> bool {
        !self.no_preview
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            format: ExportFormat::Xlsx,
            no_preview: false,
        }
    }
}

/// Gathers the raw identifier text from arguments, `--input` or stdin.
pub(crate) async fn read_input(input: &InputOptions) -> String {
    let mut text = input.ids.join("\n");

    if let Some(path) = &input.input {
        match async_fs::read_to_string(path).await {
            Ok(content) => {
                text.push('\n');
                text.push_str(&content);
            }
            Err(e) => warning!("Cannot read {}: {}", path.display(), e),
        }
    }

    if input.ids.is_empty() && input.input.is_none() {
        let mut stdin = String::new();
        if let Err(e) = tokio::io::stdin().read_to_string(&mut stdin).await {
            warning!("Cannot read standard input: {}", e);
        }
        text = stdin;
    }

    text
}

/// Reads and normalises the identifiers of one command, reporting every
/// item that does not parse.
pub(crate) async fn parse_input(kind: EntityKind, input: &InputOptions) -> BatchParse {
    let text = read_input(input).await;
    let batch = normalize::normalize_batch(kind, &text);
    for err in &batch.errors {
        warning!("Skipping item {} '{}': {}", err.line, err.input, err.error);
    }
    batch
}

/// Reads credentials and exchanges them for a token, exiting on failure.
pub(crate) async fn connect() -> SpotifyClient {
    let credentials = match config::spotify_credentials() {
        Ok(c) => c,
        Err(e) => error!(
            "{}. Add it to {} or the environment.",
            e,
            config::env_path().display()
        ),
    };

    let pb = spinner("Requesting access token...");
    let client = SpotifyClient::authorize(&credentials, config::spotify_apiurl()).await;
    pb.finish_and_clear();

    match client {
        Ok(client) => client,
        Err(e) => error!("Failed to obtain access token: {}", e),
    }
}

pub(crate) fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

pub(crate) fn preview(sheet: &Sheet) {
    let mut builder = Builder::default();
    builder.push_record(sheet.headers.iter().cloned());
    for row in &sheet.rows {
        builder.push_record(row.iter().cloned());
    }
    println!("{}", builder.build());
}

/// Optionally previews, then writes one spreadsheet under a name not yet
/// used in this run.
pub(crate) async fn emit(
    writer: &mut SheetWriter,
    stem: &str,
    sheet: &Sheet,
    show_preview: bool,
) {
    if show_preview {
        preview(sheet);
    }

    match writer.write(stem, sheet).await {
        Ok(path) => {
            let wanted = utils::sanitize_file_name(stem);
            if path.file_stem().is_some_and(|s| s.to_string_lossy() != wanted) {
                warning!(
                    "{} was already written in this run, using {}",
                    wanted,
                    path.display()
                );
            }
            success!("Wrote {} rows to {}", sheet.data_rows(), path.display())
        }
        Err(e) => warning!("Failed to write {}: {}", stem, e),
    }
}
