//! Spotify Catalog Metadata Export Library
//!
//! This library turns free-form Spotify identifiers (bare IDs, `spotify:` URIs
//! and `open.spotify.com` links) into flat, one-row-per-track spreadsheets.
//! It covers the whole pipeline used by the `spotmeta` command line tool:
//! identifier normalisation, client-credentials authentication, paginated and
//! chunked catalog retrieval, record flattening and spreadsheet export.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations, one per export command
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by every pipeline stage
//! - `export` - Spreadsheet serialisation (XLSX and CSV)
//! - `flatten` - Projection of fetched records into flat rows
//! - `merge` - Positional merge of track stubs with full track records
//! - `normalize` - Identifier parsing from user supplied text
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures mirroring the Spotify JSON payloads
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotmeta::{config, normalize::{self, EntityKind}};
//!
//! #[tokio::main]
//! async fn main() -> spotmeta::Res<()> {
//!     config::load_env().await?;
//!     let parsed = normalize::normalize_batch(EntityKind::Track, "spotify:track:4cOdK2wGLETKBW3PvgPWqT");
//!     assert_eq!(parsed.ids(), vec!["4cOdK2wGLETKBW3PvgPWqT"]);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod flatten;
pub mod merge;
pub mod normalize;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for top-level operations that may fail.
///
/// Library stages return their own error enums from [`error`]; this alias is
/// used where those stages are glued together and any of them may fail.
///
/// # Example
///
/// ```
/// use spotmeta::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching album {}", album_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Wrote {} rows to {}", rows, path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used at the top of a command, where the current action cannot
/// continue (missing credentials, failed token exchange).
///
/// # Example
///
/// ```
/// error!("Failed to obtain access token: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for per-item problems that do not stop the rest of a batch: an
/// unparseable input line, a failed chunk, an empty result.
///
/// # Example
///
/// ```
/// warning!("Skipping line {}: {}", line, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
