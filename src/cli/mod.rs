//! # CLI Module
//!
//! This module provides the command-line interface layer for spotmeta. Each
//! command is one export "page": it reads identifiers, authenticates, fetches,
//! flattens and writes a spreadsheet. Commands differ only in the entity kind
//! they accept, the endpoints they call and the column layout they export.
//!
//! ## Commands
//!
//! - [`tracks`] - Full metadata for a batch of tracks
//! - [`albums`] - Every track of one or more albums, with UPC, label and ℗ line
//! - [`playlist`] - Every track of one or more playlists
//! - [`top_tracks`] - An artist's top tracks in a market
//! - [`catalog`] - An artist's whole discography, grouped by release type
//!
//! ## Data Flow
//!
//! ```text
//! Input (arguments, --input file, stdin)
//!     ↓
//! Identifier normalisation (per item, bad items reported and skipped)
//!     ↓
//! Client-credentials token (once per command)
//!     ↓
//! Catalog fetch (sequential, paginated, chunked)
//!     ↓
//! Flattening (one row per track)
//!     ↓
//! Preview table + spreadsheet per entity (+ combined spreadsheet for batches)
//! ```
//!
//! ## Error Handling
//!
//! - **Per item**: unparseable identifiers, failed chunks and failed pages are
//!   printed as warnings; the rest of the batch continues
//! - **Per command**: missing credentials or a failed token exchange end the
//!   command with an error
//! - **Empty results**: reported as warnings, nothing is written
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotmeta tracks spotify:track:4cOdK2wGLETKBW3PvgPWqT
//! spotmeta albums --input albums.txt --format csv
//! spotmeta playlist https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! spotmeta top-tracks --market DE 0TnOYISbd1XYRBk9myaseg
//! spotmeta catalog --per-album 0TnOYISbd1XYRBk9myaseg
//! ```

mod albums;
mod catalog;
mod playlist;
mod shared;
mod top_tracks;
mod tracks;

pub use albums::albums;
pub use catalog::catalog;
pub use playlist::playlist;
pub use shared::{ExportOptions, InputOptions};
pub use top_tracks::top_tracks;
pub use tracks::tracks;
