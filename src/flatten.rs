//! Projection of fetched records into flat, one-row-per-track records.
//!
//! Every function here is pure. Missing optional metadata (artists, ISRC,
//! external URL, album) renders as `N/A` instead of failing, which is common
//! for local files and podcast-like content.

use crate::{
    types::{AlbumDetails, MergedTrack, Track},
    utils,
};

pub const NOT_AVAILABLE: &str = "N/A";

pub const COL_TRACK_NAME: &str = "Track Name";
pub const COL_ARTISTS: &str = "Artist(s)";
pub const COL_ALBUM_NAME: &str = "Album Name";
pub const COL_ISRC: &str = "ISRC";
pub const COL_SPOTIFY_URL: &str = "Spotify URL";
pub const COL_DISC_NUMBER: &str = "Disc Number";
pub const COL_TRACK_NUMBER: &str = "Track Number";
pub const COL_UPC: &str = "UPC";
pub const COL_LABEL: &str = "Label";
pub const COL_P_LINE: &str = "℗ Line";
pub const COL_ALBUM_ARTISTS: &str = "Album Artists";
pub const COL_RELEASE_TYPE: &str = "Release Type";
pub const COL_RELEASE_DATE: &str = "Release Date";
pub const COL_TRACK_ARTISTS: &str = "Track Artists";
pub const COL_EXPLICIT: &str = "Explicit";
pub const COL_DURATION: &str = "Duration";

/// Column set and order of one export command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Batch of tracks looked up by ID.
    Tracks,
    Playlist,
    TopTracks,
    /// Tracks of one album with album-level columns appended.
    Album,
    /// Tracks of an artist's discography, album columns first.
    Catalog,
}

impl Layout {
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Layout::Tracks => &[
                COL_ARTISTS,
                COL_TRACK_NAME,
                COL_ISRC,
                COL_SPOTIFY_URL,
                COL_ALBUM_NAME,
            ],
            Layout::Playlist | Layout::TopTracks => &[
                COL_TRACK_NAME,
                COL_ARTISTS,
                COL_ALBUM_NAME,
                COL_ISRC,
                COL_SPOTIFY_URL,
            ],
            Layout::Album => &[
                COL_DISC_NUMBER,
                COL_TRACK_NUMBER,
                COL_TRACK_NAME,
                COL_ALBUM_NAME,
                COL_ARTISTS,
                COL_ISRC,
                COL_SPOTIFY_URL,
                COL_UPC,
                COL_LABEL,
                COL_P_LINE,
            ],
            Layout::Catalog => &[
                COL_ALBUM_NAME,
                COL_ALBUM_ARTISTS,
                COL_RELEASE_TYPE,
                COL_RELEASE_DATE,
                COL_UPC,
                COL_LABEL,
                COL_P_LINE,
                COL_DISC_NUMBER,
                COL_TRACK_NUMBER,
                COL_TRACK_NAME,
                COL_TRACK_ARTISTS,
                COL_ISRC,
                COL_SPOTIFY_URL,
                COL_EXPLICIT,
                COL_DURATION,
            ],
        }
    }

    /// Worksheet name used when this layout is exported.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Layout::Playlist => "Playlist",
            Layout::TopTracks => "Top Tracks",
            _ => "Tracks",
        }
    }
}

/// One exported row: column name to display string, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRow {
    cells: Vec<(String, String)>,
}

impl FlatRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `column`, replacing an earlier value of the same column.
    pub fn set(&mut self, column: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.cells.iter_mut().find(|(c, _)| c == column) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((column.to_string(), value)),
        }
        self
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Renders milliseconds as `m:ss`, e.g. 125000 -> `2:05`.
pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

pub fn isrc(track: &Track) -> String {
    external(&track.external_ids, "isrc")
}

pub fn spotify_url(track: &Track) -> String {
    external(&track.external_urls, "spotify")
}

pub fn album_name(track: &Track) -> String {
    track
        .album
        .as_ref()
        .map(|album| utils::or_na(&album.name))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn external(map: &std::collections::HashMap<String, String>, key: &str) -> String {
    map.get(key)
        .map(|value| utils::or_na(value))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn number(value: Option<u32>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Flattens a standalone track for the `Tracks`, `Playlist` and `TopTracks`
/// layouts. Album-scoped layouts fall back to the `Tracks` column set.
pub fn track_row(layout: Layout, track: &Track) -> FlatRow {
    let layout = match layout {
        Layout::Album | Layout::Catalog => Layout::Tracks,
        other => other,
    };

    let mut row = FlatRow::new();
    for column in layout.columns() {
        let value = match *column {
            COL_TRACK_NAME => utils::or_na(&track.name),
            COL_ARTISTS => utils::join_artist_names(&track.artists),
            COL_ALBUM_NAME => album_name(track),
            COL_ISRC => isrc(track),
            _ => spotify_url(track),
        };
        row.set(column, value);
    }
    row
}

/// Flattens one merged album track with the album's UPC, label and ℗ line.
pub fn album_track_row(album: &AlbumDetails, track: &MergedTrack) -> FlatRow {
    let best = track.best();
    let album_name = match &best.album {
        Some(a) if !a.name.is_empty() => a.name.clone(),
        _ => album.name.clone(),
    };

    let mut row = FlatRow::new();
    row.set(COL_DISC_NUMBER, number(disc_number(track)))
        .set(COL_TRACK_NUMBER, number(track_number(track)))
        .set(COL_TRACK_NAME, utils::or_na(&best.name))
        .set(COL_ALBUM_NAME, album_name)
        .set(COL_ARTISTS, utils::join_artist_names(&best.artists))
        .set(COL_ISRC, isrc(best))
        .set(COL_SPOTIFY_URL, spotify_url(best))
        .set(COL_UPC, album.upc.clone())
        .set(COL_LABEL, album.label.clone())
        .set(COL_P_LINE, album.p_line.clone());
    row
}

/// Flattens one merged album track for a discography export.
pub fn catalog_track_row(album: &AlbumDetails, track: &MergedTrack) -> FlatRow {
    let best = track.best();
    let name = if best.name.is_empty() {
        &track.stub.name
    } else {
        &best.name
    };

    let mut row = FlatRow::new();
    row.set(COL_ALBUM_NAME, album.name.clone())
        .set(COL_ALBUM_ARTISTS, album.artists.clone())
        .set(COL_RELEASE_TYPE, album.album_type.clone())
        .set(COL_RELEASE_DATE, album.release_date.clone())
        .set(COL_UPC, album.upc.clone())
        .set(COL_LABEL, album.label.clone())
        .set(COL_P_LINE, album.p_line.clone())
        .set(COL_DISC_NUMBER, number(disc_number(track)))
        .set(COL_TRACK_NUMBER, number(track_number(track)))
        .set(COL_TRACK_NAME, utils::or_na(name))
        .set(COL_TRACK_ARTISTS, utils::join_artist_names(&best.artists))
        .set(COL_ISRC, isrc(best))
        .set(COL_SPOTIFY_URL, spotify_url(best))
        .set(COL_EXPLICIT, if best.explicit { "TRUE" } else { "FALSE" })
        .set(COL_DURATION, format_duration(best.duration_ms));
    row
}

fn disc_number(track: &MergedTrack) -> Option<u32> {
    track
        .stub
        .disc_number
        .or_else(|| track.full.as_ref().and_then(|f| f.disc_number))
}

fn track_number(track: &MergedTrack) -> Option<u32> {
    track
        .stub
        .track_number
        .or_else(|| track.full.as_ref().and_then(|f| f.track_number))
}
