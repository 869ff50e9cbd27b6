use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

// Spotify sends `null` for several optional objects; treat them like absent.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
}

/// A track as returned by `/tracks`, `/artists/{id}/top-tracks` and playlist
/// items. Items of `/albums/{id}/tracks` use the same shape without `album`
/// and `external_ids`; those are the "stubs" merged with full records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub album: Option<AlbumRef>,
    #[serde(default, deserialize_with = "null_default")]
    pub external_ids: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_default")]
    pub external_urls: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_default")]
    pub duration_ms: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub explicit: bool,
    #[serde(default)]
    pub disc_number: Option<u32>,
    #[serde(default)]
    pub track_number: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Copyright {
    #[serde(default, deserialize_with = "null_default")]
    pub text: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub kind: String,
}

/// A full album from `/albums/{id}`; the simplified albums listed by
/// `/artists/{id}/albums` deserialise into the same type with the label,
/// copyrights and external IDs left empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub album_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub release_date: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<Image>,
    #[serde(default, deserialize_with = "null_default")]
    pub external_ids: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_default")]
    pub copyrights: Vec<Copyright>,
    #[serde(default, deserialize_with = "null_default")]
    pub artists: Vec<SimplifiedArtist>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<Image>,
}

/// One entry of `/playlists/{id}/tracks`. `track` is null for removed or
/// unavailable local tracks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<Track>,
}

/// Album-level fields repeated on every row of an album or catalog export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumDetails {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub album_type: String,
    pub release_date: String,
    pub upc: String,
    pub label: String,
    pub p_line: String,
    pub cover_url: Option<String>,
}

/// A track stub paired with the full record found at the same position.
#[derive(Debug, Clone)]
pub struct MergedTrack {
    pub stub: Track,
    pub full: Option<Track>,
}

