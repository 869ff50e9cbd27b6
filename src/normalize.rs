//! Identifier normalisation.
//!
//! Turns one logical identifier of free-form user input into the canonical
//! Spotify ID of a track, album, artist or playlist. Three input shapes are
//! understood:
//!
//! - URI form `spotify:<kind>:<id>`
//! - web URL form `https://open.spotify.com/<kind>/<id>?si=...`
//! - bare ID form
//!
//! Batch input is split into items first and every item is normalised on its
//! own, so one bad line never stops the valid ones.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

const URI_PREFIX: &str = "spotify:";
const WEB_HOST: &str = "open.spotify.com";

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"open\.spotify\.com/(?:intl-[A-Za-z-]+/)?([a-z]+)/([^/?#\s]+)")
        .expect("static regex is valid")
});

static TRACK_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{22}$").expect("static regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Track,
    Album,
    Artist,
    Playlist,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Track => "track",
            EntityKind::Album => "album",
            EntityKind::Artist => "artist",
            EntityKind::Playlist => "playlist",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "track" => Ok(EntityKind::Track),
            "album" => Ok(EntityKind::Album),
            "artist" => Ok(EntityKind::Artist),
            "playlist" => Ok(EntityKind::Playlist),
            other => Err(format!("unknown entity kind '{}'", other)),
        }
    }
}

/// A canonical reference to one Spotify entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
}

impl EntityRef {
    pub fn uri(&self) -> String {
        format!("{}{}:{}", URI_PREFIX, self.kind, self.id)
    }
}

/// Normalises a single identifier of the expected `kind`.
pub fn normalize(kind: EntityKind, raw: &str) -> Result<EntityRef, ParseError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let id = if input.starts_with(URI_PREFIX) {
        parse_uri(kind, input)?
    } else if input.contains(WEB_HOST) {
        parse_url(kind, input)?
    } else {
        input.to_string()
    };

    validate_id(kind, &id)?;
    Ok(EntityRef { kind, id })
}

fn parse_uri(kind: EntityKind, input: &str) -> Result<String, ParseError> {
    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() != 3 || parts[2].is_empty() {
        return Err(ParseError::MalformedUri(input.to_string()));
    }

    if parts[1] != kind.as_str() {
        return Err(ParseError::InvalidUriKind {
            input: input.to_string(),
            expected: kind,
            found: parts[1].to_string(),
        });
    }

    Ok(parts[2].to_string())
}

fn parse_url(kind: EntityKind, input: &str) -> Result<String, ParseError> {
    URL_PATTERN
        .captures(input)
        .filter(|caps| &caps[1] == kind.as_str())
        .map(|caps| caps[2].to_string())
        .ok_or_else(|| ParseError::UnrecognizedUrl {
            input: input.to_string(),
            expected: kind,
        })
}

// Track IDs are shape-checked; other kinds only reject tokens that can never
// be an ID segment and leave the rest to the API.
fn validate_id(kind: EntityKind, id: &str) -> Result<(), ParseError> {
    let valid = match kind {
        EntityKind::Track => TRACK_ID_PATTERN.is_match(id),
        _ => !id.chars().any(|c| c.is_whitespace() || matches!(c, ':' | '/' | '?' | '#')),
    };

    if valid {
        Ok(())
    } else {
        Err(ParseError::InvalidId {
            kind,
            id: id.to_string(),
        })
    }
}

/// One item of batch input that failed to normalise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based position of the item in the split input.
    pub line: usize,
    pub input: String,
    pub error: ParseError,
}

/// Outcome of normalising a whole batch: the references that parsed and the
/// items that did not, both in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchParse {
    pub refs: Vec<EntityRef>,
    pub errors: Vec<LineError>,
}

impl BatchParse {
    pub fn ids(&self) -> Vec<&str> {
        self.refs.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

/// Splits free-form text into identifier items, one per line or
/// comma-separated entry, dropping blank items.
pub fn split_items(text: &str) -> Vec<&str> {
    text.lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Normalises every item of `text`, collecting failures instead of stopping.
pub fn normalize_batch(kind: EntityKind, text: &str) -> BatchParse {
    let mut batch = BatchParse::default();

    for (idx, item) in split_items(text).into_iter().enumerate() {
        match normalize(kind, item) {
            Ok(entity) => batch.refs.push(entity),
            Err(error) => batch.errors.push(LineError {
                line: idx + 1,
                input: item.to_string(),
                error,
            }),
        }
    }

    batch
}
