use std::collections::HashSet;

use crate::{
    flatten::NOT_AVAILABLE,
    types::{Album, SimplifiedArtist},
};

/// Markets offered for artist queries (ISO 3166-1 alpha-2).
pub const MARKETS: &[&str] = &[
    "AD", "AE", "AG", "AL", "AM", "AO", "AR", "AT", "AU", "AZ", "BA", "BB", "BD", "BE", "BF", "BG",
    "BH", "BI", "BJ", "BN", "BO", "BR", "BS", "BT", "BW", "BY", "BZ", "CA", "CD", "CG", "CH", "CI",
    "CL", "CM", "CO", "CR", "CV", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE", "EG",
    "ES", "FI", "FJ", "FM", "FR", "GA", "GB", "GD", "GE", "GH", "GM", "GN", "GQ", "GR", "GT", "GW",
    "GY", "HK", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IN", "IQ", "IS", "IT", "JM", "JO", "JP",
    "KE", "KG", "KH", "KI", "KM", "KN", "KR", "KW", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS",
    "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MG", "MH", "MK", "ML", "MN", "MO", "MR", "MT",
    "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NE", "NG", "NI", "NL", "NO", "NP", "NR", "NZ", "OM",
    "PA", "PE", "PG", "PH", "PK", "PL", "PS", "PT", "PW", "PY", "QA", "RO", "RS", "RW", "SA", "SB",
    "SC", "SE", "SG", "SI", "SK", "SL", "SM", "SN", "SR", "ST", "SV", "SZ", "TD", "TG", "TH", "TJ",
    "TL", "TN", "TO", "TR", "TT", "TV", "TZ", "UA", "UG", "US", "UY", "UZ", "VC", "VE", "VN", "VU",
    "WS", "XK", "ZA", "ZM", "ZW",
];

/// clap value parser for `--market`.
pub fn parse_market(s: &str) -> Result<String, String> {
    let code = s.trim().to_ascii_uppercase();
    if MARKETS.contains(&code.as_str()) {
        Ok(code)
    } else {
        Err(format!("'{}' is not a supported market code", s))
    }
}

/// Keeps the first occurrence of every album ID.
pub fn remove_duplicate_albums(albums: &mut Vec<Album>) {
    let mut seen_ids = HashSet::new();
    albums.retain(|album| seen_ids.insert(album.id.clone()));
}

/// Newest first, ties kept in listing order. Dates compare as strings, which
/// orders zero-padded ISO dates correctly; a year-only date sorts after every
/// full date of that year.
pub fn sort_albums_by_release_date(albums: &mut [Album]) {
    albums.sort_by(|a, b| b.release_date.cmp(&a.release_date));
}

/// An artist's releases split by `album_type`, each bucket newest first.
#[derive(Debug, Clone, Default)]
pub struct Discography {
    pub albums: Vec<Album>,
    pub singles: Vec<Album>,
    pub compilations: Vec<Album>,
}

impl Discography {
    pub fn from_albums(albums: Vec<Album>) -> Self {
        let mut discography = Self::default();
        for album in albums {
            match album.album_type.to_ascii_lowercase().as_str() {
                "single" => discography.singles.push(album),
                "compilation" => discography.compilations.push(album),
                _ => discography.albums.push(album),
            }
        }

        sort_albums_by_release_date(&mut discography.albums);
        sort_albums_by_release_date(&mut discography.singles);
        sort_albums_by_release_date(&mut discography.compilations);
        discography
    }

    /// Buckets in display order with their section titles.
    pub fn sections(&self) -> [(&'static str, &[Album]); 3] {
        [
            ("Albums", self.albums.as_slice()),
            ("Singles", self.singles.as_slice()),
            ("Compilations", self.compilations.as_slice()),
        ]
    }

    pub fn len(&self) -> usize {
        self.albums.len() + self.singles.len() + self.compilations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

/// Artist names joined by `", "`, or `N/A` when there are none.
pub fn join_artist_names(artists: &[SimplifiedArtist]) -> String {
    let names = artists
        .iter()
        .map(|a| a.name.as_str())
        .filter(|name| !name.is_empty())
        .collect::<Vec<&str>>()
        .join(", ");
    or_na(&names)
}

pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Replaces characters that are not allowed in file names on common
/// platforms.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = cleaned.trim().trim_matches('.');
    if trimmed.is_empty() {
        "export".to_string()
    } else {
        trimmed.to_string()
    }
}
