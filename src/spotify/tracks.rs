use crate::{error::FetchError, spotify::SpotifyClient, types::Track};

/// Maximum number of IDs accepted by `GET /tracks`.
pub const TRACK_CHUNK_SIZE: usize = 50;

/// Result of a chunked batch request.
///
/// `items` stays aligned with the requested IDs: a failed chunk contributes
/// one `None` per ID it covered, and so does an ID Spotify answered with
/// `null`. `errors` holds one entry per failed chunk.
#[derive(Debug, Default)]
pub struct Chunked<T> {
    pub items: Vec<Option<T>>,
    pub errors: Vec<FetchError>,
    pub requests: usize,
}

impl<T> Chunked<T> {
    pub fn found(&self) -> impl Iterator<Item = &T> {
        self.items.iter().flatten()
    }
}

impl SpotifyClient {
    /// Fetches full track records for `ids`, at most 50 per request.
    pub async fn get_tracks<S: AsRef<str>>(&self, ids: &[S]) -> Chunked<Track> {
        let mut chunked = Chunked::default();

        for chunk in ids.chunks(TRACK_CHUNK_SIZE) {
            let joined = chunk
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(",");

            chunked.requests += 1;
            match self
                .get_field::<Vec<Option<Track>>>("/tracks", &[("ids", joined)], "tracks")
                .await
            {
                Ok(mut tracks) => {
                    tracks.resize_with(chunk.len(), || None);
                    chunked.items.extend(tracks);
                }
                Err(e) => {
                    chunked.items.extend(chunk.iter().map(|_| None));
                    chunked.errors.push(e);
                }
            }
        }

        chunked
    }
}
