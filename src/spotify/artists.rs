use crate::{
    error::FetchError,
    spotify::{Paged, SpotifyClient},
    types::{Album, Artist, Track},
    utils,
};

/// Page size of `GET /artists/{id}/albums`.
pub const ARTIST_ALBUM_PAGE_SIZE: usize = 50;

/// Release groups requested in one combined listing.
pub const INCLUDE_GROUPS: &str = "album,single,compilation";

impl SpotifyClient {
    pub async fn get_artist(&self, artist_id: &str) -> Result<Artist, FetchError> {
        self.get_object(&format!("/artists/{}", artist_id), &[], "id")
            .await
    }

    /// The artist's most popular tracks in `market`.
    pub async fn get_top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<Track>, FetchError> {
        self.get_field(
            &format!("/artists/{}/top-tracks", artist_id),
            &[("market", market.to_string())],
            "tracks",
        )
        .await
    }

    /// Albums, singles and compilations of an artist available in `market`,
    /// each album once, in the order first listed.
    pub async fn get_artist_albums(&self, artist_id: &str, market: &str) -> Paged<Album> {
        let path = format!("/artists/{}/albums", artist_id);
        let query = [
            ("market", market.to_string()),
            ("include_groups", INCLUDE_GROUPS.to_string()),
        ];

        let mut paged = self
            .paginate_path(&path, &query, ARTIST_ALBUM_PAGE_SIZE)
            .await;
        utils::remove_duplicate_albums(&mut paged.items);
        paged
    }
}
