use crate::{
    error::FetchError,
    spotify::{Paged, SpotifyClient},
    types::{Playlist, PlaylistItem, Track},
};

/// Page size of `GET /playlists/{id}/tracks`.
pub const PLAYLIST_PAGE_SIZE: usize = 100;

impl SpotifyClient {
    /// Playlist name and images, without the embedded first page of tracks.
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Playlist, FetchError> {
        self.get_object(
            &format!("/playlists/{}", playlist_id),
            &[("fields", "id,name,images".to_string())],
            "id",
        )
        .await
    }

    pub async fn get_playlist_items(&self, playlist_id: &str) -> Paged<PlaylistItem> {
        let path = format!("/playlists/{}/tracks", playlist_id);
        self.paginate_path(&path, &[], PLAYLIST_PAGE_SIZE).await
    }
}

/// Drops entries whose track is gone (removed or local tracks come back as
/// `"track": null`).
pub fn playlist_tracks(items: Vec<PlaylistItem>) -> Vec<Track> {
    items.into_iter().filter_map(|item| item.track).collect()
}
