use crate::{
    error::FetchError,
    flatten::NOT_AVAILABLE,
    merge::{self, MergeReport},
    spotify::{Paged, SpotifyClient},
    types::{Album, AlbumDetails, Track},
    utils,
};

/// Page size of `GET /albums/{id}/tracks`.
pub const ALBUM_PAGE_SIZE: usize = 50;

/// Everything needed to export one album.
#[derive(Debug)]
pub struct AlbumExport {
    pub details: AlbumDetails,
    pub merge: MergeReport,
    /// Failed pages and chunks; the rows built from the rest are kept.
    pub warnings: Vec<FetchError>,
}

impl SpotifyClient {
    pub async fn get_album(&self, album_id: &str) -> Result<Album, FetchError> {
        self.get_object(&format!("/albums/{}", album_id), &[], "id")
            .await
    }

    /// All track stubs of an album, in album order.
    pub async fn get_album_tracks(&self, album_id: &str) -> Paged<Track> {
        let path = format!("/albums/{}/tracks", album_id);
        self.paginate_path(&path, &[], ALBUM_PAGE_SIZE).await
    }

    /// Album metadata, track stubs and full track records merged by position.
    pub async fn get_album_export(&self, album_id: &str) -> Result<AlbumExport, FetchError> {
        let album = self.get_album(album_id).await?;
        let details = album_details(&album);

        let mut warnings = Vec::new();
        let listing = self.get_album_tracks(album_id).await;
        if let Some(e) = listing.error {
            warnings.push(e);
        }

        let full = self.get_tracks_for_stubs(&listing.items, &mut warnings).await;

        Ok(AlbumExport {
            details,
            merge: merge::merge_positional(listing.items, full),
            warnings,
        })
    }

    // Stubs without an ID (local files) get no full record, keeping later
    // positions aligned.
    async fn get_tracks_for_stubs(
        &self,
        stubs: &[Track],
        warnings: &mut Vec<FetchError>,
    ) -> Vec<Option<Track>> {
        let ids: Vec<String> = stubs.iter().filter_map(|t| t.id.clone()).collect();
        let chunked = self.get_tracks(&ids).await;
        warnings.extend(chunked.errors);

        let mut found = chunked.items.into_iter();
        stubs
            .iter()
            .map(|stub| match stub.id {
                Some(_) => found.next().flatten(),
                None => None,
            })
            .collect()
    }
}

/// Extracts the album-level export fields: cover art (first image, the
/// largest by API convention), UPC, label and the first ℗ copyright line.
pub fn album_details(album: &Album) -> AlbumDetails {
    let p_line = album
        .copyrights
        .iter()
        .find(|c| c.kind == "P")
        .map(|c| c.text.clone())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    AlbumDetails {
        id: album.id.clone(),
        name: utils::or_na(&album.name),
        artists: utils::join_artist_names(&album.artists),
        album_type: utils::capitalize(&album.album_type),
        release_date: utils::or_na(&album.release_date),
        upc: album
            .external_ids
            .get("upc")
            .map(|upc| utils::or_na(upc))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        label: album
            .label
            .as_deref()
            .map(utils::or_na)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        p_line,
        cover_url: album.images.first().map(|image| image.url.clone()),
    }
}
