use std::time::Instant;

use crate::{
    cli::shared::{self, ExportOptions, InputOptions},
    export::{Sheet, SheetWriter},
    flatten::{self, FlatRow, Layout},
    info,
    normalize::EntityKind,
    spotify::SpotifyClient,
    success,
    utils::Discography,
    warning,
};

pub async fn catalog(input: InputOptions, market: String, per_album: bool, options: ExportOptions) {
    let batch = shared::parse_input(EntityKind::Artist, &input).await;
    if batch.is_empty() {
        warning!("Please enter at least one valid artist ID.");
        return;
    }

    let client = shared::connect().await;
    let mut writer = options.writer();
    let started = Instant::now();
    let mut all_rows: Vec<FlatRow> = Vec::new();
    let mut exported = 0;

    for artist in &batch.refs {
        let name = match client.get_artist(&artist.id).await {
            Ok(meta) => meta.name,
            Err(e) => {
                warning!("Error fetching artist {}: {}", artist.id, e);
                artist.id.clone()
            }
        };

        let rows = artist_catalog(
            &client,
            &mut writer,
            &name,
            &artist.id,
            &market,
            per_album,
            &options,
        )
        .await;
        if rows.is_empty() {
            continue;
        }

        let sheet = Sheet::from_rows(Layout::Catalog.sheet_name(), &rows);
        shared::emit(&mut writer, &format!("{}_catalog", name), &sheet, false).await;

        all_rows.extend(rows);
        exported += 1;
    }

    success!(
        "Processed {} artist(s) in {:.2} seconds.",
        batch.refs.len(),
        started.elapsed().as_secs_f64()
    );

    if exported > 1 {
        let combined = Sheet::from_rows(Layout::Catalog.sheet_name(), &all_rows);
        shared::emit(&mut writer, "All_Artist_Releases", &combined, false).await;
    } else if exported == 0 {
        warning!("No data was collected.");
    }
}

/// Rows of one artist's discography: albums, then singles, then
/// compilations, each newest first.
async fn artist_catalog(
    client: &SpotifyClient,
    writer: &mut SheetWriter,
    name: &str,
    artist_id: &str,
    market: &str,
    per_album: bool,
    options: &ExportOptions,
) -> Vec<FlatRow> {
    let pb = shared::spinner(format!("Fetching releases of {}...", name));
    let listing = client.get_artist_albums(artist_id, market).await;
    pb.finish_and_clear();

    if let Some(e) = &listing.error {
        warning!(
            "Release listing of {} stopped after {} releases: {}",
            name,
            listing.items.len(),
            e
        );
    }

    let discography = Discography::from_albums(listing.items);
    if discography.is_empty() {
        warning!("No albums found for {} in market {}.", name, market);
        return Vec::new();
    }

    info!("{}: {} release(s)", name, discography.len());
    let mut rows = Vec::new();

    for (section, albums) in discography.sections() {
        if albums.is_empty() {
            continue;
        }
        info!("{} ({})", section, albums.len());

        for album in albums {
            let pb = shared::spinner(format!("Fetching {}...", album.name));
            let result = client.get_album_export(&album.id).await;
            pb.finish_and_clear();

            let export = match result {
                Ok(export) => export,
                Err(e) => {
                    warning!("Error fetching album {}: {}", album.name, e);
                    continue;
                }
            };

            for e in &export.warnings {
                warning!("{} is incomplete: {}", album.name, e);
            }
            if !export.merge.is_aligned() {
                warning!(
                    "{}: {} track(s) did not line up with their full records.",
                    album.name,
                    export.merge.misaligned
                );
            }

            let album_rows: Vec<FlatRow> = export
                .merge
                .tracks
                .iter()
                .map(|track| flatten::catalog_track_row(&export.details, track))
                .collect();

            if per_album && !album_rows.is_empty() {
                let sheet = Sheet::from_rows(Layout::Catalog.sheet_name(), &album_rows);
                shared::emit(
                    writer,
                    &format!("{}_tracks", export.details.name),
                    &sheet,
                    options.preview(),
                )
                .await;
            }

            rows.extend(album_rows);
        }
    }

    rows
}
