use crate::{
    cli::shared::{self, ExportOptions, InputOptions},
    export::Sheet,
    flatten::{self, FlatRow, Layout},
    info,
    normalize::EntityKind,
    spotify::playlist_tracks,
    warning,
};

pub async fn playlist(input: InputOptions, options: ExportOptions) {
    let batch = shared::parse_input(EntityKind::Playlist, &input).await;
    if batch.is_empty() {
        warning!("No valid playlist IDs found.");
        return;
    }

    let client = shared::connect().await;
    let mut writer = options.writer();
    let mut all_rows: Vec<FlatRow> = Vec::new();
    let mut exported = 0;

    for playlist in &batch.refs {
        let pb = shared::spinner(format!("Fetching playlist {}...", playlist.id));
        let meta = client.get_playlist(&playlist.id).await;
        let items = client.get_playlist_items(&playlist.id).await;
        pb.finish_and_clear();

        let (name, image) = match meta {
            Ok(meta) => (meta.name, meta.images.first().map(|i| i.url.clone())),
            Err(e) => {
                warning!("Error fetching playlist {}: {}", playlist.id, e);
                (playlist.id.clone(), None)
            }
        };

        if let Some(e) = &items.error {
            warning!(
                "Playlist {} stopped after {} items: {}",
                name,
                items.items.len(),
                e
            );
        }

        let rows: Vec<FlatRow> = playlist_tracks(items.items)
            .iter()
            .map(|track| flatten::track_row(Layout::Playlist, track))
            .collect();

        if rows.is_empty() {
            warning!("No tracks found or invalid playlist: {}", playlist.id);
            continue;
        }

        info!("{}", name);
        if let Some(image) = image {
            info!("Cover art: {}", image);
        }

        let sheet = Sheet::from_rows(Layout::Playlist.sheet_name(), &rows);
        shared::emit(
            &mut writer,
            &format!("{}_playlist_tracks", name),
            &sheet,
            options.preview(),
        )
        .await;

        all_rows.extend(rows);
        exported += 1;
    }

    if exported > 1 {
        let combined = Sheet::from_rows(Layout::Playlist.sheet_name(), &all_rows);
        shared::emit(&mut writer, "All_Playlists_Tracks", &combined, false).await;
    }
}
