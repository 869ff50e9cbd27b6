use crate::{
    cli::shared::{self, ExportOptions, InputOptions},
    export::Sheet,
    flatten::{self, FlatRow, Layout},
    info,
    normalize::EntityKind,
    warning,
};

pub async fn albums(input: InputOptions, options: ExportOptions) {
    let batch = shared::parse_input(EntityKind::Album, &input).await;
    if batch.is_empty() {
        warning!("No valid album IDs found.");
        return;
    }

    let client = shared::connect().await;
    let mut writer = options.writer();
    let mut all_rows: Vec<FlatRow> = Vec::new();
    let mut exported = 0;

    for album in &batch.refs {
        let pb = shared::spinner(format!("Fetching album {}...", album.id));
        let result = client.get_album_export(&album.id).await;
        pb.finish_and_clear();

        let export = match result {
            Ok(export) => export,
            Err(e) => {
                warning!("Error fetching album {}: {}", album.id, e);
                continue;
            }
        };

        for e in &export.warnings {
            warning!("Album {} is incomplete: {}", album.id, e);
        }
        if !export.merge.is_aligned() {
            warning!(
                "Album {}: {} track(s) did not line up with their full records.",
                album.id,
                export.merge.misaligned
            );
        }
        if export.merge.tracks.is_empty() {
            warning!("No tracks found for album {}.", export.details.name);
            continue;
        }

        info!("{}", export.details.name);
        if let Some(cover) = &export.details.cover_url {
            info!("Cover art: {}", cover);
        }

        let rows: Vec<FlatRow> = export
            .merge
            .tracks
            .iter()
            .map(|track| flatten::album_track_row(&export.details, track))
            .collect();

        let sheet = Sheet::from_rows(Layout::Album.sheet_name(), &rows);
        shared::emit(
            &mut writer,
            &format!("{}_tracks", export.details.name),
            &sheet,
            options.preview(),
        )
        .await;

        all_rows.extend(rows);
        exported += 1;
    }

    if exported > 1 {
        let combined = Sheet::from_rows(Layout::Album.sheet_name(), &all_rows);
        shared::emit(&mut writer, "All_Albums_Tracks", &combined, false).await;
    }
}
