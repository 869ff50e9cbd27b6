use crate::{
    cli::shared::{self, ExportOptions, InputOptions},
    export::Sheet,
    flatten::{self, FlatRow, Layout},
    info,
    normalize::EntityKind,
    warning,
};

pub async fn top_tracks(input: InputOptions, market: String, options: ExportOptions) {
    let batch = shared::parse_input(EntityKind::Artist, &input).await;
    if batch.is_empty() {
        warning!("No valid artist IDs found.");
        return;
    }

    let client = shared::connect().await;
    let mut writer = options.writer();
    let mut all_rows: Vec<FlatRow> = Vec::new();
    let mut exported = 0;

    for artist in &batch.refs {
        let pb = shared::spinner(format!("Fetching top tracks of {}...", artist.id));
        let meta = client.get_artist(&artist.id).await;
        let top = client.get_top_tracks(&artist.id, &market).await;
        pb.finish_and_clear();

        let (name, image) = match meta {
            Ok(meta) => (meta.name, meta.images.first().map(|i| i.url.clone())),
            Err(e) => {
                warning!("Error fetching artist {}: {}", artist.id, e);
                (artist.id.clone(), None)
            }
        };

        let tracks = match top {
            Ok(tracks) => tracks,
            Err(e) => {
                warning!("Error fetching top tracks of {}: {}", name, e);
                continue;
            }
        };

        if tracks.is_empty() {
            warning!("No top tracks found for {} in market {}.", name, market);
            continue;
        }

        info!("{} ({})", name, market);
        if let Some(image) = image {
            info!("Artist image: {}", image);
        }

        let rows: Vec<FlatRow> = tracks
            .iter()
            .map(|track| flatten::track_row(Layout::TopTracks, track))
            .collect();

        let sheet = Sheet::from_rows(Layout::TopTracks.sheet_name(), &rows);
        shared::emit(
            &mut writer,
            &format!("{}_top_tracks", name),
            &sheet,
            options.preview(),
        )
        .await;

        all_rows.extend(rows);
        exported += 1;
    }

    if exported > 1 {
        let combined = Sheet::from_rows(Layout::TopTracks.sheet_name(), &all_rows);
        shared::emit(&mut writer, "All_Artists_Top_Tracks", &combined, false).await;
    }
}
