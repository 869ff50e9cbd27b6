use crate::{
    cli::shared::{self, ExportOptions, InputOptions},
    export::Sheet,
    flatten::{self, FlatRow, Layout},
    normalize::EntityKind,
    warning,
};

pub async fn tracks(input: InputOptions, max: Option<usize>, options: ExportOptions) {
    let batch = shared::parse_input(EntityKind::Track, &input).await;
    if batch.is_empty() {
        warning!("No valid track IDs found.");
        return;
    }

    let mut ids: Vec<String> = batch.refs.into_iter().map(|r| r.id).collect();
    if let Some(max) = max {
        if ids.len() > max {
            warning!(
                "You entered {} track IDs. Only the first {} will be processed.",
                ids.len(),
                max
            );
            ids.truncate(max);
        }
    }

    let client = shared::connect().await;
    let mut writer = options.writer();

    let pb = shared::spinner(format!("Fetching {} tracks...", ids.len()));
    let chunked = client.get_tracks(&ids).await;
    pb.finish_and_clear();

    for e in &chunked.errors {
        warning!("Error fetching tracks: {}", e);
    }

    let rows: Vec<FlatRow> = chunked
        .found()
        .map(|track| flatten::track_row(Layout::Tracks, track))
        .collect();

    if rows.is_empty() {
        warning!("No valid tracks found.");
        return;
    }

    let sheet = Sheet::from_rows(Layout::Tracks.sheet_name(), &rows);
    shared::emit(&mut writer, "spotify_tracks", &sheet, options.preview()).await;
}
