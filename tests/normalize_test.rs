use spotmeta::error::ParseError;
use spotmeta::normalize::*;

const TRACK_ID: &str = "4cOdK2wGLETKBW3PvgPWqT";

#[test]
fn test_track_uri() {
    let entity = normalize(EntityKind::Track, "spotify:track:4cOdK2wGLETKBW3PvgPWqT").unwrap();
    assert_eq!(entity.kind, EntityKind::Track);
    assert_eq!(entity.id, TRACK_ID);
    assert_eq!(entity.uri(), format!("spotify:track:{}", TRACK_ID));
}

#[test]
fn test_uri_with_wrong_kind() {
    let err = normalize(EntityKind::Track, "spotify:album:1ATL5GLyefJaxhQzSPVrLX").unwrap_err();
    match err {
        ParseError::InvalidUriKind {
            expected, found, ..
        } => {
            assert_eq!(expected, EntityKind::Track);
            assert_eq!(found, "album");
        }
        other => panic!("Expected InvalidUriKind, got {:?}", other),
    }
}

#[test]
fn test_malformed_uri() {
    // Too few and too many segments
    assert!(matches!(
        normalize(EntityKind::Track, "spotify:track"),
        Err(ParseError::MalformedUri(_))
    ));
    assert!(matches!(
        normalize(EntityKind::Album, "spotify:album:abc:extra"),
        Err(ParseError::MalformedUri(_))
    ));
    assert!(matches!(
        normalize(EntityKind::Album, "spotify:album:"),
        Err(ParseError::MalformedUri(_))
    ));
}

#[test]
fn test_track_url_ignores_query() {
    let urls = [
        "https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT",
        "https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT?si=1a2b3c4d5e",
        "open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT?si=x&context=y",
        "  https://open.spotify.com/intl-de/track/4cOdK2wGLETKBW3PvgPWqT?si=z  ",
    ];

    for url in urls {
        let entity = normalize(EntityKind::Track, url).unwrap();
        assert_eq!(entity.id, TRACK_ID, "failed for {}", url);
    }
}

#[test]
fn test_other_kind_urls() {
    let album = normalize(
        EntityKind::Album,
        "https://open.spotify.com/album/1ATL5GLyefJaxhQzSPVrLX?si=abc",
    )
    .unwrap();
    assert_eq!(album.id, "1ATL5GLyefJaxhQzSPVrLX");

    let artist = normalize(
        EntityKind::Artist,
        "https://open.spotify.com/artist/0TnOYISbd1XYRBk9myaseg/",
    )
    .unwrap();
    assert_eq!(artist.id, "0TnOYISbd1XYRBk9myaseg");

    let playlist = normalize(
        EntityKind::Playlist,
        "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M#top",
    )
    .unwrap();
    assert_eq!(playlist.id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_unrecognized_url() {
    // No kind segment at all
    assert!(matches!(
        normalize(EntityKind::Track, "https://open.spotify.com/"),
        Err(ParseError::UnrecognizedUrl { .. })
    ));

    // A URL of another kind
    assert!(matches!(
        normalize(
            EntityKind::Track,
            "https://open.spotify.com/album/1ATL5GLyefJaxhQzSPVrLX"
        ),
        Err(ParseError::UnrecognizedUrl { .. })
    ));
}

#[test]
fn test_bare_track_id_is_shape_checked() {
    assert_eq!(normalize(EntityKind::Track, TRACK_ID).unwrap().id, TRACK_ID);

    for bad in ["abc", "4cOdK2wGLETKBW3PvgPWqT1", "4cOdK2wGLETKBW3PvgPW-T"] {
        assert!(
            matches!(
                normalize(EntityKind::Track, bad),
                Err(ParseError::InvalidId { .. })
            ),
            "expected {} to be rejected",
            bad
        );
    }

    // Short URL IDs are rejected as well
    assert!(matches!(
        normalize(EntityKind::Track, "https://open.spotify.com/track/abc"),
        Err(ParseError::InvalidId { .. })
    ));
}

#[test]
fn test_bare_ids_of_other_kinds_pass_through() {
    assert_eq!(normalize(EntityKind::Album, "abc").unwrap().id, "abc");
    assert_eq!(
        normalize(EntityKind::Playlist, "  37i9dQZF1DXcBWIGoYBM5M ")
            .unwrap()
            .id,
        "37i9dQZF1DXcBWIGoYBM5M"
    );

    assert!(matches!(
        normalize(EntityKind::Artist, "two words"),
        Err(ParseError::InvalidId { .. })
    ));
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize(EntityKind::Track, "   "), Err(ParseError::Empty));
}

#[test]
fn test_split_items() {
    let text = "a\n\n  b , c\r\n,\nd ";
    assert_eq!(split_items(text), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_batch_keeps_valid_items_and_collects_errors() {
    let text = "\
spotify:track:4cOdK2wGLETKBW3PvgPWqT
spotify:album:1ATL5GLyefJaxhQzSPVrLX
https://open.spotify.com/track/7ouMYWpwJ422jRcDASZB7P?si=1
not-an-id
3n3Ppam7vgaVa1iaRUc9Lp";

    let batch = normalize_batch(EntityKind::Track, text);

    assert_eq!(
        batch.ids(),
        vec![
            "4cOdK2wGLETKBW3PvgPWqT",
            "7ouMYWpwJ422jRcDASZB7P",
            "3n3Ppam7vgaVa1iaRUc9Lp"
        ]
    );
    assert_eq!(batch.errors.len(), 2);
    assert_eq!(batch.errors[0].line, 2);
    assert!(matches!(
        batch.errors[0].error,
        ParseError::InvalidUriKind { .. }
    ));
    assert_eq!(batch.errors[1].line, 4);
    assert_eq!(batch.errors[1].input, "not-an-id");
}

#[test]
fn test_batch_of_only_errors_is_empty() {
    let batch = normalize_batch(EntityKind::Track, "spotify:artist:x\nfoo");
    assert!(batch.is_empty());
    assert_eq!(batch.errors.len(), 2);
}

#[test]
fn test_entity_kind_round_trip() {
    for kind in [
        EntityKind::Track,
        EntityKind::Album,
        EntityKind::Artist,
        EntityKind::Playlist,
    ] {
        assert_eq!(kind.to_string().parse::<EntityKind>(), Ok(kind));
    }
    assert!("episode".parse::<EntityKind>().is_err());
}
