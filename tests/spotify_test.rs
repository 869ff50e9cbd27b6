use serde_json::{Value, json};
use spotmeta::error::{AuthError, FetchError};
use spotmeta::spotify::*;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn client(server: &MockServer) -> SpotifyClient {
    SpotifyClient::with_token(BearerToken::new("test-token"), server.uri())
}

fn track_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Track {}", id),
        "artists": [{ "id": "ar", "name": "Artist" }],
        "album": { "id": "al", "name": "Album" },
        "external_ids": { "isrc": format!("ISRC{}", id) },
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{}", id) },
        "duration_ms": 200000,
        "explicit": false,
        "disc_number": 1,
        "track_number": 1
    })
}

fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("id{:03}", i)).collect()
}

// Answers GET /tracks with one full record per requested ID, in request
// order. IDs starting with "bad" make the whole chunk fail with an error
// payload; IDs starting with "gone" come back as null.
struct TracksResponder;

impl Respond for TracksResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let ids = request
            .url
            .query_pairs()
            .find(|(k, _)| k == "ids")
            .map(|(_, v)| v.to_string())
            .unwrap_or_default();

        if ids.split(',').any(|id| id.starts_with("bad")) {
            return ResponseTemplate::new(400)
                .set_body_json(json!({ "error": { "status": 400, "message": "invalid id" } }));
        }

        let tracks: Vec<Value> = ids
            .split(',')
            .map(|id| {
                if id.starts_with("gone") {
                    Value::Null
                } else {
                    track_json(id)
                }
            })
            .collect();
        ResponseTemplate::new(200).set_body_json(json!({ "tracks": tracks }))
    }
}

fn page_json(items: Vec<Value>, next: Option<&str>) -> Value {
    json!({ "items": items, "next": next })
}

#[tokio::test]
async fn test_client_credentials_token() {
    let server = MockServer::start().await;
    let credentials = ClientCredentials::new("id", "secret", format!("{}/api/token", server.uri()));

    // base64("id:secret")
    assert_eq!(credentials.basic_auth_header(), "Basic aWQ6c2VjcmV0");

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", "Basic aWQ6c2VjcmV0"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "BQD-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = credentials.token().await.unwrap();
    assert_eq!(token.as_str(), "BQD-token");
}

#[tokio::test]
async fn test_token_error_keeps_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid_client" })),
        )
        .mount(&server)
        .await;

    let credentials = ClientCredentials::new("id", "wrong", format!("{}/api/token", server.uri()));
    match credentials.token().await {
        Err(AuthError::MissingToken { payload }) => assert!(payload.contains("invalid_client")),
        other => panic!("Expected MissingToken, got {:?}", other),
    }
}

#[tokio::test]
async fn test_authorize_with_static_token_sends_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artists/abc"))
        .and(header("authorization", "Bearer static"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc",
            "name": "Artist",
            "images": [{ "url": "https://i.scdn.co/image/a" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = StaticToken(BearerToken::new("static"));
    let client = SpotifyClient::authorize(&provider, format!("{}/", server.uri()))
        .await
        .unwrap();

    let artist = client.get_artist("abc").await.unwrap();
    assert_eq!(artist.name, "Artist");
    assert_eq!(artist.images.len(), 1);
}

#[tokio::test]
async fn test_tracks_are_chunked_by_fifty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(TracksResponder)
        .expect(3)
        .mount(&server)
        .await;

    let ids = ids(120);
    let chunked = client(&server).get_tracks(&ids).await;

    assert_eq!(chunked.requests, 3);
    assert!(chunked.errors.is_empty());
    let returned: Vec<&str> = chunked
        .found()
        .filter_map(|t| t.id.as_deref())
        .collect();
    assert_eq!(returned, ids.iter().map(String::as_str).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_failed_chunk_does_not_abort_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(TracksResponder)
        .expect(3)
        .mount(&server)
        .await;

    let mut ids = ids(120);
    ids[60] = "bad-id".to_string();
    ids[5] = "gone-id".to_string();

    let chunked = client(&server).get_tracks(&ids).await;

    // Still aligned with the input
    assert_eq!(chunked.items.len(), 120);
    assert_eq!(chunked.errors.len(), 1);
    assert!(matches!(
        &chunked.errors[0],
        FetchError::MissingField { field: "tracks", payload } if payload.contains("invalid id")
    ));

    // Chunk 2 (IDs 50..100) is lost, ID 5 came back null
    assert!(chunked.items[50..100].iter().all(Option::is_none));
    assert!(chunked.items[5].is_none());
    assert_eq!(chunked.found().count(), 120 - 50 - 1);
    assert_eq!(
        chunked.items[100].as_ref().and_then(|t| t.id.as_deref()),
        Some("id100")
    );
}

#[tokio::test]
async fn test_no_ids_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(TracksResponder)
        .expect(0)
        .mount(&server)
        .await;

    let chunked = client(&server).get_tracks::<String>(&[]).await;
    assert!(chunked.items.is_empty());
    assert_eq!(chunked.requests, 0);
}

#[tokio::test]
async fn test_playlist_pages_and_null_tracks() {
    let server = MockServer::start().await;

    let mut first: Vec<Value> = (0..100)
        .map(|i| json!({ "track": track_json(&format!("p{}", i)) }))
        .collect();
    first[10] = json!({ "track": null });
    let second: Vec<Value> = (100..150)
        .map(|i| json!({ "track": track_json(&format!("p{}", i)) }))
        .collect();

    Mock::given(method("GET"))
        .and(path("/playlists/pl1/tracks"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(first, Some("https://next"))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlists/pl1/tracks"))
        .and(query_param("offset", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(second, None)))
        .expect(1)
        .mount(&server)
        .await;

    let paged = client(&server).get_playlist_items("pl1").await;
    assert!(paged.is_complete());
    assert_eq!(paged.requests, 2);
    assert_eq!(paged.items.len(), 150);

    let tracks = playlist_tracks(paged.items);
    assert_eq!(tracks.len(), 149);
    assert_eq!(tracks[0].id.as_deref(), Some("p0"));
    assert_eq!(tracks[148].id.as_deref(), Some("p149"));
}

#[tokio::test]
async fn test_playlist_metadata_and_missing_playlist() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists/pl1"))
        .and(query_param("fields", "id,name,images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pl1",
            "name": "Road Trip",
            "images": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlists/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "status": 404, "message": "Resource not found" }
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    assert_eq!(client.get_playlist("pl1").await.unwrap().name, "Road Trip");

    match client.get_playlist("missing").await {
        Err(FetchError::MissingField { field, payload }) => {
            assert_eq!(field, "id");
            assert!(payload.contains("Resource not found"));
        }
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_page_keeps_earlier_items() {
    let server = MockServer::start().await;
    let first: Vec<Value> = (0..100)
        .map(|i| json!({ "track": track_json(&format!("p{}", i)) }))
        .collect();

    Mock::given(method("GET"))
        .and(path("/playlists/pl2/tracks"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(first, Some("https://next"))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlists/pl2/tracks"))
        .and(query_param("offset", "100"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let paged = client(&server).get_playlist_items("pl2").await;
    assert_eq!(paged.items.len(), 100);
    assert!(matches!(paged.error, Some(FetchError::Decode(ref body)) if body == "Bad Gateway"));
}

#[tokio::test]
async fn test_artist_albums_are_deduplicated() {
    let server = MockServer::start().await;

    let album = |id: &str, kind: &str| {
        json!({ "id": id, "name": format!("Release {}", id), "album_type": kind, "release_date": "2020-01-01" })
    };
    let mut first: Vec<Value> = (0..50).map(|i| album(&format!("a{}", i), "album")).collect();
    first[49] = album("a0", "album");
    let second = vec![album("a1", "album"), album("s1", "single")];

    Mock::given(method("GET"))
        .and(path("/artists/ar1/albums"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "50"))
        .and(query_param("market", "DE"))
        .and(query_param("include_groups", INCLUDE_GROUPS))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(first, Some("https://next"))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/artists/ar1/albums"))
        .and(query_param("offset", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(second, None)))
        .expect(1)
        .mount(&server)
        .await;

    let paged = client(&server).get_artist_albums("ar1", "DE").await;
    assert!(paged.is_complete());

    let ids: Vec<&str> = paged.items.iter().map(|a| a.id.as_str()).collect();
    // 49 unique from page one, a1 repeated, s1 new
    assert_eq!(ids.len(), 50);
    assert_eq!(ids[0], "a0");
    assert_eq!(ids[49], "s1");
}

#[tokio::test]
async fn test_top_tracks_use_market() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artists/ar1/top-tracks"))
        .and(query_param("market", "SE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track_json("t1"), track_json("t2")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tracks = client(&server).get_top_tracks("ar1", "SE").await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[1].id.as_deref(), Some("t2"));
}

#[tokio::test]
async fn test_album_export_merges_by_position() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/albums/al1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "al1",
            "name": "Album One",
            "album_type": "album",
            "release_date": "2021-09-03",
            "label": "Label",
            "images": [{ "url": "https://i.scdn.co/image/cover" }],
            "external_ids": { "upc": "123456789012" },
            "copyrights": [{ "text": "(P) 2021 Label", "type": "P" }],
            "artists": [{ "id": "ar1", "name": "Artist" }]
        })))
        .mount(&server)
        .await;

    let stub = |i: usize| {
        json!({
            "id": format!("s{}", i),
            "name": format!("Stub {}", i),
            "artists": [{ "name": "Artist" }],
            "disc_number": 1,
            "track_number": i + 1
        })
    };
    let first: Vec<Value> = (0..50).map(stub).collect();
    let mut second: Vec<Value> = (50..55).map(stub).collect();
    // A local file without an ID
    second.push(json!({ "id": null, "name": "Local", "track_number": 56 }));

    Mock::given(method("GET"))
        .and(path("/albums/al1/tracks"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "50"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(first, Some("https://next"))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/albums/al1/tracks"))
        .and(query_param("offset", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(second, None)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(TracksResponder)
        .expect(2)
        .mount(&server)
        .await;

    let export = client(&server).get_album_export("al1").await.unwrap();

    assert!(export.warnings.is_empty());
    assert_eq!(export.details.upc, "123456789012");
    assert_eq!(export.details.p_line, "(P) 2021 Label");
    assert_eq!(export.merge.tracks.len(), 56);
    assert!(export.merge.is_aligned());
    assert_eq!(export.merge.missing, 1);

    let last_full = &export.merge.tracks[54];
    assert_eq!(
        last_full.full.as_ref().and_then(|t| t.id.as_deref()),
        Some("s54")
    );
    assert!(export.merge.tracks[55].full.is_none());
    assert_eq!(export.merge.tracks[55].best().name, "Local");
}

#[tokio::test]
async fn test_album_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/albums/nope"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "status": 400, "message": "invalid id" }
        })))
        .mount(&server)
        .await;

    let result = client(&server).get_album_export("nope").await;
    assert!(matches!(result, Err(FetchError::MissingField { field: "id", .. })));
}
