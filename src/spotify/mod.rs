//! # Spotify Integration Module
//!
//! This module is the catalog fetcher of spotmeta: it authenticates with the
//! client-credentials grant and performs every paginated and chunked request
//! needed to assemble an export. It is the only layer that talks HTTP.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (one command per export)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials, Basic auth)
//!     ├── Track Batches (chunks of 50 IDs)
//!     ├── Albums (metadata, paginated track stubs, positional merge)
//!     ├── Artists (top tracks, de-duplicated discography)
//!     └── Playlists (metadata, paginated items)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - [`CredentialProvider`] trait, [`ClientCredentials`] token
//!   exchange and [`StaticToken`] for tokens obtained elsewhere
//! - [`client`] - [`SpotifyClient`], an authorised handle bound to one token
//! - [`paginate`] - offset pagination loop shared by every listing
//! - [`tracks`] - `GET /tracks` in chunks of [`TRACK_CHUNK_SIZE`]
//! - [`albums`] - `GET /albums/{id}` and `/albums/{id}/tracks`
//! - [`artists`] - `GET /artists/{id}`, `/top-tracks` and `/albums`
//! - [`playlists`] - `GET /playlists/{id}` and `/playlists/{id}/tracks`
//!
//! ## Pagination
//!
//! Listings are walked with a fixed page size (50 for album tracks and artist
//! albums, 100 for playlist items). A loop ends on an empty page, a short
//! page or `"next": null`; the three endings behave the same. A failed page
//! halts the loop and is returned next to the items fetched before it.
//!
//! ## Error Handling
//!
//! Nothing is retried. Token failures surface as [`AuthError`] and abort the
//! command. A request that returns a body without the expected field yields
//! a [`FetchError::MissingField`] carrying the raw payload, so the Spotify
//! error message can be shown to the user as-is.
//!
//! ## Concurrency
//!
//! Requests are awaited one after the other. Page offsets depend on the
//! previous page, and the positional merge of album stubs with full tracks
//! depends on both listings keeping their order.
//!
//! [`AuthError`]: crate::error::AuthError
//! [`FetchError::MissingField`]: crate::error::FetchError::MissingField

pub mod albums;
pub mod artists;
pub mod auth;
pub mod client;
pub mod paginate;
pub mod playlists;
pub mod tracks;

pub use albums::{ALBUM_PAGE_SIZE, AlbumExport, album_details};
pub use artists::{ARTIST_ALBUM_PAGE_SIZE, INCLUDE_GROUPS};
pub use auth::{BearerToken, ClientCredentials, CredentialProvider, StaticToken};
pub use client::SpotifyClient;
pub use paginate::{Page, Paged, paginate};
pub use playlists::{PLAYLIST_PAGE_SIZE, playlist_tracks};
pub use tracks::{Chunked, TRACK_CHUNK_SIZE};
