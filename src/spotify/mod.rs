//! Streaming-service collaborators: search, remote play, and token sourcing.

pub mod api;
pub mod auth;
pub mod models;
pub mod uri;

pub use api::SpotifyClient;
pub use models::{AccessToken, Track};
