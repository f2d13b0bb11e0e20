pub mod album;
pub mod artist;
pub mod comment;
pub mod document;
pub mod ids;
pub mod mood;
pub mod song;
pub mod user;

pub use ids::{AlbumId, ArtistId, CommentId, MoodId, SongId, UserId};
