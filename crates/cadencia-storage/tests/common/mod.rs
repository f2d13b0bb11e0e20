#![allow(dead_code)]

use cadencia_core::domain::album::{Album, NewAlbum};
use cadencia_core::domain::artist::{Artist, NewArtist};
use cadencia_core::domain::song::{NewSong, Song};
use cadencia_core::ports::CatalogRepository;
use cadencia_core::services::CatalogService;
use cadencia_storage::SqliteCatalogRepository;

pub type Service = CatalogService<SqliteCatalogRepository>;

pub fn service() -> Service {
  CatalogService::new(SqliteCatalogRepository::in_memory().expect("in-memory database"))
}

pub fn artist(repo: &impl CatalogRepository, name: &str) -> Artist {
  repo.create_artist(&NewArtist::new().name(name)).unwrap()
}

pub fn album(repo: &impl CatalogRepository, artist: &Artist, name: &str) -> Album {
  repo.create_album(&NewAlbum::new().name(name).artist_id(artist.id)).unwrap()
}

pub fn song(repo: &impl CatalogRepository, album: Option<&Album>, name: &str, length: f64, streams: i64) -> Song {
  let mut draft = NewSong::new().name(name).length(length).streams(streams);
  if let Some(album) = album {
    draft = draft.album_id(album.id);
  }
  repo.create_song(&draft).unwrap()
}
