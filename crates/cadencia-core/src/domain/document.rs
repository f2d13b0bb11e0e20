//! Documentos anidados que consume la API.
//!
//! El nombre y el orden de los campos son contrato con los clientes: no se
//! renombra nada aquí sin versionar la API.
//!
//! Profundidad de anidamiento:
//! - [`AlbumDocument`] incrusta canciones en forma simple ([`SongSummary`]).
//! - [`MoodDocument`] y [`UserDocument`] incrustan canciones completas
//!   ([`SongDocument`]), con comentarios y moods.
//! - [`SongDocument`] solo incrusta moods simples ([`MoodSummary`]) y nada de
//!   usuarios, así que el recorrido siempre termina. No hay detector de ciclos:
//!   si `SongDocument` llegara a incrustar moods o usuarios completos habría
//!   que añadir uno.

use serde::{Deserialize, Serialize};

use crate::domain::album::Album;
use crate::domain::artist::Artist;
use crate::domain::comment::Comment;
use crate::domain::ids::{AlbumId, ArtistId, CommentId, MoodId, SongId, UserId};
use crate::domain::mood::Mood;
use crate::domain::song::Song;
use crate::domain::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistDocument {
  pub id: ArtistId,
  pub name: String,
  pub albums: Vec<AlbumDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumDocument {
  pub id: AlbumId,
  pub name: String,
  pub songs: Vec<SongSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongDocument {
  pub id: SongId,
  pub name: String,
  pub length: f64,
  pub streams: i64,
  /// `null` en JSON para canciones sin álbum.
  pub album_id: Option<AlbumId>,
  pub comments: Vec<CommentDocument>,
  pub moods: Vec<MoodSummary>,
}

/// Forma simple de una canción: solo escalares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSummary {
  pub id: SongId,
  pub name: String,
  pub length: f64,
  pub streams: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDocument {
  pub id: CommentId,
  pub user_comment: i64,
  pub user_id: UserId,
  pub song_id: SongId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodDocument {
  pub id: MoodId,
  pub description: String,
  pub color: String,
  pub song_mood: Vec<SongDocument>,
}

/// Forma simple de un mood, la que aparece dentro de [`SongDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSummary {
  pub id: MoodId,
  pub description: String,
  pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
  pub id: UserId,
  pub name: String,
  pub likes: Vec<SongDocument>,
}

impl ArtistDocument {
  pub fn new(artist: &Artist, albums: Vec<AlbumDocument>) -> Self {
    Self { id: artist.id, name: artist.name.clone(), albums }
  }
}

impl AlbumDocument {
  pub fn new(album: &Album, songs: Vec<SongSummary>) -> Self {
    Self { id: album.id, name: album.name.clone(), songs }
  }
}

impl SongDocument {
  pub fn new(song: &Song, comments: Vec<CommentDocument>, moods: Vec<MoodSummary>) -> Self {
    Self {
      id: song.id,
      name: song.name.clone(),
      length: song.length,
      streams: song.streams,
      album_id: song.album_id,
      comments,
      moods,
    }
  }
}

impl From<&Song> for SongSummary {
  fn from(song: &Song) -> Self {
    Self { id: song.id, name: song.name.clone(), length: song.length, streams: song.streams }
  }
}

impl From<&Comment> for CommentDocument {
  fn from(c: &Comment) -> Self {
    Self { id: c.id, user_comment: c.user_comment, user_id: c.user_id, song_id: c.song_id }
  }
}

impl MoodDocument {
  pub fn new(mood: &Mood, song_mood: Vec<SongDocument>) -> Self {
    Self { id: mood.id, description: mood.description.clone(), color: mood.color.clone(), song_mood }
  }
}

impl From<&Mood> for MoodSummary {
  fn from(mood: &Mood) -> Self {
    Self { id: mood.id, description: mood.description.clone(), color: mood.color.clone() }
  }
}

impl UserDocument {
  pub fn new(user: &User, likes: Vec<SongDocument>) -> Self {
    Self { id: user.id, name: user.name.clone(), likes }
  }
}
