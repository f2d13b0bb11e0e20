use crate::schema::{albums, artists, comments, likes, moods, song_moods, songs, users};

use cadencia_core::domain::album::{Album, NewAlbum};
use cadencia_core::domain::artist::{Artist, NewArtist};
use cadencia_core::domain::comment::{Comment, NewComment};
use cadencia_core::domain::mood::{Mood, NewMood};
use cadencia_core::domain::song::{NewSong, Song};
use cadencia_core::domain::user::{NewUser, User};
use cadencia_core::domain::{AlbumId, ArtistId, CommentId, MoodId, SongId, UserId};
use diesel::prelude::*;

// Los `New*Row` usan `Option<T>` en columnas NOT NULL a propósito: con
// `None` diesel omite la columna en el INSERT y SQLite responde con
// "NOT NULL constraint failed", que es el error que debe ver el llamador.

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = artists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArtistRow {
  pub id: i64,
  pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = artists)]
pub struct NewArtistRow {
  pub name: String,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = artists)]
pub struct ArtistChangeset {
  pub name: String,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = albums)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AlbumRow {
  pub id: i64,
  pub name: String,
  pub artist_id: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = albums)]
pub struct NewAlbumRow {
  pub name: String,
  pub artist_id: Option<i64>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = albums)]
pub struct AlbumChangeset {
  pub name: String,
  pub artist_id: i64,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = songs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SongRow {
  pub id: i64,
  pub name: String,
  pub length: f64,
  pub streams: i64,
  pub album_id: Option<i64>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = songs)]
pub struct NewSongRow {
  pub name: Option<String>,
  pub length: Option<f64>,
  pub streams: Option<i64>,
  pub album_id: Option<i64>,
}

/// `album_id = None` debe escribir NULL (sacar la canción del álbum), no
/// saltarse la columna.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = songs)]
#[diesel(treat_none_as_null = true)]
pub struct SongChangeset {
  pub name: String,
  pub length: f64,
  pub streams: i64,
  pub album_id: Option<i64>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CommentRow {
  pub id: i64,
  pub user_comment: i64,
  pub user_id: i64,
  pub song_id: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = comments)]
pub struct NewCommentRow {
  pub user_comment: Option<i64>,
  pub user_id: Option<i64>,
  pub song_id: Option<i64>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = comments)]
pub struct CommentChangeset {
  pub user_comment: i64,
  pub user_id: i64,
  pub song_id: i64,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = moods)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MoodRow {
  pub id: i64,
  pub description: String,
  pub color: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = moods)]
pub struct NewMoodRow {
  pub description: String,
  pub color: Option<String>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = moods)]
pub struct MoodChangeset {
  pub description: String,
  pub color: String,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
  pub id: i64,
  pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
  pub name: Option<String>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserChangeset {
  pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = song_moods)]
pub struct SongMoodRow {
  pub song_id: i64,
  pub mood_id: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = likes)]
pub struct LikeRow {
  pub user_id: i64,
  pub song_id: i64,
}

// --- borrador de dominio -> fila nueva ---

impl From<&NewArtist> for NewArtistRow {
  fn from(new: &NewArtist) -> Self {
    NewArtistRow { name: new.name.clone() }
  }
}

impl From<&NewAlbum> for NewAlbumRow {
  fn from(new: &NewAlbum) -> Self {
    NewAlbumRow { name: new.name.clone(), artist_id: new.artist_id.map(i64::from) }
  }
}

impl From<&NewSong> for NewSongRow {
  fn from(new: &NewSong) -> Self {
    NewSongRow {
      name: new.name.clone(),
      length: new.length,
      streams: new.streams,
      album_id: new.album_id.map(i64::from),
    }
  }
}

impl From<&NewComment> for NewCommentRow {
  fn from(new: &NewComment) -> Self {
    NewCommentRow {
      user_comment: new.user_comment,
      user_id: new.user_id.map(i64::from),
      song_id: new.song_id.map(i64::from),
    }
  }
}

impl From<&NewMood> for NewMoodRow {
  fn from(new: &NewMood) -> Self {
    NewMoodRow { description: new.description.clone(), color: new.color.clone() }
  }
}

impl From<&NewUser> for NewUserRow {
  fn from(new: &NewUser) -> Self {
    NewUserRow { name: new.name.clone() }
  }
}

// --- entidad de dominio -> changeset ---

impl From<&Artist> for ArtistChangeset {
  fn from(a: &Artist) -> Self {
    ArtistChangeset { name: a.name.clone() }
  }
}

impl From<&Album> for AlbumChangeset {
  fn from(a: &Album) -> Self {
    AlbumChangeset { name: a.name.clone(), artist_id: a.artist_id.as_raw() }
  }
}

impl From<&Song> for SongChangeset {
  fn from(s: &Song) -> Self {
    SongChangeset {
      name: s.name.clone(),
      length: s.length,
      streams: s.streams,
      album_id: s.album_id.map(i64::from),
    }
  }
}

impl From<&Comment> for CommentChangeset {
  fn from(c: &Comment) -> Self {
    CommentChangeset { user_comment: c.user_comment, user_id: c.user_id.as_raw(), song_id: c.song_id.as_raw() }
  }
}

impl From<&Mood> for MoodChangeset {
  fn from(m: &Mood) -> Self {
    MoodChangeset { description: m.description.clone(), color: m.color.clone() }
  }
}

impl From<&User> for UserChangeset {
  fn from(u: &User) -> Self {
    UserChangeset { name: u.name.clone() }
  }
}

// --- fila -> entidad de dominio ---

impl From<ArtistRow> for Artist {
  fn from(row: ArtistRow) -> Self {
    Artist { id: ArtistId::from_raw(row.id), name: row.name }
  }
}

impl From<AlbumRow> for Album {
  fn from(row: AlbumRow) -> Self {
    Album { id: AlbumId::from_raw(row.id), name: row.name, artist_id: ArtistId::from_raw(row.artist_id) }
  }
}

impl From<SongRow> for Song {
  fn from(row: SongRow) -> Self {
    Song {
      id: SongId::from_raw(row.id),
      name: row.name,
      length: row.length,
      streams: row.streams,
      album_id: row.album_id.map(AlbumId::from_raw),
    }
  }
}

impl From<CommentRow> for Comment {
  fn from(row: CommentRow) -> Self {
    Comment {
      id: CommentId::from_raw(row.id),
      user_comment: row.user_comment,
      user_id: UserId::from_raw(row.user_id),
      song_id: SongId::from_raw(row.song_id),
    }
  }
}

impl From<MoodRow> for Mood {
  fn from(row: MoodRow) -> Self {
    Mood { id: MoodId::from_raw(row.id), description: row.description, color: row.color }
  }
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User { id: UserId::from_raw(row.id), name: row.name }
  }
}
