//! Borrados en cascada explícitos.
//!
//! El esquema no declara `ON DELETE`: aquí se borra de hojas a raíz, en el
//! orden que exigen las claves foráneas. Todas las funciones asumen que el
//! llamador ya abrió la transacción.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use cadencia_core::domain::{AlbumId, ArtistId, MoodId, SongId, UserId};

use crate::schema::{albums, artists, comments, likes, moods, song_moods, songs, users};

/// Fila raíz de un borrado en cascada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeRoot {
  Artist(ArtistId),
  Album(AlbumId),
  Song(SongId),
  Mood(MoodId),
  User(UserId),
}

/// Filas eliminadas por un borrado, raíz incluida.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CascadeReport {
  pub artists: usize,
  pub albums: usize,
  pub songs: usize,
  pub comments: usize,
  pub moods: usize,
  pub users: usize,
  /// Filas de `song_moods`.
  pub mood_tags: usize,
  /// Filas de `likes`.
  pub likes: usize,
}

/// Comentarios, etiquetas y likes de la canción; después la canción.
pub(crate) fn delete_song(conn: &mut SqliteConnection, song_id: i64, report: &mut CascadeReport) -> QueryResult<()> {
  report.comments += diesel::delete(comments::table.filter(comments::song_id.eq(song_id))).execute(conn)?;
  report.mood_tags += diesel::delete(song_moods::table.filter(song_moods::song_id.eq(song_id))).execute(conn)?;
  report.likes += diesel::delete(likes::table.filter(likes::song_id.eq(song_id))).execute(conn)?;
  report.songs += diesel::delete(songs::table.find(song_id)).execute(conn)?;
  Ok(())
}

pub(crate) fn delete_album(conn: &mut SqliteConnection, album_id: i64, report: &mut CascadeReport) -> QueryResult<()> {
  let song_ids: Vec<i64> = songs::table.filter(songs::album_id.eq(album_id)).select(songs::id).load(conn)?;

  for song_id in song_ids {
    delete_song(conn, song_id, report)?;
  }

  report.albums += diesel::delete(albums::table.find(album_id)).execute(conn)?;
  Ok(())
}

pub(crate) fn delete_artist(
  conn: &mut SqliteConnection,
  artist_id: i64,
  report: &mut CascadeReport,
) -> QueryResult<()> {
  let album_ids: Vec<i64> =
    albums::table.filter(albums::artist_id.eq(artist_id)).select(albums::id).load(conn)?;

  for album_id in album_ids {
    delete_album(conn, album_id, report)?;
  }

  report.artists += diesel::delete(artists::table.find(artist_id)).execute(conn)?;
  Ok(())
}

/// Comentarios y likes del usuario. Las canciones que le gustaban se quedan.
pub(crate) fn delete_user(conn: &mut SqliteConnection, user_id: i64, report: &mut CascadeReport) -> QueryResult<()> {
  report.comments += diesel::delete(comments::table.filter(comments::user_id.eq(user_id))).execute(conn)?;
  report.likes += diesel::delete(likes::table.filter(likes::user_id.eq(user_id))).execute(conn)?;
  report.users += diesel::delete(users::table.find(user_id)).execute(conn)?;
  Ok(())
}

/// Solo las filas de asociación; las canciones etiquetadas se quedan.
pub(crate) fn delete_mood(conn: &mut SqliteConnection, mood_id: i64, report: &mut CascadeReport) -> QueryResult<()> {
  report.mood_tags += diesel::delete(song_moods::table.filter(song_moods::mood_id.eq(mood_id))).execute(conn)?;
  report.moods += diesel::delete(moods::table.find(mood_id)).execute(conn)?;
  Ok(())
}
