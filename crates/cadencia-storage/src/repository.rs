use diesel::prelude::*;
use tracing::debug;

use cadencia_core::domain::album::{Album, NewAlbum};
use cadencia_core::domain::artist::{Artist, NewArtist};
use cadencia_core::domain::comment::{Comment, NewComment};
use cadencia_core::domain::mood::{Mood, NewMood};
use cadencia_core::domain::song::{NewSong, Song};
use cadencia_core::domain::user::{NewUser, User};
use cadencia_core::domain::{AlbumId, ArtistId, CommentId, MoodId, SongId, UserId};
use cadencia_core::errors::{ConstraintKind, CoreError};
use cadencia_core::ports::CatalogRepository;

use crate::SqliteCatalogRepository;
use crate::cascade::CascadeRoot;
use crate::errors::StorageError;
use crate::models::*;
use crate::schema::{albums, artists, comments, likes, moods, song_moods, songs, users};

/// `UPDATE`/`DELETE` que no tocó ninguna fila: la clave no existe.
fn ensure_affected(entity: &'static str, id: i64, affected: usize) -> Result<(), StorageError> {
  if affected == 0 {
    return Err(StorageError::NotFound { entity, id });
  }
  Ok(())
}

/// SQLite enlaza NaN como NULL: sin esta comprobación llegaría como un NOT NULL.
fn check_length(length: Option<f64>) -> Result<(), CoreError> {
  match length {
    Some(length) if length.is_nan() => Err(CoreError::Constraint {
      kind: ConstraintKind::Check,
      message: "songs.length must be a number, got NaN".to_string(),
    }),
    _ => Ok(()),
  }
}

impl CatalogRepository for SqliteCatalogRepository {
  // --- creación ---

  fn create_artist(&self, new: &NewArtist) -> Result<Artist, CoreError> {
    let row: ArtistRow = self.run(|conn| {
      Ok(
        diesel::insert_into(artists::table)
          .values(NewArtistRow::from(new))
          .returning(ArtistRow::as_returning())
          .get_result(conn)?,
      )
    })?;
    debug!(artist_id = row.id, "artist created");
    Ok(row.into())
  }

  fn create_album(&self, new: &NewAlbum) -> Result<Album, CoreError> {
    let row: AlbumRow = self.run(|conn| {
      Ok(
        diesel::insert_into(albums::table)
          .values(NewAlbumRow::from(new))
          .returning(AlbumRow::as_returning())
          .get_result(conn)?,
      )
    })?;
    debug!(album_id = row.id, artist_id = row.artist_id, "album created");
    Ok(row.into())
  }

  fn create_song(&self, new: &NewSong) -> Result<Song, CoreError> {
    check_length(new.length)?;
    let row: SongRow = self.run(|conn| {
      Ok(
        diesel::insert_into(songs::table)
          .values(NewSongRow::from(new))
          .returning(SongRow::as_returning())
          .get_result(conn)?,
      )
    })?;
    debug!(song_id = row.id, album_id = ?row.album_id, "song created");
    Ok(row.into())
  }

  fn create_comment(&self, new: &NewComment) -> Result<Comment, CoreError> {
    let row: CommentRow = self.run(|conn| {
      Ok(
        diesel::insert_into(comments::table)
          .values(NewCommentRow::from(new))
          .returning(CommentRow::as_returning())
          .get_result(conn)?,
      )
    })?;
    debug!(comment_id = row.id, song_id = row.song_id, user_id = row.user_id, "comment created");
    Ok(row.into())
  }

  fn create_mood(&self, new: &NewMood) -> Result<Mood, CoreError> {
    let row: MoodRow = self.run(|conn| {
      Ok(
        diesel::insert_into(moods::table)
          .values(NewMoodRow::from(new))
          .returning(MoodRow::as_returning())
          .get_result(conn)?,
      )
    })?;
    debug!(mood_id = row.id, "mood created");
    Ok(row.into())
  }

  fn create_user(&self, new: &NewUser) -> Result<User, CoreError> {
    let row: UserRow = self.run(|conn| {
      Ok(
        diesel::insert_into(users::table)
          .values(NewUserRow::from(new))
          .returning(UserRow::as_returning())
          .get_result(conn)?,
      )
    })?;
    debug!(user_id = row.id, "user created");
    Ok(row.into())
  }

  // --- modificación ---

  fn update_artist(&self, artist: &Artist) -> Result<(), CoreError> {
    let id = artist.id.as_raw();
    self.run(|conn| {
      let n = diesel::update(artists::table.find(id)).set(ArtistChangeset::from(artist)).execute(conn)?;
      ensure_affected("artist", id, n)
    })
  }

  fn update_album(&self, album: &Album) -> Result<(), CoreError> {
    let id = album.id.as_raw();
    self.run(|conn| {
      let n = diesel::update(albums::table.find(id)).set(AlbumChangeset::from(album)).execute(conn)?;
      ensure_affected("album", id, n)
    })
  }

  fn update_song(&self, song: &Song) -> Result<(), CoreError> {
    check_length(Some(song.length))?;
    let id = song.id.as_raw();
    self.run(|conn| {
      let n = diesel::update(songs::table.find(id)).set(SongChangeset::from(song)).execute(conn)?;
      ensure_affected("song", id, n)
    })
  }

  fn update_comment(&self, comment: &Comment) -> Result<(), CoreError> {
    let id = comment.id.as_raw();
    self.run(|conn| {
      let n = diesel::update(comments::table.find(id)).set(CommentChangeset::from(comment)).execute(conn)?;
      ensure_affected("comment", id, n)
    })
  }

  fn update_mood(&self, mood: &Mood) -> Result<(), CoreError> {
    let id = mood.id.as_raw();
    self.run(|conn| {
      let n = diesel::update(moods::table.find(id)).set(MoodChangeset::from(mood)).execute(conn)?;
      ensure_affected("mood", id, n)
    })
  }

  fn update_user(&self, user: &User) -> Result<(), CoreError> {
    let id = user.id.as_raw();
    self.run(|conn| {
      let n = diesel::update(users::table.find(id)).set(UserChangeset::from(user)).execute(conn)?;
      ensure_affected("user", id, n)
    })
  }

  // --- borrado ---

  fn delete_artist(&self, id: ArtistId) -> Result<(), CoreError> {
    self.delete_cascade(CascadeRoot::Artist(id)).map(|_| ())
  }

  fn delete_album(&self, id: AlbumId) -> Result<(), CoreError> {
    self.delete_cascade(CascadeRoot::Album(id)).map(|_| ())
  }

  fn delete_song(&self, id: SongId) -> Result<(), CoreError> {
    self.delete_cascade(CascadeRoot::Song(id)).map(|_| ())
  }

  fn delete_comment(&self, id: CommentId) -> Result<(), CoreError> {
    let id = id.as_raw();
    self.run(|conn| {
      let n = diesel::delete(comments::table.find(id)).execute(conn)?;
      ensure_affected("comment", id, n)
    })
  }

  fn delete_mood(&self, id: MoodId) -> Result<(), CoreError> {
    self.delete_cascade(CascadeRoot::Mood(id)).map(|_| ())
  }

  fn delete_user(&self, id: UserId) -> Result<(), CoreError> {
    self.delete_cascade(CascadeRoot::User(id)).map(|_| ())
  }

  // --- asociaciones ---

  fn tag_song(&self, song_id: SongId, mood_id: MoodId) -> Result<(), CoreError> {
    let row = SongMoodRow { song_id: song_id.as_raw(), mood_id: mood_id.as_raw() };
    self.run(|conn| {
      // OR IGNORE no cubre claves foráneas: un extremo inexistente sigue fallando.
      diesel::insert_or_ignore_into(song_moods::table).values(&row).execute(conn)?;
      Ok(())
    })
  }

  fn untag_song(&self, song_id: SongId, mood_id: MoodId) -> Result<(), CoreError> {
    self.run(|conn| {
      diesel::delete(
        song_moods::table
          .filter(song_moods::song_id.eq(song_id.as_raw()))
          .filter(song_moods::mood_id.eq(mood_id.as_raw())),
      )
      .execute(conn)?;
      Ok(())
    })
  }

  fn like_song(&self, user_id: UserId, song_id: SongId) -> Result<(), CoreError> {
    let row = LikeRow { user_id: user_id.as_raw(), song_id: song_id.as_raw() };
    self.run(|conn| {
      diesel::insert_or_ignore_into(likes::table).values(&row).execute(conn)?;
      Ok(())
    })
  }

  fn unlike_song(&self, user_id: UserId, song_id: SongId) -> Result<(), CoreError> {
    self.run(|conn| {
      diesel::delete(
        likes::table.filter(likes::user_id.eq(user_id.as_raw())).filter(likes::song_id.eq(song_id.as_raw())),
      )
      .execute(conn)?;
      Ok(())
    })
  }

  // --- consultas por ID ---

  fn find_artist(&self, id: ArtistId) -> Result<Option<Artist>, CoreError> {
    let row: Option<ArtistRow> = self.run(|conn| {
      Ok(artists::table.find(id.as_raw()).select(ArtistRow::as_select()).first(conn).optional()?)
    })?;
    Ok(row.map(Artist::from))
  }

  fn find_album(&self, id: AlbumId) -> Result<Option<Album>, CoreError> {
    let row: Option<AlbumRow> = self.run(|conn| {
      Ok(albums::table.find(id.as_raw()).select(AlbumRow::as_select()).first(conn).optional()?)
    })?;
    Ok(row.map(Album::from))
  }

  fn find_song(&self, id: SongId) -> Result<Option<Song>, CoreError> {
    let row: Option<SongRow> = self
      .run(|conn| Ok(songs::table.find(id.as_raw()).select(SongRow::as_select()).first(conn).optional()?))?;
    Ok(row.map(Song::from))
  }

  fn find_comment(&self, id: CommentId) -> Result<Option<Comment>, CoreError> {
    let row: Option<CommentRow> = self.run(|conn| {
      Ok(comments::table.find(id.as_raw()).select(CommentRow::as_select()).first(conn).optional()?)
    })?;
    Ok(row.map(Comment::from))
  }

  fn find_mood(&self, id: MoodId) -> Result<Option<Mood>, CoreError> {
    let row: Option<MoodRow> = self
      .run(|conn| Ok(moods::table.find(id.as_raw()).select(MoodRow::as_select()).first(conn).optional()?))?;
    Ok(row.map(Mood::from))
  }

  fn find_user(&self, id: UserId) -> Result<Option<User>, CoreError> {
    let row: Option<UserRow> = self
      .run(|conn| Ok(users::table.find(id.as_raw()).select(UserRow::as_select()).first(conn).optional()?))?;
    Ok(row.map(User::from))
  }

  // --- listados ---

  fn list_artists(&self) -> Result<Vec<Artist>, CoreError> {
    let rows: Vec<ArtistRow> =
      self.run(|conn| Ok(artists::table.select(ArtistRow::as_select()).order(artists::id.asc()).load(conn)?))?;
    Ok(rows.into_iter().map(Artist::from).collect())
  }

  fn list_albums(&self) -> Result<Vec<Album>, CoreError> {
    let rows: Vec<AlbumRow> =
      self.run(|conn| Ok(albums::table.select(AlbumRow::as_select()).order(albums::id.asc()).load(conn)?))?;
    Ok(rows.into_iter().map(Album::from).collect())
  }

  fn list_songs(&self) -> Result<Vec<Song>, CoreError> {
    let rows: Vec<SongRow> =
      self.run(|conn| Ok(songs::table.select(SongRow::as_select()).order(songs::id.asc()).load(conn)?))?;
    Ok(rows.into_iter().map(Song::from).collect())
  }

  fn list_moods(&self) -> Result<Vec<Mood>, CoreError> {
    let rows: Vec<MoodRow> =
      self.run(|conn| Ok(moods::table.select(MoodRow::as_select()).order(moods::id.asc()).load(conn)?))?;
    Ok(rows.into_iter().map(Mood::from).collect())
  }

  fn list_users(&self) -> Result<Vec<User>, CoreError> {
    let rows: Vec<UserRow> =
      self.run(|conn| Ok(users::table.select(UserRow::as_select()).order(users::id.asc()).load(conn)?))?;
    Ok(rows.into_iter().map(User::from).collect())
  }

  // --- relaciones ---

  fn albums_of_artist(&self, id: ArtistId) -> Result<Vec<Album>, CoreError> {
    let rows: Vec<AlbumRow> = self.run(|conn| {
      Ok(
        albums::table
          .filter(albums::artist_id.eq(id.as_raw()))
          .select(AlbumRow::as_select())
          .order(albums::id.asc())
          .load(conn)?,
      )
    })?;
    Ok(rows.into_iter().map(Album::from).collect())
  }

  fn songs_of_album(&self, id: AlbumId) -> Result<Vec<Song>, CoreError> {
    let rows: Vec<SongRow> = self.run(|conn| {
      Ok(
        songs::table
          .filter(songs::album_id.eq(id.as_raw()))
          .select(SongRow::as_select())
          .order(songs::id.asc())
          .load(conn)?,
      )
    })?;
    Ok(rows.into_iter().map(Song::from).collect())
  }

  fn comments_of_song(&self, id: SongId) -> Result<Vec<Comment>, CoreError> {
    let rows: Vec<CommentRow> = self.run(|conn| {
      Ok(
        comments::table
          .filter(comments::song_id.eq(id.as_raw()))
          .select(CommentRow::as_select())
          .order(comments::id.asc())
          .load(conn)?,
      )
    })?;
    Ok(rows.into_iter().map(Comment::from).collect())
  }

  fn comments_of_user(&self, id: UserId) -> Result<Vec<Comment>, CoreError> {
    let rows: Vec<CommentRow> = self.run(|conn| {
      Ok(
        comments::table
          .filter(comments::user_id.eq(id.as_raw()))
          .select(CommentRow::as_select())
          .order(comments::id.asc())
          .load(conn)?,
      )
    })?;
    Ok(rows.into_iter().map(Comment::from).collect())
  }

  fn moods_of_song(&self, id: SongId) -> Result<Vec<Mood>, CoreError> {
    let rows: Vec<MoodRow> = self.run(|conn| {
      Ok(
        song_moods::table
          .inner_join(moods::table)
          .filter(song_moods::song_id.eq(id.as_raw()))
          .select(MoodRow::as_select())
          .order(moods::id.asc())
          .load(conn)?,
      )
    })?;
    Ok(rows.into_iter().map(Mood::from).collect())
  }

  fn songs_of_mood(&self, id: MoodId) -> Result<Vec<Song>, CoreError> {
    let rows: Vec<SongRow> = self.run(|conn| {
      Ok(
        song_moods::table
          .inner_join(songs::table)
          .filter(song_moods::mood_id.eq(id.as_raw()))
          .select(SongRow::as_select())
          .order(songs::id.asc())
          .load(conn)?,
      )
    })?;
    Ok(rows.into_iter().map(Song::from).collect())
  }

  fn liked_songs_of_user(&self, id: UserId) -> Result<Vec<Song>, CoreError> {
    let rows: Vec<SongRow> = self.run(|conn| {
      Ok(
        likes::table
          .inner_join(songs::table)
          .filter(likes::user_id.eq(id.as_raw()))
          .select(SongRow::as_select())
          .order(songs::id.asc())
          .load(conn)?,
      )
    })?;
    Ok(rows.into_iter().map(Song::from).collect())
  }

  fn likers_of_song(&self, id: SongId) -> Result<Vec<User>, CoreError> {
    let rows: Vec<UserRow> = self.run(|conn| {
      Ok(
        likes::table
          .inner_join(users::table)
          .filter(likes::song_id.eq(id.as_raw()))
          .select(UserRow::as_select())
          .order(users::id.asc())
          .load(conn)?,
      )
    })?;
    Ok(rows.into_iter().map(User::from).collect())
  }
}
