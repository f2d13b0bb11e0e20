use tracing::debug;

use crate::domain::album::Album;
use crate::domain::artist::Artist;
use crate::domain::comment::Comment;
use crate::domain::document::{
  AlbumDocument, ArtistDocument, CommentDocument, MoodDocument, MoodSummary, SongDocument, SongSummary,
  UserDocument,
};
use crate::domain::mood::Mood;
use crate::domain::song::Song;
use crate::domain::user::User;
use crate::domain::{AlbumId, ArtistId, CommentId, MoodId, SongId, UserId};
use crate::errors::CoreError;
use crate::ports::CatalogRepository;

/// Fachada de lectura del catálogo: carga entidades por clave y arma los
/// documentos anidados que expone la API.
///
/// Las escrituras se hacen directamente sobre el repositorio
/// ([`CatalogService::repo`]); este servicio no añade lógica a los comandos.
pub struct CatalogService<R>
where
  R: CatalogRepository,
{
  repo: R,
}

impl<R> CatalogService<R>
where
  R: CatalogRepository,
{
  pub fn new(repo: R) -> Self {
    Self { repo }
  }

  pub fn repo(&self) -> &R {
    &self.repo
  }

  // -------- QUERY (read) --------

  pub fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>, CoreError> {
    self.repo.find_artist(id)
  }

  pub fn get_album(&self, id: AlbumId) -> Result<Option<Album>, CoreError> {
    self.repo.find_album(id)
  }

  pub fn get_song(&self, id: SongId) -> Result<Option<Song>, CoreError> {
    self.repo.find_song(id)
  }

  pub fn get_comment(&self, id: CommentId) -> Result<Option<Comment>, CoreError> {
    self.repo.find_comment(id)
  }

  pub fn get_mood(&self, id: MoodId) -> Result<Option<Mood>, CoreError> {
    self.repo.find_mood(id)
  }

  pub fn get_user(&self, id: UserId) -> Result<Option<User>, CoreError> {
    self.repo.find_user(id)
  }

  // -------- Documentos --------

  /// `{id, name, albums: [álbum completo...]}`
  pub fn serialize_artist(&self, id: ArtistId) -> Result<ArtistDocument, CoreError> {
    let artist = self.get_artist(id)?.ok_or_else(|| CoreError::not_found("artist", id))?;
    debug!(artist_id = %id, "serializing artist");
    self.artist_document(&artist)
  }

  /// `{id, name, songs: [canción simple...]}`
  pub fn serialize_album(&self, id: AlbumId) -> Result<AlbumDocument, CoreError> {
    let album = self.get_album(id)?.ok_or_else(|| CoreError::not_found("album", id))?;
    self.album_document(&album)
  }

  /// `{id, name, length, streams, album_id, comments: [...], moods: [mood simple...]}`
  pub fn serialize_song(&self, id: SongId) -> Result<SongDocument, CoreError> {
    let song = self.get_song(id)?.ok_or_else(|| CoreError::not_found("song", id))?;
    self.song_document(&song)
  }

  /// `{id, name, length, streams}`
  pub fn simple_serialize_song(&self, id: SongId) -> Result<SongSummary, CoreError> {
    let song = self.get_song(id)?.ok_or_else(|| CoreError::not_found("song", id))?;
    Ok(SongSummary::from(&song))
  }

  /// `{id, user_comment, user_id, song_id}`
  pub fn serialize_comment(&self, id: CommentId) -> Result<CommentDocument, CoreError> {
    let comment = self.get_comment(id)?.ok_or_else(|| CoreError::not_found("comment", id))?;
    Ok(CommentDocument::from(&comment))
  }

  /// `{id, description, color, song_mood: [canción completa...]}`
  ///
  /// A diferencia del álbum, aquí las canciones van en forma completa.
  pub fn serialize_mood(&self, id: MoodId) -> Result<MoodDocument, CoreError> {
    let mood = self.get_mood(id)?.ok_or_else(|| CoreError::not_found("mood", id))?;
    let songs = self.repo.songs_of_mood(mood.id)?;
    let song_mood = songs.iter().map(|s| self.song_document(s)).collect::<Result<Vec<_>, _>>()?;
    Ok(MoodDocument::new(&mood, song_mood))
  }

  /// `{id, description, color}`
  pub fn simple_serialize_mood(&self, id: MoodId) -> Result<MoodSummary, CoreError> {
    let mood = self.get_mood(id)?.ok_or_else(|| CoreError::not_found("mood", id))?;
    Ok(MoodSummary::from(&mood))
  }

  /// `{id, name, likes: [canción completa...]}`
  pub fn serialize_user(&self, id: UserId) -> Result<UserDocument, CoreError> {
    let user = self.get_user(id)?.ok_or_else(|| CoreError::not_found("user", id))?;
    let liked = self.repo.liked_songs_of_user(user.id)?;
    let likes = liked.iter().map(|s| self.song_document(s)).collect::<Result<Vec<_>, _>>()?;
    Ok(UserDocument::new(&user, likes))
  }

  fn artist_document(&self, artist: &Artist) -> Result<ArtistDocument, CoreError> {
    let albums = self.repo.albums_of_artist(artist.id)?;
    let albums = albums.iter().map(|a| self.album_document(a)).collect::<Result<Vec<_>, _>>()?;
    Ok(ArtistDocument::new(artist, albums))
  }

  fn album_document(&self, album: &Album) -> Result<AlbumDocument, CoreError> {
    let songs = self.repo.songs_of_album(album.id)?;
    Ok(AlbumDocument::new(album, songs.iter().map(SongSummary::from).collect()))
  }

  fn song_document(&self, song: &Song) -> Result<SongDocument, CoreError> {
    let comments = self.repo.comments_of_song(song.id)?;
    let moods = self.repo.moods_of_song(song.id)?;

    Ok(SongDocument::new(
      song,
      comments.iter().map(CommentDocument::from).collect(),
      moods.iter().map(MoodSummary::from).collect(),
    ))
  }
}
