use crate::domain::album::{Album, NewAlbum};
use crate::domain::artist::{Artist, NewArtist};
use crate::domain::comment::{Comment, NewComment};
use crate::domain::mood::{Mood, NewMood};
use crate::domain::song::{NewSong, Song};
use crate::domain::user::{NewUser, User};
use crate::domain::{AlbumId, ArtistId, CommentId, MoodId, SongId, UserId};
use crate::errors::CoreError;

/// Port de persistencia del catálogo.
///
/// Reglas comunes a cualquier implementación:
/// - `create_*` asigna la clave y devuelve la entidad ya persistida. Un campo
///   obligatorio ausente en el borrador es [`CoreError::Constraint`] con
///   `NotNull`; una clave foránea inexistente, `ForeignKey`.
/// - `update_*` guarda una entidad modificada en memoria. Si la clave no
///   existe devuelve [`CoreError::NotFound`].
/// - `delete_*` aplica la cascada de forma explícita y atómica:
///   artista → álbumes → canciones → comentarios. Las filas de asociación
///   (moods, likes) de lo borrado se eliminan; moods y usuarios nunca.
/// - Las relaciones inversas (canciones de un mood, likes de un usuario...)
///   son consultas, no colecciones mutables en las entidades.
/// - Los listados vienen ordenados por clave ascendente.
pub trait CatalogRepository {
  // --- Comandos: creación ---
  fn create_artist(&self, new: &NewArtist) -> Result<Artist, CoreError>;
  fn create_album(&self, new: &NewAlbum) -> Result<Album, CoreError>;
  fn create_song(&self, new: &NewSong) -> Result<Song, CoreError>;
  fn create_comment(&self, new: &NewComment) -> Result<Comment, CoreError>;
  fn create_mood(&self, new: &NewMood) -> Result<Mood, CoreError>;
  fn create_user(&self, new: &NewUser) -> Result<User, CoreError>;

  // --- Comandos: modificación in situ ---
  fn update_artist(&self, artist: &Artist) -> Result<(), CoreError>;
  fn update_album(&self, album: &Album) -> Result<(), CoreError>;
  fn update_song(&self, song: &Song) -> Result<(), CoreError>;
  fn update_comment(&self, comment: &Comment) -> Result<(), CoreError>;
  fn update_mood(&self, mood: &Mood) -> Result<(), CoreError>;
  fn update_user(&self, user: &User) -> Result<(), CoreError>;

  // --- Comandos: borrado (con cascada) ---
  fn delete_artist(&self, id: ArtistId) -> Result<(), CoreError>;
  fn delete_album(&self, id: AlbumId) -> Result<(), CoreError>;
  fn delete_song(&self, id: SongId) -> Result<(), CoreError>;
  fn delete_comment(&self, id: CommentId) -> Result<(), CoreError>;
  fn delete_mood(&self, id: MoodId) -> Result<(), CoreError>;
  fn delete_user(&self, id: UserId) -> Result<(), CoreError>;

  // --- Asociaciones N:M (idempotentes) ---
  fn tag_song(&self, song_id: SongId, mood_id: MoodId) -> Result<(), CoreError>;
  fn untag_song(&self, song_id: SongId, mood_id: MoodId) -> Result<(), CoreError>;
  fn like_song(&self, user_id: UserId, song_id: SongId) -> Result<(), CoreError>;
  fn unlike_song(&self, user_id: UserId, song_id: SongId) -> Result<(), CoreError>;

  // --- Consultas por ID ---
  fn find_artist(&self, id: ArtistId) -> Result<Option<Artist>, CoreError>;
  fn find_album(&self, id: AlbumId) -> Result<Option<Album>, CoreError>;
  fn find_song(&self, id: SongId) -> Result<Option<Song>, CoreError>;
  fn find_comment(&self, id: CommentId) -> Result<Option<Comment>, CoreError>;
  fn find_mood(&self, id: MoodId) -> Result<Option<Mood>, CoreError>;
  fn find_user(&self, id: UserId) -> Result<Option<User>, CoreError>;

  // --- Consultas de listado ---
  fn list_artists(&self) -> Result<Vec<Artist>, CoreError>;
  fn list_albums(&self) -> Result<Vec<Album>, CoreError>;
  fn list_songs(&self) -> Result<Vec<Song>, CoreError>;
  fn list_moods(&self) -> Result<Vec<Mood>, CoreError>;
  fn list_users(&self) -> Result<Vec<User>, CoreError>;

  // --- Relaciones ---
  fn albums_of_artist(&self, id: ArtistId) -> Result<Vec<Album>, CoreError>;
  fn songs_of_album(&self, id: AlbumId) -> Result<Vec<Song>, CoreError>;
  fn comments_of_song(&self, id: SongId) -> Result<Vec<Comment>, CoreError>;
  fn comments_of_user(&self, id: UserId) -> Result<Vec<Comment>, CoreError>;
  fn moods_of_song(&self, id: SongId) -> Result<Vec<Mood>, CoreError>;
  fn songs_of_mood(&self, id: MoodId) -> Result<Vec<Song>, CoreError>;
  fn liked_songs_of_user(&self, id: UserId) -> Result<Vec<Song>, CoreError>;
  fn likers_of_song(&self, id: SongId) -> Result<Vec<User>, CoreError>;
}
