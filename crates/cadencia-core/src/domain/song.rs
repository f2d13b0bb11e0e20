use crate::domain::ids::{AlbumId, SongId};
use serde::{Deserialize, Serialize};

/// Una canción del catálogo.
///
/// - Pertenece como mucho a un [`Album`](crate::domain::album::Album)
///   (`album_id` puede ser `None`: canciones sueltas).
/// - Es dueña exclusiva de sus comentarios.
/// - Se relaciona N:M con moods (etiquetas) y con usuarios (likes); esas
///   relaciones viven en tablas de asociación, no en este struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
  /// Clave asignada por la base de datos.
  pub id: SongId,
  /// Título de la canción.
  pub name: String,
  /// Duración, en la unidad que use el cliente (el esquema guarda un REAL).
  pub length: f64,
  /// Número de reproducciones.
  pub streams: i64,
  /// Álbum al que pertenece, si alguno.
  pub album_id: Option<AlbumId>,
}

/// Borrador de [`Song`].
///
/// Ningún campo tiene valor por defecto. `name`, `length` y `streams` son
/// NOT NULL en la tabla: dejarlos sin asignar es válido aquí y falla al
/// persistir con una violación de NOT NULL.
///
/// ```
/// use cadencia_core::domain::song::NewSong;
///
/// let draft = NewSong::new().name("Intro").length(3.5).streams(0);
/// assert_eq!(draft.album_id, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSong {
  pub name: Option<String>,
  pub length: Option<f64>,
  pub streams: Option<i64>,
  pub album_id: Option<AlbumId>,
}

impl NewSong {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// `NaN` se acepta aquí pero se rechaza al persistir con
  /// [`ConstraintKind::Check`](crate::errors::ConstraintKind::Check).
  pub fn length(mut self, length: f64) -> Self {
    self.length = Some(length);
    self
  }

  pub fn streams(mut self, streams: i64) -> Self {
    self.streams = Some(streams);
    self
  }

  pub fn album_id(mut self, album_id: AlbumId) -> Self {
    self.album_id = Some(album_id);
    self
  }
}
