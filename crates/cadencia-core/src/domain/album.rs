use crate::domain::ids::{AlbumId, ArtistId};
use serde::{Deserialize, Serialize};

/// Un álbum. Pertenece a un único artista y es dueño de sus canciones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
  pub id: AlbumId,
  pub name: String,
  pub artist_id: ArtistId,
}

/// Borrador de [`Album`].
///
/// `name` vale `""` por defecto. `artist_id` es obligatorio en la tabla pero
/// opcional aquí: si falta, el fallo llega al persistir (NOT NULL), no al
/// construir.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAlbum {
  pub name: String,
  pub artist_id: Option<ArtistId>,
}

impl NewAlbum {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  pub fn artist_id(mut self, artist_id: ArtistId) -> Self {
    self.artist_id = Some(artist_id);
    self
  }
}
