use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Un artista del catálogo.
///
/// Es dueño exclusivo de sus álbumes: borrar un artista borra sus álbumes
/// (y, en cascada, canciones y comentarios).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  pub id: ArtistId,
  pub name: String,
}

/// Borrador de [`Artist`] todavía sin clave.
///
/// `name` vale `""` si no se indica.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewArtist {
  pub name: String,
}

impl NewArtist {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
}
