use serde::{Deserialize, Serialize};
use std::fmt;

/// Declara un identificador subrogado (entero autoincremental asignado por la
/// capa de persistencia).
///
/// Cada entidad tiene su propio tipo para que no se mezclen claves de tablas
/// distintas; en JSON se ven como enteros planos.
macro_rules! surrogate_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $name(i64);

    impl $name {
      /// Envuelve una clave leída de la base de datos.
      pub fn from_raw(raw: i64) -> Self {
        $name(raw)
      }

      /// Devuelve el entero interno.
      pub fn as_raw(&self) -> i64 {
        self.0
      }
    }

    impl From<i64> for $name {
      fn from(raw: i64) -> Self {
        $name(raw)
      }
    }

    impl From<$name> for i64 {
      fn from(id: $name) -> Self {
        id.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

surrogate_id!(
  /// Clave de un [`Artist`](crate::domain::artist::Artist).
  ArtistId
);

surrogate_id!(
  /// Clave de un [`Album`](crate::domain::album::Album).
  AlbumId
);

surrogate_id!(
  /// Clave de una [`Song`](crate::domain::song::Song).
  SongId
);

surrogate_id!(CommentId);

surrogate_id!(MoodId);

surrogate_id!(UserId);
