use crate::domain::ids::{CommentId, SongId, UserId};
use serde::{Deserialize, Serialize};

/// Comentario de un usuario sobre una canción.
///
/// `user_comment` es un entero porque así está declarada la columna; ver
/// DESIGN.md antes de cambiarlo a texto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
  pub id: CommentId,
  pub user_comment: i64,
  pub user_id: UserId,
  pub song_id: SongId,
}

/// Borrador de [`Comment`]. Los tres campos son obligatorios al persistir.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewComment {
  pub user_comment: Option<i64>,
  pub user_id: Option<UserId>,
  pub song_id: Option<SongId>,
}

impl NewComment {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn comment(mut self, user_comment: i64) -> Self {
    self.user_comment = Some(user_comment);
    self
  }

  pub fn user_id(mut self, user_id: UserId) -> Self {
    self.user_id = Some(user_id);
    self
  }

  pub fn song_id(mut self, song_id: SongId) -> Self {
    self.song_id = Some(song_id);
    self
  }
}
