use cadencia_core::{ConstraintKind, CoreError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Error interno del adaptador. Sale del crate siempre como [`CoreError`].
#[derive(Debug, Error)]
pub(crate) enum StorageError {
  #[error(transparent)]
  Diesel(#[from] DieselError),

  #[error("{entity} {id} not found")]
  NotFound { entity: &'static str, id: i64 },
}

impl From<StorageError> for CoreError {
  fn from(e: StorageError) -> Self {
    match e {
      StorageError::NotFound { entity, id } => CoreError::NotFound { entity, id },
      StorageError::Diesel(e) => map_diesel(e),
    }
  }
}

fn map_diesel(e: DieselError) -> CoreError {
  match e {
    DieselError::DatabaseError(kind, info) => {
      let message = info.message().to_string();
      match constraint_kind(&kind, &message) {
        Some(kind) => CoreError::Constraint { kind, message },
        None => CoreError::Repository(message),
      }
    }
    other => CoreError::Repository(other.to_string()),
  }
}

/// SQLite solo informa el tipo exacto con los códigos extendidos; si diesel
/// no lo clasificó se mira el texto ("NOT NULL constraint failed: ...").
fn constraint_kind(kind: &DatabaseErrorKind, message: &str) -> Option<ConstraintKind> {
  match kind {
    DatabaseErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
    DatabaseErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
    DatabaseErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
    DatabaseErrorKind::CheckViolation => Some(ConstraintKind::Check),
    _ if message.starts_with("NOT NULL constraint failed") => Some(ConstraintKind::NotNull),
    _ if message.starts_with("FOREIGN KEY constraint failed") => Some(ConstraintKind::ForeignKey),
    _ if message.starts_with("UNIQUE constraint failed") => Some(ConstraintKind::Unique),
    _ if message.starts_with("CHECK constraint failed") => Some(ConstraintKind::Check),
    _ => None,
  }
}
