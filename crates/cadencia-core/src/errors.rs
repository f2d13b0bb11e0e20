// crates/cadencia-core/src/errors.rs
use std::fmt;

use thiserror::Error;

/// Tipo de restricción relacional violada al confirmar una escritura.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
  NotNull,
  ForeignKey,
  Unique,
  Check,
}

impl fmt::Display for ConstraintKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConstraintKind::NotNull => write!(f, "not null"),
      ConstraintKind::ForeignKey => write!(f, "foreign key"),
      ConstraintKind::Unique => write!(f, "unique"),
      ConstraintKind::Check => write!(f, "check"),
    }
  }
}

/// Error genérico del núcleo de Cadencia.
///
/// Las violaciones de restricciones llegan aquí en el momento de persistir,
/// nunca al construir un borrador. Esta capa no reintenta nada: las capas
/// superiores (API, CLI) deciden qué mostrar.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("{kind} constraint violated: {message}")]
  Constraint { kind: ConstraintKind, message: String },

  #[error("{entity} {id} not found")]
  NotFound { entity: &'static str, id: i64 },

  #[error("repository error: {0}")]
  Repository(String),
}

impl CoreError {
  pub fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
    CoreError::NotFound { entity, id: id.into() }
  }

  /// `true` si el error es una violación de restricción del tipo indicado.
  pub fn is_constraint(&self, expected: ConstraintKind) -> bool {
    matches!(self, CoreError::Constraint { kind, .. } if *kind == expected)
  }
}
