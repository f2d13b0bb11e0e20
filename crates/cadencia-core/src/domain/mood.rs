use crate::domain::ids::MoodId;
use serde::{Deserialize, Serialize};

/// Etiqueta de estado de ánimo. No es dueña de nada: borrar un mood solo
/// quita sus filas de asociación con canciones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
  pub id: MoodId,
  pub description: String,
  pub color: String,
}

/// Borrador de [`Mood`]: `description` vale `""` por defecto, `color` es
/// obligatorio al persistir.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMood {
  pub description: String,
  pub color: Option<String>,
}

impl NewMood {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }

  pub fn color(mut self, color: impl Into<String>) -> Self {
    self.color = Some(color.into());
    self
  }
}
