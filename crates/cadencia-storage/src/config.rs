use cadencia_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, PATHS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sección `[storage]` de `cadencia.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
  pub db_path: PathBuf,
  /// Valor para `PRAGMA journal_mode`; `None` deja el de SQLite.
  pub journal_mode: Option<String>,
}

impl Default for StorageConfig {
  fn default() -> Self {
    let db_path = PATHS.data_dir.join("cadencia.db");
    StorageConfig { db_path, journal_mode: Some("WAL".to_string()) }
  }
}

impl StorageConfig {
  /// Carga la sección y la vuelve a escribir, para que los valores por
  /// defecto queden visibles en el archivo.
  pub fn load() -> Result<Self, ConfigError> {
    let cfg: StorageConfig = CONFIG_BACKEND.load_section_with_default("storage")?;
    cfg.save()?;
    Ok(cfg)
  }

  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section("storage")
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("storage", self)
  }

  pub fn database_url(&self) -> String {
    self.db_path.to_string_lossy().into_owned()
  }
}
