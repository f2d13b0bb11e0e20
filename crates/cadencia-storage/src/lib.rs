pub mod cascade;
pub mod config;
pub mod logging;
pub mod models;
pub mod schema;

mod errors;
mod repository;

use std::cell::RefCell;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use cadencia_core::errors::CoreError;

pub use crate::cascade::{CascadeReport, CascadeRoot};
pub use crate::config::StorageConfig;
use crate::errors::StorageError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Adaptador SQLite (diesel) del port
/// [`CatalogRepository`](cadencia_core::ports::CatalogRepository).
///
/// Una sola conexión, sin pool: el catálogo es síncrono y de un hilo.
pub struct SqliteCatalogRepository {
  conn: RefCell<SqliteConnection>,
}

impl SqliteCatalogRepository {
  /// Abre (o crea) la base en `database_url`, activa las claves foráneas y
  /// aplica las migraciones pendientes.
  pub fn new(database_url: &str) -> Result<Self, CoreError> {
    Self::open(database_url, None)
  }

  /// Base efímera para tests y herramientas.
  pub fn in_memory() -> Result<Self, CoreError> {
    Self::open(":memory:", None)
  }

  pub fn with_config(cfg: &StorageConfig) -> Result<Self, CoreError> {
    if let Some(parent) = cfg.db_path.parent() {
      std::fs::create_dir_all(parent).map_err(|e| CoreError::Repository(e.to_string()))?;
    }
    Self::open(&cfg.database_url(), cfg.journal_mode.as_deref())
  }

  /// Usa la sección `[storage]` de la configuración global.
  pub fn new_from_config() -> Result<Self, CoreError> {
    let cfg = StorageConfig::load().map_err(|e| CoreError::Repository(e.to_string()))?;
    Self::with_config(&cfg)
  }

  fn open(database_url: &str, journal_mode: Option<&str>) -> Result<Self, CoreError> {
    let mut conn =
      SqliteConnection::establish(database_url).map_err(|e| CoreError::Repository(e.to_string()))?;

    if let Some(mode) = journal_mode {
      if !mode.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::Repository(format!("invalid journal_mode: {mode}")));
      }
      conn
        .batch_execute(&format!("PRAGMA journal_mode = {mode};"))
        .map_err(|e| CoreError::from(StorageError::from(e)))?;
    }

    // Por conexión: SQLite arranca con las claves foráneas desactivadas.
    conn.batch_execute("PRAGMA foreign_keys = ON;").map_err(|e| CoreError::from(StorageError::from(e)))?;

    let applied =
      conn.run_pending_migrations(MIGRATIONS).map_err(|e| CoreError::Repository(e.to_string()))?.len();

    info!(database_url, applied, "catalog database ready");
    Ok(Self { conn: RefCell::new(conn) })
  }

  /// Ejecuta `f` con la conexión prestada y traduce el error al del núcleo.
  fn run<T>(&self, f: impl FnOnce(&mut SqliteConnection) -> Result<T, StorageError>) -> Result<T, CoreError> {
    let mut conn = self.conn.borrow_mut();
    f(&mut *conn).map_err(CoreError::from)
  }

  /// Igual que [`Self::run`], dentro de una transacción.
  fn run_in_transaction<T>(
    &self,
    f: impl FnOnce(&mut SqliteConnection) -> Result<T, StorageError>,
  ) -> Result<T, CoreError> {
    let mut conn = self.conn.borrow_mut();
    conn.transaction(f).map_err(CoreError::from)
  }

  /// Como los `delete_*` del port, pero devuelve el recuento de filas
  /// borradas por tabla.
  pub fn delete_cascade(&self, root: CascadeRoot) -> Result<CascadeReport, CoreError> {
    match root {
      CascadeRoot::Artist(id) => self.cascade("artist", id.as_raw(), cascade::delete_artist, |r| r.artists),
      CascadeRoot::Album(id) => self.cascade("album", id.as_raw(), cascade::delete_album, |r| r.albums),
      CascadeRoot::Song(id) => self.cascade("song", id.as_raw(), cascade::delete_song, |r| r.songs),
      CascadeRoot::Mood(id) => self.cascade("mood", id.as_raw(), cascade::delete_mood, |r| r.moods),
      CascadeRoot::User(id) => self.cascade("user", id.as_raw(), cascade::delete_user, |r| r.users),
    }
  }

  /// Borra en una transacción y devuelve cuántas filas cayeron.
  ///
  /// `root` indica qué contador del informe corresponde a la fila raíz: si
  /// queda en cero la clave no existía y el resultado es `NotFound`.
  fn cascade(
    &self,
    entity: &'static str,
    id: i64,
    delete: fn(&mut SqliteConnection, i64, &mut CascadeReport) -> QueryResult<()>,
    root: fn(&CascadeReport) -> usize,
  ) -> Result<CascadeReport, CoreError> {
    let report = self.run_in_transaction(|conn| {
      let mut report = CascadeReport::default();
      delete(conn, id, &mut report)?;
      if root(&report) == 0 {
        return Err(StorageError::NotFound { entity, id });
      }
      Ok(report)
    })?;

    info!(
      entity,
      id,
      albums = report.albums,
      songs = report.songs,
      comments = report.comments,
      mood_tags = report.mood_tags,
      likes = report.likes,
      "deleted with cascade"
    );
    debug!(?report, "cascade report");
    Ok(report)
  }
}
