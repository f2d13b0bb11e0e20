use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Suscriptor `fmt` filtrado por `RUST_LOG` (por defecto `info`).
///
/// Para los binarios del crate; una librería no debe instalar suscriptores.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  // Si otro suscriptor ya está instalado (tests), se ignora.
  let _ = tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).try_init();
}
