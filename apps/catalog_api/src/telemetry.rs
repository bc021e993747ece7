// apps/catalog_api/src/telemetry.rs

use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the default `info` level; `LOG_FORMAT=json` switches to
/// one JSON object per line.
pub fn init_tracing() {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  let json = std::env::var("LOG_FORMAT")
    .map(|format| format.eq_ignore_ascii_case("json"))
    .unwrap_or(false);
  if json {
    builder.json().init();
  } else {
    builder.init();
  }
}
