use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter: our own crate at info, the chattier database and crypto
/// layers at warn.
const DEFAULT_FILTER: &str =
    "info,folio_backend=info,actix_web=info,sqlx=warn,sea_orm=warn,bcrypt=warn";

/// Initialize the process-wide subscriber.
///
/// JSON lines by default (what the log pipeline ingests); `LOG_FORMAT=pretty`
/// switches to human-readable output for local development.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let pretty = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "pretty");

    if pretty {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_ansi(false)
                    .json()
                    .flatten_event(true),
            )
            .init();
    }
}
