use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` directives are honored; the crate logs at `info` otherwise.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "finance_core=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        if let Err(err) = fmt().with_env_filter(filter).try_init() {
            tracing::debug!(error = %err, "global subscriber already installed");
        }
    });
}
