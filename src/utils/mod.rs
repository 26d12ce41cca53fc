use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "settle_core=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        // A subscriber installed by the host application wins.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
