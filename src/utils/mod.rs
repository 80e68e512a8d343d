pub mod build_info;
pub mod export_file;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default log directive when `RUST_LOG` says nothing about this crate.
const DEFAULT_DIRECTIVE: &str = "expense_core=info";

/// Initializes the global tracing subscriber. Logs go to stderr so shell
/// output on stdout stays scriptable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
