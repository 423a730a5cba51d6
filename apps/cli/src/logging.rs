use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_TEST_LOGGING: Once = Once::new();

/// Install the stderr subscriber. `RUST_LOG` is honoured unless `verbose`
/// forces debug output; without either only warnings are shown.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Route logs through the test harness when `RUST_LOG` is set.
pub fn init_test_logging() {
    INIT_TEST_LOGGING.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
