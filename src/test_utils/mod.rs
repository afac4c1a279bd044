//! Test utilities for FlashPrompt
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration test suite.
//!
//! # Example
//!
//! ```rust,no_run
//! use flashprompt::test_utils::TestEnvironment;
//!
//! let env = TestEnvironment::with_templates(&[("greeting", "Hi {{name}}")]).unwrap();
//! assert_eq!(env.template_names(), vec!["greeting"]);
//! ```

pub mod environment;

pub use environment::TestEnvironment;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. With `level` set that level is used;
/// otherwise logging is enabled only if `RUST_LOG` is set.
///
/// ```bash
/// RUST_LOG=flashprompt=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
