#[macro_use]
extern crate quickcheck_macros;

use tracing_subscriber::EnvFilter;

mod binary;

/// Installs a subscriber so traversal `trace!` events show up with
/// `RUST_LOG=trees=trace`. Only the first call in a test binary wins.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
