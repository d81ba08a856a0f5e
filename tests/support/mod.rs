#![allow(dead_code)]

pub mod mock_buffer;
pub mod mock_viewport;

/// Route `tracing` output to the test harness; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
