use tracing::Level;

mod concat;

/// Opt-in log output while debugging test runs; safe to call from every
/// test because only the first initialization wins.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .try_init()
        .ok();
}
