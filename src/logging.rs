/// Initializes the logger with the `env_logger` crate.
///
/// The decoders log through the `log` facade; the level is taken from
/// `RUST_LOG`. Calling this more than once is harmless, only the first call
/// installs the logger.
pub fn init_logger() {
    let _ = env_logger::try_init();
}
