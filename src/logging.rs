//! Logging bootstrap for the binary. Library code only speaks through the
//! `log` facade; wiring it to stderr happens here, once.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Initialize stderr logging at `level` (overridable via `RUST_LOG`).
///
/// Idempotent: the first caller wins, later calls are no-ops. Never
/// panics; if the logger cannot start, log output is simply dropped.
pub fn init(level: &str) {
    let _ = LOGGER.get_or_try_init(|| {
        Logger::try_with_env_or_str(level)?.log_to_stderr().start()
    });
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn test_init_is_idempotent() {
        init("warn");
        init("debug");
        log::warn!("logging smoke test");
    }
}
