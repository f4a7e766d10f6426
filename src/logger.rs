//! Diagnostic sink injected into the credential operations.

/// Fire-and-forget diagnostic sink.
///
/// Implementations must not panic; the return value of a call never affects
/// the extraction result.
#[cfg_attr(test, mockall::automock)]
pub trait Logger {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}

/// Forwards messages to [`tracing`] under the `http_authorization` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub const fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "http_authorization", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "http_authorization", "{message}");
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
