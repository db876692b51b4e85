/// Logging capability injected into the client.
///
/// The transport reports attempt progress through this interface instead of
/// a process-wide logger, so callers decide where (and whether) the entries
/// go. Log calls are observational only and never affect control flow.
pub trait Logger: Send + Sync {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Discards everything. The default.
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}

/// Forwards to the `tracing` crate under the `embed` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, msg: &str) {
        tracing::info!(target: "embed", "{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(target: "embed", "{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!(target: "embed", "{msg}");
    }
}
