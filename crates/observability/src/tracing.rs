//! Utility functions for tracing

/// Create a span for one stylesheet render
///
/// # Example
///
/// ```rust
/// use autostyle_observability::render_span;
///
/// let span = render_span!("generate", "./autoStyle.css");
/// // `output` is recorded with its `Display` impl, so paths work via `.display()`
/// let _guard = span.enter();
/// // ... render ...
/// ```
#[macro_export]
macro_rules! render_span {
    ($command:expr, $output:expr) => {
        tracing::info_span!(
            "autostyle.render",
            command = $command,
            output = %$output,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span
///
/// Logged at debug level; binaries report errors to the user themselves.
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string().as_str());
    tracing::debug!(error = %error, "Operation failed");
}

/// Record latency/duration on the current span
///
/// # Example
///
/// ```rust
/// use autostyle_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... operation ...
/// record_duration("duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
