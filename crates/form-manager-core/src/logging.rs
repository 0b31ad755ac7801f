//! Logging integration for form-manager.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating render spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level`. In debug mode a pretty,
/// human-readable format is used; otherwise a structured JSON format is used.
/// If a subscriber is already installed this is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a trace-level span covering the rendering of one element.
///
/// # Examples
///
/// ```
/// use form_manager_core::logging::render_span;
///
/// let span = render_span("textarea");
/// let _guard = span.enter();
/// tracing::trace!("rendering");
/// ```
pub fn render_span(tag: &str) -> tracing::Span {
    tracing::trace_span!("render", tag = tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_does_not_panic() {
        let mut settings = Settings::default();
        settings.log_level = "not a [valid filter".to_string();
        setup_logging(&settings);
        settings.debug = false;
        setup_logging(&settings);
    }

    #[test]
    fn test_render_span_enter() {
        let span = render_span("input");
        let _guard = span.enter();
        tracing::trace!("inside render span");
    }
}
