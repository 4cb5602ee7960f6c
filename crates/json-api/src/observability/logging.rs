//! Subscriber initialisation.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::observability::{LogFormat, LoggingConfig};

/// Errors raised while initialising observability.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber in the configured format.
pub(crate) fn init(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

    let fmt = tracing_subscriber::fmt::layer().with_target(true);

    let (compact, json) = match config.log_format {
        LogFormat::Compact => (Some(fmt.compact().with_line_number(true)), None),
        LogFormat::Json => (None, Some(fmt.json().with_current_span(true))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .try_init()?;

    Ok(())
}

/// The configured level for everything, with the HTTP stack quietened.
fn default_directives(level: &str) -> String {
    format!("{level},hyper=warn,h2=warn,salvo_core=warn")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_directives_parse_as_filter() -> TestResult {
        let directives = default_directives("debug");

        assert!(directives.starts_with("debug,"));

        EnvFilter::try_new(directives)?;

        Ok(())
    }
}
