//! Tracing subscriber setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::observability::{LogFormat, LoggingConfig};

use super::{ObservabilityError, otel::SERVICE_NAME};

/// Transport crates that are noisy below `warn`.
const QUIET_TARGETS: [&str; 4] = ["h2", "hyper", "tonic", "opentelemetry"];

pub(super) fn init_subscriber(
    config: &LoggingConfig,
    tracer_provider: Option<&SdkTracerProvider>,
) -> Result<(), ObservabilityError> {
    let output: Box<dyn Layer<Registry> + Send + Sync> = match config.log_format {
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
    };

    let traces = tracer_provider
        .map(|provider| tracing_opentelemetry::layer().with_tracer(provider.tracer(SERVICE_NAME)));

    tracing_subscriber::registry()
        .with(output)
        .with(EnvFilter::new(filter_directives(&config.log_level)))
        .with(traces)
        .try_init()?;

    Ok(())
}

/// Quiet transport targets first, so the configured directives can override them.
fn filter_directives(configured: &str) -> String {
    let mut directives: Vec<String> = QUIET_TARGETS
        .iter()
        .map(|target| format!("{target}=warn"))
        .collect();

    directives.push(configured.trim().to_owned());

    directives.join(",")
}

#[cfg(test)]
mod tests {
    use super::filter_directives;

    #[test]
    fn configured_level_follows_quiet_targets() {
        assert_eq!(
            filter_directives("debug"),
            "h2=warn,hyper=warn,tonic=warn,opentelemetry=warn,debug"
        );
    }

    #[test]
    fn configured_directives_are_trimmed() {
        assert!(
            filter_directives(" market_json=trace ").ends_with(",market_json=trace"),
            "expected trimmed directive"
        );
    }
}
