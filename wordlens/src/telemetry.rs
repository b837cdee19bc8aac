//! Subscriber setup for log output and optional OTLP span export.

use std::io;

use miette::{IntoDiagnostic, WrapErr};
use opentelemetry::InstrumentationScope;
use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing::{debug, warn};
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, TracingConfig};

/// The filter directives to use when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "wordlens=info,wordlens_core=info";

/// Keeps the OTLP exporter alive and flushes pending spans when dropped.
#[must_use = "dropping the guard shuts down span export"]
pub struct Guard {
    provider: Option<SdkTracerProvider>,
}

impl Drop for Guard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take()
            && let Err(err) = provider.shutdown()
        {
            warn!(%err, "could not shut down tracer provider");
        }
    }
}

fn tracer_provider() -> miette::Result<SdkTracerProvider> {
    let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .build()
        .into_diagnostic()
        .wrap_err("building otlp http exporter failed")?;

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(otlp_exporter)
        .with_resource(
            Resource::builder_empty()
                .with_service_name(env!("CARGO_PKG_NAME"))
                .build(),
        )
        .build())
}

/// Installs the global subscriber, writing log lines to stderr in the configured format and
/// exporting spans over OTLP if enabled.
///
/// # Errors
///
/// Returns an error if the exporter can't be built or a global subscriber is already installed.
pub fn try_init(tracing: &TracingConfig) -> miette::Result<Guard> {
    let provider = if tracing.enabled {
        Some(tracer_provider()?)
    } else {
        None
    };

    let telemetry_layer = provider.as_ref().map(|provider| {
        let scope = InstrumentationScope::builder(env!("CARGO_PKG_NAME"))
            .with_version(env!("CARGO_PKG_VERSION"))
            .with_schema_url("https://opentelemetry.io/schema/1.0.0")
            .build();

        tracing_opentelemetry::layer().with_tracer(provider.tracer_with_scope(scope))
    });

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    let fmt_layer = match tracing.format {
        LogFormat::Compact => fmt_layer.compact().boxed(),
        LogFormat::Pretty => fmt_layer.pretty().boxed(),
        LogFormat::Json => fmt_layer.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(telemetry_layer)
        .with(fmt_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("could not init registry")?;

    debug!(format = ?tracing.format, otlp = tracing.enabled, "tracing initialized");

    Ok(Guard { provider })
}
