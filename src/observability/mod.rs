//! Span export for debugging the plugin.
//!
//! [`init_tracing`] installs a `tracing` subscriber whose spans are bridged
//! to OpenTelemetry and written as JSON lines under the plugin data
//! directory:
//!
//! ```text
//! /host/.local/share/zellij/profiledeck/profiledeck-spans.jsonl
//! ```
//!
//! The file rotates at 10 MiB and keeps three backups. Observability is
//! optional: if the directory cannot be created, or a subscriber is already
//! installed, initialization silently does nothing.

mod exporter;
mod rotation;

pub use exporter::{EventRecord, JsonLinesExporter, SpanRecord};
pub use rotation::{RotatingFile, DEFAULT_KEEP, DEFAULT_MAX_BYTES};

use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and tracer name attached to every span.
const SERVICE_NAME: &str = "Profiledeck";

/// Span log file name inside the data directory.
pub const SPAN_FILE_NAME: &str = "profiledeck-spans.jsonl";

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.trace_level` (any `EnvFilter` directive,
/// default `info`).
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let writer = RotatingFile::new(data_dir.join(SPAN_FILE_NAME), DEFAULT_MAX_BYTES, DEFAULT_KEEP);
    let exporter = JsonLinesExporter::new(writer, &resource);

    let provider = TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build();

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
