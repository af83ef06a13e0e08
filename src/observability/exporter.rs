//! JSON-lines span exporter.
//!
//! Each finished span becomes one [`SpanRecord`] serialized on its own line
//! of a [`RotatingFile`]. Records are flat and self-describing so the log can
//! be read with `jq` without an OTLP collector.

use super::rotation::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// One exported span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanRecord {
    pub service: String,
    pub trace_id: String,
    pub span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
    pub name: String,
    pub start_unix_nano: u64,
    pub duration_micros: u64,
    pub attributes: BTreeMap<String, JsonValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventRecord>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A `tracing` event recorded inside a span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub name: String,
    pub unix_nano: u64,
    pub attributes: BTreeMap<String, JsonValue>,
}

impl SpanRecord {
    fn from_span(service: &str, span: &SpanData) -> Self {
        let duration_micros = span
            .end_time
            .duration_since(span.start_time)
            .map_or(0, |d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX));

        let parent_span_id = (span.parent_span_id != SpanId::INVALID)
            .then(|| format!("{:016x}", span.parent_span_id));

        let (status, error) = match &span.status {
            Status::Unset => ("unset", None),
            Status::Ok => ("ok", None),
            Status::Error { description } => ("error", Some(description.to_string())),
        };

        Self {
            service: service.to_string(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            name: span.name.to_string(),
            start_unix_nano: unix_nanos(span.start_time),
            duration_micros,
            attributes: attribute_map(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| EventRecord {
                    name: event.name.to_string(),
                    unix_nano: unix_nanos(event.timestamp),
                    attributes: attribute_map(&event.attributes),
                })
                .collect(),
            status,
            error,
        }
    }
}

fn unix_nanos(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
}

pub(crate) fn attribute_map(attributes: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect()
}

pub(crate) fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.as_str().into_owned()),
    }
}

/// Exports finished spans to a rotating JSON-lines file.
#[derive(Debug)]
pub struct JsonLinesExporter {
    writer: RotatingFile,
    service: String,
    is_shutdown: bool,
}

impl JsonLinesExporter {
    #[must_use]
    pub fn new(writer: RotatingFile, resource: &Resource) -> Self {
        Self {
            writer,
            service: service_name(resource),
            is_shutdown: false,
        }
    }
}

fn service_name(resource: &Resource) -> String {
    resource
        .get(opentelemetry::Key::from_static_str("service.name"))
        .map_or_else(|| "unknown".to_string(), |v| v.as_str().into_owned())
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        for span in &batch {
            let record = SpanRecord::from_span(&self.service, span);
            let line = match serde_json::to_string(&record) {
                Ok(line) => line,
                Err(e) => return Box::pin(std::future::ready(Err(TraceError::from(e.to_string())))),
            };
            if let Err(e) = self.writer.write_line(&line) {
                return Box::pin(std::future::ready(Err(TraceError::from(e.to_string()))));
            }
        }

        Box::pin(std::future::ready(Ok(())))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.service = service_name(resource);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_keep_their_json_type() {
        let attrs = attribute_map(&[
            KeyValue::new("profile_count", 15_i64),
            KeyValue::new("applied", true),
            KeyValue::new("profile_id", "abc"),
        ]);

        assert_eq!(attrs["profile_count"], JsonValue::from(15));
        assert_eq!(attrs["applied"], JsonValue::Bool(true));
        assert_eq!(attrs["profile_id"], JsonValue::String("abc".to_string()));
    }

    #[test]
    fn service_name_comes_from_resource() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Profiledeck")]);
        assert_eq!(service_name(&resource), "Profiledeck");
    }

    #[test]
    fn record_serializes_as_flat_json() {
        let record = SpanRecord {
            service: "Profiledeck".to_string(),
            trace_id: "0".repeat(32),
            span_id: "1".repeat(16),
            parent_span_id: None,
            name: "handle_event".to_string(),
            start_unix_nano: 1,
            duration_micros: 250,
            attributes: BTreeMap::new(),
            events: vec![],
            status: "unset",
            error: None,
        };

        let json: JsonValue = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "handle_event");
        assert_eq!(json["duration_micros"], 250);
        assert!(json.get("parent_span_id").is_none());
        assert!(json.get("events").is_none());
    }
}
