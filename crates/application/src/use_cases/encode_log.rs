//! Encode log record use case.

use esdoc_domain::{AttributeMap, Document, LogRecord};

use crate::config::{EncodeConfig, MappingMode};
use crate::error::{EncodeError, EncodeResult};
use crate::ports::DocumentSink;
use crate::serializer::serialize_document;

/// Turns log records into index documents.
///
/// The record is kept close to its original shape: fixed top-level fields,
/// then the body, record attributes and resource attributes flattened under
/// `Body`, `Attributes` and `Resource`.
///
/// Attribute lists may carry the same key more than once, as append-only
/// loggers produce them. With `dedup` enabled the last occurrence wins,
/// and a leaf sharing its path with deeper keys moves to `<path>.value`.
#[derive(Debug, Clone)]
pub struct EncodeModel {
    config: EncodeConfig,
}

impl EncodeModel {
    /// Creates a model for `config`.
    ///
    /// # Errors
    /// Returns [`EncodeError::UnsupportedMode`] for mapping modes this
    /// encoder does not implement.
    pub fn new(config: EncodeConfig) -> EncodeResult<Self> {
        match config.mode {
            MappingMode::None => Ok(Self { config }),
            MappingMode::Ecs => Err(EncodeError::UnsupportedMode(format!(
                "mapping mode '{}'",
                config.mode
            ))),
        }
    }

    /// Returns the model's configuration.
    #[must_use]
    pub const fn config(&self) -> &EncodeConfig {
        &self.config
    }

    /// Builds the sorted (and, if enabled, deduplicated) document for a
    /// record.
    #[must_use]
    pub fn document(&self, resource: &AttributeMap, record: &LogRecord) -> Document {
        let mut document = Document::with_capacity(8 + record.attributes.len() + resource.len());

        document.add_timestamp("Timestamp", record.timestamp);
        document.add_id("TraceId", &record.trace_id);
        document.add_id("SpanId", &record.span_id);
        document.add_int("TraceFlags", i64::from(record.flags));
        document.add_string("SeverityText", &record.severity_text);
        document.add_int("SeverityNumber", i64::from(record.severity_number));
        document.add_string("Name", &record.name);

        document.add_attribute("Body", &record.body);

        document.add_attributes("Attributes", &record.attributes);
        document.add_attributes("Resource", resource);

        document.sort();
        if self.config.dedup {
            document.dedup();
        }

        tracing::debug!(
            fields = document.len(),
            dedup = self.config.dedup,
            dedot = self.config.dedot,
            "encoded log record"
        );
        document
    }

    /// Builds the record's document and writes it to `sink`.
    ///
    /// # Errors
    /// Returns the first sink error.
    pub fn encode<S: DocumentSink + ?Sized>(
        &self,
        resource: &AttributeMap,
        record: &LogRecord,
        sink: &mut S,
    ) -> EncodeResult<()> {
        let document = self.document(resource, record);
        serialize_document(&document, sink, self.config.dedot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::tests::{Event, RecordingSink};
    use esdoc_domain::{AttributeValue, Kind, SpanId, TraceId, Value, timestamp_from_unix_nanos};
    use pretty_assertions::assert_eq;

    fn model(dedup: bool, dedot: bool) -> EncodeModel {
        EncodeModel::new(EncodeConfig {
            mode: MappingMode::None,
            dedup,
            dedot,
        })
        .expect("raw mode is supported")
    }

    fn keys(doc: &Document) -> Vec<&str> {
        doc.iter().map(|(k, _)| k).collect()
    }

    fn sample_record() -> LogRecord {
        LogRecord {
            timestamp: timestamp_from_unix_nanos(1_000_000_000),
            trace_id: TraceId([1; 16]),
            span_id: SpanId([2; 8]),
            flags: 1,
            severity_text: "INFO".to_string(),
            severity_number: 9,
            name: String::new(),
            body: AttributeValue::from("hello"),
            attributes: AttributeMap::new().with("user", "alice"),
        }
    }

    #[test]
    fn test_ecs_mode_is_unsupported() {
        let result = EncodeModel::new(EncodeConfig {
            mode: MappingMode::Ecs,
            ..EncodeConfig::default()
        });
        assert!(matches!(result, Err(EncodeError::UnsupportedMode(_))));
    }

    #[test]
    fn test_document_layout() {
        let resource = AttributeMap::new().with("host", "h1");
        let doc = model(true, false).document(&resource, &sample_record());

        assert_eq!(
            keys(&doc),
            vec![
                "Attributes.user",
                "Body",
                "Resource.host",
                "SeverityNumber",
                "SeverityText",
                "SpanId",
                "Timestamp",
                "TraceFlags",
                "TraceId",
            ]
        );
        assert_eq!(doc.get("SpanId"), Some(&Value::from("0202020202020202")));
        assert_eq!(doc.get("TraceFlags"), Some(&Value::Int(1)));
        assert_eq!(doc.get("Timestamp").map(Value::kind), Some(Kind::Timestamp));
    }

    #[test]
    fn test_unset_fields_are_skipped() {
        let doc = model(true, false).document(&AttributeMap::new(), &LogRecord::default());
        assert_eq!(
            keys(&doc),
            vec!["SeverityNumber", "Timestamp", "TraceFlags"]
        );
    }

    #[test]
    fn test_map_body_is_flattened() {
        let record = LogRecord {
            body: AttributeValue::Map(AttributeMap::new().with("msg", "hi").with("code", 3_i64)),
            ..LogRecord::default()
        };
        let doc = model(true, false).document(&AttributeMap::new(), &record);
        assert_eq!(doc.get("Body.msg"), Some(&Value::from("hi")));
        assert_eq!(doc.get("Body.code"), Some(&Value::Int(3)));
        assert!(doc.get("Body").is_none());
    }

    #[test]
    fn test_duplicate_attributes_last_wins() {
        let record = LogRecord {
            attributes: AttributeMap::new().with("k", 1_i64).with("k", 2_i64),
            ..LogRecord::default()
        };

        let deduped = model(true, false).document(&AttributeMap::new(), &record);
        let kinds: Vec<Kind> = deduped
            .iter()
            .filter(|(k, _)| *k == "Attributes.k")
            .map(|(_, v)| v.kind())
            .collect();
        assert_eq!(kinds, vec![Kind::Ignore, Kind::Int]);

        let raw = model(false, false).document(&AttributeMap::new(), &record);
        assert!(raw.iter().all(|(_, v)| v.kind() != Kind::Ignore));
    }

    #[test]
    fn test_encode_dedotted() {
        let record = LogRecord {
            attributes: AttributeMap::new().with("a", 1_i64),
            ..LogRecord::default()
        };
        let mut sink = RecordingSink::default();
        model(true, true)
            .encode(&AttributeMap::new(), &record, &mut sink)
            .expect("encoding should work");

        let start = &sink.events[..4];
        assert_eq!(
            start,
            &[
                Event::StartObject,
                Event::Key("Attributes".to_string()),
                Event::StartObject,
                Event::Key("a".to_string()),
            ]
        );
    }
}
