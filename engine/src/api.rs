use crate::error::GatewayError;
use crate::schema::FormSchema;
use crate::types::{FieldValue, NormalizedRecord};
use serde_json::{Map, Value};

/// Wire payload for one submission: the normalized record as a JSON
/// object, with machine-only fields stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload {
    body: Map<String, Value>,
}

impl SubmissionPayload {
    pub fn from_record(record: &NormalizedRecord, schema: &FormSchema) -> Self {
        let mut body = Map::new();
        for (name, value) in record.iter() {
            let machine_only = schema
                .field(name)
                .map(|f| f.is_machine_only())
                .unwrap_or(false);
            if machine_only {
                continue;
            }
            let json = match value {
                FieldValue::Text(s) => Value::String(s.clone()),
                FieldValue::Integer(n) => Value::from(*n),
                FieldValue::Decimal(n) => Value::from(*n),
                FieldValue::Bool(b) => Value::Bool(*b),
            };
            body.insert(name.to_string(), json);
        }
        Self { body }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.body.contains_key(name)
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.body
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.body.clone())
    }
}

/// External collaborator that persists a submission.
///
/// The engine treats the call as opaque: success or `GatewayError`,
/// nothing else is interpreted. Implementations live at the transport
/// layer; tests use the doubles in `test_harness`.
#[async_trait::async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, endpoint: &str, payload: &SubmissionPayload)
        -> Result<(), GatewayError>;
}
