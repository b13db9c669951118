//! Form schema: declarative field definitions and the form definition
//! aggregate consumed by sessions.
//!
//! All structural validation happens at construction time. A `FormSchema`
//! or `StepPartition` that exists is well-formed; nothing re-checks
//! structure at runtime.

use crate::error::{EngineError, SchemaError};
use crate::partition::StepPartition;
use crate::types::{FieldKind, FieldName, FormRecord, RawValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default upper bound for one gateway call.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Constraints applied to one field, in addition to its kind's grammar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub required: bool,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Closed value set for select-style fields.
    pub one_of: Option<Vec<String>>,
}

/// Declarative description of a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    name: FieldName,
    kind: FieldKind,
    constraints: Constraints,
    /// Machine-only fields are validated but stripped from the
    /// submission payload (e.g. the accept-terms flag).
    machine_only: bool,
}

impl FieldSchema {
    /// Create a required field of the given kind.
    pub fn new(name: impl Into<FieldName>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            constraints: Constraints {
                required: true,
                ..Constraints::default()
            },
            machine_only: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.constraints.required = false;
        self
    }

    pub fn min_len(mut self, len: usize) -> Self {
        self.constraints.min_len = Some(len);
        self
    }

    pub fn max_len(mut self, len: usize) -> Self {
        self.constraints.max_len = Some(len);
        self
    }

    pub fn min(mut self, value: f64) -> Self {
        self.constraints.min = Some(value);
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        self.constraints.max = Some(value);
        self
    }

    pub fn one_of<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.one_of = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn machine_only(mut self) -> Self {
        self.machine_only = true;
        self
    }

    pub fn name(&self) -> &FieldName {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn is_required(&self) -> bool {
        self.constraints.required
    }

    pub fn is_machine_only(&self) -> bool {
        self.machine_only
    }
}

/// Ordered, immutable sequence of field schemas.
///
/// Invariant: field names are unique. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::EmptySchema);
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateField(field.name.to_string()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &FieldName) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| &f.name == name)
    }

    pub fn contains(&self, name: &FieldName) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.iter().map(|f| &f.name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Complete definition of one form: schema, step layout, endpoint,
/// defaults, and the submission timeout bound.
///
/// Owned by the form, immutable after construction; sessions hold it
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct FormDefinition {
    name: String,
    endpoint: String,
    schema: FormSchema,
    partition: StepPartition,
    defaults: Vec<(FieldName, RawValue)>,
    submit_timeout: Duration,
}

impl FormDefinition {
    /// Build schema and partition together; the common construction
    /// path for multi-step forms.
    pub fn try_new<I, S, F>(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        fields: Vec<FieldSchema>,
        steps: I,
    ) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = F>,
        F: Into<FieldName>,
    {
        let schema = FormSchema::new(fields)?;
        let partition = StepPartition::new(&schema, steps)?;
        Ok(Self::new(name, endpoint, schema, partition))
    }

    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        schema: FormSchema,
        partition: StepPartition,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            schema,
            partition,
            defaults: Vec::new(),
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
        }
    }

    /// Pre-populated values applied when a session is created.
    pub fn with_defaults(mut self, defaults: Vec<(FieldName, RawValue)>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = timeout;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn partition(&self) -> &StepPartition {
        &self.partition
    }

    pub fn submit_timeout(&self) -> Duration {
        self.submit_timeout
    }

    /// Fresh record for a new session, with defaults applied.
    pub fn initial_record(&self) -> FormRecord {
        self.defaults.iter().cloned().collect()
    }
}
