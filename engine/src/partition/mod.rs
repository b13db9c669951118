//! Step partition: ordered grouping of schema fields into UI steps.
//!
//! Advancing a step validates only that step's fields; final submission
//! validates everything. A single-step form is the degenerate case and
//! goes through the same code path.

use crate::error::PartitionError;
use crate::schema::FormSchema;
use crate::types::{FieldName, FormRecord};
use crate::validator::{self, ValidationResult};
use std::collections::BTreeSet;

/// Ordered sequence of steps, each a set of field names.
///
/// Invariant: the step field-sets partition the schema field set — every
/// schema field belongs to exactly one step. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPartition {
    steps: Vec<BTreeSet<FieldName>>,
}

impl StepPartition {
    pub fn new<I, S, F>(schema: &FormSchema, steps: I) -> Result<Self, PartitionError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = F>,
        F: Into<FieldName>,
    {
        let mut seen: BTreeSet<FieldName> = BTreeSet::new();
        let mut collected: Vec<BTreeSet<FieldName>> = Vec::new();

        for step in steps {
            let mut fields = BTreeSet::new();
            for field in step {
                let name = field.into();
                if !schema.contains(&name) {
                    return Err(PartitionError::UnknownField(name.to_string()));
                }
                if !seen.insert(name.clone()) {
                    return Err(PartitionError::OverlappingField(name.to_string()));
                }
                fields.insert(name);
            }
            collected.push(fields);
        }

        if collected.is_empty() {
            return Err(PartitionError::EmptyPartition);
        }

        for name in schema.field_names() {
            if !seen.contains(name) {
                return Err(PartitionError::UncoveredField(name.to_string()));
            }
        }

        Ok(Self { steps: collected })
    }

    /// One step holding every schema field.
    pub fn single(schema: &FormSchema) -> Self {
        Self {
            steps: vec![schema.field_names().cloned().collect()],
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn step_fields(&self, index: usize) -> &BTreeSet<FieldName> {
        &self.steps[index]
    }

    /// Index of the step that owns `name`. `None` for fields outside the
    /// schema; partition construction guarantees coverage otherwise.
    pub fn step_of(&self, name: &FieldName) -> Option<usize> {
        self.steps.iter().position(|s| s.contains(name))
    }
}

/// Validate only the fields of the current step (forward navigation).
/// Errors of later steps are deferred until their own advance or the
/// final submission.
pub fn can_advance(
    partition: &StepPartition,
    step_index: usize,
    schema: &FormSchema,
    record: &FormRecord,
) -> ValidationResult {
    validator::validate(schema, record, partition.step_fields(step_index))
}

/// Final-submit variant: validate every field across all steps. A user
/// may have navigated back and mutated an earlier step, so nothing cached
/// from a previous partial check is trusted.
pub fn validate_all(schema: &FormSchema, record: &FormRecord) -> ValidationResult {
    let all: BTreeSet<FieldName> = schema.field_names().cloned().collect();
    validator::validate(schema, record, &all)
}
