use std::fmt;

#[derive(Debug)]
pub enum EngineError {
    Schema(SchemaError),
    Partition(PartitionError),
    Session(SessionError),
    StateMachine(StateMachineError),
    Gateway(GatewayError),
}

impl EngineError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            EngineError::Schema(_) => false,
            EngineError::Partition(_) => false,
            EngineError::Session(_) => true,
            EngineError::StateMachine(_) => true,
            EngineError::Gateway(_) => true,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Schema(e) => write!(f, "Schema error: {e}"),
            EngineError::Partition(e) => write!(f, "Partition error: {e}"),
            EngineError::Session(e) => write!(f, "Session error: {e}"),
            EngineError::StateMachine(e) => write!(f, "State machine error: {e}"),
            EngineError::Gateway(e) => write!(f, "Gateway error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<SchemaError> for EngineError {
    fn from(value: SchemaError) -> Self {
        EngineError::Schema(value)
    }
}

impl From<PartitionError> for EngineError {
    fn from(value: PartitionError) -> Self {
        EngineError::Partition(value)
    }
}

impl From<SessionError> for EngineError {
    fn from(value: SessionError) -> Self {
        EngineError::Session(value)
    }
}

impl From<StateMachineError> for EngineError {
    fn from(value: StateMachineError) -> Self {
        EngineError::StateMachine(value)
    }
}

impl From<GatewayError> for EngineError {
    fn from(value: GatewayError) -> Self {
        EngineError::Gateway(value)
    }
}

/// Schema construction errors. Schemas are immutable after construction,
/// so these never occur at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    EmptySchema,
    DuplicateField(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::EmptySchema => write!(f, "schema has no fields"),
            SchemaError::DuplicateField(name) => write!(f, "duplicate field: {name}"),
        }
    }
}

/// Step partition construction errors. Step field-sets must partition the
/// schema field set exactly: no gaps, no overlaps, no strangers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    EmptyPartition,
    UnknownField(String),
    UncoveredField(String),
    OverlappingField(String),
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionError::EmptyPartition => write!(f, "partition has no steps"),
            PartitionError::UnknownField(name) => {
                write!(f, "field not in schema: {name}")
            }
            PartitionError::UncoveredField(name) => {
                write!(f, "field not covered by any step: {name}")
            }
            PartitionError::OverlappingField(name) => {
                write!(f, "field appears in more than one step: {name}")
            }
        }
    }
}

/// Session misuse errors: operations invoked in a phase that rejects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NotLastStep,
    SubmitInProgress,
    AlreadySubmitted,
    NoSubmissionInFlight,
    UnknownField(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMachineError {
    IllegalTransition,
}

impl fmt::Display for StateMachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Submission transport failures. Always recoverable by an explicit,
/// user-initiated retry; never automatic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The call exceeded the configured upper bound.
    Timeout { limit_ms: u64 },
    /// Network-level failure (unreachable, connection reset, malformed response).
    Transport(String),
    /// The endpoint answered with a non-success status.
    Status(u16),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Timeout { limit_ms } => {
                write!(f, "submission timed out after {limit_ms}ms")
            }
            GatewayError::Transport(msg) => write!(f, "transport failure: {msg}"),
            GatewayError::Status(code) => write!(f, "endpoint returned status {code}"),
        }
    }
}

impl std::error::Error for GatewayError {}
