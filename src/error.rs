use thiserror::Error;

/// Everything that can abort an evaluation run. None of these are recovered from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A line matches none of the definition forms.
    #[error("line {line}: cannot parse `{text}`: expected {expected}")]
    Parse {
        line: usize,
        text: String,
        expected: String,
    },
    /// A wire is referenced but never given a literal or a gate.
    #[error("wire `{wire}` is used by `{referenced_by}` but never defined")]
    UndefinedWire { wire: String, referenced_by: String },
    #[error("wire `{wire}` is defined more than once")]
    DuplicateDefinition { wire: String },
    /// A full sweep resolved nothing while wires were still unresolved.
    #[error("no progress with {} wire(s) unresolved: {}", .unresolved.len(), .unresolved.join(", "))]
    CycleDetected { unresolved: Vec<String> },
}
