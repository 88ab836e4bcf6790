use alloc::string::String;

use displaydoc::Display;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Node {0} is not part of the flow network
    MissingNode(String),
    /// Source and sink must be different nodes
    SourceIsSink,
    /// Invalid arc from node {0} to itself
    SelfLoop(String),
    /// Invalid arc capacity, expected non-negative value
    NegativeCapacity,
    /// Invalid capacity range, lower bound exceeds upper bound
    EmptyCapacityRange,
    /// Arithmetic overflow while accumulating flow
    ArithmeticOverflow,
    /// Flow invariant violated: {0}
    InvariantViolated(String),
}

impl core::error::Error for Error {}
