//! Step engine errors
//!
//! A well-formed routine never produces these.  When one does, the run it
//! belongs to is abandoned and the sequence is left as it was mutated.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A routine addressed a position outside the sequence
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The sequence lent to a run is not the length the run started with
    #[error("sequence length changed mid-run: started with {expected}, got {actual}")]
    LengthChanged { expected: usize, actual: usize },

    /// A parent frame expected its child to hand back a value
    #[error("{routine} finished without returning a value")]
    MissingReturn { routine: &'static str },
}
