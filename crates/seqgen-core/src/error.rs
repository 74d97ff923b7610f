//! Error type for generator operations.

use crate::GeneratorState;

/// Error type for generator operations.
///
/// Exhaustion is never an error; it is reported as `Ok(None)`. This type
/// only covers bugs in a generator's own state management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// Polled in a state outside the defined transition set
    #[error("Invalid generator state: {0}")]
    InvalidState(GeneratorState),
}
