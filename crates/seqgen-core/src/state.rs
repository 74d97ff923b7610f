//! Production state shared by every generator shape.

/// Phase a generator is in.
///
/// Only `Generating` and `Exhausted` are observable once a constructor has
/// returned. `Created` is the value a generator starts from while it is being
/// armed, and `Waiting` is reserved: nothing transitions into it. Polling a
/// generator in either of them is reported as
/// [`GeneratorError::InvalidState`](crate::GeneratorError::InvalidState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorState {
    /// Constructed but not yet armed for production.
    Created,

    /// Reserved. No transition reaches this state.
    Waiting,

    /// May still yield values.
    Generating,

    /// Will not yield another value until reset.
    Exhausted,
}

impl GeneratorState {
    /// Get the string representation of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorState::Created => "created",
            GeneratorState::Waiting => "waiting",
            GeneratorState::Generating => "generating",
            GeneratorState::Exhausted => "exhausted",
        }
    }

    /// State a constructor arms a generator into.
    pub(crate) fn armed(producible: bool) -> Self {
        if producible {
            GeneratorState::Generating
        } else {
            GeneratorState::Exhausted
        }
    }
}

impl std::fmt::Display for GeneratorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
