use super::Engine;
use crate::driver::Connection;

/// What [`Engine::get`](super::Engine::get) does with a row it cannot load.
///
/// Failures that prevent reading rows at all (preparing the query, opening or
/// advancing the cursor) always fail the call. This policy only governs rows
/// that were read but could not be coerced or assembled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RowErrorPolicy {
    /// Log the failure and leave the row out of the result.
    #[default]
    Skip,

    /// Return the failure and discard rows loaded so far.
    Fail,
}

/// Configures an [`Engine`].
#[derive(Debug, Default, Clone)]
pub struct Builder {
    row_error_policy: RowErrorPolicy,
}

impl Builder {
    pub fn row_error_policy(&mut self, policy: RowErrorPolicy) -> &mut Self {
        self.row_error_policy = policy;
        self
    }

    /// Builds an engine that owns `connection`.
    pub fn build<C: Connection>(&self, connection: C) -> Engine<C> {
        Engine {
            connection,
            row_error_policy: self.row_error_policy,
        }
    }
}
