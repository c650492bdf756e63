//! Error type shared by every knowledge-base operation.

use thiserror::Error;

/// Failure raised by a knowledge-base operation.
///
/// Unknown students and courses are NOT errors under the default
/// configuration; they simply carry no facts. The `Unknown*` and
/// `SelfPrerequisite` variants only appear when the corresponding
/// [`KbConfig`](crate::kb::KbConfig) switches are enabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum KbError {
    /// An identifier was empty (or blank, when identifiers are trimmed).
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// `requires(c, c)` was rejected because self-prerequisites are disabled.
    #[error("a course cannot be its own prerequisite: '{0}'")]
    SelfPrerequisite(String),

    /// The course was never declared (strict registry mode only).
    #[error("unknown course: '{0}'")]
    UnknownCourse(String),

    /// The student was never declared (strict registry mode only).
    #[error("unknown student: '{0}'")]
    UnknownStudent(String),
}

impl KbError {
    pub(crate) fn empty(field: &'static str) -> Self {
        KbError::InvalidArgument {
            field,
            reason: "identifier must not be empty".into(),
        }
    }
}
