//! Knowledge-base configuration.

/// Configuration switches for a [`KnowledgeBase`](super::KnowledgeBase).
///
/// The defaults give the permissive behaviour: any non-empty identifier is
/// accepted, unknown entities carry no facts, and cycles (including
/// self-loops) are stored as-is.
///
/// # Examples
///
/// ```
/// use advising_kbs::kb::KbConfig;
///
/// let config = KbConfig::default()
///     .with_require_declared(true)
///     .with_allow_self_prerequisite(false);
/// assert!(config.require_declared);
/// assert!(!config.allow_self_prerequisite);
/// assert!(!config.trim_identifiers);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KbConfig {
    /// Reject facts and queries that mention a course or student which was
    /// not declared first with `add_course` / `add_student`.
    pub require_declared: bool,
    /// Whether `requires(c, c)` is accepted. Longer cycles are always
    /// accepted; traversal handles them.
    pub allow_self_prerequisite: bool,
    /// Strip leading and trailing whitespace from identifiers before use.
    ///
    /// When off, identifiers are compared byte-for-byte.
    pub trim_identifiers: bool,
    /// Evaluate recommendation candidates in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            require_declared: false,
            allow_self_prerequisite: true,
            trim_identifiers: false,
            parallel: false,
        }
    }
}

impl KbConfig {
    /// Configuration matching a strict course registry: entities must be
    /// declared, self-prerequisites are refused and identifiers are trimmed.
    pub fn strict() -> Self {
        Self {
            require_declared: true,
            allow_self_prerequisite: false,
            trim_identifiers: true,
            parallel: false,
        }
    }

    /// Enables or disables the declared-entities requirement.
    pub fn with_require_declared(mut self, require: bool) -> Self {
        self.require_declared = require;
        self
    }

    /// Enables or disables self-prerequisite edges.
    pub fn with_allow_self_prerequisite(mut self, allow: bool) -> Self {
        self.allow_self_prerequisite = allow;
        self
    }

    /// Enables or disables identifier trimming.
    pub fn with_trim_identifiers(mut self, trim: bool) -> Self {
        self.trim_identifiers = trim;
        self
    }

    /// Enables or disables parallel recommendation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
