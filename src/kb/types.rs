//! Facts and query results.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single base fact understood by the knowledge base.
///
/// `Requires` and `Completed` are the two stored relations; `Course` and
/// `Student` declare an entity without attaching any relation to it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Fact {
    /// Declares a course.
    Course {
        /// Course name.
        name: String,
    },
    /// Declares a student.
    Student {
        /// Student name.
        name: String,
    },
    /// `course` depends on `prerequisite`.
    Requires {
        /// The dependent course.
        course: String,
        /// The course that must be completed first.
        prerequisite: String,
    },
    /// `student` has finished `course`.
    Completed {
        /// The student.
        student: String,
        /// The finished course.
        course: String,
    },
}

impl Fact {
    /// Shorthand for [`Fact::Course`].
    pub fn course(name: impl Into<String>) -> Self {
        Fact::Course { name: name.into() }
    }

    /// Shorthand for [`Fact::Student`].
    pub fn student(name: impl Into<String>) -> Self {
        Fact::Student { name: name.into() }
    }

    /// Shorthand for [`Fact::Requires`].
    pub fn requires(course: impl Into<String>, prerequisite: impl Into<String>) -> Self {
        Fact::Requires {
            course: course.into(),
            prerequisite: prerequisite.into(),
        }
    }

    /// Shorthand for [`Fact::Completed`].
    pub fn completed(student: impl Into<String>, course: impl Into<String>) -> Self {
        Fact::Completed {
            student: student.into(),
            course: course.into(),
        }
    }
}

/// Outcome of an eligibility query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Eligibility {
    /// True iff every transitive prerequisite has been completed.
    pub eligible: bool,
    /// Prerequisites not yet completed, in lexical order. Empty when eligible.
    pub missing: Vec<String>,
}

impl Eligibility {
    pub(crate) fn from_missing(missing: Vec<String>) -> Self {
        Self {
            eligible: missing.is_empty(),
            missing,
        }
    }
}

/// Per-student advising summary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdvisingReport {
    /// The student the report is about.
    pub student: String,
    /// Completed courses, sorted.
    pub completed: Vec<String>,
    /// Courses the student may take next, sorted.
    pub recommended: Vec<String>,
}
