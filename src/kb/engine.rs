//! Knowledge store and inference engine.
//!
//! Holds the `requires` and `completed` relations plus the universe of known
//! courses, and answers the derived eligibility and recommendation queries.
//! Every query is a pure function of the stored facts; only the `add_*`
//! methods mutate state.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use super::config::KbConfig;
use super::graph::PrerequisiteGraph;
use super::types::{AdvisingReport, Eligibility, Fact};
use crate::error::KbError;

/// In-memory course knowledge base.
///
/// The engine provides no internal synchronization. Share it across threads
/// behind a lock if more than one caller may add facts.
///
/// # Examples
///
/// ```
/// use advising_kbs::kb::KnowledgeBase;
///
/// let mut kb = KnowledgeBase::new();
/// kb.add_requires("Algorithms", "Data Structures").unwrap();
/// kb.add_requires("Data Structures", "Intro to Programming").unwrap();
/// kb.add_completed("Alice", "Intro to Programming").unwrap();
///
/// let result = kb.eligibility("Alice", "Algorithms").unwrap();
/// assert!(!result.eligible);
/// assert_eq!(result.missing, vec!["Data Structures"]);
///
/// assert_eq!(kb.recommend("Alice").unwrap(), vec!["Data Structures"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    config: KbConfig,
    requires: PrerequisiteGraph,
    completed: BTreeMap<String, BTreeSet<String>>,
    /// Every course mentioned by any fact or declaration.
    courses: BTreeSet<String>,
    declared_courses: BTreeSet<String>,
    declared_students: BTreeSet<String>,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty knowledge base with the given configuration.
    pub fn with_config(config: KbConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Builds a knowledge base from a batch of facts.
    pub fn from_facts<I>(config: KbConfig, facts: I) -> Result<Self, KbError>
    where
        I: IntoIterator<Item = Fact>,
    {
        let mut kb = Self::with_config(config);
        kb.extend_facts(facts)?;
        Ok(kb)
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &KbConfig {
        &self.config
    }

    // ---- Population ----

    /// Declares a course. Idempotent.
    pub fn add_course(&mut self, course: &str) -> Result<(), KbError> {
        let course = self.identifier("course", course)?;
        if self.declared_courses.insert(course.to_owned()) {
            debug!(course, "declared course");
        }
        self.courses.insert(course.to_owned());
        Ok(())
    }

    /// Declares a student. Idempotent.
    pub fn add_student(&mut self, student: &str) -> Result<(), KbError> {
        let student = self.identifier("student", student)?;
        if self.declared_students.insert(student.to_owned()) {
            debug!(student, "declared student");
        }
        Ok(())
    }

    /// Records that `course` requires `prerequisite`.
    ///
    /// Idempotent. Cycles are accepted; traversal deals with them.
    pub fn add_requires(&mut self, course: &str, prerequisite: &str) -> Result<(), KbError> {
        let course = self.known_course("course", course)?;
        let prerequisite = self.known_course("prerequisite", prerequisite)?;
        if course == prerequisite && !self.config.allow_self_prerequisite {
            return Err(KbError::SelfPrerequisite(course.to_owned()));
        }

        if self.requires.insert(course, prerequisite) {
            debug!(course, prerequisite, "recorded requires edge");
        }
        self.courses.insert(course.to_owned());
        self.courses.insert(prerequisite.to_owned());
        Ok(())
    }

    /// Records that `student` has completed `course`. Idempotent.
    pub fn add_completed(&mut self, student: &str, course: &str) -> Result<(), KbError> {
        let student = self.known_student(student)?;
        let course = self.known_course("course", course)?;

        let inserted = self
            .completed
            .entry(student.to_owned())
            .or_default()
            .insert(course.to_owned());
        if inserted {
            debug!(student, course, "recorded completion");
        }
        self.courses.insert(course.to_owned());
        Ok(())
    }

    /// Applies a single fact.
    pub fn assert_fact(&mut self, fact: Fact) -> Result<(), KbError> {
        match fact {
            Fact::Course { name } => self.add_course(&name),
            Fact::Student { name } => self.add_student(&name),
            Fact::Requires {
                course,
                prerequisite,
            } => self.add_requires(&course, &prerequisite),
            Fact::Completed { student, course } => self.add_completed(&student, &course),
        }
    }

    /// Applies a batch of facts atomically.
    ///
    /// If any fact is rejected, the knowledge base is left exactly as it was.
    pub fn extend_facts<I>(&mut self, facts: I) -> Result<(), KbError>
    where
        I: IntoIterator<Item = Fact>,
    {
        let mut staged = self.clone();
        for fact in facts {
            staged.assert_fact(fact)?;
        }
        *self = staged;
        Ok(())
    }

    // ---- Inference ----

    /// Full transitive prerequisite set of `course`.
    ///
    /// Excludes `course` itself unless a cycle leads back to it. Courses
    /// without recorded prerequisites yield an empty set.
    pub fn prerequisites_of(&self, course: &str) -> Result<BTreeSet<String>, KbError> {
        let course = self.known_course("course", course)?;
        Ok(self.requires.closure(course))
    }

    /// Whether `student` may take `course`, and which prerequisites are
    /// missing if not.
    pub fn eligibility(&self, student: &str, course: &str) -> Result<Eligibility, KbError> {
        let student = self.known_student(student)?;
        let course = self.known_course("course", course)?;

        let completed = self.completed.get(student);
        let missing: Vec<String> = self
            .requires
            .closure(course)
            .into_iter()
            .filter(|prereq| !completed.is_some_and(|done| done.contains(prereq)))
            .collect();

        let result = Eligibility::from_missing(missing);
        trace!(student, course, eligible = result.eligible, "eligibility evaluated");
        Ok(result)
    }

    /// Courses `student` has not completed but is eligible for, sorted.
    pub fn recommend(&self, student: &str) -> Result<Vec<String>, KbError> {
        let student = self.known_student(student)?;
        let empty = BTreeSet::new();
        let completed = self.completed.get(student).unwrap_or(&empty);

        let candidates: Vec<&str> = self
            .courses
            .iter()
            .filter(|course| !completed.contains(*course))
            .map(String::as_str)
            .collect();

        let recommended = self.select_eligible(candidates, completed);
        trace!(student, count = recommended.len(), "recommendations computed");
        Ok(recommended)
    }

    /// Completed courses and recommendations for `student`.
    pub fn report(&self, student: &str) -> Result<AdvisingReport, KbError> {
        Ok(AdvisingReport {
            student: self.known_student(student)?.to_owned(),
            completed: self.completed_courses(student)?,
            recommended: self.recommend(student)?,
        })
    }

    // ---- Introspection ----

    /// The universe of known courses, sorted.
    pub fn courses(&self) -> Vec<String> {
        self.courses.iter().cloned().collect()
    }

    /// Declared students and every student with a completion, sorted.
    pub fn students(&self) -> Vec<String> {
        self.declared_students
            .iter()
            .chain(self.completed.keys())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Courses `student` has completed, sorted.
    pub fn completed_courses(&self, student: &str) -> Result<Vec<String>, KbError> {
        let student = self.known_student(student)?;
        Ok(self
            .completed
            .get(student)
            .map(|done| done.iter().cloned().collect())
            .unwrap_or_default())
    }

    /// One-step prerequisites of `course`, sorted.
    pub fn direct_prerequisites(&self, course: &str) -> Result<Vec<String>, KbError> {
        let course = self.known_course("course", course)?;
        Ok(self
            .requires
            .direct(course)
            .map(|prereqs| prereqs.iter().cloned().collect())
            .unwrap_or_default())
    }

    /// Number of distinct `requires` edges.
    pub fn requires_count(&self) -> usize {
        self.requires.edge_count()
    }

    /// Number of distinct `completed` facts.
    pub fn completed_count(&self) -> usize {
        self.completed.values().map(BTreeSet::len).sum()
    }

    /// Snapshot of every stored fact.
    ///
    /// Declarations come first, then `requires` edges, then completions, each
    /// group sorted. Feeding the result to [`KnowledgeBase::from_facts`] with
    /// the same configuration reproduces this knowledge base.
    pub fn facts(&self) -> Vec<Fact> {
        let courses = self.declared_courses.iter().map(Fact::course);
        let students = self.declared_students.iter().map(Fact::student);
        let requires = self
            .requires
            .edges()
            .map(|(course, prereq)| Fact::requires(course, prereq));
        let completed = self.completed.iter().flat_map(|(student, done)| {
            done.iter()
                .map(move |course| Fact::completed(student.as_str(), course.as_str()))
        });

        courses
            .chain(students)
            .chain(requires)
            .chain(completed)
            .collect()
    }

    // ---- Helpers ----

    #[cfg(feature = "parallel")]
    fn select_eligible(&self, candidates: Vec<&str>, completed: &BTreeSet<String>) -> Vec<String> {
        use rayon::prelude::*;

        if self.config.parallel {
            candidates
                .into_par_iter()
                .filter(|course| self.requires.satisfied_by(course, completed))
                .map(str::to_owned)
                .collect()
        } else {
            self.select_eligible_sequential(candidates, completed)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn select_eligible(&self, candidates: Vec<&str>, completed: &BTreeSet<String>) -> Vec<String> {
        self.select_eligible_sequential(candidates, completed)
    }

    fn select_eligible_sequential(
        &self,
        candidates: Vec<&str>,
        completed: &BTreeSet<String>,
    ) -> Vec<String> {
        candidates
            .into_iter()
            .filter(|course| self.requires.satisfied_by(course, completed))
            .map(str::to_owned)
            .collect()
    }

    /// Validates (and optionally trims) a raw identifier.
    fn identifier<'a>(&self, field: &'static str, raw: &'a str) -> Result<&'a str, KbError> {
        let id = if self.config.trim_identifiers {
            raw.trim()
        } else {
            raw
        };
        if id.is_empty() {
            return Err(KbError::empty(field));
        }
        Ok(id)
    }

    fn known_course<'a>(&self, field: &'static str, raw: &'a str) -> Result<&'a str, KbError> {
        let course = self.identifier(field, raw)?;
        if self.config.require_declared && !self.declared_courses.contains(course) {
            return Err(KbError::UnknownCourse(course.to_owned()));
        }
        Ok(course)
    }

    fn known_student<'a>(&self, raw: &'a str) -> Result<&'a str, KbError> {
        let student = self.identifier("student", raw)?;
        if self.config.require_declared && !self.declared_students.contains(student) {
            return Err(KbError::UnknownStudent(student.to_owned()));
        }
        Ok(student)
    }
}
