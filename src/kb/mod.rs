//! Course-prerequisite knowledge base.
//!
//! Stores two base relations and derives two queries from them:
//!
//! - **requires(course, prerequisite)**: directed prerequisite edges.
//! - **completed(student, course)**: courses a student has finished.
//! - **eligibility(student, course)**: whether every transitive prerequisite
//!   of the course is completed, and which ones are missing.
//! - **recommend(student)**: every known course the student has not
//!   completed but is eligible for.
//!
//! # Design
//!
//! Eligibility is never stored; it is recomputed from the relations on every
//! query. A course becomes known as soon as any fact mentions it, so an
//! unknown student or course is simply one without facts. Cyclic prerequisite
//! graphs are accepted and handled by the closure traversal in
//! [`PrerequisiteGraph`].
//!
//! All result sequences are in case-sensitive lexical order.

mod config;
mod engine;
mod graph;
mod types;

pub use config::KbConfig;
pub use engine::KnowledgeBase;
pub use graph::PrerequisiteGraph;
pub use types::{AdvisingReport, Eligibility, Fact};
