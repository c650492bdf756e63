//! Knowledge-base system for university course advising.
//!
//! Answers two questions over a small body of facts about students and
//! courses:
//!
//! - **Eligibility**: may a student take a course, and if not, which
//!   prerequisites (direct or transitive) are still missing?
//! - **Recommendation**: which courses is a student eligible for but has
//!   not yet completed?
//!
//! # Architecture
//!
//! Everything lives in an explicit [`kb::KnowledgeBase`] value; there is no
//! global state, so independent knowledge bases can coexist. Loading facts
//! and formatting results are left to callers.
//!
//! ```
//! use advising_kbs::kb::KnowledgeBase;
//!
//! let mut kb = KnowledgeBase::new();
//! kb.add_requires("Operating Systems", "Data Structures").unwrap();
//! kb.add_course("Software Engineering").unwrap();
//! kb.add_completed("Bob", "Data Structures").unwrap();
//! kb.add_completed("Bob", "Intro to Programming").unwrap();
//!
//! assert!(kb.eligibility("Bob", "Operating Systems").unwrap().eligible);
//! assert_eq!(
//!     kb.recommend("Bob").unwrap(),
//!     vec!["Operating Systems", "Software Engineering"]
//! );
//! ```

pub mod error;
pub mod kb;

pub use error::KbError;
