//! End-to-end advising scenarios over the standard course catalogue.

use advising_kbs::kb::{Eligibility, Fact, KbConfig, KnowledgeBase};
use advising_kbs::KbError;

const CATALOGUE: [&str; 8] = [
    "Intro to Programming",
    "Discrete Mathematics",
    "Data Structures",
    "Algorithms",
    "Database Systems",
    "Operating Systems",
    "Software Engineering",
    "Computer Networks",
];

const PREREQUISITES: [(&str, &str); 8] = [
    ("Data Structures", "Intro to Programming"),
    ("Algorithms", "Data Structures"),
    ("Algorithms", "Discrete Mathematics"),
    ("Database Systems", "Data Structures"),
    ("Operating Systems", "Algorithms"),
    ("Software Engineering", "Algorithms"),
    ("Software Engineering", "Database Systems"),
    ("Computer Networks", "Operating Systems"),
];

fn catalogue_facts() -> Vec<Fact> {
    let courses = CATALOGUE.iter().map(|c| Fact::course(*c));
    let students = ["Alice", "Bob", "Carol"].into_iter().map(Fact::student);
    let edges = PREREQUISITES.iter().map(|(c, p)| Fact::requires(*c, *p));
    courses.chain(students).chain(edges).collect()
}

fn strict_catalogue() -> KnowledgeBase {
    KnowledgeBase::from_facts(KbConfig::strict(), catalogue_facts()).unwrap()
}

#[test]
fn test_alice_missing_data_structures() {
    let mut kb = KnowledgeBase::new();
    kb.add_requires("Algorithms", "Data Structures").unwrap();
    kb.add_requires("Data Structures", "Intro to Programming").unwrap();
    kb.add_completed("Alice", "Intro to Programming").unwrap();

    assert_eq!(
        kb.eligibility("Alice", "Algorithms").unwrap(),
        Eligibility {
            eligible: false,
            missing: vec!["Data Structures".to_string()],
        }
    );
}

#[test]
fn test_bob_eligible_for_operating_systems() {
    let mut kb = KnowledgeBase::new();
    kb.add_completed("Bob", "Data Structures").unwrap();
    kb.add_completed("Bob", "Intro to Programming").unwrap();
    kb.add_requires("Operating Systems", "Data Structures").unwrap();
    kb.add_course("Software Engineering").unwrap();

    assert_eq!(
        kb.eligibility("Bob", "Operating Systems").unwrap(),
        Eligibility {
            eligible: true,
            missing: vec![],
        }
    );
    assert_eq!(
        kb.recommend("Bob").unwrap(),
        vec!["Operating Systems", "Software Engineering"]
    );
}

#[test]
fn test_two_course_cycle_terminates() {
    let mut kb = KnowledgeBase::new();
    kb.add_requires("A", "B").unwrap();
    kb.add_requires("B", "A").unwrap();

    let closure: Vec<String> = kb.prerequisites_of("A").unwrap().into_iter().collect();
    assert_eq!(closure, vec!["A", "B"]);

    let result = kb.eligibility("Zed", "A").unwrap();
    assert_eq!(result.missing, vec!["A", "B"]);
    assert!(kb.recommend("Zed").unwrap().is_empty());

    kb.add_completed("Zed", "A").unwrap();
    kb.add_completed("Zed", "B").unwrap();
    assert!(kb.eligibility("Zed", "A").unwrap().eligible);
}

#[test]
fn test_identity_is_case_sensitive() {
    let mut kb = KnowledgeBase::new();
    kb.add_requires("Algorithms", "Data Structures").unwrap();
    kb.add_completed("alice", "data structures").unwrap();

    assert!(!kb.eligibility("alice", "Algorithms").unwrap().eligible);
    assert!(kb.completed_courses("Alice").unwrap().is_empty());
}

#[test]
fn test_missing_sorted_by_byte_order() {
    let mut kb = KnowledgeBase::new();
    for prereq in ["beta", "Gamma", "alpha", "Zeta"] {
        kb.add_requires("Capstone", prereq).unwrap();
    }

    let result = kb.eligibility("Nobody", "Capstone").unwrap();
    assert_eq!(result.missing, vec!["Gamma", "Zeta", "alpha", "beta"]);
}

#[test]
fn test_strict_catalogue_walkthrough() {
    let mut kb = strict_catalogue();

    kb.add_completed("Alice", "Intro to Programming").unwrap();
    kb.add_completed("Alice", "Discrete Mathematics").unwrap();
    for course in [
        "Intro to Programming",
        "Discrete Mathematics",
        "Data Structures",
        "Algorithms",
        "Database Systems",
    ] {
        kb.add_completed("Bob", course).unwrap();
    }

    assert!(kb.eligibility("Bob", "Operating Systems").unwrap().eligible);
    assert_eq!(
        kb.eligibility("Alice", "Algorithms").unwrap().missing,
        vec!["Data Structures"]
    );
    assert_eq!(
        kb.eligibility("Carol", "Data Structures").unwrap().missing,
        vec!["Intro to Programming"]
    );

    assert_eq!(kb.recommend("Alice").unwrap(), vec!["Data Structures"]);
    assert_eq!(
        kb.recommend("Bob").unwrap(),
        vec!["Operating Systems", "Software Engineering"]
    );
    assert_eq!(
        kb.recommend("Carol").unwrap(),
        vec!["Discrete Mathematics", "Intro to Programming"]
    );
}

#[test]
fn test_strict_catalogue_rejects_unknowns() {
    let mut kb = strict_catalogue();

    assert_eq!(
        kb.add_completed("Ghost", "Algorithms"),
        Err(KbError::UnknownStudent("Ghost".into()))
    );
    assert_eq!(
        kb.add_requires("Algorithms", "Quantum Cooking"),
        Err(KbError::UnknownCourse("Quantum Cooking".into()))
    );
    assert_eq!(
        kb.add_requires("Algorithms", "Algorithms"),
        Err(KbError::SelfPrerequisite("Algorithms".into()))
    );
    assert!(matches!(
        kb.recommend("Nobody"),
        Err(KbError::UnknownStudent(_))
    ));
    assert_eq!(kb.requires_count(), PREREQUISITES.len());
}

#[test]
fn test_strict_catalogue_trims_names() {
    let kb = strict_catalogue();
    assert_eq!(
        kb.direct_prerequisites("  Algorithms ").unwrap(),
        vec!["Data Structures", "Discrete Mathematics"]
    );
}

#[test]
fn test_independent_knowledge_bases() {
    let mut first = KnowledgeBase::new();
    let second = KnowledgeBase::new();
    first.add_requires("X", "Y").unwrap();

    assert_eq!(first.courses(), vec!["X", "Y"]);
    assert!(second.courses().is_empty());
}
