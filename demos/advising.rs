//! Advising walkthrough over a small computer-science catalogue.
//!
//! Run with `cargo run --example advising`. Set `RUST_LOG=advising_kbs=debug`
//! to see every fact as it is recorded.

use advising_kbs::kb::{Fact, KbConfig, KnowledgeBase};
use advising_kbs::KbError;
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 60;

fn build_catalogue() -> Result<KnowledgeBase, KbError> {
    let courses = [
        "Intro to Programming",
        "Discrete Mathematics",
        "Data Structures",
        "Algorithms",
        "Database Systems",
        "Operating Systems",
        "Software Engineering",
        "Computer Networks",
    ];
    let prerequisites = [
        ("Data Structures", "Intro to Programming"),
        ("Algorithms", "Data Structures"),
        ("Algorithms", "Discrete Mathematics"),
        ("Database Systems", "Data Structures"),
        ("Operating Systems", "Algorithms"),
        ("Software Engineering", "Algorithms"),
        ("Software Engineering", "Database Systems"),
        ("Computer Networks", "Operating Systems"),
    ];
    let completions = [
        ("Alice", "Intro to Programming"),
        ("Alice", "Discrete Mathematics"),
        ("Bob", "Intro to Programming"),
        ("Bob", "Discrete Mathematics"),
        ("Bob", "Data Structures"),
        ("Bob", "Algorithms"),
        ("Bob", "Database Systems"),
    ];

    let facts = courses
        .into_iter()
        .map(Fact::course)
        .chain(["Alice", "Bob", "Carol"].into_iter().map(Fact::student))
        .chain(prerequisites.into_iter().map(|(c, p)| Fact::requires(c, p)))
        .chain(completions.into_iter().map(|(s, c)| Fact::completed(s, c)));

    KnowledgeBase::from_facts(KbConfig::strict(), facts)
}

fn print_separator(title: &str) {
    println!("\n{}", "=".repeat(WIDTH));
    println!("  {title}");
    println!("{}", "=".repeat(WIDTH));
}

fn show_eligibility(kb: &KnowledgeBase) -> Result<(), KbError> {
    print_separator("ELIGIBILITY CHECKS");

    let checks = [
        ("Bob", "Operating Systems", "all prerequisites met"),
        ("Alice", "Algorithms", "some prerequisites missing"),
        ("Carol", "Data Structures", "no prerequisites completed"),
    ];

    for (student, course, scenario) in checks {
        let result = kb.eligibility(student, course)?;
        let status = if result.eligible {
            "ELIGIBLE"
        } else {
            "NOT ELIGIBLE"
        };
        println!("\n  {student} -> {course}");
        println!("  Status  : {status}");
        if !result.missing.is_empty() {
            println!("  Missing : {}", result.missing.join(", "));
        }
        println!("  Scenario: {scenario}");
    }
    Ok(())
}

fn show_recommendations(kb: &KnowledgeBase) -> Result<(), KbError> {
    print_separator("COURSE RECOMMENDATIONS");

    for student in kb.students() {
        let report = kb.report(&student)?;
        let completed = if report.completed.is_empty() {
            "(none)".to_string()
        } else {
            report.completed.join(", ")
        };
        let recommended = if report.recommended.is_empty() {
            "(none, complete more prerequisites)".to_string()
        } else {
            report.recommended.join(", ")
        };
        println!("\n  Student    : {}", report.student);
        println!("  Completed  : {completed}");
        println!("  Recommended: {recommended}");
    }
    Ok(())
}

fn main() -> Result<(), KbError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("[ University Advising Knowledge Base: Demo ]");
    let kb = build_catalogue()?;
    show_eligibility(&kb)?;
    show_recommendations(&kb)?;

    println!("\n{}", "=".repeat(WIDTH));
    println!("  Demo complete.");
    println!("{}\n", "=".repeat(WIDTH));
    Ok(())
}
