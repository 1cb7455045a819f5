use devscout::core::models::{ProjectRecord, ResumeContent};
use devscout::resume_parser::{
    MAX_BULLET_POINTS, default_bullet_points, default_impact_statement, default_readme,
    default_tech_stack, parse_resume_response, parse_sections,
};

fn sample_project() -> ProjectRecord {
    ProjectRecord {
        title: "Budget Buddy".to_string(),
        description: "A personal finance dashboard for tracking spending".to_string(),
        tech_stack: vec![
            "React".to_string(),
            "Node.js".to_string(),
            "PostgreSQL".to_string(),
        ],
        domain: "fintech".to_string(),
        complexity: "intermediate".to_string(),
    }
}

fn assert_invariants(content: &ResumeContent) {
    assert!(!content.bullet_points.is_empty());
    assert!(content.bullet_points.len() <= MAX_BULLET_POINTS);
    assert!(!content.tech_stack.trim().is_empty());
    assert!(!content.impact_statement.trim().is_empty());
    assert!(!content.readme_template.trim().is_empty());
}

const WELL_FORMED: &str = "\
**Bullet Points:**
- Reduced monthly overspending by 20% by building category budgets, resulting in better savings
- Cut dashboard load time by 40% by caching aggregates, resulting in faster insights
- Onboarded 500 users by shipping CSV import, resulting in higher retention

**Tech Stack Summary:**
React for the UI, Node.js for the API and PostgreSQL for storage.

**Impact Statement:**
Helped users understand and control their spending habits.

**README Template:**
# Budget Buddy
A personal finance dashboard.
## Setup
Run npm install and npm start.
";

#[test]
fn test_well_formed_response_is_extracted_verbatim() {
    let content = parse_resume_response(WELL_FORMED, &sample_project());

    assert_eq!(
        content.bullet_points,
        vec![
            "Reduced monthly overspending by 20% by building category budgets, resulting in better savings",
            "Cut dashboard load time by 40% by caching aggregates, resulting in faster insights",
            "Onboarded 500 users by shipping CSV import, resulting in higher retention",
        ]
    );
    assert_eq!(
        content.tech_stack,
        "React for the UI, Node.js for the API and PostgreSQL for storage."
    );
    assert_eq!(
        content.impact_statement,
        "Helped users understand and control their spending habits."
    );
    assert_eq!(
        content.readme_template,
        "# Budget Buddy\nA personal finance dashboard.\n## Setup\nRun npm install and npm start."
    );
    assert_invariants(&content);
}

#[test]
fn test_response_without_headings_falls_back_entirely() {
    let project = sample_project();
    let content = parse_resume_response(
        "I'm sorry, I can't help with that right now.\n- but here is a stray dash line",
        &project,
    );

    assert_eq!(content.bullet_points, default_bullet_points(&project));
    assert_eq!(content.tech_stack, default_tech_stack(&project));
    assert_eq!(content.impact_statement, default_impact_statement(&project));
    assert_eq!(content.readme_template, default_readme(&project));
    assert_invariants(&content);
}

#[test]
fn test_empty_response_falls_back() {
    let content = parse_resume_response("", &sample_project());
    assert_eq!(content.bullet_points.len(), 3);
    assert_eq!(content.tech_stack, "Technologies: React, Node.js, PostgreSQL");
    assert_invariants(&content);
}

#[test]
fn test_mixed_bullet_markers_are_stripped_identically() {
    let parsed = parse_sections("Bullet points\n• First point\n* Second point\n1. Third point\n");
    assert_eq!(
        parsed.bullet_points,
        vec!["First point", "Second point", "Third point"]
    );
}

#[test]
fn test_bullets_are_capped_at_three() {
    let parsed = parse_sections("XYZ bullets\n- one\n- two\n- three\n- four\n5. five\n");
    assert_eq!(parsed.bullet_points, vec!["one", "two", "three"]);
}

#[test]
fn test_marker_only_lines_are_not_bullets() {
    let parsed = parse_sections("Bullet Points\n-\n*   \n2.\n- real\n");
    assert_eq!(parsed.bullet_points, vec!["real"]);
}

#[test]
fn test_partial_response_keeps_found_fields_and_fills_the_rest() {
    let project = sample_project();
    let content = parse_resume_response(
        "Bullet Points:\n- Only one point came back\nImpact:\nSaved time.\n",
        &project,
    );

    assert_eq!(content.bullet_points, vec!["Only one point came back"]);
    assert_eq!(content.impact_statement, "Saved time.");
    assert_eq!(content.tech_stack, default_tech_stack(&project));
    assert_eq!(content.readme_template, default_readme(&project));
    assert_invariants(&content);
}

#[test]
fn test_multi_line_tech_and_impact_are_space_joined() {
    let parsed = parse_sections(
        "Tech Stack:\n  Rust and Tokio  \nfor the backend\n\nImpact Statement\nFaster builds\nfor everyone\n",
    );
    assert_eq!(parsed.tech_stack, "Rust and Tokio for the backend");
    assert_eq!(parsed.impact_statement, "Faster builds for everyone");
}

#[test]
fn test_heading_detection_is_case_insensitive() {
    let parsed = parse_sections("tech STACK\nGo\nreadme\n# Title\n");
    assert_eq!(parsed.tech_stack, "Go");
    assert_eq!(parsed.readme_template, "# Title");
}

#[test]
fn test_fallbacks_with_sparse_project_are_non_empty() {
    let project = ProjectRecord::default();
    let content = parse_resume_response("nothing useful", &project);

    assert_invariants(&content);
    assert!(content.readme_template.starts_with("# Project"));
    assert_eq!(content.tech_stack, "Technologies: modern tooling");
}

#[test]
fn test_default_bullets_reference_project_fields() {
    let bullets = default_bullet_points(&sample_project());
    assert_eq!(bullets.len(), 3);
    assert!(bullets.iter().any(|b| b.contains("fintech")));
    assert!(bullets.iter().any(|b| b.contains("React, Node.js, PostgreSQL")));
    assert!(bullets.iter().any(|b| b.contains("intermediate")));
    assert!(bullets.iter().all(|b| b.contains(" by ") && b.contains("resulting in")));
}

#[test]
fn test_default_readme_has_markdown_sections() {
    let readme = default_readme(&sample_project());
    assert!(readme.starts_with("# Budget Buddy\n"));
    assert!(readme.contains("A personal finance dashboard for tracking spending"));
    assert!(readme.contains("## Features"));
    assert!(readme.contains("## Tech Stack"));
    assert!(readme.contains("- PostgreSQL"));
}
