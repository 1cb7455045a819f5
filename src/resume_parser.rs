//! Turns a free-form model reply into [`ResumeContent`].
//!
//! The reply is scanned once, line by line. Heading lines switch the current
//! [`Section`]; other lines are collected into that section. Fields that come
//! out empty are filled from the project itself, so parsing never fails.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::models::{ProjectRecord, ResumeContent};

pub const MAX_BULLET_POINTS: usize = 3;

static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-•*]|\d+\.)\s*").expect("static regex compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    None,
    Bullets,
    Tech,
    Impact,
    Readme,
}

impl Section {
    /// The section a heading line opens, if the line is a heading.
    ///
    /// Matching is by substring and checked in a fixed order, so a line such
    /// as "Impact of the tech stack" opens `Tech`.
    #[must_use]
    pub fn from_heading(line: &str) -> Option<Self> {
        let lowered = line.to_lowercase();
        if lowered.contains("bullet") || lowered.contains("xyz") {
            Some(Self::Bullets)
        } else if lowered.contains("tech stack") {
            Some(Self::Tech)
        } else if lowered.contains("impact") {
            Some(Self::Impact)
        } else if lowered.contains("readme") {
            Some(Self::Readme)
        } else {
            None
        }
    }
}

/// Raw section text collected from a reply, before any fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSections {
    pub bullet_points: Vec<String>,
    pub tech_stack: String,
    pub impact_statement: String,
    pub readme_template: String,
}

/// Strip a leading `-`, `•`, `*` or `N.` marker. `None` if the line has none.
#[must_use]
pub fn strip_bullet_marker(line: &str) -> Option<&str> {
    BULLET_MARKER
        .find(line)
        .map(|m| line[m.end()..].trim())
}

#[must_use]
pub fn parse_sections(text: &str) -> ParsedSections {
    let mut parsed = ParsedSections::default();
    let mut tech = Vec::new();
    let mut impact = Vec::new();
    let mut readme = Vec::new();
    let mut section = Section::None;

    for raw in text.lines() {
        let line = raw.trim();

        if let Some(next) = Section::from_heading(line) {
            section = next;
            continue;
        }

        if line.is_empty() {
            continue;
        }

        match section {
            Section::Bullets => {
                if let Some(point) = strip_bullet_marker(line)
                    && !point.is_empty()
                    && parsed.bullet_points.len() < MAX_BULLET_POINTS
                {
                    parsed.bullet_points.push(point.to_string());
                }
            }
            Section::Tech => tech.push(line),
            Section::Impact => impact.push(line),
            Section::Readme => readme.push(line),
            Section::None => {}
        }
    }

    parsed.tech_stack = tech.join(" ");
    parsed.impact_statement = impact.join(" ");
    parsed.readme_template = readme.join("\n");
    parsed
}

/// Parse a reply and fill every empty field from `project`.
#[must_use]
pub fn parse_resume_response(text: &str, project: &ProjectRecord) -> ResumeContent {
    let parsed = parse_sections(text);

    ResumeContent {
        bullet_points: if parsed.bullet_points.is_empty() {
            default_bullet_points(project)
        } else {
            parsed.bullet_points
        },
        tech_stack: non_empty_or(parsed.tech_stack, || default_tech_stack(project)),
        impact_statement: non_empty_or(parsed.impact_statement, || {
            default_impact_statement(project)
        }),
        readme_template: non_empty_or(parsed.readme_template, || default_readme(project)),
    }
}

fn non_empty_or(value: String, fallback: impl FnOnce() -> String) -> String {
    if value.trim().is_empty() {
        fallback()
    } else {
        value
    }
}

fn tech_or_placeholder(project: &ProjectRecord) -> String {
    let joined = project.joined_tech_stack();
    if joined.is_empty() {
        "modern tooling".to_string()
    } else {
        joined
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { placeholder } else { trimmed }
}

#[must_use]
pub fn default_bullet_points(project: &ProjectRecord) -> Vec<String> {
    let domain = or_placeholder(&project.domain, "software");
    let complexity = or_placeholder(&project.complexity, "production");
    let tech = tech_or_placeholder(project);

    vec![
        format!(
            "Developed a {domain} application by implementing core features with {tech}, \
            resulting in a functional and maintainable product"
        ),
        format!(
            "Designed a scalable architecture by applying {complexity}-level engineering practices, \
            resulting in clean, modular and testable code"
        ),
        format!(
            "Improved user experience by building responsive interfaces and efficient data flows, \
            resulting in a polished {domain} solution"
        ),
    ]
}

#[must_use]
pub fn default_tech_stack(project: &ProjectRecord) -> String {
    format!("Technologies: {}", tech_or_placeholder(project))
}

#[must_use]
pub fn default_impact_statement(project: &ProjectRecord) -> String {
    let title = or_placeholder(&project.title, "This project");
    let domain = or_placeholder(&project.domain, "software");
    let complexity = or_placeholder(&project.complexity, "production");

    format!(
        "{title} demonstrates end-to-end delivery of a {complexity}-level {domain} solution, \
        showcasing practical problem-solving and modern development skills"
    )
}

#[must_use]
pub fn default_readme(project: &ProjectRecord) -> String {
    let title = or_placeholder(&project.title, "Project");
    let description = or_placeholder(&project.description, "A software project.");

    let tech_lines = if project.joined_tech_stack().is_empty() {
        "- To be documented".to_string()
    } else {
        project
            .tech_stack
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| format!("- {t}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "# {title}\n\
        \n\
        {description}\n\
        \n\
        ## Features\n\
        \n\
        - Core functionality for {domain} use cases\n\
        - Clean, modular code structure\n\
        - Easy local setup\n\
        \n\
        ## Tech Stack\n\
        \n\
        {tech_lines}\n",
        domain = or_placeholder(&project.domain, "general"),
    )
}
